use primitive_types::U256;

const WEI_PER_UNIT_DECIMALS: usize = 18;

/// Formats a wei amount as native-currency units with an exact decimal
/// fraction. Pure integer division/remainder over U256; floating point
/// would lose precision on amounts like 10^18 - 1.
pub fn format_wei(amount: U256) -> String {
    let base = U256::exp10(WEI_PER_UNIT_DECIMALS);
    let whole = amount / base;
    let frac = amount % base;

    if frac.is_zero() {
        return whole.to_string();
    }

    let frac_digits = format!("{:0>width$}", frac.to_string(), width = WEI_PER_UNIT_DECIMALS);
    format!("{}.{}", whole, frac_digits.trim_end_matches('0'))
}

/// Hex-quantity form the provider expects for a transaction's value field.
pub fn wei_to_hex(amount: U256) -> String {
    format!("0x{:x}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(s: &str) -> U256 {
        U256::from_dec_str(s).unwrap()
    }

    #[test]
    fn one_unit_formats_exactly() {
        assert_eq!(format_wei(wei("1000000000000000000")), "1");
    }

    #[test]
    fn zero_formats_as_zero() {
        assert_eq!(format_wei(U256::zero()), "0");
    }

    #[test]
    fn smallest_fraction_is_exact() {
        assert_eq!(format_wei(wei("1")), "0.000000000000000001");
    }

    #[test]
    fn no_float_artifacts_below_one_unit() {
        assert_eq!(format_wei(wei("999999999999999999")), "0.999999999999999999");
    }

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_wei(wei("1500000000000000000")), "1.5");
        assert_eq!(format_wei(wei("20000000000000000000")), "20");
    }

    #[test]
    fn large_amounts_keep_full_precision() {
        assert_eq!(
            format_wei(wei("123456000000000000000001")),
            "123456.000000000000000001"
        );
    }

    #[test]
    fn hex_quantity_form() {
        assert_eq!(wei_to_hex(U256::zero()), "0x0");
        assert_eq!(wei_to_hex(wei("1000000000000000000")), "0xde0b6b3a7640000");
    }
}
