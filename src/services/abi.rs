// ============================================================================
// ABI HELPERS - calldata building and return-word decoding
// ============================================================================
// The contract surface is fixed and tiny, so this covers exactly what the
// read/write layers need: keccak selectors, 32-byte-padded args, and single
// return words.
// ============================================================================

use primitive_types::U256;
use sha3::{Digest, Keccak256};

use crate::models::Address;

/// First 4 bytes of keccak-256 of the canonical signature, hex-encoded.
pub fn selector(signature: &str) -> String {
    let mut hasher = Keccak256::new();
    hasher.update(signature.as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..4])
}

/// Address argument, left-padded to a 32-byte word.
pub fn encode_address_arg(address: &Address) -> String {
    format!("{:0>64}", address.hex_body())
}

/// Unsigned integer argument as a 32-byte word.
pub fn encode_uint_arg(value: U256) -> String {
    format!("{:0>64}", format!("{:x}", value))
}

/// Full calldata: 0x + selector + concatenated 32-byte words.
pub fn call_data(signature: &str, args: &[String]) -> String {
    let mut data = String::from("0x");
    data.push_str(&selector(signature));
    for arg in args {
        data.push_str(arg);
    }
    data
}

fn strip_result(result: &str) -> Result<&str, String> {
    let body = result.strip_prefix("0x").unwrap_or(result);
    if body.is_empty() {
        return Err("eth_call returned no data".to_string());
    }
    Ok(body)
}

pub fn decode_uint(result: &str) -> Result<U256, String> {
    let body = strip_result(result)?;
    U256::from_str_radix(body, 16).map_err(|e| format!("Invalid uint word {:?}: {}", result, e))
}

pub fn decode_bool(result: &str) -> Result<bool, String> {
    Ok(!decode_uint(result)?.is_zero())
}

pub fn decode_address(result: &str) -> Result<Address, String> {
    let body = strip_result(result)?;
    if body.len() < 40 {
        return Err(format!("Result too short for an address: {:?}", result));
    }
    Address::parse(&format!("0x{}", &body[body.len() - 40..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_selectors() {
        assert_eq!(selector("totalSupply()"), "18160ddd");
        assert_eq!(selector("balanceOf(address)"), "70a08231");
        assert_eq!(selector("owner()"), "8da5cb5b");
        assert_eq!(selector("mint()"), "1249c58b");
    }

    #[test]
    fn address_arg_is_left_padded() {
        let addr = Address::parse("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap();
        let word = encode_address_arg(&addr);
        assert_eq!(word.len(), 64);
        assert_eq!(
            word,
            "000000000000000000000000f39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn uint_arg_is_a_full_word() {
        assert_eq!(encode_uint_arg(U256::from(1)).len(), 64);
        assert_eq!(
            encode_uint_arg(U256::from(0x20u64)),
            "0000000000000000000000000000000000000000000000000000000000000020"
        );
    }

    #[test]
    fn call_data_concatenates_selector_and_args() {
        let addr = Address::parse("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap();
        let data = call_data("balanceOf(address)", &[encode_address_arg(&addr)]);
        assert!(data.starts_with("0x70a08231"));
        assert_eq!(data.len(), 2 + 8 + 64);
    }

    #[test]
    fn decodes_uint_words() {
        assert_eq!(
            decode_uint("0x0000000000000000000000000000000000000000000000000000000000000007")
                .unwrap(),
            U256::from(7)
        );
        assert!(decode_uint("0x").is_err());
    }

    #[test]
    fn decodes_bool_words() {
        assert!(decode_bool("0x0000000000000000000000000000000000000000000000000000000000000001")
            .unwrap());
        assert!(!decode_bool("0x0000000000000000000000000000000000000000000000000000000000000000")
            .unwrap());
    }

    #[test]
    fn decodes_address_words() {
        let word = "0x000000000000000000000000f39fd6e51aad88f6f4ce6ab8827279cfffb92266";
        assert_eq!(
            decode_address(word).unwrap().as_str(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }
}
