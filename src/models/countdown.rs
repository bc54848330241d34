/// Seconds until the sale opens. Negative means the sale already started.
pub fn remaining_seconds(sale_start_unix: i64, now_unix: i64) -> i64 {
    sale_start_unix - now_unix
}

/// Display rule at the zero boundary: a negative remainder renders as an
/// open sale, never as a negative number. None means the on-chain start
/// time has not loaded yet.
pub fn format_countdown(remaining: Option<i64>) -> String {
    match remaining {
        None => "—".to_string(),
        Some(r) if r < 0 => "sale open".to_string(),
        Some(r) => r.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_per_second() {
        let now = 1_700_000_000;
        let start = now + 100;
        assert_eq!(remaining_seconds(start, now), 100);
        assert_eq!(remaining_seconds(start, now + 1), 99);
    }

    #[test]
    fn goes_negative_once_sale_started() {
        let now = 1_700_000_000;
        let start = now + 100;
        assert!(remaining_seconds(start, now + 101) <= -1);
    }

    #[test]
    fn negative_renders_sale_open() {
        assert_eq!(format_countdown(Some(-1)), "sale open");
        assert_eq!(format_countdown(Some(-9999)), "sale open");
    }

    #[test]
    fn zero_is_not_open_yet() {
        assert_eq!(format_countdown(Some(0)), "0");
    }

    #[test]
    fn unknown_start_renders_placeholder() {
        assert_eq!(format_countdown(None), "—");
    }
}
