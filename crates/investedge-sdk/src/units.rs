use alloy::primitives::U256;
use alloy::primitives::utils::parse_ether;

use crate::error::{Error, Result};

/// Decimals of the native currency (wei per ether = 10^18).
pub const ETHER_DECIMALS: usize = 18;

fn wei_per_ether() -> U256 {
    U256::from(1_000_000_000_000_000_000u64)
}

/// Render a wei amount as an ether decimal string.
///
/// Exact integer scaling; the fractional part keeps only significant digits,
/// so `1_500_000_000_000_000_000` renders as `"1.5"` and whole amounts carry
/// no decimal point.
pub fn format_ether(wei: U256) -> String {
    let (whole, fraction) = wei.div_rem(wei_per_ether());
    if fraction.is_zero() {
        return whole.to_string();
    }
    let padded = format!("{:0>width$}", fraction.to_string(), width = ETHER_DECIMALS);
    format!("{whole}.{}", padded.trim_end_matches('0'))
}

/// Parse an ether decimal string (as typed into the creation form) into wei.
pub fn parse_ether_amount(amount: &str) -> Result<U256> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidAmount("amount is empty".to_string()));
    }
    if trimmed.starts_with('-') {
        return Err(Error::InvalidAmount(format!("{trimmed}: must not be negative")));
    }
    parse_ether(trimmed).map_err(|e| Error::InvalidAmount(format!("{trimmed}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(raw: &str) -> U256 {
        raw.parse().unwrap()
    }

    #[test]
    fn formats_fractional_amounts() {
        assert_eq!(format_ether(wei("1500000000000000000")), "1.5");
        assert_eq!(format_ether(wei("1")), "0.000000000000000001");
        assert_eq!(format_ether(wei("123456789012345678901")), "123.456789012345678901");
    }

    #[test]
    fn formats_whole_amounts_without_point() {
        assert_eq!(format_ether(wei("2000000000000000000")), "2");
        assert_eq!(format_ether(U256::ZERO), "0");
        assert_eq!(format_ether(wei("1000000000000000000000000")), "1000000");
    }

    #[test]
    fn formats_values_beyond_u128() {
        let huge = U256::MAX;
        let rendered = format_ether(huge);
        let (whole, fraction) = rendered.split_once('.').unwrap();
        assert_eq!(whole, (U256::MAX / wei_per_ether()).to_string());
        assert!(!fraction.ends_with('0'));
    }

    #[test]
    fn parses_form_amounts() {
        assert_eq!(parse_ether_amount("1.5").unwrap(), wei("1500000000000000000"));
        assert_eq!(parse_ether_amount(" 2 ").unwrap(), wei("2000000000000000000"));
        assert!(parse_ether_amount("").is_err());
        assert!(parse_ether_amount("one").is_err());
        assert!(parse_ether_amount("-1").is_err());
    }
}
