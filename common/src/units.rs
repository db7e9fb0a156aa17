// Conversions between wei (the on-chain integer unit) and LYX (display unit).
// All math is done on U256 so ticket prices and pools never lose precision;
// f64 is only produced at the very end for display math.

use primitive_types::U256;

use crate::{config::COIN_DECIMALS, error::UnitError};

// 1 LYX = 10^18 wei
pub const WEI_PER_LYX: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// Parse a decimal LYX amount such as `"1.5"` into wei
pub fn parse_lyx(value: &str) -> Result<U256, UnitError> {
    let value = value.trim();
    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (value, ""),
    };

    if integer.is_empty() && fraction.is_empty() {
        return Err(UnitError::Empty);
    }

    if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(UnitError::InvalidDigit);
    }

    if fraction.len() > COIN_DECIMALS as usize {
        return Err(UnitError::TooManyDecimals(COIN_DECIMALS));
    }

    let integer = if integer.is_empty() {
        U256::zero()
    } else {
        // Only digits remain, so any failure is a value too large for 256 bits
        U256::from_dec_str(integer).map_err(|_| UnitError::Overflow)?
    };

    let fraction = if fraction.is_empty() {
        U256::zero()
    } else {
        let padded = format!("{:0<width$}", fraction, width = COIN_DECIMALS as usize);
        U256::from_dec_str(&padded).map_err(|_| UnitError::Overflow)?
    };

    integer
        .checked_mul(WEI_PER_LYX)
        .and_then(|wei| wei.checked_add(fraction))
        .ok_or(UnitError::Overflow)
}

// Integer part and the 18 fraction digits of a wei amount
fn split_wei(value: U256) -> (U256, String) {
    let (integer, fraction) = value.div_mod(WEI_PER_LYX);
    let fraction = format!(
        "{:0>width$}",
        fraction.to_string(),
        width = COIN_DECIMALS as usize
    );
    (integer, fraction)
}

/// Format a wei amount as LYX with full precision and no trailing zeros
pub fn format_wei(value: U256) -> String {
    let (integer, fraction) = split_wei(value);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

/// Format a wei amount as LYX with exactly `precision` decimals.
///
/// Extra digits are truncated, never rounded up, so the displayed value
/// is never more than what is held on chain.
pub fn format_wei_fixed(value: U256, precision: usize) -> String {
    let (integer, fraction) = split_wei(value);
    if precision == 0 {
        return integer.to_string();
    }

    let kept = &fraction[..precision.min(fraction.len())];
    format!("{}.{:0<width$}", integer, kept, width = precision)
}

/// Approximate LYX value of a wei amount, for display math only
pub fn wei_to_lyx_f64(value: U256) -> f64 {
    // format_wei always yields a plain decimal that f64 can parse
    format_wei(value).parse().unwrap_or_default()
}

/// Total price of `count` tickets
pub fn ticket_cost(ticket_price: U256, count: u64) -> Result<U256, UnitError> {
    ticket_price
        .checked_mul(U256::from(count))
        .ok_or(UnitError::Overflow)
}
