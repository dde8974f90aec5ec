//! Positional digit helpers for arbitrary precision integers.
//!
//! Digit lists are always least-significant first. Digits are stored as `u8`
//! so any radix in `2..=256` is supported.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::MnemonicError;

fn check_radix(base: u32) -> Result<(), MnemonicError> {
    if (2..=256).contains(&base) {
        Ok(())
    } else {
        Err(MnemonicError::InvalidRadix(base))
    }
}

/// Split `n` into digits of `base`, least-significant first.
///
/// Zero yields an empty list; callers that need a fixed width pad it
/// themselves.
pub fn to_digits(n: &BigUint, base: u32) -> Result<Vec<u8>, MnemonicError> {
    check_radix(base)?;
    if n.is_zero() {
        return Ok(Vec::new());
    }
    Ok(n.to_radix_le(base))
}

/// Inverse of [`to_digits`]. Trailing (high-order) zeros are accepted.
pub fn from_digits(digits: &[u8], base: u32) -> Result<BigUint, MnemonicError> {
    check_radix(base)?;
    if let Some(&digit) = digits.iter().find(|&&d| u32::from(d) >= base) {
        return Err(MnemonicError::InvalidDigit { digit, base });
    }
    BigUint::from_radix_le(digits, base).ok_or(MnemonicError::InvalidRadix(base))
}

/// True if `n` is an exact power of `base`, i.e. the values `0..n` exactly
/// fill some whole number of digit positions.
///
/// `1` is `base^0` and therefore full in every base.
pub fn is_full_base(n: u64, base: u64) -> bool {
    if n == 0 || base < 2 {
        return false;
    }
    let mut rest = n;
    while rest % base == 0 {
        rest /= base;
    }
    rest == 1
}

/// `floor(log_base(n))` without floating point.
pub fn int_log(n: u64, base: u64) -> u32 {
    if n == 0 || base < 2 {
        return 0;
    }
    n.ilog(base)
}

/// Render a least-significant-first digit list most-significant first using
/// `0-9A-Z`. Purely for display.
pub fn format_digits(digits: &[u8]) -> String {
    if digits.is_empty() {
        return "0".to_string();
    }
    digits
        .iter()
        .rev()
        .map(|&d| {
            char::from_digit(u32::from(d), 36)
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('?')
        })
        .collect()
}
