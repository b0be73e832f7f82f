//! CAS registry number formatting.
//!
//! A CAS number is written `<prefix>-<2 digits>-<check digit>`. Catalogs store
//! it as a flat integer (`7732185` for water), so the hyphens are restored by
//! position from the right.

use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};

/// Identifiers shorter than this cannot carry a non-empty prefix.
pub const MIN_CAS_DIGITS: usize = 4;

/// What to do with identifiers shorter than [`MIN_CAS_DIGITS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ShortIdPolicy {
    /// Fail with `InvalidIdentifier`.
    #[default]
    Reject,
    /// Slice anyway, clamping at the start of the string (`5` becomes `--5`).
    Truncate,
}

/// Formats `cas_id` as a hyphenated CAS number.
///
/// # Errors
///
/// Returns `EtlError::InvalidIdentifier` for identifiers with fewer than
/// four digits when `policy` is [`ShortIdPolicy::Reject`].
pub fn format_cas_number(cas_id: u64, policy: ShortIdPolicy) -> Result<String> {
    let digits = cas_id.to_string();

    if digits.len() < MIN_CAS_DIGITS && policy == ShortIdPolicy::Reject {
        return Err(EtlError::InvalidIdentifier {
            reason: format!(
                "expected at least {} digits, found {}",
                MIN_CAS_DIGITS,
                digits.len()
            ),
            value: digits,
        });
    }

    // `digits` is ASCII and never empty, so byte slicing is safe.
    let len = digits.len();
    let middle_start = len.saturating_sub(3);
    Ok(format!(
        "{}-{}-{}",
        &digits[..middle_start],
        &digits[middle_start..len - 1],
        &digits[len - 1..]
    ))
}

/// Checks the trailing check digit: the other digits weighted by their
/// position from the right, summed, mod 10.
pub fn check_digit_is_valid(cas_id: u64) -> bool {
    let digits: Vec<u32> = cas_id
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    let Some((check, body)) = digits.split_last() else {
        return false;
    };
    if body.is_empty() {
        return false;
    }

    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| (i as u32 + 1) * d)
        .sum();
    sum % 10 == *check
}
