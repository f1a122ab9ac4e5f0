// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Parsing of human-readable FIL amounts into attoFIL.

use fvm_shared::{bigint::BigInt, econ::TokenAmount};

/// FIL has 18 decimals.
pub const FIL_DECIMALS: usize = 18;

const MAX_AMOUNT_LEN: usize = 50;
const ATTO_SUFFIXES: [&str; 2] = ["attofil", "afil"];
const FIL_SUFFIX: &str = "fil";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("amount is longer than {MAX_AMOUNT_LEN} characters")]
    TooLong,

    #[error("amount must not be negative")]
    Negative,

    #[error("invalid FIL value: {0:?}")]
    Invalid(String),

    #[error("too many decimal places (max {FIL_DECIMALS})")]
    TooPrecise,
}

/// Parse a FIL amount such as `"1.5"`, `"1.5 FIL"` or `"1500 attoFIL"` (or `aFIL`).
///
/// Suffixes are case-insensitive. Without a suffix the value is in FIL.
pub fn parse_fil(raw: &str) -> Result<TokenAmount, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    if trimmed.len() > MAX_AMOUNT_LEN {
        return Err(AmountError::TooLong);
    }

    let lower = trimmed.to_ascii_lowercase();
    let atto_number = ATTO_SUFFIXES
        .iter()
        .find_map(|suffix| lower.strip_suffix(*suffix));
    let (number, in_atto) = if let Some(n) = atto_number {
        (n.trim_end(), true)
    } else if let Some(n) = lower.strip_suffix(FIL_SUFFIX) {
        (n.trim_end(), false)
    } else {
        (lower.as_str(), false)
    };

    if number.starts_with('-') {
        return Err(AmountError::Negative);
    }

    let (whole, frac) = number.split_once('.').unwrap_or((number, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
        return Err(AmountError::Invalid(trimmed.to_string()));
    }

    // Trailing zeros never change the value.
    let frac = frac.trim_end_matches('0');
    let digits = if in_atto {
        if !frac.is_empty() {
            return Err(AmountError::TooPrecise);
        }
        whole.to_string()
    } else {
        if frac.len() > FIL_DECIMALS {
            return Err(AmountError::TooPrecise);
        }
        format!("{whole}{frac:0<width$}", width = FIL_DECIMALS)
    };

    let digits = if digits.is_empty() { "0" } else { digits.as_str() };
    let atto = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| AmountError::Invalid(trimmed.to_string()))?;

    Ok(TokenAmount::from_atto(atto))
}
