//! Feature Derivation
//!
//! Placeholder extractor: every feature comes from the last hex digit of
//! the address. No on-chain data is read.

use crate::models::FeatureVector;
use crate::utils::constants::{OWNER_TOKENS_HIGH, OWNER_TOKENS_LOW};

/// Last character of the address as a base-16 digit, 0 if absent or not hex
pub fn trailing_digit(address: &str) -> u32 {
    address
        .chars()
        .next_back()
        .and_then(|c| c.to_digit(16))
        .unwrap_or(0)
}

/// Derive the feature vector for an address
pub fn derive_features(address: &str) -> FeatureVector {
    let digit = trailing_digit(address);

    FeatureVector {
        owner_tokens: if digit % 2 == 0 {
            OWNER_TOKENS_HIGH
        } else {
            OWNER_TOKENS_LOW
        },
        liquidity_locked: flag(digit % 3 == 0),
        ownership_renounced: flag(digit % 5 == 0),
        suspicious_functions: flag(digit % 7 == 0),
    }
}

#[inline]
fn flag(set: bool) -> u32 {
    u32::from(set)
}
