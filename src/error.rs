//! Error taxonomy for the mining core

use thiserror::Error;

/// Errors raised by the mining core before any computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    /// A threshold is NaN, negative, or outside its valid range.
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Candidate itemsets must have at least one item.
    #[error("invalid candidate size {k}: itemsets have at least one item")]
    InvalidSize { k: usize },
}

/// Result type for the mining core.
pub type MiningResult<T> = std::result::Result<T, MiningError>;

/// Check that `value` is a probability in `[0, 1]`.
pub(crate) fn check_unit_interval(name: &'static str, value: f64) -> MiningResult<f64> {
    if value.is_nan() {
        return Err(MiningError::InvalidParameter {
            name,
            value,
            reason: "must be a number",
        });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(MiningError::InvalidParameter {
            name,
            value,
            reason: "must lie in [0, 1]",
        });
    }
    Ok(value)
}

/// Check that `value` is a non-negative ratio (infinity allowed).
pub(crate) fn check_non_negative(name: &'static str, value: f64) -> MiningResult<f64> {
    if value.is_nan() {
        return Err(MiningError::InvalidParameter {
            name,
            value,
            reason: "must be a number",
        });
    }
    if value < 0.0 {
        return Err(MiningError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}
