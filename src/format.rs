//! Human-readable value formatting for salestat
//!
//! This module provides the metric formatter used by the summary displays:
//! large values are scaled to `thousand`/`million` units with two decimals
//! and an optional currency prefix.

use crate::error::{Result, SalestatError};

/// Format a non-negative value for display
///
/// Values below 1,000 are rendered as-is; values below 1,000,000 are scaled
/// down by 1,000 with a `thousand` suffix; anything larger is scaled by
/// 1,000,000 with a `million` suffix. Decimals are truncated toward zero so
/// a value just under a unit boundary stays in the lower unit. A non-empty
/// prefix (typically a currency symbol) is prepended with a single space.
///
/// Negative or non-finite input is rejected with `InvalidArgument`.
///
/// # Examples
///
/// ```
/// use salestat::format::format_value;
///
/// assert_eq!(format_value(999.999, "").unwrap(), "999.99 ");
/// assert_eq!(format_value(1000.0, "").unwrap(), "1.00 thousand");
/// assert_eq!(format_value(1_500_000.0, "R$").unwrap(), "R$ 1.50 million");
/// assert!(format_value(-1.0, "").is_err());
/// ```
pub fn format_value(value: f64, prefix: &str) -> Result<String> {
    if !value.is_finite() || value < 0.0 {
        return Err(SalestatError::InvalidArgument(format!(
            "cannot format negative or non-finite value: {value}"
        )));
    }

    let (scaled, unit) = if value < 1_000.0 {
        (value, "")
    } else if value < 1_000_000.0 {
        (value / 1_000.0, "thousand")
    } else {
        (value / 1_000_000.0, "million")
    };

    // Truncate, don't round: 999.999 must stay "999.99" in the unscaled branch
    let truncated = (scaled * 100.0).floor() / 100.0;

    if prefix.is_empty() {
        Ok(format!("{truncated:.2} {unit}"))
    } else {
        Ok(format!("{prefix} {truncated:.2} {unit}"))
    }
}
