//! # Formatting Utilities
//!
//! Number formatting specific to the launchpad screens. For address
//! formatting, use [`shared::utils::format_address`] or
//! [`shared::utils::truncate_address`].

/// Format a whole-token count with comma separators
/// (e.g. 800000 -> "800,000"). Negative counts keep their sign.
///
/// # Examples
///
/// ```rust
/// use launchpad_web::utils::format::format_token_count;
///
/// assert_eq!(format_token_count(800_000), "800,000");
/// assert_eq!(format_token_count(-1_500), "-1,500");
/// ```
pub fn format_token_count(count: i64) -> String {
    let digits = count.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    if count < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Shorten a transaction hash for table cells (first 8, last 6).
pub fn short_hash(hash: &str) -> String {
    shared::utils::format_address(hash, 8, 6)
}

/// Render a holder percentage with two decimals.
pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_token_count() {
        assert_eq!(format_token_count(0), "0");
        assert_eq!(format_token_count(999), "999");
        assert_eq!(format_token_count(800_000), "800,000");
        assert_eq!(format_token_count(1_234_567), "1,234,567");
        assert_eq!(format_token_count(-42_000), "-42,000");
    }

    #[test]
    fn test_short_hash() {
        let hash = "0x9e2f8b7a6c5d4e3f2a1b0c9d8e7f6a5b4c3d2e1f0a9b8c7d6e5f4a3b2c1d0e9f";
        assert_eq!(short_hash(hash), "0x9e2f8b...1d0e9f");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(62.5), "62.50%");
        assert_eq!(format_percentage(0.0), "0.00%");
    }
}
