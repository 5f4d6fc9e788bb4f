//! Numeric helpers for badge geometry and label text.

/// Width of the full bar in SVG user units.
pub const TOTAL_BAR_WIDTH: u32 = 90;

/// Clamp a percentage into `[0, 100]`. NaN maps to 0.
pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Pixel width of the colored bar for a percentage in `[0, 100]`.
///
/// Out-of-range input is clamped first, so the result never exceeds
/// [`TOTAL_BAR_WIDTH`].
pub fn bar_width(percentage: f64) -> u32 {
    let pct = clamp_percentage(percentage);
    (TOTAL_BAR_WIDTH as f64 * pct / 100.0).round() as u32
}

/// Format a value for display in a label.
///
/// Rounds to two decimal places, then drops trailing zeros and a trailing
/// decimal point. Negative zero (including values that round to it) prints
/// as `0`.
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format a percentage label, e.g. `42.5%`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{}%", format_number(percentage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_trims() {
        assert_eq!(format_number(25.00), "25");
        assert_eq!(format_number(25.5), "25.5");
        assert_eq!(format_number(25.25), "25.25");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(10.10), "10.1");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.001), "0");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_clamp_percentage_nan() {
        assert_eq!(clamp_percentage(f64::NAN), 0.0);
        assert_eq!(clamp_percentage(f64::INFINITY), 100.0);
        assert_eq!(clamp_percentage(f64::NEG_INFINITY), 0.0);
        assert_eq!(bar_width(f64::NAN), 0);
    }

    #[test]
    fn test_bar_width_extremes() {
        assert_eq!(bar_width(0.0), 0);
        assert_eq!(bar_width(100.0), TOTAL_BAR_WIDTH);
        assert_eq!(bar_width(150.0), TOTAL_BAR_WIDTH);
        assert_eq!(bar_width(-10.0), 0);
    }
}
