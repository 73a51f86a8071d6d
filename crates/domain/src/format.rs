//! Display formatting for metric values.

/// Severity bucket of a usage percentage, drives the progress bar colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageLevel {
    Low,
    Medium,
    High,
}

impl UsageLevel {
    /// `< 50` is low, `< 80` is medium, anything else is high.
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent < 50.0 {
            Self::Low
        } else if percent < 80.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// CSS class of the progress bar.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "progress-low",
            Self::Medium => "progress-medium",
            Self::High => "progress-high",
        }
    }
}

/// `12.345` → `"12.3%"`.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Throughput in MB/s with one decimal.
#[must_use]
pub fn format_rate(mb_per_second: f64) -> String {
    format!("{mb_per_second:.1} MB/s")
}

/// Temperature in degrees Celsius.
#[must_use]
pub fn format_celsius(celsius: f64) -> String {
    format!("{celsius:.1} \u{b0}C")
}

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human readable byte count using 1024 steps: `1536` → `"1.5 KB"`.
///
/// Plain bytes are printed without decimals; values past the last unit
/// stay in TB.
#[must_use]
pub fn format_bytes(bytes: f64) -> String {
    if !bytes.is_finite() || bytes <= 0.0 {
        return "0 B".to_string();
    }
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{value:.0} B")
    } else {
        format!("{value:.1} {}", BYTE_UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_bucket_usage_levels() {
        assert_eq!(UsageLevel::from_percent(0.0), UsageLevel::Low);
        assert_eq!(UsageLevel::from_percent(49.9), UsageLevel::Low);
        assert_eq!(UsageLevel::from_percent(50.0), UsageLevel::Medium);
        assert_eq!(UsageLevel::from_percent(79.9), UsageLevel::Medium);
        assert_eq!(UsageLevel::from_percent(80.0), UsageLevel::High);
        assert_eq!(UsageLevel::from_percent(100.0), UsageLevel::High);
    }

    #[test]
    fn should_format_percent_with_one_decimal() {
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn should_format_rate() {
        assert_eq!(format_rate(1.26), "1.3 MB/s");
    }

    #[test]
    fn should_format_bytes_in_binary_units() {
        assert_eq!(format_bytes(0.0), "0 B");
        assert_eq!(format_bytes(512.0), "512 B");
        assert_eq!(format_bytes(1536.0), "1.5 KB");
        assert_eq!(format_bytes(16.0 * 1024.0 * 1024.0 * 1024.0), "16.0 GB");
        assert_eq!(format_bytes(3.0 * 1024f64.powi(5)), "3072.0 TB");
    }

    #[test]
    fn should_format_non_finite_bytes_as_zero() {
        assert_eq!(format_bytes(f64::NAN), "0 B");
        assert_eq!(format_bytes(-5.0), "0 B");
    }
}
