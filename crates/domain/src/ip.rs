//! IPv4 dotted-quad validation for host addresses.

use crate::error::ValidationError;

/// Return `true` when `ip` is four dot-separated decimal octets in `0..=255`.
///
/// Each octet is one to three ASCII digits; leading zeros are accepted
/// (`010.0.0.1`), signs, spaces and empty segments are not.
#[must_use]
pub fn is_valid_ipv4(ip: &str) -> bool {
    let mut segments = 0;
    for segment in ip.split('.') {
        segments += 1;
        if segments > 4 || !is_octet(segment) {
            return false;
        }
    }
    segments == 4
}

fn is_octet(segment: &str) -> bool {
    (1..=3).contains(&segment.len())
        && segment.bytes().all(|b| b.is_ascii_digit())
        && segment.parse::<u16>().is_ok_and(|value| value <= 255)
}

/// Validate a host address.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidIp`] carrying the rejected input.
pub fn validate_ipv4(ip: &str) -> Result<(), ValidationError> {
    if is_valid_ipv4(ip) {
        Ok(())
    } else {
        Err(ValidationError::InvalidIp(ip.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_private_address() {
        assert!(is_valid_ipv4("192.168.1.1"));
    }

    #[test]
    fn should_accept_boundaries() {
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("255.255.255.255"));
    }

    #[test]
    fn should_accept_leading_zeros() {
        assert!(is_valid_ipv4("010.001.000.009"));
    }

    #[test]
    fn should_reject_octet_above_255() {
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("1.1.1.300"));
    }

    #[test]
    fn should_reject_wrong_segment_count() {
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("1.2.3.4.5"));
        assert!(!is_valid_ipv4(""));
    }

    #[test]
    fn should_reject_malformed_segments() {
        for input in [
            "1..2.3",
            "1.2.3.",
            "a.b.c.d",
            "1.2.3.-4",
            "+1.2.3.4",
            " 1.2.3.4",
            "1.2.3.4 ",
            "1234.1.1.1",
            "1.2.3.4/24",
        ] {
            assert!(!is_valid_ipv4(input), "{input} should be rejected");
        }
    }

    #[test]
    fn should_report_rejected_input() {
        let err = validate_ipv4("999.0.0.1").unwrap_err();
        assert_eq!(err, ValidationError::InvalidIp("999.0.0.1".to_string()));
    }

    #[test]
    fn should_accept_every_octet_value() {
        for octet in 0..=255 {
            let ip = format!("{octet}.{octet}.{octet}.{octet}");
            assert!(is_valid_ipv4(&ip), "{ip} should be accepted");
        }
    }
}
