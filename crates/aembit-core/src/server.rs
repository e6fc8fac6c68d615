//! Target server port validation.

use crate::error::{Error, Result};

/// Validate a caller-supplied server port string.
///
/// Check order matters: conversion failures are reported before integer and
/// range failures, so `"abc"` and `"80.5"` surface different errors. Every
/// string maps to either a port in `0..=65535` or one of the three error
/// kinds.
pub fn validate_server_port(raw: &str) -> Result<u16> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::ServerPortNotANumber(raw.to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::ServerPortNotANumber(raw.to_string()))?;
    if value.is_nan() {
        return Err(Error::ServerPortNotANumber(raw.to_string()));
    }

    // Infinity falls out here as well: its fractional part is NaN.
    if value.fract() != 0.0 {
        return Err(Error::ServerPortNotAnInteger(raw.to_string()));
    }

    if !(0.0..=65535.0).contains(&value) {
        return Err(Error::ServerPortOutOfRange(raw.to_string()));
    }

    Ok(value as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn returns_number_for_valid_port() {
        assert_eq!(validate_server_port("443").unwrap(), 443);
    }

    #[test]
    fn returns_minimum_port() {
        assert_eq!(validate_server_port("0").unwrap(), 0);
    }

    #[test]
    fn returns_maximum_port() {
        assert_eq!(validate_server_port("65535").unwrap(), 65535);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_server_port(" 8080 ").unwrap(), 8080);
    }

    #[test]
    fn rejects_empty_string() {
        let err = validate_server_port("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Provided server port value cannot be converted to a number: "
        );
    }

    #[test]
    fn rejects_non_numeric_string() {
        let err = validate_server_port("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Provided server port value cannot be converted to a number: abc"
        );
    }

    #[test]
    fn rejects_nan_literal() {
        let err = validate_server_port("NaN").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Provided server port value cannot be converted to a number: NaN"
        );
    }

    #[test]
    fn rejects_decimal_numbers() {
        let err = validate_server_port("80.5").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Provided server port value must be an integer: 80.5"
        );
    }

    #[test]
    fn rejects_negative_port() {
        let err = validate_server_port("-1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Provided server port value must be in range 0-65535: -1"
        );
    }

    #[test]
    fn rejects_port_above_maximum() {
        let err = validate_server_port("65536").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Provided server port value must be in range 0-65535: 65536"
        );
    }

    #[test]
    fn round_trips_formatted_ports() {
        for port in [0u16, 1, 80, 443, 8080, 65534, 65535] {
            assert_eq!(validate_server_port(&port.to_string()).unwrap(), port);
        }
    }
}
