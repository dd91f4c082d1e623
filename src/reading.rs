// src/reading.rs

/// One decoded measurement pair.
///
/// The driver stores and replaces readings as a unit, so a caller never
/// observes a fresh temperature next to a stale humidity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius, rounded to 2 decimal places.
    pub temperature: f32,
    /// Relative humidity in %RH, rounded to 2 decimal places.
    pub humidity: f32,
}

/// Converts a raw 16-bit temperature code to degrees Celsius.
///
/// `T = -45 + 175 * raw / 65535`, rounded to 2 decimal places. The
/// mapping covers -45.0 °C at code 0 up to 130.0 °C at code 65535.
#[inline]
pub fn convert_temperature(raw: u16) -> f32 {
    round_centi(-45.0 + 175.0 * raw as f32 / 65535.0)
}

/// Converts a raw 16-bit humidity code to %RH.
///
/// `RH = 100 * raw / 65535`, rounded to 2 decimal places.
#[inline]
pub fn convert_humidity(raw: u16) -> f32 {
    round_centi(100.0 * raw as f32 / 65535.0)
}

// Round half away from zero at 2 decimal places; core has no `round`,
// so go through libm.
fn round_centi(value: f32) -> f32 {
    libm::roundf(value * 100.0) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_endpoints() {
        assert_eq!(convert_temperature(0), -45.0);
        assert_eq!(convert_temperature(65535), 130.0);
    }

    #[test]
    fn test_temperature_monotonic() {
        // Sample the full code range; a larger code never maps to a
        // lower temperature (rounding preserves ordering)
        let mut previous = convert_temperature(0);
        for raw in (0..=65535u32).step_by(97) {
            let current = convert_temperature(raw as u16);
            assert!(
                current >= previous,
                "temperature decreased at raw code {}",
                raw
            );
            previous = current;
        }
    }

    #[test]
    fn test_humidity_bounds() {
        assert_eq!(convert_humidity(0), 0.0);
        assert_eq!(convert_humidity(65535), 100.0);
        for raw in (0..=65535u32).step_by(97) {
            let rh = convert_humidity(raw as u16);
            assert!((0.0..=100.0).contains(&rh), "out of range at raw code {}", raw);
        }
    }

    #[test]
    fn test_datasheet_worked_example() {
        // Raw words 0x6679 / 0x8C70 from the vendor's worked example
        let temperature = convert_temperature(0x6679);
        let humidity = convert_humidity(0x8C70);
        assert!((temperature - 25.05).abs() < 1e-3);
        assert!((humidity - 54.86).abs() < 1e-3);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // Raw code 1 maps to -44.99733...; two decimals keep -45.0
        assert_eq!(convert_temperature(1), -45.0);
        // Raw code 38 maps to -44.8985...; rounds away from zero to -44.9
        assert!((convert_temperature(38) + 44.9).abs() < 1e-3);
    }
}
