//! Descriptive sensor metadata and a thin wrapper bundling it with the
//! driver.
//!
//! The wrapper composes a [`Sht31`] and reads its state exclusively
//! through the public accessors; it keeps no measurement state of its
//! own.

use crate::command::Command;
use crate::driver::Sht31;
use crate::error::Error;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Static descriptive constants for the SHT31-D.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SensorMetadata {
    pub sensor: &'static str,
    pub kind: &'static str,
    /// Lower bound of the measurable temperature range, °C.
    pub temperature_min: f32,
    /// Upper bound of the measurable temperature range, °C.
    pub temperature_max: f32,
    pub humidity_min: f32,
    pub humidity_max: f32,
    pub temperature_unit: &'static str,
    pub humidity_unit: &'static str,
    /// Typical temperature accuracy, ±°C.
    pub temperature_accuracy: f32,
    /// Typical humidity accuracy, ±%RH.
    pub humidity_accuracy: f32,
}

pub const SENSOR_METADATA: SensorMetadata = SensorMetadata {
    sensor: "SHT31D",
    kind: "High accuracy temperature and humidity sensor",
    temperature_min: -40.0,
    temperature_max: 90.0,
    humidity_min: 0.0,
    humidity_max: 100.0,
    temperature_unit: "c",
    humidity_unit: "%rh",
    temperature_accuracy: 0.3,
    humidity_accuracy: 2.0,
};

/// Last decoded temperature packaged with its unit tag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TaggedTemperature {
    /// `None` until the first successful read.
    pub temp: Option<f32>,
    pub unit: &'static str,
}

/// Last decoded humidity packaged with its unit tag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TaggedHumidity {
    /// `None` until the first successful read.
    pub humid: Option<f32>,
    pub unit: &'static str,
}

/// Metadata wrapper around the bare driver.
///
/// Forwards the driver operations so it can drive the sensor on its
/// own, and packages the last-read values with unit tags.
#[derive(Debug)]
pub struct Sht31Meta<I2C, D> {
    driver: Sht31<I2C, D>,
}

impl<I2C, D> Sht31Meta<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(driver: Sht31<I2C, D>) -> Self {
        Sht31Meta { driver }
    }

    /// Descriptive constants for this sensor type.
    pub fn metadata(&self) -> &'static SensorMetadata {
        &SENSOR_METADATA
    }

    /// See [`Sht31::send_command`].
    pub fn send_command(&mut self, command: Command, wait: bool) -> Result<(), Error<I2C::Error>> {
        self.driver.send_command(command, wait)
    }

    /// See [`Sht31::read_sensor`].
    pub fn read_sensor(&mut self) -> Result<(), Error<I2C::Error>> {
        self.driver.read_sensor()
    }

    /// Last decoded temperature with its unit tag.
    pub fn temperature(&self) -> TaggedTemperature {
        TaggedTemperature {
            temp: self.driver.temperature(),
            unit: "c",
        }
    }

    /// Last decoded humidity with its unit tag.
    pub fn humidity(&self) -> TaggedHumidity {
        TaggedHumidity {
            humid: self.driver.humidity(),
            unit: "%RH",
        }
    }

    /// Consumes the wrapper and returns the bare driver.
    pub fn into_inner(self) -> Sht31<I2C, D> {
        self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, MeasurementRate, Repeatability};
    use crate::crc;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    fn measurement_block(t_raw: u16, h_raw: u16) -> Vec<u8> {
        let t = t_raw.to_be_bytes();
        let h = h_raw.to_be_bytes();
        vec![
            t[0],
            t[1],
            crc::calculate_crc8(&t),
            h[0],
            h[1],
            crc::calculate_crc8(&h),
        ]
    }

    #[test]
    fn test_metadata_constants() {
        let wrapper = Sht31Meta::new(Sht31::new(I2cMock::new(&[]), NoopDelay::new()));
        let meta = wrapper.metadata();

        assert_eq!(meta.sensor, "SHT31D");
        assert_eq!(meta.temperature_min, -40.0);
        assert_eq!(meta.temperature_max, 90.0);
        assert_eq!(meta.humidity_min, 0.0);
        assert_eq!(meta.humidity_max, 100.0);
        assert_eq!(meta.temperature_unit, "c");
        assert_eq!(meta.humidity_unit, "%rh");
        assert_eq!(meta.temperature_accuracy, 0.3);
        assert_eq!(meta.humidity_accuracy, 2.0);

        wrapper.into_inner().release().done();
    }

    #[test]
    fn test_getters_tag_units_before_first_read() {
        let wrapper = Sht31Meta::new(Sht31::new(I2cMock::new(&[]), NoopDelay::new()));

        assert_eq!(wrapper.temperature(), TaggedTemperature { temp: None, unit: "c" });
        assert_eq!(wrapper.humidity(), TaggedHumidity { humid: None, unit: "%RH" });

        wrapper.into_inner().release().done();
    }

    #[test]
    fn test_getters_see_driver_state_through_accessors() {
        // The wrapper must observe what the driver decodes, not private
        // storage of its own
        let expectations = [
            I2cTransaction::write(0x45, vec![0x23, 0x34]),
            I2cTransaction::write_read(0x45, vec![0x00], measurement_block(0x6679, 0x8C70)),
        ];
        let mut wrapper = Sht31Meta::new(Sht31::new(I2cMock::new(&expectations), NoopDelay::new()));

        wrapper
            .send_command(
                Command::Periodic {
                    repeatability: Repeatability::High,
                    rate: MeasurementRate::FourHz,
                },
                true,
            )
            .unwrap();
        wrapper.read_sensor().unwrap();

        let temperature = wrapper.temperature();
        assert_eq!(temperature.unit, "c");
        assert!((temperature.temp.unwrap() - 25.05).abs() < 1e-3);

        let humidity = wrapper.humidity();
        assert_eq!(humidity.unit, "%RH");
        assert!((humidity.humid.unwrap() - 54.86).abs() < 1e-3);

        wrapper.into_inner().release().done();
    }
}
