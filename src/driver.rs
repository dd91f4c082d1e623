// src/driver.rs

use crate::command::Command;
use crate::crc;
use crate::error::Error;
use crate::reading::{convert_humidity, convert_temperature, Reading};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Factory-default 7-bit I2C address (ADDR pin high).
pub const DEFAULT_ADDRESS: u8 = 0x45;
/// Alternate 7-bit I2C address (ADDR pin low).
pub const ALTERNATE_ADDRESS: u8 = 0x44;

/// Register the 6-byte measurement block is read from.
const DATA_REGISTER: u8 = 0x00;

/// Fixed post-command settling time for measurement commands.
const MEASUREMENT_WAIT_MS: u32 = 500;

/// Driver for a single SHT31-D on an I2C bus.
///
/// The driver is fully synchronous and assumes one owner driving one
/// sensor sequentially; every bus operation blocks until the HAL
/// completes or fails. HAL failures are handed back unchanged, with no
/// retry at any layer.
#[derive(Debug)]
pub struct Sht31<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    last: Option<Reading>,
}

impl<I2C, D> Sht31<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Creates a driver for a sensor at the factory-default address.
    ///
    /// Takes an already-open bus; opening (and failing to open) the bus
    /// is the HAL's business and surfaces from its own constructor.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_ADDRESS)
    }

    /// Creates a driver for a sensor at the given 7-bit address.
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Sht31 {
            i2c,
            delay,
            address,
            last: None,
        }
    }

    /// Sends one two-byte command to the sensor.
    ///
    /// The first byte acts as the command/register selector, the second
    /// as its single payload byte, written in one bus transaction. With
    /// `wait` set, blocks for a fixed 500 ms afterwards to cover the
    /// sensor's measurement latency in single-shot and periodic modes.
    ///
    /// A write failure propagates unchanged and leaves the stored
    /// reading untouched.
    pub fn send_command(&mut self, command: Command, wait: bool) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.address, &command.bytes())?;
        if wait {
            self.delay.delay_ms(MEASUREMENT_WAIT_MS);
        }
        Ok(())
    }

    /// Reads and decodes one measurement block.
    ///
    /// Issues a 6-byte block read from register 0x00:
    /// `[T_hi, T_lo, T_crc, H_hi, H_lo, H_crc]`. Both data words must
    /// pass CRC-8 verification before anything is decoded; on a bus or
    /// CRC failure the previously stored reading stays as it was.
    pub fn read_sensor(&mut self) -> Result<(), Error<I2C::Error>> {
        let mut block = [0u8; 6];
        self.i2c
            .write_read(self.address, &[DATA_REGISTER], &mut block)?;

        crc::verify_word([block[0], block[1]], block[2])?;
        crc::verify_word([block[3], block[4]], block[5])?;

        let t_raw = u16::from_be_bytes([block[0], block[1]]);
        let h_raw = u16::from_be_bytes([block[3], block[4]]);

        // Published as one unit only after both words check out
        self.last = Some(Reading {
            temperature: convert_temperature(t_raw),
            humidity: convert_humidity(h_raw),
        });

        Ok(())
    }

    /// Temperature in degrees C from the last successful read.
    ///
    /// `None` until [`Sht31::read_sensor`] has succeeded at least once.
    pub fn temperature(&self) -> Option<f32> {
        self.last.map(|reading| reading.temperature)
    }

    /// Humidity in %RH from the last successful read.
    pub fn humidity(&self) -> Option<f32> {
        self.last.map(|reading| reading.humidity)
    }

    /// The last successful reading as a unit.
    pub fn last_reading(&self) -> Option<Reading> {
        self.last
    }

    /// The configured 7-bit device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consumes the driver and gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
