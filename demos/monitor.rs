//! Continuously prints temperature and humidity from an SHT31-D on
//! `/dev/i2c-1` (e.g. a Raspberry Pi).
//!
//! Starts 4 Hz high-repeatability periodic acquisition, then polls once
//! a second until interrupted.

use std::thread;
use std::time::Duration;

use linux_embedded_hal::{Delay, I2cdev};
use sht31d::{Command, MeasurementRate, Repeatability, Sht31};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let i2c = I2cdev::new("/dev/i2c-1")?;
    let mut sensor = Sht31::new(i2c, Delay);

    sensor.send_command(
        Command::Periodic {
            repeatability: Repeatability::High,
            rate: MeasurementRate::FourHz,
        },
        true,
    )?;

    loop {
        sensor.read_sensor()?;
        if let Some(reading) = sensor.last_reading() {
            println!("Temperature: {:.2} C", reading.temperature);
            println!("Humidity   : {:.2} %RH", reading.humidity);
        }
        thread::sleep(Duration::from_secs(1));
    }
}
