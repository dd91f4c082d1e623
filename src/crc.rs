// src/crc.rs

use super::error::Error;
use crc::{Algorithm, Crc};

/// Custom CRC algorithm matching the SHT3x datasheet (CRC-8/NRSC-5).
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1)
/// Initial Value: 0xFF
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xF7 (for "123456789")
pub const SHT31_CRC: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

// Create a Crc instance for the SHT31 algorithm for reuse.
const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SHT31_CRC);

/// Calculates the SHT3x CRC-8 for the given data bytes.
///
/// The sensor appends one CRC byte to each 16-bit data word it returns;
/// the checksum covers exactly the two data bytes that precede it.
#[inline]
pub fn calculate_crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Verifies one 16-bit data word against the CRC byte sent by the sensor.
///
/// # Returns
///
/// * `Ok(())` if the CRC matches.
/// * `Err(Error::CrcMismatch)` with both values otherwise.
pub fn verify_word<E>(word: [u8; 2], crc: u8) -> Result<(), Error<E>>
where
    E: core::fmt::Debug,
{
    let calculated = calculate_crc8(&word);
    if calculated == crc {
        Ok(())
    } else {
        Err(Error::CrcMismatch { expected: crc, calculated })
    }
}
