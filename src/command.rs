//! SHT31-D command definitions.
//!
//! Every command the sensor understands is a fixed 16-bit literal sent
//! MSB first. See the Sensirion SHT3x-DIS datasheet, Section 4 "Operation
//! and Communication".

/// Measurement repeatability, trading accuracy for speed and power.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Repeatability {
    High,
    Medium,
    Low,
}

/// Acquisition rate for periodic (continuous) measurement mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeasurementRate {
    /// One measurement every two seconds.
    HalfHz,
    OneHz,
    TwoHz,
    FourHz,
    TenHz,
}

/// Represents an SHT31-D command.
///
/// Commands are never built from raw bytes at runtime; callers pick a
/// variant and the driver serializes it with [`Command::bytes`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// One on-demand measurement per command.
    ///
    /// The sensor distinguishes clock-stretching and non-stretching
    /// variants; both map onto the same encodings here.
    SingleShot { repeatability: Repeatability, clock_stretch: bool },

    /// Free-running acquisition at a fixed rate; results are collected
    /// with [`Command::Fetch`] or a plain data read.
    Periodic { repeatability: Repeatability, rate: MeasurementRate },

    /// Accelerated response time mode (4 Hz sampling).
    Art,

    /// Stop periodic acquisition and return to single-shot mode.
    Break,

    /// Fetch the latest result of a periodic acquisition.
    Fetch,

    /// Soft reset, re-loading calibration data.
    SoftReset,

    /// Enable the built-in heater.
    HeaterEnable,

    /// Disable the built-in heater.
    HeaterDisable,

    /// Read the 16-bit status register.
    ReadStatus,

    /// Clear the alert flags in the status register.
    ClearStatus,
}

impl Command {
    /// Returns the two-byte encoding of this command.
    ///
    /// The first byte selects the command family and doubles as the
    /// register byte on the wire; the second byte is the payload.
    pub const fn bytes(&self) -> [u8; 2] {
        use MeasurementRate::*;
        use Repeatability::*;

        match self {
            Command::SingleShot { repeatability, .. } => match repeatability {
                High => [0x24, 0x00],
                Medium => [0x24, 0x0B],
                Low => [0x24, 0x16],
            },
            Command::Periodic { repeatability, rate } => match (rate, repeatability) {
                (HalfHz, High) => [0x20, 0x32],
                (HalfHz, Medium) => [0x20, 0x24],
                (HalfHz, Low) => [0x20, 0x2F],
                (OneHz, High) => [0x21, 0x30],
                (OneHz, Medium) => [0x21, 0x26],
                (OneHz, Low) => [0x21, 0x2D],
                (TwoHz, High) => [0x22, 0x36],
                (TwoHz, Medium) => [0x22, 0x20],
                (TwoHz, Low) => [0x22, 0x2B],
                (FourHz, High) => [0x23, 0x34],
                (FourHz, Medium) => [0x23, 0x22],
                (FourHz, Low) => [0x23, 0x29],
                (TenHz, High) => [0x27, 0x37],
                (TenHz, Medium) => [0x27, 0x21],
                (TenHz, Low) => [0x27, 0x2A],
            },
            Command::Art => [0x2B, 0x32],
            Command::Break => [0x30, 0x93],
            Command::Fetch => [0xE0, 0x00],
            Command::SoftReset => [0x30, 0xA2],
            Command::HeaterEnable => [0x30, 0x6D],
            Command::HeaterDisable => [0x30, 0x66],
            Command::ReadStatus => [0xF3, 0x2D],
            Command::ClearStatus => [0x30, 0x41],
        }
    }
}
