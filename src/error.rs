use crate::driver::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    // General device errors
    Uninitialized,

    // Unsupported hardware, detected before any pin or bus is touched
    UnsupportedInterruptPin(u8),
    UnsupportedMcu,

    // The vendor driver returned something other than `Status::SUCCESS`
    Driver(Status),

    // Errors from the `embedded-hal` peripherals
    IoPin,
    Spi,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::Uninitialized => defmt::write!(f, "Uninitialized"),
            Self::UnsupportedInterruptPin(pin) => {
                defmt::write!(f, "UnsupportedInterruptPin({})", pin)
            }
            Self::UnsupportedMcu => defmt::write!(f, "UnsupportedMcu"),
            Self::Driver(status) => defmt::write!(f, "Driver({:?})", status),
            Self::IoPin => defmt::write!(f, "IoPin"),
            Self::Spi => defmt::write!(f, "Spi"),
        }
    }
}

impl From<Status> for Error {
    fn from(s: Status) -> Self {
        Self::Driver(s)
    }
}
