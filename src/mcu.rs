use crate::error::Error;

/// Host microcontroller families, as far as interrupt routing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum McuFamily {
    AtMega8,
    AtMega168,
    AtMega328,
    AtMega328P,
    Unsupported,
}

/// External interrupt line number (`INTx`) on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptLine(pub u8);

impl McuFamily {
    /// Family selected through cargo features, `Unsupported` if none is enabled.
    pub const fn from_features() -> Self {
        if cfg!(feature = "atmega328p") {
            Self::AtMega328P
        } else if cfg!(feature = "atmega328") {
            Self::AtMega328
        } else if cfg!(feature = "atmega168") {
            Self::AtMega168
        } else if cfg!(feature = "atmega8") {
            Self::AtMega8
        } else {
            Self::Unsupported
        }
    }

    /// Map a board pin number to the external interrupt line wired to it.
    pub fn interrupt_line(self, pin: u8) -> Result<InterruptLine, Error> {
        match self {
            Self::AtMega8 | Self::AtMega168 | Self::AtMega328 | Self::AtMega328P => match pin {
                2 => Ok(InterruptLine(0)),
                3 => Ok(InterruptLine(1)),
                _ => {
                    error!("Interrupt line not attached to pin 2 or 3");
                    Err(Error::UnsupportedInterruptPin(pin))
                }
            },
            Self::Unsupported => {
                error!("Microcontroller not supported");
                Err(Error::UnsupportedMcu)
            }
        }
    }
}

impl Default for McuFamily {
    fn default() -> Self {
        Self::from_features()
    }
}
