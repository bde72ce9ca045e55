use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::{Mode, SpiBus, MODE_1};

use crate::error::Error;
use crate::mcu::{InterruptLine, McuFamily};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Bus settings the host must apply before the driver talks to the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiConfig {
    pub mode: Mode,
    pub bit_order: BitOrder,
    /// Divider applied to the host system clock
    pub clock_divider: u8,
}

impl SpiConfig {
    /// The CC3000 samples on the falling edge, MSB first.
    pub const CC3000: Self = Self {
        mode: MODE_1,
        bit_order: BitOrder::MsbFirst,
        clock_divider: 2,
    };
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::CC3000
    }
}

/// Where the host driver takes its firmware patches from, passed on to
/// `WlanDriver::start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PatchSource {
    /// Use the patches already stored in the module EEPROM
    Module = 0,
    /// Load the patches returned by the `*_patch()` hooks
    Host = 1,
}

/// Board description handed to [`Cc3000`](crate::Cc3000).
///
/// Pin direction is given by the `embedded-hal` types. Everything that
/// `embedded-hal` does not cover (MCU family, bus reconfiguration, external
/// interrupt routing) goes through the hooks below, all of which default to
/// no-ops.
pub trait Cc3000Config {
    type IrqPin: InputPin;
    type EnablePin: OutputPin;
    type CsPin: OutputPin;
    type Spi: SpiBus<u8>;

    const SPI: SpiConfig = SpiConfig::CC3000;
    const PATCH_SOURCE: PatchSource = PatchSource::Module;

    fn irq_pin(&mut self) -> &mut Self::IrqPin;
    fn enable_pin(&mut self) -> &mut Self::EnablePin;
    fn cs_pin(&mut self) -> &mut Self::CsPin;
    fn spi(&mut self) -> &mut Self::Spi;

    fn mcu(&self) -> McuFamily {
        McuFamily::from_features()
    }

    fn configure_spi(&mut self, _config: &SpiConfig) -> Result<(), Error> {
        Ok(())
    }

    /// Route the external interrupt `line` to the application's handler, which
    /// must call [`on_interrupt`](crate::registry::on_interrupt).
    fn attach_interrupt(&mut self, _line: InterruptLine) {}

    fn detach_interrupt(&mut self, _line: InterruptLine) {}

    fn firmware_patch(&self) -> Option<&[u8]> {
        None
    }

    fn driver_patch(&self) -> Option<&[u8]> {
        None
    }

    fn bootloader_patch(&self) -> Option<&[u8]> {
        None
    }
}
