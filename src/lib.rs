#![cfg_attr(not(test), no_std)]

//! # CC3000
//!
//! Host side glue for the TI CC3000 WiFi module as found on the SparkFun
//! CC3000 shield and breakout boards.
//!
//! The CC3000 host driver (SPI framing, patch transfer, the WLAN state
//! machine) is not part of this crate. It plugs in through the
//! [`WlanDriver`] trait and reaches the hardware through the
//! [`HostInterface`] callbacks implemented here.
//!
//! ## Example
//!
//! ```ignore
//! use cc3000::{Cc3000, Cc3000Config};
//!
//! struct Board { /* pins and SPI bus from the HAL */ }
//!
//! impl Cc3000Config for Board {
//!     type IrqPin = hal::gpio::Input;
//!     type EnablePin = hal::gpio::Output;
//!     type CsPin = hal::gpio::Output;
//!     type Spi = hal::spi::Spi;
//!
//!     // pin and bus accessors, `attach_interrupt` ...
//! }
//!
//! let mut wifi = Cc3000::new(2, 7, 10, board, host_driver, delay);
//! wifi.init()?;
//! let version = wifi.firmware_version()?;
//! let mac = wifi.mac_address()?;
//! ```
//!
//! The board's external interrupt handler must call
//! [`registry::on_interrupt`], and the application calls [`Cc3000::poll`] to
//! let the driver service it.
//!
//! ## Features
//!
//! - `log` / `defmt`: diagnostic output through the respective crate
//! - `atmega8`, `atmega168`, `atmega328`, `atmega328p`: default
//!   [`McuFamily`] returned by [`Cc3000Config::mcu`]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
mod device;
pub mod driver;
pub mod error;
pub mod event;
pub mod host;
pub mod mcu;
mod module_timing;
pub mod registry;
pub mod types;

#[cfg(test)]
mod test_helpers;

pub use config::{BitOrder, Cc3000Config, PatchSource, SpiConfig};
pub use device::Cc3000;
pub use driver::{Status, WlanDriver};
pub use error::Error;
pub use event::{AsyncEvent, PingReport, WlanStatus};
pub use host::{Host, HostInterface};
pub use mcu::{InterruptLine, McuFamily};
pub use types::{FirmwareVersion, MacAddress, PinAssignment, Security};

// Re-export embedded-hal
pub use embedded_hal;
