use embedded_hal::digital::{InputPin as _, OutputPin as _, PinState};
use embedded_hal::spi::SpiBus as _;

use crate::config::Cc3000Config;
use crate::error::Error;
use crate::event::{AsyncEvent, WlanStatus};
use crate::mcu::InterruptLine;
use crate::registry;

/// Callbacks the CC3000 host driver needs from the platform.
pub trait HostInterface {
    /// Unsolicited event from the module
    fn async_event(&mut self, code: u32, data: &[u8]);

    fn firmware_patch(&self) -> Option<&[u8]>;
    fn driver_patch(&self) -> Option<&[u8]>;
    fn bootloader_patch(&self) -> Option<&[u8]>;

    /// Level of the `IRQ` line, `true` when high. The module pulls it low when
    /// it has data for the host.
    fn read_irq(&mut self) -> Result<bool, Error>;
    fn enable_irq(&mut self);
    fn disable_irq(&mut self);

    /// Drive the `WLAN_EN` line
    fn write_wlan_pin(&mut self, state: PinState) -> Result<(), Error>;

    /// Assert chip select
    fn select(&mut self) -> Result<(), Error>;
    /// Flush the bus and release chip select
    fn deselect(&mut self) -> Result<(), Error>;
    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), Error>;
    fn write(&mut self, buf: &[u8]) -> Result<(), Error>;

    /// Consume the pending interrupt flag set by
    /// [`on_interrupt`](crate::registry::on_interrupt)
    fn take_pending_irq(&mut self) -> bool;
}

/// [`HostInterface`] on top of a board description.
pub struct Host<'a, C> {
    config: &'a mut C,
    status: &'a mut WlanStatus,
    line: Option<InterruptLine>,
}

impl<'a, C> Host<'a, C>
where
    C: Cc3000Config,
{
    pub(crate) fn new(
        config: &'a mut C,
        status: &'a mut WlanStatus,
        line: Option<InterruptLine>,
    ) -> Self {
        Self {
            config,
            status,
            line,
        }
    }
}

impl<C> HostInterface for Host<'_, C>
where
    C: Cc3000Config,
{
    fn async_event(&mut self, code: u32, data: &[u8]) {
        let event = AsyncEvent::from(code);
        match event {
            AsyncEvent::Unknown(code) => warn!("Unhandled async event {:?}", code),
            event => debug!("[EVENT] {:?}", event),
        }
        self.status.update(event, data);
    }

    fn firmware_patch(&self) -> Option<&[u8]> {
        self.config.firmware_patch()
    }

    fn driver_patch(&self) -> Option<&[u8]> {
        self.config.driver_patch()
    }

    fn bootloader_patch(&self) -> Option<&[u8]> {
        self.config.bootloader_patch()
    }

    fn read_irq(&mut self) -> Result<bool, Error> {
        self.config.irq_pin().is_high().map_err(|_| Error::IoPin)
    }

    fn enable_irq(&mut self) {
        if let Some(line) = self.line {
            self.config.attach_interrupt(line);
            registry::set_irq_enabled(true);
        } else {
            warn!("No interrupt line resolved, not enabling");
        }
    }

    fn disable_irq(&mut self) {
        if let Some(line) = self.line {
            self.config.detach_interrupt(line);
        }
        registry::set_irq_enabled(false);
    }

    fn write_wlan_pin(&mut self, state: PinState) -> Result<(), Error> {
        trace!("WLAN_EN -> {:?}", state == PinState::High);
        self.config
            .enable_pin()
            .set_state(state)
            .map_err(|_| Error::IoPin)
    }

    fn select(&mut self) -> Result<(), Error> {
        self.config.cs_pin().set_low().map_err(|_| Error::IoPin)
    }

    fn deselect(&mut self) -> Result<(), Error> {
        self.config.spi().flush().map_err(|_| Error::Spi)?;
        self.config.cs_pin().set_high().map_err(|_| Error::IoPin)
    }

    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.config
            .spi()
            .transfer_in_place(buf)
            .map_err(|_| Error::Spi)
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), Error> {
        self.config.spi().write(buf).map_err(|_| Error::Spi)
    }

    fn take_pending_irq(&mut self) -> bool {
        registry::take_pending()
    }
}
