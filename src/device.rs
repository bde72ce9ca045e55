use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin as _;

use crate::config::Cc3000Config;
use crate::driver::WlanDriver;
use crate::error::Error;
use crate::event::WlanStatus;
use crate::host::Host;
use crate::mcu::InterruptLine;
use crate::module_timing;
use crate::registry::{self, Registration};
use crate::types::{FirmwareVersion, MacAddress, PinAssignment, Security};

/// Handle to a CC3000 attached over SPI.
pub struct Cc3000<C, W, D> {
    config: C,
    driver: W,
    delay: D,
    pins: PinAssignment,
    registration: Registration,
    line: Option<InterruptLine>,
    status: WlanStatus,
    initialized: bool,
}

impl<C, W, D> Cc3000<C, W, D>
where
    C: Cc3000Config,
    W: WlanDriver,
    D: DelayNs,
{
    /// Record the pin assignment and take ownership of the peripherals.
    ///
    /// Nothing is written to the hardware until [`init`](Self::init). Only one
    /// device can be active: this replaces the pin assignment of any
    /// previously constructed device in the [`registry`].
    pub fn new(irq_pin: u8, enable_pin: u8, cs_pin: u8, config: C, driver: W, delay: D) -> Self {
        let pins = PinAssignment::new(irq_pin, enable_pin, cs_pin);
        let (registration, previous) = registry::record(pins);
        if let Some(previous) = previous {
            if previous != pins {
                warn!(
                    "Replacing active CC3000 pins {:?} with {:?}",
                    previous, pins
                );
            }
        }

        Self {
            config,
            driver,
            delay,
            pins,
            registration,
            line: None,
            status: WlanStatus::new(),
            initialized: false,
        }
    }

    pub fn pins(&self) -> PinAssignment {
        self.pins
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Bring up the control lines and the SPI bus, hand the callbacks to the
    /// host driver and start the module.
    ///
    /// Calling this on an initialized device is a no-op. Blocks for as long as
    /// the driver's `start` does.
    pub fn init(&mut self) -> Result<(), Error> {
        debug!("Initializing CC3000");

        if self.initialized {
            return Ok(());
        }

        let line = self.config.mcu().interrupt_line(self.pins.irq)?;

        self.config.enable_pin().set_low().map_err(|_| Error::IoPin)?;
        self.config.cs_pin().set_low().map_err(|_| Error::IoPin)?;

        self.config.configure_spi(&C::SPI)?;

        self.line = Some(line);
        registry::set_interrupt_line(line);

        let mut host = Host::new(&mut self.config, &mut self.status, self.line);
        self.driver.init(&mut host);

        self.delay
            .delay_ms(module_timing::settle_time().as_millis() as u32);

        self.driver.start(&mut host, C::PATCH_SOURCE);

        self.initialized = true;
        info!("CC3000 started on interrupt line {:?}", line);

        Ok(())
    }

    /// Service pack version stored in the module NVMEM.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion, Error> {
        if !self.initialized {
            return Err(Error::Uninitialized);
        }

        let mut raw = [0u8; 2];
        let mut host = Host::new(&mut self.config, &mut self.status, self.line);
        self.driver
            .read_sp_version(&mut host, &mut raw)
            .into_result()?;

        Ok(FirmwareVersion::from(raw))
    }

    pub fn mac_address(&mut self) -> Result<MacAddress, Error> {
        if !self.initialized {
            return Err(Error::Uninitialized);
        }

        let mut raw = [0u8; 6];
        let mut host = Host::new(&mut self.config, &mut self.status, self.line);
        self.driver
            .read_mac_address(&mut host, &mut raw)
            .into_result()?;

        Ok(MacAddress::from(raw))
    }

    /// Associate with an access point.
    ///
    /// **NOTE** Not implemented: this does nothing and reports success for any
    /// input, whether or not the device is initialized.
    pub fn connect(
        &mut self,
        ssid: &str,
        _password: &str,
        security: impl Into<Security>,
    ) -> Result<(), Error> {
        let security = security.into();
        warn!(
            "connect({:?}, {:?}) is not implemented, reporting success",
            ssid, security
        );
        Ok(())
    }

    /// Let the host driver handle an interrupt flagged through
    /// [`registry::on_interrupt`]. Returns whether there was one.
    ///
    /// The pending flag is left for the driver to consume through
    /// [`HostInterface::take_pending_irq`](crate::host::HostInterface::take_pending_irq).
    pub fn poll(&mut self) -> Result<bool, Error> {
        if !self.initialized {
            return Err(Error::Uninitialized);
        }

        if !registry::irq_pending() {
            return Ok(false);
        }

        let mut host = Host::new(&mut self.config, &mut self.status, self.line);
        self.driver.service(&mut host);
        Ok(true)
    }

    /// Power the module down through the host driver.
    ///
    /// The device stays initialized; it is up to the host driver to bring the
    /// module back.
    pub fn stop(&mut self) -> Result<(), Error> {
        if !self.initialized {
            return Err(Error::Uninitialized);
        }

        let mut host = Host::new(&mut self.config, &mut self.status, self.line);
        self.driver.stop(&mut host);
        self.status = WlanStatus::new();
        Ok(())
    }

    pub fn status(&self) -> WlanStatus {
        self.status
    }

    pub fn is_connected(&self) -> bool {
        self.status.connected
    }

    pub fn is_dhcp_configured(&self) -> bool {
        self.status.dhcp_complete
    }

    /// Release the peripherals, clearing the registry if this device is the
    /// active one.
    pub fn free(self) -> (C, W, D) {
        registry::release(self.registration);
        (self.config, self.driver, self.delay)
    }
}
