use crate::config::PatchSource;
use crate::host::HostInterface;

/// Status code returned by the host driver's NVMEM and WLAN calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub i32);

impl Status {
    /// The host driver reports success as 0.
    pub const SUCCESS: Self = Self(0);

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    pub fn into_result(self) -> Result<(), Status> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<i32> for Status {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

/// Entry points of the CC3000 host driver.
///
/// The driver owns the SPI framing, patch transfer and the WLAN state
/// machine. Every call receives the host callbacks as an explicit context, so
/// the driver never needs global state to reach the hardware.
pub trait WlanDriver {
    /// `wlan_init`: bind the host callbacks. Called once, before `start`.
    fn init<H: HostInterface>(&mut self, host: &mut H);

    /// `wlan_start`: assert the enable line and block until the module has
    /// booted.
    fn start<H: HostInterface>(&mut self, host: &mut H, patches: PatchSource);

    /// `wlan_stop`: deassert the enable line.
    fn stop<H: HostInterface>(&mut self, host: &mut H);

    /// `nvmem_read_sp_version`: `buf[0]` is major, `buf[1]` is minor.
    fn read_sp_version<H: HostInterface>(&mut self, host: &mut H, buf: &mut [u8; 2]) -> Status;

    /// `nvmem_get_mac_address`
    fn read_mac_address<H: HostInterface>(&mut self, host: &mut H, buf: &mut [u8; 6]) -> Status;

    /// Handle a pending module interrupt, dispatching unsolicited events to
    /// `host.async_event`.
    fn service<H: HostInterface>(&mut self, _host: &mut H) {}
}
