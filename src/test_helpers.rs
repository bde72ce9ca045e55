use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard, Once};
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState};
use embedded_hal::spi::{self, SpiBus};

use crate::config::{Cc3000Config, PatchSource, SpiConfig};
use crate::driver::{Status, WlanDriver};
use crate::host::HostInterface;
use crate::mcu::{InterruptLine, McuFamily};
use crate::registry;

static INIT: Once = Once::new();
static REGISTRY: Mutex<()> = Mutex::new(());

/// Serialize tests touching the process wide registry, and start from a clean
/// one.
pub fn registry_guard() -> MutexGuard<'static, ()> {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .is_test(true)
            .init();
    });

    let guard = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    registry::reset();
    guard
}

/// Everything the mocks observe, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Enable(PinState),
    Cs(PinState),
    ConfigureSpi(SpiConfig),
    SpiWrite(Vec<u8>),
    SpiTransfer(Vec<u8>),
    SpiFlush,
    Attach(InterruptLine),
    Detach(InterruptLine),
    DelayMs(u32),
    DriverInit,
    DriverStart(PatchSource),
    DriverStop,
    ReadSpVersion,
    ReadMacAddress,
    Service,
}

#[derive(Debug, Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn take(&self) -> Vec<Event> {
        core::mem::take(&mut *self.0.borrow_mut())
    }
}

pub struct MockOutput {
    log: Log,
    event: fn(PinState) -> Event,
}

impl ErrorType for MockOutput {
    type Error = Infallible;
}

impl OutputPin for MockOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push((self.event)(PinState::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push((self.event)(PinState::High));
        Ok(())
    }
}

pub struct MockInput {
    pub high: bool,
}

impl ErrorType for MockInput {
    type Error = Infallible;
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

pub struct MockSpi {
    log: Log,
}

impl spi::ErrorType for MockSpi {
    type Error = Infallible;
}

impl SpiBus<u8> for MockSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0xff);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.log.push(Event::SpiWrite(words.to_vec()));
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.log.push(Event::SpiTransfer(write.to_vec()));
        read.fill(0);
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.log.push(Event::SpiTransfer(words.to_vec()));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::SpiFlush);
        Ok(())
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

pub struct MockBoard {
    pub irq: MockInput,
    pub enable: MockOutput,
    pub cs: MockOutput,
    pub spi: MockSpi,
    pub mcu: McuFamily,
    log: Log,
}

impl MockBoard {
    pub fn new(mcu: McuFamily) -> (Self, Log) {
        let log = Log::default();
        let board = Self {
            irq: MockInput { high: true },
            enable: MockOutput {
                log: log.clone(),
                event: Event::Enable,
            },
            cs: MockOutput {
                log: log.clone(),
                event: Event::Cs,
            },
            spi: MockSpi { log: log.clone() },
            mcu,
            log: log.clone(),
        };
        (board, log)
    }
}

impl Cc3000Config for MockBoard {
    type IrqPin = MockInput;
    type EnablePin = MockOutput;
    type CsPin = MockOutput;
    type Spi = MockSpi;

    fn irq_pin(&mut self) -> &mut Self::IrqPin {
        &mut self.irq
    }

    fn enable_pin(&mut self) -> &mut Self::EnablePin {
        &mut self.enable
    }

    fn cs_pin(&mut self) -> &mut Self::CsPin {
        &mut self.cs
    }

    fn spi(&mut self) -> &mut Self::Spi {
        &mut self.spi
    }

    fn mcu(&self) -> McuFamily {
        self.mcu
    }

    fn configure_spi(&mut self, config: &SpiConfig) -> Result<(), crate::error::Error> {
        self.log.push(Event::ConfigureSpi(*config));
        Ok(())
    }

    fn attach_interrupt(&mut self, line: InterruptLine) {
        self.log.push(Event::Attach(line));
    }

    fn detach_interrupt(&mut self, line: InterruptLine) {
        self.log.push(Event::Detach(line));
    }
}

/// Host driver stand-in answering NVMEM reads from fixed values.
pub struct MockDriver {
    log: Log,
    pub status: Status,
    pub sp_version: [u8; 2],
    pub mac: [u8; 6],
    /// Event code delivered on the next `service`
    pub pending_event: Option<(u32, Vec<u8>)>,
    /// What `take_pending_irq` returned on the last `service`
    pub saw_pending: Option<bool>,
}

impl MockDriver {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            status: Status::SUCCESS,
            sp_version: [1, 24],
            mac: [0x08, 0x00, 0x28, 0x57, 0xa1, 0x3c],
            pending_event: None,
            saw_pending: None,
        }
    }
}

impl WlanDriver for MockDriver {
    fn init<H: HostInterface>(&mut self, _host: &mut H) {
        self.log.push(Event::DriverInit);
    }

    fn start<H: HostInterface>(&mut self, host: &mut H, patches: PatchSource) {
        self.log.push(Event::DriverStart(patches));
        host.write_wlan_pin(PinState::High).unwrap();
        host.enable_irq();
        host.async_event(0x4004, &[]);
    }

    fn stop<H: HostInterface>(&mut self, host: &mut H) {
        self.log.push(Event::DriverStop);
        host.disable_irq();
        host.write_wlan_pin(PinState::Low).unwrap();
    }

    fn read_sp_version<H: HostInterface>(&mut self, _host: &mut H, buf: &mut [u8; 2]) -> Status {
        self.log.push(Event::ReadSpVersion);
        if self.status.is_success() {
            *buf = self.sp_version;
        }
        self.status
    }

    fn read_mac_address<H: HostInterface>(&mut self, _host: &mut H, buf: &mut [u8; 6]) -> Status {
        self.log.push(Event::ReadMacAddress);
        if self.status.is_success() {
            *buf = self.mac;
        }
        self.status
    }

    fn service<H: HostInterface>(&mut self, host: &mut H) {
        self.log.push(Event::Service);
        self.saw_pending = Some(host.take_pending_irq());
        if let Some((code, data)) = self.pending_event.take() {
            host.async_event(code, &data);
        }
    }
}
