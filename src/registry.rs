//! Process wide record of the active CC3000.
//!
//! Interrupt handlers run without any context, so the pin assignment and the
//! interrupt routing of the one active device are kept here. Only a single
//! device may be active at a time: constructing a second [`Cc3000`] replaces
//! the record of the first one.
//!
//! [`Cc3000`]: crate::Cc3000

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::mcu::InterruptLine;
use crate::types::PinAssignment;

/// Ticket handed out by [`record`], identifying one device for [`release`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Registration(u32);

struct Shared {
    pins: Option<PinAssignment>,
    owner: Option<Registration>,
    // Never reset by `release`, so tickets are not reused
    generation: u32,
    line: Option<InterruptLine>,
    irq_enabled: bool,
    irq_pending: bool,
}

impl Shared {
    const fn new() -> Self {
        Self {
            pins: None,
            owner: None,
            generation: 0,
            line: None,
            irq_enabled: false,
            irq_pending: false,
        }
    }

    fn clear(&mut self) {
        self.pins = None;
        self.owner = None;
        self.line = None;
        self.irq_enabled = false;
        self.irq_pending = false;
    }
}

static SHARED: Mutex<CriticalSectionRawMutex, RefCell<Shared>> =
    Mutex::new(RefCell::new(Shared::new()));

/// Make `pins` the active assignment, returning the ticket of the new owner
/// and the assignment it replaced.
pub(crate) fn record(pins: PinAssignment) -> (Registration, Option<PinAssignment>) {
    SHARED.lock(|s| {
        let s = &mut *s.borrow_mut();
        s.generation = s.generation.wrapping_add(1);
        let registration = Registration(s.generation);
        let previous = s.pins.replace(pins);
        s.line = None;
        s.irq_enabled = false;
        s.irq_pending = false;
        s.owner = Some(registration);
        (registration, previous)
    })
}

/// Forget the active assignment if `registration` still owns it.
pub(crate) fn release(registration: Registration) {
    SHARED.lock(|s| {
        let s = &mut *s.borrow_mut();
        if s.owner == Some(registration) {
            s.clear();
        }
    })
}

/// Pin assignment of the most recently constructed device.
pub fn active_pins() -> Option<PinAssignment> {
    SHARED.lock(|s| s.borrow().pins)
}

pub(crate) fn set_interrupt_line(line: InterruptLine) {
    SHARED.lock(|s| s.borrow_mut().line = Some(line))
}

/// Interrupt line resolved by the last successful `init()`.
pub fn interrupt_line() -> Option<InterruptLine> {
    SHARED.lock(|s| s.borrow().line)
}

pub(crate) fn set_irq_enabled(enabled: bool) {
    SHARED.lock(|s| s.borrow_mut().irq_enabled = enabled)
}

pub fn irq_enabled() -> bool {
    SHARED.lock(|s| s.borrow().irq_enabled)
}

/// Entry point for the board's external interrupt handler.
///
/// Returns `false` if the interrupt was dropped because the host driver has it
/// disabled.
pub fn on_interrupt() -> bool {
    SHARED.lock(|s| {
        let s = &mut *s.borrow_mut();
        if s.irq_enabled {
            s.irq_pending = true;
        }
        s.irq_enabled
    })
}

/// Whether an interrupt is waiting for the host driver, without consuming it.
pub fn irq_pending() -> bool {
    SHARED.lock(|s| s.borrow().irq_pending)
}

pub(crate) fn take_pending() -> bool {
    SHARED.lock(|s| core::mem::take(&mut s.borrow_mut().irq_pending))
}

#[cfg(test)]
pub(crate) fn reset() {
    SHARED.lock(|s| *s.borrow_mut() = Shared::new())
}
