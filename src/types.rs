use core::fmt::Write as _;

use heapless::String;
use serde::{Deserialize, Serialize};

/// Board pin numbers of the three CC3000 control lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    /// `IRQ` line, input to the host
    pub irq: u8,
    /// `WLAN_EN` line, output from the host
    pub enable: u8,
    /// SPI chip select, output from the host
    pub chip_select: u8,
}

impl PinAssignment {
    pub const fn new(irq: u8, enable: u8, chip_select: u8) -> Self {
        Self {
            irq,
            enable,
            chip_select,
        }
    }
}

/// Service pack version stored in the module NVMEM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
}

impl From<[u8; 2]> for FirmwareVersion {
    fn from(raw: [u8; 2]) -> Self {
        Self {
            major: raw[0],
            minor: raw[1],
        }
    }
}

impl From<FirmwareVersion> for [u8; 2] {
    fn from(v: FirmwareVersion) -> Self {
        [v.major, v.minor]
    }
}

impl core::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// MAC address as reported by the module, in the driver's byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Colon separated, upper-case hex representation, e.g. `08:00:28:57:A1:3C`
    pub fn to_hex_string(&self) -> String<17> {
        let mut s = String::new();
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                s.push(':').ok();
            }
            write!(s, "{:02X}", b).ok();
        }
        s
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(raw: [u8; 6]) -> Self {
        Self(raw)
    }
}

impl core::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

/// WLAN security mode, numbered as the CC3000 host driver numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Security {
    Unsecured,
    Wep,
    Wpa,
    Wpa2,
    /// Any value the driver does not define
    Other(u8),
}

impl From<u8> for Security {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::Unsecured,
            1 => Self::Wep,
            2 => Self::Wpa,
            3 => Self::Wpa2,
            v => Self::Other(v),
        }
    }
}

impl From<Security> for u8 {
    fn from(s: Security) -> Self {
        match s {
            Security::Unsecured => 0,
            Security::Wep => 1,
            Security::Wpa => 2,
            Security::Wpa2 => 3,
            Security::Other(v) => v,
        }
    }
}
