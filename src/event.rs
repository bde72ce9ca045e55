/// Unsolicited events the host driver forwards through
/// [`HostInterface::async_event`](crate::host::HostInterface::async_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AsyncEvent {
    Connect,
    Disconnect,
    Init,
    TxComplete,
    Dhcp,
    PingReport,
    SmartConfigDone,
    Keepalive,
    TcpCloseWait,
    CanShutDown,
    Unknown(u32),
}

impl From<u32> for AsyncEvent {
    fn from(code: u32) -> Self {
        match code {
            0x4001 => Self::Connect,
            0x4002 => Self::Disconnect,
            0x4004 => Self::Init,
            0x4008 => Self::TxComplete,
            0x4010 => Self::Dhcp,
            0x4040 => Self::PingReport,
            0x4080 => Self::SmartConfigDone,
            0x4200 => Self::Keepalive,
            0x4800 => Self::TcpCloseWait,
            0x0099 => Self::CanShutDown,
            code => Self::Unknown(code),
        }
    }
}

/// Ping statistics as laid out in the driver's ping report event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PingReport {
    pub sent: u32,
    pub received: u32,
    pub min_round_trip_ms: u32,
    pub max_round_trip_ms: u32,
    pub avg_round_trip_ms: u32,
}

impl PingReport {
    /// Parse the five little-endian words of a ping report.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let mut words = data
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]));

        Some(Self {
            sent: words.next()?,
            received: words.next()?,
            min_round_trip_ms: words.next()?,
            max_round_trip_ms: words.next()?,
            avg_round_trip_ms: words.next()?,
        })
    }
}

/// Connection state as seen through the asynchronous events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WlanStatus {
    pub connected: bool,
    pub dhcp_complete: bool,
    pub smart_config_done: bool,
    pub ok_to_shut_down: bool,
    pub last_ping: Option<PingReport>,
}

impl WlanStatus {
    pub const fn new() -> Self {
        Self {
            connected: false,
            dhcp_complete: false,
            smart_config_done: false,
            ok_to_shut_down: false,
            last_ping: None,
        }
    }

    pub fn update(&mut self, event: AsyncEvent, data: &[u8]) {
        match event {
            AsyncEvent::Connect => self.connected = true,
            AsyncEvent::Disconnect => {
                self.connected = false;
                self.dhcp_complete = false;
            }
            // First byte of the payload is the DHCP status, 0 on success
            AsyncEvent::Dhcp => self.dhcp_complete = data.first() == Some(&0),
            AsyncEvent::PingReport => {
                self.last_ping = PingReport::parse(data);
            }
            AsyncEvent::SmartConfigDone => self.smart_config_done = true,
            AsyncEvent::CanShutDown => self.ok_to_shut_down = true,
            AsyncEvent::Init
            | AsyncEvent::TxComplete
            | AsyncEvent::Keepalive
            | AsyncEvent::TcpCloseWait
            | AsyncEvent::Unknown(_) => {}
        }
    }
}
