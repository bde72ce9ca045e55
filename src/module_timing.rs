use embassy_time::Duration;

/// Time to wait after handing the callbacks to the host driver and before
/// starting the module. Without it the CC3000 occasionally hangs in `start`.
pub fn settle_time() -> Duration {
    Duration::from_millis(100)
}
