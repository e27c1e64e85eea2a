use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::{Error, Result};

use super::hotp;

/// Rotation period in seconds. Fixed per RFC 6238's recommended default;
/// Google Authenticator ignores per-account period parameters, so neither
/// do we.
pub const PERIOD: u64 = 30;

/// Computes the time-based code for the given unix timestamp.
///
/// The counter is the number of whole periods since the epoch; everything
/// else is delegated to the HOTP engine. Clock skew on the host directly
/// shifts the counter; the engine does not compensate for it.
pub fn totp(secret: &[u8], unix_time: u64, digits: u32) -> Result<String> {
    hotp(secret, unix_time / PERIOD, digits)
}

/// Seconds since the unix epoch from the system wall clock.
pub fn unix_now() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .map_err(|err| Error::Engine(format!("system clock before unix epoch: {err}")))
}
