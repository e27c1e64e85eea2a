use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::errors::{Error, Result};

type HmacSha1 = Hmac<Sha1>;

/// Computes an RFC 4226 counter-based one-time code.
///
/// The counter is MACed as 8 big-endian bytes, the digest dynamically
/// truncated to a 31-bit value and reduced mod 10^digits. `digits` is
/// clamped to [1, 8]; the result is left-zero-padded to exactly that
/// length. Pure function, safe to call from any number of threads.
pub fn hotp(secret: &[u8], counter: u64, digits: u32) -> Result<String> {
    let digits = digits.clamp(1, 8);

    let mut mac = HmacSha1::new_from_slice(secret)
        .map_err(|err| Error::Engine(err.to_string()))?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let offset = (digest[19] & 0x0f) as usize;
    let truncated = (u32::from(digest[offset] & 0x7f) << 24)
        | (u32::from(digest[offset + 1]) << 16)
        | (u32::from(digest[offset + 2]) << 8)
        | u32::from(digest[offset + 3]);

    let code = truncated % 10u32.pow(digits);

    Ok(format!("{:0width$}", code, width = digits as usize))
}
