mod hotp;
mod secret;
mod totp;

pub use hotp::hotp;
pub use secret::{decode_secret, encode_secret};
pub use totp::{totp, unix_now, PERIOD};
