use std::io::{stdin, stdout};
use std::path::Path;
use std::sync::mpsc::channel;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use termion::{input::TermRead, raw::IntoRawMode};

use crate::display::display_code;
use crate::otp::decode_secret;
use crate::otpauth::ProvisioningUrl;
use crate::registry::{Registry, TomlFileRegistry};

pub fn show_account(
    registry_path: &Path,
    account: &str,
    duration: Option<u64>,
) -> Result<()> {
    let registry = TomlFileRegistry::open(registry_path)?;
    let key = ProvisioningUrl::parse(&registry.secret_url(account)?)?;
    let secret = decode_secret(&key.secret)?;

    let deadline = duration.map(Duration::from_secs);
    let (sender, receiver) = channel();

    let stdout = stdout();
    if termion::is_tty(&stdout) {
        let mut stdout = stdout.into_raw_mode()?;

        thread::spawn(move || {
            // Any key cancels. The display loop observes at most one
            // signal, so one send is all the listener ever produces.
            if stdin().keys().next().is_some() {
                sender.send(()).ok();
            }
        });

        display_code(&mut stdout, &secret, key.digits, &receiver, deadline)?;
    } else {
        // No terminal to put into raw mode or read keys from; the sender
        // is kept alive so the absence of a listener is not taken for a
        // cancellation, and the deadline bounds the run instead.
        let _sender = sender;
        display_code(&mut stdout.lock(), &secret, key.digits, &receiver, deadline)?;
    }

    Ok(())
}
