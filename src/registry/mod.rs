use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::errors;

mod toml_file;

pub use toml_file::TomlFileRegistry;

/// The narrow contract the core needs from an account store. The store
/// itself (encryption, persistence, platform keychains) stays outside
/// the core; only provisioning URLs cross this boundary.
pub trait Registry {
    /// Looks up the stored provisioning URL for an account. A miss is
    /// `Error::NotFound`; more than one match is `Error::AmbiguousLookup`
    /// and must never silently pick one record.
    fn secret_url(&self, account: &str) -> errors::Result<String>;

    /// Stored account names, sorted.
    fn account_names(&self) -> Vec<String>;

    /// Stores a provisioning URL under a new account name. Existing
    /// accounts are immutable; overwriting is refused.
    fn add(&mut self, account: &str, url: &str) -> errors::Result<()>;
}

/// Default registry location: `<config_dir>/tfa/accounts.toml`.
pub fn default_registry_path() -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or(anyhow!("could not determine the user config directory"))?;
    Ok(config_dir.join("tfa").join("accounts.toml"))
}
