use std::path::Path;

use anyhow::Result;

use crate::registry::{Registry, TomlFileRegistry};

pub fn list_accounts(registry_path: &Path) -> Result<()> {
    let registry = TomlFileRegistry::open(registry_path)?;

    let names = registry.account_names();
    if names.is_empty() {
        println!("Run `tfa add <account>` to add an account.");
        return Ok(());
    }

    for name in names {
        println!("{name}");
    }

    Ok(())
}
