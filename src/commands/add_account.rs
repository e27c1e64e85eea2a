use std::io::{stderr, stdin, Write};
use std::path::Path;

use anyhow::{bail, Result};

use crate::otp::decode_secret;
use crate::otpauth::ProvisioningUrl;
use crate::registry::{Registry, TomlFileRegistry};

pub fn add_account(
    registry_path: &Path,
    account: &str,
    issuer: Option<String>,
    digits: u32,
) -> Result<()> {
    validate_account_name(account)?;

    let mut registry = TomlFileRegistry::open(registry_path)?;

    eprint!("tfa key for {account}: ");
    stderr().flush()?;

    let mut secret = String::new();
    stdin().read_line(&mut secret)?;
    let secret = secret.trim().to_ascii_uppercase();

    // Validate before anything is written.
    decode_secret(secret.as_str())?;

    let key = ProvisioningUrl {
        account: account.to_owned(),
        issuer,
        secret,
        digits,
    };
    registry.add(account, &key.to_url())?;

    println!("Account {} has been added.", key.display_name());
    Ok(())
}

fn validate_account_name(account: &str) -> Result<()> {
    if account.is_empty() {
        bail!("account name must not be empty");
    }
    if account.chars().any(char::is_whitespace) {
        bail!("account name must not contain whitespace");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_account_name;

    #[test]
    fn rejects_names_with_whitespace() {
        for bad in ["git hub", "a\tb", " a", "a\n", ""] {
            assert!(
                validate_account_name(bad).is_err(),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn accepts_plain_names() {
        for good in ["github", "aws-root", "work_email"] {
            assert!(validate_account_name(good).is_ok());
        }
    }
}
