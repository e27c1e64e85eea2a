use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

use super::Registry;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryFile {
    /// Account name -> otpauth provisioning URL.
    #[serde(default)]
    accounts: BTreeMap<String, String>,
}

/// Registry backed by a plain TOML file. A missing file reads as an
/// empty registry; `add` creates parent directories as needed.
pub struct TomlFileRegistry {
    path: PathBuf,
    file: RegistryFile,
}

impl TomlFileRegistry {
    pub fn open(path: &Path) -> Result<Self> {
        let file = match path.exists() {
            true => {
                let data = fs::read_to_string(path)?;
                toml::from_str::<RegistryFile>(data.as_str())
                    .map_err(|err| Error::Registry(err.to_string()))?
            }
            false => RegistryFile::default(),
        };

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized =
            toml::to_string(&self.file).map_err(|err| Error::Registry(err.to_string()))?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

impl Registry for TomlFileRegistry {
    fn secret_url(&self, account: &str) -> Result<String> {
        if let Some(url) = self.file.accounts.get(account) {
            return Ok(url.clone());
        }

        // Fall back to a case-insensitive match, but only when it is
        // unique: picking one of several silently would hand out a code
        // for the wrong account.
        let matches: Vec<&String> = self
            .file
            .accounts
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case(account))
            .map(|(_, url)| url)
            .collect();

        match matches.as_slice() {
            [] => Err(Error::NotFound(account.to_owned())),
            [url] => Ok((*url).clone()),
            _ => Err(Error::AmbiguousLookup {
                account: account.to_owned(),
                matches: matches.len(),
            }),
        }
    }

    fn account_names(&self) -> Vec<String> {
        self.file.accounts.keys().cloned().collect()
    }

    fn add(&mut self, account: &str, url: &str) -> Result<()> {
        if self.file.accounts.contains_key(account) {
            return Err(Error::Registry(format!(
                "account {account:?} already exists"
            )));
        }
        self.file
            .accounts
            .insert(account.to_owned(), url.to_owned());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_registry() -> (tempfile::TempDir, TomlFileRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let registry = TomlFileRegistry::open(&dir.path().join("accounts.toml")).unwrap();
        (dir, registry)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_dir, registry) = scratch_registry();
        assert!(registry.account_names().is_empty());
        assert!(matches!(
            registry.secret_url("github"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn add_persists_and_lists_sorted() {
        let (dir, mut registry) = scratch_registry();
        registry
            .add("github", "otpauth://totp/github?secret=NBSWY3DP&digits=6")
            .unwrap();
        registry
            .add("aws", "otpauth://totp/aws?secret=NBSWY3DP&digits=6")
            .unwrap();

        assert_eq!(registry.account_names(), vec!["aws", "github"]);

        let reopened = TomlFileRegistry::open(&dir.path().join("accounts.toml")).unwrap();
        assert_eq!(
            reopened.secret_url("github").unwrap(),
            "otpauth://totp/github?secret=NBSWY3DP&digits=6"
        );
    }

    #[test]
    fn refuses_overwrite() {
        let (_dir, mut registry) = scratch_registry();
        registry.add("github", "otpauth://totp/github?secret=AAAA").unwrap();
        assert!(matches!(
            registry.add("github", "otpauth://totp/github?secret=BBBB"),
            Err(Error::Registry(_))
        ));
    }

    #[test]
    fn case_insensitive_fallback_must_be_unique() {
        let (_dir, mut registry) = scratch_registry();
        registry.add("GitHub", "otpauth://totp/a?secret=AAAA").unwrap();
        assert_eq!(
            registry.secret_url("github").unwrap(),
            "otpauth://totp/a?secret=AAAA"
        );

        registry.add("GITHUB", "otpauth://totp/b?secret=BBBB").unwrap();
        assert!(matches!(
            registry.secret_url("github"),
            Err(Error::AmbiguousLookup { matches: 2, .. })
        ));
        // An exact match is still unambiguous.
        assert_eq!(
            registry.secret_url("GitHub").unwrap(),
            "otpauth://totp/a?secret=AAAA"
        );
    }
}
