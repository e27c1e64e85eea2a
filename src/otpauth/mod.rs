use url::Url;

use crate::errors::{Error, Result};

/// Parsed `otpauth://totp/...` provisioning URL, the registry's storage
/// format for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningUrl {
    pub account: String,
    pub issuer: Option<String>,
    /// Base32 secret text, kept as entered (decoded lazily by the engine).
    pub secret: String,
    pub digits: u32,
}

impl ProvisioningUrl {
    /// Parses a provisioning URL. Only time-based keys are accepted; the
    /// label may carry the conventional `Issuer:account` prefix, and an
    /// explicit `issuer` query parameter wins over it.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input.trim())
            .map_err(|err| Error::Url(err.to_string()))?;

        if url.scheme() != "otpauth" {
            return Err(Error::Url(format!(
                "unsupported scheme {:?}, expected \"otpauth\"",
                url.scheme()
            )));
        }
        if url.host_str() != Some("totp") {
            return Err(Error::Url(format!(
                "unsupported key type {:?}, only totp keys are supported",
                url.host_str().unwrap_or_default()
            )));
        }

        let label = urlencoding::decode(url.path().trim_start_matches('/'))
            .map_err(|err| Error::Url(format!("label is not valid utf-8: {err}")))?
            .into_owned();

        let mut secret = None;
        let mut issuer = None;
        let mut digits = 6u32;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "secret" => secret = Some(value.into_owned()),
                "issuer" => issuer = Some(value.into_owned()),
                "digits" => {
                    digits = value.parse().map_err(|_| {
                        Error::Url(format!("invalid digits parameter {value:?}"))
                    })?;
                }
                _ => {}
            }
        }

        let secret = match secret {
            Some(secret) if !secret.is_empty() => secret,
            _ => return Err(Error::Url("missing secret parameter".to_owned())),
        };

        let (label_issuer, account) = match label.split_once(':') {
            Some((prefix, suffix)) => {
                (Some(prefix.trim().to_owned()), suffix.trim().to_owned())
            }
            None => (None, label),
        };
        if account.is_empty() {
            return Err(Error::Url("missing account label".to_owned()));
        }

        Ok(Self {
            account,
            issuer: issuer.or(label_issuer).filter(|i| !i.is_empty()),
            secret,
            digits,
        })
    }

    pub fn to_url(&self) -> String {
        let label = match &self.issuer {
            Some(issuer) => format!("{}:{}", issuer, self.account),
            None => self.account.clone(),
        };

        let mut url = format!(
            "otpauth://totp/{}?secret={}&digits={}",
            urlencoding::encode(&label),
            self.secret,
            self.digits
        );
        if let Some(issuer) = &self.issuer {
            url.push_str("&issuer=");
            url.push_str(&urlencoding::encode(issuer));
        }

        url
    }

    /// Human-readable account name: `"<issuer> - <account>"` when an
    /// issuer is present, the bare account name otherwise.
    pub fn display_name(&self) -> String {
        match &self.issuer {
            Some(issuer) => format!("{} - {}", issuer, self.account),
            None => self.account.clone(),
        }
    }
}
