use thiserror::Error;

/// Failure taxonomy for the code engine, registry and display loop.
///
/// Commands wrap these in `anyhow` at the CLI boundary; nothing below
/// `main` decides an exit code or terminates the process.
#[derive(Debug, Error)]
pub enum Error {
    /// Secret text is not valid Base32.
    #[error("invalid base32 secret: {0}")]
    Decode(String),

    /// Account is absent from the registry.
    #[error("no such account: {0}")]
    NotFound(String),

    /// More than one stored record matches the requested account.
    #[error("ambiguous account {account:?}: {matches} records match")]
    AmbiguousLookup { account: String, matches: usize },

    /// HMAC construction failed; indicates a platform or programming
    /// defect, never bad user input.
    #[error("otp engine failure: {0}")]
    Engine(String),

    /// Malformed otpauth provisioning URL.
    #[error("invalid provisioning url: {0}")]
    Url(String),

    /// Registry refused the operation (e.g. duplicate account).
    #[error("registry error: {0}")]
    Registry(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
