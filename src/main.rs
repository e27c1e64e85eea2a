use anyhow::Result;

mod cli;
mod commands;
mod display;
mod errors;
mod otp;
mod otpauth;
mod registry;

use cli::Cli;

fn main() -> Result<()> {
    Cli::run()
}
