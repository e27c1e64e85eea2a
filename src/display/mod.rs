use std::io::Write;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use termion::{clear, color, cursor, style};

use crate::errors::Result;
use crate::otp::{hotp, unix_now, PERIOD};

mod countdown;

pub use countdown::CountdownBand;

/// Renders a rotating code with a live countdown until cancelled.
///
/// The loop owns `out` for its whole run: the cursor is hidden on entry
/// and restored on every exit path, error included. `cancel` carries at
/// most one signal; a disconnected sender counts as cancellation.
/// `deadline` bounds the run for non-interactive callers. Returns the
/// last-rendered code so the caller can log or copy it.
pub fn display_code<W: Write>(
    out: &mut W,
    secret: &[u8],
    digits: u32,
    cancel: &Receiver<()>,
    deadline: Option<Duration>,
) -> Result<String> {
    write!(out, "{}", cursor::Hide)?;
    out.flush()?;

    let result = tick_loop(out, secret, digits, cancel, deadline);

    write!(out, "\r\n{}", cursor::Show).ok();
    out.flush().ok();

    result
}

fn tick_loop<W: Write>(
    out: &mut W,
    secret: &[u8],
    digits: u32,
    cancel: &Receiver<()>,
    deadline: Option<Duration>,
) -> Result<String> {
    let started = Instant::now();

    let mut counter = unix_now()? / PERIOD;
    let mut code = hotp(secret, counter, digits)?;

    loop {
        // Remaining time is re-derived from the wall clock on every tick,
        // so a slow render or delayed wakeup corrects itself within one
        // tick instead of accumulating drift.
        let now = unix_now()?;
        if now / PERIOD != counter {
            counter = now / PERIOD;
            code = hotp(secret, counter, digits)?;
        }
        render_line(out, PERIOD - now % PERIOD, &code)?;

        if let Some(limit) = deadline {
            if started.elapsed() >= limit {
                return Ok(code);
            }
        }

        match cancel.recv_timeout(Duration::from_secs(1)) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return Ok(code),
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}

fn render_line<W: Write>(out: &mut W, remaining: u64, code: &str) -> Result<()> {
    let digits = format!("{remaining:02}");
    let colored = match CountdownBand::classify(remaining, PERIOD) {
        CountdownBand::Fresh => {
            format!("{}{digits}{}", color::Fg(color::Green), color::Fg(color::Reset))
        }
        CountdownBand::Caution => {
            format!("{}{digits}{}", color::Fg(color::Yellow), color::Fg(color::Reset))
        }
        CountdownBand::Urgent => {
            format!("{}{digits}{}", color::Fg(color::Red), color::Fg(color::Reset))
        }
    };

    write!(
        out,
        "\r{}  [{}{colored}{}]  {code}  ",
        clear::CurrentLine,
        style::Bold,
        style::Reset
    )?;
    out.flush()?;

    Ok(())
}
