//! Line-based read-eval-print loop.

use crate::router::handlers::{CommandRouter, Reply};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

/// Banner printed once before the first prompt.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Read commands from `input` until `exit`/`close` or end of input.
///
/// Every prompt and reply goes to `output`. End of input is treated like
/// `exit`. Bytes that are not valid UTF-8 are replaced with U+FFFD, so a
/// garbled line is handled as an ordinary command.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` are returned; command errors are
/// printed as replies.
pub fn run<R, W>(router: &mut CommandRouter, mut input: R, mut output: W, prompt: &str) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush().context("Failed to flush prompt")?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read command line")?;
        if read == 0 {
            info!("End of input reached");
            writeln!(output)?;
            writeln!(output, "Good bye!")?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        match router.handle_line(line) {
            Some(Reply::Continue(text)) => writeln!(output, "{}", text)?,
            Some(Reply::Exit(text)) => {
                writeln!(output, "{}", text)?;
                break;
            }
            None => {}
        }
    }

    info!("{}", router.metrics().summary());
    Ok(())
}
