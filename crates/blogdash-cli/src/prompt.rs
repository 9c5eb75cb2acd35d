//! Terminal confirmation prompt

use blogdash_client::ConfirmPrompt;
use parking_lot::Mutex;
use std::io::{BufRead, Stderr, StdinLock, Write};

/// Asks a yes/no question on `output` and reads the answer from `input`
///
/// Only `y` or `yes` (any case) confirms; read or write failures count as no.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Prompt over the given reader and writer
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    /// Recover the writer, e.g. to inspect what was asked
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl LinePrompt<StdinLock<'static>, Stderr> {
    /// Prompt on stderr, answer on stdin
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> ConfirmPrompt for LinePrompt<R, W> {
    fn confirm(&self, message: &str) -> bool {
        {
            let mut output = self.output.lock();
            if write!(output, "{message} [y/N] ")
                .and_then(|()| output.flush())
                .is_err()
            {
                return false;
            }
        }

        let mut answer = String::new();
        if self.input.lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
