//! The interactive line editor.
//!
//! ```text
//! AwaitingInput --line--> Executing --response/error--> AwaitingInput
//!       |                     |
//!      EOF                  quit
//!       v                     v
//!            Terminated
//! ```
//!
//! Errors from a line are printed and the loop continues. Only failures of the
//! output stream (or reading input) end the loop early.

use std::io::{self, BufRead, Write};

use crate::session::{Response, Session};

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Why [`Editor::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    EndOfInput,
}

pub struct Editor<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Editor<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn into_parts(self) -> (Session, R, W) {
        (self.session, self.input, self.output)
    }

    /// Read and execute lines until `quit` or end of input.
    ///
    /// A line that is not valid UTF-8 is reported like any other bad line.
    pub fn run(&mut self) -> io::Result<ExitReason> {
        let mut buf = Vec::new();
        loop {
            self.prompt()?;
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.output)?;
                tracing::debug!("End of input");
                return Ok(ExitReason::EndOfInput);
            }
            let Ok(line) = str::from_utf8(&buf) else {
                tracing::debug!(bytes = buf.len(), "Input line is not UTF-8");
                writeln!(self.output, "error: input line is not valid UTF-8")?;
                continue;
            };
            if self.execute_line(line)? == Flow::Quit {
                tracing::debug!("Quit requested");
                return Ok(ExitReason::Quit);
            }
        }
    }

    /// Execute one line and print its result.
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        match self.session.execute(line) {
            Ok(Response::Quit) => Ok(Flow::Quit),
            Ok(Response::Nothing) => Ok(Flow::Continue),
            Ok(response) => {
                writeln!(self.output, "{response}")?;
                Ok(Flow::Continue)
            }
            Err(err) => {
                tracing::debug!(kind = ?err.kind(), "Command failed: {err}");
                writeln!(self.output, "error: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.output, "{}", self.session.settings().prompt())?;
        self.output.flush()
    }
}
