use super::{Confirmation, Prompt, CANCELLED, CONFIRM_PROMPT};
use crossterm::style::Stylize;
use std::fmt::Display;
use std::io::{self, IsTerminal, StdinLock, Stdout, Write};
use tracing::debug;

/// User-facing output plus the confirmation gate.
///
/// Results go to `out`; diagnostics go through `tracing` instead.
pub struct Console<P, W> {
    prompt: P,
    out: W,
    assume_yes: bool,
    colored: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard input and output
    pub fn stdio() -> Self {
        let colored = io::stdout().is_terminal();
        Self::new(io::stdin().lock(), io::stdout()).colored(colored)
    }
}

impl<P: Prompt, W: Write> Console<P, W> {
    pub fn new(prompt: P, out: W) -> Self {
        Self {
            prompt,
            out,
            assume_yes: false,
            colored: false,
        }
    }

    /// Colours the tags of `pair` and `warning` lines.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Skips every gate, as `--yes` does.
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn info(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", message.as_ref())?;
        self.out.flush()
    }

    /// Prints `tag: value`
    pub fn pair(&mut self, tag: &str, value: impl Display) -> io::Result<()> {
        if self.colored {
            self.info(format!("{}: {value}", tag.cyan()))
        } else {
            self.info(format!("{tag}: {value}"))
        }
    }

    pub fn warning(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        let message = message.as_ref();
        if self.colored {
            self.info(format!("{}: {message}", "Warning".yellow()))
        } else {
            self.info(format!("Warning: {message}"))
        }
    }

    /// Prints the description, then reads one answer.
    pub fn confirm(&mut self, description: &str) -> io::Result<Confirmation> {
        self.info(description)?;
        if self.assume_yes {
            debug!(target: "ballot", "confirmation skipped (--yes)");
            return Ok(Confirmation::Proceed);
        }

        self.info(CONFIRM_PROMPT)?;
        let answer = self.prompt.next_line()?;
        let confirmation = Confirmation::from_answer(answer.as_deref());
        if !confirmation.is_proceed() {
            self.info(CANCELLED)?;
        }
        Ok(confirmation)
    }

    /// Gives back the output sink
    pub fn into_output(self) -> W {
        self.out
    }
}
