//! Console helpers shared across CLI command modules.
//!
//! Output goes to any [`Write`](std::io::Write) and confirmation answers come
//! from any [`Prompt`], so commands run the same against a terminal and
//! against scripted input.

pub mod console_helper;

pub use console_helper::Console;

use std::io::{self, BufRead};

/// Text printed after the action description.
pub const CONFIRM_PROMPT: &str = "Confirm? (Y/n)";

/// Text printed when the user declines.
pub const CANCELLED: &str = "Operation cancelled";

/// Source of confirmation answers.
pub trait Prompt {
    /// Reads the next line without its line ending, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> Prompt for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        trim_newline(&mut line);
        Ok(Some(line))
    }
}

/// Answer of a confirmation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Cancelled,
}

impl Confirmation {
    /// Only a literal `n`, ignoring case and surrounding whitespace, declines.
    /// End of input counts as an empty answer.
    pub fn from_answer(answer: Option<&str>) -> Self {
        match answer {
            Some(answer) if answer.trim().to_lowercase() == "n" => Confirmation::Cancelled,
            _ => Confirmation::Proceed,
        }
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, Confirmation::Proceed)
    }
}

fn trim_newline(value: &mut String) {
    while value.ends_with(['\n', '\r']) {
        value.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_n_cancels() {
        for answer in ["n", "N", " n ", "n\t"] {
            assert_eq!(
                Confirmation::from_answer(Some(answer)),
                Confirmation::Cancelled,
                "{answer:?}"
            );
        }
        for answer in ["y", "", "anything", "no", "nn"] {
            assert_eq!(
                Confirmation::from_answer(Some(answer)),
                Confirmation::Proceed,
                "{answer:?}"
            );
        }
        assert!(Confirmation::from_answer(None).is_proceed());
    }

    #[test]
    fn prompt_reads_one_line_at_a_time() {
        let mut input = "y\r\nn\n".as_bytes();
        assert_eq!(input.next_line().unwrap().as_deref(), Some("y"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("n"));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn trim_newline_removes_crlf() {
        let mut value = "hello\r\n".to_string();
        trim_newline(&mut value);
        assert_eq!(value, "hello");
    }
}
