use std::io::{self, BufRead, Write};

use crate::error::{PollError, Result};
use crate::handlers::Session;

impl<R: BufRead, W: Write> Session<R, W> {
    /// Shows `prompt` and reads one line without its line ending.
    ///
    /// End of input is reported as an `UnexpectedEof` console error. Bytes that
    /// are not valid UTF-8 are replaced rather than rejected.
    pub(crate) fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(PollError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    pub(crate) fn ask_yes_no(&mut self, question: &str, default: Option<bool>) -> Result<bool> {
        let hint = match default {
            Some(true) => " [default: y]",
            Some(false) => " [default: n]",
            None => "",
        };

        loop {
            let answer = self.prompt(&format!("{} (y/n){}: ", question, hint))?;
            match (answer.trim().to_lowercase().as_str(), default) {
                ("y" | "yes", _) => return Ok(true),
                ("n" | "no", _) => return Ok(false),
                ("", Some(fallback)) => return Ok(fallback),
                _ => writeln!(self.output, "Please enter 'y' or 'n'")?,
            }
        }
    }
}

pub(crate) fn is_end_of_input(err: &PollError) -> bool {
    matches!(err, PollError::Input(source) if source.kind() == io::ErrorKind::UnexpectedEof)
}
