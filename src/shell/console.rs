use std::io::{self, BufRead, Write};

/// The interactive stream a session talks through
pub trait Console {
    /// Write text as-is, flushing so prompts show before input is read
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its terminator; `None` at end of input.
    /// Bytes that are not valid UTF-8 are replaced, never reported as errors.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Ask a y/N question. Anything other than exactly `y` or `Y` is a no.
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.print(&format!("{} (y/N): ", question))?;
        let answer = self.read_line()?;
        Ok(matches!(answer.as_deref(), Some("y") | Some("Y")))
    }
}

/// Console over any reader/writer pair
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
