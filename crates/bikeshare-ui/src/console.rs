//! Line-oriented console I/O.
//!
//! Wraps a reader/writer pair so prompts, reports and the row browser can
//! run against stdin/stdout in the binary and against in-memory buffers in
//! tests.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Width of the dashed rule printed between sections.
pub const RULE_WIDTH: usize = 40;

/// A dashed horizontal rule.
pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Interactive console over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// The trailing line terminator is stripped. Returns `Ok(None)` at
    /// end-of-file.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input is piped.
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Print one line.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Direct access for multi-line renderers.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, e.g. to inspect a test transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}
