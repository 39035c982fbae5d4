//! Prompt-and-read helpers over a line source and sink.
//!
//! Every read returns `Result`: numeric parse failures and end of input are
//! fatal `WardbookError`s, never re-prompted.

use std::io::{BufRead, Write};

use crate::{Result, WardbookError};

/// Console bound to an input line source and an output sink.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line.
    ///
    /// # Errors
    /// Returns error if the sink fails.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Write `text` without a newline, then read one line.
    ///
    /// The trailing line terminator is stripped; nothing else is trimmed.
    ///
    /// # Errors
    /// Returns `EndOfInput` if the source is exhausted.
    pub fn prompt(&mut self, field: &'static str, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(WardbookError::EndOfInput(field));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompt for an integer. The line must be an integer exactly, with no
    /// surrounding whitespace.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the line does not parse.
    pub fn prompt_int(&mut self, field: &'static str, text: &str) -> Result<i32> {
        let line = self.prompt(field, text)?;
        line.parse::<i32>()
            .map_err(|_| WardbookError::InvalidNumber { field, value: line })
    }

    /// Prompt for a floating-point amount. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the line does not parse.
    pub fn prompt_f64(&mut self, field: &'static str, text: &str) -> Result<f64> {
        let line = self.prompt(field, text)?;
        line.trim()
            .parse::<f64>()
            .map_err(|_| WardbookError::InvalidNumber { field, value: line })
    }

    /// Consume the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Render an amount in its shortest round-trip form, always with a
/// fractional part (`0.0`, `170.75`).
///
/// Magnitudes of at least 1e7 or below 1e-3 use `E` notation with a
/// fractional mantissa (`1.0E7`, `1.2345E8`, `1.0E-4`).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{amount:?}");
    }

    let scientific = format!("{amount:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}
