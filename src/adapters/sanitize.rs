//! Log sanitization for credential and contact-detail filtering.
//!
//! Applied to every formatted log line before it reaches the sink, so a
//! stray field can never put a password or a phone number into the log:
//! - Credential assignments (`password=...`, `secret: ...`)
//! - Email addresses
//! - Phone numbers
//! - Long hex strings
//!
//! Call sites should still avoid logging sensitive values at all; this is a
//! fallback.

use std::sync::OnceLock;

use regex::{Regex, RegexSet};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum number of bytes sanitized per line; the rest is dropped.
const MAX_SANITIZE_BYTES: usize = 8 * 1024;

struct Rule {
    regex: Regex,
    replacement: &'static str,
}

struct Rules {
    set: RegexSet,
    rules: Vec<Rule>,
}

static RULES: OnceLock<Rules> = OnceLock::new();

fn rules() -> &'static Rules {
    RULES.get_or_init(|| {
        let table: [(&str, &str); 4] = [
            (
                r"(?i)\b(?:password|passwd|pwd|secret|token)\b\s*[:=]\s*\S+",
                "[REDACTED-SECRET]",
            ),
            (
                r"(?i)\b[a-z0-9](?:[a-z0-9._%+-]{0,62}[a-z0-9])?@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}\b",
                "[REDACTED-EMAIL]",
            ),
            (
                r"\b(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b",
                "[REDACTED-PHONE]",
            ),
            (r"\b[0-9a-fA-F]{32,}\b", "[REDACTED-KEY]"),
        ];

        let set = RegexSet::new(table.iter().map(|(p, _)| *p)).expect("Valid regex set");
        let rules = table
            .into_iter()
            .map(|(pattern, replacement)| Rule {
                regex: Regex::new(pattern).expect("Valid regex"),
                replacement,
            })
            .collect();

        Rules { set, rules }
    })
}

fn truncate_to_char_boundary(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }

    let mut end = max_bytes;
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

/// Replace every sensitive match in `input`.
#[must_use]
pub fn sanitize(input: &str) -> String {
    sanitize_with_limit(input, MAX_SANITIZE_BYTES)
}

fn sanitize_with_limit(input: &str, max_bytes: usize) -> String {
    let rules = rules();
    let (prefix, truncated) = truncate_to_char_boundary(input, max_bytes);

    let mut result = prefix.to_string();
    for idx in rules.set.matches(prefix).into_iter() {
        let rule = &rules.rules[idx];
        result = rule.regex.replace_all(&result, rule.replacement).into_owned();
    }

    if truncated {
        result.push_str(" [TRUNCATED]");
    }
    result
}

/// A `tracing_subscriber` writer wrapper that sanitizes formatted log output
/// line by line before it is written to the underlying sink.
#[derive(Debug, Clone)]
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

/// Line-buffering writer produced by `SanitizingMakeWriter`.
pub struct SanitizingWriter<W: std::io::Write> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W: std::io::Write> SanitizingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
        }
    }

    fn write_sanitized(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        let text = String::from_utf8_lossy(bytes);
        self.inner.write_all(sanitize(&text).as_bytes())
    }

    fn flush_lines(&mut self) -> std::io::Result<()> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.write_sanitized(&line)?;
        }
        Ok(())
    }
}

impl<W: std::io::Write> std::io::Write for SanitizingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        // A single line with no newline must not grow without bound.
        if self.buffer.len() > MAX_SANITIZE_BYTES * 2 {
            let pending = std::mem::take(&mut self.buffer);
            self.write_sanitized(&pending)?;
            self.inner.write_all(b"\n[TRUNCATED]\n")?;
            return Ok(buf.len());
        }

        self.flush_lines()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_lines()?;
        if !self.buffer.is_empty() {
            let pending = std::mem::take(&mut self.buffer);
            self.write_sanitized(&pending)?;
        }
        self.inner.flush()
    }
}

impl<W: std::io::Write> Drop for SanitizingWriter<W> {
    fn drop(&mut self) {
        let _ = std::io::Write::flush(self);
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter::new(self.inner.make_writer())
    }
}
