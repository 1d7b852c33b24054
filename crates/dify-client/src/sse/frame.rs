//! SSE frame accumulation.
//!
//! Folds classified lines into complete `data` payloads. One payload is
//! produced per blank-line boundary, with consecutive `data:` lines joined by
//! `\n`. Comments and metadata fields never reach the payload.

/// A single classified line of an event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseLine<'a> {
    /// Empty line; ends the current event.
    Blank,
    /// Line starting with `:`.
    Comment(&'a str),
    /// `name: value` line. A line without a colon is a field with an empty value.
    Field { name: &'a str, value: &'a str },
}

impl<'a> SseLine<'a> {
    /// Classify a line (terminator already stripped).
    pub fn parse(line: &'a str) -> Self {
        if line.is_empty() {
            return SseLine::Blank;
        }
        if let Some(comment) = line.strip_prefix(':') {
            return SseLine::Comment(comment);
        }
        match line.split_once(':') {
            Some((name, value)) => SseLine::Field {
                name,
                value: value.strip_prefix(' ').unwrap_or(value),
            },
            None => SseLine::Field {
                name: line,
                value: "",
            },
        }
    }
}

/// Stateful parser turning lines into complete event payloads.
///
/// ```
/// use dify_client::sse::FrameAccumulator;
///
/// let mut acc = FrameAccumulator::new();
/// assert_eq!(acc.push_line("data: {\"a\":"), None);
/// assert_eq!(acc.push_line("data: 1}"), None);
/// assert_eq!(acc.push_line("").as_deref(), Some("{\"a\":\n1}"));
/// ```
#[derive(Debug, Default)]
pub struct FrameAccumulator {
    data: String,
    event: Option<String>,
    last_event_id: Option<String>,
    retry: Option<u64>,
}

impl FrameAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one line. Returns a payload when the line closes a non-empty event.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        match SseLine::parse(line) {
            SseLine::Blank => self.take_payload(),
            SseLine::Comment(_) => None,
            SseLine::Field { name: "data", value } => {
                if !self.data.is_empty() {
                    self.data.push('\n');
                }
                self.data.push_str(value);
                None
            }
            SseLine::Field { name: "event", value } => {
                self.event = Some(value.to_string());
                None
            }
            SseLine::Field { name: "id", value } => {
                // Ids containing NUL are ignored by the SSE grammar.
                if !value.contains('\0') {
                    self.last_event_id = Some(value.to_string());
                }
                None
            }
            SseLine::Field { name: "retry", value } => {
                if let Ok(ms) = value.trim().parse() {
                    self.retry = Some(ms);
                }
                None
            }
            SseLine::Field { .. } => None,
        }
    }

    /// End of input: flush a pending payload that never saw its blank line.
    pub fn finish(&mut self) -> Option<String> {
        self.take_payload()
    }

    /// Whether `data` has been accumulated since the last boundary.
    pub fn has_pending(&self) -> bool {
        !self.data.is_empty()
    }

    /// `event:` name of the event currently being accumulated.
    pub fn event_type(&self) -> Option<&str> {
        self.event.as_deref()
    }

    /// Last `id:` seen on the stream.
    pub fn last_event_id(&self) -> Option<&str> {
        self.last_event_id.as_deref()
    }

    /// Last `retry:` value seen, in milliseconds. Recorded only.
    pub fn retry(&self) -> Option<u64> {
        self.retry
    }

    fn take_payload(&mut self) -> Option<String> {
        self.event = None;
        if self.data.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.data))
    }
}

/// Lazily map an iterator of lines to the payloads they complete.
///
/// A trailing event without a blank line is flushed once the lines run out.
pub fn frames<I>(lines: I) -> Frames<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Frames {
        lines: lines.into_iter(),
        acc: FrameAccumulator::new(),
        done: false,
    }
}

/// Iterator returned by [`frames`].
#[derive(Debug)]
pub struct Frames<I> {
    lines: I,
    acc: FrameAccumulator,
    done: bool,
}

impl<I> Iterator for Frames<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        for line in self.lines.by_ref() {
            if let Some(payload) = self.acc.push_line(line.as_ref()) {
                return Some(payload);
            }
        }
        self.done = true;
        self.acc.finish()
    }
}
