//! Incremental byte-to-line splitting for `text/event-stream` bodies.
//!
//! The server may flush at any byte offset, so a chunk can end in the middle
//! of a line, in the middle of a multi-byte UTF-8 sequence, or between the
//! `\r` and `\n` of a CRLF pair. [`LineDecoder`] buffers the unterminated
//! tail and only decodes a line once its terminator has arrived.

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Splits a chunked byte stream into text lines.
///
/// Recognises `\n`, `\r\n` and bare `\r` as line terminators. Terminators are
/// stripped from the returned lines.
#[derive(Debug, Default)]
pub struct LineDecoder {
    /// Bytes of the current, not yet terminated line.
    pending: Vec<u8>,
    /// The previous chunk ended with `\r`; a leading `\n` belongs to it.
    skip_lf: bool,
    /// Whether the BOM check at stream start has been done.
    started: bool,
}

impl LineDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes, returning every line completed by it.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut bytes = chunk;

        if self.skip_lf && !bytes.is_empty() {
            if bytes[0] == b'\n' {
                bytes = &bytes[1..];
            }
            self.skip_lf = false;
        }

        let mut start = 0;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b == b'\n' || b == b'\r' {
                self.pending.extend_from_slice(&bytes[start..i]);
                lines.push(self.take_line());

                if b == b'\r' {
                    match bytes.get(i + 1) {
                        Some(b'\n') => i += 1,
                        Some(_) => {}
                        None => self.skip_lf = true,
                    }
                }
                start = i + 1;
            }
            i += 1;
        }

        if start < bytes.len() {
            self.pending.extend_from_slice(&bytes[start..]);
        }

        lines
    }

    /// Flush the unterminated tail at end of input, if any.
    pub fn finish(&mut self) -> Option<String> {
        self.skip_lf = false;
        if self.pending.is_empty() {
            return None;
        }
        Some(self.take_line())
    }

    /// Whether bytes are buffered without a terminator yet.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    fn take_line(&mut self) -> String {
        let mut raw = std::mem::take(&mut self.pending);
        if !self.started {
            self.started = true;
            if raw.starts_with(BOM) {
                raw.drain(..BOM.len());
            }
        }
        match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(chunks: &[&[u8]]) -> Vec<String> {
        let mut decoder = LineDecoder::new();
        let mut lines = Vec::new();
        for chunk in chunks {
            lines.extend(decoder.feed(chunk));
        }
        lines.extend(decoder.finish());
        lines
    }

    #[test]
    fn test_lf_lines() {
        let lines = feed_all(&[b"data: a\n\ndata: b\n\n"]);
        assert_eq!(lines, vec!["data: a", "", "data: b", ""]);
    }

    #[test]
    fn test_crlf_lines() {
        let lines = feed_all(&[b"data: a\r\n\r\ndata: b\r\n"]);
        assert_eq!(lines, vec!["data: a", "", "data: b"]);
    }

    #[test]
    fn test_bare_cr_lines() {
        let lines = feed_all(&[b"data: a\r\rdata: b\r"]);
        assert_eq!(lines, vec!["data: a", "", "data: b"]);
    }

    #[test]
    fn test_crlf_split_across_chunks() {
        let lines = feed_all(&[b"data: a\r", b"\n", b"\r", b"\ndata: b\n"]);
        assert_eq!(lines, vec!["data: a", "", "data: b"]);
    }

    #[test]
    fn test_partial_line_buffered_until_terminator() {
        let mut decoder = LineDecoder::new();
        assert!(decoder.feed(b"data: {\"id\"").is_empty());
        assert!(decoder.has_pending());
        assert_eq!(decoder.feed(b":1}\n"), vec!["data: {\"id\":1}"]);
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_multibyte_char_split_across_chunks() {
        let text = "data: héllo\n".as_bytes();
        // Split inside the two-byte 'é'
        let split = text.iter().position(|&b| b == 0xC3).unwrap() + 1;
        let lines = feed_all(&[&text[..split], &text[split..]]);
        assert_eq!(lines, vec!["data: héllo"]);
    }

    #[test]
    fn test_finish_returns_unterminated_tail() {
        let mut decoder = LineDecoder::new();
        assert!(decoder.feed(b"data: tail").is_empty());
        assert_eq!(decoder.finish().as_deref(), Some("data: tail"));
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn test_leading_bom_stripped() {
        let lines = feed_all(&[b"\xEF\xBB\xBFdata: x\n"]);
        assert_eq!(lines, vec!["data: x"]);
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        let lines = feed_all(&[b"data: \xFF\n"]);
        assert_eq!(lines, vec!["data: \u{FFFD}"]);
    }
}
