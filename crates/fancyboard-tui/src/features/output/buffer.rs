//! The text being composed.

/// Append-only text buffer with single-char backspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Removes the last `char` (one Unicode scalar value).
    ///
    /// A glyph made of several scalars, like a letter with a combining
    /// stroke, takes one call per scalar.
    pub fn backspace(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backspace_removes_one_scalar() {
        let mut buffer = OutputBuffer::new();
        buffer.push_str("\u{1D421}\u{1D422}");
        assert_eq!(buffer.backspace(), Some('\u{1D422}'));
        assert_eq!(buffer.as_str(), "\u{1D421}");
    }

    #[test]
    fn strikethrough_letter_needs_two_backspaces() {
        let mut buffer = OutputBuffer::new();
        buffer.push_str("a\u{0336}");
        buffer.backspace();
        assert_eq!(buffer.as_str(), "a");
        buffer.backspace();
        assert!(buffer.is_empty());
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut buffer = OutputBuffer::new();
        assert_eq!(buffer.backspace(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn whitespace_only_is_blank() {
        let mut buffer = OutputBuffer::new();
        assert!(buffer.is_blank());
        buffer.push_str(" \n\t");
        assert!(buffer.is_blank());
        buffer.push('x');
        assert!(!buffer.is_blank());
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
