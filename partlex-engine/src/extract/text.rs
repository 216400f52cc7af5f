//! Char-offset bookkeeping for multi-byte text.

/// Maps byte offsets (what regex and aho-corasick report) to char offsets
/// (what every proximity rule counts). Built once per input line.
pub struct TextIndex {
    /// Byte offset where each char starts, plus a trailing total-length entry.
    char_starts: Vec<usize>,
    chars: Vec<char>,
}

impl TextIndex {
    pub fn new(text: &str) -> Self {
        let mut char_starts: Vec<usize> = Vec::with_capacity(text.len() + 1);
        let mut chars: Vec<char> = Vec::with_capacity(text.len());
        for (byte, ch) in text.char_indices() {
            char_starts.push(byte);
            chars.push(ch);
        }
        char_starts.push(text.len());
        Self { char_starts, chars }
    }

    /// Total length in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Char offset for a byte offset. Byte offsets falling inside a char
    /// round down to that char; `text.len()` maps to `self.len()`.
    pub fn char_at(&self, byte: usize) -> usize {
        self.char_starts.partition_point(|&start| start <= byte) - 1
    }

    /// The char at a char offset, if in range.
    pub fn char(&self, at: usize) -> Option<char> {
        self.chars.get(at).copied()
    }

    /// Whether a char span sits on word boundaries on both sides. Word
    /// chars are alphanumerics (Hebrew letters included); everything else
    /// separates words.
    pub fn is_word(&self, start: usize, end: usize) -> bool {
        let before_ok = start == 0 || !is_word_char(self.chars[start - 1]);
        let after_ok = end >= self.chars.len() || !is_word_char(self.chars[end]);
        before_ok && after_ok
    }

    /// Whether a char span sits on token boundaries. A letter running
    /// straight into another letter (or a digit into another digit) means
    /// the span is a fragment of a longer token; a letter followed by a
    /// glued digit is a legitimate model-number suffix and stays a boundary.
    pub fn on_token_boundary(&self, start: usize, end: usize) -> bool {
        if start > 0 && same_token_class(self.chars[start - 1], self.chars[start]) {
            return false;
        }
        if end < self.chars.len() && same_token_class(self.chars[end - 1], self.chars[end]) {
            return false;
        }
        true
    }

    /// The first non-space char at or after a char offset.
    pub fn next_non_space(&self, from: usize) -> Option<char> {
        self.chars[from.min(self.chars.len())..]
            .iter()
            .copied()
            .find(|c| !c.is_whitespace())
    }
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

fn same_token_class(a: char, b: char) -> bool {
    (a.is_alphabetic() && b.is_alphabetic()) || (a.is_ascii_digit() && b.is_ascii_digit())
}

/// Substring containment over a context-term table.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_offsets_for_hebrew() {
        let text = "פ.אויר מזדה";
        let index = TextIndex::new(text);
        assert_eq!(index.len(), 11);
        // "מ" starts at byte 12 (six Hebrew chars of 2 bytes, a dot, a space).
        assert_eq!(index.char_at(12), 7);
        assert_eq!(index.char_at(text.len()), 11);
    }

    #[test]
    fn word_boundaries() {
        let index = TextIndex::new("abc 4x4 def");
        assert!(index.is_word(4, 7));
        assert!(!index.is_word(5, 7));
        let embedded = TextIndex::new("x4x4y");
        assert!(!embedded.is_word(1, 4));
    }

    #[test]
    fn token_boundaries_split_by_char_class() {
        // "רפיד" inside "רפידות" runs letter-into-letter on the right.
        let index = TextIndex::new("רפידות");
        assert!(!index.on_token_boundary(0, 4));
        // A glued generation digit is still a boundary.
        let glued = TextIndex::new("מזדה3");
        assert!(glued.on_token_boundary(0, 4));
        // A digit fragment inside a number is not.
        let number = TextIndex::new("מ13");
        assert!(!number.on_token_boundary(2, 3));
    }

    #[test]
    fn next_non_space_skips_whitespace() {
        let index = TextIndex::new("מזדה  3");
        assert_eq!(index.next_non_space(4), Some('3'));
        assert_eq!(index.next_non_space(7), None);
    }
}
