/// Whitespace-normalized view of a source text.
///
/// Every run of whitespace collapses to a single space. Each byte of the
/// normalized text remembers the byte offset it came from, so a match found
/// in the normalized view can be mapped back onto the original.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    text: String,
    origins: Vec<usize>,
    source_len: usize,
}

impl NormalizedText {
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut origins = Vec::with_capacity(source.len());
        let mut in_whitespace = false;

        for (idx, c) in source.char_indices() {
            if c.is_whitespace() {
                if !in_whitespace {
                    text.push(' ');
                    origins.push(idx);
                }
                in_whitespace = true;
            } else {
                text.push(c);
                for k in 0..c.len_utf8() {
                    origins.push(idx + k);
                }
                in_whitespace = false;
            }
        }

        Self { text, origins, source_len: source.len() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Map a byte offset in the normalized text back to the original source.
    pub fn origin(&self, offset: usize) -> usize {
        self.origins.get(offset).copied().unwrap_or(self.source_len)
    }
}
