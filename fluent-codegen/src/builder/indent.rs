//! Indentation of generated sources.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Four spaces, the usual Java layout.
    pub const JAVA: Self = Self::Spaces(4);

    /// Append `depth` levels of indentation to `buf`.
    pub fn write(&self, buf: &mut String, depth: usize) {
        for _ in 0..depth {
            match self {
                Self::Spaces(width) => {
                    buf.extend(std::iter::repeat_n(' ', usize::from(*width)))
                }
                Self::Tab => buf.push('\t'),
            }
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
