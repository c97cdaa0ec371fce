//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Buffer that tracks indentation while code is appended.
///
/// # Example
///
/// ```
/// use fluent_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::java();
/// builder.emit(&vec![CodeFragment::block(
///     "public class Leaf {",
///     vec![CodeFragment::line("protected int id;")],
///     "}",
/// )]);
///
/// assert_eq!(builder.build(), "public class Leaf {\n    protected int id;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a documentation comment.
    ///
    /// Single-line text renders as `/** text */`; multi-line text as a
    /// starred block.
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() <= 1 {
            return self.push_line(&format!("/** {} */", text.trim()));
        }
        self.push_line("/**");
        for line in lines {
            let line = line.trim_end();
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
        }
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write(&mut self.buffer, self.indent_level);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::java();
        builder.emit(&vec![CodeFragment::block(
            "public class Leaf {",
            vec![CodeFragment::block(
                "public static class Builder {",
                vec![CodeFragment::line("protected String[] tags = null;")],
                "}",
            )],
            "}",
        )]);
        assert_eq!(
            builder.build(),
            "public class Leaf {\n    public static class Builder {\n        protected String[] tags = null;\n    }\n}\n"
        );
    }

    #[test]
    fn test_single_line_doc() {
        let mut builder = CodeBuilder::java();
        builder.push_doc("Sets the id.");
        assert_eq!(builder.as_str(), "/** Sets the id. */\n");
    }

    #[test]
    fn test_multi_line_doc() {
        let mut builder = CodeBuilder::java();
        builder.push_indent().push_doc("First line.\n\nThird line.");
        assert_eq!(
            builder.as_str(),
            "    /**\n     * First line.\n     *\n     * Third line.\n     */\n"
        );
    }

    #[test]
    fn test_empty_line_has_no_trailing_whitespace() {
        let mut builder = CodeBuilder::java();
        builder.push_indent().push_line("");
        assert_eq!(builder.as_str(), "\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::java();
        builder.push_dedent();
        assert_eq!(builder.current_indent(), 0);
    }
}
