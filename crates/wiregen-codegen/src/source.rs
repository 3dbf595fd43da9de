//! Indented source text builder

const INDENT: &str = "    ";

/// Line-oriented writer that tracks block indentation
#[derive(Debug, Default)]
pub struct CodeWriter {
    out: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation. Empty text writes a bare
    /// newline.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Write `header {` and indent
    pub fn open(&mut self, header: impl AsRef<str>) {
        let header = header.as_ref();
        if header.is_empty() {
            self.line("{");
        } else {
            self.line(format!("{header} {{"));
        }
        self.depth += 1;
    }

    /// Dedent and write `}`
    pub fn close(&mut self) {
        self.close_with("}");
    }

    /// Dedent and write a custom closer such as `}` followed by `else {`
    pub fn close_with(&mut self, closer: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(closer);
    }

    /// Write `///` doc lines, one per line of `text`
    pub fn doc(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
    }

    /// Append a block produced by another writer at the current indentation
    pub fn append(&mut self, other: &CodeWriter) {
        for line in other.out.lines() {
            self.line(line);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> String {
        self.out
    }
}
