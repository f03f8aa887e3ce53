//! Destinations for formatted lines.

/// Receives formatted lines in order. Lines never contain `\n`.
pub trait LineSink {
    fn push_line(&mut self, line: String);
}

impl LineSink for Vec<String> {
    fn push_line(&mut self, line: String) {
        self.push(line);
    }
}

/// Final document output: trailing spaces are removed from every line,
/// runs of blank lines collapse into one, and blank lines at the start and
/// end of the document are dropped.
#[derive(Debug, Default)]
pub struct PlainTextOutput {
    lines: Vec<String>,
    pending_blank: bool,
}

impl PlainTextOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// The document as text, every line terminated by `\n`.
    pub fn into_text(self) -> String {
        let mut text = String::new();
        for line in self.lines {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}

impl LineSink for PlainTextOutput {
    fn push_line(&mut self, mut line: String) {
        line.truncate(line.trim_end_matches(' ').len());
        if line.is_empty() {
            self.pending_blank = true;
            return;
        }
        if self.pending_blank && !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.pending_blank = false;
        self.lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_compresses_blank_lines() {
        let mut out = PlainTextOutput::new();
        for line in ["", "  ", "a  ", "", "", "   ", "b", "", ""] {
            out.push_line(line.to_string());
        }
        assert_eq!(out.lines(), &["a", "", "b"]);
        assert_eq!(out.into_text(), "a\n\nb\n");
    }
}
