//! Line buffer for the tree printer.

use super::config::PrintConfig;

/// Collects one line per node, indented by nesting depth.
pub struct FormatWriter {
    output: String,
    depth: usize,
    config: PrintConfig,
}

impl FormatWriter {
    pub fn new(config: PrintConfig) -> Self {
        Self {
            output: String::new(),
            depth: 0,
            config,
        }
    }

    /// The printed tree.
    pub fn finish(self) -> String {
        self.output
    }

    /// Children of the node just written go one level deeper.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Back to the parent's level; never below the root.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Append `text` as a full line at the current depth.
    pub fn push_line(&mut self, text: &str) {
        let width = self.depth * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_writer_is_empty() {
        let writer = FormatWriter::new(PrintConfig::default());
        assert_eq!(writer.depth(), 0);
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_dedent_at_root_stays_at_root() {
        let mut writer = FormatWriter::new(PrintConfig::default());
        writer.dedent();
        assert_eq!(writer.depth(), 0);
    }

    #[test]
    fn test_lines_follow_depth() {
        let mut writer = FormatWriter::new(PrintConfig::new().with_indent_width(3));
        writer.push_line("Program");
        writer.indent();
        writer.push_line("LetCommand");
        writer.indent();
        writer.push_line("NothingCommand");
        writer.dedent();
        writer.dedent();
        writer.push_line("done");
        assert_eq!(writer.finish(), "Program\n   LetCommand\n      NothingCommand\ndone\n");
    }

    #[test]
    fn test_zero_width_indent_keeps_lines_flush() {
        let mut writer = FormatWriter::new(PrintConfig::new().with_indent_width(0));
        writer.indent();
        writer.push_line("SimpleVname");
        assert_eq!(writer.finish(), "SimpleVname\n");
    }
}
