/// Collects lines of a double-lined box `width` characters wide on the inside.
///
/// Text wider than the box is kept whole and pushes the right border out.
pub(crate) struct Frame {
    width: usize,
    lines: Vec<String>,
}

impl Frame {
    /// Starts a frame with its top border.
    pub(crate) fn new(width: usize) -> Self {
        let mut frame = Frame {
            width,
            lines: vec![],
        };
        frame.rule('╔', '╗');
        frame
    }

    pub(crate) fn divider(&mut self) {
        self.rule('╠', '╣');
    }

    pub(crate) fn left(&mut self, text: &str) {
        self.lines
            .push(format!("║{:<width$}║", text, width = self.width));
    }

    pub(crate) fn centered(&mut self, text: &str) {
        self.lines
            .push(format!("║{:^width$}║", text, width = self.width));
    }

    /// Closes the frame with its bottom border.
    pub(crate) fn finish(mut self) -> String {
        self.rule('╚', '╝');
        self.lines.join("\n")
    }

    fn rule(&mut self, left: char, right: char) {
        self.lines
            .push(format!("{}{}{}", left, "═".repeat(self.width), right));
    }
}
