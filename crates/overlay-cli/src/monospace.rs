// Imports
use overlay_engine::{TextAlignment, TextContent, TextLayout};

/// A text layout where every character has the same advance.
///
/// Lines are wrapped greedily at whitespace, words wider than the line get a line of their own.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MonospaceLayout;

impl MonospaceLayout {
    /// Character advance, relative to the font size.
    pub(crate) const CHAR_ADVANCE: f64 = 0.6;
    /// Line height, relative to the font size.
    pub(crate) const LINE_HEIGHT: f64 = 1.2;

    /// The number of lines the paragraph occupies when wrapped to `max_chars` characters.
    fn wrapped_lines(paragraph: &str, max_chars: usize) -> usize {
        let mut lines = 1;
        let mut current = 0;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            if current == 0 {
                current = len;
            } else if current + 1 + len <= max_chars {
                current += 1 + len;
            } else {
                lines += 1;
                current = len;
            }
        }
        lines
    }
}

impl TextLayout for MonospaceLayout {
    fn measure(&self, content: &TextContent) -> na::Vector2<f64> {
        let font_size = content.base_font_size;
        let (lines, max_chars) = content
            .text
            .split('\n')
            .fold((0, 0), |(lines, max_chars), line| {
                (lines + 1, max_chars.max(line.chars().count()))
            });
        na::vector![
            max_chars as f64 * Self::CHAR_ADVANCE * font_size,
            lines as f64 * Self::LINE_HEIGHT * font_size
        ]
    }

    fn layout(
        &self,
        text: &str,
        width: f64,
        font_size: f64,
        _alignment: TextAlignment,
    ) -> na::Vector2<f64> {
        // alignment only moves glyphs within a line, the extents stay the same
        let max_chars =
            ((width / (Self::CHAR_ADVANCE * font_size) + 1e-9).floor() as usize).max(1);
        let lines: usize = text
            .split('\n')
            .map(|paragraph| Self::wrapped_lines(paragraph, max_chars))
            .sum();
        na::vector![width, lines as f64 * Self::LINE_HEIGHT * font_size]
    }
}
