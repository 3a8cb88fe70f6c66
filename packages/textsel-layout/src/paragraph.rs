//! Paragraph splitting and visual ordering
//!
//! Runs the Unicode Bidirectional Algorithm over the whole text and places every
//! char on the advance grid in visual order. Each bidi paragraph becomes one line.

use unicode_bidi::{BidiClass, BidiInfo, Level, bidi_class};

use crate::config::BaseDirection;

/// Placement of one char
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct GlyphCell {
    pub x: f64,
    pub width: f64,
    pub level: u8,
    pub line: usize,
}

impl GlyphCell {
    #[inline]
    pub fn is_rtl(&self) -> bool {
        self.level % 2 == 1
    }

    /// Edge a caret sits on before this char in reading order
    #[inline]
    pub fn leading_edge(&self) -> f64 {
        if self.is_rtl() { self.x + self.width } else { self.x }
    }

    /// Edge a caret sits on after this char in reading order
    #[inline]
    pub fn trailing_edge(&self) -> f64 {
        if self.is_rtl() { self.x } else { self.x + self.width }
    }
}

/// One laid out line; `[start, end)` includes the trailing separator
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LineLayout {
    pub start: usize,
    pub end: usize,
    pub level: u8,
    pub left: f64,
    pub width: f64,
    /// Char indices of visible glyphs, left to right
    pub visual_order: Vec<usize>,
}

impl LineLayout {
    #[inline]
    pub fn is_rtl(&self) -> bool {
        self.level % 2 == 1
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

pub(crate) struct ParagraphAnalyzer {
    base_direction: BaseDirection,
    glyph_width: f64,
}

impl ParagraphAnalyzer {
    pub fn new(base_direction: BaseDirection, glyph_width: f64) -> Self {
        Self {
            base_direction,
            glyph_width,
        }
    }

    fn default_level(&self) -> Option<Level> {
        match self.base_direction {
            BaseDirection::Auto => None,
            BaseDirection::Ltr => Some(Level::ltr()),
            BaseDirection::Rtl => Some(Level::rtl()),
        }
    }

    /// Lays out `text`, returning one cell per char and the lines in order
    pub fn analyze(&self, text: &str) -> (Vec<GlyphCell>, Vec<LineLayout>) {
        let char_bytes: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
        let char_at_byte = |byte: usize| match char_bytes.binary_search(&byte) {
            Ok(index) | Err(index) => index,
        };

        let bidi_info = BidiInfo::new(text, self.default_level());
        let mut cells = vec![GlyphCell::default(); char_bytes.len()];
        let mut lines = Vec::with_capacity(bidi_info.paragraphs.len() + 1);

        for paragraph in &bidi_info.paragraphs {
            let line_index = lines.len();
            let (levels, runs) = bidi_info.visual_runs(paragraph, paragraph.range.clone());

            let mut x = 0.0;
            let mut visual_order = Vec::new();
            for run in runs {
                let mut run_chars: Vec<(usize, char)> = text[run.clone()]
                    .char_indices()
                    .map(|(byte, ch)| (run.start + byte, ch))
                    .collect();
                if levels[run.start].is_rtl() {
                    run_chars.reverse();
                }

                for (byte, ch) in run_chars {
                    let index = char_at_byte(byte);
                    let width = if bidi_class(ch) == BidiClass::B {
                        0.0
                    } else {
                        self.glyph_width
                    };
                    cells[index] = GlyphCell {
                        x,
                        width,
                        level: levels[byte].number(),
                        line: line_index,
                    };
                    if width > 0.0 {
                        visual_order.push(index);
                    }
                    x += width;
                }
            }

            lines.push(LineLayout {
                start: char_at_byte(paragraph.range.start),
                end: char_at_byte(paragraph.range.end),
                level: paragraph.level.number(),
                left: 0.0,
                width: x,
                visual_order,
            });
        }

        let ends_with_separator = text
            .chars()
            .next_back()
            .is_none_or(|ch| bidi_class(ch) == BidiClass::B);
        if ends_with_separator {
            let level = lines
                .last()
                .map(|line| line.level)
                .or_else(|| self.default_level().map(|level| level.number()))
                .unwrap_or(0);
            lines.push(LineLayout {
                start: char_bytes.len(),
                end: char_bytes.len(),
                level,
                left: 0.0,
                width: 0.0,
                visual_order: Vec::new(),
            });
        }

        // Rtl paragraphs hug the right edge of the widest line.
        let layout_width = lines.iter().map(|line| line.width).fold(0.0, f64::max);
        for line in lines.iter_mut().filter(|line| line.is_rtl()) {
            line.left = layout_width - line.width;
            for cell in &mut cells[line.start..line.end] {
                cell.x += line.left;
            }
        }

        log::trace!(
            "laid out {} chars on {} lines, width {}",
            cells.len(),
            lines.len(),
            layout_width
        );

        (cells, lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltr_text_is_laid_out_in_order() {
        let (cells, lines) = ParagraphAnalyzer::new(BaseDirection::Auto, 10.0).analyze("abc");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].visual_order, vec![0, 1, 2]);
        assert_eq!(cells[2].x, 20.0);
        assert!(!lines[0].is_rtl());
    }

    #[test]
    fn rtl_run_is_reversed_inside_ltr_paragraph() {
        let (cells, lines) =
            ParagraphAnalyzer::new(BaseDirection::Auto, 10.0).analyze("ab\u{05D0}\u{05D1}");
        assert_eq!(lines[0].visual_order, vec![0, 1, 3, 2]);
        assert_eq!(cells[2].x, 30.0);
        assert!(cells[2].is_rtl());
        assert_eq!(cells[2].leading_edge(), 40.0);
        assert_eq!(cells[2].trailing_edge(), 30.0);
    }

    #[test]
    fn trailing_newline_opens_an_empty_line() {
        let (cells, lines) = ParagraphAnalyzer::new(BaseDirection::Auto, 10.0).analyze("ab\n");
        assert_eq!(lines.len(), 2);
        assert_eq!((lines[0].start, lines[0].end), (0, 3));
        assert_eq!((lines[1].start, lines[1].end), (3, 3));
        assert_eq!(cells[2].width, 0.0);
    }

    #[test]
    fn forced_rtl_base_direction() {
        let (_, lines) = ParagraphAnalyzer::new(BaseDirection::Rtl, 10.0).analyze("abc");
        assert!(lines[0].is_rtl());
    }

    #[test]
    fn empty_text_has_one_empty_line() {
        let (cells, lines) = ParagraphAnalyzer::new(BaseDirection::Auto, 10.0).analyze("");
        assert!(cells.is_empty());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].start, 0);
    }
}
