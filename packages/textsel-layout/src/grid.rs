//! Grid layout and its answers to the layout oracle queries

use textsel_traits::{
    AnnotatedString, Point, Rect, ResolvedTextDirection, Size, TextLayoutResult, TextRange,
};

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::paragraph::{GlyphCell, LineLayout, ParagraphAnalyzer};
use crate::word::word_boundary;

/// Immutable layout of one text on a fixed advance grid.
#[derive(Debug, Clone)]
pub struct GridTextLayout {
    text: AnnotatedString,
    cells: Vec<GlyphCell>,
    lines: Vec<LineLayout>,
    line_height: f64,
    size: Size,
}

impl GridTextLayout {
    /// Lays out a plain string, styled with `config.span_style` when set
    pub fn new(text: &str, config: &LayoutConfig) -> Result<Self, LayoutError> {
        let text = match &config.span_style {
            Some(style) => AnnotatedString::styled(text, style.clone()),
            None => AnnotatedString::new(text),
        };
        Self::from_annotated(text, config)
    }

    pub fn from_annotated(
        text: AnnotatedString,
        config: &LayoutConfig,
    ) -> Result<Self, LayoutError> {
        if !config.glyph_width.is_finite() || config.glyph_width <= 0.0 {
            return Err(LayoutError::InvalidGlyphWidth(config.glyph_width));
        }
        if !config.line_height.is_finite() || config.line_height <= 0.0 {
            return Err(LayoutError::InvalidLineHeight(config.line_height));
        }

        let (cells, lines) =
            ParagraphAnalyzer::new(config.base_direction, config.glyph_width).analyze(text.text());
        let width = lines.iter().map(|line| line.width).fold(0.0, f64::max);
        let size = Size::new(width, lines.len() as f64 * config.line_height);

        Ok(Self {
            text,
            cells,
            lines,
            line_height: config.line_height,
            size,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_top(&self, line: usize) -> f64 {
        line.min(self.lines.len() - 1) as f64 * self.line_height
    }

    fn line(&self, offset: usize) -> &LineLayout {
        &self.lines[self.line_for_offset(offset)]
    }

    fn direction_of(&self, index: usize) -> ResolvedTextDirection {
        ResolvedTextDirection::from_level(self.cells[index].level)
    }

    /// Caret offset at the left (`left == true`) or right visual edge of a glyph
    fn edge_offset(&self, index: usize, left: bool) -> usize {
        // The left edge of an Ltr glyph and the right edge of an Rtl glyph come
        // before the char in reading order.
        if self.cells[index].is_rtl() == left {
            index + 1
        } else {
            index
        }
    }
}

impl TextLayoutResult for GridTextLayout {
    fn text(&self) -> &AnnotatedString {
        &self.text
    }

    fn text_len(&self) -> usize {
        self.cells.len()
    }

    fn size(&self) -> Size {
        self.size
    }

    fn offset_for_position(&self, position: Point) -> usize {
        let line_index = (position.y / self.line_height)
            .floor()
            .clamp(0.0, (self.lines.len() - 1) as f64) as usize;
        let line = &self.lines[line_index];

        let (Some(&leftmost), Some(&rightmost)) =
            (line.visual_order.first(), line.visual_order.last())
        else {
            return line.start;
        };

        if position.x < self.cells[leftmost].x {
            return self.edge_offset(leftmost, true);
        }

        for &index in &line.visual_order {
            let cell = &self.cells[index];
            if position.x < cell.x + cell.width {
                let in_left_half = position.x < cell.x + cell.width / 2.0;
                return self.edge_offset(index, in_left_half);
            }
        }

        self.edge_offset(rightmost, false)
    }

    fn bounding_box(&self, offset: usize) -> Rect {
        let Some(last) = self.cells.len().checked_sub(1) else {
            return Rect::ZERO;
        };
        let cell = &self.cells[offset.min(last)];
        let top = self.line_top(cell.line);
        Rect::new(cell.x, top, cell.x + cell.width, top + self.line_height)
    }

    fn paragraph_direction(&self, offset: usize) -> ResolvedTextDirection {
        ResolvedTextDirection::from_level(self.line(offset).level)
    }

    fn bidi_run_direction(&self, offset: usize) -> ResolvedTextDirection {
        match self.cells.len().checked_sub(1) {
            Some(last) => self.direction_of(offset.min(last)),
            None => self.paragraph_direction(offset),
        }
    }

    fn word_boundary(&self, offset: usize) -> TextRange {
        word_boundary(self.text.text(), offset)
    }

    fn horizontal_position(&self, offset: usize, use_primary_direction: bool) -> f64 {
        let line = self.line(offset);
        let paragraph = ResolvedTextDirection::from_level(line.level);
        let wanted = if use_primary_direction {
            paragraph
        } else {
            paragraph.opposite()
        };

        let current = (offset >= line.start && offset < line.end).then_some(offset);
        let previous = (offset > line.start && offset <= line.end).then(|| offset - 1);

        if let Some(index) = current.filter(|&index| self.direction_of(index) == wanted) {
            return self.cells[index].leading_edge();
        }
        if let Some(index) = previous.filter(|&index| self.direction_of(index) == wanted) {
            return self.cells[index].trailing_edge();
        }
        match (current, previous) {
            (Some(index), _) => self.cells[index].leading_edge(),
            (None, Some(index)) => self.cells[index].trailing_edge(),
            (None, None) if line.is_rtl() => line.right(),
            (None, None) => line.left,
        }
    }

    fn line_for_offset(&self, offset: usize) -> usize {
        self.lines
            .iter()
            .position(|line| offset < line.end)
            .unwrap_or(self.lines.len() - 1)
    }

    fn line_bottom(&self, line: usize) -> f64 {
        self.line_top(line) + self.line_height
    }
}
