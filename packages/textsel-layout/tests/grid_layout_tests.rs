use textsel_layout::{BaseDirection, GridTextLayout, LayoutConfig};
use textsel_traits::{Point, ResolvedTextDirection, SpanStyle, TextLayoutResult, TextRange};

const GLYPH: f64 = 20.0;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn layout(text: &str) -> GridTextLayout {
    init_logger();
    GridTextLayout::new(text, &LayoutConfig::monospace(GLYPH)).unwrap()
}

#[cfg(test)]
mod grid_layout_tests {
    use super::*;

    #[test]
    fn test_span_style_covers_whole_text() {
        init_logger();
        let config = LayoutConfig::monospace(GLYPH)
            .with_span_style(SpanStyle::default().with_font_size(20.0));
        let layout = GridTextLayout::new("hello", &config).unwrap();

        let spans = layout.text().span_styles();
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (0, 5));
        assert_eq!(spans[0].style.font_size, Some(20.0));
    }

    #[test]
    fn test_word_boundaries_through_oracle() {
        let layout = layout("hello world\n");
        assert_eq!(layout.word_boundary(2), TextRange::new(0, 5));
        assert_eq!(layout.word_boundary(7), TextRange::new(6, 11));
    }

    #[test]
    fn test_forced_rtl_paragraph_right_aligns_lines() {
        init_logger();
        let config = LayoutConfig::monospace(GLYPH).with_base_direction(BaseDirection::Rtl);
        let layout = GridTextLayout::new("ab\nabcd", &config).unwrap();

        assert_eq!(layout.paragraph_direction(0), ResolvedTextDirection::Rtl);
        // Latin chars keep their own Ltr run inside the Rtl paragraph.
        assert_eq!(layout.bidi_run_direction(0), ResolvedTextDirection::Ltr);
        // First line is two glyphs wide and hugs the right edge of the four glyph line.
        assert_eq!(layout.bounding_box(0).x0, 2.0 * GLYPH);
        assert_eq!(layout.bounding_box(3).x0, 0.0);
    }

    #[test]
    fn test_line_bottoms() {
        let layout = layout("one\ntwo\nthree");
        assert_eq!(layout.line_count(), 3);
        assert_eq!(layout.line_for_offset(5), 1);
        assert_eq!(layout.line_bottom(1), 2.0 * GLYPH);
        assert_eq!(layout.line_bottom(10), 3.0 * GLYPH);
    }

    #[test]
    fn test_hit_test_on_second_line() {
        let layout = layout("one\ntwo");
        let offset = layout.offset_for_position(Point::new(1.2 * GLYPH, 1.5 * GLYPH));
        assert_eq!(offset, 5);
    }

    #[test]
    fn test_mixed_line_caret_positions() {
        // "ab" then a three char Hebrew run, visually: a b ג ב א
        let layout = layout("ab\u{05D0}\u{05D1}\u{05D2}");
        assert_eq!(layout.horizontal_position(0, true), 0.0);
        assert_eq!(layout.horizontal_position(3, true), 4.0 * GLYPH);
        assert_eq!(layout.horizontal_position(5, true), 2.0 * GLYPH);
        assert_eq!(layout.horizontal_position(5, false), 2.0 * GLYPH);
    }
}
