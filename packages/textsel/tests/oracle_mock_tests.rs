use std::cell::Cell;
use std::rc::Rc;

use mockall::mock;
use mockall::predicate::eq;
use textsel::{MultiWidgetSelectionDelegate, Selectable, SelectableId, get_text_selection_info};
use textsel_traits::{
    AnnotatedString, FixedCoordinates, LayoutCoordinates, Point, Rect, ResolvedTextDirection,
    Size, TextLayoutResult, TextRange,
};

mock! {
    pub Layout {}

    impl TextLayoutResult for Layout {
        fn text(&self) -> &AnnotatedString;
        fn text_len(&self) -> usize;
        fn size(&self) -> Size;
        fn offset_for_position(&self, position: Point) -> usize;
        fn bounding_box(&self, offset: usize) -> Rect;
        fn paragraph_direction(&self, offset: usize) -> ResolvedTextDirection;
        fn bidi_run_direction(&self, offset: usize) -> ResolvedTextDirection;
        fn word_boundary(&self, offset: usize) -> TextRange;
        fn horizontal_position(&self, offset: usize, use_primary_direction: bool) -> f64;
        fn line_for_offset(&self, offset: usize) -> usize;
        fn line_bottom(&self, line: usize) -> f64;
    }
}

/// Five chars on one 100x20 line
fn ltr_line() -> MockLayout {
    let mut layout = MockLayout::new();
    layout.expect_text_len().return_const(5usize);
    layout.expect_size().return_const(Size::new(100.0, 20.0));
    layout
        .expect_offset_for_position()
        .returning(|position| (position.x / 20.0).round() as usize);
    layout
        .expect_bidi_run_direction()
        .return_const(ResolvedTextDirection::Ltr);
    layout
        .expect_paragraph_direction()
        .return_const(ResolvedTextDirection::Ltr);
    layout
}

#[cfg(test)]
mod oracle_mock_tests {
    use super::*;

    #[test]
    fn test_word_query_clamps_to_last_char() {
        let mut layout = ltr_line();
        layout
            .expect_word_boundary()
            .with(eq(0))
            .times(1)
            .return_const(TextRange::new(0, 3));
        layout
            .expect_word_boundary()
            .with(eq(4))
            .times(1)
            .return_const(TextRange::new(4, 5));

        let info = get_text_selection_info(
            &layout,
            (Point::new(1.0, 10.0), Point::new(1.0, 60.0)),
            SelectableId::next(),
            true,
            None,
            None,
        )
        .unwrap();

        assert_eq!(info.to_text_range(), TextRange::new(0, 5));
        assert!(!info.handles_crossed);
    }

    #[test]
    fn test_range_selection_never_queries_words_or_boxes() {
        let mut layout = ltr_line();
        layout.expect_word_boundary().never();
        layout.expect_bounding_box().never();

        let info = get_text_selection_info(
            &layout,
            (Point::new(21.0, 10.0), Point::new(61.0, 10.0)),
            SelectableId::next(),
            false,
            None,
            None,
        )
        .unwrap();

        assert_eq!(info.to_text_range(), TextRange::new(1, 3));
    }

    #[test]
    fn test_out_of_range_hit_is_clamped() {
        let mut layout = MockLayout::new();
        layout.expect_text_len().return_const(2usize);
        layout.expect_size().return_const(Size::new(100.0, 20.0));
        layout.expect_offset_for_position().return_const(40usize);
        layout
            .expect_bidi_run_direction()
            .with(eq(1))
            .return_const(ResolvedTextDirection::Ltr);

        let point = Point::new(50.0, 10.0);
        let info = get_text_selection_info(
            &layout,
            (point, point),
            SelectableId::next(),
            false,
            None,
            None,
        )
        .unwrap();

        assert_eq!(info.start.offset, 2);
        assert_eq!(info.end.offset, 2);
    }

    #[test]
    fn test_delegate_pulls_layout_on_every_query() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let coordinates: Rc<dyn LayoutCoordinates> =
            Rc::new(FixedCoordinates::new(Point::ZERO, Size::new(100.0, 20.0)));
        let delegate = MultiWidgetSelectionDelegate::new(
            |_| {},
            move || Some(Rc::clone(&coordinates)),
            move || {
                counter.set(counter.get() + 1);
                let mut layout = MockLayout::new();
                layout.expect_text_len().return_const(5usize);
                layout.expect_bounding_box().returning(|offset| {
                    let x = offset as f64 * 20.0;
                    Rect::new(x, 0.0, x + 20.0, 20.0)
                });
                Some(Rc::new(layout) as Rc<dyn TextLayoutResult>)
            },
        );

        assert_eq!(delegate.get_bounding_box(2).x0, 40.0);
        assert_eq!(delegate.get_bounding_box(9).x0, 80.0);
        assert_eq!(calls.get(), 2);
    }
}
