use textsel_traits::TextRange;
use unicode_segmentation::UnicodeSegmentation;

/// The word around `offset` in `text`, in chars.
///
/// Segments follow UAX #29 word boundaries. When `offset` sits at the start of a
/// run of spaces or punctuation directly after a word, the preceding word wins,
/// so a caret placed right after a word still selects that word.
pub fn word_boundary(text: &str, offset: usize) -> TextRange {
    let mut segments = Vec::new();
    let mut char_start = 0;
    for segment in text.split_word_bounds() {
        let char_end = char_start + segment.chars().count();
        segments.push((char_start, char_end, is_word(segment)));
        char_start = char_end;
    }

    let Some(last) = segments.last().copied() else {
        return TextRange::new(0, 0);
    };

    let position = segments
        .iter()
        .position(|&(start, end, _)| offset >= start && offset < end);
    let Some(index) = position else {
        // Past the end: the last segment owns the end of text.
        return TextRange::new(last.0, last.1);
    };

    let (start, end, word) = segments[index];
    if !word && offset == start && index > 0 {
        let (previous_start, previous_end, previous_word) = segments[index - 1];
        if previous_word {
            return TextRange::new(previous_start, previous_end);
        }
    }
    TextRange::new(start, end)
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}
