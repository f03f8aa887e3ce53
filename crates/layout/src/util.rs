//! Small character-grid helpers shared by the text and table code.

/// The measure used for the natural-width pass of table layout: text is
/// never wrapped, rules are empty and nothing is padded.
pub const UNBOUNDED: usize = usize::MAX;

/// The number of columns a string occupies; one per `char`.
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

pub fn spaces(n: usize) -> String {
    " ".repeat(n)
}

pub fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

/// Pads `text` with spaces on the right to `width` columns.
pub fn right_pad(text: &str, width: usize) -> String {
    let len = text_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.push_str(text);
    out.push_str(&spaces(width.saturating_sub(len)));
    out
}

/// Distributes `excess` over `values` as evenly as possible.
///
/// Every slot gets `excess / len`; the remainder is handed out one unit at a
/// time by a rolling accumulator, so `2, 2, 1, 2, 2, 1` rather than all the
/// extra units piling up at one end. The sum grows by exactly `excess` and
/// no value decreases.
pub fn spread_evenly(excess: usize, values: &mut [usize]) {
    let len = values.len();
    if excess == 0 || len == 0 {
        return;
    }
    let share = excess / len;
    let remainder = excess % len;
    let mut acc = len - 1;
    for value in values.iter_mut() {
        *value += share;
        acc += remainder;
        if acc >= len {
            *value += 1;
            acc -= len;
        }
    }
}
