use super::TextAlign;
use crate::util::{UNBOUNDED, spaces, spread_evenly, text_width};

/// One line produced by [`break_lines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    pub text: String,
    /// Set on the final line of each newline-separated segment. Justified
    /// text leaves these lines ragged.
    pub ends_segment: bool,
}

/// Breaks already-flattened text into lines of at most `measure` columns.
///
/// `\n` forces a break. Lines break at the rightmost fitting space; only
/// when no space fits, after the rightmost fitting hyphen. When neither
/// fits, the line runs on to the first space or hyphen after the measure,
/// and a word without either is emitted whole. Text that is empty after
/// trimming yields no lines at all.
pub fn break_lines(text: &str, measure: usize) -> Vec<WrappedLine> {
    let measure = measure.max(1);
    let mut lines = Vec::new();
    for segment in text.trim().split('\n') {
        let chars: Vec<char> = segment.trim().chars().collect();
        if chars.is_empty() {
            continue;
        }
        break_segment(&chars, measure, &mut lines);
        if let Some(last) = lines.last_mut() {
            last.ends_segment = true;
        }
    }
    lines
}

#[derive(Debug, Clone, Copy)]
struct Break {
    /// End of the emitted line (exclusive).
    end: usize,
    /// Start of the following line.
    resume: usize,
}

fn break_segment(chars: &[char], measure: usize, lines: &mut Vec<WrappedLine>) {
    let mut rest = chars;
    while rest.len() > measure {
        let Some(brk) = find_break(rest, measure) else {
            break;
        };
        lines.push(WrappedLine {
            text: rest[..brk.end].iter().collect(),
            ends_segment: false,
        });
        rest = &rest[brk.resume..];
    }
    if !rest.is_empty() {
        lines.push(WrappedLine {
            text: rest.iter().collect(),
            ends_segment: false,
        });
    }
}

/// `text` is longer than `measure`, so `text[measure]` exists.
fn find_break(text: &[char], measure: usize) -> Option<Break> {
    let is_space = |i: usize| text[i] == ' ';
    let is_hyphen = |i: usize| i > 0 && text[i] == '-' && text[i - 1] != ' ';
    let at_space = |i: usize| Break {
        end: trim_back(text, i),
        resume: skip_spaces(text, i),
    };
    let after_hyphen = |h: usize| Break {
        end: h + 1,
        resume: skip_spaces(text, h + 1),
    };

    if let Some(i) = (1..=measure).rev().find(|&i| is_space(i)) {
        return Some(at_space(i));
    }
    if let Some(h) = (1..measure).rev().find(|&h| is_hyphen(h)) {
        return Some(after_hyphen(h));
    }
    (measure..text.len())
        .find(|&i| is_space(i) || is_hyphen(i))
        .map(|i| if is_space(i) { at_space(i) } else { after_hyphen(i) })
}

fn trim_back(text: &[char], mut end: usize) -> usize {
    while end > 0 && text[end - 1] == ' ' {
        end -= 1;
    }
    end
}

fn skip_spaces(text: &[char], mut start: usize) -> usize {
    while start < text.len() && text[start] == ' ' {
        start += 1;
    }
    start
}

/// Positions `line` inside `measure` columns. Lines that already fill the
/// measure, and everything under an unbounded measure, are left as is.
pub fn align_line(line: &str, measure: usize, align: TextAlign, ends_segment: bool) -> String {
    let width = text_width(line);
    if measure == UNBOUNDED || width >= measure {
        return line.to_string();
    }
    let slack = measure - width;
    match align {
        TextAlign::Left => line.to_string(),
        TextAlign::Right => format!("{}{line}", spaces(slack)),
        TextAlign::Center => format!("{}{line}", spaces(slack / 2)),
        TextAlign::Justify if ends_segment => line.to_string(),
        TextAlign::Justify => justify(line, slack),
    }
}

/// Widens the gaps between words by `slack` columns in total.
fn justify(line: &str, slack: usize) -> String {
    let mut words: Vec<&str> = Vec::new();
    let mut gaps: Vec<usize> = Vec::new();
    let mut word_start = 0;
    let mut in_gap = false;
    for (i, c) in line.char_indices() {
        match (c == ' ', in_gap) {
            (true, false) => {
                words.push(&line[word_start..i]);
                gaps.push(1);
                in_gap = true;
            }
            (true, true) => {
                if let Some(gap) = gaps.last_mut() {
                    *gap += 1;
                }
            }
            (false, true) => {
                word_start = i;
                in_gap = false;
            }
            (false, false) => {}
        }
    }
    words.push(&line[word_start..]);

    if gaps.is_empty() {
        return line.to_string();
    }
    spread_evenly(slack, &mut gaps);

    let mut out = String::with_capacity(line.len() + slack);
    for (word, gap) in words.iter().zip(gaps.iter().map(Some).chain(std::iter::once(None))) {
        out.push_str(word);
        if let Some(&gap) = gap {
            out.push_str(&spaces(gap));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str, measure: usize) -> Vec<String> {
        break_lines(text, measure).into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn breaks_at_last_fitting_space() {
        assert_eq!(texts("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
        assert_eq!(texts("aaa bbb ccc", 8), vec!["aaa bbb", "ccc"]);
        assert_eq!(texts("aaa  bbb", 4), vec!["aaa", "bbb"]);
    }

    #[test]
    fn a_fitting_space_wins_over_a_hyphen() {
        assert_eq!(texts("one twenty-two", 11), vec!["one", "twenty-two"]);
        assert_eq!(texts("twenty- two", 7), vec!["twenty-", "two"]);
    }

    #[test]
    fn breaks_after_a_hyphen_when_no_space_fits() {
        assert_eq!(texts("twenty-two", 8), vec!["twenty-", "two"]);
        assert_eq!(texts("a-b-c-d", 4), vec!["a-b-", "c-d"]);
        // A hyphen after a space is a minus sign, not a break.
        assert_eq!(texts("x -5", 1), vec!["x", "-5"]);
    }

    #[test]
    fn falls_back_to_first_space_or_hyphen_after_the_measure() {
        assert_eq!(texts("twenty-three", 2), vec!["twenty-", "three"]);
        assert_eq!(texts("twenty-three", 1), vec!["twenty-", "three"]);
        assert_eq!(texts("abcdefgh ij", 3), vec!["abcdefgh", "ij"]);
        assert_eq!(texts("abcdefgh-ij kl", 3), vec!["abcdefgh-", "ij", "kl"]);
        assert_eq!(texts("abcd efgh-ij", 2), vec!["abcd", "efgh-", "ij"]);
    }

    #[test]
    fn long_words_overflow_whole() {
        assert_eq!(texts("abcdefgh", 3), vec!["abcdefgh"]);
        assert_eq!(texts("a supercalifragilistic b", 5), vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn newlines_force_breaks_and_empty_text_yields_nothing() {
        let lines = break_lines("a b\n   c\n\n", 80);
        assert_eq!(
            lines,
            vec![
                WrappedLine { text: "a b".into(), ends_segment: true },
                WrappedLine { text: "c".into(), ends_segment: true },
            ]
        );
        assert!(break_lines("   ", 10).is_empty());
        assert_eq!(texts("x", 0), vec!["x"]);
    }

    #[test]
    fn alignment() {
        assert_eq!(align_line("ab", 6, TextAlign::Right, false), "    ab");
        assert_eq!(align_line("ab", 7, TextAlign::Center, false), "  ab");
        assert_eq!(align_line("a b c", 9, TextAlign::Justify, false), "a   b   c");
        assert_eq!(align_line("a b c", 9, TextAlign::Justify, true), "a b c");
        assert_eq!(align_line("abc", 2, TextAlign::Right, false), "abc");
        assert_eq!(align_line("abc", UNBOUNDED, TextAlign::Right, false), "abc");
    }
}
