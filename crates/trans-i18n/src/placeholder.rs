//! Positional placeholder substitution.
//!
//! Templates carry two marker kinds:
//!
//! - `%s`, the unqualified marker. It binds the first argument, once.
//! - `%N$s`, the indexed marker. It binds argument `N` (1-based).
//!
//! # Invariants
//!
//! 1. **Unqualified wins**: if a template contains `%s`, only its first
//!    occurrence is filled and indexed markers are left alone.
//! 2. **First occurrence per index**: each `%N$s` is filled at its first
//!    occurrence only; repeats stay literal.
//! 3. **Single pass**: text inserted from an argument is never re-scanned.
//! 4. **Unmatched markers survive**: a marker with no argument is emitted
//!    verbatim.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Too few args | `%3$s` but two args | Marker left as-is |
//! | Too many args | Extra args | Ignored |
//! | No args | Empty slice | Template returned unchanged |
//! | Malformed marker | `%1s`, `%$s`, trailing `%` | Treated as literal text |
//! | Multi-digit index | `%12$s` | Binds argument 12 in both variants; indices are not limited to one digit |

use std::borrow::Cow;
use std::fmt;

/// A positional argument for string substitution.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    Str(Cow<'a, str>),
    Int(i64),
    Float(f64),
}

impl Arg<'_> {
    /// Integer view of a numeric argument, truncating floats.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Str(_) => None,
            Self::Int(n) => Some(*n),
            Self::Float(v) if v.is_finite() => Some(*v as i64),
            Self::Float(_) => None,
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }
}

impl From<String> for Arg<'_> {
    fn from(s: String) -> Self {
        Self::Str(Cow::Owned(s))
    }
}

impl From<i64> for Arg<'_> {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Arg<'_> {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Arg<'_> {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Arg<'_> {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// One element of a structured rendering: literal text or a caller value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<T> {
    Text(String),
    Value(T),
}

impl<T> Segment<T> {
    /// The literal text, if this is a text segment.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Value(_) => None,
        }
    }
}

/// Kind of placeholder marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `%s`
    Single,
    /// `%N$s`; an index that overflows `usize` is stored as 0 and never binds.
    Indexed(usize),
}

/// A lexical piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Literal(&'a str),
    Marker(Marker, &'a str),
}

impl<'a> Piece<'a> {
    /// Source text of the piece.
    #[must_use]
    pub fn text(&self) -> &'a str {
        match *self {
            Self::Literal(s) | Self::Marker(_, s) => s,
        }
    }
}

/// Iterator over the literal and marker pieces of a template.
///
/// Literal pieces are never empty.
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    rest: &'a str,
}

/// Split a template into literal and marker pieces.
#[must_use]
pub fn pieces(template: &str) -> Pieces<'_> {
    Pieces { rest: template }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        let mut search = 0;
        while let Some(offset) = self.rest[search..].find('%') {
            let at = search + offset;
            if let Some((marker, len)) = marker_at(&self.rest.as_bytes()[at..]) {
                if at > 0 {
                    let (literal, rest) = self.rest.split_at(at);
                    self.rest = rest;
                    return Some(Piece::Literal(literal));
                }
                let (text, rest) = self.rest.split_at(len);
                self.rest = rest;
                return Some(Piece::Marker(marker, text));
            }
            search = at + 1;
        }

        let literal = self.rest;
        self.rest = "";
        Some(Piece::Literal(literal))
    }
}

/// Recognize a marker at the start of `bytes` (which begins with `%`).
fn marker_at(bytes: &[u8]) -> Option<(Marker, usize)> {
    match bytes.get(1)? {
        b's' => Some((Marker::Single, 2)),
        b'0'..=b'9' => {
            let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
            let end = 1 + digits;
            if bytes.get(end) != Some(&b'$') || bytes.get(end + 1) != Some(&b's') {
                return None;
            }
            let index = bytes[1..end]
                .iter()
                .try_fold(0usize, |acc, &d| {
                    acc.checked_mul(10)?.checked_add(usize::from(d - b'0'))
                })
                .unwrap_or(0);
            Some((Marker::Indexed(index), end + 2))
        }
        _ => None,
    }
}

fn has_single(pieces: &[Piece<'_>]) -> bool {
    pieces
        .iter()
        .any(|p| matches!(p, Piece::Marker(Marker::Single, _)))
}

/// String substitution.
///
/// ```
/// use trans_i18n::placeholder::substitute;
///
/// assert_eq!(substitute("%1$s-%2$s", &["a".into(), "b".into()]), "a-b");
/// assert_eq!(substitute("%s and %s", &["a".into(), "b".into()]), "a and %s");
/// ```
#[must_use]
pub fn substitute(template: &str, args: &[Arg<'_>]) -> String {
    if args.is_empty() {
        return template.to_owned();
    }

    let pieces: Vec<Piece<'_>> = pieces(template).collect();
    let single = has_single(&pieces);
    let mut bound = vec![false; args.len()];
    let mut out = String::with_capacity(template.len());

    for piece in pieces {
        let slot = match piece {
            Piece::Marker(Marker::Single, _) => Some(0),
            Piece::Marker(Marker::Indexed(n), _) if !single => n.checked_sub(1),
            _ => None,
        };
        match slot.filter(|&i| i < args.len() && !bound[i]) {
            Some(i) => {
                bound[i] = true;
                out.push_str(&args[i].to_string());
            }
            None => out.push_str(piece.text()),
        }
    }

    out
}

/// Segment substitution.
///
/// Same binding rules as [`substitute`], but argument values are moved into
/// the output untouched. Unbound markers become text segments holding the
/// marker itself. Empty literal runs are not emitted, so a template with no
/// markers yields a single text segment and `"%s"` yields just the value.
#[must_use]
pub fn segments<T>(template: &str, args: Vec<T>) -> Vec<Segment<T>> {
    let pieces: Vec<Piece<'_>> = pieces(template).collect();
    let single = has_single(&pieces);
    let mut slots: Vec<Option<T>> = args.into_iter().map(Some).collect();
    let mut out = Vec::with_capacity(pieces.len());

    for piece in pieces {
        let slot = match piece {
            Piece::Marker(Marker::Single, _) => Some(0),
            Piece::Marker(Marker::Indexed(n), _) if !single => n.checked_sub(1),
            _ => None,
        };
        match slot.and_then(|i| slots.get_mut(i)).and_then(Option::take) {
            Some(value) => out.push(Segment::Value(value)),
            None => out.push(Segment::Text(piece.text().to_owned())),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn strs<'a>(values: &[&'a str]) -> Vec<Arg<'a>> {
        values.iter().map(|&s| Arg::from(s)).collect()
    }

    #[test]
    fn scanner_splits_markers() {
        let got: Vec<Piece<'_>> = pieces("a %s b %12$s%1$s c").collect();
        assert_eq!(
            got,
            vec![
                Piece::Literal("a "),
                Piece::Marker(Marker::Single, "%s"),
                Piece::Literal(" b "),
                Piece::Marker(Marker::Indexed(12), "%12$s"),
                Piece::Marker(Marker::Indexed(1), "%1$s"),
                Piece::Literal(" c"),
            ]
        );
    }

    #[test]
    fn scanner_malformed_markers_are_literal() {
        let got: Vec<Piece<'_>> = pieces("100% %1s %$s %d %").collect();
        assert_eq!(got, vec![Piece::Literal("100% %1s %$s %d %")]);
    }

    #[test]
    fn scanner_percent_before_marker() {
        let got: Vec<Piece<'_>> = pieces("%%s").collect();
        assert_eq!(
            got,
            vec![Piece::Literal("%"), Piece::Marker(Marker::Single, "%s")]
        );
    }

    #[test]
    fn scanner_overflowing_index_never_binds() {
        let template = "%99999999999999999999999$s";
        let got: Vec<Piece<'_>> = pieces(template).collect();
        assert_eq!(got, vec![Piece::Marker(Marker::Indexed(0), template)]);
        assert_eq!(substitute(template, &strs(&["a"])), template);
    }

    #[test]
    fn scanner_handles_multibyte_text() {
        let got: Vec<Piece<'_>> = pieces("né %s été").collect();
        assert_eq!(
            got,
            vec![
                Piece::Literal("né "),
                Piece::Marker(Marker::Single, "%s"),
                Piece::Literal(" été"),
            ]
        );
    }

    #[test]
    fn single_marker_replaces_first_only() {
        assert_eq!(substitute("%s and %s", &strs(&["a", "b"])), "a and %s");
    }

    #[test]
    fn indexed_markers() {
        assert_eq!(substitute("%1$s-%2$s", &strs(&["a", "b"])), "a-b");
        assert_eq!(substitute("%2$s before %1$s", &strs(&["a", "b"])), "b before a");
    }

    #[test]
    fn single_marker_suppresses_indexed() {
        assert_eq!(substitute("%s %1$s %2$s", &strs(&["a", "b"])), "a %1$s %2$s");
    }

    #[test]
    fn indexed_binds_first_occurrence_per_index() {
        assert_eq!(substitute("%1$s %1$s", &strs(&["a"])), "a %1$s");
    }

    #[test]
    fn missing_args_leave_markers() {
        assert_eq!(substitute("%1$s %2$s %3$s", &strs(&["a"])), "a %2$s %3$s");
        assert_eq!(substitute("%0$s", &strs(&["a"])), "%0$s");
    }

    #[test]
    fn no_args_returns_template() {
        assert_eq!(substitute("%s %1$s", &[]), "%s %1$s");
    }

    #[test]
    fn inserted_text_not_rescanned() {
        assert_eq!(substitute("%1$s %2$s", &strs(&["%2$s", "b"])), "%2$s b");
    }

    #[test]
    fn numeric_args_stringify() {
        let args = [Arg::from(3), Arg::from(2.5), Arg::from(4.0)];
        assert_eq!(substitute("%1$s/%2$s/%3$s", &args), "3/2.5/4");
        assert_eq!(substitute("%s", &[Arg::from(f64::INFINITY)]), "Infinity");
    }

    #[test]
    fn arg_integer_view() {
        assert_eq!(Arg::from(7).as_integer(), Some(7));
        assert_eq!(Arg::from(7.9).as_integer(), Some(7));
        assert_eq!(Arg::from(f64::NAN).as_integer(), None);
        assert_eq!(Arg::from("7").as_integer(), None);
    }

    #[test]
    fn segments_preserve_identity() {
        let obj = Rc::new(42);
        let out = segments("%s", vec![Rc::clone(&obj)]);
        assert_eq!(out.len(), 1);
        match &out[0] {
            Segment::Value(v) => assert!(Rc::ptr_eq(v, &obj)),
            Segment::Text(t) => panic!("expected value, got text {t:?}"),
        }
    }

    #[test]
    fn segments_interleave_text_and_values() {
        let out = segments("by %1$s on %2$s.", vec![10, 20]);
        assert_eq!(
            out,
            vec![
                Segment::Text("by ".into()),
                Segment::Value(10),
                Segment::Text(" on ".into()),
                Segment::Value(20),
                Segment::Text(".".into()),
            ]
        );
    }

    #[test]
    fn segments_unbound_markers_stay_text() {
        let out = segments("%1$s %3$s", vec!['x']);
        assert_eq!(
            out,
            vec![
                Segment::Value('x'),
                Segment::Text(" ".into()),
                Segment::Text("%3$s".into()),
            ]
        );
    }

    #[test]
    fn segments_single_marker_fills_one_slot() {
        let out = segments("%s|%s", vec![1, 2]);
        assert_eq!(
            out,
            vec![
                Segment::Value(1),
                Segment::Text("|".into()),
                Segment::Text("%s".into()),
            ]
        );
    }

    #[test]
    fn segments_bind_multi_digit_index() {
        let args: Vec<String> = (1..=12).map(|i| format!("v{i}")).collect();
        let out = segments("x%12$sy", args.clone());
        assert_eq!(
            out,
            vec![
                Segment::Text("x".into()),
                Segment::Value("v12".to_owned()),
                Segment::Text("y".into()),
            ]
        );
        let string_args: Vec<Arg<'_>> = args.iter().map(|a| Arg::from(a.as_str())).collect();
        assert_eq!(substitute("x%12$sy", &string_args), "xv12y");
    }

    #[test]
    fn segments_plain_template() {
        let out: Vec<Segment<()>> = segments("Hello", Vec::new());
        assert_eq!(out, vec![Segment::Text("Hello".into())]);
        assert_eq!(out[0].as_text(), Some("Hello"));
    }
}
