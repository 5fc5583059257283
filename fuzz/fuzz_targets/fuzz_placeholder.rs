#![no_main]

use libfuzzer_sys::fuzz_target;
use trans_i18n::Arg;
use trans_i18n::placeholder::{Piece, Segment, pieces, segments, substitute};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    // First line is the template, the rest are arguments.
    let mut lines = text.split('\n');
    let template = lines.next().unwrap_or_default();
    let args: Vec<&str> = lines.take(16).collect();

    // Pieces must tile the template exactly, with no empty literals.
    let mut rebuilt = String::with_capacity(template.len());
    for piece in pieces(template) {
        if let Piece::Literal(lit) = piece {
            assert!(!lit.is_empty(), "empty literal piece");
        }
        rebuilt.push_str(piece.text());
    }
    assert_eq!(rebuilt, template, "pieces must reassemble the template");

    // String and segment substitution must agree.
    let string_args: Vec<Arg<'_>> = args.iter().map(|&a| Arg::from(a)).collect();
    let expected = substitute(template, &string_args);
    let joined: String = segments(template, args.clone())
        .into_iter()
        .map(|s| match s {
            Segment::Text(t) => t,
            Segment::Value(v) => v.to_owned(),
        })
        .collect();
    assert_eq!(joined, expected, "segment output must join to string output");

    // No args means no change.
    assert_eq!(substitute(template, &[]), template);
});
