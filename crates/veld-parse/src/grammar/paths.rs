use veld_green::SyntaxKind::*;

use crate::parser::Parser;

/// Parses `a.b.c`, stopping before a `.` that is not followed by a name.
pub(crate) fn path(p: &mut Parser<'_, '_>) {
    debug_assert_eq!(p.peek_kind(), NAME);

    let m = p.start();
    segment(p);

    while p.at(DOT) && p.peek_next_kind() == NAME {
        p.advance();
        segment(p);
    }

    m.complete(p, PATH);
}

/// Parses a path of exactly one segment, as used in expression position.
pub(crate) fn single_segment_path(p: &mut Parser<'_, '_>) {
    debug_assert_eq!(p.peek_kind(), NAME);

    let m = p.start();
    segment(p);
    m.complete(p, PATH);
}

fn segment(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.expect(NAME);
    m.complete(p, PATH_SEGMENT);
}
