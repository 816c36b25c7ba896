//! Component scanning over a path body.
//!
//! A body is the part of a path after its root. Empty components (from
//! separator runs) are treated like `.` everywhere in this module.

use crate::{CodeUnit, Mode, Style};

/// Two sub-views of one input view, split around a separator.
///
/// `head` never includes the separator; `tail` starts just past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitResult<'a, C> {
    pub head: &'a [C],
    pub tail: &'a [C],
}

impl<'a, C> SplitResult<'a, C> {
    #[inline]
    pub(crate) fn at(path: &'a [C], mid: usize) -> Self {
        let (head, tail) = path.split_at(mid);
        SplitResult { head, tail }
    }

    #[inline]
    fn empty() -> Self {
        SplitResult { head: &[], tail: &[] }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    Empty,
    CurDir,
    ParentDir,
    Normal,
}

pub(crate) fn classify_segment<C: CodeUnit>(component: &[C]) -> Segment {
    if component.is_empty() {
        Segment::Empty
    } else if component == C::DOT {
        Segment::CurDir
    } else if component == C::DOT_DOT {
        Segment::ParentDir
    } else {
        Segment::Normal
    }
}

/// Splits `body` on its first separator.
///
/// Without a separator the whole body is the head and the tail is empty.
pub fn split_on_first_delimiter<S: Style, C: CodeUnit>(body: &[C]) -> SplitResult<'_, C> {
    match body.iter().position(|&unit| S::is_separator_unit(unit)) {
        Some(i) => SplitResult {
            head: &body[..i],
            tail: &body[i + 1..],
        },
        None => SplitResult {
            head: body,
            tail: &body[body.len()..],
        },
    }
}

/// Splits `body` on its last separator: `tail` is the last component and
/// `head` everything before the separator.
///
/// Without a separator the whole body is the tail and the head is empty.
pub fn split_on_last_delimiter<S: Style, C: CodeUnit>(body: &[C]) -> SplitResult<'_, C> {
    match body.iter().rposition(|&unit| S::is_separator_unit(unit)) {
        Some(i) => SplitResult {
            head: &body[..i],
            tail: &body[i + 1..],
        },
        None => SplitResult {
            head: &body[..0],
            tail: body,
        },
    }
}

/// Strips leading `.` and `..` components off `rest` and returns the first
/// real component as `head` with the remainder as `tail`.
///
/// In [`Mode::Relative`] every stripped `..` is reported to `on_backtrack`.
/// In [`Mode::Absolute`] there is nothing above the root for it to climb
/// to, so it is dropped. Both views are empty once `rest` runs out.
///
/// This is a standalone front-to-back scanning helper. Collapsing itself
/// walks the body from its end with [`collapse_tail`] and never calls it.
pub fn collapse_head<S: Style, C: CodeUnit>(
    mode: Mode,
    mut rest: &[C],
    mut on_backtrack: impl FnMut(),
) -> SplitResult<'_, C> {
    while !rest.is_empty() {
        let SplitResult { head, tail } = split_on_first_delimiter::<S, C>(rest);
        match classify_segment(head) {
            Segment::Empty | Segment::CurDir => {}
            Segment::ParentDir => {
                if mode == Mode::Relative {
                    on_backtrack();
                }
            }
            Segment::Normal => return SplitResult { head, tail },
        }
        rest = tail;
    }
    SplitResult::empty()
}

/// Mirror image of [`collapse_head`]: strips trailing `.` and `..`
/// components and returns the last real component as `tail` with
/// everything before it as `head`.
///
/// Every stripped `..` is reported to `on_backtrack`, whatever the mode;
/// it may still cancel a component further to the left.
pub fn collapse_tail<S: Style, C: CodeUnit>(
    mut rest: &[C],
    mut on_backtrack: impl FnMut(),
) -> SplitResult<'_, C> {
    while !rest.is_empty() {
        let SplitResult { head, tail } = split_on_last_delimiter::<S, C>(rest);
        match classify_segment(tail) {
            Segment::Empty | Segment::CurDir => {}
            Segment::ParentDir => on_backtrack(),
            Segment::Normal => return SplitResult { head, tail },
        }
        rest = head;
    }
    SplitResult::empty()
}

pub(crate) fn trim_trailing_separators<S: Style, C: CodeUnit>(body: &[C]) -> &[C] {
    let end = body
        .iter()
        .rposition(|&unit| !S::is_separator_unit(unit))
        .map_or(0, |i| i + 1);
    &body[..end]
}
