//! Counting and writing passes over a path body, and the [`Collapse`]
//! orchestrator that ties them to a root.
//!
//! Both passes share one traversal. The body is walked from its end: a
//! `..` raises the number of pending backtracks, a real component either
//! pays one of them off or survives. Because every pending entry is the same
//! `..`, a counter stands in for a stack of component boundaries and the
//! walk needs no recursion and no allocation. The sink decides whether a
//! surviving component is only counted or also written.

use std::marker::PhantomData;

use crate::{
    scan::{collapse_tail, SplitResult},
    CodeUnit, Mode, Style,
};

/// Raised when the root of a path does not fit the requested [`Mode`].
///
/// Callers that pick the mode with [`Style::is_absolute`] never see it.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseError {
    #[error("UnexpectedPrefixError {{ mode = {mode} }}")]
    UnexpectedPrefix { mode: Mode },
}

const PARENT_DIR_LEN: usize = 2;

trait Sink<C> {
    fn component(&mut self, component: &[C]);

    fn backtrack(&mut self);
}

fn traverse<S: Style, C: CodeUnit>(mode: Mode, body: &[C], sink: &mut impl Sink<C>) {
    let mut pending = 0usize;
    let mut rest = body;
    loop {
        let SplitResult { head, tail } = collapse_tail::<S, C>(rest, || pending += 1);
        if tail.is_empty() {
            break;
        }
        if pending > 0 {
            pending -= 1;
        } else {
            sink.component(tail);
        }
        rest = head;
    }
    // whatever is still pending climbs above the start of the body
    if mode == Mode::Relative {
        for _ in 0..pending {
            sink.backtrack();
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Counter {
    root_len: usize,
    stem_len: usize,
}

impl Counter {
    fn new(root_len: usize) -> Self {
        Counter {
            root_len,
            stem_len: 0,
        }
    }

    // a component always brings its separator along
    #[inline]
    fn add_component(&mut self, len: usize) {
        self.stem_len += len + 1;
    }

    #[inline]
    fn add_backtrack(&mut self) {
        self.add_component(PARENT_DIR_LEN);
    }

    /// The last component has no separator after it.
    fn value(&self) -> usize {
        self.root_len + self.stem_len.saturating_sub(1)
    }
}

impl<C: CodeUnit> Sink<C> for Counter {
    fn component(&mut self, component: &[C]) {
        self.add_component(component.len());
    }

    fn backtrack(&mut self) {
        self.add_backtrack();
    }
}

/// Fills the destination from the back: components arrive last-first and
/// the final length is known up front from a [`Counter`] pass.
#[derive(Debug)]
struct Writer<'d, C> {
    dst: &'d mut [C],
    separator: C,
    stem_start: usize,
    cursor: usize,
    end: usize,
}

impl<'d, C: CodeUnit> Writer<'d, C> {
    fn new(dst: &'d mut [C], root: &[C], separator: C, end: usize) -> Self {
        let copied = root.len().min(dst.len());
        dst[..copied].copy_from_slice(&root[..copied]);
        Writer {
            dst,
            separator,
            stem_start: root.len(),
            cursor: end,
            end,
        }
    }

    // A component owns the slot right after it: its separator, or the
    // terminator for the last one. It is written whole, together with that
    // separator, only if the slot lies inside the destination. The cursor
    // moves regardless.
    fn write_component(&mut self, component: &[C]) {
        let trailing = usize::from(self.cursor < self.end);
        let start = self.cursor - trailing - component.len();
        let slot = start + component.len();
        if slot < self.dst.len() {
            self.dst[start..slot].copy_from_slice(component);
            if trailing == 1 {
                self.dst[slot] = self.separator;
            }
        }
        self.cursor = start;
    }

    fn write_backtrack(&mut self) {
        self.write_component(C::DOT_DOT);
    }

    fn end_write(self) -> usize {
        debug_assert_eq!(self.cursor, self.stem_start);
        if let Some(terminator) = self.dst.get_mut(self.end) {
            *terminator = C::NUL;
        }
        self.end
    }
}

impl<C: CodeUnit> Sink<C> for Writer<'_, C> {
    fn component(&mut self, component: &[C]) {
        self.write_component(component);
    }

    fn backtrack(&mut self) {
        self.write_backtrack();
    }
}

/// A path split into root and body under a fixed [`Mode`], ready to be
/// sized with [`length`](Collapse::length) and written with
/// [`copy`](Collapse::copy).
#[derive(Debug, Clone, Copy)]
pub struct Collapse<'a, C, S> {
    mode: Mode,
    root: &'a [C],
    body: &'a [C],
    style: PhantomData<S>,
}

impl<'a, C: CodeUnit, S: Style> Collapse<'a, C, S> {
    /// Uses [`Mode::Absolute`] for absolute paths and [`Mode::Relative`]
    /// for everything else.
    pub fn new(path: &'a [C]) -> Self {
        let (mode, split) = S::classify(path);
        Self::from_split(mode, split)
    }

    pub fn with_mode(mode: Mode, path: &'a [C]) -> Result<Self, CollapseError> {
        match S::split_root(mode, path) {
            Ok(split) => Ok(Self::from_split(mode, split)),
            Err(err) => {
                log::debug!(
                    "refusing {mode} collapse of a {}-unit path: unexpected root prefix",
                    path.len()
                );
                Err(err)
            }
        }
    }

    #[inline]
    pub fn absolute(path: &'a [C]) -> Result<Self, CollapseError> {
        Self::with_mode(Mode::Absolute, path)
    }

    #[inline]
    pub fn relative(path: &'a [C]) -> Result<Self, CollapseError> {
        Self::with_mode(Mode::Relative, path)
    }

    fn from_split(mode: Mode, split: SplitResult<'a, C>) -> Self {
        Collapse {
            mode,
            root: split.head,
            body: split.tail,
            style: PhantomData,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The root, exactly as it appears in the input.
    #[inline]
    pub fn root(&self) -> &'a [C] {
        self.root
    }

    /// Length of the collapsed path, terminator excluded.
    pub fn length(&self) -> usize {
        let mut counter = Counter::new(self.root.len());
        traverse::<S, C>(self.mode, self.body, &mut counter);
        counter.value()
    }

    /// Writes the collapsed path into `dst` and returns [`length`](Self::length).
    ///
    /// When `dst` is too short it receives the root (clamped to its length)
    /// and each leading component whose separator still fits, never part of
    /// a component, and no terminator; the caller retries with a buffer of
    /// at least the returned length plus one.
    pub fn copy(&self, dst: &mut [C]) -> usize {
        let separator = C::from_ascii(S::SEPARATOR);
        let mut writer = Writer::new(dst, self.root, separator, self.length());
        traverse::<S, C>(self.mode, self.body, &mut writer);
        writer.end_write()
    }

    pub fn to_vec(&self) -> Vec<C> {
        let mut collapsed = vec![C::NUL; self.length() + 1];
        let len = self.copy(&mut collapsed);
        collapsed.truncate(len);
        collapsed
    }
}
