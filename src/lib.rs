//! Lexical path collapsing.
//!
//! A path is collapsed into its canonical form without touching the
//! filesystem: separator runs become a single preferred separator, `.`
//! components disappear and `..` components cancel the component before
//! them. Absolute paths keep their root no matter how many `..` components
//! follow it, relative paths keep unresolved leading `..` components.
//!
//! The core never allocates. Output goes through a two-call protocol:
//! [`effective_length`] sizes a buffer, [`collapse`] fills it and reports the
//! required length again, so a short buffer is detected from the return
//! value alone.
//!
//! ```
//! use path_collapse::{Mode, Posix, Style};
//!
//! let path: &[u8] = b"/usr/local/../bin/./app";
//! let len = Posix::effective_length(path);
//! let mut buf = vec![0u8; len + 1];
//! assert_eq!(Posix::collapse(path, &mut buf), len);
//! assert_eq!(&buf[..len], b"/usr/bin/app");
//!
//! assert_eq!(
//!     Posix::effective_length_as(Mode::Relative, b"a/../../b".as_slice()),
//!     Ok(4)
//! );
//! ```
//!
//! Platform rules are picked by type: [`Posix`] and [`Windows`] are both
//! available everywhere and [`Native`] follows the host. The free functions
//! at the crate root use [`Native`].

mod collapse;
pub mod posix;
#[cfg(test)]
mod proptests;
mod scan;
mod style;
#[cfg(feature = "url")]
mod url;
pub mod windows;

use std::fmt;

pub use collapse::{Collapse, CollapseError};
pub use posix::Posix;
pub use scan::{
    collapse_head, collapse_tail, split_on_first_delimiter, split_on_last_delimiter, SplitResult,
};
pub use style::Style;
#[cfg(feature = "url")]
pub use crate::url::PathToUrlError;
pub use windows::Windows;

/// The platform rules of the host.
#[cfg(windows)]
pub type Native = Windows;

/// The platform rules of the host.
#[cfg(not(windows))]
pub type Native = Posix;

/// A unit of a path's character sequence.
///
/// Only ASCII units carry meaning to the collapser (separators, dots, drive
/// letters); everything else is copied through untouched.
pub trait CodeUnit: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Written after the collapsed path when the buffer has room for it.
    const NUL: Self;
    const DOT: &'static [Self];
    const DOT_DOT: &'static [Self];

    fn from_ascii(byte: u8) -> Self;

    fn to_ascii(self) -> Option<u8>;
}

impl CodeUnit for u8 {
    const NUL: u8 = 0;
    const DOT: &'static [u8] = b".";
    const DOT_DOT: &'static [u8] = b"..";

    #[inline]
    fn from_ascii(byte: u8) -> u8 {
        byte
    }

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }
}

impl CodeUnit for u16 {
    const NUL: u16 = 0;
    const DOT: &'static [u16] = &[b'.' as u16];
    const DOT_DOT: &'static [u16] = &[b'.' as u16, b'.' as u16];

    #[inline]
    fn from_ascii(byte: u8) -> u16 {
        u16::from(byte)
    }

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }
}

/// How the root of a path is split off and what happens to `..` components
/// that have nothing left to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The root is kept; excess `..` components are dropped.
    Absolute,
    /// No root (or a bare drive on Windows); excess `..` components are kept.
    Relative,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Absolute => f.write_str("absolute"),
            Mode::Relative => f.write_str("relative"),
        }
    }
}

/// Whether `path` starts with a root under the host's rules.
#[inline]
pub fn is_absolute<C: CodeUnit>(path: &[C]) -> bool {
    Native::is_absolute(path)
}

/// Whether `path` has no root under the host's rules.
#[inline]
pub fn is_relative<C: CodeUnit>(path: &[C]) -> bool {
    Native::is_relative(path)
}

/// Length of the collapsed path, terminator excluded.
#[inline]
pub fn effective_length<C: CodeUnit>(path: &[C]) -> usize {
    Native::effective_length(path)
}

/// Like [`effective_length`] with the mode fixed by the caller.
///
/// Fails with [`CollapseError::UnexpectedPrefix`] when the path's prefix
/// does not fit `mode`.
#[inline]
pub fn effective_length_as<C: CodeUnit>(mode: Mode, path: &[C]) -> Result<usize, CollapseError> {
    Native::effective_length_as(mode, path)
}

/// Writes the collapsed path into `dst` and returns its full length.
///
/// The terminator is written only when the returned length is smaller than
/// `dst.len()`.
#[inline]
pub fn collapse<C: CodeUnit>(path: &[C], dst: &mut [C]) -> usize {
    Native::collapse(path, dst)
}

/// Like [`collapse`] with the mode fixed by the caller.
///
/// Fails with [`CollapseError::UnexpectedPrefix`] when the path's prefix
/// does not fit `mode`; `dst` is left untouched then.
#[inline]
pub fn collapse_as<C: CodeUnit>(
    mode: Mode,
    path: &[C],
    dst: &mut [C],
) -> Result<usize, CollapseError> {
    Native::collapse_as(mode, path, dst)
}

pub fn collapse_to_string(path: &str) -> String {
    Native::collapse_to_string(path)
}

#[inline]
pub fn basename<C: CodeUnit>(path: &[C]) -> &[C] {
    Native::basename(path)
}

#[inline]
pub fn basename_with_suffix<'a, C: CodeUnit>(path: &'a [C], suffix: &[C]) -> &'a [C] {
    Native::basename_with_suffix(path, suffix)
}

#[inline]
pub fn dirname<C: CodeUnit>(path: &[C]) -> &[C] {
    Native::dirname(path)
}

#[inline]
pub fn extension<C: CodeUnit>(path: &[C]) -> &[C] {
    Native::extension(path)
}
