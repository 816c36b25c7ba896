use std::fmt;

#[cfg(feature = "url")]
use ::url::Url;

#[cfg(feature = "url")]
use crate::url::{path_to_file_url, PathToUrlError};
use crate::{
    collapse::{Collapse, CollapseError},
    scan::{split_on_last_delimiter, trim_trailing_separators, SplitResult},
    CodeUnit, Mode,
};

/// The rules of one platform: which units separate components and what a
/// root looks like.
///
/// Implementors supply the separator and root rules; everything else is
/// built on top of them.
pub trait Style: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Written between components of a collapsed body.
    const SEPARATOR: u8;

    fn is_separator(byte: u8) -> bool;

    /// Length of the root if `path` is absolute.
    fn absolute_root_len<C: CodeUnit>(path: &[C]) -> Option<usize>;

    /// Length of the root if `path` is relative, `None` if it is absolute.
    fn relative_root_len<C: CodeUnit>(path: &[C]) -> Option<usize>;

    #[inline]
    fn is_separator_unit<C: CodeUnit>(unit: C) -> bool {
        unit.to_ascii().is_some_and(Self::is_separator)
    }

    #[inline]
    fn is_absolute<C: CodeUnit>(path: &[C]) -> bool {
        Self::absolute_root_len(path).is_some()
    }

    #[inline]
    fn is_relative<C: CodeUnit>(path: &[C]) -> bool {
        !Self::is_absolute(path)
    }

    /// Splits `path` into its root (`head`) and body (`tail`) under `mode`.
    fn split_root<C: CodeUnit>(
        mode: Mode,
        path: &[C],
    ) -> Result<SplitResult<'_, C>, CollapseError> {
        let root_len = match mode {
            Mode::Absolute => Self::absolute_root_len(path),
            Mode::Relative => Self::relative_root_len(path),
        };
        root_len
            .map(|len| SplitResult::at(path, len))
            .ok_or(CollapseError::UnexpectedPrefix { mode })
    }

    /// Picks the mode that fits `path` and splits its root off.
    fn classify<C: CodeUnit>(path: &[C]) -> (Mode, SplitResult<'_, C>) {
        match Self::absolute_root_len(path) {
            Some(len) => (Mode::Absolute, SplitResult::at(path, len)),
            None => {
                let len = Self::relative_root_len(path).unwrap_or(0);
                (Mode::Relative, SplitResult::at(path, len))
            }
        }
    }

    fn effective_length<C: CodeUnit>(path: &[C]) -> usize {
        Collapse::<C, Self>::new(path).length()
    }

    fn effective_length_as<C: CodeUnit>(mode: Mode, path: &[C]) -> Result<usize, CollapseError> {
        Collapse::<C, Self>::with_mode(mode, path).map(|collapse| collapse.length())
    }

    fn collapse<C: CodeUnit>(path: &[C], dst: &mut [C]) -> usize {
        Collapse::<C, Self>::new(path).copy(dst)
    }

    fn collapse_as<C: CodeUnit>(
        mode: Mode,
        path: &[C],
        dst: &mut [C],
    ) -> Result<usize, CollapseError> {
        Collapse::<C, Self>::with_mode(mode, path).map(|collapse| collapse.copy(dst))
    }

    fn collapse_to_string(path: &str) -> String {
        let collapsed = Collapse::<u8, Self>::new(path.as_bytes()).to_vec();
        // splitting only ever happens at ASCII units, so this cannot fail
        String::from_utf8(collapsed)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }

    /// The last component of `path`, ignoring trailing separators.
    ///
    /// A path that is nothing but a root yields the root.
    fn basename<C: CodeUnit>(path: &[C]) -> &[C] {
        let (_, SplitResult { head: root, tail }) = Self::classify(path);
        let stem = trim_trailing_separators::<Self, C>(tail);
        if stem.is_empty() {
            return root;
        }
        split_on_last_delimiter::<Self, C>(stem).tail
    }

    fn basename_with_suffix<'a, C: CodeUnit>(path: &'a [C], suffix: &[C]) -> &'a [C] {
        let base = Self::basename(path);
        match base.strip_suffix(suffix) {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => base,
        }
    }

    /// Everything before the last component of `path`.
    ///
    /// Falls back to the root, then to `.`.
    fn dirname<C: CodeUnit>(path: &[C]) -> &[C] {
        let (_, SplitResult { head: root, tail }) = Self::classify(path);
        let stem = trim_trailing_separators::<Self, C>(tail);
        let parent = split_on_last_delimiter::<Self, C>(stem).head;
        let parent = trim_trailing_separators::<Self, C>(parent);
        if !parent.is_empty() {
            &path[..root.len() + parent.len()]
        } else if !root.is_empty() {
            root
        } else {
            C::DOT
        }
    }

    /// The text after the last `.` of the basename, without the dot.
    fn extension<C: CodeUnit>(path: &[C]) -> &[C] {
        let base = Self::basename(path);
        match base.iter().rposition(|&unit| unit == C::from_ascii(b'.')) {
            Some(i) if i > 0 => &base[i + 1..],
            _ => &base[base.len()..],
        }
    }

    /// Collapses an absolute path and serializes it as a `file:` URL.
    #[cfg(feature = "url")]
    fn to_file_url(path: &str) -> Result<Url, PathToUrlError> {
        path_to_file_url::<Self>(path)
    }
}
