use crate::{CodeUnit, Style};

/// POSIX rules: `/` is the only separator and the only root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Posix;

pub fn is_posix_sep(byte: u8) -> bool {
    byte == b'/'
}

impl Style for Posix {
    const SEPARATOR: u8 = b'/';

    #[inline]
    fn is_separator(byte: u8) -> bool {
        is_posix_sep(byte)
    }

    fn absolute_root_len<C: CodeUnit>(path: &[C]) -> Option<usize> {
        match path.first() {
            Some(&unit) if Self::is_separator_unit(unit) => Some(1),
            _ => None,
        }
    }

    fn relative_root_len<C: CodeUnit>(path: &[C]) -> Option<usize> {
        match path.first() {
            Some(&unit) if Self::is_separator_unit(unit) => None,
            _ => Some(0),
        }
    }
}
