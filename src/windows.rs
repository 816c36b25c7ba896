use nom::{
    character::complete::{char, one_of, satisfy},
    error::context,
    sequence::{pair, terminated},
    IResult, Parser,
};

use crate::{CodeUnit, Style};

/// Windows rules: `\` and `/` both separate components, `\` is preferred.
///
/// A root is a single leading separator or a drive followed by a separator
/// (`C:\`). A bare drive (`C:file`) roots a relative path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Windows;

pub fn parse_drive(path: &str) -> IResult<&str, char> {
    context("drive", satisfy(|c: char| c.is_ascii_alphabetic())).parse(path)
}

pub fn parse_drive_exact(path: &str) -> IResult<&str, char> {
    context("drive_exact", terminated(parse_drive, char(':')))
        .parse(path)
        .map(|(path, drive)| (path, drive.to_ascii_uppercase()))
}

/// Parses `<letter>:<sep>`, yielding the upper-cased drive and the separator.
pub fn parse_drive_root(path: &str) -> IResult<&str, (char, char)> {
    context("drive_root", pair(parse_drive_exact, one_of(r"\/"))).parse(path)
}

pub fn is_windows_sep(byte: u8) -> bool {
    byte == b'\\' || byte == b'/'
}

fn is_drive_letter<C: CodeUnit>(unit: C) -> bool {
    unit.to_ascii().is_some_and(|byte| byte.is_ascii_alphabetic())
}

fn drive_prefix_len<C: CodeUnit>(path: &[C]) -> usize {
    match path {
        [drive, colon, ..] if is_drive_letter(*drive) && *colon == C::from_ascii(b':') => 2,
        _ => 0,
    }
}

impl Style for Windows {
    const SEPARATOR: u8 = b'\\';

    #[inline]
    fn is_separator(byte: u8) -> bool {
        is_windows_sep(byte)
    }

    fn absolute_root_len<C: CodeUnit>(path: &[C]) -> Option<usize> {
        match path.first() {
            Some(&unit) if Self::is_separator_unit(unit) => Some(1),
            _ => {
                let drive = drive_prefix_len(path);
                match path.get(drive) {
                    Some(&unit) if drive > 0 && Self::is_separator_unit(unit) => Some(drive + 1),
                    _ => None,
                }
            }
        }
    }

    fn relative_root_len<C: CodeUnit>(path: &[C]) -> Option<usize> {
        let drive = drive_prefix_len(path);
        match path.get(drive) {
            Some(&unit) if Self::is_separator_unit(unit) => None,
            _ => Some(drive),
        }
    }
}
