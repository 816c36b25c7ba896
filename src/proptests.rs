//! Property-based tests for collapsing.
//!
//! POSIX output is checked against a straightforward stack-based model;
//! both platforms are checked for length agreement, truncation and
//! idempotence.

use proptest::prelude::*;

use crate::{Collapse, CodeUnit, Mode, Posix, Style, Windows};

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_]{1,4}",
        1 => Just(".".to_string()),
        2 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn posix_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(segment_strategy(), 0..12),
    )
        .prop_map(|(rooted, segments)| {
            let body = segments.join("/");
            if rooted {
                format!("/{body}")
            } else {
                body
            }
        })
}

fn windows_path_strategy() -> impl Strategy<Value = String> {
    let root = prop_oneof![
        Just(""),
        Just(r"\"),
        Just("/"),
        Just(r"C:\"),
        Just("d:/"),
        Just("C:"),
    ];
    let segments = prop::collection::vec(
        (segment_strategy(), prop_oneof![Just('\\'), Just('/')]),
        0..12,
    );
    (root, segments).prop_map(|(root, segments)| {
        let mut path = root.to_string();
        for (segment, separator) in segments {
            path.push_str(&segment);
            path.push(separator);
        }
        path
    })
}

fn reference_collapse(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut kept: Vec<&str> = Vec::new();
    let mut leading = 0usize;
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if kept.pop().is_none() && !absolute {
                    leading += 1;
                }
            }
            name => kept.push(name),
        }
    }
    let joined = std::iter::repeat("..")
        .take(leading)
        .chain(kept)
        .collect::<Vec<_>>()
        .join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

fn check_copy<C: CodeUnit, S: Style>(path: &[C]) -> Result<(), TestCaseError> {
    let collapse = Collapse::<C, S>::new(path);
    let len = collapse.length();

    let mut buf = vec![C::from_ascii(b'#'); len + 1];
    prop_assert_eq!(collapse.copy(&mut buf), len);
    prop_assert_eq!(buf[len], C::NUL);

    let root_len = S::classify(path).1.head.len();
    for capacity in 0..=len {
        let mut short = vec![C::from_ascii(b'#'); capacity];
        prop_assert_eq!(collapse.copy(&mut short), len);

        // the root is clamped, each body component goes in whole with the
        // separator after it
        let boundary = (root_len..len)
            .filter(|&i| S::is_separator_unit(buf[i]))
            .map(|i| i + 1)
            .filter(|&end| end <= capacity)
            .max()
            .unwrap_or(0);
        let written = boundary.max(root_len.min(capacity));
        prop_assert_eq!(&short[..written], &buf[..written]);
        prop_assert!(short[written..].iter().all(|&unit| unit == C::from_ascii(b'#')));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn posix_matches_reference(path in posix_path_strategy()) {
        prop_assert_eq!(Posix::collapse_to_string(&path), reference_collapse(&path));
    }

    #[test]
    fn posix_copy_agrees_with_length(path in posix_path_strategy()) {
        check_copy::<u8, Posix>(path.as_bytes())?;
    }

    #[test]
    fn windows_copy_agrees_with_length(path in windows_path_strategy()) {
        check_copy::<u8, Windows>(path.as_bytes())?;
        let wide: Vec<u16> = path.encode_utf16().collect();
        check_copy::<u16, Windows>(&wide)?;
    }

    #[test]
    fn collapse_is_idempotent(posix in posix_path_strategy(), windows in windows_path_strategy()) {
        let once = Posix::collapse_to_string(&posix);
        prop_assert_eq!(Posix::collapse_to_string(&once), once.clone());

        let once = Windows::collapse_to_string(&windows);
        prop_assert_eq!(Windows::collapse_to_string(&once), once.clone());
    }

    #[test]
    fn output_has_no_dot_components(path in windows_path_strategy()) {
        let bytes = path.as_bytes();
        let collapse = Collapse::<u8, Windows>::new(bytes);
        let out = collapse.to_vec();
        let body = &out[collapse.root().len()..];
        prop_assert!(out.starts_with(collapse.root()));

        if !body.is_empty() {
            let mut backtracks_done = false;
            for component in body.split(|&unit| unit == b'\\') {
                prop_assert!(!component.is_empty());
                prop_assert!(component != b".");
                if component == b".." {
                    prop_assert_eq!(collapse.mode(), Mode::Relative);
                    prop_assert!(!backtracks_done);
                } else {
                    backtracks_done = true;
                }
            }
        }
    }

    #[test]
    fn wide_and_narrow_agree(path in windows_path_strategy()) {
        let wide: Vec<u16> = path.encode_utf16().collect();
        let narrow: Vec<u16> = Windows::collapse_to_string(&path).encode_utf16().collect();
        prop_assert_eq!(Collapse::<u16, Windows>::new(&wide).to_vec(), narrow);
    }
}
