use std::borrow::Cow;

use ::url::Url;
use percent_encoding::{percent_encode, AsciiSet, CONTROLS};

use crate::{windows::parse_drive_root, Style};

const URL_FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');
const URL_PATH: &AsciiSet = &URL_FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');
const URL_PATH_SEGMENT: &AsciiSet = &URL_PATH.add(b'/').add(b'%');

#[derive(thiserror::Error, Debug)]
pub enum PathToUrlError {
    #[error(transparent)]
    UrlParseError(#[from] ::url::ParseError),
    #[error("PathNotAbsoluteError {{ path = {path} }}")]
    PathNotAbsoluteError { path: Cow<'static, str> },
}

pub(crate) fn path_to_file_url<S: Style>(path: &str) -> Result<Url, PathToUrlError> {
    if !S::is_absolute(path.as_bytes()) {
        return Err(PathToUrlError::PathNotAbsoluteError {
            path: Cow::Owned(path.to_string()),
        });
    }
    let collapsed = S::collapse_to_string(path);

    let mut serialization = String::from("file://");
    let body = match parse_drive_root(&collapsed) {
        Ok((body, (drive, _))) => {
            serialization.push('/');
            serialization.push(drive);
            serialization.push(':');
            body
        }
        // a single separator
        Err(_) => collapsed.get(1..).unwrap_or_default(),
    };

    let mut empty = true;
    let segments = body
        .split(|c: char| c.is_ascii() && S::is_separator(c as u8))
        .filter(|segment| !segment.is_empty());
    for segment in segments {
        empty = false;
        serialization.push('/');
        serialization.extend(percent_encode(segment.as_bytes(), URL_PATH_SEGMENT));
    }

    // A windows drive letter must end with a slash.
    if empty {
        serialization.push('/');
    }

    log::trace!("file url for {path:?}: {serialization}");
    Ok(Url::parse(&serialization)?)
}
