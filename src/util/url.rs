//! URL joining for image and manifest paths.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes besides ASCII alphanumerics that `encodeURI` leaves untouched.
const URI_RESERVED_AND_MARKS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path the way the browser's `encodeURI` does.
pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, URI_RESERVED_AND_MARKS).to_string()
}

/// Join `folder` and `file` with exactly one `/`, escaping the file part.
pub fn join_url(folder: &str, file: &str) -> String {
    let folder = folder.trim_end_matches('/');
    let file = file.trim_start_matches('/');
    format!("{folder}/{}", encode_uri(file))
}
