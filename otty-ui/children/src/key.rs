//! Key fragments and their escaping.
//!
//! A key path is built from fragments joined by [`SEPARATOR`] (start of a
//! path) and [`SUBSEPARATOR`] (nesting level). Explicit user keys are
//! escaped so they never contain a bare `:` and always start with `$`, which
//! keeps them apart from base-36 positional fragments.

use otty_ui_element::Keyed;

use crate::child::Child;

pub const SEPARATOR: char = '.';
pub const SUBSEPARATOR: char = ':';

const ESCAPE_MARKER: char = '$';

/// Escape a user key for use as a path fragment.
///
/// `=` becomes `=0` and `:` becomes `=2`; the result is prefixed with `$`.
pub fn escape(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len() + 1);
    escaped.push(ESCAPE_MARKER);
    for ch in key.chars() {
        match ch {
            '=' => escaped.push_str("=0"),
            ':' => escaped.push_str("=2"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Double every `/` so user keys can sit in front of a `/` path boundary.
pub fn escape_user_provided_key(key: &str) -> String {
    key.replace('/', "//")
}

/// Fragment that identifies `child` at `index` within its container.
pub fn resolve_key<E: Keyed>(child: &Child<E>, index: usize) -> String {
    match child.key() {
        Some(key) => escape(key),
        None => to_base36(index),
    }
}

fn to_base36(mut value: usize) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return String::from("0");
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[value % 36]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
