//! The parsing module turns raw tag values into clean lists of values. Tags frequently pack several
//! values into one field, so most of the work here is splitting on the user's separators while
//! letting an escaped separator through as a literal character.

use crate::separators::Separators;
use std::collections::HashSet;
use std::hash::Hash;

/// The character that makes the separator following it literal.
pub const ESCAPE_CHAR: char = '\\';

/// Parse a multi-value tag. A field the tag format already split into several entries is returned
/// as-is, since splitting it again would break values that contain a separator. A single entry is
/// split by `separators` and cleaned up.
pub fn parse_multi_value<S: AsRef<str>>(raw: &[S], separators: &Separators) -> Vec<String> {
    match raw {
        [single] => maybe_parse_by_separators(single.as_ref(), separators),
        _ => raw.iter().map(|s| s.as_ref().to_string()).collect(),
    }
}

/// Split a value by every unescaped separator and drop the blank pieces. Without separators the
/// value is returned untouched.
pub(crate) fn maybe_parse_by_separators(value: &str, separators: &Separators) -> Vec<String> {
    if separators.is_empty() {
        return vec![value.to_string()];
    }
    split_escaped(value, |c| separators.contains(c)).correct_whitespace()
}

/// Split a string wherever `is_separator` matches, except where the separator is preceded by
/// [`ESCAPE_CHAR`], in which case the escape is dropped and the separator is kept as a literal.
///
/// An unescaped separator always splits, even when it is the escape character itself. Empty pieces
/// between consecutive separators are kept. A trailing empty piece is not.
pub fn split_escaped<F>(s: &str, is_separator: F) -> Vec<String>
where
    F: Fn(char) -> bool,
{
    let mut split = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if is_separator(c) {
            split.push(std::mem::take(&mut current));
            continue;
        }
        if c == ESCAPE_CHAR {
            if let Some(&next) = chars.peek().filter(|&&next| is_separator(next)) {
                current.push(next);
                chars.next();
                continue;
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        split.push(current);
    }

    split
}

/// Whitespace cleanup for a single value or a list of values.
pub trait CorrectWhitespace {
    type Output;

    fn correct_whitespace(&self) -> Self::Output;
}

/// Trims the value, returning `None` if nothing is left.
impl CorrectWhitespace for str {
    type Output = Option<String>;

    fn correct_whitespace(&self) -> Option<String> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Trims every value and drops the blank ones, keeping the order of the rest.
impl<S: AsRef<str>> CorrectWhitespace for [S] {
    type Output = Vec<String>;

    fn correct_whitespace(&self) -> Vec<String> {
        self.iter().filter_map(|s| s.as_ref().correct_whitespace()).collect()
    }
}

impl<S: AsRef<str>> CorrectWhitespace for Vec<S> {
    type Output = Vec<String>;

    fn correct_whitespace(&self) -> Vec<String> {
        self.as_slice().correct_whitespace()
    }
}

impl<S: AsRef<str>, const N: usize> CorrectWhitespace for [S; N] {
    type Output = Vec<String>;

    fn correct_whitespace(&self) -> Vec<String> {
        self.as_slice().correct_whitespace()
    }
}

pub fn correct_whitespace<T: CorrectWhitespace + ?Sized>(value: &T) -> T::Output {
    value.correct_whitespace()
}

/// Parse the number out of an ID3v2-style `N/Total` position field, such as a track or disc number.
/// Zero and unparseable values mean there is no position.
pub fn parse_id3v2_position(value: &str) -> Option<u32> {
    let number = value.split('/').next()?;
    number.parse::<i64>().ok().filter(|n| *n > 0).and_then(|n| u32::try_from(n).ok())
}

pub(crate) fn uniq<T: Clone + Eq + Hash>(xs: Vec<T>) -> Vec<T> {
    let mut rv = Vec::new();
    let mut seen = HashSet::new();
    for x in xs {
        if seen.insert(x.clone()) {
            rv.push(x);
        }
    }
    rv
}
