//! The id3 module decodes genre fields written under the ID3 conventions. Over the years these
//! fields have held bare ID3v1 integer codes, ID3v2.3 parenthesized code lists with an optional
//! refinement (`(17)(13)Custom`), and plain text, so decoding goes from the most specific form to
//! the least to avoid mangling ordinary text.

use crate::genres::parse_id3v1_genre;
use crate::parsing::{maybe_parse_by_separators, uniq, CorrectWhitespace};
use crate::separators::Separators;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

// Zero or more (INT|RX|CR) groups followed by optional free text. Derived from Mutagen's TCON parser.
static ID3V2_GENRE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^((?:\((?:[0-9]+|RX|CR)\))*)(.+)?$").unwrap());

static ID3V2_GENRE_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([0-9]+|RX|CR)\)").unwrap());

/// Parse a genre field into genre names. Legacy integer codes are mapped to their names, a single
/// entry is split by the ID3v2.3 rules and then by `separators`. When the tag format already split
/// the field into several entries, each entry is only mapped, never split or dropped.
pub fn parse_id3_genre_names<S: AsRef<str>>(raw: &[S], separators: &Separators) -> Vec<String> {
    match raw {
        [single] => parse_id3_multi_value_genre(single.as_ref(), separators),
        _ => raw
            .iter()
            .map(|s| {
                let s = s.as_ref();
                parse_id3v1_genre(s).map(str::to_string).unwrap_or_else(|| s.to_string())
            })
            .collect(),
    }
}

fn parse_id3_multi_value_genre(value: &str, separators: &Separators) -> Vec<String> {
    if let Some(name) = parse_id3v1_genre(value) {
        return vec![name.to_string()];
    }
    if let Some(genres) = parse_id3v2_genre(value) {
        return genres;
    }
    trace!("genre {value:?} is not in a legacy format, splitting by separators");
    maybe_parse_by_separators(value, separators)
}

/// Decode an ID3v2.3 composite genre such as `(4)(RX)Eurodisco`. Returns `None` if the value is
/// not in that format, or if decoding it would not change anything.
fn parse_id3v2_genre(value: &str) -> Option<Vec<String>> {
    let captures = ID3V2_GENRE_REGEX.captures(value)?;
    let mut genres = Vec::new();

    if let Some(ids) = captures.get(1) {
        for id in ID3V2_GENRE_ID_REGEX.captures_iter(ids.as_str()) {
            if let Some(name) = parse_id3v1_genre(&id[1]) {
                genres.push(name.to_string());
            }
        }
    }

    // Free text. A leading "((" escapes a genre name that itself starts with "(".
    if let Some(text) = captures.get(2).map(|m| m.as_str()).filter(|s| !s.is_empty()) {
        let name = match text.strip_prefix("((") {
            Some(rest) => format!("({rest}"),
            None => text.to_string(),
        };
        // Nothing was decoded, the whole value is plain text.
        if genres.is_empty() && name == value {
            trace!("genre {value:?} has no ID3v2 codes");
            return None;
        }
        genres.extend(name.correct_whitespace());
    }

    Some(uniq(genres))
}
