pub mod config;
pub mod error;
pub mod genres;
pub mod id3;
pub mod parsing;
pub mod separators;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{Result, TagParseError, TagParseExpectedError};
pub use genres::{genre_name, GENRE_TABLE};
pub use id3::parse_id3_genre_names;
pub use parsing::{correct_whitespace, parse_id3v2_position, parse_multi_value, split_escaped, CorrectWhitespace};
pub use separators::Separators;

#[cfg(test)]
mod id3_test;
