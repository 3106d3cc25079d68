use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// The set of characters that delimit multiple values packed into a single tag field. An empty set
/// means values are never split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Separators {
    chars: BTreeSet<char>,
}

impl Separators {
    pub const COMMA: char = ',';
    pub const SEMICOLON: char = ';';
    pub const SLASH: char = '/';
    pub const PLUS: char = '+';
    pub const AND: char = '&';

    /// The separator choices offered to users.
    pub const KNOWN: [char; 5] = [Self::COMMA, Self::SEMICOLON, Self::SLASH, Self::PLUS, Self::AND];

    pub fn new(s: &str) -> Self {
        s.chars().collect()
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for Separators {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self { chars: iter.into_iter().collect() }
    }
}

impl From<&str> for Separators {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Separators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Serialize for Separators {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Separators {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}
