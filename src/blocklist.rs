use crate::{Error, Set};
use lazy_static::lazy_static;
use std::iter::FromIterator;
use std::path::Path;

lazy_static! {
    static ref BUNDLED: Blocklist =
        Blocklist::from_lines(include_str!("blocked_phrases.txt"));
}

/// An ordered list of blocked phrases.
///
/// A phrase may span several tokens ("go to hell"). Order matters: when two
/// phrases could match overlapping spans of the same sentence, the phrase
/// listed first is applied first, and the `#` runs it leaves behind cannot
/// match any later phrase. Repeated phrases are dropped on construction; a
/// second pass over an already-masked phrase can never match again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    phrases: Vec<String>,
}

impl Blocklist {
    /// Builds a blocklist from phrases in priority order.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = Set::default();
        Self {
            phrases: phrases
                .into_iter()
                .map(Into::into)
                .filter(|phrase| seen.insert(phrase.clone()))
                .collect(),
        }
    }

    /// Parses a newline-delimited phrase list. Empty lines are dropped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(text.lines().filter(|line| !line.is_empty()))
    }

    /// Reads a newline-delimited phrase list from `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Configuration {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lines(&text))
    }

    /// The default list bundled with the crate.
    pub fn bundled() -> &'static Blocklist {
        &BUNDLED
    }

    /// Phrases in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns `true` if the list holds no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Blocklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
