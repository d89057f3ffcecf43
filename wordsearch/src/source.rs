// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Loading word lists and choosing the candidates for a round.
use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

use crate::{random::{shuffle, RandomSource}, MIN_WORD_LEN};

/// Error returned when a word list could not be acquired.
#[derive(Debug, Error)]
pub enum WordSourceError {
    /// The word list file could not be read.
    #[error("could not read word list {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Supplier of the raw word list for a round.
pub trait WordSource {
    /// Fetch the full list of words. Either the whole list is returned or an error.
    fn load_words(&mut self) -> Result<Vec<String>, WordSourceError>;
}

/// A word list held in memory.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct StaticWords(Vec<String>);

impl StaticWords {
    /// Construct a source from any list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticWords(words.into_iter().map(Into::into).collect())
    }

    /// Construct a source from newline separated text, see [`parse_word_list`].
    pub fn parse(text: &str) -> Self {
        StaticWords(parse_word_list(text))
    }
}

impl WordSource for StaticWords {
    fn load_words(&mut self) -> Result<Vec<String>, WordSourceError> {
        Ok(self.0.clone())
    }
}

/// A word list read from a file with one word per line each time a round starts.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    /// Read words from the file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The file words are read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWords {
    fn load_words(&mut self) -> Result<Vec<String>, WordSourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| WordSourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        let words = parse_word_list(&text);
        debug!("read {} words from {:?}", words.len(), self.path);
        Ok(words)
    }
}

/// Split text into one word per line, accepting both `\n` and `\r\n` endings.
/// Surrounding whitespace is trimmed and lines shorter than [`MIN_WORD_LEN`] are
/// dropped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_WORD_LEN)
        .map(str::to_owned)
        .collect()
}

/// Upper-case a word for use on the grid. Returns `None` if the word contains anything
/// other than letters.
pub fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim();
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some(word.to_uppercase())
    } else {
        None
    }
}

/// Words chosen for a round.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CandidateList {
    /// Words the filler will try to place, in order.
    pub candidates: Vec<String>,
    /// Every usable word from the source. A selection spelling any of these counts.
    pub known: HashSet<String>,
}

/// Prepare the words for a round: normalize them, drop words shorter than
/// [`MIN_WORD_LEN`] or longer than `max_len` along with repeats of a word already seen,
/// shuffle, and keep the first `limit` as candidates. All usable words are kept as known
/// words.
pub fn prepare_candidates<R: RandomSource + ?Sized>(
    words: &[String],
    max_len: Option<usize>,
    limit: usize,
    rng: &mut R,
) -> CandidateList {
    let mut seen = HashSet::new();
    let mut usable: Vec<String> = words
        .iter()
        .filter_map(|word| normalize_word(word))
        .filter(|word| {
            let len = word.chars().count();
            len >= MIN_WORD_LEN && max_len.map_or(true, |max| len <= max)
        })
        .filter(|word| seen.insert(word.clone()))
        .collect();
    debug!("{} of {} words are usable", usable.len(), words.len());
    shuffle(&mut usable, rng);
    let known = usable.iter().cloned().collect();
    usable.truncate(limit);
    CandidateList {
        candidates: usable,
        known,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Sequence;

    #[test]
    fn parses_mixed_line_endings() {
        let words = parse_word_list("casa\r\nno\n  gato  \n\nsol\r\n");
        assert_eq!(words, vec!["casa", "gato", "sol"]);
    }

    #[test]
    fn normalizes_letters_only() {
        assert_eq!(normalize_word(" maçã "), Some("MAÇÃ".to_owned()));
        assert_eq!(normalize_word("don't"), None);
        assert_eq!(normalize_word(""), None);
    }

    #[test]
    fn prepare_filters_shuffles_and_truncates() {
        let words: Vec<String> = vec!["cat", "hi", "dog", "horse", "owl"]
            .into_iter()
            .map(String::from)
            .collect();
        let list = prepare_candidates(&words, Some(4), 2, &mut Sequence::zeros());
        // Usable: CAT DOG OWL, rotated by the zero shuffle.
        assert_eq!(list.candidates, vec!["DOG", "OWL"]);
        assert_eq!(list.known.len(), 3);
        assert!(list.known.contains("CAT"));
        assert!(!list.known.contains("HORSE"));
    }

    #[test]
    fn prepare_drops_repeated_words() {
        let words: Vec<String> = vec!["cat", "CAT", "dog", "Cat", "dog"]
            .into_iter()
            .map(String::from)
            .collect();
        let list = prepare_candidates(&words, None, 10, &mut Sequence::zeros());
        // CAT DOG, swapped by the zero shuffle.
        assert_eq!(list.candidates, vec!["DOG", "CAT"]);
        assert_eq!(list.known.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut source = FileWords::new("/nonexistent/words.txt");
        match source.load_words() {
            Err(WordSourceError::Read { path, .. }) => assert_eq!(path, source.path()),
            Ok(_) => panic!("expected read failure"),
        }
    }
}
