use std::{collections::BTreeSet, collections::HashSet, fs, io::ErrorKind, path::Path};

/// Denylist of whole words that invalidate a comment outright.
#[derive(Debug, Clone, Default)]
pub struct ProfanityList {
    words: HashSet<String>,
}

impl ProfanityList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Loads one word per line. A missing or unreadable file yields an empty
    /// list so that startup is never blocked by it.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                let list = Self::new(contents.lines());
                tracing::info!(
                    "Loaded {} banned words from {}",
                    list.len(),
                    path.display()
                );
                list
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Banned word list {} not found, profanity check disabled",
                    path.display()
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read banned word list {}: {}. Profanity check disabled",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    pub fn check(&self, normalized: &str) -> BTreeSet<String> {
        contains_banned(normalized, &self.words)
    }
}

/// Banned tokens present in `normalized`. Matching is whole-token and
/// case-insensitive; substrings never match.
pub fn contains_banned(normalized: &str, banned: &HashSet<String>) -> BTreeSet<String> {
    if banned.is_empty() {
        return BTreeSet::new();
    }

    normalized
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| banned.contains(token))
        .collect()
}
