//! Did-you-mean suggestions for mistyped command and choice names.
//!
//! [`TextSuggester`] holds a table from lowercase candidate token to the
//! canonical suggestion to offer. Real choices map to themselves; aliases
//! and synonyms map to the choice they stand in for. Lookups use a
//! normalized Levenshtein similarity with a 0.6 cutoff, so clearly
//! dissimilar input produces no suggestion rather than a bad one.

/// Synonym sets activated by [`TextSuggester::add_synonyms`].
///
/// For every member of a set that is a registered choice, the whole set is
/// added as aliases suggesting that choice.
const SYNONYM_SETS: &[&[&str]] = &[
    &["create", "add"],
    &["delete", "remove"],
    &["describe", "get"],
    &["patch", "update"],
];

/// Similarity below this never yields a suggestion.
const SIMILARITY_CUTOFF: f64 = 0.6;

/// Suggests the closest valid choice for a mistyped token.
///
/// # Examples
///
/// ```
/// use arg_usage_render::suggest::TextSuggester;
///
/// let mut suggester = TextSuggester::new();
/// suggester.add_choices(["create", "delete", "describe"]);
/// suggester.add_synonyms();
///
/// assert_eq!(suggester.suggestion("add"), Some("create"));
/// assert_eq!(suggester.suggestion("delte"), Some("delete"));
/// assert_eq!(suggester.suggestion("zzz"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextSuggester {
    // Token typed -> suggestion to offer, in insertion order. Often the
    // same string, but curated aliases map to a different choice.
    choices: Vec<(String, String)>,
}

impl TextSuggester {
    /// Creates an empty suggester.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a suggester seeded with `choices`.
    pub fn with_choices<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suggester = Self::new();
        suggester.add_choices(choices);
        suggester
    }

    fn contains(&self, key: &str) -> bool {
        self.choices.iter().any(|(k, _)| k == key)
    }

    fn insert_if_absent(&mut self, key: String, suggestion: String) {
        if !self.contains(&key) {
            self.choices.push((key, suggestion));
        }
    }

    /// Adds valid choices, each suggesting itself.
    ///
    /// The first insertion of a token wins, so a later alias never
    /// overwrites a real choice.
    pub fn add_choices<I, S>(&mut self, choices: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for choice in choices {
            let choice = choice.as_ref();
            self.insert_if_absent(choice.to_lowercase(), choice.to_string());
        }
    }

    /// Adds aliases that are not valid choices themselves but should
    /// suggest `suggestion`.
    ///
    /// Call after [`add_choices`](Self::add_choices); existing tokens are
    /// never clobbered.
    pub fn add_aliases<I, S>(&mut self, aliases: I, suggestion: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for alias in aliases {
            self.insert_if_absent(alias.as_ref().to_lowercase(), suggestion.to_string());
        }
    }

    /// Activates the built-in synonym sets.
    ///
    /// Each synonym set is intersected with the registered tokens; for
    /// every valid choice found, the entire set is registered as aliases
    /// suggesting it. A set with no valid choice contributes nothing.
    pub fn add_synonyms(&mut self) {
        for synonym_set in SYNONYM_SETS {
            let valid: Vec<&str> = synonym_set
                .iter()
                .copied()
                .filter(|s| self.contains(s))
                .collect();
            for choice in valid {
                self.add_aliases(synonym_set.iter().copied(), choice);
            }
        }
    }

    /// Returns the suggestion closest to `text`, or `None` when nothing is
    /// close enough or no choices were registered. Never fails.
    pub fn suggestion(&self, text: &str) -> Option<&str> {
        let text = text.to_lowercase();
        let mut best: Option<(&str, f64)> = None;
        for (token, suggestion) in &self.choices {
            let score = similarity(&text, token);
            if score < SIMILARITY_CUTOFF {
                continue;
            }
            // Strict comparison keeps the earliest of tied candidates.
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((suggestion, score));
            }
        }
        best.map(|(suggestion, _)| suggestion)
    }
}

/// Normalized similarity in `[0, 1]`: `1 - levenshtein / max_len`.
fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Character-level edit distance, single-row dynamic programming.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let next = (diagonal + cost).min(row[j] + 1).min(row[j + 1] + 1);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b.len()]
}
