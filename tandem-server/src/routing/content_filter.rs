use regex::{NoExpand, Regex, RegexBuilder};
use tracing::warn;

/// Terms masked in every relayed chat message.
pub const DEFAULT_BLOCKLIST: [&str; 2] = ["badword1", "badword2"];

pub const MASK: &str = "***";

/// Stateless redaction of chat text.
///
/// Each term is matched as a case-insensitive substring (Unicode case
/// folding) and every occurrence is replaced by [`MASK`]. Terms are applied
/// in list order over the whole text.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    terms: Vec<String>,
    patterns: Vec<Regex>,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKLIST)
    }
}

impl ContentFilter {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self {
            terms: Vec::new(),
            patterns: Vec::new(),
        };

        for term in terms {
            let term: String = term.into();
            if term.is_empty() {
                continue;
            }
            match RegexBuilder::new(&regex::escape(&term))
                .case_insensitive(true)
                .build()
            {
                Ok(pattern) => {
                    filter.patterns.push(pattern);
                    filter.terms.push(term);
                }
                Err(e) => warn!("Blocklist term {:?} rejected: {}", term, e),
            }
        }

        filter
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_owned();
        for pattern in &self.patterns {
            out = pattern.replace_all(&out, NoExpand(MASK)).into_owned();
        }
        out
    }
}
