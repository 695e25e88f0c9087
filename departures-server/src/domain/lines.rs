//! Line allow-list.

use std::collections::BTreeSet;

/// Lines reported by default (HSL, Espoo area).
///
/// Upstream is not consistent about letter case for lettered variants, so
/// both `164K` and `164k` appear.
const DEFAULT_LINES: [&str; 5] = ["114", "111", "164", "164K", "164k"];

/// The set of line labels the pipeline reports on.
///
/// Matching is exact: `164K` and `164k` are different entries, and both
/// must be listed if upstream uses both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAllowList(BTreeSet<String>);

impl LineAllowList {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(lines.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, line: &str) -> bool {
        self.0.contains(line)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for LineAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_LINES)
    }
}

impl<S: Into<String>> FromIterator<S> for LineAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lines() {
        let lines = LineAllowList::default();
        assert_eq!(lines.iter().count(), 5);
        for line in ["111", "114", "164", "164K", "164k"] {
            assert!(lines.contains(line), "{line} should be allowed");
        }
        assert!(!lines.contains("99"));
    }

    #[test]
    fn exact_match_only() {
        let lines: LineAllowList = ["550"].into_iter().collect();
        assert!(lines.contains("550"));
        assert!(!lines.contains("550B"));
        assert!(!lines.contains(" 550"));
        assert!(!lines.contains(""));
    }

    #[test]
    fn case_sensitive() {
        let lines = LineAllowList::new(["164K"]);
        assert!(lines.contains("164K"));
        assert!(!lines.contains("164k"));
    }
}
