use std::collections::HashSet;

/// Ordered, de-duplicated keyword candidates plus the user's selection.
///
/// Invariant: every selected keyword is in the list. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordSet {
    keywords: Vec<String>,
    selected: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the list with nothing selected; duplicates and blanks are dropped.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for keyword in keywords {
            let keyword = keyword.into();
            if !keyword.trim().is_empty() && !set.contains(&keyword) {
                set.keywords.push(keyword);
            }
        }
        set
    }

    /// Appends and auto-selects a keyword. Returns false for blanks and duplicates.
    pub fn add(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() || self.contains(keyword) {
            return false;
        }
        self.keywords.push(keyword.to_string());
        self.selected.insert(keyword.to_string());
        true
    }

    pub fn remove(&mut self, keyword: &str) -> bool {
        let before = self.keywords.len();
        self.keywords.retain(|k| k != keyword);
        self.selected.remove(keyword);
        self.keywords.len() != before
    }

    /// Flips selection of a listed keyword. Unknown keywords are ignored.
    pub fn toggle(&mut self, keyword: &str) -> bool {
        if !self.contains(keyword) {
            return false;
        }
        if !self.selected.remove(keyword) {
            self.selected.insert(keyword.to_string());
        }
        true
    }

    pub fn select_all(&mut self) {
        self.selected = self.keywords.iter().cloned().collect();
    }

    pub fn select_none(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn is_selected(&self, keyword: &str) -> bool {
        self.selected.contains(keyword)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Selected keywords in list order.
    pub fn selected(&self) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|k| self.selected.contains(k.as_str()))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}
