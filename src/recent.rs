use std::path::{Path, PathBuf};

/// One row of the "Open Recent" menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentEntry {
    pub label: String,
    pub path: PathBuf,
}

/// Most-recent-first list of opened documents, without duplicates and never
/// longer than `maximum` once an operation returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentDocuments {
    entries: Vec<PathBuf>,
    maximum: usize,
}

impl RecentDocuments {
    pub fn new(maximum: usize) -> Self {
        Self {
            entries: Vec::new(),
            maximum,
        }
    }

    /// Rebuild the list from the order it was stored in.
    ///
    /// Each path is appended and the list truncated after every append, the
    /// same as adding them one at a time.
    pub fn from_persisted<I>(paths: I, maximum: usize) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut recent = Self::new(maximum);
        for path in paths {
            recent.add(path, false);
        }
        recent
    }

    pub fn to_persisted(&self) -> Vec<PathBuf> {
        self.entries.clone()
    }

    pub fn add(&mut self, path: impl Into<PathBuf>, prepend: bool) {
        let path = path.into();
        self.entries.retain(|p| p != &path);
        if prepend {
            self.entries.insert(0, path);
        } else {
            self.entries.push(path);
        }
        self.truncate();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn maximum(&self) -> usize {
        self.maximum
    }

    /// Takes effect on the next [`add`](Self::add) or [`truncate`](Self::truncate).
    pub fn set_maximum(&mut self, maximum: usize) {
        self.maximum = maximum;
    }

    /// Drop entries from the tail until the list fits the maximum.
    pub fn truncate(&mut self) {
        self.entries.truncate(self.maximum);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn to_display_list(&self) -> Vec<RecentEntry> {
        self.entries
            .iter()
            .map(|path| RecentEntry {
                label: display_label(path),
                path: path.clone(),
            })
            .collect()
    }
}

/// "name.csv [/full/path/name.csv]"
pub fn display_label(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{} [{}]", file_name, path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn newest_first_and_truncated_to_maximum() {
        let mut recent = RecentDocuments::new(3);
        for name in ["a", "b", "c", "d"] {
            recent.add(name, true);
        }
        assert_eq!(recent.entries(), paths(&["d", "c", "b"]).as_slice());
    }

    #[test]
    fn re_adding_moves_to_front() {
        let mut recent = RecentDocuments::new(10);
        for name in ["a", "b", "a"] {
            recent.add(name, true);
        }
        assert_eq!(recent.entries(), paths(&["a", "b"]).as_slice());
    }

    #[test]
    fn adding_twice_leaves_one_entry_at_front() {
        let mut recent = RecentDocuments::new(10);
        recent.add("x", true);
        recent.add("y", true);
        recent.add("y", true);
        assert_eq!(recent.entries(), paths(&["y", "x"]).as_slice());
    }

    #[test]
    fn append_mode_keeps_stored_order() {
        let mut recent = RecentDocuments::new(10);
        for name in ["a", "b", "c", "b"] {
            recent.add(name, false);
        }
        assert_eq!(recent.entries(), paths(&["a", "c", "b"]).as_slice());
    }

    #[test]
    fn clear_empties_display_list() {
        let mut recent = RecentDocuments::new(5);
        recent.add("/tmp/a.csv", true);
        recent.clear();
        assert!(recent.is_empty());
        assert_eq!(recent.to_display_list(), Vec::new());
    }

    #[test]
    fn set_maximum_applies_on_next_add() {
        let mut recent = RecentDocuments::new(5);
        for name in ["a", "b", "c", "d"] {
            recent.add(name, true);
        }
        recent.set_maximum(2);
        assert_eq!(recent.len(), 4);
        recent.add("e", true);
        assert_eq!(recent.entries(), paths(&["e", "d"]).as_slice());
    }

    #[test]
    fn zero_maximum_keeps_nothing() {
        let mut recent = RecentDocuments::new(0);
        recent.add("a", true);
        assert!(recent.is_empty());
    }

    #[test]
    fn from_persisted_drops_overflow_from_the_tail() {
        let recent = RecentDocuments::from_persisted(paths(&["a", "b", "c", "d"]), 2);
        assert_eq!(recent.entries(), paths(&["a", "b"]).as_slice());
        assert_eq!(recent.to_persisted(), paths(&["a", "b"]));
    }

    #[test]
    fn from_persisted_collapses_duplicates() {
        let recent = RecentDocuments::from_persisted(paths(&["a", "b", "a"]), 10);
        assert_eq!(recent.entries(), paths(&["b", "a"]).as_slice());
    }

    #[test]
    fn display_list_shows_name_and_path() {
        let mut recent = RecentDocuments::new(5);
        recent.add("/home/me/old.csv", true);
        recent.add("/home/me/data/new.csv", true);
        let list = recent.to_display_list();
        assert_eq!(
            list,
            vec![
                RecentEntry {
                    label: "new.csv [/home/me/data/new.csv]".to_string(),
                    path: PathBuf::from("/home/me/data/new.csv"),
                },
                RecentEntry {
                    label: "old.csv [/home/me/old.csv]".to_string(),
                    path: PathBuf::from("/home/me/old.csv"),
                },
            ]
        );
    }

    proptest! {
        #[test]
        fn bounded_and_unique(
            maximum in 0usize..8,
            ops in proptest::collection::vec((0u8..12, any::<bool>()), 0..60),
        ) {
            let mut recent = RecentDocuments::new(maximum);
            for (id, prepend) in ops {
                recent.add(format!("doc{id}"), prepend);
                prop_assert!(recent.len() <= maximum);
                let mut seen = recent.to_persisted();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), recent.len());
            }
        }

        #[test]
        fn prepended_entry_is_first(
            ops in proptest::collection::vec(0u8..12, 1..40),
        ) {
            let mut recent = RecentDocuments::new(5);
            for id in &ops {
                recent.add(format!("doc{id}"), true);
            }
            let last = format!("doc{}", ops[ops.len() - 1]);
            prop_assert_eq!(recent.entries()[0].clone(), PathBuf::from(last));
        }
    }
}
