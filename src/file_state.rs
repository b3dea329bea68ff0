use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default)]
pub struct FileState {
    pub current_path: Option<PathBuf>,
    pub is_dirty: bool,
    pub is_read_only: bool,
}

impl FileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_path(path: PathBuf) -> Self {
        Self {
            current_path: Some(path),
            ..Self::default()
        }
    }

    pub fn file_name(&self) -> String {
        self.current_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Tab title: file name with a trailing `*` while there are unsaved edits.
    pub fn title(&self) -> String {
        if self.is_dirty {
            format!("{}*", self.file_name())
        } else {
            self.file_name()
        }
    }

    /// Whether this document was loaded from the same file as `path`.
    pub fn is_same_file(&self, path: &Path) -> bool {
        let Some(current) = &self.current_path else {
            return false;
        };
        match (current.canonicalize(), path.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => current == path,
        }
    }

    pub fn mark_dirty(&mut self) {
        if !self.is_read_only {
            self.is_dirty = true;
        }
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.current_path = Some(path);
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.is_read_only = read_only;
    }
}
