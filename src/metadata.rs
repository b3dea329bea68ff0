use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::header::LabelMode;

/// Header label modes kept beside a CSV file, since CSV has nowhere to put them.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub horizontal_header_labels: Vec<LabelMode>,
    pub vertical_header_labels: Vec<LabelMode>,
}

impl DocumentMetadata {
    /// `data.csv` -> `data.csv.tabulator`
    pub fn metadata_path(csv_path: &Path) -> PathBuf {
        let mut path = csv_path.to_path_buf();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.csv")
            .to_string();
        path.set_file_name(format!("{}.tabulator", file_name));
        path
    }

    /// Missing metadata is not an error; the document just uses default modes.
    pub fn load(csv_path: &Path) -> Result<Option<Self>> {
        let meta_path = Self::metadata_path(csv_path);
        if !meta_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&meta_path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save(&self, csv_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::metadata_path(csv_path), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn path_appends_extension() {
        assert_eq!(
            DocumentMetadata::metadata_path(Path::new("/a/b/data.csv")),
            PathBuf::from("/a/b/data.csv.tabulator")
        );
    }

    #[test]
    fn absent_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(DocumentMetadata::load(&dir.path().join("x.csv")).unwrap(), None);
    }

    #[test]
    fn saved_modes_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("x.csv");
        let meta = DocumentMetadata {
            horizontal_header_labels: vec![LabelMode::Letter, LabelMode::Decimal],
            vertical_header_labels: vec![LabelMode::Decimal],
        };
        meta.save(&csv).unwrap();
        assert_eq!(DocumentMetadata::load(&csv).unwrap(), Some(meta));
    }

    #[test]
    fn older_files_with_integer_codes_still_load() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("old.csv");
        fs::write(
            DocumentMetadata::metadata_path(&csv),
            r#"{"horizontalHeaderLabels": [1, 0], "verticalHeaderLabels": [0]}"#,
        )
        .unwrap();
        let meta = DocumentMetadata::load(&csv).unwrap().unwrap();
        assert_eq!(meta.horizontal_header_labels, vec![LabelMode::Decimal, LabelMode::Letter]);
        assert_eq!(meta.vertical_header_labels, vec![LabelMode::Letter]);
    }
}
