use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::Result;
use crate::file_io;
use crate::file_state::FileState;
use crate::header::{HeaderAxis, HeaderError, LabelMode};
use crate::metadata::DocumentMetadata;
use crate::preferences::{MAX_NEW_DOCUMENT_SIZE, Preferences};

/// Largest row or column count a companion metadata file may grow a loaded grid to.
pub const MAX_METADATA_HEADERS: usize = MAX_NEW_DOCUMENT_SIZE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("document is read-only")]
    ReadOnly,

    #[error(transparent)]
    Header(#[from] HeaderError),
}

/// Which header an operation applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Column headers
    Horizontal,
    /// Row headers
    Vertical,
}

/// A grid of text cells with a header on each axis.
#[derive(Clone, Debug)]
pub struct Document {
    cells: Vec<Vec<String>>,
    horizontal: HeaderAxis,
    vertical: HeaderAxis,
    default_modes: (LabelMode, LabelMode),
    pub file_state: FileState,
}

impl Document {
    /// An empty document sized and labelled from the preferences.
    pub fn new(prefs: &Preferences) -> Self {
        Self::with_size(
            prefs.new_document_rows.max(1),
            prefs.new_document_columns.max(1),
            prefs.horizontal_header_labels,
            prefs.vertical_header_labels,
        )
    }

    pub fn with_size(
        rows: usize,
        columns: usize,
        horizontal_mode: LabelMode,
        vertical_mode: LabelMode,
    ) -> Self {
        Self {
            cells: vec![vec![String::new(); columns]; rows],
            horizontal: HeaderAxis::new(columns, horizontal_mode),
            vertical: HeaderAxis::new(rows, vertical_mode),
            default_modes: (horizontal_mode, vertical_mode),
            file_state: FileState::new(),
        }
    }

    /// Load a CSV file, restoring header modes from its metadata file when present.
    pub fn load(path: &Path, prefs: &Preferences) -> Result<Self> {
        let mut cells = file_io::read_csv(path)?;
        let metadata = match DocumentMetadata::load(path) {
            Ok(metadata) => metadata.unwrap_or_default(),
            Err(e) => {
                log::warn!("Ignoring header metadata for {}: {}", path.display(), e);
                DocumentMetadata::default()
            }
        };

        let read_rows = cells.len();
        let read_columns = cells.first().map(Vec::len).unwrap_or(0);
        let rows = read_rows
            .max(metadata.vertical_header_labels.len().min(MAX_METADATA_HEADERS))
            .max(1);
        let columns = read_columns
            .max(metadata.horizontal_header_labels.len().min(MAX_METADATA_HEADERS))
            .max(1);
        if rows < metadata.vertical_header_labels.len() || columns < metadata.horizontal_header_labels.len() {
            log::warn!("Header metadata for {} is larger than the grid, extra modes dropped", path.display());
        }
        cells.resize_with(rows, Vec::new);
        for row in &mut cells {
            row.resize(columns, String::new());
        }

        let mut horizontal = HeaderAxis::from_modes(metadata.horizontal_header_labels);
        horizontal.resize(columns, prefs.horizontal_header_labels);
        let mut vertical = HeaderAxis::from_modes(metadata.vertical_header_labels);
        vertical.resize(rows, prefs.vertical_header_labels);

        log::info!("Loaded {} ({} x {})", path.display(), rows, columns);

        Ok(Self {
            cells,
            horizontal,
            vertical,
            default_modes: (prefs.horizontal_header_labels, prefs.vertical_header_labels),
            file_state: FileState::for_path(path.to_path_buf()),
        })
    }

    /// Write the cells and header modes to `path` and make it the document's file.
    pub fn save_to(&mut self, path: PathBuf) -> Result<()> {
        file_io::write_csv(&path, &self.cells)?;
        let metadata = DocumentMetadata {
            horizontal_header_labels: self.horizontal.modes().to_vec(),
            vertical_header_labels: self.vertical.modes().to_vec(),
        };
        metadata.save(&path)?;
        log::info!("Saved {}", path.display());
        self.file_state.set_path(path);
        self.file_state.mark_clean();
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.horizontal.len()
    }

    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_read_only(&self) -> bool {
        self.file_state.is_read_only
    }

    fn ensure_editable(&self) -> std::result::Result<(), EditError> {
        if self.is_read_only() {
            return Err(EditError::ReadOnly);
        }
        Ok(())
    }

    /// Returns whether the cell changed. Out-of-range writes and writes to a
    /// read-only document are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, text: String) -> bool {
        if self.is_read_only() {
            return false;
        }
        let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) else {
            return false;
        };
        if *cell == text {
            return false;
        }
        *cell = text;
        self.file_state.mark_dirty();
        true
    }

    pub fn header(&self, axis: Axis) -> &HeaderAxis {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    fn header_mut(&mut self, axis: Axis) -> &mut HeaderAxis {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    fn default_mode(&self, axis: Axis) -> LabelMode {
        match axis {
            Axis::Horizontal => self.default_modes.0,
            Axis::Vertical => self.default_modes.1,
        }
    }

    pub fn header_label(&self, axis: Axis, index: usize) -> String {
        self.header(axis).label(index).unwrap_or_default()
    }

    pub fn set_header_mode(&mut self, axis: Axis, index: usize, mode: LabelMode) -> std::result::Result<(), EditError> {
        self.ensure_editable()?;
        if self.header(axis).mode(index) == Some(mode) {
            return Ok(());
        }
        self.header_mut(axis).set_mode(index, mode)?;
        self.file_state.mark_dirty();
        Ok(())
    }

    pub fn set_all_header_modes(&mut self, axis: Axis, mode: LabelMode) -> std::result::Result<(), EditError> {
        self.ensure_editable()?;
        if self.header(axis).modes().iter().all(|m| *m == mode) {
            return Ok(());
        }
        self.header_mut(axis).set_all(mode);
        self.file_state.mark_dirty();
        Ok(())
    }

    /// New headers inherit the mode of the header they are inserted before.
    fn inherited_mode(&self, axis: Axis, at: usize) -> LabelMode {
        let header = self.header(axis);
        header
            .mode(at)
            .or_else(|| at.checked_sub(1).and_then(|i| header.mode(i)))
            .unwrap_or_else(|| self.default_mode(axis))
    }

    pub fn insert_row(&mut self, at: usize) -> std::result::Result<(), EditError> {
        self.ensure_editable()?;
        let mode = self.inherited_mode(Axis::Vertical, at);
        self.vertical.insert(at, 1, mode)?;
        self.cells.insert(at, vec![String::new(); self.column_count()]);
        self.file_state.mark_dirty();
        Ok(())
    }

    /// The last remaining row cannot be removed.
    pub fn remove_row(&mut self, at: usize) -> std::result::Result<(), EditError> {
        self.ensure_editable()?;
        if self.row_count() <= 1 {
            return Err(HeaderError::InvalidIndex {
                index: at,
                len: self.row_count(),
            }
            .into());
        }
        self.vertical.remove(at, 1)?;
        self.cells.remove(at);
        self.file_state.mark_dirty();
        Ok(())
    }

    pub fn insert_column(&mut self, at: usize) -> std::result::Result<(), EditError> {
        self.ensure_editable()?;
        let mode = self.inherited_mode(Axis::Horizontal, at);
        self.horizontal.insert(at, 1, mode)?;
        for row in &mut self.cells {
            row.insert(at, String::new());
        }
        self.file_state.mark_dirty();
        Ok(())
    }

    /// The last remaining column cannot be removed.
    pub fn remove_column(&mut self, at: usize) -> std::result::Result<(), EditError> {
        self.ensure_editable()?;
        if self.column_count() <= 1 {
            return Err(HeaderError::InvalidIndex {
                index: at,
                len: self.column_count(),
            }
            .into());
        }
        self.horizontal.remove(at, 1)?;
        for row in &mut self.cells {
            row.remove(at);
        }
        self.file_state.mark_dirty();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn small() -> Document {
        Document::with_size(3, 3, LabelMode::Letter, LabelMode::Decimal)
    }

    #[test]
    fn new_document_follows_preferences() {
        let prefs = Preferences {
            new_document_rows: 4,
            new_document_columns: 2,
            horizontal_header_labels: LabelMode::Decimal,
            vertical_header_labels: LabelMode::Letter,
            ..Preferences::default()
        };
        let doc = Document::new(&prefs);
        assert_eq!((doc.row_count(), doc.column_count()), (4, 2));
        assert_eq!(doc.header(Axis::Horizontal).labels(), vec!["1", "2"]);
        assert_eq!(doc.header(Axis::Vertical).labels(), vec!["A", "B", "C", "D"]);
        assert!(!doc.file_state.is_dirty);
    }

    #[test]
    fn editing_a_cell_marks_dirty_once_changed() {
        let mut doc = small();
        assert!(!doc.set_cell(0, 0, String::new()));
        assert!(!doc.file_state.is_dirty);
        assert!(doc.set_cell(0, 0, "x".into()));
        assert_eq!(doc.cell(0, 0), "x");
        assert!(doc.file_state.is_dirty);
        assert!(!doc.set_cell(10, 10, "y".into()));
    }

    #[test]
    fn single_header_relabel() {
        let mut doc = small();
        doc.set_header_mode(Axis::Horizontal, 1, LabelMode::Decimal).unwrap();
        assert_eq!(doc.header(Axis::Horizontal).labels(), vec!["A", "2", "C"]);
        assert_eq!(doc.header(Axis::Vertical).labels(), vec!["1", "2", "3"]);
        assert!(doc.set_header_mode(Axis::Vertical, 3, LabelMode::Letter).is_err());
    }

    #[test]
    fn relabel_whole_axis() {
        let mut doc = small();
        doc.set_all_header_modes(Axis::Vertical, LabelMode::Letter).unwrap();
        assert_eq!(doc.header(Axis::Vertical).labels(), vec!["A", "B", "C"]);
    }

    #[test]
    fn inserting_a_row_shifts_cells_and_labels() {
        let mut doc = small();
        doc.set_cell(1, 0, "second".into());
        doc.insert_row(1).unwrap();
        assert_eq!(doc.row_count(), 4);
        assert_eq!(doc.cell(1, 0), "");
        assert_eq!(doc.cell(2, 0), "second");
        assert_eq!(doc.header(Axis::Vertical).labels(), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn inserted_column_inherits_neighbour_mode() {
        let mut doc = small();
        doc.set_header_mode(Axis::Horizontal, 2, LabelMode::Decimal).unwrap();
        doc.insert_column(2).unwrap();
        doc.insert_column(4).unwrap();
        assert_eq!(doc.header(Axis::Horizontal).labels(), vec!["A", "B", "3", "4", "5"]);
        assert_eq!(doc.cells()[0].len(), 5);
    }

    #[test]
    fn removing_keeps_at_least_one_row_and_column() {
        let mut doc = Document::with_size(2, 1, LabelMode::Letter, LabelMode::Decimal);
        doc.set_cell(1, 0, "keep".into());
        doc.remove_row(0).unwrap();
        assert_eq!(doc.cell(0, 0), "keep");
        assert!(doc.remove_row(0).is_err());
        assert!(doc.remove_column(0).is_err());
        assert_eq!((doc.row_count(), doc.column_count()), (1, 1));
    }

    #[test]
    fn read_only_document_refuses_every_edit() {
        let mut doc = Document::with_size(2, 2, LabelMode::Letter, LabelMode::Decimal);
        doc.file_state.set_read_only(true);

        assert!(!doc.set_cell(0, 0, "x".into()));
        assert_eq!(doc.insert_row(0), Err(EditError::ReadOnly));
        assert_eq!(doc.remove_row(0), Err(EditError::ReadOnly));
        assert_eq!(doc.insert_column(0), Err(EditError::ReadOnly));
        assert_eq!(doc.remove_column(0), Err(EditError::ReadOnly));
        assert_eq!(
            doc.set_header_mode(Axis::Horizontal, 0, LabelMode::Decimal),
            Err(EditError::ReadOnly)
        );
        assert_eq!(
            doc.set_all_header_modes(Axis::Vertical, LabelMode::Letter),
            Err(EditError::ReadOnly)
        );

        assert_eq!((doc.row_count(), doc.column_count()), (2, 2));
        assert_eq!(doc.cell(0, 0), "");
        assert_eq!(doc.header(Axis::Horizontal).labels(), vec!["A", "B"]);
        assert_eq!(doc.header(Axis::Vertical).labels(), vec!["1", "2"]);
        assert!(!doc.file_state.is_dirty);

        doc.file_state.set_read_only(false);
        doc.insert_row(0).unwrap();
        assert_eq!(doc.row_count(), 3);
        assert!(doc.file_state.is_dirty);
    }

    #[test]
    fn oversized_metadata_is_clamped_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.csv");
        std::fs::write(&path, "a,b\n").unwrap();
        DocumentMetadata {
            horizontal_header_labels: vec![LabelMode::Decimal; MAX_METADATA_HEADERS + 500],
            vertical_header_labels: vec![LabelMode::Letter; 3],
        }
        .save(&path)
        .unwrap();

        let doc = Document::load(&path, &Preferences::default()).unwrap();
        assert_eq!(doc.column_count(), MAX_METADATA_HEADERS);
        assert_eq!(doc.row_count(), 3);
        assert_eq!(doc.cells()[2].len(), MAX_METADATA_HEADERS);
        assert_eq!(doc.header_label(Axis::Vertical, 2), "C");
    }

    #[test]
    fn save_and_load_keep_cells_and_header_modes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.csv");
        let prefs = Preferences::default();

        let mut doc = Document::with_size(4, 3, LabelMode::Letter, LabelMode::Decimal);
        doc.set_cell(0, 0, "a".into());
        doc.set_cell(1, 1, "b".into());
        doc.set_header_mode(Axis::Horizontal, 2, LabelMode::Decimal).unwrap();
        doc.save_to(path.clone()).unwrap();
        assert!(!doc.file_state.is_dirty);

        let loaded = Document::load(&path, &prefs).unwrap();
        assert_eq!((loaded.row_count(), loaded.column_count()), (4, 3));
        assert_eq!(loaded.cell(1, 1), "b");
        assert_eq!(loaded.header(Axis::Horizontal).labels(), vec!["A", "B", "3"]);
        assert_eq!(loaded.file_state.current_path, Some(path));
    }

    #[test]
    fn load_without_metadata_uses_preference_modes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.csv");
        std::fs::write(&path, "1,2\n3\n").unwrap();
        let prefs = Preferences {
            horizontal_header_labels: LabelMode::Decimal,
            ..Preferences::default()
        };
        let doc = Document::load(&path, &prefs).unwrap();
        assert_eq!(doc.header(Axis::Horizontal).labels(), vec!["1", "2"]);
        assert_eq!(doc.header(Axis::Vertical).labels(), vec!["1", "2"]);
        assert_eq!(doc.cell(1, 1), "");
    }

    #[test]
    fn empty_file_loads_as_single_cell() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "").unwrap();
        let doc = Document::load(&path, &Preferences::default()).unwrap();
        assert_eq!((doc.row_count(), doc.column_count()), (1, 1));
    }
}
