use serde::{Deserialize, Serialize};

use crate::header::LabelMode;

/// User preferences, edited in the Preferences dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    /// Save and restore toolbar and status bar visibility
    pub restore_application_state: bool,

    /// Save and restore the main window bounds
    pub restore_application_geometry: bool,

    /// 0 hides the Open Recent menu entirely
    pub maximum_recent_documents: usize,

    pub new_document_rows: usize,
    pub new_document_columns: usize,

    pub horizontal_header_labels: LabelMode,
    pub vertical_header_labels: LabelMode,
}

pub const MAX_NEW_DOCUMENT_SIZE: usize = 1000;
pub const MAX_RECENT_DOCUMENTS: usize = 25;

impl Default for Preferences {
    fn default() -> Self {
        Self {
            restore_application_state: true,
            restore_application_geometry: true,
            maximum_recent_documents: 10,
            new_document_rows: 25,
            new_document_columns: 25,
            horizontal_header_labels: LabelMode::Letter,
            vertical_header_labels: LabelMode::Decimal,
        }
    }
}

impl Preferences {
    /// Clamp values a hand-edited settings file may have pushed out of range.
    pub fn sanitized(mut self) -> Self {
        self.maximum_recent_documents = self.maximum_recent_documents.min(MAX_RECENT_DOCUMENTS);
        self.new_document_rows = self.new_document_rows.clamp(1, MAX_NEW_DOCUMENT_SIZE);
        self.new_document_columns = self.new_document_columns.clamp(1, MAX_NEW_DOCUMENT_SIZE);
        self
    }
}
