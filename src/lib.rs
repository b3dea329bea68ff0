//! Document model, header labelling, recent documents and settings behind
//! the Tabulator window.

pub mod commands;
pub mod document;
pub mod editor;
pub mod error;
pub mod file_io;
pub mod file_state;
pub mod header;
pub mod metadata;
pub mod preferences;
pub mod recent;
pub mod settings;
pub mod state;
