use gpui::*;

use tabulator::commands::name;
use crate::grid::{
    ClearCell, InsertColumn, InsertRow, LabelAllColumnsDecimal, LabelAllColumnsLetter,
    LabelAllRowsDecimal, LabelAllRowsLetter, LabelColumnDecimal, LabelColumnLetter,
    LabelRowDecimal, LabelRowLetter, RemoveColumn, RemoveRow, StartEditing, ToggleReadOnly,
};
use crate::workspace::{
    ClearRecentDocuments, CloseDocument, DiscardAndClose, NewDocument, NextTab, OpenDocument,
    OpenRecent, PreviousTab, Quit, SaveDocument, SaveDocumentAs, ShowAbout, ShowColophon,
    ShowKeyboardShortcuts, ShowPreferences, ToggleFullScreen, ToggleStatusBar, ToggleToolbar,
};

/// Set up the application menu bar. The Open Recent entries are left out
/// when the recent documents maximum is 0.
pub fn setup_menu(cx: &mut App, show_recent: bool) {
    let mut document_items = vec![
        MenuItem::action(name("new_document"), NewDocument),
        MenuItem::separator(),
        MenuItem::action(name("open_document"), OpenDocument),
    ];
    if show_recent {
        document_items.push(MenuItem::action(name("open_recent"), OpenRecent));
        document_items.push(MenuItem::action(name("clear_recent"), ClearRecentDocuments));
    }
    document_items.extend([
        MenuItem::separator(),
        MenuItem::action(name("save_document"), SaveDocument),
        MenuItem::action(name("save_document_as"), SaveDocumentAs),
        MenuItem::separator(),
        MenuItem::action(name("close_document"), CloseDocument),
        MenuItem::action(name("discard_and_close"), DiscardAndClose),
    ]);

    cx.set_menus(vec![
        Menu {
            name: "Tabulator".into(),
            items: vec![
                MenuItem::action(name("about"), ShowAbout),
                MenuItem::action(name("colophon"), ShowColophon),
                MenuItem::separator(),
                MenuItem::action(name("preferences"), ShowPreferences),
                MenuItem::separator(),
                MenuItem::action(name("quit"), Quit),
            ],
        },
        Menu {
            name: "File".into(),
            items: document_items,
        },
        Menu {
            name: "Edit".into(),
            items: vec![
                MenuItem::action(name("start_editing"), StartEditing),
                MenuItem::action(name("clear_cell"), ClearCell),
                MenuItem::separator(),
                MenuItem::action(name("insert_row"), InsertRow),
                MenuItem::action(name("remove_row"), RemoveRow),
                MenuItem::action(name("insert_column"), InsertColumn),
                MenuItem::action(name("remove_column"), RemoveColumn),
                MenuItem::separator(),
                MenuItem::action(name("toggle_read_only"), ToggleReadOnly),
            ],
        },
        Menu {
            name: "Headers".into(),
            items: vec![
                MenuItem::action(name("label_column_decimal"), LabelColumnDecimal),
                MenuItem::action(name("label_column_letter"), LabelColumnLetter),
                MenuItem::action(name("label_all_columns_decimal"), LabelAllColumnsDecimal),
                MenuItem::action(name("label_all_columns_letter"), LabelAllColumnsLetter),
                MenuItem::separator(),
                MenuItem::action(name("label_row_decimal"), LabelRowDecimal),
                MenuItem::action(name("label_row_letter"), LabelRowLetter),
                MenuItem::action(name("label_all_rows_decimal"), LabelAllRowsDecimal),
                MenuItem::action(name("label_all_rows_letter"), LabelAllRowsLetter),
            ],
        },
        Menu {
            name: "View".into(),
            items: vec![
                MenuItem::action(name("full_screen"), ToggleFullScreen),
                MenuItem::action(name("toggle_toolbar"), ToggleToolbar),
                MenuItem::action(name("toggle_status_bar"), ToggleStatusBar),
                MenuItem::separator(),
                MenuItem::action(name("next_tab"), NextTab),
                MenuItem::action(name("previous_tab"), PreviousTab),
            ],
        },
        Menu {
            name: "Help".into(),
            items: vec![MenuItem::action(name("keyboard_shortcuts"), ShowKeyboardShortcuts)],
        },
    ]);
}
