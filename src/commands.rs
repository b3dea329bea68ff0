/// A user-facing command, as listed in the Keyboard Shortcuts dialog.
#[derive(Clone, Debug)]
pub struct Command {
    pub id: &'static str,
    pub name: &'static str,
    pub group: &'static str,
    /// gpui keystroke syntax, e.g. `cmd-shift-s`
    pub shortcut: Option<&'static str>,
}

impl Command {
    pub const fn new(group: &'static str, id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            group,
            shortcut: None,
        }
    }

    pub const fn with_shortcut(mut self, shortcut: &'static str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }
}

/// Every command with the keystroke `main` binds it to.
pub const COMMANDS: &[Command] = &[
    // Application
    Command::new("Application", "about", "About Tabulator"),
    Command::new("Application", "colophon", "Colophon"),
    Command::new("Application", "preferences", "Preferences…").with_shortcut("cmd-,"),
    Command::new("Application", "quit", "Quit").with_shortcut("cmd-q"),
    // Document
    Command::new("Document", "new_document", "New").with_shortcut("cmd-n"),
    Command::new("Document", "open_document", "Open…").with_shortcut("cmd-o"),
    Command::new("Document", "open_recent", "Open Recent…").with_shortcut("cmd-shift-o"),
    Command::new("Document", "clear_recent", "Clear Recent Documents"),
    Command::new("Document", "save_document", "Save").with_shortcut("cmd-s"),
    Command::new("Document", "save_document_as", "Save As…").with_shortcut("cmd-shift-s"),
    Command::new("Document", "close_document", "Close").with_shortcut("cmd-w"),
    Command::new("Document", "discard_and_close", "Close Without Saving"),
    // Edit
    Command::new("Edit", "start_editing", "Edit Cell").with_shortcut("enter"),
    Command::new("Edit", "clear_cell", "Clear Cell").with_shortcut("delete"),
    Command::new("Edit", "insert_row", "Insert Row").with_shortcut("cmd-shift-r"),
    Command::new("Edit", "remove_row", "Remove Row").with_shortcut("cmd-alt-r"),
    Command::new("Edit", "insert_column", "Insert Column").with_shortcut("cmd-shift-c"),
    Command::new("Edit", "remove_column", "Remove Column").with_shortcut("cmd-alt-c"),
    Command::new("Edit", "toggle_read_only", "Toggle Read-Only"),
    // Headers
    Command::new("Headers", "label_column_decimal", "Label Column as Decimal Number"),
    Command::new("Headers", "label_column_letter", "Label Column as Letter"),
    Command::new("Headers", "label_all_columns_decimal", "Label All Columns as Decimal Numbers"),
    Command::new("Headers", "label_all_columns_letter", "Label All Columns as Letters"),
    Command::new("Headers", "label_row_decimal", "Label Row as Decimal Number"),
    Command::new("Headers", "label_row_letter", "Label Row as Letter"),
    Command::new("Headers", "label_all_rows_decimal", "Label All Rows as Decimal Numbers"),
    Command::new("Headers", "label_all_rows_letter", "Label All Rows as Letters"),
    // Navigation
    Command::new("Navigation", "move_up", "Move Up").with_shortcut("up"),
    Command::new("Navigation", "move_down", "Move Down").with_shortcut("down"),
    Command::new("Navigation", "move_left", "Move Left").with_shortcut("left"),
    Command::new("Navigation", "move_right", "Move Right").with_shortcut("right"),
    Command::new("Navigation", "next_tab", "Next Document").with_shortcut("ctrl-tab"),
    Command::new("Navigation", "previous_tab", "Previous Document").with_shortcut("ctrl-shift-tab"),
    // View
    Command::new("View", "full_screen", "Full Screen Mode").with_shortcut("f11"),
    Command::new("View", "toggle_toolbar", "Show Toolbar"),
    Command::new("View", "toggle_status_bar", "Show Status Bar"),
    // Help
    Command::new("Help", "keyboard_shortcuts", "Keyboard Shortcuts").with_shortcut("cmd-/"),
];

pub fn command(id: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.id == id)
}

pub fn shortcut(id: &str) -> Option<&'static str> {
    command(id).and_then(|c| c.shortcut)
}

/// Display name for menus; unknown ids show as themselves.
pub fn name(id: &'static str) -> &'static str {
    command(id).map(|c| c.name).unwrap_or(id)
}

/// Group names in the order they first appear.
pub fn groups() -> Vec<&'static str> {
    let mut groups: Vec<&'static str> = Vec::new();
    for command in COMMANDS {
        if !groups.contains(&command.group) {
            groups.push(command.group);
        }
    }
    groups
}

/// Render gpui keystroke syntax the way the platform shows it.
pub fn display_keystroke(keystroke: &str) -> String {
    let parts: Vec<&str> = keystroke.split('-').collect();
    // "cmd--" would split into empty parts; none of our bindings use it.
    let (key, modifiers) = match parts.split_last() {
        Some((key, modifiers)) => (*key, modifiers),
        None => return String::new(),
    };

    let key = match key {
        "up" => "↑".to_string(),
        "down" => "↓".to_string(),
        "left" => "←".to_string(),
        "right" => "→".to_string(),
        "enter" => "Enter".to_string(),
        "delete" => "Delete".to_string(),
        "tab" => "Tab".to_string(),
        "escape" => "Esc".to_string(),
        k => k.to_uppercase(),
    };

    if cfg!(target_os = "macos") {
        let mut out = String::new();
        for symbol in ["ctrl", "alt", "shift", "cmd"] {
            if modifiers.contains(&symbol) {
                out.push_str(match symbol {
                    "ctrl" => "⌃",
                    "alt" => "⌥",
                    "shift" => "⇧",
                    _ => "⌘",
                });
            }
        }
        out.push_str(&key);
        out
    } else {
        let mut out: Vec<String> = Vec::new();
        for name in ["cmd", "ctrl", "alt", "shift"] {
            if modifiers.contains(&name) {
                out.push(
                    match name {
                        "cmd" => "Super",
                        "ctrl" => "Ctrl",
                        "alt" => "Alt",
                        _ => "Shift",
                    }
                    .to_string(),
                );
            }
        }
        out.push(key);
        out.join("+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn ids_and_shortcuts_are_unique() {
        let ids: HashSet<_> = COMMANDS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), COMMANDS.len());

        let shortcuts: Vec<_> = COMMANDS.iter().filter_map(|c| c.shortcut).collect();
        let unique: HashSet<_> = shortcuts.iter().collect();
        assert_eq!(unique.len(), shortcuts.len());
    }

    #[test]
    fn shortcut_lookup() {
        assert_eq!(shortcut("save_document_as"), Some("cmd-shift-s"));
        assert_eq!(shortcut("about"), None);
        assert_eq!(shortcut("missing"), None);
        assert_eq!(name("open_recent"), "Open Recent…");
        assert_eq!(name("missing"), "missing");
    }

    #[test]
    fn groups_keep_table_order() {
        assert_eq!(
            groups(),
            vec!["Application", "Document", "Edit", "Headers", "Navigation", "View", "Help"]
        );
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn mac_keystrokes_use_symbols() {
        assert_eq!(display_keystroke("cmd-shift-s"), "⇧⌘S");
        assert_eq!(display_keystroke("up"), "↑");
    }

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn other_keystrokes_use_names() {
        assert_eq!(display_keystroke("cmd-shift-s"), "Super+Shift+S");
        assert_eq!(display_keystroke("ctrl-tab"), "Ctrl+Tab");
        assert_eq!(display_keystroke("f11"), "F11");
    }
}
