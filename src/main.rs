mod assets;
mod dialogs;
mod grid;
mod menu;
mod theme;
mod workspace;

use gpui::*;

use tabulator::commands::shortcut;
use tabulator::settings::AppSettings;

use assets::Assets;
use grid::*;
use theme::Theme;
use workspace::*;

/// Binding for a command id, using the keystroke listed in the command table.
fn bind<A: Action>(id: &'static str, action: A, context: Option<&str>) -> Option<KeyBinding> {
    match shortcut(id) {
        Some(keystroke) => Some(KeyBinding::new(keystroke, action, context)),
        None => {
            log::warn!("No keystroke for command {}", id);
            None
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = AppSettings::load();

    Application::new()
        .with_assets(Assets)
        .run(move |cx| {
            // Initialize theme
            Theme::init(cx);

            // Set up menu bar
            menu::setup_menu(cx, settings.preferences.maximum_recent_documents > 0);

            // Register keybindings
            cx.bind_keys(
                [
                    // Cell navigation and editing
                    bind("move_up", MoveUp, Some("Document")),
                    bind("move_down", MoveDown, Some("Document")),
                    bind("move_left", MoveLeft, Some("Document")),
                    bind("move_right", MoveRight, Some("Document")),
                    bind("start_editing", StartEditing, Some("Document")),
                    bind("clear_cell", ClearCell, Some("Document")),
                    bind("insert_row", InsertRow, None),
                    bind("remove_row", RemoveRow, None),
                    bind("insert_column", InsertColumn, None),
                    bind("remove_column", RemoveColumn, None),
                    // Documents
                    bind("new_document", NewDocument, None),
                    bind("open_document", OpenDocument, None),
                    bind("open_recent", OpenRecent, None),
                    bind("save_document", SaveDocument, None),
                    bind("save_document_as", SaveDocumentAs, None),
                    bind("close_document", CloseDocument, None),
                    bind("next_tab", NextTab, None),
                    bind("previous_tab", PreviousTab, None),
                    // Application
                    bind("preferences", ShowPreferences, None),
                    bind("keyboard_shortcuts", ShowKeyboardShortcuts, None),
                    bind("full_screen", ToggleFullScreen, None),
                    bind("quit", Quit, None),
                ]
                .into_iter()
                .flatten()
                .chain([KeyBinding::new("escape", DismissDialog, Some("Dialog"))]),
            );

            // Quit from the menu bar when no window has focus
            cx.on_action::<Quit>(|_, cx| {
                cx.quit();
            });

            let window_bounds = match settings.restored_geometry() {
                Some(geometry) => geometry.to_window_bounds(),
                None => WindowBounds::Windowed(Bounds::centered(None, size(px(1000.), px(700.)), cx)),
            };

            // Create the main window
            let window_options = WindowOptions {
                window_bounds: Some(window_bounds),
                titlebar: Some(TitlebarOptions {
                    title: Some("Tabulator".into()),
                    appears_transparent: false,
                    ..Default::default()
                }),
                window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
                ..Default::default()
            };

            if let Err(e) = cx.open_window(window_options, move |window, cx| {
                cx.new(|cx| Workspace::new(settings, window, cx))
            }) {
                log::error!("Failed to open the main window: {}", e);
                cx.quit();
            }
        });
}
