use std::path::PathBuf;

use gpui::prelude::FluentBuilder;
use gpui::*;

use tabulator::document::{Axis, Document};
use tabulator::header::LabelMode;
use tabulator::preferences::Preferences;
use tabulator::recent::RecentDocuments;
use tabulator::settings::{AppSettings, ApplicationState, Geometry};

use crate::dialogs::{self, Dialog, PreferencesForm};
use crate::grid::{DocumentView, HeaderMenu, HeaderMenuChoice};
use crate::menu;
use crate::Theme;

pub const TOOLBAR_HEIGHT: f32 = 36.0;
pub const TAB_BAR_HEIGHT: f32 = 30.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

const HEADER_MENU_WIDTH: f32 = 280.0;
const HEADER_MENU_ITEM_HEIGHT: f32 = 26.0;

actions!(
    workspace,
    [
        NewDocument,
        OpenDocument,
        OpenRecent,
        ClearRecentDocuments,
        SaveDocument,
        SaveDocumentAs,
        CloseDocument,
        DiscardAndClose,
        NextTab,
        PreviousTab,
        ShowAbout,
        ShowColophon,
        ShowPreferences,
        ShowKeyboardShortcuts,
        ToggleFullScreen,
        ToggleToolbar,
        ToggleStatusBar,
        DismissDialog,
        Quit,
    ]
);

/// The main window: a tab per open document plus the application-wide
/// state (preferences, recent documents, chrome visibility).
pub struct Workspace {
    focus_handle: FocusHandle,
    documents: Vec<Entity<DocumentView>>,
    active: usize,
    preferences: Preferences,
    recent: RecentDocuments,
    settings: AppSettings,
    state: ApplicationState,
    dialog: Option<Dialog>,
    status: Option<SharedString>,
    /// Window geometry as of the last render, for saving without a `Window`.
    geometry: Option<Geometry>,
}

impl Workspace {
    pub fn new(settings: AppSettings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut workspace = Self {
            focus_handle: cx.focus_handle(),
            documents: Vec::new(),
            active: 0,
            preferences: settings.preferences.clone(),
            recent: settings.recent_documents(),
            state: settings.restored_state(),
            settings,
            dialog: None,
            status: None,
            geometry: Some(Geometry::from_window_bounds(window.window_bounds())),
        };
        workspace.add_document(Document::new(&workspace.preferences), window, cx);

        // Closing the window from the title bar
        let this = cx.entity().downgrade();
        window.on_window_should_close(cx, move |window, cx| {
            let geometry = Geometry::from_window_bounds(window.window_bounds());
            if let Err(e) = this.update(cx, |this, _| {
                this.geometry = Some(geometry);
                this.save_settings();
            }) {
                log::warn!("Workspace gone before window close: {}", e);
            }
            true
        });

        // Every other way out, including Quit with no focused window
        cx.on_app_quit(|this, _cx| {
            this.save_settings();
            async {}
        })
        .detach();

        workspace
    }

    pub fn recent_documents(&self) -> &RecentDocuments {
        &self.recent
    }

    fn active_document(&self) -> Option<&Entity<DocumentView>> {
        self.documents.get(self.active)
    }

    fn set_status(&mut self, message: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.status = Some(message.into());
        cx.notify();
    }

    fn add_document(&mut self, document: Document, window: &mut Window, cx: &mut Context<Self>) {
        let view = cx.new(|cx| DocumentView::new(document, cx));
        // Header menu and status bar are drawn here from the view's state
        cx.observe(&view, |_, _, cx| cx.notify()).detach();
        self.documents.push(view);
        self.activate(self.documents.len() - 1, window, cx);
    }

    fn activate(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(previous) = self.active_document().cloned() {
            previous.update(cx, |view, cx| view.close_header_menu(cx));
        }
        self.active = index.min(self.documents.len().saturating_sub(1));
        self.focus_active(window, cx);
        cx.notify();
    }

    fn focus_active(&self, window: &mut Window, cx: &mut Context<Self>) {
        match self.active_document() {
            Some(view) => {
                let handle = view.focus_handle(cx);
                handle.focus(window);
            }
            None => self.focus_handle.focus(window),
        }
    }

    /// Move `path` to the front of the recent list and persist it.
    fn remember(&mut self, path: PathBuf, cx: &mut Context<Self>) {
        self.recent.add(path, true);
        self.save_settings();
        cx.notify();
    }

    /// Write settings with the most recently seen window geometry.
    fn save_settings(&mut self) {
        self.settings
            .capture(&self.preferences, &self.recent, self.state, self.geometry);
        if let Err(e) = self.settings.save() {
            log::error!("Failed to save settings: {}", e);
        }
    }

    pub fn open_path(&mut self, path: PathBuf, window: &mut Window, cx: &mut Context<Self>) {
        let path = std::path::absolute(&path).unwrap_or(path);

        let existing = self
            .documents
            .iter()
            .position(|view| view.read(cx).document().file_state.is_same_file(&path));
        if let Some(index) = existing {
            self.activate(index, window, cx);
            self.remember(path, cx);
            return;
        }

        match Document::load(&path, &self.preferences) {
            Ok(document) => {
                self.add_document(document, window, cx);
                self.status = None;
                self.remember(path, cx);
            }
            Err(e) => {
                log::error!("Failed to open {}: {}", path.display(), e);
                self.set_status(format!("Cannot open {}: {}", path.display(), e), cx);
            }
        }
    }

    fn new_document(&mut self, _: &NewDocument, window: &mut Window, cx: &mut Context<Self>) {
        self.add_document(Document::new(&self.preferences), window, cx);
    }

    fn open_document(&mut self, _: &OpenDocument, window: &mut Window, cx: &mut Context<Self>) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"]);
        if let Some(home) = dirs::home_dir() {
            dialog = dialog.set_directory(home);
        }

        match dialog.pick_files() {
            Some(paths) => {
                for path in paths {
                    self.open_path(path, window, cx);
                }
            }
            None => self.focus_active(window, cx),
        }
    }

    fn open_recent(&mut self, _: &OpenRecent, window: &mut Window, cx: &mut Context<Self>) {
        if self.recent.maximum() == 0 || self.recent.is_empty() {
            return;
        }
        self.show_dialog(Dialog::OpenRecent, window, cx);
    }

    fn clear_recent(&mut self, _: &ClearRecentDocuments, _window: &mut Window, cx: &mut Context<Self>) {
        self.clear_recent_documents(cx);
    }

    pub fn clear_recent_documents(&mut self, cx: &mut Context<Self>) {
        self.recent.clear();
        self.save_settings();
        log::info!("Cleared recent documents");
        cx.notify();
    }

    fn save_document(&mut self, _: &SaveDocument, window: &mut Window, cx: &mut Context<Self>) {
        let Some(view) = self.active_document().cloned() else {
            return;
        };
        self.status = None;
        if let Some(path) = view.update(cx, |view, cx| view.save(window, cx)) {
            self.remember(path, cx);
        }
    }

    fn save_document_as(&mut self, _: &SaveDocumentAs, window: &mut Window, cx: &mut Context<Self>) {
        let Some(view) = self.active_document().cloned() else {
            return;
        };
        self.status = None;
        if let Some(path) = view.update(cx, |view, cx| view.save_as(window, cx)) {
            self.remember(path, cx);
        }
    }

    fn close_document(&mut self, _: &CloseDocument, window: &mut Window, cx: &mut Context<Self>) {
        let Some(view) = self.active_document() else {
            return;
        };
        let view = view.read(cx);
        if view.is_dirty() {
            let message = format!(
                "{} has unsaved changes. Save it, or use Close Without Saving.",
                view.document().file_state.file_name()
            );
            self.set_status(message, cx);
            return;
        }
        self.close_active(window, cx);
    }

    fn discard_and_close(&mut self, _: &DiscardAndClose, window: &mut Window, cx: &mut Context<Self>) {
        self.close_active(window, cx);
    }

    fn close_active(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.active >= self.documents.len() {
            return;
        }
        let view = self.documents.remove(self.active);
        log::debug!("Closed {}", view.read(cx).title());
        self.status = None;
        let next = self.active.min(self.documents.len().saturating_sub(1));
        self.activate(next, window, cx);
    }

    fn next_tab(&mut self, _: &NextTab, window: &mut Window, cx: &mut Context<Self>) {
        if !self.documents.is_empty() {
            self.activate((self.active + 1) % self.documents.len(), window, cx);
        }
    }

    fn previous_tab(&mut self, _: &PreviousTab, window: &mut Window, cx: &mut Context<Self>) {
        if !self.documents.is_empty() {
            let count = self.documents.len();
            self.activate((self.active + count - 1) % count, window, cx);
        }
    }

    fn show_dialog(&mut self, dialog: Dialog, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(view) = self.active_document().cloned() {
            view.update(cx, |view, cx| view.close_header_menu(cx));
        }
        self.dialog = Some(dialog);
        self.focus_handle.focus(window);
        cx.notify();
    }

    fn show_about(&mut self, _: &ShowAbout, window: &mut Window, cx: &mut Context<Self>) {
        self.show_dialog(Dialog::About, window, cx);
    }

    fn show_colophon(&mut self, _: &ShowColophon, window: &mut Window, cx: &mut Context<Self>) {
        self.show_dialog(Dialog::Colophon, window, cx);
    }

    fn show_preferences(&mut self, _: &ShowPreferences, window: &mut Window, cx: &mut Context<Self>) {
        let form = PreferencesForm::new(self.preferences.clone());
        self.show_dialog(Dialog::Preferences(form), window, cx);
    }

    fn show_keyboard_shortcuts(&mut self, _: &ShowKeyboardShortcuts, window: &mut Window, cx: &mut Context<Self>) {
        self.show_dialog(Dialog::KeyboardShortcuts, window, cx);
    }

    fn dismiss(&mut self, _: &DismissDialog, window: &mut Window, cx: &mut Context<Self>) {
        self.dismiss_dialog(window, cx);
    }

    pub fn dismiss_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.dialog.take().is_some() {
            self.focus_active(window, cx);
            cx.notify();
        }
    }

    /// Change the open Preferences dialog's draft.
    pub fn edit_preferences(&mut self, f: impl FnOnce(&mut PreferencesForm), cx: &mut Context<Self>) {
        if let Some(Dialog::Preferences(form)) = self.dialog.as_mut() {
            f(form);
            cx.notify();
        }
    }

    pub fn apply_preferences_form(&mut self, cx: &mut Context<Self>) {
        let Some(Dialog::Preferences(form)) = self.dialog.as_mut() else {
            return;
        };
        let preferences = form.apply();
        self.set_preferences(preferences, cx);
    }

    fn set_preferences(&mut self, preferences: Preferences, cx: &mut Context<Self>) {
        let had_recent_menu = self.recent.maximum() > 0;

        self.recent.set_maximum(preferences.maximum_recent_documents);
        self.recent.truncate();
        self.preferences = preferences;

        let has_recent_menu = self.recent.maximum() > 0;
        if had_recent_menu != has_recent_menu {
            menu::setup_menu(cx, has_recent_menu);
        }

        self.save_settings();
        log::info!("Preferences applied");
        cx.notify();
    }

    fn toggle_full_screen(&mut self, _: &ToggleFullScreen, window: &mut Window, _cx: &mut Context<Self>) {
        window.toggle_fullscreen();
    }

    fn toggle_toolbar(&mut self, _: &ToggleToolbar, _window: &mut Window, cx: &mut Context<Self>) {
        self.state.show_toolbar = !self.state.show_toolbar;
        cx.notify();
    }

    fn toggle_status_bar(&mut self, _: &ToggleStatusBar, _window: &mut Window, cx: &mut Context<Self>) {
        self.state.show_status_bar = !self.state.show_status_bar;
        cx.notify();
    }

    fn quit(&mut self, _: &Quit, window: &mut Window, cx: &mut Context<Self>) {
        let unsaved = self
            .documents
            .iter()
            .filter(|view| view.read(cx).is_dirty())
            .count();
        if unsaved > 0 {
            log::warn!("Quitting with {} unsaved document(s)", unsaved);
        }
        // Settings are written by the app-quit hook
        self.geometry = Some(Geometry::from_window_bounds(window.window_bounds()));
        cx.quit();
    }

    fn chrome_height(&self) -> f32 {
        let mut height = TAB_BAR_HEIGHT;
        if self.state.show_toolbar {
            height += TOOLBAR_HEIGHT;
        }
        if self.state.show_status_bar {
            height += STATUS_BAR_HEIGHT;
        }
        height
    }

    fn toolbar_button(
        &self,
        id: &'static str,
        icon: &'static str,
        command_id: &'static str,
        enabled: bool,
        cx: &Context<Self>,
        on_click: impl Fn(&mut Self, &mut Window, &mut Context<Self>) + 'static,
    ) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let hover_bg = theme.surface0;
        let color = if enabled { theme.text } else { theme.overlay0 };

        div()
            .id(id)
            .flex()
            .flex_row()
            .items_center()
            .gap(px(6.))
            .px(px(8.))
            .h(px(26.))
            .rounded(px(4.))
            .text_size(px(13.))
            .text_color(color)
            .when(enabled, |d| {
                d.cursor_pointer()
                    .hover(move |s| s.bg(hover_bg))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _: &MouseDownEvent, window, cx| {
                            on_click(this, window, cx);
                        }),
                    )
            })
            .child(svg().path(icon).size(px(16.)).text_color(color))
            .child(tabulator::commands::name(command_id).trim_end_matches('…').to_string())
    }

    fn render_toolbar(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let show_recent = self.recent.maximum() > 0;
        let has_document = !self.documents.is_empty();

        div()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(2.))
            .w_full()
            .h(px(TOOLBAR_HEIGHT))
            .flex_none()
            .px(px(6.))
            .bg(theme.mantle)
            .border_b_1()
            .border_color(theme.surface0)
            .child(self.toolbar_button("tb-new", "icons/document-new.svg", "new_document", true, cx, |this, window, cx| {
                this.new_document(&NewDocument, window, cx);
            }))
            .child(self.toolbar_button("tb-open", "icons/document-open.svg", "open_document", true, cx, |this, window, cx| {
                this.open_document(&OpenDocument, window, cx);
            }))
            .when(show_recent, |d| {
                d.child(self.toolbar_button(
                    "tb-open-recent",
                    "icons/document-open-recent.svg",
                    "open_recent",
                    !self.recent.is_empty(),
                    cx,
                    |this, window, cx| this.open_recent(&OpenRecent, window, cx),
                ))
            })
            .child(self.toolbar_button("tb-save", "icons/document-save.svg", "save_document", has_document, cx, |this, window, cx| {
                this.save_document(&SaveDocument, window, cx);
            }))
            .child(div().flex_1())
            .child(self.toolbar_button("tb-preferences", "icons/configure.svg", "preferences", true, cx, |this, window, cx| {
                this.show_preferences(&ShowPreferences, window, cx);
            }))
            .child(self.toolbar_button("tb-shortcuts", "icons/help-keyboard-shortcuts.svg", "keyboard_shortcuts", true, cx, |this, window, cx| {
                this.show_keyboard_shortcuts(&ShowKeyboardShortcuts, window, cx);
            }))
            .child(self.toolbar_button("tb-full-screen", "icons/view-fullscreen.svg", "full_screen", true, cx, |this, window, cx| {
                this.toggle_full_screen(&ToggleFullScreen, window, cx);
            }))
    }

    fn render_tabs(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .id("tab-bar")
            .flex()
            .flex_row()
            .w_full()
            .h(px(TAB_BAR_HEIGHT))
            .flex_none()
            .bg(theme.crust)
            .border_b_1()
            .border_color(theme.surface0)
            .overflow_x_scroll()
            .children(self.documents.iter().enumerate().map(|(index, view)| {
                let is_active = index == self.active;
                let title = view.read(cx).title();

                div()
                    .id(ElementId::Name(format!("tab-{}", index).into()))
                    .flex()
                    .items_center()
                    .px(px(14.))
                    .h_full()
                    .flex_none()
                    .border_r_1()
                    .border_color(theme.surface0)
                    .text_size(px(13.))
                    .cursor_pointer()
                    .bg(if is_active { theme.base } else { theme.crust })
                    .text_color(if is_active { theme.text } else { theme.overlay1 })
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _: &MouseDownEvent, window, cx| {
                            this.activate(index, window, cx);
                        }),
                    )
                    .child(title)
            }))
    }

    fn render_status_bar(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let view = self.active_document().map(|view| view.read(cx));

        let message = self
            .status
            .clone()
            .or_else(|| view.and_then(|v| v.status()))
            .unwrap_or_else(|| "Ready".into());

        div()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(16.))
            .w_full()
            .h(px(STATUS_BAR_HEIGHT))
            .flex_none()
            .px(px(8.))
            .bg(theme.mantle)
            .border_t_1()
            .border_color(theme.surface0)
            .text_size(px(12.))
            .text_color(theme.subtext0)
            .child(div().flex_1().overflow_hidden().child(message))
            .when_some(view, |d, view| {
                let document = view.document();
                d.when(view.is_read_only(), |d| {
                    d.child(div().text_color(theme.warning).child("Read-only"))
                })
                .child(view.selected().to_reference())
                .child(format!("{} × {}", document.row_count(), document.column_count()))
            })
    }

    fn render_header_menu(&self, menu: HeaderMenu, window: &Window, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let hover_bg = theme.surface1;

        let items: [(&'static str, HeaderMenuChoice); 4] = match menu.axis {
            Axis::Horizontal => [
                ("label_column_decimal", HeaderMenuChoice::This(LabelMode::Decimal)),
                ("label_column_letter", HeaderMenuChoice::This(LabelMode::Letter)),
                ("label_all_columns_decimal", HeaderMenuChoice::All(LabelMode::Decimal)),
                ("label_all_columns_letter", HeaderMenuChoice::All(LabelMode::Letter)),
            ],
            Axis::Vertical => [
                ("label_row_decimal", HeaderMenuChoice::This(LabelMode::Decimal)),
                ("label_row_letter", HeaderMenuChoice::This(LabelMode::Letter)),
                ("label_all_rows_decimal", HeaderMenuChoice::All(LabelMode::Decimal)),
                ("label_all_rows_letter", HeaderMenuChoice::All(LabelMode::Letter)),
            ],
        };

        let viewport = window.viewport_size();
        let menu_height = HEADER_MENU_ITEM_HEIGHT * items.len() as f32 + 8.0;
        let x = f32::from(menu.position.x).min(f32::from(viewport.width) - HEADER_MENU_WIDTH).max(0.0);
        let y = f32::from(menu.position.y).min(f32::from(viewport.height) - menu_height).max(0.0);

        div()
            .id("header-menu")
            .absolute()
            .left(px(x))
            .top(px(y))
            .w(px(HEADER_MENU_WIDTH))
            .py(px(4.))
            .bg(theme.mantle)
            .border_1()
            .border_color(theme.surface1)
            .rounded(px(6.))
            .shadow_lg()
            .text_size(px(13.))
            .text_color(theme.text)
            .on_mouse_down_out(cx.listener(|this, _: &MouseDownEvent, _, cx| {
                if let Some(view) = this.active_document().cloned() {
                    view.update(cx, |view, cx| view.close_header_menu(cx));
                }
            }))
            .children(items.into_iter().enumerate().map(|(i, (command_id, choice))| {
                div()
                    .id(ElementId::Name(format!("header-menu-{}", i).into()))
                    .h(px(HEADER_MENU_ITEM_HEIGHT))
                    .px(px(12.))
                    .flex()
                    .items_center()
                    .cursor_pointer()
                    .hover(move |s| s.bg(hover_bg))
                    .when(i == 2, |d| d.border_t_1().border_color(theme.surface0))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _: &MouseDownEvent, _, cx| {
                            if let Some(view) = this.active_document().cloned() {
                                view.update(cx, |view, cx| view.choose_from_header_menu(choice, cx));
                            }
                        }),
                    )
                    .child(tabulator::commands::name(command_id))
            }))
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let chrome_height = self.chrome_height();
        let active = self.active_document().cloned();

        let title = match &active {
            Some(view) => format!("{} - Tabulator", view.read(cx).title()),
            None => "Tabulator".to_string(),
        };
        window.set_window_title(&title);
        self.geometry = Some(Geometry::from_window_bounds(window.window_bounds()));

        if let Some(view) = &active {
            view.update(cx, |view, _| view.set_chrome_height(chrome_height));
        }
        let header_menu = active.as_ref().and_then(|view| view.read(cx).header_menu());

        let theme = cx.global::<Theme>();
        let key_context = if self.dialog.is_some() { "Dialog" } else { "Workspace" };

        div()
            .relative()
            .flex()
            .flex_col()
            .size_full()
            .bg(theme.base)
            .text_color(theme.text)
            .font_family("Berkeley Mono")
            .key_context(key_context)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::new_document))
            .on_action(cx.listener(Self::open_document))
            .on_action(cx.listener(Self::open_recent))
            .on_action(cx.listener(Self::clear_recent))
            .on_action(cx.listener(Self::save_document))
            .on_action(cx.listener(Self::save_document_as))
            .on_action(cx.listener(Self::close_document))
            .on_action(cx.listener(Self::discard_and_close))
            .on_action(cx.listener(Self::next_tab))
            .on_action(cx.listener(Self::previous_tab))
            .on_action(cx.listener(Self::show_about))
            .on_action(cx.listener(Self::show_colophon))
            .on_action(cx.listener(Self::show_preferences))
            .on_action(cx.listener(Self::show_keyboard_shortcuts))
            .on_action(cx.listener(Self::toggle_full_screen))
            .on_action(cx.listener(Self::toggle_toolbar))
            .on_action(cx.listener(Self::toggle_status_bar))
            .on_action(cx.listener(Self::dismiss))
            .on_action(cx.listener(Self::quit))
            .when(self.state.show_toolbar, |d| d.child(self.render_toolbar(cx)))
            .child(self.render_tabs(cx))
            .child(match active {
                Some(view) => div().flex_1().overflow_hidden().child(view).into_any_element(),
                None => div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(theme.overlay0)
                    .child("No document open")
                    .into_any_element(),
            })
            .when(self.state.show_status_bar, |d| d.child(self.render_status_bar(cx)))
            .when_some(header_menu, |d, menu| d.child(self.render_header_menu(menu, window, cx)))
            .when_some(self.dialog.as_ref(), |d, dialog| {
                d.child(dialogs::render_dialog(dialog, self, cx))
            })
    }
}

impl Focusable for Workspace {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
