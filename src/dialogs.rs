// Modal dialogs drawn over the workspace: About, Colophon, Keyboard
// Shortcuts, Preferences and Open Recent.

use gpui::prelude::FluentBuilder;
use gpui::*;

use tabulator::commands::{self, COMMANDS};
use tabulator::header::LabelMode;
use tabulator::preferences::{Preferences, MAX_NEW_DOCUMENT_SIZE, MAX_RECENT_DOCUMENTS};

use crate::workspace::Workspace;
use crate::Theme;

const DIALOG_WIDTH: f32 = 520.0;

pub enum Dialog {
    About,
    Colophon,
    KeyboardShortcuts,
    Preferences(PreferencesForm),
    OpenRecent,
}

/// Edit buffer behind the Preferences dialog.
///
/// Changes go to a draft; Apply and OK copy it to the applied preferences,
/// Cancel drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferencesForm {
    applied: Preferences,
    draft: Preferences,
}

impl PreferencesForm {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            applied: preferences.clone(),
            draft: preferences,
        }
    }

    pub fn draft(&self) -> &Preferences {
        &self.draft
    }

    /// Apply is only offered while the draft differs from what is in effect.
    pub fn is_modified(&self) -> bool {
        self.draft != self.applied
    }

    pub fn update(&mut self, f: impl FnOnce(&mut Preferences)) {
        f(&mut self.draft);
    }

    pub fn restore_defaults(&mut self) {
        self.draft = Preferences::default();
    }

    pub fn step_maximum_recent(&mut self, delta: isize) {
        let value = &mut self.draft.maximum_recent_documents;
        *value = value.saturating_add_signed(delta).min(MAX_RECENT_DOCUMENTS);
    }

    pub fn step_rows(&mut self, delta: isize) {
        let value = &mut self.draft.new_document_rows;
        *value = value.saturating_add_signed(delta).clamp(1, MAX_NEW_DOCUMENT_SIZE);
    }

    pub fn step_columns(&mut self, delta: isize) {
        let value = &mut self.draft.new_document_columns;
        *value = value.saturating_add_signed(delta).clamp(1, MAX_NEW_DOCUMENT_SIZE);
    }

    /// Commit the draft and return what should now be in effect.
    pub fn apply(&mut self) -> Preferences {
        self.applied = self.draft.clone();
        self.applied.clone()
    }
}

/// Backdrop plus a centered panel. Clicking the backdrop dismisses.
fn dialog_frame(
    id: &'static str,
    title: &'static str,
    body: impl IntoElement,
    footer: Option<AnyElement>,
    close_label: &'static str,
    cx: &Context<Workspace>,
) -> AnyElement {
    let theme = cx.global::<Theme>();

    div()
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .id(ElementId::Name(format!("{}-backdrop", id).into()))
                .absolute()
                .inset_0()
                .bg(theme.backdrop)
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _: &MouseDownEvent, window, cx| {
                        this.dismiss_dialog(window, cx);
                    }),
                )
                .on_scroll_wheel(|_, _, cx| {
                    cx.stop_propagation();
                }),
        )
        .child(
            div()
                .id(id)
                .w(px(DIALOG_WIDTH))
                .max_h(px(560.))
                .flex()
                .flex_col()
                .bg(theme.mantle)
                .border_1()
                .border_color(theme.surface1)
                .rounded(px(8.))
                .shadow_lg()
                .overflow_hidden()
                .child(
                    div()
                        .px(px(16.))
                        .py(px(12.))
                        .border_b_1()
                        .border_color(theme.surface0)
                        .text_size(px(15.))
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme.text)
                        .child(title),
                )
                .child(
                    div()
                        .id(ElementId::Name(format!("{}-body", id).into()))
                        .flex()
                        .flex_col()
                        .gap(px(8.))
                        .p(px(16.))
                        .overflow_y_scroll()
                        .text_size(px(13.))
                        .text_color(theme.subtext1)
                        .child(body),
                )
                .child(
                    div()
                        .flex()
                        .flex_row()
                        .justify_end()
                        .gap(px(8.))
                        .px(px(16.))
                        .py(px(12.))
                        .border_t_1()
                        .border_color(theme.surface0)
                        .children(footer)
                        .child(button("dialog-close", close_label, true, cx, |this, window, cx| {
                            this.dismiss_dialog(window, cx);
                        })),
                ),
        )
        .into_any_element()
}

fn button(
    id: &'static str,
    label: &'static str,
    enabled: bool,
    cx: &Context<Workspace>,
    on_click: impl Fn(&mut Workspace, &mut Window, &mut Context<Workspace>) + 'static,
) -> AnyElement {
    let theme = cx.global::<Theme>();
    let hover_bg = theme.surface1;

    let el = div()
        .id(id)
        .px(px(12.))
        .py(px(4.))
        .rounded(px(4.))
        .bg(theme.surface0)
        .text_size(px(13.));

    if enabled {
        el.text_color(theme.text)
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _: &MouseDownEvent, window, cx| {
                    on_click(this, window, cx);
                }),
            )
            .child(label)
            .into_any_element()
    } else {
        el.text_color(theme.overlay0).child(label).into_any_element()
    }
}

pub fn render_dialog(dialog: &Dialog, workspace: &Workspace, cx: &Context<Workspace>) -> AnyElement {
    match dialog {
        Dialog::About => render_about(cx),
        Dialog::Colophon => render_colophon(cx),
        Dialog::KeyboardShortcuts => render_keyboard_shortcuts(cx),
        Dialog::Preferences(form) => render_preferences(form, cx),
        Dialog::OpenRecent => render_open_recent(workspace, cx),
    }
}

fn render_about(cx: &Context<Workspace>) -> AnyElement {
    let theme = cx.global::<Theme>();
    let body = div()
        .flex()
        .flex_col()
        .gap(px(8.))
        .child(
            div()
                .text_size(px(20.))
                .font_weight(FontWeight::BOLD)
                .text_color(theme.text)
                .child("Tabulator"),
        )
        .child(format!("Version {}", env!("CARGO_PKG_VERSION")))
        .child("A CSV editor for tabular data, with spreadsheet-style row and column headers.");

    dialog_frame("about-dialog", "About Tabulator", body, None, "Close", cx)
}

fn render_colophon(cx: &Context<Workspace>) -> AnyElement {
    let libraries = [
        ("gpui", "GPU-accelerated UI framework"),
        ("csv", "reading and writing documents"),
        ("serde / serde_json", "settings and header metadata"),
        ("rfd", "native file dialogs"),
        ("dirs", "locating the settings directory"),
        ("log / env_logger", "diagnostics"),
        ("unicode-segmentation", "cell editing"),
    ];

    let body = div()
        .flex()
        .flex_col()
        .gap(px(4.))
        .child("Built with:")
        .children(
            libraries
                .iter()
                .map(|(name, what)| format!("{}: {}", name, what)),
        )
        .child(div().pt(px(8.)).child("Colors: Catppuccin Mocha"));

    dialog_frame("colophon-dialog", "Colophon", body, None, "Close", cx)
}

fn render_keyboard_shortcuts(cx: &Context<Workspace>) -> AnyElement {
    let theme = cx.global::<Theme>();

    let body = div().flex().flex_col().gap(px(12.)).children(commands::groups().into_iter().map(|group| {
        div()
            .flex()
            .flex_col()
            .gap(px(2.))
            .child(
                div()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.text)
                    .child(group),
            )
            .children(
                COMMANDS
                    .iter()
                    .filter(move |c| c.group == group)
                    .map(move |command| {
                        div()
                            .flex()
                            .flex_row()
                            .justify_between()
                            .child(command.name)
                            .child(
                                div()
                                    .text_color(theme.overlay1)
                                    .child(command.shortcut.map(commands::display_keystroke).unwrap_or_default()),
                            )
                    }),
            )
    }));

    dialog_frame("keyboard-shortcuts-dialog", "Keyboard Shortcuts", body, None, "Close", cx)
}

fn checkbox(
    id: &'static str,
    label: &'static str,
    checked: bool,
    toggle: fn(&mut Preferences),
    cx: &Context<Workspace>,
) -> AnyElement {
    let theme = cx.global::<Theme>();

    div()
        .id(id)
        .flex()
        .flex_row()
        .items_center()
        .gap(px(8.))
        .cursor_pointer()
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |this, _: &MouseDownEvent, _, cx| {
                this.edit_preferences(|form| form.update(toggle), cx);
            }),
        )
        .child(
            div()
                .w(px(14.))
                .h(px(14.))
                .rounded(px(3.))
                .border_1()
                .border_color(theme.overlay1)
                .when(checked, |d| d.bg(theme.accent)),
        )
        .child(label)
        .into_any_element()
}

fn stepper(
    id: &'static str,
    label: &'static str,
    value: usize,
    step: fn(&mut PreferencesForm, isize),
    cx: &Context<Workspace>,
) -> AnyElement {
    let theme = cx.global::<Theme>();
    let hover_bg = theme.surface1;

    let arrow = |suffix: &'static str, text: &'static str, delta: isize, cx: &Context<Workspace>| {
        div()
            .id(ElementId::Name(format!("{}-{}", id, suffix).into()))
            .w(px(22.))
            .flex()
            .justify_center()
            .rounded(px(3.))
            .bg(theme.surface0)
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _: &MouseDownEvent, _, cx| {
                    this.edit_preferences(|form| step(form, delta), cx);
                }),
            )
            .child(text)
    };

    div()
        .flex()
        .flex_row()
        .items_center()
        .justify_between()
        .child(label)
        .child(
            div()
                .flex()
                .flex_row()
                .items_center()
                .gap(px(6.))
                .child(arrow("less", "−", -1, cx))
                .child(div().w(px(40.)).flex().justify_center().text_color(theme.text).child(value.to_string()))
                .child(arrow("more", "+", 1, cx)),
        )
        .into_any_element()
}

fn mode_picker(
    id: &'static str,
    label: &'static str,
    current: LabelMode,
    set: fn(&mut Preferences, LabelMode),
    cx: &Context<Workspace>,
) -> AnyElement {
    let theme = cx.global::<Theme>();

    let option = |mode: LabelMode, cx: &Context<Workspace>| {
        let selected = mode == current;
        div()
            .id(ElementId::Name(format!("{}-{}", id, mode.name()).into()))
            .px(px(8.))
            .rounded(px(3.))
            .cursor_pointer()
            .bg(if selected { theme.accent } else { theme.surface0 })
            .text_color(if selected { theme.crust } else { theme.text })
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _: &MouseDownEvent, _, cx| {
                    this.edit_preferences(|form| form.update(|p| set(p, mode)), cx);
                }),
            )
            .child(mode.name())
    };

    div()
        .flex()
        .flex_row()
        .items_center()
        .justify_between()
        .child(label)
        .child(
            div()
                .flex()
                .flex_row()
                .gap(px(4.))
                .child(option(LabelMode::Letter, cx))
                .child(option(LabelMode::Decimal, cx)),
        )
        .into_any_element()
}

fn section(title: &'static str, theme: &Theme) -> Div {
    div()
        .pt(px(6.))
        .font_weight(FontWeight::BOLD)
        .text_color(theme.text)
        .child(title)
}

fn render_preferences(form: &PreferencesForm, cx: &Context<Workspace>) -> AnyElement {
    let draft = form.draft().clone();
    let modified = form.is_modified();

    let state_section = section("State & Geometries", cx.global::<Theme>());
    let document_section = section("New Documents", cx.global::<Theme>());
    let recent_section = section("Recent Documents", cx.global::<Theme>());

    let body = div()
        .flex()
        .flex_col()
        .gap(px(8.))
        .child(state_section)
        .child(checkbox(
            "pref-restore-state",
            "Save and restore the application state",
            draft.restore_application_state,
            |p| p.restore_application_state = !p.restore_application_state,
            cx,
        ))
        .child(checkbox(
            "pref-restore-geometry",
            "Save and restore the application geometry",
            draft.restore_application_geometry,
            |p| p.restore_application_geometry = !p.restore_application_geometry,
            cx,
        ))
        .child(document_section)
        .child(stepper("pref-rows", "Rows", draft.new_document_rows, PreferencesForm::step_rows, cx))
        .child(stepper("pref-columns", "Columns", draft.new_document_columns, PreferencesForm::step_columns, cx))
        .child(mode_picker(
            "pref-horizontal",
            "Column headers",
            draft.horizontal_header_labels,
            |p, mode| p.horizontal_header_labels = mode,
            cx,
        ))
        .child(mode_picker(
            "pref-vertical",
            "Row headers",
            draft.vertical_header_labels,
            |p, mode| p.vertical_header_labels = mode,
            cx,
        ))
        .child(recent_section)
        .child(stepper(
            "pref-recent",
            "Maximum number of recent documents",
            draft.maximum_recent_documents,
            PreferencesForm::step_maximum_recent,
            cx,
        ));

    let footer = div()
        .flex()
        .flex_row()
        .gap(px(8.))
        .child(button("pref-defaults", "Restore Defaults", true, cx, |this, _, cx| {
            this.edit_preferences(PreferencesForm::restore_defaults, cx);
        }))
        .child(button("pref-apply", "Apply", modified, cx, |this, _, cx| {
            this.apply_preferences_form(cx);
        }))
        .child(button("pref-ok", "OK", true, cx, |this, window, cx| {
            this.apply_preferences_form(cx);
            this.dismiss_dialog(window, cx);
        }))
        .into_any_element();

    dialog_frame("preferences-dialog", "Preferences", body, Some(footer), "Cancel", cx)
}

fn render_open_recent(workspace: &Workspace, cx: &Context<Workspace>) -> AnyElement {
    let theme = cx.global::<Theme>();
    let hover_bg = theme.surface0;
    let entries = workspace.recent_documents().to_display_list();

    let body = if entries.is_empty() {
        div()
            .text_color(theme.overlay0)
            .child("No recent documents")
            .into_any_element()
    } else {
        div()
            .flex()
            .flex_col()
            .children(entries.into_iter().enumerate().map(|(i, entry)| {
                let path = entry.path.clone();
                div()
                    .id(ElementId::Name(format!("recent-{}", i).into()))
                    .px(px(6.))
                    .py(px(4.))
                    .rounded(px(4.))
                    .cursor_pointer()
                    .text_color(theme.text)
                    .hover(move |s| s.bg(hover_bg))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _: &MouseDownEvent, window, cx| {
                            this.dismiss_dialog(window, cx);
                            this.open_path(path.clone(), window, cx);
                        }),
                    )
                    .child(entry.label)
            }))
            .into_any_element()
    };

    let has_entries = !workspace.recent_documents().is_empty();
    let footer = button("recent-clear", "Clear List", has_entries, cx, |this, _, cx| {
        this.clear_recent_documents(cx);
    });

    dialog_frame("open-recent-dialog", "Open Recent", body, Some(footer), "Close", cx)
}
