use std::path::PathBuf;

use gpui::prelude::FluentBuilder;
use gpui::*;

use tabulator::document::{Axis, Document, EditError};
use tabulator::editor::{CellEditor, EditOutcome};
use tabulator::header::LabelMode;
use tabulator::state::CellPosition;

use crate::Theme;

pub const CELL_WIDTH: f32 = 100.0;
pub const CELL_HEIGHT: f32 = 28.0;
pub const MIN_ROW_HEADER_WIDTH: f32 = 50.0;
pub const COLUMN_HEADER_HEIGHT: f32 = 24.0;
pub const FORMULA_BAR_HEIGHT: f32 = 32.0;

// Cell navigation and editing
actions!(
    document_view,
    [
        MoveUp,
        MoveDown,
        MoveLeft,
        MoveRight,
        StartEditing,
        ClearCell,
        InsertRow,
        RemoveRow,
        InsertColumn,
        RemoveColumn,
        ToggleReadOnly,
    ]
);

// Header relabelling for the selected row/column
actions!(
    header_labels,
    [
        LabelColumnDecimal,
        LabelColumnLetter,
        LabelAllColumnsDecimal,
        LabelAllColumnsLetter,
        LabelRowDecimal,
        LabelRowLetter,
        LabelAllRowsDecimal,
        LabelAllRowsLetter,
    ]
);

/// Right-click menu on a header cell. The workspace renders it so the
/// position can stay in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderMenu {
    pub axis: Axis,
    pub index: usize,
    pub position: Point<Pixels>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderMenuChoice {
    /// Only the header that was clicked
    This(LabelMode),
    /// Every header on the clicked axis
    All(LabelMode),
}

/// One open document: its cells, headers, selection, and in-place editor.
pub struct DocumentView {
    focus_handle: FocusHandle,
    document: Document,
    selected: CellPosition,
    scroll_row: usize,
    scroll_col: usize,
    visible_rows: usize,
    visible_cols: usize,
    editor: Option<CellEditor>,
    header_menu: Option<HeaderMenu>,
    status: Option<SharedString>,
    /// Height taken by the workspace above and below this view
    chrome_height: f32,
}

impl DocumentView {
    pub fn new(document: Document, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            document,
            selected: CellPosition::default(),
            scroll_row: 0,
            scroll_col: 0,
            visible_rows: 20,
            visible_cols: 10,
            editor: None,
            header_menu: None,
            status: None,
            chrome_height: 0.0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn title(&self) -> String {
        self.document.file_state.title()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.document.file_state.current_path.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.document.file_state.is_dirty
    }

    pub fn is_read_only(&self) -> bool {
        self.document.is_read_only()
    }

    pub fn selected(&self) -> CellPosition {
        self.selected
    }

    pub fn header_menu(&self) -> Option<HeaderMenu> {
        self.header_menu
    }

    pub fn status(&self) -> Option<SharedString> {
        self.status.clone()
    }

    pub fn set_chrome_height(&mut self, height: f32) {
        self.chrome_height = height;
    }

    fn set_status(&mut self, message: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.status = Some(message.into());
        cx.notify();
    }

    fn move_up(&mut self, _: &MoveUp, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_selection(-1, 0, cx);
    }

    fn move_down(&mut self, _: &MoveDown, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_selection(1, 0, cx);
    }

    fn move_left(&mut self, _: &MoveLeft, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_selection(0, -1, cx);
    }

    fn move_right(&mut self, _: &MoveRight, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_selection(0, 1, cx);
    }

    fn move_selection(&mut self, delta_row: isize, delta_col: isize, cx: &mut Context<Self>) {
        self.selected = self.selected.offset(
            delta_row,
            delta_col,
            self.document.row_count(),
            self.document.column_count(),
        );
        self.ensure_visible();
        cx.notify();
    }

    fn start_editing(&mut self, _: &StartEditing, _window: &mut Window, cx: &mut Context<Self>) {
        self.begin_edit(None, cx);
    }

    /// Open the in-place editor on the selected cell. With `typed`, the cell
    /// content is replaced by what was typed, as in any spreadsheet.
    fn begin_edit(&mut self, typed: Option<&str>, cx: &mut Context<Self>) {
        if self.is_read_only() {
            self.set_status("Document is read-only", cx);
            return;
        }
        let editor = match typed {
            Some(text) => CellEditor::new(text),
            None => CellEditor::new(self.document.cell(self.selected.row, self.selected.col)),
        };
        self.editor = Some(editor);
        self.status = None;
        cx.notify();
    }

    fn commit_edit(&mut self, cx: &mut Context<Self>) {
        if let Some(editor) = self.editor.take() {
            let CellPosition { row, col } = self.selected;
            if self.document.set_cell(row, col, editor.into_text()) {
                log::debug!("Edited {}", self.selected.to_reference());
            }
            cx.notify();
        }
    }

    fn clear_cell(&mut self, _: &ClearCell, _window: &mut Window, cx: &mut Context<Self>) {
        if self.is_read_only() {
            self.set_status("Document is read-only", cx);
            return;
        }
        let CellPosition { row, col } = self.selected;
        if self.document.set_cell(row, col, String::new()) {
            cx.notify();
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let modifiers = &keystroke.modifiers;
        let has_modifier = modifiers.control || modifiers.alt || modifiers.platform;

        if let Some(editor) = self.editor.as_mut() {
            match editor.handle_key(keystroke.key.as_str(), keystroke.key_char.as_deref(), has_modifier) {
                EditOutcome::Changed => cx.notify(),
                EditOutcome::Commit => {
                    self.commit_edit(cx);
                    self.move_selection(1, 0, cx);
                }
                EditOutcome::CommitRight => {
                    self.commit_edit(cx);
                    self.move_selection(0, 1, cx);
                }
                EditOutcome::Cancel => {
                    self.editor = None;
                    cx.notify();
                }
                EditOutcome::Ignored => return,
            }
            cx.stop_propagation();
            return;
        }

        // Typing on a selected cell starts editing it
        if has_modifier {
            return;
        }
        if let Some(text) = keystroke.key_char.as_deref() {
            if !text.is_empty() && !text.chars().any(char::is_control) {
                self.begin_edit(Some(text), cx);
                cx.stop_propagation();
            }
        }
    }

    fn label_column_decimal(&mut self, _: &LabelColumnDecimal, _window: &mut Window, cx: &mut Context<Self>) {
        self.relabel(Axis::Horizontal, HeaderMenuChoice::This(LabelMode::Decimal), cx);
    }

    fn label_column_letter(&mut self, _: &LabelColumnLetter, _window: &mut Window, cx: &mut Context<Self>) {
        self.relabel(Axis::Horizontal, HeaderMenuChoice::This(LabelMode::Letter), cx);
    }

    fn label_all_columns_decimal(&mut self, _: &LabelAllColumnsDecimal, _window: &mut Window, cx: &mut Context<Self>) {
        self.relabel(Axis::Horizontal, HeaderMenuChoice::All(LabelMode::Decimal), cx);
    }

    fn label_all_columns_letter(&mut self, _: &LabelAllColumnsLetter, _window: &mut Window, cx: &mut Context<Self>) {
        self.relabel(Axis::Horizontal, HeaderMenuChoice::All(LabelMode::Letter), cx);
    }

    fn label_row_decimal(&mut self, _: &LabelRowDecimal, _window: &mut Window, cx: &mut Context<Self>) {
        self.relabel(Axis::Vertical, HeaderMenuChoice::This(LabelMode::Decimal), cx);
    }

    fn label_row_letter(&mut self, _: &LabelRowLetter, _window: &mut Window, cx: &mut Context<Self>) {
        self.relabel(Axis::Vertical, HeaderMenuChoice::This(LabelMode::Letter), cx);
    }

    fn label_all_rows_decimal(&mut self, _: &LabelAllRowsDecimal, _window: &mut Window, cx: &mut Context<Self>) {
        self.relabel(Axis::Vertical, HeaderMenuChoice::All(LabelMode::Decimal), cx);
    }

    fn label_all_rows_letter(&mut self, _: &LabelAllRowsLetter, _window: &mut Window, cx: &mut Context<Self>) {
        self.relabel(Axis::Vertical, HeaderMenuChoice::All(LabelMode::Letter), cx);
    }

    /// Relabel the selected row/column, or its whole axis.
    fn relabel(&mut self, axis: Axis, choice: HeaderMenuChoice, cx: &mut Context<Self>) {
        let index = match axis {
            Axis::Horizontal => self.selected.col,
            Axis::Vertical => self.selected.row,
        };
        self.apply_label_choice(axis, index, choice, cx);
    }

    fn apply_label_choice(&mut self, axis: Axis, index: usize, choice: HeaderMenuChoice, cx: &mut Context<Self>) {
        let result = match choice {
            HeaderMenuChoice::This(mode) => self.document.set_header_mode(axis, index, mode),
            HeaderMenuChoice::All(mode) => self.document.set_all_header_modes(axis, mode),
        };
        match result {
            Ok(()) => cx.notify(),
            Err(EditError::ReadOnly) => self.set_status("Document is read-only", cx),
            Err(e) => log::warn!("Cannot relabel header: {}", e),
        }
    }

    pub fn open_header_menu(&mut self, axis: Axis, index: usize, position: Point<Pixels>, cx: &mut Context<Self>) {
        self.commit_edit(cx);
        self.selected = match axis {
            Axis::Horizontal => CellPosition::new(self.selected.row, index),
            Axis::Vertical => CellPosition::new(index, self.selected.col),
        };
        self.header_menu = Some(HeaderMenu { axis, index, position });
        cx.notify();
    }

    pub fn close_header_menu(&mut self, cx: &mut Context<Self>) {
        if self.header_menu.take().is_some() {
            cx.notify();
        }
    }

    /// Apply a choice from the header menu to the header it was opened on.
    pub fn choose_from_header_menu(&mut self, choice: HeaderMenuChoice, cx: &mut Context<Self>) {
        if let Some(menu) = self.header_menu.take() {
            self.apply_label_choice(menu.axis, menu.index, choice, cx);
        }
    }

    fn insert_row(&mut self, _: &InsertRow, _window: &mut Window, cx: &mut Context<Self>) {
        let result = self.document.insert_row(self.selected.row);
        self.after_structure_change("insert row", result, cx);
    }

    fn remove_row(&mut self, _: &RemoveRow, _window: &mut Window, cx: &mut Context<Self>) {
        let result = self.document.remove_row(self.selected.row);
        self.after_structure_change("remove row", result, cx);
    }

    fn insert_column(&mut self, _: &InsertColumn, _window: &mut Window, cx: &mut Context<Self>) {
        let result = self.document.insert_column(self.selected.col);
        self.after_structure_change("insert column", result, cx);
    }

    fn remove_column(&mut self, _: &RemoveColumn, _window: &mut Window, cx: &mut Context<Self>) {
        let result = self.document.remove_column(self.selected.col);
        self.after_structure_change("remove column", result, cx);
    }

    fn after_structure_change(
        &mut self,
        what: &str,
        result: std::result::Result<(), EditError>,
        cx: &mut Context<Self>,
    ) {
        if let Err(EditError::ReadOnly) = result {
            self.set_status("Document is read-only", cx);
            return;
        }
        if let Err(e) = result {
            log::warn!("Cannot {}: {}", what, e);
            self.set_status(format!("Cannot {}", what), cx);
            return;
        }
        self.editor = None;
        self.selected = self
            .selected
            .clamped(self.document.row_count(), self.document.column_count());
        self.ensure_visible();
        cx.notify();
    }

    fn toggle_read_only(&mut self, _: &ToggleReadOnly, _window: &mut Window, cx: &mut Context<Self>) {
        let read_only = !self.is_read_only();
        if read_only {
            self.commit_edit(cx);
        }
        self.document.file_state.set_read_only(read_only);
        cx.notify();
    }

    /// Save to the current path, asking for one if the document has none.
    /// Returns the path written.
    pub fn save(&mut self, window: &mut Window, cx: &mut Context<Self>) -> Option<PathBuf> {
        self.commit_edit(cx);
        if self.is_read_only() {
            self.set_status("Document is read-only", cx);
            return None;
        }
        match self.file_path().cloned() {
            Some(path) => self.save_to_path(path, cx),
            None => self.save_as(window, cx),
        }
    }

    pub fn save_as(&mut self, window: &mut Window, cx: &mut Context<Self>) -> Option<PathBuf> {
        self.commit_edit(cx);
        let file_name = match self.file_path() {
            Some(_) => self.document.file_state.file_name(),
            None => "document.csv".to_string(),
        };
        let path = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(file_name)
            .save_file();

        self.focus_handle.focus(window);
        self.save_to_path(path?, cx)
    }

    fn save_to_path(&mut self, path: PathBuf, cx: &mut Context<Self>) -> Option<PathBuf> {
        match self.document.save_to(path.clone()) {
            Ok(()) => {
                self.set_status(format!("Saved {}", path.display()), cx);
                Some(path)
            }
            Err(e) => {
                log::error!("Failed to save {}: {}", path.display(), e);
                self.set_status(format!("Failed to save: {}", e), cx);
                None
            }
        }
    }

    fn ensure_visible(&mut self) {
        if self.selected.row < self.scroll_row {
            self.scroll_row = self.selected.row;
        } else if self.selected.row >= self.scroll_row + self.visible_rows {
            self.scroll_row = self.selected.row.saturating_sub(self.visible_rows - 1);
        }

        if self.selected.col < self.scroll_col {
            self.scroll_col = self.selected.col;
        } else if self.selected.col >= self.scroll_col + self.visible_cols {
            self.scroll_col = self.selected.col.saturating_sub(self.visible_cols - 1);
        }
    }

    fn scroll_by(&mut self, rows: isize, cols: isize, cx: &mut Context<Self>) {
        let max_row = self.document.row_count().saturating_sub(1);
        let max_col = self.document.column_count().saturating_sub(1);
        self.scroll_row = self.scroll_row.saturating_add_signed(rows).min(max_row);
        self.scroll_col = self.scroll_col.saturating_add_signed(cols).min(max_col);
        cx.notify();
    }

    fn on_cell_click(&mut self, row: usize, col: usize, window: &mut Window, cx: &mut Context<Self>) {
        if self.selected != CellPosition::new(row, col) {
            self.commit_edit(cx);
        }
        self.selected = CellPosition::new(row, col);
        self.ensure_visible();
        self.focus_handle.focus(window);
        cx.notify();
    }

    fn on_cell_double_click(&mut self, row: usize, col: usize, window: &mut Window, cx: &mut Context<Self>) {
        self.on_cell_click(row, col, window, cx);
        if self.editor.is_none() {
            self.begin_edit(None, cx);
        }
    }

    fn select_header(&mut self, axis: Axis, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        let (row, col) = match axis {
            Axis::Horizontal => (self.selected.row, index),
            Axis::Vertical => (index, self.selected.col),
        };
        self.on_cell_click(row, col, window, cx);
    }

    fn row_header_width(&self, end_row: usize) -> f32 {
        let widest = (self.scroll_row..end_row)
            .map(|row| self.document.header_label(Axis::Vertical, row).len())
            .max()
            .unwrap_or(1);
        (widest as f32 * 8.0 + 20.0).max(MIN_ROW_HEADER_WIDTH)
    }

    fn render_formula_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let content = match &self.editor {
            Some(editor) => editor.text().to_string(),
            None => self
                .document
                .cell(self.selected.row, self.selected.col)
                .to_string(),
        };

        div()
            .flex()
            .flex_row()
            .w_full()
            .h(px(FORMULA_BAR_HEIGHT))
            .flex_none()
            .bg(theme.mantle)
            .border_b_1()
            .border_color(theme.surface0)
            .items_center()
            .px(px(8.))
            .gap(px(8.))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_center()
                    .w(px(60.))
                    .h(px(24.))
                    .bg(theme.surface0)
                    .rounded(px(4.))
                    .text_size(px(14.))
                    .text_color(theme.subtext1)
                    .child(self.selected.to_reference()),
            )
            .child(
                div()
                    .flex_1()
                    .h(px(24.))
                    .bg(theme.surface0)
                    .rounded(px(4.))
                    .overflow_hidden()
                    .px(px(8.))
                    .flex()
                    .items_center()
                    .text_size(px(14.))
                    .child(content),
            )
    }

    fn render_column_headers(&self, row_header_width: f32, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let end_col = (self.scroll_col + self.visible_cols).min(self.document.column_count());

        div()
            .flex()
            .flex_row()
            .h(px(COLUMN_HEADER_HEIGHT))
            .flex_none()
            .bg(theme.mantle)
            .border_b_1()
            .border_color(theme.surface0)
            .child(
                // Corner cell
                div()
                    .w(px(row_header_width))
                    .h_full()
                    .flex_none()
                    .border_r_1()
                    .border_color(theme.surface0),
            )
            .children((self.scroll_col..end_col).map(|col| {
                let label = self.document.header_label(Axis::Horizontal, col);
                let is_selected = col == self.selected.col;

                div()
                    .id(ElementId::Name(format!("column-header-{}", col).into()))
                    .w(px(CELL_WIDTH))
                    .h_full()
                    .flex_none()
                    .flex()
                    .items_center()
                    .justify_center()
                    .border_r_1()
                    .border_color(theme.surface0)
                    .text_size(px(12.))
                    .text_color(if is_selected { theme.accent } else { theme.subtext0 })
                    .font_weight(if is_selected { FontWeight::BOLD } else { FontWeight::NORMAL })
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _: &MouseDownEvent, window, cx| {
                            this.select_header(Axis::Horizontal, col, window, cx);
                        }),
                    )
                    .on_mouse_down(
                        MouseButton::Right,
                        cx.listener(move |this, event: &MouseDownEvent, _, cx| {
                            this.open_header_menu(Axis::Horizontal, col, event.position, cx);
                        }),
                    )
                    .child(label)
            }))
    }

    fn render_editing_cell(&self, editor: &CellEditor, row: usize, col: usize, cx: &Context<Self>) -> Stateful<Div> {
        let theme = cx.global::<Theme>();
        let (before, after) = editor.split_at_cursor();

        div()
            .id(ElementId::Name(format!("cell-edit-{}-{}", row, col).into()))
            .w(px(CELL_WIDTH))
            .h(px(CELL_HEIGHT))
            .flex_none()
            .flex()
            .flex_row()
            .items_center()
            .px(px(4.))
            .border_2()
            .border_color(theme.accent)
            .bg(theme.surface0)
            .text_size(px(14.))
            .overflow_hidden()
            .child(before.to_string())
            .child(div().w(px(1.)).h(px(16.)).flex_none().bg(theme.text))
            .child(after.to_string())
    }

    fn render_rows(&self, row_header_width: f32, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let end_row = (self.scroll_row + self.visible_rows).min(self.document.row_count());
        let end_col = (self.scroll_col + self.visible_cols).min(self.document.column_count());

        div()
            .id("document-rows")
            .flex()
            .flex_col()
            .flex_1()
            .overflow_hidden()
            .on_scroll_wheel(cx.listener(|this, event: &ScrollWheelEvent, _, cx| {
                let delta = event.delta.pixel_delta(px(CELL_HEIGHT));
                let dy: f32 = delta.y.into();
                let dx: f32 = delta.x.into();
                let rows = (-dy / CELL_HEIGHT).round() as isize;
                let cols = (-dx / CELL_WIDTH).round() as isize;
                if rows != 0 || cols != 0 {
                    this.scroll_by(rows, cols, cx);
                }
            }))
            .children((self.scroll_row..end_row).map(|row| {
                let is_row_selected = row == self.selected.row;

                div()
                    .flex()
                    .flex_row()
                    .h(px(CELL_HEIGHT))
                    .flex_none()
                    .child(
                        div()
                            .id(ElementId::Name(format!("row-header-{}", row).into()))
                            .w(px(row_header_width))
                            .h_full()
                            .flex_none()
                            .flex()
                            .items_center()
                            .justify_center()
                            .bg(theme.mantle)
                            .border_r_1()
                            .border_b_1()
                            .border_color(theme.surface0)
                            .text_size(px(12.))
                            .text_color(if is_row_selected { theme.accent } else { theme.subtext0 })
                            .font_weight(if is_row_selected { FontWeight::BOLD } else { FontWeight::NORMAL })
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(move |this, _: &MouseDownEvent, window, cx| {
                                    this.select_header(Axis::Vertical, row, window, cx);
                                }),
                            )
                            .on_mouse_down(
                                MouseButton::Right,
                                cx.listener(move |this, event: &MouseDownEvent, _, cx| {
                                    this.open_header_menu(Axis::Vertical, row, event.position, cx);
                                }),
                            )
                            .child(self.document.header_label(Axis::Vertical, row)),
                    )
                    .children((self.scroll_col..end_col).map(|col| {
                        let is_selected = row == self.selected.row && col == self.selected.col;

                        if let (true, Some(editor)) = (is_selected, self.editor.as_ref()) {
                            return self.render_editing_cell(editor, row, col, cx);
                        }

                        div()
                            .id(ElementId::Name(format!("cell-{}-{}", row, col).into()))
                            .w(px(CELL_WIDTH))
                            .h(px(CELL_HEIGHT))
                            .flex_none()
                            .flex()
                            .items_center()
                            .px(px(4.))
                            .border_r_1()
                            .border_b_1()
                            .border_color(if is_selected { theme.accent } else { theme.surface0 })
                            .when(is_selected, |d| d.border_2())
                            .bg(if is_selected { theme.surface0 } else { theme.base })
                            .text_size(px(14.))
                            .overflow_hidden()
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(move |this, event: &MouseDownEvent, window, cx| {
                                    if event.click_count == 2 {
                                        this.on_cell_double_click(row, col, window, cx);
                                    } else {
                                        this.on_cell_click(row, col, window, cx);
                                    }
                                }),
                            )
                            .child(self.document.cell(row, col).to_string())
                    }))
            }))
    }
}

impl Render for DocumentView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let viewport = window.viewport_size();
        let grid_height = f32::from(viewport.height)
            - self.chrome_height
            - FORMULA_BAR_HEIGHT
            - COLUMN_HEADER_HEIGHT;
        self.visible_rows = ((grid_height / CELL_HEIGHT).ceil().max(1.0)) as usize;

        let end_row = (self.scroll_row + self.visible_rows).min(self.document.row_count());
        let row_header_width = self.row_header_width(end_row);
        let grid_width = f32::from(viewport.width) - row_header_width;
        self.visible_cols = ((grid_width / CELL_WIDTH).ceil().max(1.0)) as usize;

        let key_context = if self.editor.is_some() {
            "CellEditor"
        } else {
            "Document"
        };

        div()
            .flex()
            .flex_col()
            .size_full()
            .key_context(key_context)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::move_up))
            .on_action(cx.listener(Self::move_down))
            .on_action(cx.listener(Self::move_left))
            .on_action(cx.listener(Self::move_right))
            .on_action(cx.listener(Self::start_editing))
            .on_action(cx.listener(Self::clear_cell))
            .on_action(cx.listener(Self::insert_row))
            .on_action(cx.listener(Self::remove_row))
            .on_action(cx.listener(Self::insert_column))
            .on_action(cx.listener(Self::remove_column))
            .on_action(cx.listener(Self::toggle_read_only))
            .on_action(cx.listener(Self::label_column_decimal))
            .on_action(cx.listener(Self::label_column_letter))
            .on_action(cx.listener(Self::label_all_columns_decimal))
            .on_action(cx.listener(Self::label_all_columns_letter))
            .on_action(cx.listener(Self::label_row_decimal))
            .on_action(cx.listener(Self::label_row_letter))
            .on_action(cx.listener(Self::label_all_rows_decimal))
            .on_action(cx.listener(Self::label_all_rows_letter))
            .on_key_down(cx.listener(Self::on_key_down))
            .child(self.render_formula_bar(cx))
            .child(self.render_column_headers(row_header_width, cx))
            .child(self.render_rows(row_header_width, cx))
    }
}

impl Focusable for DocumentView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
