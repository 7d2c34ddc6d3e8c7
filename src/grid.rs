use gpui::prelude::FluentBuilder;
use gpui::*;

use crate::config::SheetConfig;
use crate::dataset::{ColumnGroup, ColumnKind, Dataset, HeaderTint, Priority, Status};
use crate::input::TextInput;
use crate::navbar::NavBar;
use crate::resize::ColumnResize;
use crate::sheet::{EditSession, EditTransition, Sheet};
use crate::state::{CellPosition, KeyOutcome, Mode, NavKey, Navigation};
use crate::tabs::TabBar;
use crate::toolbar::Toolbar;
use crate::Theme;

pub const ROW_HEIGHT: f32 = 32.0;
pub const ROW_NUMBER_WIDTH: f32 = 32.0;
pub const ADD_COLUMN_WIDTH: f32 = 126.0;
pub const RESIZE_HANDLE_WIDTH: f32 = 4.0;
pub const FOOTER_HEIGHT: f32 = 24.0;

pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

// Actions for Normal mode
actions!(
    normal_mode,
    [
        MoveUp,
        MoveDown,
        MoveLeft,
        MoveRight,
        MoveNext,
        EnterEditMode,
    ]
);

// Actions for Edit mode
actions!(edit_mode, [CommitEdit, CancelEdit]);

// Global actions
actions!(spreadsheet, [Quit, ToggleToolbar]);

/// The main window: navigation bar, toolbar, sheet and tab bar.
pub struct SpreadsheetApp {
    navbar: Entity<NavBar>,
    toolbar: Entity<Toolbar>,
    grid: Entity<SpreadsheetGrid>,
    tabs: Entity<TabBar>,
}

impl SpreadsheetApp {
    pub fn new(config: &SheetConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let navbar = cx.new(|cx| NavBar::new(window, cx));
        let toolbar = cx.new(|_| Toolbar::new());
        let grid = cx.new(|cx| SpreadsheetGrid::new(config, window, cx));
        let tabs = cx.new(|_| TabBar::new());
        Self {
            navbar,
            toolbar,
            grid,
            tabs,
        }
    }

    fn toggle_toolbar(&mut self, _: &ToggleToolbar, _window: &mut Window, cx: &mut Context<Self>) {
        self.toolbar.update(cx, |toolbar, cx| toolbar.toggle_expanded(cx));
    }
}

impl Render for SpreadsheetApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(theme.background)
            .text_color(theme.text)
            .on_action(cx.listener(Self::toggle_toolbar))
            .child(self.navbar.clone())
            .child(self.toolbar.clone())
            .child(self.grid.clone())
            .child(self.tabs.clone())
    }
}

/// The job request table.
pub struct SpreadsheetGrid {
    focus_handle: FocusHandle,
    cell_input: Entity<TextInput>,
    session: EditSession,
    resize: ColumnResize,
    _subscriptions: Vec<Subscription>,
}

impl SpreadsheetGrid {
    pub fn new(config: &SheetConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let cell_input = cx.new(|cx| TextInput::new(cx));
        let input_focus = cell_input.read(cx).focus_handle.clone();

        // Leaving the editor by any route other than Escape keeps the typed value.
        let subscriptions = vec![cx.on_blur(&input_focus, window, |this, _window, cx| {
            let text = this.cell_input.read(cx).text();
            if this.session.commit(text) {
                cx.notify();
            }
        })];

        focus_handle.focus(window);

        Self {
            focus_handle,
            cell_input,
            session: EditSession::new(
                Navigation::new(config.rows, config.cols),
                Sheet::new(Dataset::job_requests()),
            ),
            resize: ColumnResize::new(config.default_column_width),
            _subscriptions: subscriptions,
        }
    }

    fn move_up(&mut self, _: &MoveUp, window: &mut Window, cx: &mut Context<Self>) {
        self.apply_key(NavKey::ArrowUp, window, cx);
    }

    fn move_down(&mut self, _: &MoveDown, window: &mut Window, cx: &mut Context<Self>) {
        self.apply_key(NavKey::ArrowDown, window, cx);
    }

    fn move_left(&mut self, _: &MoveLeft, window: &mut Window, cx: &mut Context<Self>) {
        self.apply_key(NavKey::ArrowLeft, window, cx);
    }

    fn move_right(&mut self, _: &MoveRight, window: &mut Window, cx: &mut Context<Self>) {
        self.apply_key(NavKey::ArrowRight, window, cx);
    }

    fn move_next(&mut self, _: &MoveNext, window: &mut Window, cx: &mut Context<Self>) {
        self.apply_key(NavKey::Tab, window, cx);
    }

    fn enter_edit_mode(&mut self, _: &EnterEditMode, window: &mut Window, cx: &mut Context<Self>) {
        self.apply_key(NavKey::Enter, window, cx);
    }

    fn cancel_edit(&mut self, _: &CancelEdit, window: &mut Window, cx: &mut Context<Self>) {
        self.apply_key(NavKey::Escape, window, cx);
    }

    fn commit_edit(&mut self, _: &CommitEdit, window: &mut Window, cx: &mut Context<Self>) {
        let text = self.cell_input.read(cx).text();
        if !self.session.commit(text) {
            cx.propagate();
            return;
        }
        self.focus_handle.focus(window);
        cx.notify();
    }

    /// Run a key through the edit session and move focus to match the new mode.
    fn apply_key(&mut self, key: NavKey, window: &mut Window, cx: &mut Context<Self>) {
        let (outcome, transition) = self.session.apply_key(key);
        match transition {
            EditTransition::Started(content) => self.load_editor(content, window, cx),
            EditTransition::Cancelled => self.focus_handle.focus(window),
            EditTransition::Unchanged => {}
        }
        match outcome {
            KeyOutcome::Handled => cx.notify(),
            KeyOutcome::Ignored => cx.propagate(),
        }
    }

    fn load_editor(&mut self, content: String, window: &mut Window, cx: &mut Context<Self>) {
        let pos = self.session.navigation().selected();
        log::info!("editing {} with value {:?}", pos.to_reference(), content);
        self.cell_input.update(cx, |input, cx| {
            input.begin_edit(content, cx);
        });
        let focus_handle = self.cell_input.read(cx).focus_handle.clone();
        focus_handle.focus(window);
    }

    fn on_cell_click(&mut self, pos: CellPosition, window: &mut Window, cx: &mut Context<Self>) {
        let text = self.cell_input.read(cx).text();
        self.session.click(pos, text);
        log::info!("cell selected: row {}, column {}", pos.row, pos.col);
        self.focus_handle.focus(window);
        cx.notify();
    }

    fn on_cell_double_click(&mut self, pos: CellPosition, window: &mut Window, cx: &mut Context<Self>) {
        let text = self.cell_input.read(cx).text();
        let content = self.session.double_click(pos, text);
        self.load_editor(content, window, cx);
        cx.notify();
    }

    fn column_title(&self, column: usize) -> &'static str {
        self.session
            .sheet()
            .dataset()
            .header(column)
            .map(|header| header.title)
            .unwrap_or("")
    }

    fn start_resize(&mut self, column: usize, x: f32, cx: &mut Context<Self>) {
        self.resize.start_resize(column, x);
        log::info!(
            "started resizing column {} ({})",
            column + 1,
            self.column_title(column)
        );
        cx.notify();
    }

    fn on_pointer_move(&mut self, x: f32, cx: &mut Context<Self>) {
        if let Some(width) = self.resize.handle_resize(x) {
            if let Some(column) = self.resize.resizing_column() {
                log::debug!("column {} resized to {}px", column + 1, width);
            }
            cx.notify();
        }
    }

    fn stop_resize(&mut self, cx: &mut Context<Self>) {
        if let Some(column) = self.resize.stop_resize() {
            log::info!(
                "finished resizing column {} ({}) at {}px",
                column + 1,
                self.column_title(column),
                self.resize.get_column_width(column)
            );
            cx.notify();
        }
    }

    /// Window-wide pointer listeners. Only rendered while a drag is active, so they
    /// are dropped on the first frame after the drag ends or when the view goes away.
    fn render_drag_capture(&self, cx: &Context<Self>) -> impl IntoElement {
        let entity = cx.entity().clone();
        canvas(
            |_, _, _| {},
            move |_, _, window, _| {
                let move_target = entity.clone();
                window.on_mouse_event(move |event: &MouseMoveEvent, phase, _window, cx| {
                    if phase == DispatchPhase::Bubble {
                        let x = f32::from(event.position.x);
                        move_target.update(cx, |grid, cx| grid.on_pointer_move(x, cx));
                    }
                });
                window.on_mouse_event(move |event: &MouseUpEvent, phase, _window, cx| {
                    if phase == DispatchPhase::Bubble && event.button == MouseButton::Left {
                        entity.update(cx, |grid, cx| grid.stop_resize(cx));
                    }
                });
            },
        )
        .absolute()
        .size_full()
    }

    fn render_group_headers(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let (_, cols) = self.session.navigation().extent();
        let dataset = self.session.sheet().dataset();

        let mut blocks: Vec<AnyElement> = Vec::new();
        let mut column = 0;
        while column < cols {
            match dataset.group_starting_at(column) {
                Some(group) => {
                    let end = group.columns.end.min(cols);
                    blocks.push(self.render_group(group, self.resize.span_width(column..end), cx));
                    column = end;
                }
                None => {
                    blocks.push(
                        div()
                            .w(px(self.resize.get_column_width(column)))
                            .h_full()
                            .flex_none()
                            .bg(theme.surface)
                            .into_any_element(),
                    );
                    column += 1;
                }
            }
        }

        div()
            .flex()
            .flex_row()
            .h(px(ROW_HEIGHT))
            .child(div().w(px(ROW_NUMBER_WIDTH)).h_full().flex_none().bg(theme.surface))
            .children(blocks)
            .child(
                div()
                    .w(px(ADD_COLUMN_WIDTH))
                    .h_full()
                    .flex_none()
                    .border_1()
                    .border_color(theme.dashed),
            )
    }

    fn render_group(&self, group: &ColumnGroup, width: f32, cx: &Context<Self>) -> AnyElement {
        let theme = cx.global::<Theme>();
        let colors = theme.tint(group.tint);
        let label = group.label;
        let selected_column = self.session.navigation().selected().col - 1;
        let holds_selection = self
            .session
            .sheet()
            .dataset()
            .group_containing(selected_column)
            .is_some_and(|containing| containing.label == label);

        if group.is_document {
            return div()
                .w(px(width))
                .h_full()
                .flex_none()
                .flex()
                .flex_row()
                .items_center()
                .pl(px(4.))
                .bg(theme.surface)
                .border_r_1()
                .border_color(rgb(0xcccccc))
                .child(
                    div()
                        .flex()
                        .flex_row()
                        .items_center()
                        .gap(px(8.))
                        .w_full()
                        .h_full()
                        .px(px(4.))
                        .rounded(px(6.))
                        .border_1()
                        .border_color(rgb(0xe0e0e0))
                        .bg(theme.group_box)
                        .child(
                            div()
                                .id("document-chip")
                                .flex()
                                .flex_row()
                                .items_center()
                                .gap(px(8.))
                                .px(px(12.))
                                .py(px(2.))
                                .rounded(px(4.))
                                .bg(theme.surface)
                                .border_1()
                                .border_color(rgb(0xe0e0e0))
                                .text_size(px(14.))
                                .font_weight(FontWeight::SEMIBOLD)
                                .text_color(colors.group_text)
                                .child(svg().path("icons/document.svg").size(px(16.)).text_color(theme.brand))
                                .child(label)
                                .on_click(move |_, _, _| log::info!("document header clicked: {}", label)),
                        )
                        .child(
                            div()
                                .id("refresh")
                                .p(px(4.))
                                .rounded(px(4.))
                                .hover(|d| d.bg(theme.surface))
                                .child(svg().path("icons/refresh.svg").size(px(16.)).text_color(colors.header_text))
                                .on_click(|_, _, _| log::info!("refresh requested, syncing data")),
                        ),
                )
                .into_any_element();
        }

        div()
            .id(ElementId::Name(format!("group-{}", label).into()))
            .w(px(width))
            .h_full()
            .flex_none()
            .flex()
            .items_center()
            .justify_center()
            .bg(colors.group_bg)
            .text_size(px(14.))
            .font_weight(if holds_selection { FontWeight::SEMIBOLD } else { FontWeight::MEDIUM })
            .text_color(colors.group_text)
            .whitespace_nowrap()
            .overflow_hidden()
            .child(label)
            .on_click(move |_, _, _| log::info!("column group header clicked: {}", label))
            .into_any_element()
    }

    fn render_column_headers(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let (_, cols) = self.session.navigation().extent();

        div()
            .flex()
            .flex_row()
            .h(px(ROW_HEIGHT))
            .child(
                div()
                    .w(px(ROW_NUMBER_WIDTH))
                    .h_full()
                    .flex_none()
                    .flex()
                    .items_center()
                    .pl(px(8.))
                    .bg(theme.header)
                    .child(svg().path("icons/hash.svg").size(px(16.)).text_color(theme.subtext)),
            )
            .children((0..cols).map(|column| self.render_column_header(column, cx)))
            .child(
                div()
                    .id("add-column")
                    .w(px(ADD_COLUMN_WIDTH))
                    .h_full()
                    .flex_none()
                    .flex()
                    .items_center()
                    .justify_center()
                    .bg(theme.surface)
                    .hover(|d| d.bg(theme.hover))
                    .child(svg().path("icons/plus.svg").size(px(20.)).text_color(theme.subtext))
                    .on_click(|_, _, _| log::info!("add column requested")),
            )
    }

    fn render_column_header(&self, column: usize, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let header = self.session.sheet().dataset().header(column);
        let colors = theme.tint(header.map(|h| h.tint).unwrap_or(HeaderTint::Neutral));
        let is_resizing = self.resize.resizing_column() == Some(column);
        let is_selected_col = self.session.navigation().selected().col == column + 1;
        let accent = theme.accent;

        div()
            .relative()
            .w(px(self.resize.get_column_width(column)))
            .h_full()
            .flex_none()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(4.))
            .pl(px(8.))
            .pr(px(4.))
            .bg(if header.is_some() { colors.header_bg } else { theme.surface })
            .border_r_1()
            .border_color(theme.grid_line)
            .when_some(header, |d, header| {
                let title = header.title;
                d.child(
                    div()
                        .id(ElementId::Name(format!("header-{}", column).into()))
                        .flex_1()
                        .flex()
                        .flex_row()
                        .items_center()
                        .gap(px(4.))
                        .px(px(4.))
                        .rounded(px(4.))
                        .overflow_hidden()
                        .hover(|d| d.bg(rgba(0x0000000d)))
                        .when_some(header.icon, |d, icon| {
                            d.child(svg().path(icon).size(px(16.)).text_color(colors.header_text))
                        })
                        .child(
                            div()
                                .text_size(px(12.))
                                .font_weight(FontWeight::SEMIBOLD)
                                .text_color(if is_selected_col { accent } else { colors.header_text })
                                .whitespace_nowrap()
                                .overflow_hidden()
                                .child(title),
                        )
                        .on_click(move |_, _, _| {
                            log::info!("column header clicked: {} (column {})", title, column + 1)
                        }),
                )
                .when(header.has_menu, |d| {
                    d.child(
                        div()
                            .id(ElementId::Name(format!("header-menu-{}", column).into()))
                            .p(px(4.))
                            .rounded(px(4.))
                            .hover(|d| d.bg(rgba(0x0000001a)))
                            .child(svg().path("icons/chevron-down.svg").size(px(12.)).text_color(colors.header_text))
                            .on_click(move |_, _, _| {
                                log::info!("column menu clicked for: {} (column {})", title, column + 1)
                            }),
                    )
                })
            })
            .child(
                div()
                    .id(ElementId::Name(format!("resize-handle-{}", column).into()))
                    .absolute()
                    .right_0()
                    .top_0()
                    .w(px(RESIZE_HANDLE_WIDTH))
                    .h_full()
                    .cursor(CursorStyle::ResizeLeftRight)
                    .when(is_resizing, |d| d.bg(accent))
                    .hover(|d| d.bg(accent))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, event: &MouseDownEvent, _window, cx| {
                            this.start_resize(column, f32::from(event.position.x), cx);
                            cx.stop_propagation();
                        }),
                    )
                    // A release before the drag listeners are painted still ends the drag.
                    .on_mouse_up(
                        MouseButton::Left,
                        cx.listener(|this, _: &MouseUpEvent, _window, cx| this.stop_resize(cx)),
                    ),
            )
    }

    fn render_rows(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let (rows, cols) = self.session.navigation().extent();
        let selected_row = self.session.navigation().selected().row;

        div().flex().flex_col().children((1..=rows).map(|row| {
            div()
                .flex()
                .flex_row()
                .h(px(ROW_HEIGHT))
                .child(
                    div()
                        .id(ElementId::Name(format!("row-{}", row).into()))
                        .w(px(ROW_NUMBER_WIDTH))
                        .h_full()
                        .flex_none()
                        .flex()
                        .items_center()
                        .justify_center()
                        .bg(theme.surface)
                        .hover(|d| d.bg(theme.hover))
                        .text_size(px(14.))
                        .text_color(if row == selected_row { theme.accent } else { theme.subtext })
                        .child(row.to_string())
                        .on_click(move |_, _, _| log::info!("row {} selected", row)),
                )
                .children((1..=cols).map(|col| self.render_cell(CellPosition::new(row, col), cx)))
                .child(
                    div()
                        .w(px(ADD_COLUMN_WIDTH))
                        .h_full()
                        .flex_none()
                        .bg(theme.surface),
                )
        }))
    }

    fn render_cell(&self, pos: CellPosition, cx: &Context<Self>) -> AnyElement {
        let theme = cx.global::<Theme>();
        let width = self.resize.get_column_width(pos.col - 1);
        let is_selected = self.session.navigation().selected() == pos;

        if self.session.navigation().is_editing_cell(pos) {
            return div()
                .id(ElementId::Name(format!("cell-edit-{}-{}", pos.row, pos.col).into()))
                .w(px(width))
                .h(px(ROW_HEIGHT))
                .flex_none()
                .flex()
                .items_center()
                .px(px(8.))
                .bg(theme.surface)
                .border_2()
                .border_color(theme.accent)
                .child(div().w_full().h(px(16.)).child(self.cell_input.clone()))
                .into_any_element();
        }

        let value = self.session.sheet().value(pos).to_string();
        let kind = self.session.sheet().dataset().column_kind(pos.col - 1);

        div()
            .id(ElementId::Name(format!("cell-{}-{}", pos.row, pos.col).into()))
            .w(px(width))
            .h(px(ROW_HEIGHT))
            .flex_none()
            .flex()
            .items_center()
            .px(px(8.))
            .bg(theme.surface)
            .border_r_1()
            .border_b_1()
            .border_color(theme.grid_line)
            .when(is_selected, |d| d.border_2().border_color(theme.accent))
            .text_size(px(12.))
            .text_color(theme.text)
            .overflow_hidden()
            .when(!value.is_empty(), |d| d.child(render_value(kind, value, theme)))
            .on_mouse_down(MouseButton::Left, {
                let entity = cx.entity().clone();
                move |event, window, app| {
                    if event.click_count == 2 {
                        entity.update(app, |this, cx| this.on_cell_double_click(pos, window, cx));
                    } else {
                        entity.update(app, |this, cx| this.on_cell_click(pos, window, cx));
                    }
                }
            })
            .into_any_element()
    }

    fn render_footer(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let mode_text = match self.session.navigation().mode() {
            Mode::Normal => "-- NORMAL --",
            Mode::Edit => "-- EDIT --",
        };
        let selected = self.session.navigation().selected();
        let edited = self.session.sheet().is_edited(selected);

        div()
            .flex()
            .flex_row()
            .w_full()
            .h(px(FOOTER_HEIGHT))
            .flex_none()
            .items_center()
            .justify_between()
            .px(px(8.))
            .bg(theme.surface)
            .border_t_1()
            .border_color(theme.border)
            .text_size(px(12.))
            .text_color(theme.subtext)
            .child(div().font_weight(FontWeight::BOLD).child(mode_text))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap(px(8.))
                    .child(selected.to_reference())
                    .child(
                        div()
                            .max_w(px(320.))
                            .overflow_hidden()
                            .whitespace_nowrap()
                            .text_color(theme.text)
                            .child(self.session.sheet().value(selected).to_string()),
                    )
                    .when(edited, |d| d.child(div().text_color(theme.muted).child("(edited)"))),
            )
    }
}

fn render_value(kind: ColumnKind, value: String, theme: &Theme) -> AnyElement {
    match kind {
        ColumnKind::Status => {
            let (bg, fg) = theme.status_badge(Status::from_label(&value));
            div()
                .flex_1()
                .flex()
                .justify_center()
                .child(
                    div()
                        .px(px(8.))
                        .py(px(2.))
                        .rounded_full()
                        .bg(bg)
                        .text_color(fg)
                        .font_weight(FontWeight::MEDIUM)
                        .whitespace_nowrap()
                        .child(value),
                )
                .into_any_element()
        }
        ColumnKind::Priority => div()
            .flex_1()
            .flex()
            .justify_center()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(theme.priority_color(Priority::from_label(&value)))
            .whitespace_nowrap()
            .child(value)
            .into_any_element(),
        ColumnKind::Url => {
            let url = if value.starts_with("http://") || value.starts_with("https://") {
                value.clone()
            } else {
                format!("https://{}", value)
            };
            div()
                .id(ElementId::Name(format!("link-{}", value).into()))
                .overflow_hidden()
                .whitespace_nowrap()
                .border_b_1()
                .border_color(theme.text)
                .hover(|d| d.text_color(rgb(0x2563eb)))
                .child(value)
                .on_click(move |_, _, cx| {
                    log::info!("opening {}", url);
                    cx.open_url(&url);
                })
                .into_any_element()
        }
        ColumnKind::Currency => div()
            .flex_1()
            .flex()
            .flex_row()
            .justify_end()
            .gap(px(4.))
            .child(div().overflow_hidden().whitespace_nowrap().child(value))
            .child(
                div()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.muted)
                    .child("₹"),
            )
            .into_any_element(),
        ColumnKind::Text => div()
            .flex_1()
            .overflow_hidden()
            .whitespace_nowrap()
            .child(value)
            .into_any_element(),
    }
}

impl Render for SpreadsheetGrid {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let key_context = if self.session.navigation().is_editing() {
            "EditMode"
        } else {
            "NormalMode"
        };
        let resizing = self.resize.is_resizing();
        let sheet_bg = cx.global::<Theme>().sheet;

        div()
            .relative()
            .flex()
            .flex_col()
            .flex_1()
            .w_full()
            .overflow_hidden()
            .bg(sheet_bg)
            .key_context(key_context)
            .track_focus(&self.focus_handle)
            // Normal mode actions
            .on_action(cx.listener(Self::move_up))
            .on_action(cx.listener(Self::move_down))
            .on_action(cx.listener(Self::move_left))
            .on_action(cx.listener(Self::move_right))
            .on_action(cx.listener(Self::move_next))
            .on_action(cx.listener(Self::enter_edit_mode))
            // Edit mode actions
            .on_action(cx.listener(Self::commit_edit))
            .on_action(cx.listener(Self::cancel_edit))
            .when(resizing, |d| d.cursor(CursorStyle::ResizeLeftRight))
            .child(
                div()
                    .id("sheet-table")
                    .flex_1()
                    .overflow_scroll()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(self.render_group_headers(cx))
                            .child(self.render_column_headers(cx))
                            .child(self.render_rows(cx)),
                    ),
            )
            .child(self.render_footer(cx))
            .when(resizing, |d| d.child(self.render_drag_capture(cx)))
    }
}

impl Focusable for SpreadsheetGrid {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
