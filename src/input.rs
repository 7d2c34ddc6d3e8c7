// Single-line text input used by the cell editor and the search box.

use std::ops::Range;
use std::time::Duration;

use gpui::*;
use unicode_segmentation::*;

use crate::Theme;

const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(530);
const CURSOR_WIDTH: f32 = 1.5;

actions!(
    text_input,
    [
        Backspace,
        Delete,
        Left,
        Right,
        SelectLeft,
        SelectRight,
        SelectAll,
        Home,
        End,
        ShowCharacterPalette,
        Paste,
        Cut,
        Copy,
    ]
);

/// Text plus selection state. Offsets are UTF-8 byte indices on grapheme boundaries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    selection: Range<usize>,
    reversed: bool,
    marked: Option<Range<usize>>,
}

impl EditBuffer {
    /// Replace the whole text and select all of it.
    pub fn load(&mut self, text: String) {
        self.selection = 0..text.len();
        self.text = text;
        self.reversed = false;
        self.marked = None;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn marked(&self) -> Option<Range<usize>> {
        self.marked.clone()
    }

    pub fn unmark(&mut self) {
        self.marked = None;
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn cursor(&self) -> usize {
        if self.reversed {
            self.selection.start
        } else {
            self.selection.end
        }
    }

    pub fn selected_text(&self) -> Option<&str> {
        (!self.selection.is_empty()).then(|| &self.text[self.selection.clone()])
    }

    pub fn move_to(&mut self, offset: usize) {
        let offset = offset.min(self.text.len());
        self.selection = offset..offset;
        self.reversed = false;
    }

    /// Move the active end of the selection, keeping the anchor.
    pub fn select_to(&mut self, offset: usize) {
        let offset = offset.min(self.text.len());
        if self.reversed {
            self.selection.start = offset;
        } else {
            self.selection.end = offset;
        }
        if self.selection.end < self.selection.start {
            self.reversed = !self.reversed;
            self.selection = self.selection.end..self.selection.start;
        }
    }

    pub fn select_all(&mut self) {
        self.move_to(0);
        self.select_to(self.text.len());
    }

    /// Collapse the selection, or step one grapheme left.
    pub fn step_left(&mut self) {
        if self.selection.is_empty() {
            self.move_to(self.previous_boundary(self.cursor()));
        } else {
            self.move_to(self.selection.start);
        }
    }

    pub fn step_right(&mut self) {
        if self.selection.is_empty() {
            self.move_to(self.next_boundary(self.selection.end));
        } else {
            self.move_to(self.selection.end);
        }
    }

    pub fn extend_left(&mut self) {
        self.select_to(self.previous_boundary(self.cursor()));
    }

    pub fn extend_right(&mut self) {
        self.select_to(self.next_boundary(self.cursor()));
    }

    pub fn delete_backward(&mut self) {
        if self.selection.is_empty() {
            self.extend_left();
        }
        self.replace(None, "");
    }

    pub fn delete_forward(&mut self) {
        if self.selection.is_empty() {
            self.extend_right();
        }
        self.replace(None, "");
    }

    /// Replace `range` (or the marked text, or the selection) and park the cursor after it.
    pub fn replace(&mut self, range: Option<Range<usize>>, new_text: &str) {
        let range = self.target_range(range);
        self.splice(range.clone(), new_text);
        let end = range.start + new_text.len();
        self.selection = end..end;
        self.reversed = false;
        self.marked = None;
    }

    /// IME composition: replace and mark the inserted text.
    pub fn replace_and_mark(
        &mut self,
        range: Option<Range<usize>>,
        new_text: &str,
        selection_in_new: Option<Range<usize>>,
    ) {
        let range = self.target_range(range);
        self.splice(range.clone(), new_text);
        self.marked = Some(range.start..range.start + new_text.len());
        self.selection = match selection_in_new {
            Some(inner) => range.start + inner.start..range.start + inner.end,
            None => {
                let end = range.start + new_text.len();
                end..end
            }
        };
        self.reversed = false;
    }

    fn target_range(&self, range: Option<Range<usize>>) -> Range<usize> {
        range
            .or_else(|| self.marked.clone())
            .unwrap_or_else(|| self.selection.clone())
    }

    fn splice(&mut self, range: Range<usize>, new_text: &str) {
        let start = range.start.min(self.text.len());
        let end = range.end.clamp(start, self.text.len());
        self.text.replace_range(start..end, new_text);
    }

    pub fn previous_boundary(&self, offset: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .rev()
            .map(|(index, _)| index)
            .find(|&index| index < offset)
            .unwrap_or(0)
    }

    pub fn next_boundary(&self, offset: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .map(|(index, _)| index)
            .find(|&index| index > offset)
            .unwrap_or(self.text.len())
    }

    pub fn to_utf16(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .take_while(|(index, _)| *index < offset)
            .map(|(_, ch)| ch.len_utf16())
            .sum()
    }

    pub fn from_utf16(&self, offset: usize) -> usize {
        let mut units = 0;
        for (index, ch) in self.text.char_indices() {
            if units >= offset {
                return index;
            }
            units += ch.len_utf16();
        }
        self.text.len()
    }

    pub fn range_to_utf16(&self, range: &Range<usize>) -> Range<usize> {
        self.to_utf16(range.start)..self.to_utf16(range.end)
    }

    pub fn range_from_utf16(&self, range: &Range<usize>) -> Range<usize> {
        self.from_utf16(range.start)..self.from_utf16(range.end)
    }
}

/// Keep `cursor_x` inside a viewport of `width`, scrolling as little as possible.
fn scroll_to_cursor(cursor_x: Pixels, scroll: Pixels, width: Pixels) -> Pixels {
    let mut scroll = scroll;
    if cursor_x - scroll > width {
        scroll = cursor_x - width;
    }
    if cursor_x < scroll {
        scroll = cursor_x;
    }
    if scroll < px(0.) { px(0.) } else { scroll }
}

pub struct TextInput {
    pub focus_handle: FocusHandle,
    buffer: EditBuffer,
    placeholder: SharedString,
    last_layout: Option<ShapedLine>,
    last_bounds: Option<Bounds<Pixels>>,
    is_selecting: bool,
    cursor_visible: bool,
    blink_epoch: usize,
    scroll_offset: Pixels,
}

impl TextInput {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            buffer: EditBuffer::default(),
            placeholder: SharedString::default(),
            last_layout: None,
            last_bounds: None,
            is_selecting: false,
            cursor_visible: true,
            blink_epoch: 0,
            scroll_offset: px(0.),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Load a cell's value for editing with the whole value selected.
    pub fn begin_edit(&mut self, text: String, cx: &mut Context<Self>) {
        self.buffer.load(text);
        self.scroll_offset = px(0.);
        self.changed(cx);
    }

    pub fn text(&self) -> String {
        self.buffer.text().to_string()
    }

    fn changed(&mut self, cx: &mut Context<Self>) {
        self.reset_cursor_blink(cx);
        cx.notify();
    }

    fn left(&mut self, _: &Left, _: &mut Window, cx: &mut Context<Self>) {
        self.buffer.step_left();
        self.changed(cx);
    }

    fn right(&mut self, _: &Right, _: &mut Window, cx: &mut Context<Self>) {
        self.buffer.step_right();
        self.changed(cx);
    }

    fn select_left(&mut self, _: &SelectLeft, _: &mut Window, cx: &mut Context<Self>) {
        self.buffer.extend_left();
        cx.notify();
    }

    fn select_right(&mut self, _: &SelectRight, _: &mut Window, cx: &mut Context<Self>) {
        self.buffer.extend_right();
        cx.notify();
    }

    fn select_all(&mut self, _: &SelectAll, _: &mut Window, cx: &mut Context<Self>) {
        self.buffer.select_all();
        cx.notify();
    }

    fn home(&mut self, _: &Home, _: &mut Window, cx: &mut Context<Self>) {
        self.buffer.move_to(0);
        self.changed(cx);
    }

    fn end(&mut self, _: &End, _: &mut Window, cx: &mut Context<Self>) {
        self.buffer.move_to(self.buffer.text().len());
        self.changed(cx);
    }

    fn backspace(&mut self, _: &Backspace, _: &mut Window, cx: &mut Context<Self>) {
        self.buffer.delete_backward();
        self.changed(cx);
    }

    fn delete(&mut self, _: &Delete, _: &mut Window, cx: &mut Context<Self>) {
        self.buffer.delete_forward();
        self.changed(cx);
    }

    fn on_mouse_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        self.is_selecting = true;
        self.focus_handle.focus(window);

        let offset = self.index_for_mouse_position(event.position);
        if event.modifiers.shift {
            self.buffer.select_to(offset);
        } else {
            self.buffer.move_to(offset);
        }
        self.changed(cx);
    }

    fn on_mouse_up(&mut self, _: &MouseUpEvent, _window: &mut Window, _: &mut Context<Self>) {
        self.is_selecting = false;
    }

    fn on_mouse_move(&mut self, event: &MouseMoveEvent, _: &mut Window, cx: &mut Context<Self>) {
        if self.is_selecting {
            self.buffer.select_to(self.index_for_mouse_position(event.position));
            cx.notify();
        }
    }

    fn show_character_palette(&mut self, _: &ShowCharacterPalette, window: &mut Window, _: &mut Context<Self>) {
        window.show_character_palette();
    }

    fn paste(&mut self, _: &Paste, _: &mut Window, cx: &mut Context<Self>) {
        if let Some(text) = cx.read_from_clipboard().and_then(|item| item.text()) {
            // Single line: newlines from the clipboard become spaces.
            self.buffer.replace(None, &text.replace('\n', " "));
            self.changed(cx);
        }
    }

    fn copy(&mut self, _: &Copy, _: &mut Window, cx: &mut Context<Self>) {
        if let Some(selected) = self.buffer.selected_text() {
            cx.write_to_clipboard(ClipboardItem::new_string(selected.to_string()));
        }
    }

    fn cut(&mut self, _: &Cut, _: &mut Window, cx: &mut Context<Self>) {
        if let Some(selected) = self.buffer.selected_text() {
            cx.write_to_clipboard(ClipboardItem::new_string(selected.to_string()));
            self.buffer.replace(None, "");
            self.changed(cx);
        }
    }

    fn reset_cursor_blink(&mut self, cx: &mut Context<Self>) {
        self.cursor_visible = true;
        self.blink_epoch += 1;
        let epoch = self.blink_epoch;
        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            loop {
                cx.background_executor().timer(CURSOR_BLINK_INTERVAL).await;
                let still_current = this
                    .update(cx, |this, cx| {
                        if this.blink_epoch != epoch {
                            return false;
                        }
                        this.cursor_visible = !this.cursor_visible;
                        cx.notify();
                        true
                    })
                    .unwrap_or(false);
                if !still_current {
                    break;
                }
            }
        })
        .detach();
    }

    fn index_for_mouse_position(&self, position: Point<Pixels>) -> usize {
        let (Some(bounds), Some(line)) = (self.last_bounds.as_ref(), self.last_layout.as_ref())
        else {
            return 0;
        };
        if self.buffer.text().is_empty() || position.y < bounds.top() {
            return 0;
        }
        if position.y > bounds.bottom() {
            return self.buffer.text().len();
        }
        line.closest_index_for_x(position.x - bounds.left() + self.scroll_offset)
    }
}

impl EntityInputHandler for TextInput {
    fn text_for_range(
        &mut self,
        range_utf16: Range<usize>,
        actual_range: &mut Option<Range<usize>>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<String> {
        let range = self.buffer.range_from_utf16(&range_utf16);
        actual_range.replace(self.buffer.range_to_utf16(&range));
        self.buffer.text().get(range).map(str::to_string)
    }

    fn selected_text_range(
        &mut self,
        _ignore_disabled_input: bool,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<UTF16Selection> {
        Some(UTF16Selection {
            range: self.buffer.range_to_utf16(&self.buffer.selection()),
            reversed: self.buffer.is_reversed(),
        })
    }

    fn marked_text_range(&self, _window: &mut Window, _cx: &mut Context<Self>) -> Option<Range<usize>> {
        self.buffer
            .marked()
            .map(|range| self.buffer.range_to_utf16(&range))
    }

    fn unmark_text(&mut self, _window: &mut Window, _cx: &mut Context<Self>) {
        self.buffer.unmark();
    }

    fn replace_text_in_range(
        &mut self,
        range_utf16: Option<Range<usize>>,
        new_text: &str,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let range = range_utf16.map(|range| self.buffer.range_from_utf16(&range));
        self.buffer.replace(range, new_text);
        self.changed(cx);
    }

    fn replace_and_mark_text_in_range(
        &mut self,
        range_utf16: Option<Range<usize>>,
        new_text: &str,
        new_selected_range_utf16: Option<Range<usize>>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let range = range_utf16.map(|range| self.buffer.range_from_utf16(&range));
        // Offsets inside the composed text are relative to `new_text`.
        let inner = new_selected_range_utf16.map(|range| {
            let composed = EditBuffer {
                text: new_text.to_string(),
                ..EditBuffer::default()
            };
            composed.range_from_utf16(&range)
        });
        self.buffer.replace_and_mark(range, new_text, inner);
        cx.notify();
    }

    fn bounds_for_range(
        &mut self,
        range_utf16: Range<usize>,
        bounds: Bounds<Pixels>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<Bounds<Pixels>> {
        let layout = self.last_layout.as_ref()?;
        let range = self.buffer.range_from_utf16(&range_utf16);
        Some(Bounds::from_corners(
            point(bounds.left() + layout.x_for_index(range.start), bounds.top()),
            point(bounds.left() + layout.x_for_index(range.end), bounds.bottom()),
        ))
    }

    fn character_index_for_point(
        &mut self,
        point: gpui::Point<Pixels>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<usize> {
        let local = self.last_bounds?.localize(&point)?;
        let layout = self.last_layout.as_ref()?;
        let index = layout.index_for_x(point.x - local.x)?;
        Some(self.buffer.to_utf16(index))
    }
}

/// The painted line of a [`TextInput`]: text or placeholder, selection and cursor.
struct InputLine {
    input: Entity<TextInput>,
}

struct InputLineLayout {
    line: Option<ShapedLine>,
    cursor: Option<PaintQuad>,
    selection: Option<PaintQuad>,
    scroll_offset: Pixels,
}

impl IntoElement for InputLine {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

impl Element for InputLine {
    type RequestLayoutState = ();
    type PrepaintState = InputLineLayout;

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static core::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (LayoutId, Self::RequestLayoutState) {
        let mut style = Style::default();
        style.size.width = relative(1.).into();
        style.size.height = window.line_height().into();
        (window.request_layout(style, [], cx), ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        cx: &mut App,
    ) -> Self::PrepaintState {
        let input = self.input.read(cx);
        let buffer = &input.buffer;
        let theme = cx.global::<Theme>();
        let style = window.text_style();
        let is_empty = buffer.text().is_empty();

        let (shown, color) = if is_empty {
            (input.placeholder.clone(), Hsla::from(theme.subtext))
        } else {
            (SharedString::from(buffer.text().to_string()), style.color)
        };

        let base = TextRun {
            len: shown.len(),
            font: style.font(),
            color,
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let runs = match buffer.marked() {
            // Composition text is underlined.
            Some(marked) if !is_empty => [
                0..marked.start,
                marked.clone(),
                marked.end..shown.len(),
            ]
            .into_iter()
            .filter(|span| !span.is_empty())
            .map(|span| TextRun {
                len: span.len(),
                underline: (span == marked).then_some(UnderlineStyle {
                    color: Some(color),
                    thickness: px(1.0),
                    wavy: false,
                }),
                ..base.clone()
            })
            .collect(),
            _ if shown.is_empty() => Vec::new(),
            _ => vec![base],
        };

        let font_size = style.font_size.to_pixels(window.rem_size());
        let line = window.text_system().shape_line(shown, font_size, &runs, None);

        let cursor_x = if is_empty {
            px(0.)
        } else {
            line.x_for_index(buffer.cursor())
        };
        let scroll_offset = scroll_to_cursor(cursor_x, input.scroll_offset, bounds.size.width - px(2.));

        let selection = buffer.selection();
        let (selection, cursor) = if selection.is_empty() || is_empty {
            let cursor = input.cursor_visible.then(|| {
                fill(
                    Bounds::new(
                        point(bounds.left() + cursor_x - scroll_offset, bounds.top()),
                        size(px(CURSOR_WIDTH), bounds.size.height),
                    ),
                    theme.accent,
                )
            });
            (None, cursor)
        } else {
            let mut highlight = theme.accent;
            highlight.a = 0.2;
            let quad = fill(
                Bounds::from_corners(
                    point(bounds.left() + line.x_for_index(selection.start) - scroll_offset, bounds.top()),
                    point(bounds.left() + line.x_for_index(selection.end) - scroll_offset, bounds.bottom()),
                ),
                highlight,
            );
            (Some(quad), None)
        };

        InputLineLayout {
            line: Some(line),
            cursor,
            selection,
            scroll_offset,
        }
    }

    fn paint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        layout: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        let focus_handle = self.input.read(cx).focus_handle.clone();
        window.handle_input(
            &focus_handle,
            ElementInputHandler::new(bounds, self.input.clone()),
            cx,
        );
        if let Some(selection) = layout.selection.take() {
            window.paint_quad(selection)
        }
        let Some(line) = layout.line.take() else {
            return;
        };
        let scroll_offset = layout.scroll_offset;

        let origin = point(bounds.origin.x - scroll_offset, bounds.origin.y);
        if let Err(err) = line.paint(origin, window.line_height(), window, cx) {
            log::warn!("failed to paint input text: {}", err);
        }

        if focus_handle.is_focused(window) {
            if let Some(cursor) = layout.cursor.take() {
                window.paint_quad(cursor);
            }
        }

        self.input.update(cx, |input, _cx| {
            input.last_layout = Some(line);
            input.last_bounds = Some(bounds);
            input.scroll_offset = scroll_offset;
        });
    }
}

impl Render for TextInput {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .key_context("TextInput")
            .track_focus(&self.focus_handle)
            .cursor(CursorStyle::IBeam)
            .on_action(cx.listener(Self::backspace))
            .on_action(cx.listener(Self::delete))
            .on_action(cx.listener(Self::left))
            .on_action(cx.listener(Self::right))
            .on_action(cx.listener(Self::select_left))
            .on_action(cx.listener(Self::select_right))
            .on_action(cx.listener(Self::select_all))
            .on_action(cx.listener(Self::home))
            .on_action(cx.listener(Self::end))
            .on_action(cx.listener(Self::show_character_palette))
            .on_action(cx.listener(Self::paste))
            .on_action(cx.listener(Self::cut))
            .on_action(cx.listener(Self::copy))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::on_mouse_up))
            .on_mouse_up_out(MouseButton::Left, cx.listener(Self::on_mouse_up))
            .on_mouse_move(cx.listener(Self::on_mouse_move))
            .size_full()
            .overflow_hidden()
            .line_height(px(16.))
            .text_size(px(12.))
            .child(InputLine {
                input: cx.entity().clone(),
            })
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::rust_2024::test;

    fn buffer(text: &str) -> EditBuffer {
        let mut buffer = EditBuffer::default();
        buffer.load(text.to_string());
        buffer
    }

    #[test]
    fn load_selects_everything() {
        let buffer = buffer("Pending");
        assert_eq!(buffer.selection(), 0..7);
        assert_eq!(buffer.selected_text(), Some("Pending"));
    }

    #[test]
    fn typing_over_a_full_selection_replaces_it() {
        let mut buffer = buffer("Pending");
        buffer.replace(None, "Done");
        assert_eq!(buffer.text(), "Done");
        assert_eq!(buffer.selection(), 4..4);
        assert_eq!(buffer.selected_text(), None);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut buffer = buffer("abc");
        buffer.move_to(0);
        buffer.delete_backward();
        assert_eq!(buffer.text(), "abc");
        buffer.move_to(3);
        buffer.delete_forward();
        assert_eq!(buffer.text(), "abc");
    }

    #[test]
    fn delete_removes_whole_graphemes() {
        // "e" followed by a combining acute accent is one grapheme.
        let mut buffer = buffer("cafe\u{301}!");
        buffer.move_to(buffer.text().len() - 1);
        buffer.delete_backward();
        assert_eq!(buffer.text(), "caf!");
        buffer.step_left();
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn selection_flips_when_dragged_past_the_anchor() {
        let mut buffer = buffer("abcdef");
        buffer.move_to(3);
        buffer.extend_right();
        assert_eq!(buffer.selection(), 3..4);
        buffer.select_to(1);
        assert_eq!(buffer.selection(), 1..3);
        assert_eq!(buffer.cursor(), 1);
        buffer.extend_left();
        assert_eq!(buffer.selection(), 0..3);
    }

    #[test]
    fn arrows_collapse_a_selection_first() {
        let mut buffer = buffer("abcdef");
        buffer.step_left();
        assert_eq!(buffer.selection(), 0..0);
        buffer.select_all();
        buffer.step_right();
        assert_eq!(buffer.selection(), 6..6);
    }

    #[test]
    fn utf16_offsets_account_for_surrogate_pairs() {
        let buffer = buffer("a😀b");
        assert_eq!(buffer.to_utf16(1), 1);
        assert_eq!(buffer.to_utf16(5), 3);
        assert_eq!(buffer.from_utf16(3), 5);
        assert_eq!(buffer.from_utf16(10), 6);
        assert_eq!(buffer.range_to_utf16(&(0..6)), 0..4);
    }

    #[test]
    fn composition_marks_then_commits() {
        let mut buffer = buffer("");
        buffer.replace_and_mark(None, "ni", None);
        assert_eq!(buffer.marked(), Some(0..2));
        buffer.replace(None, "你");
        assert_eq!(buffer.text(), "你");
        assert_eq!(buffer.marked(), None);
        assert_eq!(buffer.cursor(), "你".len());
    }

    #[test]
    fn out_of_range_offsets_are_clamped() {
        let mut buffer = buffer("ab");
        buffer.move_to(10);
        assert_eq!(buffer.cursor(), 2);
        buffer.replace(Some(1..10), "z");
        assert_eq!(buffer.text(), "az");
    }

    #[test]
    fn scroll_follows_the_cursor() {
        assert_eq!(scroll_to_cursor(px(50.), px(0.), px(100.)), px(0.));
        assert_eq!(scroll_to_cursor(px(150.), px(0.), px(100.)), px(50.));
        assert_eq!(scroll_to_cursor(px(20.), px(50.), px(100.)), px(20.));
        assert_eq!(scroll_to_cursor(px(0.), px(-5.), px(100.)), px(0.));
    }
}
