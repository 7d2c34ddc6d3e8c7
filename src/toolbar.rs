use std::collections::HashSet;

use gpui::prelude::FluentBuilder;
use gpui::*;

use crate::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    HideFields,
    Sort,
    Filter,
    CellView,
    Import,
    Export,
    Share,
}

impl ToolbarAction {
    pub const LEFT: [ToolbarAction; 4] = [
        ToolbarAction::HideFields,
        ToolbarAction::Sort,
        ToolbarAction::Filter,
        ToolbarAction::CellView,
    ];
    pub const RIGHT: [ToolbarAction; 3] = [
        ToolbarAction::Import,
        ToolbarAction::Export,
        ToolbarAction::Share,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarAction::HideFields => "Hide fields",
            ToolbarAction::Sort => "Sort",
            ToolbarAction::Filter => "Filter",
            ToolbarAction::CellView => "Cell view",
            ToolbarAction::Import => "Import",
            ToolbarAction::Export => "Export",
            ToolbarAction::Share => "Share",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolbarAction::HideFields => "icons/eye.svg",
            ToolbarAction::Sort => "icons/arrow-up-down.svg",
            ToolbarAction::Filter => "icons/filter.svg",
            ToolbarAction::CellView => "icons/layout.svg",
            ToolbarAction::Import => "icons/download.svg",
            ToolbarAction::Export => "icons/upload.svg",
            ToolbarAction::Share => "icons/share.svg",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ToolbarState {
    expanded: bool,
    active: HashSet<ToolbarAction>,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            expanded: true,
            active: HashSet::new(),
        }
    }
}

impl ToolbarState {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_active(&self, action: ToolbarAction) -> bool {
        self.active.contains(&action)
    }

    /// Flip an action on or off. Returns the new state.
    pub fn toggle(&mut self, action: ToolbarAction) -> bool {
        let now_active = !self.active.remove(&action);
        if now_active {
            self.active.insert(action);
        }
        log::info!(
            "{} {}",
            action.label(),
            if now_active { "activated" } else { "deactivated" }
        );
        now_active
    }

    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        log::info!("toolbar {}", if self.expanded { "expanded" } else { "collapsed" });
        self.expanded
    }
}

pub struct Toolbar {
    state: ToolbarState,
}

impl Toolbar {
    pub fn new() -> Self {
        Self {
            state: ToolbarState::default(),
        }
    }

    pub fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.state.toggle_expanded();
        cx.notify();
    }

    fn render_action(&self, action: ToolbarAction, outlined: bool, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let active = self.state.is_active(action);
        let text_color = if active {
            theme.toggle_active_text
        } else if outlined {
            rgb(0x545454)
        } else {
            theme.text
        };

        div()
            .id(ElementId::Name(format!("toolbar-{}", action.label()).into()))
            .flex()
            .flex_row()
            .items_center()
            .gap(px(4.))
            .pl(px(8.))
            .pr(px(12.))
            .py(px(8.))
            .rounded(px(6.))
            .when(outlined, |d| d.border_1().border_color(theme.border))
            .bg(if active { theme.toggle_active } else { theme.surface })
            .hover(|d| d.bg(theme.hover))
            .text_size(px(14.))
            .text_color(text_color)
            .child(svg().path(action.icon()).size(px(20.)).text_color(text_color))
            .child(action.label())
            .on_click(cx.listener(move |this, _, _, cx| {
                this.state.toggle(action);
                cx.notify();
            }))
    }
}

impl Render for Toolbar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let expanded = self.state.is_expanded();
        let border = theme.border;
        let surface = theme.surface;
        let brand = theme.brand;
        let brand_dark = theme.brand_dark;
        let text = theme.text;
        let (toggle_bg, toggle_text) = if expanded {
            (theme.toggle_active, theme.toggle_active_text)
        } else {
            (theme.surface, theme.text)
        };

        div()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(8.))
            .px(px(8.))
            .py(px(6.))
            .w_full()
            .bg(surface)
            .border_b_1()
            .border_color(border)
            .child(
                div()
                    .id("toolbar-toggle")
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap(px(4.))
                    .p(px(8.))
                    .rounded(px(4.))
                    .bg(toggle_bg)
                    .text_size(px(14.))
                    .text_color(text)
                    .child("Tool bar")
                    .child(
                        svg()
                            .path(if expanded { "icons/chevron-up.svg" } else { "icons/chevron-down.svg" })
                            .size(px(16.))
                            .text_color(toggle_text),
                    )
                    .on_click(cx.listener(|this, _, _, cx| this.toggle_expanded(cx))),
            )
            .child(div().w(px(1.)).h(px(24.)).bg(border))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap(px(4.))
                    .flex_1()
                    .when(expanded, |d| {
                        d.children(
                            ToolbarAction::LEFT
                                .into_iter()
                                .map(|action| self.render_action(action, false, cx))
                                .collect::<Vec<_>>(),
                        )
                    }),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap(px(8.))
                    .children(
                        ToolbarAction::RIGHT
                            .into_iter()
                            .map(|action| self.render_action(action, true, cx))
                            .collect::<Vec<_>>(),
                    )
                    .child(
                        div()
                            .id("new-action")
                            .flex()
                            .flex_row()
                            .items_center()
                            .gap(px(4.))
                            .px(px(24.))
                            .py(px(8.))
                            .rounded(px(6.))
                            .bg(brand)
                            .hover(|d| d.bg(brand_dark))
                            .text_size(px(14.))
                            .text_color(surface)
                            .child(svg().path("icons/split.svg").size(px(20.)).text_color(surface))
                            .child("New Action")
                            .on_click(|_, _, _| log::info!("new action requested")),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::rust_2024::test;

    #[test]
    fn starts_expanded_with_nothing_active() {
        let state = ToolbarState::default();
        assert!(state.is_expanded());
        for action in ToolbarAction::LEFT.into_iter().chain(ToolbarAction::RIGHT) {
            assert!(!state.is_active(action));
        }
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = ToolbarState::default();
        assert!(state.toggle(ToolbarAction::Sort));
        assert!(state.toggle(ToolbarAction::Share));
        assert!(!state.toggle(ToolbarAction::Sort));
        assert!(!state.is_active(ToolbarAction::Sort));
        assert!(state.is_active(ToolbarAction::Share));
    }

    #[test]
    fn collapsing_keeps_toggle_state() {
        let mut state = ToolbarState::default();
        state.toggle(ToolbarAction::Filter);
        assert!(!state.toggle_expanded());
        assert!(state.is_active(ToolbarAction::Filter));
        assert!(state.toggle_expanded());
    }
}
