use gpui::prelude::FluentBuilder;
use gpui::*;

use crate::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabChange {
    pub from: &'static str,
    pub to: &'static str,
    pub count: usize,
}

#[derive(Clone, Debug)]
pub struct TabsState {
    tabs: Vec<Tab>,
    active: usize,
}

impl Default for TabsState {
    fn default() -> Self {
        let tab = |id, label, count| Tab { id, label, count };
        Self {
            tabs: vec![
                tab("all", "All Orders", 125),
                tab("pending", "Pending", 23),
                tab("reviewed", "Reviewed", 45),
                tab("arrived", "Arrived", 57),
            ],
            active: 0,
        }
    }
}

impl TabsState {
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().id == id
    }

    /// Activate the tab with `id`. Unknown ids leave the selection alone.
    pub fn select(&mut self, id: &str) -> Option<TabChange> {
        let index = self.tabs.iter().position(|tab| tab.id == id)?;
        let change = TabChange {
            from: self.active().id,
            to: self.tabs[index].id,
            count: self.tabs[index].count,
        };
        self.active = index;
        log::info!(
            "tab changed from {:?} to {:?} ({} items)",
            change.from,
            change.to,
            change.count
        );
        Some(change)
    }
}

pub struct TabBar {
    state: TabsState,
}

impl TabBar {
    pub fn new() -> Self {
        Self {
            state: TabsState::default(),
        }
    }
}

impl Render for TabBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let surface = theme.surface;
        let border = theme.border;
        let brand = theme.brand;
        let brand_dark = theme.brand_dark;
        let brand_light = theme.brand_light;
        let subtext = theme.subtext;
        let text = theme.text;
        let hover = theme.hover;

        let tabs = self.state.tabs().to_vec();

        div()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(24.))
            .pl(px(32.))
            .pr(px(16.))
            .pt(px(4.))
            .w_full()
            .bg(surface)
            .border_t_1()
            .border_color(border)
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_start()
                    .children(tabs.into_iter().map(|tab| {
                        let active = self.state.is_active(tab.id);
                        let id = tab.id;
                        div()
                            .id(ElementId::Name(format!("tab-{}", id).into()))
                            .flex()
                            .flex_row()
                            .items_center()
                            .gap(px(8.))
                            .px(px(16.))
                            .py(px(10.))
                            .text_size(px(16.))
                            .when(active, |d| {
                                d.bg(brand_light)
                                    .border_t_2()
                                    .border_color(brand)
                                    .text_color(brand_dark)
                                    .font_weight(FontWeight::SEMIBOLD)
                            })
                            .when(!active, |d| {
                                d.text_color(subtext)
                                    .font_weight(FontWeight::MEDIUM)
                                    .hover(|d| d.bg(hover).text_color(text))
                            })
                            .child(tab.label)
                            .when(active, |d| {
                                d.child(
                                    div()
                                        .ml(px(4.))
                                        .px(px(8.))
                                        .py(px(2.))
                                        .rounded_full()
                                        .bg(brand)
                                        .text_color(surface)
                                        .text_size(px(12.))
                                        .child(tab.count.to_string()),
                                )
                            })
                            .on_click(cx.listener(move |this, _, _, cx| {
                                if this.state.select(id).is_some() {
                                    cx.notify();
                                }
                            }))
                    }))
                    .child(
                        div()
                            .id("add-tab")
                            .flex()
                            .items_center()
                            .justify_center()
                            .p(px(4.))
                            .m(px(8.))
                            .rounded(px(4.))
                            .bg(surface)
                            .hover(|d| d.bg(hover))
                            .child(svg().path("icons/plus.svg").size(px(20.)).text_color(subtext))
                            .on_click(|_, _, _| log::info!("add tab requested")),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::rust_2024::test;

    #[test]
    fn all_orders_is_active_by_default() {
        let state = TabsState::default();
        assert_eq!(state.active().id, "all");
        assert_eq!(state.active().count, 125);
        assert_eq!(state.tabs().len(), 4);
    }

    #[test]
    fn select_reports_the_change() {
        let mut state = TabsState::default();
        let change = state.select("reviewed").unwrap();
        assert_eq!(
            change,
            TabChange {
                from: "all",
                to: "reviewed",
                count: 45
            }
        );
        assert!(state.is_active("reviewed"));
        assert!(!state.is_active("all"));
    }

    #[test]
    fn unknown_tab_is_ignored() {
        let mut state = TabsState::default();
        state.select("pending");
        assert_eq!(state.select("archived"), None);
        assert!(state.is_active("pending"));
    }
}
