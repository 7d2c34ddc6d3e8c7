use gpui::prelude::FluentBuilder;
use gpui::*;

use crate::input::TextInput;
use crate::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug)]
pub struct NavBarState {
    breadcrumbs: Vec<Breadcrumb>,
    search_query: String,
    search_focused: bool,
    notification_count: usize,
    user_name: &'static str,
    user_email: &'static str,
}

impl Default for NavBarState {
    fn default() -> Self {
        let crumb = |label, href, active| Breadcrumb { label, href, active };
        Self {
            breadcrumbs: vec![
                crumb("Workspace", "#workspace", false),
                crumb("Folder 2", "#folder2", false),
                crumb("Spreadsheet 3", "#spreadsheet3", true),
            ],
            search_query: String::new(),
            search_focused: false,
            notification_count: 2,
            user_name: "John Doe",
            user_email: "john.doe@companyname.com",
        }
    }
}

impl NavBarState {
    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn notification_count(&self) -> usize {
        self.notification_count
    }

    /// Returns true when the query actually changed.
    pub fn set_search_query(&mut self, query: &str) -> bool {
        if self.search_query == query {
            return false;
        }
        self.search_query = query.to_string();
        log::info!("search query updated: {:?}", self.search_query);
        true
    }

    pub fn set_search_focused(&mut self, focused: bool) {
        if self.search_focused != focused {
            self.search_focused = focused;
            log::debug!("search input {}", if focused { "focused" } else { "blurred" });
        }
    }

    /// Mark notifications as read. Returns how many were unread.
    pub fn open_notifications(&mut self) -> usize {
        let unread = std::mem::take(&mut self.notification_count);
        log::info!("notifications opened ({} unread)", unread);
        unread
    }
}

pub struct NavBar {
    state: NavBarState,
    search: Entity<TextInput>,
    _subscriptions: Vec<Subscription>,
}

impl NavBar {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let search = cx.new(|cx| TextInput::new(cx).with_placeholder("Search within sheet"));
        let search_focus = search.read(cx).focus_handle.clone();

        let subscriptions = vec![
            cx.observe(&search, |this, search, cx| {
                let query = search.read(cx).text();
                if this.state.set_search_query(&query) {
                    cx.notify();
                }
            }),
            cx.on_focus(&search_focus, window, |this, _window, cx| {
                this.state.set_search_focused(true);
                cx.notify();
            }),
            cx.on_blur(&search_focus, window, |this, _window, cx| {
                this.state.set_search_focused(false);
                cx.notify();
            }),
        ];

        Self {
            state: NavBarState::default(),
            search,
            _subscriptions: subscriptions,
        }
    }

    fn render_breadcrumbs(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let count = self.state.breadcrumbs().len();
        let (text, muted, hover) = (theme.text, theme.muted, theme.hover);

        div()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(4.))
            .children(self.state.breadcrumbs().iter().enumerate().map(|(index, crumb)| {
                let (label, href) = (crumb.label, crumb.href);
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap(px(4.))
                    .child(
                        div()
                            .id(ElementId::Name(format!("crumb-{}", href).into()))
                            .text_size(px(14.))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(if crumb.active { text } else { muted })
                            .hover(|d| d.text_color(text))
                            .child(label)
                            .on_click(move |_, _, _| {
                                log::info!("breadcrumb navigation: {} ({})", label, href)
                            }),
                    )
                    .when(crumb.active, |d| {
                        d.child(
                            div()
                                .id("more-options")
                                .size(px(24.))
                                .p(px(2.))
                                .ml(px(4.))
                                .rounded(px(4.))
                                .hover(|d| d.bg(hover))
                                .child(svg().path("icons/more.svg").size(px(20.)).text_color(text))
                                .on_click(|_, _, _| log::info!("more options menu opened")),
                        )
                    })
                    .when(index + 1 < count, |d| {
                        d.child(svg().path("icons/chevron-right.svg").size(px(12.)).text_color(muted))
                    })
            }))
    }

    fn render_search(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let focused = self.state.is_search_focused();
        let hover = rgb(0xf0f0f0);

        div()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(8.))
            .p(px(12.))
            .w(px(220.))
            .rounded(px(6.))
            .when(focused, |d| d.bg(theme.brand_light).border_2().border_color(theme.brand))
            .when(!focused, |d| d.bg(theme.sheet).hover(|d| d.bg(hover)))
            .child(svg().path("icons/search.svg").size(px(16.)).text_color(theme.subtext))
            .child(div().flex_1().h(px(16.)).child(self.search.clone()))
    }

    fn render_notifications(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let count = self.state.notification_count();

        div()
            .id("notifications")
            .relative()
            .p(px(8.))
            .rounded(px(8.))
            .bg(theme.surface)
            .hover(|d| d.bg(theme.hover))
            .child(svg().path("icons/bell.svg").size(px(24.)).text_color(theme.text))
            .when(count > 0, |d| {
                d.child(
                    div()
                        .absolute()
                        .top_0()
                        .left(px(20.))
                        .size(px(20.))
                        .flex()
                        .items_center()
                        .justify_center()
                        .rounded_full()
                        .border_2()
                        .border_color(theme.surface)
                        .bg(theme.brand)
                        .text_color(theme.sheet)
                        .text_size(px(10.))
                        .child(count.to_string()),
                )
            })
            .on_click(cx.listener(|this, _, _, cx| {
                if this.state.open_notifications() > 0 {
                    cx.notify();
                }
            }))
    }

    fn render_profile(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .id("profile")
            .flex()
            .flex_row()
            .items_center()
            .gap(px(8.))
            .pl(px(8.))
            .pr(px(12.))
            .py(px(6.))
            .rounded(px(8.))
            .bg(theme.surface)
            .hover(|d| d.bg(theme.hover))
            .child(
                div()
                    .size(px(28.))
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_full()
                    .bg(theme.brand_light)
                    .text_color(theme.brand_dark)
                    .text_size(px(12.))
                    .child(initials(self.state.user_name)),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .max_w(px(120.))
                    .child(
                        div()
                            .text_size(px(12.))
                            .text_color(theme.text)
                            .child(self.state.user_name),
                    )
                    .child(
                        div()
                            .text_size(px(10.))
                            .text_color(theme.subtext)
                            .overflow_hidden()
                            .child(self.state.user_email),
                    ),
            )
            .on_click(|_, _, _| log::info!("user profile menu opened"))
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

impl Render for NavBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .px(px(16.))
            .py(px(8.))
            .w_full()
            .bg(theme.surface)
            .border_b_1()
            .border_color(theme.border)
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap(px(16.))
                    .child(
                        div()
                            .id("logo")
                            .hover(|d| d.opacity(0.8))
                            .child(svg().path("icons/panel.svg").size(px(24.)).text_color(theme.brand))
                            .on_click(|_, _, _| log::info!("logo clicked, navigating home")),
                    )
                    .child(self.render_breadcrumbs(cx)),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap(px(4.))
                    .child(self.render_search(cx))
                    .child(self.render_notifications(cx))
                    .child(self.render_profile(cx)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::rust_2024::test;

    #[test]
    fn last_breadcrumb_is_active() {
        let state = NavBarState::default();
        let active: Vec<_> = state
            .breadcrumbs()
            .iter()
            .filter(|crumb| crumb.active)
            .map(|crumb| crumb.label)
            .collect();
        assert_eq!(active, vec!["Spreadsheet 3"]);
    }

    #[test]
    fn opening_notifications_clears_the_count() {
        let mut state = NavBarState::default();
        assert_eq!(state.notification_count(), 2);
        assert_eq!(state.open_notifications(), 2);
        assert_eq!(state.notification_count(), 0);
        assert_eq!(state.open_notifications(), 0);
    }

    #[test]
    fn search_query_reports_changes_only() {
        let mut state = NavBarState::default();
        assert!(!state.set_search_query(""));
        assert!(state.set_search_query("press"));
        assert!(!state.set_search_query("press"));
        assert_eq!(state.search_query(), "press");
    }

    #[test]
    fn search_focus_tracks_latest_event() {
        let mut state = NavBarState::default();
        state.set_search_focused(true);
        assert!(state.is_search_focused());
        state.set_search_focused(false);
        assert!(!state.is_search_focused());
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials(""), "");
    }
}
