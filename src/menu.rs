use gpui::*;

use crate::grid::{Quit, ToggleToolbar};

/// Set up the application menu bar
pub fn setup_menu(cx: &mut App) {
    cx.on_action::<About>(|_, _| {
        log::info!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    });

    cx.set_menus(vec![
        Menu {
            name: "Job Requests".into(),
            items: vec![
                MenuItem::action("About Job Requests", About),
                MenuItem::separator(),
                MenuItem::action("Quit", Quit),
            ],
        },
        Menu {
            name: "View".into(),
            items: vec![MenuItem::action("Toggle Tool Bar", ToggleToolbar)],
        },
    ]);
}

actions!(menu, [About]);
