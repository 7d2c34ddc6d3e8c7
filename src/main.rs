mod assets;
mod config;
mod dataset;
mod grid;
mod input;
mod menu;
mod navbar;
mod resize;
mod sheet;
mod state;
mod tabs;
mod theme;
mod toolbar;

use gpui::*;

use assets::Assets;
use config::SheetConfig;
use grid::*;
use input::*;
use theme::Theme;

fn main() {
    env_logger::init();

    let config = match SheetConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{}, falling back to the default sheet", err);
            SheetConfig::default()
        }
    };
    log::info!(
        "starting with a {}x{} sheet, columns {}px wide",
        config.rows,
        config.cols,
        config.default_column_width
    );

    Application::new()
        .with_assets(Assets)
        .run(move |cx| {
            // Initialize theme
            Theme::init(cx);

            // Set up menu bar
            menu::setup_menu(cx);

            // Register keybindings
            cx.bind_keys([
                // Normal mode navigation
                KeyBinding::new("up", MoveUp, Some("NormalMode")),
                KeyBinding::new("down", MoveDown, Some("NormalMode")),
                KeyBinding::new("left", MoveLeft, Some("NormalMode")),
                KeyBinding::new("right", MoveRight, Some("NormalMode")),
                KeyBinding::new("tab", MoveNext, Some("NormalMode")),
                KeyBinding::new("enter", EnterEditMode, Some("NormalMode")),
                KeyBinding::new("escape", CancelEdit, Some("NormalMode")),

                // Edit mode
                KeyBinding::new("enter", CommitEdit, Some("EditMode")),
                KeyBinding::new("escape", CancelEdit, Some("EditMode")),

                // Text editing
                KeyBinding::new("backspace", Backspace, Some("TextInput")),
                KeyBinding::new("delete", Delete, Some("TextInput")),
                KeyBinding::new("left", Left, Some("TextInput")),
                KeyBinding::new("right", Right, Some("TextInput")),
                KeyBinding::new("shift-left", SelectLeft, Some("TextInput")),
                KeyBinding::new("shift-right", SelectRight, Some("TextInput")),
                KeyBinding::new("cmd-a", SelectAll, Some("TextInput")),
                KeyBinding::new("home", Home, Some("TextInput")),
                KeyBinding::new("end", End, Some("TextInput")),
                KeyBinding::new("cmd-left", Home, Some("TextInput")),
                KeyBinding::new("cmd-right", End, Some("TextInput")),
                KeyBinding::new("ctrl-cmd-space", ShowCharacterPalette, Some("TextInput")),
                KeyBinding::new("cmd-v", Paste, Some("TextInput")),
                KeyBinding::new("cmd-c", Copy, Some("TextInput")),
                KeyBinding::new("cmd-x", Cut, Some("TextInput")),

                // Global
                KeyBinding::new("cmd-shift-t", ToggleToolbar, None),
                KeyBinding::new("cmd-q", Quit, None),
            ]);

            // Register quit action
            cx.on_action::<Quit>(|_, cx| {
                log::info!("quitting");
                cx.quit();
            });

            // Create the main window
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                    None,
                    size(px(1440.), px(900.)),
                    cx,
                ))),
                titlebar: Some(TitlebarOptions {
                    title: Some("Job Requests".into()),
                    appears_transparent: false,
                    ..Default::default()
                }),
                window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
                ..Default::default()
            };

            if let Err(err) = cx.open_window(window_options, |window, cx| {
                cx.new(|cx| SpreadsheetApp::new(&config, window, cx))
            }) {
                log::error!("failed to open window: {}", err);
                cx.quit();
            }
        });
}
