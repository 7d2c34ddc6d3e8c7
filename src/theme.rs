use gpui::*;

#[cfg(target_os = "macos")]
use objc2::rc::Retained;
#[cfg(target_os = "macos")]
use objc2_app_kit::NSColor;

use crate::dataset::{HeaderTint, Priority, Status};

pub struct Theme {
    pub text: Rgba,
    pub subtext: Rgba,
    pub muted: Rgba,
    pub background: Rgba,
    pub surface: Rgba,
    pub sheet: Rgba,
    pub hover: Rgba,
    pub border: Rgba,
    pub grid_line: Rgba,
    pub dashed: Rgba,
    pub header: Rgba,
    pub group_box: Rgba,
    pub brand: Rgba,
    pub brand_dark: Rgba,
    pub brand_light: Rgba,
    pub toggle_active: Rgba,
    pub toggle_active_text: Rgba,
    pub accent: Rgba,
}

impl Global for Theme {}

/// Get the system accent color on macOS
#[cfg(target_os = "macos")]
fn get_system_accent_color() -> Rgba {
    let accent_color: Retained<NSColor> = NSColor::controlAccentColor();
    if let Some(rgb_color) = accent_color.colorUsingColorSpace(objc2_app_kit::NSColorSpace::sRGBColorSpace().as_ref()) {
        let r = rgb_color.redComponent() as f32;
        let g = rgb_color.greenComponent() as f32;
        let b = rgb_color.blueComponent() as f32;
        let a = rgb_color.alphaComponent() as f32;
        return rgba(
            ((r * 255.0) as u32) << 24
                | ((g * 255.0) as u32) << 16
                | ((b * 255.0) as u32) << 8
                | (a * 255.0) as u32,
        );
    }
    rgb(0x3b82f6)
}

#[cfg(not(target_os = "macos"))]
fn get_system_accent_color() -> Rgba {
    rgb(0x3b82f6)
}

/// Background, label and header-row colours for a column family.
pub struct TintColors {
    pub header_bg: Rgba,
    pub header_text: Rgba,
    pub group_bg: Rgba,
    pub group_text: Rgba,
}

impl Theme {
    pub fn init(app: &mut App) {
        app.set_global(Theme::get_light());
    }

    pub fn get_light() -> Theme {
        Theme {
            text: rgb(0x121212),
            subtext: rgb(0x757575),
            muted: rgb(0xafafaf),
            background: rgb(0xf8fafc),
            surface: rgb(0xffffff),
            sheet: rgb(0xf6f6f6),
            hover: rgb(0xf3f4f6),
            border: rgb(0xeeeeee),
            grid_line: rgb(0xe5e7eb),
            dashed: rgb(0xcbcbcb),
            header: rgb(0xeeeeee),
            group_box: rgb(0xe5e7eb),
            brand: rgb(0x4b6a4f),
            brand_dark: rgb(0x3e5741),
            brand_light: rgb(0xe8f0e9),
            toggle_active: rgb(0xdbeafe),
            toggle_active_text: rgb(0x1d4ed8),
            accent: get_system_accent_color(),
        }
    }

    pub fn tint(&self, tint: HeaderTint) -> TintColors {
        match tint {
            HeaderTint::Neutral => TintColors {
                header_bg: self.header,
                header_text: self.subtext,
                group_bg: self.surface,
                group_text: rgb(0x4a4a4a),
            },
            HeaderTint::Green => TintColors {
                header_bg: rgb(0xe8f0e9),
                header_text: rgb(0x666c66),
                group_bg: rgb(0xd2e0d4),
                group_text: rgb(0x505450),
            },
            HeaderTint::Purple => TintColors {
                header_bg: rgb(0xeae3fc),
                header_text: rgb(0x645c7f),
                group_bg: rgb(0xdccffc),
                group_text: rgb(0x463e59),
            },
            HeaderTint::Orange => TintColors {
                header_bg: rgb(0xffe9e0),
                header_text: rgb(0x8c6b61),
                group_bg: rgb(0xfac2af),
                group_text: rgb(0x695149),
            },
        }
    }

    /// (background, text) for a status badge.
    pub fn status_badge(&self, status: Option<Status>) -> (Rgba, Rgba) {
        match status {
            Some(Status::InProcess) => (rgb(0xfff3d6), rgb(0x84640a)),
            Some(Status::NeedToStart) => (rgb(0xe2e8f0), rgb(0x475569)),
            Some(Status::Complete) => (rgb(0xd2f2e2), rgb(0x0a6d3c)),
            Some(Status::Blocked) => (rgb(0xffe1dd), rgb(0xc12119)),
            None => (self.header, self.subtext),
        }
    }

    pub fn priority_color(&self, priority: Option<Priority>) -> Rgba {
        match priority {
            Some(Priority::High) => rgb(0xef4c43),
            Some(Priority::Medium) => rgb(0xc1920f),
            Some(Priority::Low) => rgb(0x1a8cff),
            None => self.text,
        }
    }
}
