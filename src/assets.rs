use std::borrow::Cow;

use gpui::{AssetSource, SharedString};
use rust_embed::RustEmbed;

/// Icons compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        let asset = Self::get(path);
        if asset.is_none() {
            log::warn!("missing asset: {}", path);
        }
        Ok(asset.map(|f| f.data))
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter(|p| p.starts_with(path))
            .map(SharedString::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCED: &[&str] = &[
        "icons/briefcase.svg",
        "icons/calendar.svg",
        "icons/chevron-circle.svg",
        "icons/person.svg",
        "icons/globe.svg",
        "icons/emoji.svg",
        "icons/eye.svg",
        "icons/arrow-up-down.svg",
        "icons/filter.svg",
        "icons/layout.svg",
        "icons/download.svg",
        "icons/upload.svg",
        "icons/share.svg",
        "icons/split.svg",
        "icons/chevron-up.svg",
        "icons/chevron-down.svg",
        "icons/chevron-right.svg",
        "icons/plus.svg",
        "icons/more.svg",
        "icons/search.svg",
        "icons/bell.svg",
        "icons/panel.svg",
        "icons/hash.svg",
        "icons/document.svg",
        "icons/refresh.svg",
    ];

    #[test]
    fn every_referenced_icon_is_embedded() {
        for path in REFERENCED {
            assert!(
                matches!(Assets.load(path), Ok(Some(_))),
                "{} is not embedded",
                path
            );
        }
    }

    #[test]
    fn header_icons_are_embedded() {
        let dataset = crate::dataset::Dataset::job_requests();
        for header in &dataset.headers {
            if let Some(icon) = header.icon {
                assert!(REFERENCED.contains(&icon), "{} not listed", icon);
            }
        }
    }

    #[test]
    fn list_filters_by_prefix() {
        let listed = Assets.list("icons/chevron").unwrap();
        assert_eq!(listed.len(), 4);
        assert!(Assets.list("fonts/").unwrap().is_empty());
    }
}
