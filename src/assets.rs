use std::borrow::Cow;

use gpui::{AssetSource, SharedString};
use rust_embed::RustEmbed;

/// Toolbar icons, embedded in the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        Ok(Self::get(path).map(|f| f.data))
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

    #[test]
    fn toolbar_icons_are_embedded() {
        for icon in [
            "icons/configure.svg",
            "icons/document-new.svg",
            "icons/document-open.svg",
            "icons/document-open-recent.svg",
            "icons/document-save.svg",
            "icons/help-keyboard-shortcuts.svg",
            "icons/view-fullscreen.svg",
        ] {
            assert!(matches!(Assets.load(icon), Ok(Some(_))), "missing {}", icon);
        }
    }

    #[test]
    fn list_filters_by_prefix() {
        let icons = Assets.list("icons/").unwrap();
        assert_eq!(icons.len(), 7);
        assert!(Assets.list("fonts/").unwrap().is_empty());
    }
}
