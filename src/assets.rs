//! Embedded assets for the density gallery
//!
//! Uses rust-embed to bundle icon SVGs at compile time.

use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

/// Icon names used by the showcased components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    /// Plus glyph for buttons
    Add,
    /// Alarm clock
    Alarm,
    /// Paper clip
    AttachFile,
    /// Heart
    Favorite,
    /// Underlined "U"
    FormatUnderline,
    /// Chain links
    Link,
    /// Eighth note
    MusicNote,
    /// Magnifier
    Search,
    /// Smiley face
    TagFaces,
    /// Eye
    Visibility,
    /// Sun
    WbSunny,
}

impl IconName {
    /// Get the SVG asset path for this icon
    pub fn path(self) -> SharedString {
        match self {
            IconName::Add => "icons/add.svg",
            IconName::Alarm => "icons/alarm.svg",
            IconName::AttachFile => "icons/attach_file.svg",
            IconName::Favorite => "icons/favorite.svg",
            IconName::FormatUnderline => "icons/format_underline.svg",
            IconName::Link => "icons/link.svg",
            IconName::MusicNote => "icons/music_note.svg",
            IconName::Search => "icons/search.svg",
            IconName::TagFaces => "icons/tag_faces.svg",
            IconName::Visibility => "icons/visibility.svg",
            IconName::WbSunny => "icons/wb_sunny.svg",
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_is_embedded() {
        let icons = [
            IconName::Add,
            IconName::Alarm,
            IconName::AttachFile,
            IconName::Favorite,
            IconName::FormatUnderline,
            IconName::Link,
            IconName::MusicNote,
            IconName::Search,
            IconName::TagFaces,
            IconName::Visibility,
            IconName::WbSunny,
        ];

        for icon in icons {
            assert!(
                Assets::get(icon.path().as_ref()).is_some(),
                "missing asset for {:?}",
                icon
            );
        }
    }
}
