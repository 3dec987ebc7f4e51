use iced::theme::Palette;
use iced::{Color, Theme};

/// Colors used across the site chrome, sidebar and code viewers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SitePalette {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
    pub(crate) muted: Color,
    pub(crate) border: Color,
    pub(crate) hover: Color,
    pub(crate) accent: Color,
    pub(crate) accent_soft: Color,
    pub(crate) danger: Color,
    pub(crate) scrim: Color,
    pub(crate) code_background: Color,
    pub(crate) code_surface: Color,
    pub(crate) code_foreground: Color,
    pub(crate) code_muted: Color,
    pub(crate) footer_background: Color,
    pub(crate) footer_foreground: Color,
}

impl Default for SitePalette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::from_rgb8(0x37, 0x41, 0x51),
            muted: Color::from_rgb8(0x6B, 0x72, 0x80),
            border: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            hover: Color::from_rgb8(0xF3, 0xF4, 0xF6),
            accent: Color::from_rgb8(0x1E, 0xD9, 0xA4),
            accent_soft: Color::from_rgb8(0x6B, 0xD9, 0xCE),
            danger: Color::from_rgb8(0xE0, 0x6C, 0x75),
            scrim: Color::from_rgba8(0x00, 0x00, 0x00, 0.5),
            code_background: Color::from_rgb8(0x11, 0x18, 0x27),
            code_surface: Color::from_rgb8(0x1F, 0x29, 0x37),
            code_foreground: Color::WHITE,
            code_muted: Color::from_rgb8(0x9C, 0xA3, 0xAF),
            footer_background: Color::from_rgb8(0x1F, 0x29, 0x37),
            footer_foreground: Color::WHITE,
        }
    }
}

impl From<&SitePalette> for Theme {
    fn from(value: &SitePalette) -> Self {
        let palette = Palette {
            background: value.background,
            text: value.foreground,
            primary: value.accent,
            success: value.accent,
            danger: value.danger,
            warning: value.accent_soft,
        };

        Theme::custom(String::from("Focca"), palette)
    }
}
