//! Custom theme definitions for the application
//!
//! Styles read colors from the active [`Theme`] palette so the same widgets
//! render in both light and dark mode.

use iced::theme::palette::Extended;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// Fixed accents shared by both modes
pub const ACCENT: Color = Color::from_rgb(0.388, 0.400, 0.945); // Indigo 500
pub const LINK: Color = Color::from_rgb(0.118, 0.565, 1.0); // Dodger blue
pub const DANGER: Color = Color::from_rgb(0.937, 0.267, 0.267); // Red 500
pub const INFO: Color = Color::from_rgb(0.231, 0.510, 0.965); // Blue 500

/// Resolve the app theme for a mode
pub fn for_mode(dark_mode: bool) -> Theme {
    if dark_mode {
        Theme::Dark
    } else {
        Theme::Light
    }
}

fn muted(palette: &Extended) -> Color {
    let text = palette.background.base.text;
    Color { a: 0.65, ..text }
}

// --- Container Styles ---

pub struct CardContainer;

impl container::StyleSheet for CardContainer {
    type Style = Theme;

    fn appearance(&self, style: &Self::Style) -> container::Appearance {
        let palette = style.extended_palette();
        container::Appearance {
            text_color: Some(palette.background.base.text),
            background: Some(Background::Color(palette.background.weak.color)),
            border: Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 16.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 16.0,
            },
        }
    }
}

pub struct SidebarContainer;

impl container::StyleSheet for SidebarContainer {
    type Style = Theme;

    fn appearance(&self, style: &Self::Style) -> container::Appearance {
        let palette = style.extended_palette();
        container::Appearance {
            text_color: Some(palette.background.base.text),
            background: Some(Background::Color(palette.background.weak.color)),
            border: Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Banner for informational and error notices
pub enum NoticeContainer {
    Info,
    Error,
}

impl container::StyleSheet for NoticeContainer {
    type Style = Theme;

    fn appearance(&self, style: &Self::Style) -> container::Appearance {
        let accent = match self {
            NoticeContainer::Info => INFO,
            NoticeContainer::Error => DANGER,
        };
        container::Appearance {
            text_color: Some(style.extended_palette().background.base.text),
            background: Some(Background::Color(Color { a: 0.12, ..accent })),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, style: &Self::Style) -> button::Appearance {
        let palette = style.extended_palette();
        button::Appearance {
            background: Some(Background::Color(palette.primary.base.color)),
            text_color: palette.primary.base.text,
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let palette = style.extended_palette();
        button::Appearance {
            background: Some(Background::Color(palette.primary.strong.color)),
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(Color {
                a: 0.4,
                ..style.extended_palette().primary.base.color
            })),
            ..active
        }
    }
}

pub struct SecondaryButton;

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, style: &Self::Style) -> button::Appearance {
        let palette = style.extended_palette();
        button::Appearance {
            background: Some(Background::Color(palette.background.base.color)),
            text_color: palette.background.base.text,
            border: Border {
                radius: 12.0.into(),
                color: palette.background.strong.color,
                width: 1.0,
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let palette = style.extended_palette();
        button::Appearance {
            background: Some(Background::Color(palette.background.weak.color)),
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let palette = style.extended_palette();
        button::Appearance {
            text_color: muted(palette),
            ..self.active(style)
        }
    }
}

pub enum SidebarButtonStyle {
    Active,
    Inactive,
}

impl button::StyleSheet for SidebarButtonStyle {
    type Style = Theme;

    fn active(&self, style: &Self::Style) -> button::Appearance {
        let palette = style.extended_palette();
        match self {
            Self::Active => button::Appearance {
                background: Some(Background::Color(Color { a: 0.15, ..ACCENT })),
                text_color: palette.background.base.text,
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            Self::Inactive => button::Appearance {
                background: None,
                text_color: muted(palette),
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active => self.active(style),
            Self::Inactive => button::Appearance {
                background: Some(Background::Color(
                    style.extended_palette().background.strong.color,
                )),
                ..self.active(style)
            },
        }
    }
}

/// Link-colored look for catalog titles
pub struct LinkButton;

impl button::StyleSheet for LinkButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: LINK,
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color { a: 0.08, ..LINK })),
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..self.active(style)
        }
    }
}

// --- Scrollable Styles ---

pub struct ScrollableStyle;

impl scrollable::StyleSheet for ScrollableStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color { a: 0.3, ..ACCENT },
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        let active = self.active(style);
        if is_mouse_over_scrollbar {
            scrollable::Appearance {
                scrollbar: scrollable::Scrollbar {
                    scroller: scrollable::Scroller {
                        color: Color { a: 0.5, ..ACCENT },
                        ..active.scrollbar.scroller
                    },
                    ..active.scrollbar
                },
                ..active
            }
        } else {
            active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_maps_to_builtin_theme() {
        assert!(matches!(for_mode(true), Theme::Dark));
        assert!(matches!(for_mode(false), Theme::Light));
    }
}
