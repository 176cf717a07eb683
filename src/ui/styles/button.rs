// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main action button (refresh).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Selected entry of a toggle group (mode tabs, platform selector).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Unselected entry of a toggle group.
/// Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color, border_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_400)
    };

    let hover_bg = if is_light {
        palette::GRAY_200
    } else {
        Color::from_rgb(0.35, 0.35, 0.35)
    };

    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (hover_bg, palette::PRIMARY_500, shadow::SM),
        _ => (bg_color, border_color, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Previous/next arrows drawn over the carousel.
///
/// Disabled arrows stay visible but faded so the layout does not shift.
pub fn carousel_nav(_theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, text_alpha) = match status {
        button::Status::Hovered => (opacity::OVERLAY_STRONG, opacity::OPAQUE),
        button::Status::Pressed => (opacity::OVERLAY_PRESSED, opacity::OPAQUE),
        button::Status::Disabled => (opacity::OVERLAY_SUBTLE, opacity::OVERLAY_MEDIUM),
        button::Status::Active => (opacity::OVERLAY_MEDIUM, opacity::OPAQUE),
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: Color {
            a: text_alpha,
            ..WHITE
        },
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Indicator dot; the current one is filled with the brand color.
pub fn dot(is_current: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);
        let idle = if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        };

        let color = match (is_current, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_400,
            (false, _) => idle,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Invisible button wrapping a clickable image (slide or grid tile).
pub fn image_link(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_carousel_arrow_is_faded() {
        let active = carousel_nav(&Theme::Dark, button::Status::Active);
        let disabled = carousel_nav(&Theme::Dark, button::Status::Disabled);
        assert!(disabled.text_color.a < active.text_color.a);
        assert_ne!(active.background, disabled.background);
    }

    #[test]
    fn current_dot_is_highlighted() {
        let current = dot(true)(&Theme::Light, button::Status::Active);
        let other = dot(false)(&Theme::Light, button::Status::Active);
        assert_eq!(current.background, Some(Background::Color(palette::PRIMARY_500)));
        assert_ne!(current.background, other.background);
    }
}
