// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.

use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Tooltip bubble contrasting with the window background.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let dark_window = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bubble, text) = if dark_window {
        (Color::from_rgba(0.95, 0.95, 0.95, 0.98), Color::from_rgb(0.1, 0.1, 0.1))
    } else {
        (Color::from_rgba(0.15, 0.15, 0.15, 0.98), Color::from_rgb(0.95, 0.95, 0.95))
    };

    container::Style {
        background: Some(Background::Color(bubble)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color { a: 0.3, ..text },
        },
        shadow: shadow::SM,
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let bubble = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, bubble, position).gap(spacing::XXS)
}
