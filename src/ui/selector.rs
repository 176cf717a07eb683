// SPDX-License-Identifier: MPL-2.0
//! Platform selector shown above each presentation mode.

use crate::platform::{Platform, PLATFORMS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{Element, Length};

/// One button per platform, the `selected` one highlighted.
///
/// `on_select` maps the pressed platform to the caller's message.
pub fn view<'a, Message, F>(selected: Platform, on_select: F) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(Platform) -> Message,
{
    let buttons = PLATFORMS.iter().map(|descriptor| {
        let style = if descriptor.key == selected {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(descriptor.label).size(typography::BODY).center())
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XXS, spacing::MD])
            .style(style)
            .on_press(on_select(descriptor.key))
            .into()
    });

    Row::with_children(buttons).spacing(spacing::XS).into()
}
