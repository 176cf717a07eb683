// SPDX-License-Identifier: MPL-2.0
//! Carousel rendering: a horizontal slide viewport with previous/next arrows
//! and one indicator dot per slide.

use super::state::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::image_slot;
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, mouse_area, tooltip, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if state.is_empty() {
        return empty_view(ctx.i18n);
    }

    let viewport = slides_viewport(state, ctx.i18n);
    if state.is_single() {
        return Container::new(viewport)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into();
    }

    let controls = state.controls();
    let previous = nav_button(
        "‹",
        ctx.i18n.tr("carousel-previous"),
        controls.prev_enabled,
        Message::PreviousPressed,
    );
    let next = nav_button(
        "›",
        ctx.i18n.tr("carousel-next"),
        controls.next_enabled,
        Message::NextPressed,
    );

    let stage = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(viewport)
        .push(next);

    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(stage)
        .push(dots(state, ctx.i18n));

    Container::new(column)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn empty_view(i18n: &I18n) -> Element<'_, Message> {
    let placeholder = Text::new(i18n.tr("carousel-empty"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    Container::new(placeholder)
        .width(Length::Fixed(sizing::CAROUSEL_WIDTH))
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_frame)
        .into()
}

fn slides_viewport<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let width = Length::Fixed(sizing::CAROUSEL_WIDTH);
    let height = Length::Fixed(sizing::CAROUSEL_HEIGHT);

    let slides = state
        .slides()
        .iter()
        .enumerate()
        .fold(Row::new(), |row, (index, slot)| {
            let slide = button(image_slot::view(slot, i18n, width, height))
                .padding(0)
                .style(styles::button::image_link)
                .on_press(Message::SlidePressed(index));
            row.push(slide)
        });

    let scrollable = Scrollable::new(slides)
        .id(state.scrollable_id())
        .width(width)
        .direction(Direction::Horizontal(
            Scrollbar::new().width(4.0).scroller_width(4.0),
        ))
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_x: viewport.absolute_offset().x,
            width: viewport.bounds().width,
        });

    mouse_area(scrollable)
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerLeft)
        .into()
}

fn nav_button<'a>(
    glyph: &'a str,
    label: String,
    enabled: bool,
    message: Message,
) -> Element<'a, Message> {
    let arrow = Text::new(glyph).size(typography::TITLE_MD).center();

    let mut nav = button(arrow)
        .width(Length::Fixed(sizing::CAROUSEL_NAV_BUTTON))
        .height(Length::Fixed(sizing::CAROUSEL_NAV_BUTTON))
        .style(styles::button::carousel_nav);
    if enabled {
        nav = nav.on_press(message);
    }

    styles::tooltip::styled(nav, label, tooltip::Position::Top).into()
}

fn dots<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let count = state.len().to_string();
    let current = state.controls().current;

    state
        .slides()
        .iter()
        .enumerate()
        .fold(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center),
            |row, (index, _)| {
                let is_current = current == Some(index);
                let size = if is_current {
                    sizing::DOT_CURRENT
                } else {
                    sizing::DOT
                };
                let dot = button(Text::new(""))
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .padding(0)
                    .style(styles::button::dot(is_current))
                    .on_press(Message::DotPressed(index));

                let position = (index + 1).to_string();
                let label = i18n.tr_with_args(
                    "carousel-dot-tooltip",
                    &[("index", position.as_str()), ("count", count.as_str())],
                );
                row.push(styles::tooltip::styled(dot, label, tooltip::Position::Bottom))
            },
        )
        .into()
}
