// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A header with the presentation mode tabs and the refresh button sits
//! above the platform selector of the active mode and the carousel or grid
//! of the selected platform.

use super::identity::HostingIdentity;
use super::selection::{PresentationMode, Selection};
use super::Message;
use crate::i18n::fluent::I18n;
use crate::platform::Platform;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{carousel, grid, selector, styles};
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub identity: Option<&'a HostingIdentity>,
    pub mode: PresentationMode,
    pub selection: Selection,
    pub carousels: &'a [carousel::State],
    pub grids: &'a [grid::State],
    pub grid_columns: u16,
    pub loading: bool,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header(&ctx));

    if let Some(key) = ctx.notice {
        column = column.push(notice(ctx.i18n.tr(key)));
    }

    let body: Element<'_, Message> = match ctx.identity {
        None => notice(ctx.i18n.tr("identity-unresolved")),
        Some(_) if ctx.loading => status_text(ctx.i18n.tr("loading-collections")),
        Some(_) => collection_view(&ctx),
    };
    column = column.push(body);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tabs = PresentationMode::ALL.iter().map(|&mode| {
        let style = if mode == ctx.mode {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(ctx.i18n.tr(mode.label_key())).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XXS, spacing::MD])
            .style(style)
            .on_press(Message::ModeSelected(mode))
            .into()
    });

    let mut refresh = button(Text::new(ctx.i18n.tr("refresh-button")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::primary);
    if ctx.identity.is_some() && !ctx.loading {
        refresh = refresh.on_press(Message::Refresh);
    }

    let mut row = Row::with_children(tabs)
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Space::new().width(Length::Fill));

    if let Some(identity) = ctx.identity {
        let source = ctx.i18n.tr_with_args(
            "collection-source",
            &[("owner", identity.owner.as_str()), ("repo", identity.repo.as_str())],
        );
        row = row.push(
            Text::new(source)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    row.push(refresh).into()
}

fn collection_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mode = ctx.mode;
    let platform = ctx.selection.get(mode);
    let selector = selector::view(platform, move |selected| {
        Message::PlatformSelected(mode, selected)
    });

    let content: Element<'a, Message> = match mode {
        PresentationMode::Preview => carousel_view(ctx, platform),
        PresentationMode::Gallery => grid_view(ctx, platform),
    };

    let section = Column::new()
        .spacing(spacing::MD)
        .push(selector)
        .push(content);

    Container::new(section)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn carousel_view<'a>(ctx: &ViewContext<'a>, platform: Platform) -> Element<'a, Message> {
    let Some(state) = ctx.carousels.get(platform.index()) else {
        return Space::new().into();
    };
    carousel::view(state, carousel::ViewContext { i18n: ctx.i18n })
        .map(move |message| Message::Carousel(platform, message))
}

fn grid_view<'a>(ctx: &ViewContext<'a>, platform: Platform) -> Element<'a, Message> {
    let Some(state) = ctx.grids.get(platform.index()) else {
        return Space::new().into();
    };
    let grid = grid::view(
        state,
        grid::ViewContext {
            i18n: ctx.i18n,
            columns: ctx.grid_columns,
        },
    )
    .map(move |message| Message::Grid(platform, message));

    Scrollable::new(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn notice<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::notice)
        .into()
}

fn status_text<'a>(message: String) -> Element<'a, Message> {
    Container::new(
        Text::new(message)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(alignment::Horizontal::Center)
    .into()
}
