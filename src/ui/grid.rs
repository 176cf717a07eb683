// SPDX-License-Identifier: MPL-2.0
//! Static screenshot grid for one platform.
//!
//! Every tile links to the original asset regardless of which source ended
//! up displayed. There is no navigation state.

use crate::error::Error;
use crate::gallery::DisplayItem;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::platform::Platform;
use crate::ui::carousel::RenderOptions;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::image_slot::{self, ImageSlot, LoadPriority, LoadRequest};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Tiles of the active platform that load right after rendering.
pub const EAGER_TILES: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    TilePressed(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenAsset(String),
}

#[derive(Debug, Clone)]
pub struct State {
    platform: Platform,
    tiles: Vec<ImageSlot>,
    generation: u64,
}

impl State {
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            tiles: Vec::new(),
            generation: 0,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn tiles(&self) -> &[ImageSlot] {
        &self.tiles
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Replaces all tiles. The first [`EAGER_TILES`] load eagerly on the
    /// active platform.
    pub fn render(&mut self, items: Vec<DisplayItem>, options: RenderOptions) {
        self.generation += 1;
        self.tiles = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let priority = if options.is_active && index < EAGER_TILES {
                    LoadPriority::Eager
                } else {
                    LoadPriority::Lazy
                };
                ImageSlot::new(item, priority)
            })
            .collect();
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::TilePressed(index) => self
                .tiles
                .get(index)
                .map_or(Effect::None, |tile| {
                    Effect::OpenAsset(tile.item().fallback_src.clone())
                }),
        }
    }

    /// Loads to start now: eager tiles always, every tile once displayed.
    pub fn pending_loads(&mut self, displayed: bool) -> Vec<LoadRequest> {
        let generation = self.generation;
        let indices: Vec<usize> = self
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| displayed || tile.priority() == LoadPriority::Eager)
            .map(|(index, _)| index)
            .collect();

        indices
            .into_iter()
            .filter_map(|index| image_slot::request_load(&mut self.tiles, generation, index))
            .collect()
    }

    /// Applies a finished load; returns the fallback load to start, if any.
    pub fn on_image_result(
        &mut self,
        generation: u64,
        index: usize,
        src: &str,
        result: std::result::Result<ImageData, Error>,
    ) -> Option<LoadRequest> {
        if generation != self.generation {
            return None;
        }
        let fallback = self.tiles.get_mut(index)?.apply_result(src, result)?;
        Some(LoadRequest {
            generation,
            index,
            src: fallback,
        })
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub columns: u16,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if state.is_empty() {
        let message = Text::new(ctx.i18n.tr("grid-empty"))
            .size(typography::BODY)
            .color(palette::GRAY_400);
        return Container::new(message)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .into();
    }

    let columns = usize::from(ctx.columns.max(1));
    let mut grid = Column::new().spacing(spacing::MD);

    for (row_index, chunk) in state.tiles.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::MD);
        for (offset, tile) in chunk.iter().enumerate() {
            let index = row_index * columns + offset;
            let content = image_slot::view(
                tile,
                ctx.i18n,
                Length::Fill,
                Length::Fixed(sizing::TILE_HEIGHT),
            );
            row = row.push(
                button(content)
                    .padding(0)
                    .width(Length::FillPortion(1))
                    .style(styles::button::image_link)
                    .on_press(Message::TilePressed(index)),
            );
        }
        // Keep tiles of a short last row the same width as the others.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid.into()
}
