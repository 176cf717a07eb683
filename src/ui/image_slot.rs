// SPDX-License-Identifier: MPL-2.0
//! One screenshot slot with a one-shot fallback from the optimized variant to
//! the original.
//!
//! A slot starts `Pending`, moves to `Loading` when its source is requested,
//! and ends either `Loaded` or `Broken`. When the primary source fails and a
//! distinct fallback exists, the slot switches to the fallback exactly once;
//! the switch is never undone. A fallback failure leaves the slot broken.

use crate::error::Error;
use crate::gallery::DisplayItem;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, typography};
use crate::ui::styles;
use iced::widget::{Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};
use tracing::debug;

/// A fetch the owner of a slot set asks for.
///
/// `generation` identifies the render the slot belongs to so results that
/// arrive after a re-render can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub index: usize,
    pub src: String,
}

/// Loading priority of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPriority {
    /// Requested as soon as the collection is rendered.
    Eager,
    /// Requested once the slot becomes visible (or adjacent to it).
    #[default]
    Lazy,
}

/// Which of the item's two sources the slot currently uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Primary,
    Fallback,
}

#[derive(Debug, Clone)]
pub enum Phase {
    Pending,
    Loading,
    Loaded(ImageData),
    Broken,
}

#[derive(Debug, Clone)]
pub struct ImageSlot {
    item: DisplayItem,
    priority: LoadPriority,
    source: Source,
    phase: Phase,
}

impl ImageSlot {
    #[must_use]
    pub fn new(item: DisplayItem, priority: LoadPriority) -> Self {
        Self {
            item,
            priority,
            source: Source::Primary,
            phase: Phase::Pending,
        }
    }

    pub fn item(&self) -> &DisplayItem {
        &self.item
    }

    pub fn priority(&self) -> LoadPriority {
        self.priority
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Source path currently in use.
    #[must_use]
    pub fn current_src(&self) -> &str {
        match self.source {
            Source::Primary => &self.item.primary_src,
            Source::Fallback => &self.item.fallback_src,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending)
    }

    #[must_use]
    pub fn is_broken(&self) -> bool {
        matches!(self.phase, Phase::Broken)
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match &self.phase {
            Phase::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Marks the slot as loading and returns the source to fetch.
    ///
    /// Returns `None` when a load already happened or is in flight.
    pub fn begin_load(&mut self) -> Option<String> {
        if !self.is_pending() {
            return None;
        }
        self.phase = Phase::Loading;
        Some(self.current_src().to_string())
    }

    /// Stores a decoded image. Results for a source the slot no longer uses
    /// are ignored.
    pub fn on_loaded(&mut self, src: &str, data: ImageData) -> bool {
        if !matches!(self.phase, Phase::Loading) || src != self.current_src() {
            return false;
        }
        self.phase = Phase::Loaded(data);
        true
    }

    /// Handles a failed load of `src`.
    ///
    /// Returns the fallback source to fetch when the slot swaps to it.
    pub fn on_failed(&mut self, src: &str) -> Option<String> {
        if !matches!(self.phase, Phase::Loading) || src != self.current_src() {
            return None;
        }

        let can_fall_back =
            self.source == Source::Primary && self.item.primary_src != self.item.fallback_src;
        if can_fall_back {
            self.source = Source::Fallback;
            Some(self.item.fallback_src.clone())
        } else {
            self.phase = Phase::Broken;
            None
        }
    }

    /// Applies the outcome of fetching `src`; returns the fallback source to
    /// fetch next, if any.
    pub fn apply_result(
        &mut self,
        src: &str,
        result: std::result::Result<ImageData, Error>,
    ) -> Option<String> {
        match result {
            Ok(data) => {
                self.on_loaded(src, data);
                None
            }
            Err(err) => {
                debug!(%src, error = %err, "screenshot failed to load");
                self.on_failed(src)
            }
        }
    }
}

/// Starts loading the slot at `index` if it is still pending.
pub fn request_load(slots: &mut [ImageSlot], generation: u64, index: usize) -> Option<LoadRequest> {
    let src = slots.get_mut(index)?.begin_load()?;
    Some(LoadRequest {
        generation,
        index,
        src,
    })
}

/// Renders the slot content: the image once loaded, its alt text otherwise.
pub fn view<'a, Message: 'a>(
    slot: &'a ImageSlot,
    i18n: &'a I18n,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot.phase() {
        Phase::Loaded(data) => Image::new(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Phase::Broken => Text::new(i18n.tr_with_args(
            "image-broken",
            &[("alt", slot.item().alt_text.as_str())],
        ))
        .size(typography::CAPTION)
        .color(palette::ERROR_500)
        .into(),
        Phase::Pending | Phase::Loading => Text::new(slot.item().alt_text.as_str())
            .size(typography::CAPTION)
            .color(palette::GRAY_400)
            .into(),
    };

    Container::new(content)
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_frame)
        .into()
}
