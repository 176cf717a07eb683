// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component effects are turned into tasks here: image downloads for the
//! slots that became relevant, scroll operations for the carousels and
//! opening original assets in the system browser.

use super::message::SlotTarget;
use super::pipeline::Collections;
use super::selection::{PresentationMode, Selection};
use super::Message;
use crate::media::AssetClient;
use crate::platform::Platform;
use crate::ui::carousel::{self, RenderOptions};
use crate::ui::grid;
use crate::ui::image_slot::LoadRequest;
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Task;
use std::time::Instant;
use tracing::{debug, warn};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub mode: &'a mut PresentationMode,
    pub selection: &'a mut Selection,
    pub carousels: &'a mut [carousel::State],
    pub grids: &'a mut [grid::State],
    pub assets: Option<&'a AssetClient>,
    pub loading: &'a mut bool,
}

impl UpdateContext<'_> {
    fn is_displayed(&self, mode: PresentationMode, platform: Platform) -> bool {
        *self.mode == mode && self.selection.get(mode) == platform
    }
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Carousel(platform, message) => {
            let effect = ctx.carousels[platform.index()].handle(message);
            apply_carousel_effect(ctx, platform, effect)
        }
        Message::Grid(platform, message) => match ctx.grids[platform.index()].handle(message) {
            grid::Effect::None => Task::none(),
            grid::Effect::OpenAsset(src) => {
                open_asset(ctx.assets, &src);
                Task::none()
            }
        },
        Message::ModeSelected(mode) => {
            *ctx.mode = mode;
            Task::batch([restore_carousel_scroll(ctx), load_displayed(ctx)])
        }
        Message::PlatformSelected(mode, platform) => {
            ctx.selection.set(mode, platform);
            Task::batch([restore_carousel_scroll(ctx), load_displayed(ctx)])
        }
        Message::CollectionsLoaded(collections) => handle_collections_loaded(ctx, &collections),
        Message::ImageLoaded {
            target,
            src,
            result,
        } => {
            let index = target.platform.index();
            let retry = match target.mode {
                PresentationMode::Preview => ctx.carousels[index].on_image_result(
                    target.generation,
                    target.index,
                    &src,
                    result,
                ),
                PresentationMode::Gallery => ctx.grids[index].on_image_result(
                    target.generation,
                    target.index,
                    &src,
                    result,
                ),
            };
            load_images(ctx.assets, target.mode, target.platform, retry.into_iter().collect())
        }
        Message::NavigationKey(key) => {
            if *ctx.mode != PresentationMode::Preview {
                return Task::none();
            }
            let platform = ctx.selection.preview;
            let (outcome, effect) = ctx.carousels[platform.index()].handle_key(key, Instant::now());
            if outcome == carousel::KeyOutcome::Handled {
                debug!(?key, %platform, "carousel key handled");
            }
            apply_carousel_effect(ctx, platform, effect)
        }
        Message::Frame(now) => handle_frame(ctx, now),
        // Handled by `App::update`, which owns the listing client.
        Message::Refresh => Task::none(),
    }
}

/// Re-renders every carousel and grid from a finished pipeline run.
fn handle_collections_loaded(ctx: &mut UpdateContext<'_>, collections: &Collections) -> Task<Message> {
    *ctx.loading = false;
    let mut tasks = Vec::new();

    for platform in Platform::ALL {
        let items = collections.items(platform).to_vec();
        let index = platform.index();

        let effect = ctx.carousels[index].render(
            items.clone(),
            RenderOptions {
                is_active: ctx.selection.preview == platform,
            },
        );
        tasks.push(apply_carousel_effect(ctx, platform, effect));

        ctx.grids[index].render(
            items,
            RenderOptions {
                is_active: ctx.selection.gallery == platform,
            },
        );
    }

    tasks.push(load_all_pending(ctx));
    Task::batch(tasks)
}

/// Advances every carousel by one frame.
fn handle_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let mut tasks = Vec::new();

    for platform in Platform::ALL {
        let outcome = ctx.carousels[platform.index()].on_frame(now);
        if let Some(offset) = outcome.scroll_to {
            tasks.push(scroll_carousel(&ctx.carousels[platform.index()], offset));
        }
        if outcome.recomputed {
            let displayed = ctx.is_displayed(PresentationMode::Preview, platform);
            let requests = ctx.carousels[platform.index()].pending_loads(displayed);
            tasks.push(load_images(ctx.assets, PresentationMode::Preview, platform, requests));
        }
    }

    Task::batch(tasks)
}

fn apply_carousel_effect(
    ctx: &mut UpdateContext<'_>,
    platform: Platform,
    effect: carousel::Effect,
) -> Task<Message> {
    match effect {
        // The frame subscription picks the work up through `needs_frame`.
        carousel::Effect::None | carousel::Effect::FrameRequested => Task::none(),
        carousel::Effect::ScrollTo(offset) => {
            let scroll = scroll_carousel(&ctx.carousels[platform.index()], offset);
            let displayed = ctx.is_displayed(PresentationMode::Preview, platform);
            let requests = ctx.carousels[platform.index()].pending_loads(displayed);
            Task::batch([
                scroll,
                load_images(ctx.assets, PresentationMode::Preview, platform, requests),
            ])
        }
        carousel::Effect::OpenAsset(src) => {
            open_asset(ctx.assets, &src);
            Task::none()
        }
    }
}

fn scroll_carousel(carousel: &carousel::State, offset: f32) -> Task<Message> {
    operation::scroll_to(carousel.scrollable_id(), AbsoluteOffset { x: offset, y: 0.0 })
}

/// Moves a carousel that came back on screen to the slide its state points
/// at. Its scrollable is rebuilt at offset 0 whenever it leaves the tree.
fn restore_carousel_scroll(ctx: &UpdateContext<'_>) -> Task<Message> {
    if *ctx.mode != PresentationMode::Preview {
        return Task::none();
    }
    let carousel = &ctx.carousels[ctx.selection.preview.index()];
    if carousel.is_empty() {
        return Task::none();
    }
    scroll_carousel(carousel, carousel.scroll_offset())
}

/// Starts the loads that became relevant after the displayed view changed.
fn load_displayed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mode = *ctx.mode;
    let platform = ctx.selection.get(mode);
    let index = platform.index();
    let requests = match mode {
        PresentationMode::Preview => ctx.carousels[index].pending_loads(true),
        PresentationMode::Gallery => ctx.grids[index].pending_loads(true),
    };
    load_images(ctx.assets, mode, platform, requests)
}

fn load_all_pending(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut tasks = Vec::new();
    for platform in Platform::ALL {
        let index = platform.index();
        let preview_shown = ctx.is_displayed(PresentationMode::Preview, platform);
        let gallery_shown = ctx.is_displayed(PresentationMode::Gallery, platform);

        let requests = ctx.carousels[index].pending_loads(preview_shown);
        tasks.push(load_images(ctx.assets, PresentationMode::Preview, platform, requests));
        let requests = ctx.grids[index].pending_loads(gallery_shown);
        tasks.push(load_images(ctx.assets, PresentationMode::Gallery, platform, requests));
    }
    Task::batch(tasks)
}

/// One download task per request.
fn load_images(
    assets: Option<&AssetClient>,
    mode: PresentationMode,
    platform: Platform,
    requests: Vec<LoadRequest>,
) -> Task<Message> {
    let Some(assets) = assets else {
        return Task::none();
    };

    Task::batch(requests.into_iter().map(|request| {
        let client = assets.clone();
        let target = SlotTarget {
            mode,
            platform,
            generation: request.generation,
            index: request.index,
        };
        let src = request.src;
        Task::perform(
            async move {
                let result = client.fetch_image(&src).await;
                (src, result)
            },
            move |(src, result)| Message::ImageLoaded {
                target,
                src,
                result,
            },
        )
    }))
}

/// Opens an original asset in the system browser.
fn open_asset(assets: Option<&AssetClient>, src: &str) {
    let Some(assets) = assets else {
        return;
    };
    match assets.resolve(src) {
        Ok(url) => {
            debug!(%url, "opening screenshot");
            if let Err(err) = webbrowser::open(url.as_str()) {
                warn!(%url, error = %err, "failed to open screenshot");
            }
        }
        Err(err) => warn!(%src, error = %err, "cannot resolve screenshot location"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::DisplayItem;
    use std::time::Duration;

    struct Fixture {
        mode: PresentationMode,
        selection: Selection,
        carousels: Vec<carousel::State>,
        grids: Vec<grid::State>,
        loading: bool,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                mode: PresentationMode::Preview,
                selection: Selection::default(),
                carousels: Platform::ALL
                    .into_iter()
                    .map(|p| carousel::State::new(p, Duration::ZERO))
                    .collect(),
                grids: Platform::ALL.into_iter().map(grid::State::new).collect(),
                loading: true,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                mode: &mut self.mode,
                selection: &mut self.selection,
                carousels: &mut self.carousels,
                grids: &mut self.grids,
                assets: None,
                loading: &mut self.loading,
            }
        }
    }

    fn items(folder: &str, count: usize) -> Vec<DisplayItem> {
        (1..=count)
            .map(|n| DisplayItem {
                primary_src: format!("AppImages/{folder}/{n}.png"),
                fallback_src: format!("AppImages/{folder}/{n}.png"),
                alt_text: format!("{folder} screenshot {n}"),
            })
            .collect()
    }

    #[test]
    fn platform_selection_only_touches_its_mode() {
        let mut fixture = Fixture::new();
        let _ = update(
            &mut fixture.ctx(),
            Message::PlatformSelected(PresentationMode::Gallery, Platform::Ios),
        );
        assert_eq!(fixture.selection.gallery, Platform::Ios);
        assert_eq!(fixture.selection.preview, Platform::Tvos);
    }

    #[test]
    fn navigation_keys_are_ignored_in_gallery_mode() {
        let mut fixture = Fixture::new();
        fixture.carousels[0].render(items("tvOS", 3), RenderOptions { is_active: true });
        let _ = update(&mut fixture.ctx(), Message::ModeSelected(PresentationMode::Gallery));
        let _ = update(
            &mut fixture.ctx(),
            Message::Carousel(Platform::Tvos, carousel::Message::PointerEntered),
        );
        let _ = update(
            &mut fixture.ctx(),
            Message::NavigationKey(carousel::NavKey::Right),
        );
        assert_eq!(fixture.carousels[0].current_index(), Some(0));
    }

    #[test]
    fn returning_to_a_carousel_restores_its_scroll_position() {
        let mut fixture = Fixture::new();
        fixture.carousels[0].render(items("tvOS", 4), RenderOptions { is_active: true });
        fixture.carousels[0].go_to(3, Instant::now());
        let offset = fixture.carousels[0].scroll_offset();
        assert!(offset > 0.0);

        let away = update(&mut fixture.ctx(), Message::ModeSelected(PresentationMode::Gallery));
        assert_eq!(away.units(), 0);

        let back = update(&mut fixture.ctx(), Message::ModeSelected(PresentationMode::Preview));
        assert_eq!(back.units(), 1);
        assert_eq!(fixture.carousels[0].current_index(), Some(3));
        assert_eq!(fixture.carousels[0].scroll_offset(), offset);
    }

    #[test]
    fn switching_preview_platform_restores_the_selected_carousel() {
        let mut fixture = Fixture::new();
        fixture.carousels[2].render(items("iOS", 3), RenderOptions::default());
        fixture.carousels[2].go_to(2, Instant::now());

        let task = update(
            &mut fixture.ctx(),
            Message::PlatformSelected(PresentationMode::Preview, Platform::Ios),
        );
        assert_eq!(task.units(), 1);

        // Nothing rendered for macOS, so there is nothing to move.
        let task = update(
            &mut fixture.ctx(),
            Message::PlatformSelected(PresentationMode::Preview, Platform::Macos),
        );
        assert_eq!(task.units(), 0);
    }

    #[test]
    fn stale_image_results_are_dropped() {
        let mut fixture = Fixture::new();
        fixture.grids[2].render(items("iOS", 1), RenderOptions { is_active: true });
        let request = fixture.grids[2].pending_loads(false).remove(0);
        fixture.grids[2].render(items("iOS", 1), RenderOptions { is_active: true });

        let _ = update(
            &mut fixture.ctx(),
            Message::ImageLoaded {
                target: SlotTarget {
                    mode: PresentationMode::Gallery,
                    platform: Platform::Ios,
                    generation: request.generation,
                    index: request.index,
                },
                src: request.src,
                result: Err(crate::error::Error::Network("HTTP 404".into())),
            },
        );
        assert!(!fixture.grids[2].tiles()[0].is_broken());
    }
}
