// SPDX-License-Identifier: MPL-2.0
//! Interactive state of one platform carousel.
//!
//! The visible slide is never stored: it is derived from the horizontal
//! scroll offset every time it is read, so it corrects itself after any
//! scroll the carousel did not initiate. Scroll notifications only record
//! the offset and arm a frame gate; the prev/next/dot indicators are
//! refreshed at most once per frame.

use super::animator::ScrollAnimator;
use crate::error::Error;
use crate::gallery::DisplayItem;
use crate::media::ImageData;
use crate::platform::Platform;
use crate::ui::design_tokens::sizing;
use crate::ui::image_slot::{self, ImageSlot, LoadPriority, LoadRequest};
use iced::widget::Id;
use std::time::{Duration, Instant};

/// How a collection is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Whether this platform is the selected one for its presentation mode.
    pub is_active: bool,
}

/// Snapshot of the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Index of the dot marked current, `None` when there are no slides.
    pub current: Option<usize>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl Controls {
    const DISABLED: Controls = Controls {
        current: None,
        prev_enabled: false,
        next_enabled: false,
    };
}

/// Arrow keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

/// Whether a key press was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The carousel navigated; the key must not trigger anything else.
    Handled,
    Ignored,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The viewport scrolled (user gesture or programmatic).
    Scrolled { offset_x: f32, width: f32 },
    PreviousPressed,
    NextPressed,
    DotPressed(usize),
    SlidePressed(usize),
    PointerEntered,
    PointerLeft,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Work is pending for the next frame.
    FrameRequested,
    /// Move the scrollable to this horizontal offset.
    ScrollTo(f32),
    /// Open an original asset outside the application.
    OpenAsset(String),
}

/// Result of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameOutcome {
    /// Whether the controls were recomputed.
    pub recomputed: bool,
    /// Offset the scrollable must be moved to for the animation.
    pub scroll_to: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct State {
    platform: Platform,
    slides: Vec<ImageSlot>,
    generation: u64,
    offset_x: f32,
    width: f32,
    controls: Controls,
    recompute_pending: bool,
    animator: ScrollAnimator,
    animation: Duration,
    focused: bool,
}

impl State {
    #[must_use]
    pub fn new(platform: Platform, animation: Duration) -> Self {
        Self {
            platform,
            slides: Vec::new(),
            generation: 0,
            offset_x: 0.0,
            width: sizing::CAROUSEL_WIDTH,
            controls: Controls::DISABLED,
            recompute_pending: false,
            animator: ScrollAnimator::default(),
            animation,
            focused: false,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Widget id of the slide viewport, unique per platform.
    #[must_use]
    pub fn scrollable_id(&self) -> Id {
        Id::new(match self.platform {
            Platform::Tvos => "carousel-viewport-tvos",
            Platform::Macos => "carousel-viewport-macos",
            Platform::Ios => "carousel-viewport-ios",
        })
    }

    pub fn slides(&self) -> &[ImageSlot] {
        &self.slides
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// At most one slide: arrows and dots are not shown.
    pub fn is_single(&self) -> bool {
        self.slides.len() <= 1
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Horizontal offset the viewport is expected to show.
    pub fn scroll_offset(&self) -> f32 {
        self.offset_x
    }

    /// Replaces every slide with one per item.
    ///
    /// Slides of the previous render are dropped and their in-flight loads
    /// become stale. Only the first slide of the active platform loads
    /// eagerly.
    pub fn render(&mut self, items: Vec<DisplayItem>, options: RenderOptions) -> Effect {
        self.generation += 1;
        self.slides = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let priority = if index == 0 && options.is_active {
                    LoadPriority::Eager
                } else {
                    LoadPriority::Lazy
                };
                ImageSlot::new(item, priority)
            })
            .collect();

        self.animator.cancel();
        self.offset_x = 0.0;
        self.recompute_pending = false;
        self.refresh_controls();

        Effect::ScrollTo(0.0)
    }

    /// Visible slide, derived from the scroll offset.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        let last = self.slides.len().checked_sub(1)?;
        let raw = (self.offset_x / self.width.max(1.0)).round();
        if raw <= 0.0 {
            Some(0)
        } else {
            Some((raw as usize).min(last))
        }
    }

    #[must_use]
    pub fn at_start(&self) -> bool {
        self.current_index().is_none_or(|index| index == 0)
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.current_index()
            .is_none_or(|index| index + 1 >= self.slides.len())
    }

    /// Scrolls to `target`, clamped to the existing slides.
    pub fn go_to(&mut self, target: isize, now: Instant) -> Effect {
        let Some(last) = self.slides.len().checked_sub(1) else {
            return Effect::None;
        };
        let index = target.clamp(0, last as isize) as usize;
        let offset = index as f32 * self.width;

        if self.animation.is_zero() {
            self.animator.cancel();
            self.offset_x = offset;
            self.refresh_controls();
            Effect::ScrollTo(offset)
        } else {
            self.animator.start(self.offset_x, offset, self.animation, now);
            Effect::FrameRequested
        }
    }

    pub fn prev(&mut self, now: Instant) -> Effect {
        match self.current_index() {
            Some(index) => self.go_to(index as isize - 1, now),
            None => Effect::None,
        }
    }

    pub fn next(&mut self, now: Instant) -> Effect {
        match self.current_index() {
            Some(index) => self.go_to(index as isize + 1, now),
            None => Effect::None,
        }
    }

    /// Records a new scroll position.
    ///
    /// Only the first notification since the last frame arms the gate; the
    /// rest are absorbed.
    pub fn on_scroll(&mut self, offset_x: f32, width: f32) -> Effect {
        self.offset_x = offset_x.max(0.0);
        if width > 0.0 {
            self.width = width;
        }

        if self.recompute_pending {
            Effect::None
        } else {
            self.recompute_pending = true;
            Effect::FrameRequested
        }
    }

    /// Advances the animation and runs the pending recomputation, if any.
    pub fn on_frame(&mut self, now: Instant) -> FrameOutcome {
        let scroll_to = self.animator.tick(now).inspect(|&offset| {
            self.offset_x = offset;
            self.recompute_pending = true;
        });

        let recomputed = std::mem::take(&mut self.recompute_pending);
        if recomputed {
            self.refresh_controls();
        }

        FrameOutcome {
            recomputed,
            scroll_to,
        }
    }

    /// Whether the next frame has work to do.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.recompute_pending || self.animator.is_active()
    }

    /// Arrow-key navigation, only while the carousel has focus.
    pub fn handle_key(&mut self, key: NavKey, now: Instant) -> (KeyOutcome, Effect) {
        if !self.focused {
            return (KeyOutcome::Ignored, Effect::None);
        }
        let effect = match key {
            NavKey::Left => self.prev(now),
            NavKey::Right => self.next(now),
        };
        (KeyOutcome::Handled, effect)
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        let now = Instant::now();
        match message {
            Message::Scrolled { offset_x, width } => self.on_scroll(offset_x, width),
            Message::PreviousPressed => self.prev(now),
            Message::NextPressed => self.next(now),
            Message::DotPressed(index) => self.go_to(index as isize, now),
            Message::SlidePressed(index) => self
                .slides
                .get(index)
                .map_or(Effect::None, |slide| {
                    Effect::OpenAsset(slide.item().fallback_src.clone())
                }),
            Message::PointerEntered => {
                self.focused = true;
                Effect::None
            }
            Message::PointerLeft => {
                self.focused = false;
                Effect::None
            }
        }
    }

    /// Loads to start now.
    ///
    /// Eager slides always load. When the carousel is on screen, the
    /// current slide and its neighbours load too.
    pub fn pending_loads(&mut self, displayed: bool) -> Vec<LoadRequest> {
        let mut indices: Vec<usize> = self
            .slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.priority() == LoadPriority::Eager)
            .map(|(index, _)| index)
            .collect();

        if displayed {
            if let Some(current) = self.current_index() {
                let last = self.slides.len() - 1;
                indices.extend(current.saturating_sub(1)..=(current + 1).min(last));
            }
        }

        let generation = self.generation;
        indices
            .into_iter()
            .filter_map(|index| image_slot::request_load(&mut self.slides, generation, index))
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
        let fallback = self.slides.get_mut(index)?.apply_result(src, result)?;
        Some(LoadRequest {
            generation,
            index,
            src: fallback,
        })
    }

    fn refresh_controls(&mut self) {
        self.controls = match self.current_index() {
            None => Controls::DISABLED,
            Some(current) => Controls {
                current: Some(current),
                prev_enabled: !self.at_start(),
                next_enabled: !self.at_end(),
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 500.0;

    fn items(count: usize) -> Vec<DisplayItem> {
        (1..=count)
            .map(|n| DisplayItem {
                primary_src: format!("AppImages/web/tvOS-{n}.webp"),
                fallback_src: format!("AppImages/tvOS/{n}.png"),
                alt_text: format!("tvOS screenshot {n}"),
            })
            .collect()
    }

    fn instant_carousel(count: usize) -> State {
        let mut state = State::new(Platform::Tvos, Duration::ZERO);
        state.render(items(count), RenderOptions { is_active: true });
        state.on_scroll(0.0, WIDTH);
        state.on_frame(Instant::now());
        state
    }

    #[test]
    fn empty_render_disables_everything() {
        let mut state = State::new(Platform::Ios, Duration::ZERO);
        state.render(Vec::new(), RenderOptions { is_active: true });

        assert!(state.is_empty());
        assert_eq!(state.current_index(), None);
        assert_eq!(state.controls(), Controls::DISABLED);
        assert_eq!(state.go_to(0, Instant::now()), Effect::None);
        assert_eq!(state.next(Instant::now()), Effect::None);
        assert!(state.pending_loads(true).is_empty());
    }

    #[test]
    fn first_render_starts_at_first_slide() {
        let state = instant_carousel(3);
        let controls = state.controls();
        assert_eq!(controls.current, Some(0));
        assert!(!controls.prev_enabled);
        assert!(controls.next_enabled);
    }

    #[test]
    fn go_to_clamps_below_zero() {
        let mut state = instant_carousel(4);
        state.go_to(2, Instant::now());

        assert_eq!(state.go_to(-1, Instant::now()), Effect::ScrollTo(0.0));
        assert_eq!(state.current_index(), Some(0));
        assert!(!state.controls().prev_enabled);
        assert!(state.controls().next_enabled);
    }

    #[test]
    fn go_to_clamps_past_the_end() {
        let mut state = instant_carousel(4);

        assert_eq!(state.go_to(4, Instant::now()), Effect::ScrollTo(3.0 * WIDTH));
        assert_eq!(state.current_index(), Some(3));
        assert!(state.controls().prev_enabled);
        assert!(!state.controls().next_enabled);
    }

    #[test]
    fn index_is_derived_from_scroll_offset() {
        let mut state = instant_carousel(5);
        state.on_scroll(1.4 * WIDTH, WIDTH);
        assert_eq!(state.current_index(), Some(1));
        state.on_scroll(1.6 * WIDTH, WIDTH);
        assert_eq!(state.current_index(), Some(2));
        state.on_scroll(99.0 * WIDTH, WIDTH);
        assert_eq!(state.current_index(), Some(4));
    }

    #[test]
    fn zero_width_viewport_does_not_divide_by_zero() {
        let mut state = instant_carousel(3);
        state.on_scroll(2.0, 0.0);
        state.width = 0.0;
        assert_eq!(state.current_index(), Some(2));
    }

    #[test]
    fn scroll_bursts_recompute_once_per_frame() {
        let mut state = instant_carousel(5);

        assert_eq!(state.on_scroll(10.0, WIDTH), Effect::FrameRequested);
        for step in 2..20 {
            assert_eq!(state.on_scroll(step as f32 * 60.0, WIDTH), Effect::None);
        }
        assert!(state.needs_frame());

        let frame = state.on_frame(Instant::now());
        assert!(frame.recomputed);
        assert_eq!(state.controls().current, Some(2));

        assert!(!state.on_frame(Instant::now()).recomputed);
        assert!(!state.needs_frame());
    }

    #[test]
    fn controls_lag_until_the_frame() {
        let mut state = instant_carousel(3);
        state.on_scroll(2.0 * WIDTH, WIDTH);
        assert_eq!(state.current_index(), Some(2));
        assert_eq!(state.controls().current, Some(0));
        state.on_frame(Instant::now());
        assert_eq!(state.controls().current, Some(2));
    }

    #[test]
    fn animated_navigation_lands_on_target() {
        let start = Instant::now();
        let mut state = State::new(Platform::Macos, Duration::from_millis(200));
        state.render(items(3), RenderOptions::default());

        assert_eq!(state.go_to(2, start), Effect::FrameRequested);
        assert!(state.needs_frame());

        let mid = state.on_frame(start + Duration::from_millis(100));
        let offset = mid.scroll_to.expect("animation should move the viewport");
        assert!(offset > 0.0 && offset < 2.0 * sizing::CAROUSEL_WIDTH);

        let end = state.on_frame(start + Duration::from_millis(200));
        assert_eq!(end.scroll_to, Some(2.0 * sizing::CAROUSEL_WIDTH));
        assert!(end.recomputed);
        assert_eq!(state.controls().current, Some(2));
        assert!(!state.needs_frame());
    }

    #[test]
    fn prev_and_next_step_by_one() {
        let mut state = instant_carousel(3);
        state.next(Instant::now());
        assert_eq!(state.current_index(), Some(1));
        state.next(Instant::now());
        state.next(Instant::now());
        assert_eq!(state.current_index(), Some(2));
        state.prev(Instant::now());
        assert_eq!(state.current_index(), Some(1));
    }

    #[test]
    fn arrow_keys_require_focus() {
        let mut state = instant_carousel(3);
        let (outcome, _) = state.handle_key(NavKey::Right, Instant::now());
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert_eq!(state.current_index(), Some(0));

        state.handle(Message::PointerEntered);
        let (outcome, effect) = state.handle_key(NavKey::Right, Instant::now());
        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(effect, Effect::ScrollTo(WIDTH));

        let (outcome, _) = state.handle_key(NavKey::Left, Instant::now());
        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(state.current_index(), Some(0));

        state.handle(Message::PointerLeft);
        let (outcome, _) = state.handle_key(NavKey::Right, Instant::now());
        assert_eq!(outcome, KeyOutcome::Ignored);
    }

    #[test]
    fn dot_press_navigates_and_marks_current() {
        let mut state = instant_carousel(4);
        state.handle(Message::DotPressed(3));
        assert_eq!(state.controls().current, Some(3));
    }

    #[test]
    fn slide_press_opens_original() {
        let mut state = instant_carousel(2);
        assert_eq!(
            state.handle(Message::SlidePressed(1)),
            Effect::OpenAsset("AppImages/tvOS/2.png".to_string())
        );
        assert_eq!(state.handle(Message::SlidePressed(9)), Effect::None);
    }

    #[test]
    fn single_slide_hides_navigation() {
        let state = instant_carousel(1);
        assert!(state.is_single());
        assert!(!state.controls().prev_enabled);
        assert!(!state.controls().next_enabled);
        assert_eq!(state.controls().current, Some(0));
    }

    #[test]
    fn only_first_slide_of_active_platform_is_eager() {
        let mut active = State::new(Platform::Tvos, Duration::ZERO);
        active.render(items(3), RenderOptions { is_active: true });
        let priorities: Vec<_> = active.slides().iter().map(ImageSlot::priority).collect();
        assert_eq!(
            priorities,
            vec![LoadPriority::Eager, LoadPriority::Lazy, LoadPriority::Lazy]
        );

        let mut inactive = State::new(Platform::Ios, Duration::ZERO);
        inactive.render(items(3), RenderOptions { is_active: false });
        assert!(inactive
            .slides()
            .iter()
            .all(|slide| slide.priority() == LoadPriority::Lazy));
        assert!(inactive.pending_loads(false).is_empty());
    }

    #[test]
    fn displayed_carousel_loads_current_and_neighbours() {
        let mut state = instant_carousel(5);
        let first: Vec<usize> = state.pending_loads(true).iter().map(|r| r.index).collect();
        assert_eq!(first, vec![0, 1]);

        state.go_to(3, Instant::now());
        let next: Vec<usize> = state.pending_loads(true).iter().map(|r| r.index).collect();
        assert_eq!(next, vec![2, 3, 4]);
        assert!(state.pending_loads(true).is_empty());
    }

    #[test]
    fn rerender_drops_stale_results() {
        let mut state = instant_carousel(2);
        let request = state.pending_loads(true).remove(0);

        state.render(items(2), RenderOptions { is_active: true });
        let pixel = ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        assert!(state
            .on_image_result(request.generation, request.index, &request.src, Ok(pixel))
            .is_none());
        assert!(state.slides()[0].image().is_none());
    }

    #[test]
    fn failed_primary_requests_fallback_once() {
        let mut state = instant_carousel(1);
        let request = state.pending_loads(true).remove(0);

        let retry = state
            .on_image_result(
                request.generation,
                request.index,
                &request.src,
                Err(Error::Network("HTTP 404".into())),
            )
            .expect("optimized failure should fall back");
        assert_eq!(retry.src, "AppImages/tvOS/1.png");

        let gave_up = state.on_image_result(
            retry.generation,
            retry.index,
            &retry.src,
            Err(Error::Network("HTTP 404".into())),
        );
        assert!(gave_up.is_none());
        assert!(state.slides()[0].is_broken());
    }

    #[test]
    fn render_resets_position_and_replaces_slides() {
        let mut state = instant_carousel(4);
        state.go_to(3, Instant::now());
        let generation = state.generation();

        assert_eq!(
            state.render(items(2), RenderOptions::default()),
            Effect::ScrollTo(0.0)
        );
        assert_eq!(state.generation(), generation + 1);
        assert_eq!(state.len(), 2);
        assert_eq!(state.controls().current, Some(0));
    }
}
