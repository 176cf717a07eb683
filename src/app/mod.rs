// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the screenshot collections.
//!
//! The `App` struct owns one carousel and one grid per platform, resolves
//! where the screenshots are published, runs the listing pipeline and turns
//! component effects into tasks (image downloads, scrolling, opening assets).

pub mod config;
pub mod identity;
mod message;
pub mod paths;
pub mod pipeline;
pub mod selection;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, SlotTarget};

use crate::http;
use crate::i18n::fluent::I18n;
use crate::listing::GitHubLister;
use crate::media::fetch::{resolve_asset_base, AssetClient};
use crate::platform::Platform;
use crate::ui::theming::ThemeMode;
use crate::ui::{carousel, grid};
use identity::HostingIdentity;
use iced::{window, Element, Subscription, Task, Theme};
use selection::{PresentationMode, Selection};
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Clients bound to one resolved hosting identity.
#[derive(Debug, Clone)]
struct Remote {
    identity: HostingIdentity,
    lister: GitHubLister,
    assets: AssetClient,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    grid_columns: u16,
    remote: Option<Remote>,
    mode: PresentationMode,
    selection: Selection,
    carousels: Vec<carousel::State>,
    grids: Vec<grid::State>,
    loading: bool,
    /// Localization key of a warning shown above the collections.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode)
            .field("selection", &self.selection)
            .field("loading", &self.loading)
            .field("has_source", &self.remote.is_some())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, resolves the screenshot source and starts the
    /// first pipeline run.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let page_url = flags
            .page_url
            .or_else(|| config.source.page_url.clone())
            .and_then(|raw| match Url::parse(&raw) {
                Ok(url) => Some(url),
                Err(err) => {
                    warn!(page_url = %raw, error = %err, "ignoring invalid page URL");
                    None
                }
            });

        let owner = flags.owner.or_else(|| config.source.owner.clone());
        let repo = flags.repo.or_else(|| config.source.repo.clone());
        let remote = identity::resolve(owner.as_deref(), repo.as_deref(), page_url.as_ref())
            .and_then(|identity| connect(identity, &config.source, page_url.as_ref()));

        let animation = Duration::from_millis(config.display.scroll_animation_ms());
        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            grid_columns: config.display.grid_columns(),
            remote,
            mode: PresentationMode::default(),
            selection: Selection::initial(
                page_url.as_ref(),
                flags.preview.as_deref(),
                flags.gallery.as_deref(),
            ),
            carousels: Platform::ALL
                .into_iter()
                .map(|platform| carousel::State::new(platform, animation))
                .collect(),
            grids: Platform::ALL.into_iter().map(grid::State::new).collect(),
            loading: false,
            notice: config_warning,
        };

        let task = app.start_pipeline();
        (app, task)
    }

    /// Runs the listing pipeline unless one is already running or no source
    /// is configured.
    fn start_pipeline(&mut self) -> Task<Message> {
        if self.loading {
            return Task::none();
        }
        let Some(remote) = &self.remote else {
            info!("no screenshot source resolved, nothing to list");
            return Task::none();
        };

        info!(
            owner = %remote.identity.owner,
            repo = %remote.identity.repo,
            "listing screenshot collections"
        );
        self.loading = true;
        let lister = remote.lister.clone();
        Task::perform(
            async move { pipeline::load_collections(&lister).await },
            Message::CollectionsLoaded,
        )
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.remote {
            Some(remote) => format!("{}/{} - {app_name}", remote.identity.owner, remote.identity.repo),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub = subscription::create_frame_subscription(
            self.carousels.iter().any(carousel::State::needs_frame),
        );

        Subscription::batch([event_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if matches!(message, Message::Refresh) {
            return self.start_pipeline();
        }

        let mut ctx = update::UpdateContext {
            mode: &mut self.mode,
            selection: &mut self.selection,
            carousels: &mut self.carousels,
            grids: &mut self.grids,
            assets: self.remote.as_ref().map(|remote| &remote.assets),
            loading: &mut self.loading,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            identity: self.remote.as_ref().map(|remote| &remote.identity),
            mode: self.mode,
            selection: self.selection,
            carousels: &self.carousels,
            grids: &self.grids,
            grid_columns: self.grid_columns,
            loading: self.loading,
            notice: self.notice.as_deref(),
        })
    }
}

/// Builds the listing and asset clients for `identity`.
///
/// Failures are logged and leave the application without a source, like an
/// unresolved identity.
fn connect(
    identity: HostingIdentity,
    source: &config::SourceConfig,
    page_url: Option<&Url>,
) -> Option<Remote> {
    let user_agent = source
        .user_agent
        .as_deref()
        .unwrap_or(http::DEFAULT_USER_AGENT);
    let api_base = source
        .api_base_url
        .as_deref()
        .unwrap_or(config::DEFAULT_API_BASE_URL);

    let built = http::build_client(user_agent).and_then(|client| {
        let lister = GitHubLister::new(client.clone(), api_base, &identity.owner, &identity.repo)?;
        let base = resolve_asset_base(
            source.asset_base_url.as_deref(),
            page_url,
            &identity.owner,
            &identity.repo,
        )?;
        Ok((lister, AssetClient::new(client, base)))
    });

    match built {
        Ok((lister, assets)) => Some(Remote {
            identity,
            lister,
            assets,
        }),
        Err(err) => {
            warn!(error = %err, "screenshot source unavailable");
            None
        }
    }
}
