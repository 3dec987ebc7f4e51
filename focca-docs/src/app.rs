#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use focca_ui_menu::{MenuTree, validate_entries};
use iced::{Element, Subscription, Task, Theme};

use crate::config::{self, ConfigLoadStatus, SiteConfig};
use crate::content::{self, Page};
use crate::layout::Viewport;
use crate::routers;
use crate::routes::{HOME_PATH, RouteTable};
use crate::theme::SitePalette;
use crate::widgets::chrome::ChromeEvent;
use crate::widgets::code_viewer::services::{ClipboardWriter, SystemClipboard};
use crate::widgets::content::{ContentEvent, ContentWidget};
use crate::widgets::page_shell::{PageShellIntent, PageShellWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const WINDOW_HEIGHT: f32 = 768.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Header
    Chrome(ChromeEvent),
    // Page shell
    PageShell(PageShellIntent),
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Page content widget
    Content(ContentEvent),
    // Cross-widget flows
    Navigate { target: String },
    // Direct operations
    Window(iced::window::Event),
}

/// Widgets mounted for the current page.
pub(crate) struct Widgets {
    pub(crate) page_shell: PageShellWidget,
    pub(crate) sidebar: SidebarWidget,
    pub(crate) content: ContentWidget,
}

impl Widgets {
    pub(crate) fn new(menu: &MenuTree, page: Page) -> Self {
        Self {
            page_shell: PageShellWidget::new(),
            sidebar: SidebarWidget::new(menu),
            content: ContentWidget::mount(page),
        }
    }
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: SiteConfig,
    pub(crate) routes: RouteTable,
    pub(crate) menu: MenuTree,
    pub(crate) viewport: Viewport,
    pub(crate) palette: SitePalette,
    pub(crate) clipboard: Box<dyn ClipboardWriter>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application on the home page.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let app = Self::from_config(
            load_site_config(),
            Box::new(SystemClipboard::connect()),
        );
        (app, Task::none())
    }

    /// Build the app on the home page from a loaded configuration.
    pub(crate) fn from_config(
        config: SiteConfig,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        let entries = config.menu.clone().unwrap_or_else(content::default_menu);
        for issue in validate_entries(&entries) {
            log::warn!("menu definition: {issue}");
        }
        let menu = MenuTree::from_entries(entries);
        let routes = RouteTable::new(&config.basename);
        let viewport = Viewport::from_width(WINDOW_WIDTH, config.breakpoint);
        let page = routers::navigation::resolve_page(&routes, HOME_PATH);
        let widgets = Widgets::new(&menu, page);

        App {
            config,
            routes,
            menu,
            viewport,
            palette: SitePalette::default(),
            clipboard,
            widgets,
        }
    }

    /// Return the window title for the current page.
    pub(crate) fn title(&self) -> String {
        format!("{} | Focca", self.widgets.content.title())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.palette)
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

/// Read the site configuration, falling back to defaults on any problem.
fn load_site_config() -> SiteConfig {
    let load = match config::load_config() {
        Ok(load) => load,
        Err(err) => {
            log::warn!("site config unreadable, using defaults: {err}");
            return SiteConfig::default();
        },
    };

    let (config, status, issues) = load.into_parts();
    match status {
        ConfigLoadStatus::Loaded => log::info!("site config loaded"),
        ConfigLoadStatus::Missing => {
            log::info!("no site config found, using defaults")
        },
        ConfigLoadStatus::Invalid(reason) => {
            log::warn!("site config is not valid JSON, using defaults: {reason}")
        },
    }
    for issue in issues {
        log::warn!("site config: {issue}");
    }

    config
}
