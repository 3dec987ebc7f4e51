use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Chrome(event) => routers::chrome::route(app, event),
        AppEvent::PageShell(intent) => routers::page_shell::route(app, intent),
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::Content(event) => routers::content::route(app, event),
        AppEvent::Navigate { target } => {
            routers::navigation::navigate(app, target)
        },
        AppEvent::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => routers::window::handle_resize(app, size),
        AppEvent::Window(_) => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use iced::{Size, window};

    use super::update;
    use crate::app::{App, AppEvent, WINDOW_HEIGHT};
    use crate::config::SiteConfig;
    use crate::layout::Viewport;
    use crate::widgets::code_viewer::services::FakeClipboard;

    fn app() -> App {
        App::from_config(SiteConfig::default(), Box::new(FakeClipboard::default()))
    }

    #[test]
    fn given_window_opened_narrow_when_updated_then_viewport_is_narrow() {
        let mut app = app();
        assert_eq!(app.viewport, Viewport::Wide);

        let _task = update(
            &mut app,
            AppEvent::Window(window::Event::Opened {
                position: None,
                size: Size::new(480.0, WINDOW_HEIGHT),
            }),
        );

        assert_eq!(app.viewport, Viewport::Narrow);
    }

    #[test]
    fn given_narrow_window_when_resized_past_breakpoint_then_viewport_is_wide() {
        let mut app = app();
        let _narrow = update(
            &mut app,
            AppEvent::Window(window::Event::Resized(Size::new(
                600.0,
                WINDOW_HEIGHT,
            ))),
        );
        assert_eq!(app.viewport, Viewport::Narrow);

        let _wide = update(
            &mut app,
            AppEvent::Window(window::Event::Resized(Size::new(
                768.0,
                WINDOW_HEIGHT,
            ))),
        );

        assert_eq!(app.viewport, Viewport::Wide);
    }
}
