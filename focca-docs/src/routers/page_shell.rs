use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::page_shell::PageShellIntent;

/// Apply a visibility intent to the mounted page shell.
pub(crate) fn route(app: &mut App, intent: PageShellIntent) -> Task<AppEvent> {
    app.widgets.page_shell.reduce(intent);
    Task::none()
}
