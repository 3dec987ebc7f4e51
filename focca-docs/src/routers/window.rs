use iced::{Size, Task};

use crate::app::{App, AppEvent};
use crate::layout::Viewport;

/// Re-classify the viewport when the window is resized.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    let viewport = Viewport::from_width(size.width, app.config.breakpoint);
    if viewport != app.viewport {
        log::debug!("viewport changed to {viewport:?} at {}px", size.width);
        app.viewport = viewport;
    }
    Task::none()
}
