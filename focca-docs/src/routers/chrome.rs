use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::chrome::{self, ChromeEffect, ChromeEvent};
use crate::widgets::page_shell::PageShellIntent;

/// Route a header event through the reducer or app orchestration.
pub(crate) fn route(_app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    match event {
        ChromeEvent::Intent(intent) => {
            chrome::reduce(intent).map(AppEvent::Chrome)
        },
        ChromeEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_effect(effect: ChromeEffect) -> Task<AppEvent> {
    match effect {
        ChromeEffect::Navigate { target } => {
            Task::done(AppEvent::Navigate { target })
        },
        ChromeEffect::ToggleSidebar => {
            Task::done(AppEvent::PageShell(PageShellIntent::ToggleSidebar))
        },
    }
}
