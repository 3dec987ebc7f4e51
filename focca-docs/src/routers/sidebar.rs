use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::page_shell::PageShellIntent;
use crate::widgets::sidebar::{SidebarEffect, SidebarEvent, SidebarIntent};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(intent) => route_intent(app, intent),
        SidebarEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, intent: SidebarIntent) -> Task<AppEvent> {
    app.widgets.sidebar.reduce(intent).map(AppEvent::Sidebar)
}

fn route_effect(effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::Navigate { target } => {
            Task::done(AppEvent::Navigate { target })
        },
        SidebarEffect::Dismiss => {
            Task::done(AppEvent::PageShell(PageShellIntent::DismissSidebar))
        },
    }
}
