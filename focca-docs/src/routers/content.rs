use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::content::{
    ContentCtx, ContentEffect, ContentEvent, ContentIntent,
};

/// Route a content event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: ContentEvent) -> Task<AppEvent> {
    match event {
        ContentEvent::Intent(intent) => route_intent(app, intent),
        ContentEvent::Effect(ContentEffect::Navigate { target }) => {
            Task::done(AppEvent::Navigate { target })
        },
    }
}

fn route_intent(app: &mut App, intent: ContentIntent) -> Task<AppEvent> {
    let ctx = ContentCtx {
        clipboard: app.clipboard.as_ref(),
    };
    app.widgets.content.reduce(intent, &ctx).map(AppEvent::Content)
}
