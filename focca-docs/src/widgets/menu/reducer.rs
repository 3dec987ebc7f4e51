use iced::Task;

use super::event::{MenuEffect, MenuIntent};
use super::model::PressOutcome;
use super::state::MenuNodeState;

/// Reduce a menu intent into local flag updates and navigation effects.
pub(super) fn reduce(
    state: &mut MenuNodeState,
    intent: MenuIntent,
) -> Task<MenuEffect> {
    let outcome = apply(state, intent);
    match outcome {
        PressOutcome::Navigate { target } => {
            Task::done(MenuEffect::Navigate { target })
        },
        PressOutcome::Toggled { .. } | PressOutcome::Ignored => Task::none(),
    }
}

/// Apply an intent to the node state and report what happened.
pub(super) fn apply(
    state: &mut MenuNodeState,
    intent: MenuIntent,
) -> PressOutcome {
    match intent {
        MenuIntent::RowPressed { address } => state.press_row(address.steps()),
        MenuIntent::TargetPressed { address } => {
            state.press_target(address.steps())
        },
    }
}
