use super::event::PageShellIntent;
use super::state::PageShellState;

/// Apply a page shell intent to the visibility flag.
pub(super) fn reduce(state: &mut PageShellState, intent: PageShellIntent) {
    let current = state.sidebar();
    let next = match intent {
        PageShellIntent::ToggleSidebar => current.toggle(),
        PageShellIntent::DismissSidebar => current.dismiss(),
    };

    if next != current {
        log::debug!("sidebar visibility: {current:?} -> {next:?}");
    }
    state.set_sidebar(next);
}
