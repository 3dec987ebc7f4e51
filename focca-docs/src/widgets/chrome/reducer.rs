use iced::Task;

use super::event::{ChromeEffect, ChromeEvent, ChromeIntent};
use crate::routes::HOME_PATH;

/// Reduce a header intent into its effect.
pub(crate) fn reduce(intent: ChromeIntent) -> Task<ChromeEvent> {
    Task::done(ChromeEvent::Effect(effect_for(intent)))
}

fn effect_for(intent: ChromeIntent) -> ChromeEffect {
    match intent {
        ChromeIntent::LogoPressed => ChromeEffect::Navigate {
            target: String::from(HOME_PATH),
        },
        ChromeIntent::ToggleSidebar => ChromeEffect::ToggleSidebar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_navigates_home() {
        assert_eq!(effect_for(ChromeIntent::LogoPressed), ChromeEffect::Navigate {
            target: String::from("/"),
        });
    }

    #[test]
    fn menu_control_requests_sidebar_toggle() {
        assert_eq!(
            effect_for(ChromeIntent::ToggleSidebar),
            ChromeEffect::ToggleSidebar
        );
    }
}
