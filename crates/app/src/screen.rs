use flame_core::{HomeState, Route};

/// The screen currently mounted.
///
/// Home owns its sample state, so leaving Home drops every reading and
/// coming back starts from an empty chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Home(HomeState),
}

impl Screen {
    /// Mount the screen behind `route` with fresh state.
    pub fn mount(route: Route) -> Self {
        match route {
            Route::Onboarding => Screen::Onboarding,
            Route::Home       => Screen::Home(HomeState::new()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Onboarding => Route::Onboarding,
            Screen::Home(_)    => Route::Home,
        }
    }

    /// Switch to `route`.  Returns `false` (and keeps the current state) if
    /// that screen is already mounted.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.route() == route {
            return false;
        }
        *self = Screen::mount(route);
        true
    }

    /// Apply a reading to the mounted Home screen.  Readings that arrive
    /// after Home was unmounted are discarded; returns whether it was applied.
    pub fn record_sample(&mut self, value: u8) -> bool {
        match self {
            Screen::Home(state) => {
                state.record(value);
                true
            }
            Screen::Onboarding => false,
        }
    }

    /// Whether the periodic sample feed should be running.
    pub fn wants_samples(&self) -> bool {
        matches!(self, Screen::Home(_))
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::mount(Route::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_onboarding_without_feed() {
        let screen = Screen::default();
        assert_eq!(screen.route(), Route::Onboarding);
        assert!(!screen.wants_samples());
    }

    #[test]
    fn start_mounts_empty_home() {
        let mut screen = Screen::default();
        assert!(screen.navigate(Route::Home));
        assert!(screen.wants_samples());
        assert_eq!(screen, Screen::Home(HomeState::new()));
    }

    #[test]
    fn home_goes_from_placeholder_to_chart_once() {
        let mut screen = Screen::mount(Route::Home);
        let Screen::Home(state) = &screen else { unreachable!() };
        assert!(!state.has_data());

        for v in [10, 20, 30] {
            assert!(screen.record_sample(v));
            let Screen::Home(state) = &screen else { unreachable!() };
            assert!(state.has_data());
        }
    }

    #[test]
    fn leaving_home_drops_samples() {
        let mut screen = Screen::mount(Route::Home);
        screen.record_sample(64);

        assert!(screen.navigate(Route::Onboarding));
        assert!(!screen.record_sample(99));
        assert!(!screen.wants_samples());

        screen.navigate(Route::Home);
        assert_eq!(screen, Screen::Home(HomeState::new()));
    }

    #[test]
    fn navigating_to_current_screen_keeps_state() {
        let mut screen = Screen::mount(Route::Home);
        screen.record_sample(42);

        assert!(!screen.navigate(Route::Home));
        let Screen::Home(state) = &screen else { unreachable!() };
        assert_eq!(state.current, 42);
    }
}
