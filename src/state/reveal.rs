/// How a revealed region reacts to intersection changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Stop observing after the first qualifying intersection.
    pub once: bool,
    /// Fraction of the element that must be visible to count as intersecting.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { once: true, threshold: 0.15 }
    }
}

/// Shown/hidden flag driven by viewport intersection reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    shown: bool,
}

impl RevealState {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Apply one intersection report. Returns true when the caller should
    /// stop observing (one-shot reveal has fired).
    pub fn on_intersection(&mut self, intersecting: bool, config: &RevealConfig) -> bool {
        if intersecting {
            self.shown = true;
            config.once
        } else {
            if !config.once {
                self.shown = false;
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealConfig, RevealState};

    #[test]
    fn starts_hidden_and_shows_on_first_intersection() {
        let config = RevealConfig::default();
        let mut state = RevealState::default();
        assert!(!state.is_shown());

        let done = state.on_intersection(true, &config);
        assert!(state.is_shown());
        assert!(done, "one-shot reveal should release the observer");
    }

    #[test]
    fn one_shot_reveal_never_reverts() {
        let config = RevealConfig::default();
        let mut state = RevealState::default();
        state.on_intersection(true, &config);
        state.on_intersection(false, &config);
        assert!(state.is_shown());
    }

    #[test]
    fn repeating_reveal_hides_again_on_exit() {
        let config = RevealConfig { once: false, ..RevealConfig::default() };
        let mut state = RevealState::default();

        assert!(!state.on_intersection(true, &config));
        assert!(state.is_shown());
        assert!(!state.on_intersection(false, &config));
        assert!(!state.is_shown());
        state.on_intersection(true, &config);
        assert!(state.is_shown());
    }

    #[test]
    fn leaving_view_before_first_entry_stays_hidden() {
        let config = RevealConfig::default();
        let mut state = RevealState::default();
        assert!(!state.on_intersection(false, &config));
        assert!(!state.is_shown());
    }

    #[test]
    fn default_threshold_is_fifteen_percent() {
        assert!((RevealConfig::default().threshold - 0.15).abs() < f64::EPSILON);
    }
}
