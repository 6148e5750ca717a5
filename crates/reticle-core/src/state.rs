use reticle_types::CrosshairConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Idle,
    Analyzing,
    Success,
    Error,
}

/// The single authoritative analysis value. Transitions replace the
/// whole state; a config is only ever observable in `Success` and an
/// error message only in `Error`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisState {
    status: AnalysisStatus,
    config: Option<CrosshairConfig>,
    source_image: Option<String>,
    error_message: Option<String>,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self {
            status: AnalysisStatus::Idle,
            config: None,
            source_image: None,
            error_message: None,
        }
    }

    pub fn status(&self) -> AnalysisStatus {
        self.status
    }

    pub fn config(&self) -> Option<&CrosshairConfig> {
        self.config.as_ref()
    }

    pub fn source_image(&self) -> Option<&str> {
        self.source_image.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Accept a new screenshot. Only `Idle` and `Error` take uploads;
    /// returns false (and changes nothing) otherwise.
    pub fn begin_analysis(&mut self, image: String) -> bool {
        match self.status {
            AnalysisStatus::Idle | AnalysisStatus::Error => {
                *self = Self {
                    status: AnalysisStatus::Analyzing,
                    config: None,
                    source_image: Some(image),
                    error_message: None,
                };
                true
            }
            AnalysisStatus::Analyzing | AnalysisStatus::Success => false,
        }
    }

    /// Inference succeeded.
    pub fn complete(&mut self, config: CrosshairConfig) -> bool {
        if self.status != AnalysisStatus::Analyzing {
            return false;
        }

        *self = Self {
            status: AnalysisStatus::Success,
            config: Some(config),
            source_image: self.source_image.take(),
            error_message: None,
        };
        true
    }

    /// Inference failed, whatever the reason.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if self.status != AnalysisStatus::Analyzing {
            return false;
        }

        *self = Self {
            status: AnalysisStatus::Error,
            config: None,
            source_image: self.source_image.take(),
            error_message: Some(message.into()),
        };
        true
    }

    /// Back to `Idle`, discarding config, image and error.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> CrosshairConfig {
        CrosshairConfig {
            size: 3.0,
            thickness: 1.0,
            gap: -2.0,
            draw_outline: true,
            outline_thickness: 1.0,
            dot: true,
            color_r: 0,
            color_g: 255,
            color_b: 0,
            alpha: 255,
            style: 4,
            t_style: false,
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = AnalysisState::new();
        assert_eq!(state.status(), AnalysisStatus::Idle);
        assert!(state.config().is_none());
        assert!(state.source_image().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn upload_moves_idle_to_analyzing() {
        let mut state = AnalysisState::new();
        assert!(state.begin_analysis("data:image/png;base64,AAAA".to_string()));
        assert_eq!(state.status(), AnalysisStatus::Analyzing);
        assert_eq!(state.source_image(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn upload_is_refused_while_analyzing() {
        let mut state = AnalysisState::new();
        assert!(state.begin_analysis("first".to_string()));
        assert!(!state.begin_analysis("second".to_string()));
        assert_eq!(state.source_image(), Some("first"));
    }

    #[test]
    fn upload_is_refused_after_success_until_reset() {
        let mut state = AnalysisState::new();
        assert!(state.begin_analysis("first".to_string()));
        assert!(state.complete(sample_config()));
        assert!(!state.begin_analysis("second".to_string()));

        state.reset();
        assert!(state.begin_analysis("second".to_string()));
    }

    #[test]
    fn analyzing_reaches_exactly_one_terminal_state() {
        let mut state = AnalysisState::new();
        state.begin_analysis("img".to_string());

        assert!(state.complete(sample_config()));
        assert_eq!(state.status(), AnalysisStatus::Success);
        assert!(state.config().is_some());
        assert!(state.error_message().is_none());

        // The other terminal transition no longer applies.
        assert!(!state.fail("too late"));
        assert_eq!(state.status(), AnalysisStatus::Success);
    }

    #[test]
    fn failure_carries_the_message_and_no_config() {
        let mut state = AnalysisState::new();
        state.begin_analysis("img".to_string());

        assert!(state.fail("could not analyze"));
        assert_eq!(state.status(), AnalysisStatus::Error);
        assert_eq!(state.error_message(), Some("could not analyze"));
        assert!(state.config().is_none());
        assert!(!state.complete(sample_config()));
    }

    #[test]
    fn new_upload_after_failure_clears_the_error() {
        let mut state = AnalysisState::new();
        state.begin_analysis("first".to_string());
        state.fail("boom");

        assert!(state.begin_analysis("second".to_string()));
        assert_eq!(state.status(), AnalysisStatus::Analyzing);
        assert!(state.error_message().is_none());
        assert_eq!(state.source_image(), Some("second"));
    }

    #[test]
    fn terminal_transitions_do_not_apply_outside_analyzing() {
        let mut state = AnalysisState::new();
        assert!(!state.complete(sample_config()));
        assert!(!state.fail("no-op"));
        assert_eq!(state.status(), AnalysisStatus::Idle);
    }

    #[test]
    fn reset_discards_everything() {
        let mut state = AnalysisState::new();
        state.begin_analysis("img".to_string());
        state.complete(sample_config());

        state.reset();
        assert_eq!(state, AnalysisState::new());
    }
}
