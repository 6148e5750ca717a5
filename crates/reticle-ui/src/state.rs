/// UI-side session state (separate from the app's AnalysisState).
#[derive(Default)]
pub struct UiState {
    pub results_shown: u64,
    pub last_command: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_result(&mut self, command: String) {
        self.results_shown += 1;
        self.last_command = Some(command);
    }
}
