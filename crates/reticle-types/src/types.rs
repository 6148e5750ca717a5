use crate::crosshair::CrosshairConfig;

/// Messages flowing over the app<->ui channels.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A screenshot was accepted by the intake; the payload is a
    /// `data:<mime>;base64,...` string
    ImageSelected {
        payload: String,
        source: ImageSource,
    },
    AnalysisStarted,
    /// Analysis finished; the ui derives the preview and command string
    ShowResult(CrosshairConfig),
    AnalysisFailed {
        message: String,
    },
    StatusUpdate {
        status: String,
        analyzing: bool,
    },
    /// Discard the current result and image, back to idle
    Reset,
    Shutdown,
}

/// Where an accepted screenshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// New file in the watched drop directory
    DropDir,
    /// Path given on the command line or typed at the prompt
    Picker,
}
