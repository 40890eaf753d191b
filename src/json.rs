use serde::Serialize;

use crate::{Display, ScreenConfig, dialog::DialogOutcome};

/// Serializable display info for JSON output
#[derive(Serialize)]
pub struct DisplayInfoJson {
    pub id: usize,
    pub name: String,
    pub string: String,
    pub key: String,
    pub primary: bool,
    /// Role from the configuration; `None` if the display is not listed
    pub role: Option<String>,
}

/// Serializable dialog result for JSON output
#[derive(Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum DialogOutcomeJson {
    Accepted {
        primary: String,
        prompt: String,
        electronic_whiteboard: String,
    },
    Cancelled,
}

/// Converts display data to JSON serializable format
pub fn display_to_json(display: &Display, config: &ScreenConfig) -> DisplayInfoJson {
    DisplayInfoJson {
        id: display.index(),
        name: display.name().to_string(),
        string: display.string().to_string(),
        key: display.key().to_string(),
        primary: display.is_primary(),
        role: display.role(config).map(|role| role.to_string()),
    }
}

/// Converts a dialog outcome to JSON serializable format
pub fn outcome_to_json(outcome: &DialogOutcome) -> DialogOutcomeJson {
    match outcome {
        DialogOutcome::Accepted(mapping) => DialogOutcomeJson::Accepted {
            primary: mapping.primary.clone(),
            prompt: mapping.prompt.clone(),
            electronic_whiteboard: mapping.electronic_whiteboard.clone(),
        },
        DialogOutcome::Cancelled => DialogOutcomeJson::Cancelled,
    }
}
