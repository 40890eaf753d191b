use core::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Config label of the primary (control) screen
pub const PRIMARY_LABEL: &str = "主控屏";
/// Config label of the prompt screen
pub const PROMPT_LABEL: &str = "提示屏";
/// Config label of the electronic whiteboard screen
pub const WHITEBOARD_LABEL: &str = "白板屏";

/// The role a screen plays in the setup
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Primary,
    Prompt,
    ElectronicWhiteboard,
    Unknown,
}

impl Role {
    /// The roles that can be assigned to a display, in dialog order
    pub const ASSIGNABLE: [Role; 3] = [Role::Primary, Role::Prompt, Role::ElectronicWhiteboard];

    /// Maps a `NickName` from the config file to a role
    ///
    /// Matching is exact; anything else (including a blank label) is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            PRIMARY_LABEL => Role::Primary,
            PROMPT_LABEL => Role::Prompt,
            WHITEBOARD_LABEL => Role::ElectronicWhiteboard,
            _ => Role::Unknown,
        }
    }

    /// The `NickName` used for this role in the config file
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Role::Primary => Some(PRIMARY_LABEL),
            Role::Prompt => Some(PROMPT_LABEL),
            Role::ElectronicWhiteboard => Some(WHITEBOARD_LABEL),
            Role::Unknown => None,
        }
    }

    /// Title shown next to the role's selection control
    pub fn title(&self) -> &'static str {
        match self {
            Role::Primary => "Primary screen",
            Role::Prompt => "Prompt screen",
            Role::ElectronicWhiteboard => "Electronic whiteboard screen",
            Role::Unknown => "Unknown screen",
        }
    }

    pub fn is_assignable(&self) -> bool {
        *self != Role::Unknown
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Primary => write!(f, "primary"),
            Role::Prompt => write!(f, "prompt"),
            Role::ElectronicWhiteboard => write!(f, "electronic-whiteboard"),
            Role::Unknown => write!(f, "unknown"),
        }
    }
}

/// Errors that occur while parsing a role from a string
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseRoleError {
    #[error(
        "Invalid role `{0}`. Allowed values: `primary`, `prompt`, `electronic-whiteboard`, `unknown`"
    )]
    InvalidRole(String),
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let label = Role::from_label(s.trim());
        if label != Role::Unknown {
            return Ok(label);
        }

        match s.trim().to_lowercase().as_str() {
            "primary" | "main" => Ok(Role::Primary),
            "prompt" => Ok(Role::Prompt),
            "electronic-whiteboard" | "whiteboard" | "eblackboard" => {
                Ok(Role::ElectronicWhiteboard)
            }
            "unknown" => Ok(Role::Unknown),
            _ => Err(ParseRoleError::InvalidRole(s.to_string())),
        }
    }
}
