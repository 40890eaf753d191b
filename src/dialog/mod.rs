//! Manual assignment of roles to live displays
//!
//! [`DialogForm`] holds the state of the form and performs the validation;
//! the front-ends only render it and forward the operator's input.

use core::fmt;

use thiserror::Error;

use crate::{config::ScreenConfig, display::DisplaySet, types::Role};

#[cfg(feature = "gui")]
mod gui;
mod terminal;

#[cfg(feature = "gui")]
pub use gui::EguiDialog;
pub use terminal::TerminalDialog;

/// Title of the dialog window
pub const DIALOG_TITLE: &str = "Screen Manager";

/// Error type for the dialog module
#[derive(Error, Debug)]
pub enum DialogError {
    #[error("{} is not configured correctly", .0.title())]
    InvalidSelection(Role),
    #[error("Failed to talk to the operator")]
    Io(#[from] std::io::Error),
    #[error("Failed to run the dialog window: {0}")]
    Gui(String),
}

type Result<T = ()> = std::result::Result<T, DialogError>;

/// One device identifier per assignable role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMapping {
    pub primary: String,
    pub prompt: String,
    pub electronic_whiteboard: String,
}

impl RoleMapping {
    /// Returns the device assigned to `role`
    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::Primary => Some(&self.primary),
            Role::Prompt => Some(&self.prompt),
            Role::ElectronicWhiteboard => Some(&self.electronic_whiteboard),
            Role::Unknown => None,
        }
    }

    /// Assigns `device` to `role`; `Unknown` is ignored
    pub fn set(&mut self, role: Role, device: impl Into<String>) {
        let slot = match role {
            Role::Primary => &mut self.primary,
            Role::Prompt => &mut self.prompt,
            Role::ElectronicWhiteboard => &mut self.electronic_whiteboard,
            Role::Unknown => return,
        };
        *slot = device.into();
    }
}

impl fmt::Display for RoleMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "primary={}, prompt={}, electronic-whiteboard={}",
            self.primary, self.prompt, self.electronic_whiteboard
        )
    }
}

/// How the operator left the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted(RoleMapping),
    Cancelled,
}

impl fmt::Display for DialogOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogOutcome::Accepted(mapping) => write!(f, "OK ({mapping})"),
            DialogOutcome::Cancelled => write!(f, "Cancel"),
        }
    }
}

/// State of the role assignment form
#[derive(Debug, Clone)]
pub struct DialogForm {
    /// Device identifiers offered in every selection control
    devices: Vec<String>,
    selections: RoleMapping,
    /// Role whose validation failed on the last confirm
    error: Option<Role>,
}

impl DialogForm {
    /// Creates the form, defaulting every role to its configured device
    pub fn new(displays: &DisplaySet, config: &ScreenConfig) -> Self {
        let mut selections = RoleMapping::default();
        for role in Role::ASSIGNABLE {
            if let Some(device) = config.assigned_device(role) {
                selections.set(role, device);
            }
        }

        Self {
            devices: displays.names().map(str::to_owned).collect(),
            selections,
            error: None,
        }
    }

    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    pub fn selection(&self, role: Role) -> &str {
        self.selections.get(role).unwrap_or_default()
    }

    pub fn select(&mut self, role: Role, device: impl Into<String>) {
        self.selections.set(role, device);
    }

    /// Returns `true` if the selection for `role` is a live display
    pub fn is_valid(&self, role: Role) -> bool {
        let selected = self.selection(role);
        self.devices.iter().any(|device| device == selected)
    }

    /// The message of the last failed confirm
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|role| DialogError::InvalidSelection(role).to_string())
    }

    /// Validates the selections in role order and returns the mapping.
    ///
    /// On failure the form remembers the offending role for display.
    pub fn commit(&mut self) -> Result<RoleMapping> {
        if let Some(role) = Role::ASSIGNABLE
            .into_iter()
            .find(|role| !self.is_valid(*role))
        {
            log::warn!(
                "Rejected selection for {} screen: `{}`",
                role,
                self.selection(role)
            );
            self.error = Some(role);
            return Err(DialogError::InvalidSelection(role));
        }

        self.error = None;
        Ok(self.selections.clone())
    }
}

/// A front-end that lets the operator fill in a [`DialogForm`]
pub trait ConfigDialog {
    /// Shows the dialog and blocks until the operator accepts or cancels
    fn show(&mut self, form: DialogForm) -> Result<DialogOutcome>;
}
