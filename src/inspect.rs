//! Matching of the live displays against the saved screen configuration

use core::fmt;

use crate::{
    config::{ConfigEntry, ScreenConfig},
    display::DisplaySet,
    types::Role,
};

/// Why a live display is not covered by the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch<'a> {
    /// The display is not listed in the configuration
    Missing(&'a str),
    /// The display is listed, but never with a valid role label
    InvalidRole { name: &'a str, label: &'a str },
}

impl Mismatch<'_> {
    pub fn name(&self) -> &str {
        match self {
            Mismatch::Missing(name) => name,
            Mismatch::InvalidRole { name, .. } => name,
        }
    }
}

impl fmt::Display for Mismatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Missing(name) => write!(f, "{name}: not configured"),
            Mismatch::InvalidRole { name, label } => {
                write!(f, "{name}: invalid role label `{label}`")
            }
        }
    }
}

/// Result of comparing the live displays with a configuration
#[derive(Debug, Clone)]
pub struct Inspection<'a> {
    displays: &'a DisplaySet,
    config: &'a ScreenConfig,
    mismatches: Vec<Mismatch<'a>>,
}

impl<'a> Inspection<'a> {
    /// Compatible iff every live display has an entry with a valid role
    pub fn is_compatible(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn mismatches(&self) -> &[Mismatch<'a>] {
        &self.mismatches
    }
}

impl fmt::Display for Inspection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Live screens ==")?;
        for name in self.displays.names() {
            writeln!(f, "{name}")?;
        }
        writeln!(f, "== Configured screens ==")?;
        for entry in self.config.screens() {
            writeln!(f, "{}, {}", entry.display_name, entry.nick_name)?;
        }
        writeln!(f, "== Inspection ==")?;
        for mismatch in &self.mismatches {
            writeln!(f, "{mismatch}")?;
        }
        if self.is_compatible() {
            write!(f, "all {} live screens are configured", self.displays.len())
        } else {
            write!(
                f,
                "{} of {} live screens are not configured",
                self.mismatches.len(),
                self.displays.len()
            )
        }
    }
}

/// Index of a display as printed on the command line, -1 if there is none
pub fn screen_number(index: Option<usize>) -> isize {
    index.map_or(-1, |index| index as isize)
}

impl ScreenConfig {
    /// Compares the live `displays` with this configuration
    pub fn inspect<'a>(&'a self, displays: &'a DisplaySet) -> Inspection<'a> {
        let mismatches = displays
            .names()
            .filter_map(|name| self.mismatch(name))
            .collect::<Vec<_>>();

        for mismatch in &mismatches {
            log::debug!("Incompatible screen {}", mismatch);
        }

        Inspection {
            displays,
            config: self,
            mismatches,
        }
    }

    /// Returns `true` if every live display is configured with a valid role
    pub fn is_compatible(&self, displays: &DisplaySet) -> bool {
        displays.names().all(|name| self.mismatch(name).is_none())
    }

    fn mismatch<'a>(&'a self, name: &'a str) -> Option<Mismatch<'a>> {
        let mut listed = self
            .screens()
            .iter()
            .filter(|entry| entry.display_name == name)
            .peekable();

        let Some(first) = listed.peek().copied() else {
            return Some(Mismatch::Missing(name));
        };
        if listed.any(ConfigEntry::has_valid_role) {
            return None;
        }
        Some(Mismatch::InvalidRole {
            name,
            label: first.nick_name.as_str(),
        })
    }

    /// Returns the index of the live display that holds `role`.
    ///
    /// Entries carrying the role are tried in file order; the first one whose
    /// device is currently attached wins.
    pub fn screen_index(&self, role: Role, displays: &DisplaySet) -> Option<usize> {
        let index = self
            .entries_for(role)
            .find_map(|entry| displays.position(&entry.display_name));
        log::debug!("Resolved {} screen to {:?}", role, index);
        index
    }
}
