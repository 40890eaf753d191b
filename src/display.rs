use core::fmt;

use thiserror::Error;

use crate::{config::ScreenConfig, properties::DisplayProperties, types::Role};

/// Error type for the display module
#[derive(Error, Debug)]
pub enum DisplayError {
    #[cfg(target_os = "windows")]
    #[error("Error when calling the Windows API")]
    WinAPI(#[from] winsafe::co::ERROR),
    #[error("Querying displays is not supported on this platform; pass the displays explicitly")]
    Unsupported,
}

type Result<T = ()> = std::result::Result<T, DisplayError>;

/// A struct that represents a display (index)
#[derive(Debug, Clone, Copy)]
pub struct Display<'a> {
    /// The index of the display in the display set
    index: usize,
    /// The display set containing this display
    display_set: &'a DisplaySet,
}

impl<'a> Display<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    fn properties(&self) -> &'a DisplayProperties {
        &self.display_set.displays[self.index]
    }

    /// The device identifier, e.g. `\\.\DISPLAY1`
    pub fn name(&self) -> &'a str {
        self.properties().name.as_str()
    }

    /// The adapter description reported by the system
    pub fn string(&self) -> &'a str {
        self.properties().string.as_str()
    }

    pub fn key(&self) -> &'a str {
        self.properties().key.as_str()
    }

    pub fn is_primary(&self) -> bool {
        self.properties().primary
    }

    /// Returns the role `config` assigns to this display, if any
    pub fn role(&self, config: &ScreenConfig) -> Option<Role> {
        config.role_of(self.name())
    }
}

/// The set of displays attached right now
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySet {
    /// The displays in this set, in enumeration order
    displays: Vec<DisplayProperties>,
}

impl DisplaySet {
    /// Builds a display set from known display properties
    pub fn new(displays: Vec<DisplayProperties>) -> Self {
        Self { displays }
    }

    /// Builds a display set from device identifiers only
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(DisplayProperties::from_name).collect())
    }

    /// Iterates over the displays in this set
    pub fn displays(&self) -> impl ExactSizeIterator<Item = Display<'_>> {
        (0..self.displays.len()).map(move |index| Display {
            index,
            display_set: self,
        })
    }

    /// Iterates over the device identifiers in this set
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.displays.iter().map(|d| d.name.as_str())
    }

    /// Returns display for the given `index`
    pub fn get(&self, index: usize) -> Option<Display<'_>> {
        if index >= self.displays.len() {
            return None;
        }
        Some(Display {
            index,
            display_set: self,
        })
    }

    /// Returns the display with the given device identifier
    pub fn find(&self, name: &str) -> Option<Display<'_>> {
        self.displays().find(|d| d.name() == name)
    }

    /// Returns the position of the display with the given device identifier
    pub fn position(&self, name: &str) -> Option<usize> {
        self.displays.iter().position(|d| d.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}

impl fmt::Display for DisplaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DisplaySet {{ displays: [")?;
        for (i, display) in self.displays.iter().enumerate() {
            if i > 0 {
                writeln!(f, ", ")?;
            }
            write!(f, "    {}", display)?;
        }
        write!(f, "\n] }}")
    }
}

/// Returns all displays currently attached to the desktop.
#[cfg(target_os = "windows")]
pub fn query_displays() -> Result<DisplaySet> {
    use winsafe::{DISPLAY_DEVICE, co};

    let mut result = Vec::<DisplayProperties>::new();
    let mut dev_num: u32 = 0;

    loop {
        let mut device = DISPLAY_DEVICE::default();
        let found = winsafe::EnumDisplayDevices(None, dev_num, &mut device, co::EDD::NoValue)?;
        if !found {
            break;
        }
        dev_num += 1;

        let properties = DisplayProperties::from_winsafe(&device);
        // adapters that are not attached to the desktop have no screen
        if !properties.active {
            log::trace!("Skipping inactive device {}", properties.name);
            continue;
        }

        log::debug!(
            "Display {}: {} - {} (primary={})",
            result.len(),
            properties.name,
            properties.string,
            properties.primary
        );
        result.push(properties);
    }

    Ok(DisplaySet::new(result))
}

/// Returns all displays currently attached to the desktop.
#[cfg(not(target_os = "windows"))]
pub fn query_displays() -> Result<DisplaySet> {
    log::warn!("No display enumeration available on this platform");
    Err(DisplayError::Unsupported)
}
