use core::fmt;

/// Contains the properties of a live display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayProperties {
    /// Device identifier, e.g. `\\.\DISPLAY1`
    pub name: String,

    pub string: String,
    pub key: String,

    pub active: bool,
    pub primary: bool,
}

impl DisplayProperties {
    /// Creates properties for a display that is only known by its identifier
    pub fn from_name(name: impl Into<String>) -> Self {
        DisplayProperties {
            name: name.into(),
            string: String::new(),
            key: String::new(),
            active: true,
            primary: false,
        }
    }

    /// Create a display properties struct from a winsafe display device
    #[cfg(target_os = "windows")]
    pub fn from_winsafe(device: &winsafe::DISPLAY_DEVICE) -> Self {
        use winsafe::{co, prelude::NativeBitflag};

        DisplayProperties {
            name: device.DeviceName(),
            string: device.DeviceString(),
            key: device.DeviceKey(),
            active: device.StateFlags.has(co::DISPLAY_DEVICE::ACTIVE),
            primary: device.StateFlags.has(co::DISPLAY_DEVICE::PRIMARY_DEVICE),
        }
    }
}

impl fmt::Display for DisplayProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Display {{ name: {}, string: {}, active: {}, primary: {} }}",
            self.name, self.string, self.active, self.primary
        )
    }
}
