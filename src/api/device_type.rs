use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

macro_rules! device_types {
    ($($(#[doc = $doc:literal])* $name:ident = $path:literal,)*) => {
        /// One of the recognised ASCOM device types.
        ///
        /// Displays as the lowercase path segment used in device URLs.
        #[derive(PartialOrd, Ord, PartialEq, Eq, Hash, Clone, Copy, Debug, derive_more::Display, Serialize, Deserialize)]
        pub enum DeviceType {
            $(
                $(#[doc = $doc])*
                #[display($path)]
                #[serde(rename = $path)]
                $name,
            )*
        }

        impl DeviceType {
            /// All known device types.
            pub const ALL: &'static [Self] = &[$(Self::$name,)*];

            /// The lowercase URL path segment for this device type.
            pub const fn path(self) -> &'static str {
                match self {
                    $(Self::$name => $path,)*
                }
            }
        }
    };
}

device_types! {
    /// Camera.
    Camera = "camera",
    /// Cover calibrator.
    CoverCalibrator = "covercalibrator",
    /// Dome.
    Dome = "dome",
    /// Filter wheel.
    FilterWheel = "filterwheel",
    /// Focuser.
    Focuser = "focuser",
    /// Observing conditions.
    ObservingConditions = "observingconditions",
    /// Rotator.
    Rotator = "rotator",
    /// Safety monitor.
    SafetyMonitor = "safetymonitor",
    /// Switch.
    Switch = "switch",
    /// Telescope.
    Telescope = "telescope",
}

/// The given string doesn't name a known device type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown device type {0:?}")]
pub struct UnknownDeviceType(pub String);

impl FromStr for DeviceType {
    type Err = UnknownDeviceType;

    // Device types in URLs are lowercase, but people tend to write "FilterWheel".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.path().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDeviceType(s.to_owned()))
    }
}
