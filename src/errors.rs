use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

/// Alpaca representation of an ASCOM error code.
///
/// Servers are free to send any number here, so unlike the codes a driver may
/// raise, decoded values are not range-checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ASCOMErrorCode(i32);

/// The starting value for error numbers.
const BASE: i32 = 0x400;
/// The starting value for driver-specific error numbers.
const DRIVER_BASE: i32 = 0x500;
/// The maximum value for error numbers.
const MAX: i32 = 0xFFF;

impl ASCOMErrorCode {
    /// Wrap a raw error number as received from a server.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Get the raw error code.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whether this is the success code (`0`).
    pub const fn is_ok(self) -> bool {
        self.0 == Self::OK.0
    }

    /// Whether the code lies within the range reserved by the ASCOM standard.
    pub const fn is_standard(self) -> bool {
        self.0 >= BASE && self.0 <= MAX
    }

    /// Get the driver-specific error code.
    ///
    /// Returns `Ok` with `0`-based driver error code if this is a driver error.
    /// Returns `Err` with raw error code if not a driver error.
    pub const fn as_driver_error(self) -> Result<i32, i32> {
        if self.0 >= DRIVER_BASE && self.0 <= MAX {
            Ok(self.0 - DRIVER_BASE)
        } else {
            Err(self.0)
        }
    }
}

/// ASCOM error as reported in the `ErrorNumber` / `ErrorMessage` fields of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("ASCOM error {code}: {message}")]
pub struct ASCOMError {
    /// Error number.
    #[serde(rename = "ErrorNumber")]
    pub code: ASCOMErrorCode,
    /// Error message.
    #[serde(rename = "ErrorMessage")]
    pub message: Cow<'static, str>,
}

impl ASCOMError {
    /// Create a new `ASCOMError` from given error code and a message.
    pub fn new(code: ASCOMErrorCode, message: impl std::fmt::Display) -> Self {
        Self {
            code,
            message: message.to_string().into(),
        }
    }
}

/// Result type for values decoded from an Alpaca envelope.
pub type ASCOMResult<T = ()> = Result<T, ASCOMError>;

macro_rules! ascom_error_codes {
    ($(#[doc = $doc:literal] $name:ident = $value:literal,)*) => {
        impl ASCOMErrorCode {
            $(
                #[doc = $doc]
                pub const $name: Self = Self($value);
            )*
        }

        impl std::fmt::Debug for ASCOMErrorCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match *self {
                    $(
                        Self::$name => f.write_str(stringify!($name)),
                    )*
                    _ => match self.as_driver_error() {
                        Ok(driver_code) => write!(f, "DRIVER_ERROR[{driver_code}]"),
                        Err(raw_code) if self.is_standard() => write!(f, "{raw_code:#X}"),
                        Err(raw_code) => write!(f, "{raw_code}"),
                    },
                }
            }
        }

        impl std::fmt::Display for ASCOMErrorCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

ascom_error_codes! {
    #[doc = "Success"]
    OK = 0,
    #[doc = "The requested action is not implemented in this driver"]
    ACTION_NOT_IMPLEMENTED = 0x40C,
    #[doc = "The requested operation can not be undertaken at this time"]
    INVALID_OPERATION = 0x40B,
    #[doc = "Invalid value"]
    INVALID_VALUE = 0x401,
    #[doc = "The attempted operation is invalid because the mount is currently in a Parked state"]
    INVALID_WHILE_PARKED = 0x408,
    #[doc = "The attempted operation is invalid because the mount is currently in a Slaved state"]
    INVALID_WHILE_SLAVED = 0x409,
    #[doc = "The communications channel is not connected"]
    NOT_CONNECTED = 0x407,
    #[doc = "Property or method not implemented"]
    NOT_IMPLEMENTED = 0x400,
    #[doc = "A value has not been set"]
    VALUE_NOT_SET = 0x402,
    #[doc = "Unspecified error"]
    UNSPECIFIED = 0x4FF,
}

/// Error returned by [`DeviceClient`](crate::DeviceClient) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The device answered with a non-zero `ErrorNumber`.
    #[error(transparent)]
    Protocol(#[from] ASCOMError),

    /// The server signalled failure through the HTTP status without an ASCOM error.
    #[error("HTTP {status}: {message}")]
    Transport {
        /// HTTP status of the response.
        status: reqwest::StatusCode,
        /// `Value` of the response, or the raw body if it wasn't a JSON envelope.
        message: String,
    },

    /// The endpoint or attribute doesn't form a valid URL.
    #[error("{url} is not a valid base URL: {reason}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request couldn't be sent or the response couldn't be read.
    #[error("Failed to send Alpaca request")]
    Request(#[from] reqwest::Error),

    /// A successful response had a body of some other media type.
    #[error("Expected JSON response, got {0}")]
    UnexpectedContentType(mime::Mime),

    /// A successful response couldn't be decoded into the expected shape.
    #[error("Couldn't decode Alpaca response")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// The ASCOM error reported by the device, if that's what this is.
    pub const fn as_ascom(&self) -> Option<&ASCOMError> {
        match self {
            Self::Protocol(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for [`DeviceClient`](crate::DeviceClient) operations.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;
