use super::DeviceType;
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Default Alpaca API version to use if none is specified.
pub const DEFAULT_API_VERSION: u32 = 1;

/// Protocol used to communicate with the Alpaca server.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Protocol {
    /// Plain HTTP.
    #[default]
    #[display("http")]
    Http,
    /// HTTP over TLS.
    #[display("https")]
    Https,
}

/// The given string is neither `http` nor `https`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported protocol {0:?}, expected \"http\" or \"https\"")]
pub struct UnknownProtocol(pub String);

impl FromStr for Protocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("http") {
            Ok(Self::Http)
        } else if s.eq_ignore_ascii_case("https") {
            Ok(Self::Https)
        } else {
            Err(UnknownProtocol(s.to_owned()))
        }
    }
}

/// Location of a single device on an Alpaca server.
///
/// Displays as the device's base URL:
/// `{protocol}://{address}/api/v{api_version}/{device_type}/{device_number}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Protocol used to communicate with the server.
    ///
    /// Defaults to [`Protocol::Http`].
    pub protocol: Protocol,
    /// Domain name or IP address of the server, optionally with a port.
    pub address: String,
    /// Alpaca API version.
    ///
    /// Defaults to [`DEFAULT_API_VERSION`].
    pub api_version: u32,
    /// Type of the device.
    pub device_type: DeviceType,
    /// Zero-based device number as configured on the server.
    pub device_number: u32,
}

impl Endpoint {
    /// Describe a device at the given address using the default protocol and API version.
    pub fn new(address: impl Into<String>, device_type: DeviceType, device_number: u32) -> Self {
        Self {
            protocol: Protocol::default(),
            address: address.into(),
            api_version: DEFAULT_API_VERSION,
            device_type,
            device_number,
        }
    }

    /// Same endpoint with a different protocol.
    #[must_use]
    pub fn with_protocol(self, protocol: Protocol) -> Self {
        Self { protocol, ..self }
    }

    /// Same endpoint with a different API version.
    #[must_use]
    pub fn with_api_version(self, api_version: u32) -> Self {
        Self {
            api_version,
            ..self
        }
    }

    /// The base URL all device attributes are appended to.
    pub fn base_url(&self) -> String {
        self.to_string()
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{protocol}://{address}/api/v{api_version}/{device_type}/{device_number}",
            protocol = self.protocol,
            address = self.address,
            api_version = self.api_version,
            device_type = self.device_type,
            device_number = self.device_number,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_template() {
        let endpoint = Endpoint::new("192.168.1.89:7843", DeviceType::Telescope, 0);
        assert_eq!(
            endpoint.base_url(),
            "http://192.168.1.89:7843/api/v1/telescope/0"
        );

        let endpoint = Endpoint::new("example.org", DeviceType::Focuser, 1)
            .with_protocol(Protocol::Https)
            .with_api_version(3);
        assert_eq!(endpoint.base_url(), "https://example.org/api/v3/focuser/1");
    }

    #[test]
    fn base_url_for_every_combination() {
        for protocol in [Protocol::Http, Protocol::Https] {
            for &device_type in DeviceType::ALL {
                for device_number in [0, 7, u32::MAX] {
                    let endpoint = Endpoint {
                        protocol,
                        address: "localhost:11111".to_owned(),
                        api_version: 2,
                        device_type,
                        device_number,
                    };
                    assert_eq!(
                        endpoint.base_url(),
                        format!(
                            "{protocol}://localhost:11111/api/v2/{}/{device_number}",
                            device_type.path()
                        )
                    );
                }
            }
        }
    }

    #[test]
    fn parse_protocol() {
        assert_eq!("https".parse(), Ok(Protocol::Https));
        assert_eq!("HTTP".parse(), Ok(Protocol::Http));
        assert_eq!(
            "ftp".parse::<Protocol>(),
            Err(UnknownProtocol("ftp".to_owned()))
        );
    }
}
