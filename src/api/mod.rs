/*!
Addressing of Alpaca devices.

**Alpaca Device API URLs** are of the form **http(s)://host:port/path** where path comprises **"/api/v1/"** followed by the device type, the device number and one of the method names. e.g. for an Alpaca interface running on port 7843 of a device with IP address 192.168.1.89:
* A telescope "Interface Version" method URL would be **http://192.168.1.89:7843/api/v1/telescope/0/interfaceversion**

* A second focuser "StepSize" method URL would be  **http://192.168.1.89:7843/api/v1/focuser/1/stepsize**

URLs are case sensitive and all elements must be in lower case. This means that both the device type and command name must always be in lower case.
*/

#![allow(clippy::doc_markdown)]

mod device_type;
pub use device_type::{DeviceType, UnknownDeviceType};

mod endpoint;
pub use endpoint::{DEFAULT_API_VERSION, Endpoint, Protocol, UnknownProtocol};
