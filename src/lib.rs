/*!
Client for the methods common to all [ASCOM Alpaca](https://ascom-standards.org/api/) devices.

Every method of [`DeviceClient`] is a single HTTP round-trip to
`{protocol}://{address}/api/v{api_version}/{device_type}/{device_number}/{attribute}`.
Responses are checked for the Alpaca error envelope: a non-zero `ErrorNumber`
becomes [`Error::Protocol`], and a failed HTTP status becomes
[`Error::Transport`] with the response `Value` as its message.

```no_run
use alpaca_device::{DeviceClient, DeviceType, Endpoint};

# async fn run() -> alpaca_device::Result {
let telescope = DeviceClient::new(Endpoint::new("localhost:11111", DeviceType::Telescope, 0))?;

if !telescope.connected().await? {
    telescope.set_connected(true).await?;
}
println!("{} ({:?})", telescope.name().await?, telescope.driver_info().await?);
# Ok(())
# }
```

Attributes without a dedicated method are reachable through
[`DeviceClient::get`] and [`DeviceClient::put`].
*/

mod macros;

pub mod api;
pub use api::{DEFAULT_API_VERSION, DeviceType, Endpoint, Protocol};

mod client;
pub use client::DeviceClient;

mod errors;
pub use errors::{ASCOMError, ASCOMErrorCode, ASCOMResult, Error, Result};

mod params;
pub use params::{ASCOMParam, Params};

mod response;
pub use response::Envelope;

#[cfg(test)]
mod test_utils;
