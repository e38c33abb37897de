mod response;

mod transaction;
use transaction::RequestTransaction;


use crate::api::Endpoint;
use crate::errors::{Error, Result};
use crate::macros::params;
use crate::params::{ActionParams, Params};
use crate::response::Envelope;
use serde::de::DeserializeOwned;
use tracing::Instrument;

/// Client for the methods common to all Alpaca devices.
///
/// Each method is a single request to the device; nothing is cached and
/// nothing is retried. The client holds no mutable state, so it can be shared
/// between tasks freely.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    inner: reqwest::Client,
    endpoint: Endpoint,
    base_url: reqwest::Url,
    client_id: u32,
}

impl DeviceClient {
    /// Create a client for the device at the given endpoint.
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        Self::with_http_client(endpoint, reqwest::Client::new())
    }

    /// Create a client that sends requests through a preconfigured HTTP client.
    ///
    /// Use this to apply timeouts, proxies or TLS settings.
    pub fn with_http_client(endpoint: Endpoint, inner: reqwest::Client) -> Result<Self> {
        // Trailing slash so that attributes are joined below the device number.
        let url = format!("{endpoint}/");
        let base_url = match reqwest::Url::parse(&url) {
            Ok(base_url) if !base_url.cannot_be_a_base() => base_url,
            Ok(_) => {
                return Err(Error::InvalidUrl {
                    url,
                    reason: "cannot be a base".to_owned(),
                });
            }
            Err(err) => {
                return Err(Error::InvalidUrl {
                    url,
                    reason: err.to_string(),
                });
            }
        };

        Ok(Self {
            inner,
            endpoint,
            base_url,
            client_id: rand::random(),
        })
    }

    /// The endpoint this client talks to.
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Base URL of the device, without a trailing slash.
    pub fn base_url(&self) -> String {
        self.endpoint.base_url()
    }

    /// Random ID sent as `ClientID` with every request.
    pub const fn client_id(&self) -> u32 {
        self.client_id
    }

    async fn request(&self, attribute: &str, mut params: ActionParams) -> Result<Envelope> {
        let request_transaction = RequestTransaction::new(self.client_id);

        let span = tracing::debug_span!(
            "Alpaca transaction",
            path = attribute,
            ?params,
            client_transaction_id = request_transaction.client_transaction_id,
            client_id = request_transaction.client_id,
        );

        async move {
            let url = self
                .base_url
                .join(attribute)
                .map_err(|err| Error::InvalidUrl {
                    url: format!("{}{attribute}", self.base_url),
                    reason: err.to_string(),
                })?;

            request_transaction.add_to(params.params_mut());

            let request = self.inner.request(params.method(), url);
            let request = match &params {
                ActionParams::Get(params) => request.query(params),
                ActionParams::Put(params) => request.form(params),
            };

            let envelope = response::parse(request.send().await?).await?;

            request_transaction.check_response(&envelope);

            Ok::<_, Error>(envelope)
        }
        .instrument(span.clone())
        .await
        .inspect_err(|err| {
            span.in_scope(|| tracing::error!(%err, "Alpaca request failed"));
        })
    }

    /// Send a GET request for an attribute and decode its `Value`.
    ///
    /// Use [`serde_json::Value`] as `T` to get the value as is.
    pub async fn get<T: DeserializeOwned>(&self, attribute: &str) -> Result<T> {
        self.request(attribute, ActionParams::Get(Params::new()))
            .await?
            .into_value()
    }

    /// Send a PUT request for an attribute and return the whole response envelope.
    pub async fn put(&self, attribute: &str, params: Params) -> Result<Envelope> {
        self.request(attribute, ActionParams::Put(params)).await
    }

    /// Invoke a device-specific action.
    ///
    /// Parameters are sent as a single comma-separated `Parameters` field;
    /// the list of supported actions is available from [`Self::supported_actions`].
    ///
    /// Actions usually answer with a string, but any JSON is allowed; use
    /// [`serde_json::Value`] as `T` to get the value as is.
    pub async fn action<T: DeserializeOwned>(
        &self,
        action: &str,
        parameters: &[&str],
    ) -> Result<T> {
        self.put(
            "action",
            params! {
                Action: action,
                Parameters: parameters.join(","),
            },
        )
        .await?
        .into_value()
    }

    /// Transmit an arbitrary string to the device without waiting for a response.
    ///
    /// If `raw` is true the command is sent as is, otherwise the driver may add
    /// protocol framing characters.
    pub async fn command_blind(&self, command: &str, raw: bool) -> Result {
        let _ = self
            .put("commandblind", params! { Command: command, Raw: raw })
            .await?;
        Ok(())
    }

    /// Transmit an arbitrary string to the device and wait for a boolean response.
    pub async fn command_bool(&self, command: &str, raw: bool) -> Result<bool> {
        self.put("commandbool", params! { Command: command, Raw: raw })
            .await?
            .into_value()
    }

    /// Transmit an arbitrary string to the device and wait for a string response.
    pub async fn command_string(&self, command: &str, raw: bool) -> Result<String> {
        self.put("commandstring", params! { Command: command, Raw: raw })
            .await?
            .into_value()
    }

    /// Retrieve the connected state of the device.
    pub async fn connected(&self) -> Result<bool> {
        self.get("connected").await
    }

    /// Connect to (`true`) or disconnect from (`false`) the device hardware.
    pub async fn set_connected(&self, connected: bool) -> Result {
        let _ = self
            .put("connected", params! { Connected: connected })
            .await?;
        Ok(())
    }

    /// Description of the device.
    ///
    /// Reads the `name` attribute.
    pub async fn description(&self) -> Result<String> {
        self.get("name").await
    }

    /// Information about the driver, split on commas.
    pub async fn driver_info(&self) -> Result<Vec<String>> {
        let info: String = self.get("driverinfo").await?;
        Ok(split_driver_info(&info))
    }

    /// Major and minor version of the driver, in the form `"n.n"`.
    pub async fn driver_version(&self) -> Result<String> {
        self.get("driverversion").await
    }

    /// ASCOM device interface version number that this device supports.
    pub async fn interface_version(&self) -> Result<i32> {
        self.get("interfaceversion").await
    }

    /// Name of the device.
    pub async fn name(&self) -> Result<String> {
        self.get("name").await
    }

    /// Names of the actions supported by the driver.
    pub async fn supported_actions(&self) -> Result<Vec<String>> {
        self.get("supportedactions").await
    }
}

fn split_driver_info(info: &str) -> Vec<String> {
    info.split(',').map(|part| part.trim().to_owned()).collect()
}
