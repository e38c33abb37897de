use crate::errors::{ASCOMError, ASCOMErrorCode, ASCOMResult, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// Some servers send `null` instead of leaving the field out.
fn null_as_default<'de, D: Deserializer<'de>, T: Default + Deserialize<'de>>(
    deserializer: D,
) -> Result<T, D::Error> {
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The JSON wrapper every Alpaca device response comes in.
///
/// Fields missing from the response take their success defaults: a `null`
/// value, error number `0` and an empty message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// The returned value, `null` for methods without one.
    #[serde(rename = "Value", default)]
    pub value: serde_json::Value,
    /// ASCOM error number, `0` on success.
    #[serde(rename = "ErrorNumber", default, deserialize_with = "null_as_default")]
    pub error_number: ASCOMErrorCode,
    /// ASCOM error message, empty on success.
    #[serde(rename = "ErrorMessage", default, deserialize_with = "null_as_default")]
    pub error_message: String,
    /// Transaction ID echoed back from the request.
    #[serde(
        rename = "ClientTransactionID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_transaction_id: Option<u32>,
    /// Transaction ID assigned by the server.
    #[serde(
        rename = "ServerTransactionID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub server_transaction_id: Option<u32>,
}

impl Envelope {
    /// Split off the ASCOM error, if the envelope carries one.
    pub fn into_result(self) -> ASCOMResult<Self> {
        if self.error_number.is_ok() {
            Ok(self)
        } else {
            Err(ASCOMError::new(self.error_number, self.error_message))
        }
    }

    /// Decode the `Value` field into the expected type.
    pub fn into_value<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.value)?)
    }

    /// Best human-readable description of a failed response.
    ///
    /// Alpaca servers put the text of HTTP-level failures into `Value`.
    pub(crate) fn into_message(self) -> String {
        match self.value {
            serde_json::Value::String(message) => message,
            serde_json::Value::Null => self.error_message,
            value => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_success() -> eyre::Result<()> {
        let envelope: Envelope = serde_json::from_value(json!({}))?;
        assert_eq!(envelope, Envelope::default());
        assert!(envelope.into_result().is_ok());
        Ok(())
    }

    #[test]
    fn error_number_is_split_off() -> eyre::Result<()> {
        let envelope: Envelope = serde_json::from_value(json!({
            "Value": null,
            "ErrorNumber": 1,
            "ErrorMessage": "not supported",
            "ServerTransactionID": 12,
        }))?;
        assert_eq!(envelope.server_transaction_id, Some(12));
        let Err(err) = envelope.into_result() else {
            eyre::bail!("expected an ASCOM error");
        };
        assert_eq!(err.code.raw(), 1);
        assert_eq!(err.message, "not supported");
        Ok(())
    }

    #[test]
    fn null_error_fields_mean_success() -> eyre::Result<()> {
        let envelope: Envelope = serde_json::from_value(json!({
            "Value": "Simulated mount",
            "ErrorNumber": null,
            "ErrorMessage": null,
        }))?;
        assert_eq!(envelope.error_message, "");
        assert_eq!(envelope.into_result()?.value, json!("Simulated mount"));
        Ok(())
    }

    #[test]
    fn typed_value() -> eyre::Result<()> {
        let envelope: Envelope = serde_json::from_value(json!({
            "Value": ["Park", "Unpark"],
            "ErrorNumber": 0,
            "ErrorMessage": "",
        }))?;
        assert_eq!(
            envelope.clone().into_value::<Vec<String>>()?,
            ["Park", "Unpark"]
        );
        assert!(envelope.into_value::<bool>().is_err());
        Ok(())
    }

    #[test]
    fn message_prefers_string_value() {
        let envelope = |value, error_message: &str| Envelope {
            value,
            error_message: error_message.to_owned(),
            ..Envelope::default()
        };
        assert_eq!(envelope(json!("bad request"), "").into_message(), "bad request");
        assert_eq!(envelope(json!(null), "oops").into_message(), "oops");
        assert_eq!(envelope(json!({"a": 1}), "").into_message(), r#"{"a":1}"#);
    }
}
