use crate::errors::{Error, Result};
use crate::response::Envelope;
use mime::Mime;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

fn is_json(mime_type: &Mime) -> bool {
    mime_type.essence_str() == mime::APPLICATION_JSON.as_ref()
        || mime_type.suffix() == Some(mime::JSON)
}

/// Decode the envelope of a device response and turn failures into errors.
///
/// A non-zero `ErrorNumber` wins over the HTTP status. Any other non-success
/// status fails with `Value` as the message, or with the raw body when the
/// server answered in plain text.
pub(crate) async fn parse(response: reqwest::Response) -> Result<Envelope> {
    let status = response.status();
    // A missing or unparseable Content-Type is given the benefit of the doubt.
    let mime_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Mime>().ok());
    let bytes = response.bytes().await?;

    if mime_type.as_ref().is_none_or(is_json) {
        match serde_json::from_slice::<Envelope>(&bytes) {
            Ok(envelope) => return check(status, envelope),
            Err(err) if status.is_success() => return Err(Error::Decode(err)),
            Err(err) => {
                tracing::debug!(%err, "Error response is not a JSON envelope");
            }
        }
    } else if let Some(mime_type) = mime_type.filter(|_| status.is_success()) {
        return Err(Error::UnexpectedContentType(mime_type));
    }

    Err(transport_error(
        status,
        String::from_utf8_lossy(&bytes).trim().to_owned(),
    ))
}

fn transport_error(status: StatusCode, mut message: String) -> Error {
    if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or_default()
            .clone_into(&mut message);
    }
    Error::Transport { status, message }
}

fn check(status: StatusCode, envelope: Envelope) -> Result<Envelope> {
    let envelope = envelope.into_result()?;

    if status.is_success() {
        Ok(envelope)
    } else {
        Err(transport_error(status, envelope.into_message()))
    }
}
