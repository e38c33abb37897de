//! Print the common properties of a single Alpaca device.
//!
//! Usage: `device-info <address> [device_type] [device_number] [protocol] [api_version]`

use alpaca_device::{DEFAULT_API_VERSION, DeviceClient, DeviceType, Endpoint, Protocol};
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: device-info <address> [device_type] [device_number] [http|https] [api_version]";

fn parse_endpoint(mut args: impl Iterator<Item = String>) -> eyre::Result<Endpoint> {
    let address = args.next().ok_or_else(|| eyre::eyre!(USAGE))?;
    let device_type = args
        .next()
        .map_or(Ok(DeviceType::Telescope), |arg| arg.parse::<DeviceType>())?;
    let device_number = args.next().map_or(Ok(0), |arg| arg.parse::<u32>())?;
    let protocol = args
        .next()
        .map_or(Ok(Protocol::default()), |arg| arg.parse::<Protocol>())?;
    let api_version = args
        .next()
        .map_or(Ok(DEFAULT_API_VERSION), |arg| arg.parse::<u32>())?;
    eyre::ensure!(args.next().is_none(), "Too many arguments. {USAGE}");

    Ok(Endpoint::new(address, device_type, device_number)
        .with_protocol(protocol)
        .with_api_version(api_version))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = DeviceClient::new(parse_endpoint(std::env::args().skip(1))?)?;
    tracing::info!(base_url = %client.base_url(), "Querying device");

    println!("Name: {}", client.name().await?);
    println!("Driver info: {:?}", client.driver_info().await?);
    println!("Driver version: {}", client.driver_version().await?);
    println!("Interface version: {}", client.interface_version().await?);
    println!("Connected: {}", client.connected().await?);

    match client.supported_actions().await {
        Ok(actions) => println!("Supported actions: {actions:?}"),
        Err(err) => println!("Supported actions unavailable: {err}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> impl Iterator<Item = String> {
        args.iter().map(|&arg| arg.to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn defaults() -> eyre::Result<()> {
        let endpoint = parse_endpoint(args(&["localhost:11111"]))?;
        assert_eq!(
            endpoint.base_url(),
            "http://localhost:11111/api/v1/telescope/0"
        );
        Ok(())
    }

    #[test]
    fn protocol_and_api_version() -> eyre::Result<()> {
        let endpoint = parse_endpoint(args(&["example.org", "focuser", "2", "https", "3"]))?;
        assert_eq!(endpoint.base_url(), "https://example.org/api/v3/focuser/2");
        Ok(())
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_endpoint(args(&[])).is_err());
        assert!(parse_endpoint(args(&["host", "telescope", "0", "ftp"])).is_err());
        assert!(parse_endpoint(args(&["host", "telescope", "0", "http", "1", "extra"])).is_err());
    }
}
