//! Send a single Track API event from the command line.
//!
//! Credentials and region come from the environment:
//!
//! ```sh
//! export CUSTOMERIO_SITE_ID=...
//! export CUSTOMERIO_API_KEY=...
//! export CUSTOMERIO_REGION=eu   # optional, defaults to us
//! RUST_LOG=debug cargo run --bin cio-track-event -- 5 purchase '{"price": 23.45}'
//! ```
//!
//! Pass `-` as the customer id to send an anonymous event.

use anyhow::{bail, Context};
use customerio_track::TrackClient;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (customer_id, event_name, attributes) = match args.as_slice() {
        [customer_id, event_name] => (customer_id, event_name, Value::Null),
        [customer_id, event_name, attributes] => {
            let attributes: Value = serde_json::from_str(attributes)
                .context("attributes must be a JSON object")?;
            (customer_id, event_name, attributes)
        }
        _ => bail!("usage: cio-track-event <customer_id|-> <event_name> [attributes-json]"),
    };

    let client = TrackClient::from_env().context("failed to configure Track client")?;
    info!(base_url = %client.base_url(), "Sending event");

    let response = if customer_id == "-" {
        client.track_anonymous("", event_name, attributes)?
    } else {
        client.track(customer_id, event_name, attributes)?
    };

    println!("{} {}", response.status(), event_name);
    Ok(())
}
