pub mod search;

use anyhow::Result;
use geo_client::{ClientConfig, GeoClient};

pub fn create_geo_client(email: Option<&str>, tool: &str) -> Result<GeoClient> {
    let mut config = ClientConfig::new().with_tool(tool);

    if let Some(email) = email {
        config = config.with_email(email);
    }

    Ok(GeoClient::with_config(config))
}
