use crate::{driver::Driver, Result};

use rowmap_core::err;

use url::Url;

/// Opens a driver for `url`, chosen by its scheme.
pub async fn connect(url: &str) -> Result<Box<dyn Driver>> {
    let url = Url::parse(url).map_err(anyhow::Error::from)?;

    match url.scheme() {
        "postgresql" | "postgres" => connect_postgresql(&url).await,
        scheme => Err(err!("unsupported database; scheme={scheme}; url={url}")),
    }
}

#[cfg(feature = "postgresql")]
async fn connect_postgresql(url: &Url) -> Result<Box<dyn Driver>> {
    let driver = rowmap_driver_postgresql::PostgreSQL::connect(url.as_str()).await?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "postgresql"))]
async fn connect_postgresql(_url: &Url) -> Result<Box<dyn Driver>> {
    Err(err!("`postgresql` feature not enabled"))
}
