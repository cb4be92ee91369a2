use crate::builder::Site;
use crate::config::Config;
use crate::utils::error::Result;

/// Handle the serve command: build once, then preview until interrupted
pub async fn handle_serve_command(config: &Config) -> Result<()> {
    let mut site = Site::from_config(config)?;
    site.serve(&config.addr).await
}
