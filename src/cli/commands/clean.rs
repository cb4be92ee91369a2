use log::info;

use crate::builder::Site;
use crate::config::Config;
use crate::utils::error::Result;

/// Handle the clean command
pub fn handle_clean_command(config: &Config) -> Result<()> {
    let site = Site::from_config(config)?;
    site.clean()?;

    if !config.quiet {
        info!("Removed {}", site.destination().display());
    }
    Ok(())
}
