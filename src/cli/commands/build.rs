use crate::builder::Site;
use crate::config::Config;
use crate::utils::error::Result;

/// Handle the build command
pub fn handle_build_command(config: &Config) -> Result<()> {
    let mut site = Site::from_config(config)?;
    site.build()
}
