use std::path::Path;

use log::info;

use crate::scaffold;
use crate::utils::error::Result;

/// Handle the new command
pub fn handle_new_command(path: &Path, force: bool) -> Result<()> {
    let created = scaffold::create(path, force)?;

    info!("Created a new site with {} files at {}", created.len(), path.display());
    info!("Run 'cd {}' and then 'gen serve' to preview it", path.display());
    Ok(())
}
