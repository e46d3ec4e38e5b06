use crate::error::Result;
use crate::settings::{load_settings, settings_file_exists};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let export_dir = std::path::PathBuf::from(&settings.export_dir);

    println!("Settings:    {}", if settings_file_exists() { "saved" } else { "(defaults, run `carteira init`)" });
    println!("Export dir:  {}", export_dir.display());
    println!("Profile:     {}", settings.profile);

    if !export_dir.exists() {
        println!();
        println!("Export dir does not exist yet; it is created on first export.");
    }
    Ok(())
}
