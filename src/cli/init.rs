use crate::error::Result;
use crate::settings::{save_settings, Settings};

pub fn run(export_dir: Option<String>) -> Result<()> {
    let mut settings = Settings::default();
    if let Some(dir) = export_dir {
        settings.export_dir = dir;
    }
    std::fs::create_dir_all(&settings.export_dir)?;
    save_settings(&settings)?;
    println!("Export dir: {}", settings.export_dir);
    println!("Settings saved.");
    Ok(())
}
