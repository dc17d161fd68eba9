use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_file, shellexpand_path, DB_FILE};
use crate::store::ExpenseStore;

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    } else if !settings_file().exists() {
        // First run: offer to change the default location.
        println!("Data directory [{}]: ", settings.data_dir);
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();
        let chosen = input.trim();
        if !chosen.is_empty() {
            settings.data_dir = shellexpand_path(chosen);
        }
    }

    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;
    std::fs::create_dir_all(resolved.join("exports"))?;
    std::fs::create_dir_all(resolved.join("backups"))?;

    ExpenseStore::create(&resolved.join(DB_FILE))?;

    println!("Initialized spendwise at {}", resolved.display());
    Ok(())
}
