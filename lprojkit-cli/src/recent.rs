use std::path::{Path, PathBuf};

use lprojkit::{ProjectStore, language};

/// Store file location: `LPROJKIT_RECENT_STORE` override, else
/// `$HOME/.config/lprojkit/recent.json`.
pub fn store_path() -> Result<PathBuf, String> {
    if let Ok(path) = std::env::var("LPROJKIT_RECENT_STORE") {
        return Ok(PathBuf::from(path));
    }

    let home = std::env::var("HOME")
        .map_err(|_| "Cannot resolve recent-projects store: HOME is not set".to_string())?;
    Ok(Path::new(&home).join(".config/lprojkit/recent.json"))
}

/// Run the recent command: list, remove or clear remembered projects.
pub fn run_recent_command(remove: Option<PathBuf>, clear: bool) -> Result<(), String> {
    let mut store = ProjectStore::load(store_path()?);

    if clear {
        store.clear();
        store
            .save()
            .map_err(|e| format!("Failed to save recent projects: {}", e))?;
        println!("✅ Cleared recent projects");
        return Ok(());
    }

    if let Some(path) = remove {
        if store.remove(&path) {
            store
                .save()
                .map_err(|e| format!("Failed to save recent projects: {}", e))?;
            println!("✅ Removed {}", path.display());
        } else {
            println!("ℹ️  Not in recent projects: {}", path.display());
        }
        return Ok(());
    }

    if store.projects().is_empty() {
        println!("No recent projects");
        return Ok(());
    }

    for (i, project) in store.projects().iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            project.project_name,
            project.project_path.display()
        );
        println!(
            "   Default language: {}",
            language::display_name(&project.config.default_language)
        );
    }

    Ok(())
}
