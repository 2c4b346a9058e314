use lprojkit::locale::{all_locales, require_directory, resolve_directory};

/// Run the locales command: list the locale table, or resolve one locale to
/// its `.lproj` directory.
pub fn run_locales_command(locale: Option<String>) -> Result<(), String> {
    match locale {
        Some(locale) => {
            let directory = require_directory(&locale).map_err(|e| e.to_string())?;
            println!("{} -> {}", locale, directory);
        }
        None => {
            for locale in all_locales() {
                if let Some(directory) = resolve_directory(locale) {
                    println!("{:<8} {}", locale, directory);
                }
            }
        }
    }

    Ok(())
}
