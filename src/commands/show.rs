//! Show command - Print the resolved configuration.

use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::ShowArgs;
use crate::config::{ConfigValue, ProjectPaths, Settings};
use crate::errors::AppResult;

use super::load_app_config;

/// Execute the show command
pub fn execute(args: ShowArgs, paths: &ProjectPaths, config_path: &Path) -> AppResult<()> {
    let entries = if args.defaults {
        Settings::from_env(paths)?.entries()
    } else {
        load_app_config(paths, config_path)?.entries()
    };

    println!("{}", render(&entries, args.json)?);
    Ok(())
}

/// Render option entries as aligned `NAME = value` lines or as JSON.
pub fn render(entries: &BTreeMap<&'static str, ConfigValue>, json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(entries)?);
    }

    let width = entries.keys().map(|key| key.len()).max().unwrap_or(0);
    let lines: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{:<width$} = {}", key, value, width = width))
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KEY_DEBUG, KEY_JWT_ACCESS_TOKEN_EXPIRES};

    fn entries() -> BTreeMap<&'static str, ConfigValue> {
        Settings::defaults_for(&ProjectPaths::new("/srv/bingo")).entries()
    }

    #[test]
    fn test_table_output_aligns_values() {
        let table = render(&entries(), false).unwrap();

        let debug_line = table
            .lines()
            .find(|line| line.starts_with(KEY_DEBUG))
            .unwrap();
        assert!(debug_line.ends_with("= false"));

        let columns: Vec<usize> = table.lines().map(|line| line.find(" = ").unwrap()).collect();
        assert!(columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_json_output_uses_option_names() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&entries(), true).unwrap()).unwrap();

        assert_eq!(json[KEY_JWT_ACCESS_TOKEN_EXPIRES], 900);
        assert_eq!(json[KEY_DEBUG], false);
    }

    #[test]
    fn test_output_never_contains_secret() {
        let mut settings = Settings::defaults_for(&ProjectPaths::new("/srv/bingo"));
        settings.secret_key = Some(crate::config::SecretKey::new(
            "do-not-print-this-secret-0123456789abcdef",
        ));

        let table = render(&settings.entries(), false).unwrap();
        let json = render(&settings.entries(), true).unwrap();
        assert!(!table.contains("do-not-print"));
        assert!(!json.contains("do-not-print"));
    }
}
