use chrono::Weekday;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};
use crate::locale::{months, MonthNames};
use crate::resolver::RelativeDateResolver;

const CONFIG_PATH_ENV_VAR: &str = "DAYPICK_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> io::Result<Vec<PathBuf>> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Unable to find home directory"))?;

    let home_config = home.join(".daypick.toml");

    let config_xdg = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(dir).join("daypick").join("config.toml")
    } else {
        dirs::config_dir()
            .unwrap_or_else(|| home.join(".config"))
            .join("daypick")
            .join("config.toml")
    };

    let mut locations = vec![config_xdg, home_config];

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.insert(0, PathBuf::from(path));
    }

    Ok(locations)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LocaleSection {
    short_names: Option<Vec<String>>,
    long_names: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    max_advances: Option<u32>,
    week_start: Option<String>,
    locale: LocaleSection,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub max_advances: u32,
    pub week_start: Weekday,
    pub month_names: MonthNames,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_advances: RelativeDateResolver::DEFAULT_MAX_ADVANCES,
            week_start: Weekday::Sun,
            month_names: MonthNames::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let file: ConfigFile = toml::from_str(content)?;
        let default = Config::default();

        let week_start = match file.week_start {
            Some(day) => day.parse::<Weekday>().map_err(|_| {
                Error::new(
                    ErrorKind::ConfigParse,
                    &format!("'{}' is not a day of the week", day),
                )
            })?,
            None => default.week_start,
        };

        let month_names = match (file.locale.short_names, file.locale.long_names) {
            (None, None) => default.month_names,
            (short, long) => MonthNames::new(
                short.unwrap_or_else(|| {
                    months()
                        .map(|m| default.month_names.short(m).to_owned())
                        .collect()
                }),
                long.unwrap_or_else(|| {
                    months()
                        .map(|m| default.month_names.long(m).to_owned())
                        .collect()
                }),
            )?,
        };

        Ok(Config {
            max_advances: file.max_advances.unwrap_or(default.max_advances),
            week_start,
            month_names,
        })
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|err| {
            Error::from(err).with_msg(&format!("cannot read '{}'", path.display()))
        })?;
        Config::from_toml_str(&content)
    }
}

/// Loads `path` if given, otherwise the first config file found in the usual
/// places. Without any file the defaults apply.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_file(path);
    }

    for location in find_configfile_locations()? {
        if location.is_file() {
            log::debug!("Loading config from {}", location.display());
            return Config::from_file(&location);
        }
    }

    log::debug!("No config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    #[test]
    fn empty_file_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.max_advances, 24);
        assert_eq!(config.week_start, Weekday::Sun);
        assert_eq!(config.month_names, MonthNames::default());
    }

    #[test]
    fn full_file() {
        let config = Config::from_toml_str(
            r#"
            max_advances = 60
            week_start = "Monday"

            [locale]
            short_names = ["Jän", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez"]
            "#,
        )
        .unwrap();

        assert_eq!(config.max_advances, 60);
        assert_eq!(config.week_start, Weekday::Mon);
        assert_eq!(config.month_names.short(Month::March), "Mär");
        assert_eq!(config.month_names.long(Month::March), "March");
        assert_eq!(config.month_names.lookup("dez"), Some(Month::December));
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_toml_str("week_start = \"Someday\"").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));

        let err = Config::from_toml_str("[locale]\nlong_names = [\"Jan\"]").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));

        let err = Config::from_toml_str("max_advances = -1").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let path = env::temp_dir().join(format!("daypick-config-{}.toml", std::process::id()));
        fs::write(&path, "max_advances = 3\n").unwrap();

        let config = load_suitable_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.max_advances, 3);
    }

    #[test]
    fn missing_explicit_path_fails() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/daypick.toml"))).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IOError(_)));
    }
}
