//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

/// Section holding the preference keys.
pub const PREFERENCES_SECTION: &str = "preferences";

pub struct FileConfigAdapter {
    config: Ini,
    section: String,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self::with_ini(config))
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self::with_ini(config))
    }

    /// Read keys from `section` instead of `[preferences]`.
    pub fn in_section(mut self, section: &str) -> Self {
        self.section = section.to_string();
        self
    }

    fn with_ini(config: Ini) -> Self {
        Self {
            config,
            section: PREFERENCES_SECTION.to_string(),
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, key: &str) -> Option<String> {
        self.config
            .get(&self.section, key)
            .filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::RoiError;
    use crate::ports::config_port::LENGTH_OF_YEAR;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn from_string_parses_config() {
        let content = r#"
[preferences]
LENGTH_OF_YEAR = 360
currency = USD
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(adapter.get_string(LENGTH_OF_YEAR), Some("360".to_string()));
        assert_eq!(adapter.get_string("currency"), Some("USD".to_string()));
    }

    #[test]
    fn keys_are_case_insensitive() {
        let adapter =
            FileConfigAdapter::from_string("[Preferences]\nlength_of_year = 365\n").unwrap();
        assert_eq!(adapter.get_int(LENGTH_OF_YEAR).unwrap(), Some(365));
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[preferences]\nother = 1\n").unwrap();
        assert_eq!(adapter.get_string("missing"), None);
    }

    #[test]
    fn keys_outside_section_are_ignored() {
        let adapter =
            FileConfigAdapter::from_string("[report]\nLENGTH_OF_YEAR = 360\n").unwrap();
        assert_eq!(adapter.get_string(LENGTH_OF_YEAR), None);
        let adapter = adapter.in_section("report");
        assert_eq!(adapter.get_string(LENGTH_OF_YEAR), Some("360".to_string()));
    }

    #[test]
    fn empty_value_is_missing() {
        let adapter = FileConfigAdapter::from_string("[preferences]\nLENGTH_OF_YEAR =\n").unwrap();
        assert_eq!(adapter.get_int(LENGTH_OF_YEAR).unwrap(), None);
    }

    #[test]
    fn get_int_rejects_non_numeric() {
        let adapter =
            FileConfigAdapter::from_string("[preferences]\nLENGTH_OF_YEAR = abc\n").unwrap();
        let err = adapter.get_int(LENGTH_OF_YEAR).unwrap_err();
        assert!(matches!(err, RoiError::InvalidConfiguration { .. }));
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config("[preferences]\nLENGTH_OF_YEAR = 365\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(adapter.get_int(LENGTH_OF_YEAR).unwrap(), Some(365));
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/config.ini");
        assert!(result.is_err());
    }
}
