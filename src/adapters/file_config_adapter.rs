//! INI file configuration adapter.

use std::path::Path;

use configparser::ini::Ini;

use crate::domain::error::BevexError;
use crate::ports::config_port::ConfigPort;

#[derive(Debug)]
pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BevexError> {
        let mut config = Ini::new();
        config
            .load(path.as_ref())
            .map_err(|reason| BevexError::ConfigParse {
                file: path.as_ref().display().to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, BevexError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| BevexError::ConfigParse {
                file: "<inline>".into(),
                reason,
            })?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_string_parses_config() {
        let content = "[catalog]\npath = /srv/bevex/catalog.csv\n\n[display]\nprecision = 4\n";
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("catalog", "path"),
            Some("/srv/bevex/catalog.csv".to_string())
        );
        assert_eq!(adapter.get_int("display", "precision", 2), 4);
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[catalog]\npath = a.csv\n").unwrap();
        assert_eq!(adapter.get_string("catalog", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "path"), None);
    }

    #[test]
    fn get_int_returns_default_for_missing() {
        let adapter = FileConfigAdapter::from_string("[display]\n").unwrap();
        assert_eq!(adapter.get_int("display", "precision", 2), 2);
    }

    #[test]
    fn get_int_returns_default_for_non_numeric() {
        let adapter = FileConfigAdapter::from_string("[display]\nprecision = lots\n").unwrap();
        assert_eq!(adapter.get_int("display", "precision", 2), 2);
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[catalog]\npath = /tmp/catalog.csv\n").unwrap();
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("catalog", "path"),
            Some("/tmp/catalog.csv".to_string())
        );
    }

    #[test]
    fn from_file_fails_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/bevex.ini");
        assert!(matches!(result, Err(BevexError::ConfigParse { .. })));
    }
}
