use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;

const CONFIG_RELATIVE_PATH: &str = "finbank/apply.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub general: GeneralConfig,
    pub flow: FlowConfig,
    pub applicant: ApplicantConfig,
    pub documents: DocumentsConfig,
}

impl ApplicationConfig {
    /// Default location under the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_RELATIVE_PATH))
    }

    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => {
                info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ApplicationConfig = toml::from_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            title: "FinBank".to_string(),
            subtitle: "Joint Account Application".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Let the step indicator jump to any step (forward jumps are still validated)
    pub allow_step_jump: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApplicantConfig {
    pub min_name_length: usize,
    pub min_phone_digits: usize,
    pub min_address_length: usize,
    /// Both applicants must be adults
    pub min_age: u32,
}

impl Default for ApplicantConfig {
    fn default() -> Self {
        Self {
            min_name_length: 2,
            min_phone_digits: 10,
            min_address_length: 5,
            min_age: 18,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    pub max_size_mb: u64,
    /// Matched case-insensitively, with or without a leading dot
    pub accepted_extensions: Vec<String>,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            max_size_mb: 5,
            accepted_extensions: ["pdf", "jpg", "jpeg", "png"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl DocumentsConfig {
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(1024 * 1024)
    }

    /// Whether `extension` (as taken from a file name) is an accepted format
    pub fn accepts_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        !extension.is_empty()
            && self
                .accepted_extensions
                .iter()
                .any(|ext| ext.trim().trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ApplicationConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.general.title, "FinBank");
        assert!(!config.flow.allow_step_jump);
        assert_eq!(config.applicant.min_phone_digits, 10);
        assert_eq!(config.documents.max_size_bytes(), 5 * 1024 * 1024);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[flow]\nallow_step_jump = true\n\n[applicant]\nmin_phone_digits = 8\n"
        )
        .unwrap();

        let config = ApplicationConfig::load_from(file.path()).unwrap();
        assert!(config.flow.allow_step_jump);
        assert_eq!(config.applicant.min_phone_digits, 8);
        assert_eq!(config.applicant.min_name_length, 2);
        assert_eq!(config.documents.accepted_extensions.len(), 4);
    }

    #[test]
    fn huge_size_limit_saturates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[documents]\nmax_size_mb = 17592186044416").unwrap();

        let config = ApplicationConfig::load_from(file.path()).unwrap();
        assert_eq!(config.documents.max_size_bytes(), u64::MAX);
    }

    #[test]
    fn extensions_match_regardless_of_case_and_dot() {
        let documents = DocumentsConfig {
            max_size_mb: 5,
            accepted_extensions: vec!["PDF".to_string(), ".jpg".to_string()],
        };
        assert!(documents.accepts_extension("pdf"));
        assert!(documents.accepts_extension("Pdf"));
        assert!(documents.accepts_extension("JPG"));
        assert!(!documents.accepts_extension("png"));
        assert!(!documents.accepts_extension(""));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[flow\nallow_step_jump = maybe").unwrap();
        assert!(ApplicationConfig::load_from(file.path()).is_err());
    }
}
