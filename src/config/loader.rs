//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::StaffRole;

use super::types::{HostelConfig, HostelMetadata, ReferencePolicy, StaffMember};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/hostel/
/// ├── hostel.yaml   # hostel metadata and reference-number policy
/// └── staff.yaml    # staff directory
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::StaffRole;
///
/// let loader = ConfigLoader::load("./config/hostel").unwrap();
/// let member = loader.config().authenticate("T999", StaffRole::Rector).unwrap();
/// println!("Rector: {}", member.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: HostelConfig,
}

#[derive(Debug, Deserialize)]
struct HostelFile {
    name: String,
    code: String,
    #[serde(default)]
    reference: Option<ReferencePolicy>,
}

#[derive(Debug, Deserialize)]
struct StaffFile {
    staff: Vec<StaffMember>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/hostel")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let hostel_path = path.join("hostel.yaml");
        let hostel = Self::load_yaml::<HostelFile>(&hostel_path)?;

        let staff_path = path.join("staff.yaml");
        let staff_file = Self::load_yaml::<StaffFile>(&staff_path)?;

        let config = HostelConfig::new(
            HostelMetadata {
                name: hostel.name,
                code: hostel.code,
            },
            hostel.reference.unwrap_or_default(),
            staff_file.staff,
        );

        Ok(Self { config })
    }

    /// Wraps an already constructed configuration.
    pub fn from_config(config: HostelConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &HostelConfig {
        &self.config
    }

    /// Resolves a staff identity against the loaded directory.
    pub fn authenticate(&self, staff_id: &str, role: StaffRole) -> EngineResult<&StaffMember> {
        self.config.authenticate(staff_id, role)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    fn temp_config_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("leave-engine-config-{tag}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// CL-001: a complete directory loads
    #[test]
    fn test_load_complete_directory() {
        let dir = temp_config_dir("complete");
        write_file(
            &dir,
            "hostel.yaml",
            "name: Sunrise Hostel\ncode: SUN-01\nreference:\n  prefix: \"HLM-\"\n  token_length: 15\n  max_attempts: 8\n",
        );
        write_file(
            &dir,
            "staff.yaml",
            "staff:\n  - id: C101\n    name: Dr. Sharma\n    role: coordinator\n  - id: T999\n    name: Prof. Patel\n    role: rector\n",
        );

        let loader = ConfigLoader::load(&dir).unwrap();

        assert_eq!(loader.config().metadata().code, "SUN-01");
        assert_eq!(loader.config().reference().token_length, 15);
        assert_eq!(loader.config().staff().len(), 2);
        assert!(loader.authenticate("T999", StaffRole::Rector).is_ok());
    }

    /// CL-002: omitted reference policy falls back to the default
    #[test]
    fn test_missing_reference_policy_uses_default() {
        let dir = temp_config_dir("default-policy");
        write_file(&dir, "hostel.yaml", "name: Sunrise Hostel\ncode: SUN-01\n");
        write_file(
            &dir,
            "staff.yaml",
            "staff:\n  - id: T999\n    name: Prof. Patel\n    role: rector\n",
        );

        let loader = ConfigLoader::load(&dir).unwrap();

        assert_eq!(loader.config().reference().prefix, "HLM-");
        assert_eq!(loader.config().reference().token_length, 15);
    }

    /// CL-003: a missing file is ConfigNotFound
    #[test]
    fn test_missing_file_is_config_not_found() {
        let dir = temp_config_dir("missing-staff");
        write_file(&dir, "hostel.yaml", "name: Sunrise Hostel\ncode: SUN-01\n");

        let result = ConfigLoader::load(&dir);

        assert!(matches!(
            result.unwrap_err(),
            EngineError::ConfigNotFound { .. }
        ));
    }

    /// CL-004: invalid YAML is ConfigParseError
    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = temp_config_dir("bad-yaml");
        write_file(&dir, "hostel.yaml", "name: Sunrise Hostel\ncode: SUN-01\n");
        write_file(&dir, "staff.yaml", "staff: [this is: not: valid\n");

        let result = ConfigLoader::load(&dir);

        assert!(matches!(
            result.unwrap_err(),
            EngineError::ConfigParseError { .. }
        ));
    }

    /// CL-005: an unknown role string fails to parse
    #[test]
    fn test_unknown_role_fails_to_parse() {
        let dir = temp_config_dir("bad-role");
        write_file(&dir, "hostel.yaml", "name: Sunrise Hostel\ncode: SUN-01\n");
        write_file(
            &dir,
            "staff.yaml",
            "staff:\n  - id: W001\n    name: Warden\n    role: warden\n",
        );

        let result = ConfigLoader::load(&dir);

        assert!(matches!(
            result.unwrap_err(),
            EngineError::ConfigParseError { .. }
        ));
    }
}
