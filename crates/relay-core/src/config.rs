//! Bootstrap configuration and compiled-in installation layout.

use crate::paths::PathResolutionMode;

/// Canonical name of the main binary; helpers are `relay-<name>`.
pub const DEFAULT_PROGRAM_NAME: &str = "relay";

/// Environment variable naming the helper directory.
pub const EXEC_PATH_ENV: &str = "RELAY_EXEC_PATH";

/// Helper directory baked in by `build.rs`.
pub const DEFAULT_EXEC_PATH: &str = env!("RELAY_EXEC_PATH_DEFAULT");

/// Binary install directory baked in by `build.rs`.
pub const DEFAULT_BINDIR: &str = env!("RELAY_BINDIR_DEFAULT");

/// Resolution mode baked in by `build.rs` (`fixed` or `relocatable`).
pub const DEFAULT_PATH_MODE: &str = env!("RELAY_PATH_MODE_DEFAULT");

/// Default cap on arguments passed to a launched program.
///
/// Counts only the caller's arguments. The program name and the argv
/// terminator are not included, so up to 32 arguments are accepted where a
/// 32-slot C argv (name and NULL included) would take 30.
pub const DEFAULT_MAX_ARGS: usize = 32;

/// Configuration for a [`BootstrapContext`](crate::BootstrapContext).
///
/// Start from [`BootstrapConfig::compiled`] and override individual fields
/// with the `with_*` builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Name prefixed to every launched argument vector.
    pub program_name: String,
    /// Default helper directory, before the system-path transform.
    pub exec_path_default: String,
    /// Default binary install directory, used as a relocation reference.
    pub bindir_default: String,
    /// Environment variable consulted for the helper directory.
    pub exec_path_env: String,
    /// Whether compiled-in paths are fixed or relocated at runtime.
    pub mode: PathResolutionMode,
    /// Maximum number of arguments a launch accepts (`None` = unbounded).
    pub max_args: Option<usize>,
}

impl BootstrapConfig {
    /// Configuration from the constants baked in at build time.
    pub fn compiled() -> Self {
        Self {
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
            exec_path_default: DEFAULT_EXEC_PATH.to_string(),
            bindir_default: DEFAULT_BINDIR.to_string(),
            exec_path_env: EXEC_PATH_ENV.to_string(),
            mode: PathResolutionMode::from_build_flag(DEFAULT_PATH_MODE),
            max_args: Some(DEFAULT_MAX_ARGS),
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: PathResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    #[must_use]
    pub fn with_exec_path_default(mut self, path: impl Into<String>) -> Self {
        self.exec_path_default = path.into();
        self
    }

    #[must_use]
    pub fn with_bindir_default(mut self, path: impl Into<String>) -> Self {
        self.bindir_default = path.into();
        self
    }

    #[must_use]
    pub fn with_exec_path_env(mut self, key: impl Into<String>) -> Self {
        self.exec_path_env = key.into();
        self
    }

    #[must_use]
    pub const fn with_max_args(mut self, max: Option<usize>) -> Self {
        self.max_args = max;
        self
    }

    /// Reference paths for relocation, highest priority first.
    pub(crate) fn relocation_references(&self) -> [&str; 2] {
        [&self.exec_path_default, &self.bindir_default]
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::compiled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_config_uses_baked_constants() {
        let config = BootstrapConfig::compiled();
        assert_eq!(config.program_name, "relay");
        assert_eq!(config.exec_path_env, "RELAY_EXEC_PATH");
        assert_eq!(config.exec_path_default, DEFAULT_EXEC_PATH);
        assert_eq!(config.bindir_default, DEFAULT_BINDIR);
        assert_eq!(config.max_args, Some(DEFAULT_MAX_ARGS));
        assert!(!config.exec_path_default.is_empty());
    }

    #[test]
    fn builders_override_fields() {
        let config = BootstrapConfig::compiled()
            .with_mode(PathResolutionMode::Relocatable)
            .with_program_name("tool")
            .with_exec_path_default("libexec/tool")
            .with_bindir_default("bin")
            .with_exec_path_env("TOOL_EXEC_PATH")
            .with_max_args(None);

        assert_eq!(config.mode, PathResolutionMode::Relocatable);
        assert_eq!(config.program_name, "tool");
        assert_eq!(config.relocation_references(), ["libexec/tool", "bin"]);
        assert_eq!(config.exec_path_env, "TOOL_EXEC_PATH");
        assert_eq!(config.max_args, None);
    }
}
