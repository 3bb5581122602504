//! Bootstrap context - the state shared by every resolver.
//!
//! Created once at the top of `main` and passed by reference. Each piece of
//! state is written at most once; the relocation prefix is memoized after
//! its first successful computation.

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::paths::util::is_absolute_path;
use crate::paths::{PathResolutionMode, find_install_prefix, split_invocation_path};

/// Process bootstrap state.
#[derive(Debug)]
pub struct BootstrapContext {
    config: BootstrapConfig,
    invocation_dir: OnceLock<String>,
    exec_path_override: OnceLock<String>,
    install_prefix: OnceLock<String>,
}

impl BootstrapContext {
    pub const fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            invocation_dir: OnceLock::new(),
            exec_path_override: OnceLock::new(),
            install_prefix: OnceLock::new(),
        }
    }

    pub const fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    pub const fn mode(&self) -> PathResolutionMode {
        self.config.mode
    }

    /// Directory part of the first recorded invocation path.
    pub fn invocation_dir(&self) -> Option<&str> {
        self.invocation_dir.get().map(String::as_str)
    }

    pub fn exec_path_override(&self) -> Option<&str> {
        self.exec_path_override.get().map(String::as_str)
    }

    /// Install prefix, if relocation has already computed one.
    pub fn install_prefix(&self) -> Option<&str> {
        self.install_prefix.get().map(String::as_str)
    }

    /// Record the directory of `argv0` and return its basename.
    ///
    /// Only the first directory seen is kept. Later calls still return the
    /// basename of whatever they are given.
    pub fn extract_invocation_path<'a>(&self, argv0: &'a str) -> &'a str {
        let (dir, basename) = split_invocation_path(argv0);

        if let Some(dir) = dir {
            if self.invocation_dir.set(dir.to_string()).is_ok() {
                debug!(invocation_dir = dir, "recorded invocation directory");
            } else {
                debug!(ignored = dir, "invocation directory already recorded");
            }
        }

        basename
    }

    /// Set the helper directory explicitly. Wins over every other source.
    pub fn set_exec_path_override(&self, path: impl Into<String>) -> Result<(), BootstrapError> {
        self.exec_path_override
            .set(path.into())
            .map_err(|_| BootstrapError::ExecPathAlreadySet {
                current: self.exec_path_override().unwrap_or_default().to_string(),
            })
    }

    /// Turn a compiled-in path into the path to use at runtime.
    ///
    /// `Fixed` mode and absolute paths pass through. In `Relocatable` mode a
    /// relative path is joined onto the install prefix; when no prefix can be
    /// derived the path is returned unchanged after a warning.
    pub fn system_path(&self, path: &str) -> Result<String, BootstrapError> {
        if self.config.mode == PathResolutionMode::Fixed || is_absolute_path(path) {
            return Ok(path.to_string());
        }

        match self.compute_install_prefix(path)? {
            Some(prefix) => Ok(format!("{prefix}/{path}")),
            None => {
                warn!("relocation requested for path '{path}', but prefix computation failed");
                Ok(path.to_string())
            }
        }
    }

    fn compute_install_prefix(&self, path: &str) -> Result<Option<&str>, BootstrapError> {
        if let Some(prefix) = self.install_prefix.get() {
            return Ok(Some(prefix));
        }

        let dir = self
            .invocation_dir()
            .ok_or_else(|| BootstrapError::InvocationDirUnknown {
                path: path.to_string(),
            })?;
        if !is_absolute_path(dir) {
            return Err(BootstrapError::InvocationDirRelative {
                path: path.to_string(),
                dir: dir.to_string(),
            });
        }

        let references = self.config.relocation_references();
        Ok(find_install_prefix(dir, &references).map(|prefix| {
            debug!(install_prefix = prefix, "computed install prefix");
            self.install_prefix
                .get_or_init(|| prefix.to_string())
                .as_str()
        }))
    }
}

impl Default for BootstrapContext {
    fn default() -> Self {
        Self::new(BootstrapConfig::compiled())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn relocatable() -> BootstrapContext {
        BootstrapContext::new(
            BootstrapConfig::compiled()
                .with_mode(PathResolutionMode::Relocatable)
                .with_exec_path_default("libexec/relay-core")
                .with_bindir_default("bin"),
        )
    }

    #[test]
    fn extraction_keeps_first_directory() {
        let ctx = BootstrapContext::default();
        assert_eq!(ctx.extract_invocation_path("/opt/a/bin/relay"), "relay");
        assert_eq!(ctx.extract_invocation_path("/opt/b/bin/relay-log"), "relay-log");
        assert_eq!(ctx.invocation_dir(), Some("/opt/a/bin"));
    }

    #[test]
    fn bare_invocation_leaves_directory_unset() {
        let ctx = BootstrapContext::default();
        assert_eq!(ctx.extract_invocation_path("relay"), "relay");
        assert_eq!(ctx.invocation_dir(), None);
    }

    #[test]
    fn override_can_only_be_set_once() {
        let ctx = BootstrapContext::default();
        ctx.set_exec_path_override("/first").unwrap();
        let err = ctx.set_exec_path_override("/second").unwrap_err();
        assert!(matches!(err, BootstrapError::ExecPathAlreadySet { ref current } if current == "/first"));
        assert_eq!(ctx.exec_path_override(), Some("/first"));
    }

    #[test]
    fn fixed_mode_is_identity() {
        let ctx = BootstrapContext::new(
            BootstrapConfig::compiled().with_mode(PathResolutionMode::Fixed),
        );
        assert_eq!(ctx.system_path("libexec/relay-core").unwrap(), "libexec/relay-core");
        assert_eq!(ctx.install_prefix(), None);
    }

    #[test]
    fn relocatable_mode_joins_prefix() {
        let ctx = relocatable();
        ctx.extract_invocation_path("/home/me/relay/bin/relay");
        assert_eq!(
            ctx.system_path("libexec/relay-core").unwrap(),
            "/home/me/relay/libexec/relay-core"
        );
        assert_eq!(ctx.install_prefix(), Some("/home/me/relay"));
    }

    #[test]
    fn helpers_in_exec_dir_find_the_same_prefix() {
        let ctx = relocatable();
        ctx.extract_invocation_path("/srv/relay/libexec/relay-core/relay-log");
        assert_eq!(ctx.system_path("share/relay").unwrap(), "/srv/relay/share/relay");
    }

    #[test]
    fn prefix_is_memoized() {
        let ctx = relocatable();
        ctx.extract_invocation_path("/opt/relay/bin/relay");
        ctx.system_path("libexec/relay-core").unwrap();
        ctx.system_path("share/relay").unwrap();
        assert_eq!(ctx.install_prefix(), Some("/opt/relay"));
    }

    #[test]
    fn unmatched_prefix_returns_path_unchanged() {
        let ctx = relocatable();
        ctx.extract_invocation_path("/opt/relay/tools/relay");
        assert_eq!(ctx.system_path("libexec/relay-core").unwrap(), "libexec/relay-core");
        assert_eq!(ctx.install_prefix(), None);
    }

    #[test]
    fn absolute_paths_skip_relocation() {
        let ctx = relocatable();
        assert_eq!(ctx.system_path("/etc/relay").unwrap(), "/etc/relay");
    }

    #[test]
    fn relocation_without_invocation_dir_is_an_error() {
        let ctx = relocatable();
        let err = ctx.system_path("libexec/relay-core").unwrap_err();
        assert!(matches!(err, BootstrapError::InvocationDirUnknown { .. }));
    }

    #[test]
    fn relocation_with_relative_invocation_dir_is_an_error() {
        let ctx = relocatable();
        ctx.extract_invocation_path("bin/relay");
        let err = ctx.system_path("libexec/relay-core").unwrap_err();
        assert!(matches!(err, BootstrapError::InvocationDirRelative { ref dir, .. } if dir == "bin"));
    }
}
