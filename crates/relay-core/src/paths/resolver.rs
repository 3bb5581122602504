//! Snapshot of every bootstrap path for diagnostics.
//!
//! Backs the `relay paths` command: one struct captures what the resolvers
//! currently report so it can be printed or serialized in one go.

use serde::Serialize;

use super::{ExecPathSource, PathResolutionMode};
use crate::context::BootstrapContext;
use crate::env::Environment;
use crate::error::BootstrapError;

/// All resolved bootstrap paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    /// Canonical program name prefixed to launched argument vectors
    pub program_name: String,
    /// Directory the binary was invoked from, if argv[0] had one
    pub invocation_dir: Option<String>,
    /// Fixed or relocatable resolution
    pub mode: PathResolutionMode,
    /// Install prefix derived by relocation, if any
    pub install_prefix: Option<String>,
    /// Directory holding helper programs (lossy if not valid Unicode)
    pub exec_path: String,
    /// How the exec path was resolved
    pub exec_path_source: ExecPathSource,
    /// Current `PATH` (lossy if not valid Unicode)
    pub search_path: Option<String>,
}

impl ResolvedPaths {
    /// Resolve all paths against `env`.
    pub fn resolve(ctx: &BootstrapContext, env: &dyn Environment) -> Result<Self, BootstrapError> {
        let exec = ctx.resolve_exec_path(env)?;

        Ok(Self {
            program_name: ctx.config().program_name.clone(),
            invocation_dir: ctx.invocation_dir().map(str::to_string),
            mode: ctx.mode(),
            install_prefix: ctx.install_prefix().map(str::to_string),
            exec_path: exec.path.to_string_lossy().into_owned(),
            exec_path_source: exec.source,
            search_path: env
                .var_os("PATH")
                .map(|path| path.to_string_lossy().into_owned()),
        })
    }
}

fn or_unset(value: Option<&str>) -> &str {
    value.unwrap_or("(unset)")
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "program_name = {}", self.program_name)?;
        writeln!(
            f,
            "invocation_dir = {}",
            or_unset(self.invocation_dir.as_deref())
        )?;
        writeln!(f, "mode = {}", self.mode)?;
        writeln!(
            f,
            "install_prefix = {}",
            or_unset(self.install_prefix.as_deref())
        )?;
        writeln!(f, "exec_path = {}", self.exec_path)?;
        writeln!(f, "exec_path_source = {:?}", self.exec_path_source)?;
        write!(f, "search_path = {}", or_unset(self.search_path.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BootstrapConfig;
    use crate::env::MemoryEnvironment;

    fn context() -> BootstrapContext {
        BootstrapContext::new(
            BootstrapConfig::compiled()
                .with_mode(PathResolutionMode::Fixed)
                .with_exec_path_default("/usr/local/libexec/relay-core"),
        )
    }

    #[test]
    fn resolve_captures_context_state() {
        let ctx = context();
        ctx.extract_invocation_path("/opt/relay/bin/relay");
        let env = MemoryEnvironment::new()
            .with_var("RELAY_EXEC_PATH", "/opt/relay/helpers")
            .with_var("PATH", "/usr/bin");

        let paths = ResolvedPaths::resolve(&ctx, &env).unwrap();
        assert_eq!(paths.program_name, "relay");
        assert_eq!(paths.invocation_dir.as_deref(), Some("/opt/relay/bin"));
        assert_eq!(paths.mode, PathResolutionMode::Fixed);
        assert_eq!(paths.install_prefix, None);
        assert_eq!(paths.exec_path, "/opt/relay/helpers");
        assert_eq!(paths.exec_path_source, ExecPathSource::EnvVar);
        assert_eq!(paths.search_path.as_deref(), Some("/usr/bin"));
    }

    #[test]
    fn resolve_is_deterministic() {
        let ctx = context();
        let env = MemoryEnvironment::new();
        let first = ResolvedPaths::resolve(&ctx, &env).unwrap();
        let second = ResolvedPaths::resolve(&ctx, &env).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn display_format_is_parseable() {
        let ctx = context();
        let paths = ResolvedPaths::resolve(&ctx, &MemoryEnvironment::new()).unwrap();
        let output = paths.to_string();

        for key in [
            "program_name = relay",
            "invocation_dir = (unset)",
            "mode = fixed",
            "install_prefix = (unset)",
            "exec_path = /usr/local/libexec/relay-core",
            "exec_path_source = Default",
            "search_path = (unset)",
        ] {
            assert!(output.contains(key), "missing `{key}` in:\n{output}");
        }
    }
}
