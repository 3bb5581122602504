//! Paths command handler.
//!
//! Displays all resolved bootstrap paths for diagnostics. When a helper is
//! not being found, this shows where relay is looking.

use relay_core::{ProcessExecutor, ResolvedPaths};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the paths command.
pub fn execute<E: ProcessExecutor>(ctx: &CliContext<E>, json: bool) -> Result<(), CliError> {
    let paths = ResolvedPaths::resolve(&ctx.paths, ctx.env.as_ref())?;
    println!("{}", render(&paths, json)?);
    Ok(())
}

/// Format the snapshot as `key = value` lines or pretty JSON.
pub fn render(paths: &ResolvedPaths, json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(paths)?)
    } else {
        Ok(paths.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::{
        BootstrapConfig, BootstrapContext, MemoryEnvironment, PathResolutionMode,
    };

    fn snapshot() -> ResolvedPaths {
        let ctx = BootstrapContext::new(
            BootstrapConfig::compiled()
                .with_mode(PathResolutionMode::Fixed)
                .with_exec_path_default("/usr/local/libexec/relay-core"),
        );
        ctx.extract_invocation_path("/usr/local/bin/relay");
        let env = MemoryEnvironment::new().with_var("PATH", "/usr/bin");
        ResolvedPaths::resolve(&ctx, &env).unwrap()
    }

    #[test]
    fn json_output_uses_lowercase_enums() {
        let output = render(&snapshot(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["program_name"], "relay");
        assert_eq!(value["mode"], "fixed");
        assert_eq!(value["exec_path_source"], "default");
        assert_eq!(value["invocation_dir"], "/usr/local/bin");
        assert!(value["install_prefix"].is_null());
    }

    #[test]
    fn text_output_is_key_value() {
        let output = render(&snapshot(), false).unwrap();
        assert!(output.contains("exec_path = /usr/local/libexec/relay-core"));
        assert!(output.contains("search_path = /usr/bin"));
    }
}
