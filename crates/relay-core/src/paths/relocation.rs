//! Runtime relocation of compiled-in installation paths.
//!
//! A relocatable install is built with paths relative to its prefix
//! (`libexec/relay-core`, `bin`). At runtime the prefix is recovered by
//! matching one of those reference paths against the tail of the invocation
//! directory: `/opt/relay/bin` against `bin` yields `/opt/relay`.

use serde::Serialize;

use super::util::is_dir_sep;

/// How compiled-in paths are turned into runtime paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathResolutionMode {
    /// Compiled-in paths are used as they are.
    #[default]
    Fixed,
    /// Relative compiled-in paths are re-rooted under a prefix derived from
    /// the invocation directory.
    Relocatable,
}

impl PathResolutionMode {
    /// Parse the value baked by `build.rs`; anything but `relocatable` is fixed.
    pub fn from_build_flag(flag: &str) -> Self {
        if flag.trim().eq_ignore_ascii_case("relocatable") {
            Self::Relocatable
        } else {
            Self::Fixed
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Relocatable => "relocatable",
        }
    }
}

impl std::fmt::Display for PathResolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// If `reference` is a suffix of `dir`, return the part of `dir` before it.
///
/// Both strings are walked backwards one character at a time. Any two
/// directory separators compare equal; the walk aborts on the first other
/// mismatch. The reference must be consumed completely. Trailing separators
/// are trimmed from the returned prefix.
pub fn strip_reference_suffix<'a>(dir: &'a str, reference: &str) -> Option<&'a str> {
    if reference.is_empty() {
        return None;
    }

    let mut dir_chars = dir.char_indices().rev();
    let mut matched_from = dir.len();

    for r in reference.chars().rev() {
        let (idx, d) = dir_chars.next()?;
        if d != r && !(is_dir_sep(d) && is_dir_sep(r)) {
            return None;
        }
        matched_from = idx;
    }

    Some(dir[..matched_from].trim_end_matches(is_dir_sep))
}

/// Find the install prefix for `dir` using the first matching reference.
pub fn find_install_prefix<'a>(dir: &'a str, references: &[&str]) -> Option<&'a str> {
    references
        .iter()
        .find_map(|reference| strip_reference_suffix(dir, reference))
}
