//! Resolver configuration.
//!
//! The only knob is whether the exact-match stage runs. Turning it off with
//! `RSXGL_DISABLE_EXACT_FORMAT_MATCH=1` sends every request through the preference tables, which
//! makes fallback behaviour reproducible when debugging a device's capability answers.

/// Env var that disables the exact-match stage.
pub const DISABLE_EXACT_FORMAT_MATCH_ENV: &str = "RSXGL_DISABLE_EXACT_FORMAT_MATCH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolverConfig {
    /// Try the exact `(format, type)` tables before the preference tables.
    pub exact_match: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { exact_match: true }
    }
}

impl ResolverConfig {
    pub fn from_env() -> Self {
        Self::for_disable_flag(env_var_truthy(DISABLE_EXACT_FORMAT_MATCH_ENV))
    }

    fn for_disable_flag(disable_exact_match: bool) -> Self {
        Self {
            exact_match: !disable_exact_match,
        }
    }

    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }
}

fn env_var_truthy(name: &str) -> bool {
    let Ok(raw) = std::env::var(name) else {
        return false;
    };
    is_truthy(&raw)
}

fn is_truthy(raw: &str) -> bool {
    let v = raw.trim();
    v == "1"
        || v.eq_ignore_ascii_case("true")
        || v.eq_ignore_ascii_case("yes")
        || v.eq_ignore_ascii_case("on")
}
