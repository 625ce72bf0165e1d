//! User-facing errors for the daemon role commands
//!
//! Every error carries what went wrong, where it happened and how to fix it.

use std::fmt;

/// An error with context and suggestions, printed verbatim by `main`.
#[derive(Debug)]
pub struct HelpfulError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_suggestions(mut self, suggestions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.suggestions.extend(suggestions.into_iter().map(|s| s.into()));
        self
    }

    /// A role was started without a flag it cannot run without.
    pub fn missing_role_flag(role: &str, flag: &str, env: &str) -> Self {
        Self::new(format!("Missing required flag --{} for `rook ceph {}`", flag, role))
            .with_context(format!("The {} daemon needs --{} to identify itself", role, flag))
            .with_suggestions([
                format!("TRY: rook ceph {} --{} <value>", role, flag),
                format!("TRY: Set {} in the environment", env),
            ])
    }

    /// The role has no runtime linked into this binary.
    pub fn role_not_bundled(role: &str) -> Self {
        Self::new(format!("The {} role is not bundled in this build", role))
            .with_context("Only the Ceph daemon roles (mon, osd, mgr, rgw, mds) can be launched")
            .with_suggestions([
                format!("TRY: Inspect the resolved settings: rook ceph {} --dry-run", role),
                "TRY: Run the orchestrator from its own deployment".to_string(),
            ])
    }

    /// The renamed-flag table is inconsistent with the registered flags.
    pub fn invalid_flag_table(role: &str, details: &str) -> Self {
        Self::new(format!("Invalid flag configuration for `rook ceph {}`", role))
            .with_context(details.to_string())
            .with_suggestion("TRY: Report this as a bug; the binary was built with a broken flag table")
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {}", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpful_error_display() {
        let err = HelpfulError::new("mon failed to start")
            .with_context("While launching ceph-mon")
            .with_suggestion("Check the mon keyring");

        let display = format!("{}", err);
        assert!(display.contains("ERROR: mon failed to start"));
        assert!(display.contains("CONTEXT: While launching ceph-mon"));
        assert!(display.contains("Check the mon keyring"));
    }

    #[test]
    fn test_missing_role_flag_names_env_var() {
        let display = HelpfulError::missing_role_flag("osd", "osd-id", "ROOK_OSD_ID").to_string();
        assert!(display.contains("--osd-id"));
        assert!(display.contains("ROOK_OSD_ID"));
    }

    #[test]
    fn test_role_not_bundled_suggests_dry_run() {
        let display = HelpfulError::role_not_bundled("operator").to_string();
        assert!(display.contains("rook ceph operator --dry-run"));
    }
}
