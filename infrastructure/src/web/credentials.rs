//! Credential resolution for the search backend
//!
//! The key is read at call time, not at startup, so rotating the variable
//! in a long-lived process takes effect on the next search.

use scout_application::SearchSettings;
use scout_domain::RetrievalError;

/// Where the search credential comes from.
///
/// An inline key wins over the environment variable. The key itself never
/// appears in `Debug` output.
#[derive(Clone)]
pub struct CredentialSource {
    env_var: String,
    inline: Option<String>,
}

impl CredentialSource {
    /// Read the key from `env_var`
    pub fn from_env(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            inline: None,
        }
    }

    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self {
            env_var: settings.api_key_env.clone(),
            inline: settings.api_key.clone(),
        }
    }

    pub fn with_inline(mut self, key: impl Into<String>) -> Self {
        self.inline = Some(key.into());
        self
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// Resolve against the process environment.
    pub fn resolve(&self) -> Result<String, RetrievalError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with a custom variable lookup.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<String, RetrievalError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = non_blank(self.inline.as_deref()) {
            return Ok(key);
        }

        if self.env_var.trim().is_empty() {
            return Err(RetrievalError::Configuration(
                "No search API key configured (set search.api_key_env)".to_string(),
            ));
        }

        non_blank(lookup(&self.env_var).as_deref()).ok_or_else(|| {
            RetrievalError::Configuration(format!("{} not found in environment", self.env_var))
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl std::fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSource")
            .field("env_var", &self.env_var)
            .field("inline", &self.inline.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
