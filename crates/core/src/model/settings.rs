use thiserror::Error;
use url::Url;

/// Validated client configuration for the platform API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiSettings {
    base_url: String,
}

/// Unvalidated settings as entered or loaded from the environment.
#[derive(Clone, Debug, Default)]
pub struct ApiSettingsDraft {
    pub base_url: Option<String>,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiSettingsError {
    #[error("missing base URL")]
    MissingBaseUrl,
    #[error("invalid base URL")]
    InvalidBaseUrl,
}

impl ApiSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft into usable settings.
    ///
    /// # Errors
    ///
    /// Returns `ApiSettingsError` if the base URL is absent or does not parse.
    pub fn validate(self) -> Result<ApiSettings, ApiSettingsError> {
        let base_url =
            normalize_optional(self.base_url).ok_or(ApiSettingsError::MissingBaseUrl)?;

        if Url::parse(&base_url).is_err() {
            return Err(ApiSettingsError::InvalidBaseUrl);
        }

        Ok(ApiSettings { base_url })
    }
}

impl ApiSettings {
    /// Build settings from a base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiSettingsError` if the URL is empty or does not parse.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiSettingsError> {
        ApiSettingsDraft {
            base_url: Some(base_url.into()),
        }
        .validate()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_a_parseable_url() {
        let settings = ApiSettings::new("https://api.example.test/v1").unwrap();
        assert_eq!(settings.base_url(), "https://api.example.test/v1");
    }

    #[test]
    fn validate_trims_whitespace() {
        let settings = ApiSettings::new("  https://api.example.test  ").unwrap();
        assert_eq!(settings.base_url(), "https://api.example.test");
    }

    #[test]
    fn validate_rejects_missing_url() {
        let err = ApiSettingsDraft::new().validate().unwrap_err();
        assert!(matches!(err, ApiSettingsError::MissingBaseUrl));

        let err = ApiSettings::new("   ").unwrap_err();
        assert!(matches!(err, ApiSettingsError::MissingBaseUrl));
    }

    #[test]
    fn validate_rejects_unparseable_url() {
        let err = ApiSettings::new("not a url").unwrap_err();
        assert!(matches!(err, ApiSettingsError::InvalidBaseUrl));
    }
}
