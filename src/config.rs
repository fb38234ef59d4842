// src/config.rs

//! Application configuration.
//!
//! All settings come from environment variables, read once at startup
//! into an explicit [`Config`] value that is passed into the pipeline.
//! Missing required variables are a fatal startup error.

use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the note source API
    pub source_token: String,

    /// Base URL of the note source API
    pub source_endpoint: String,

    /// Identifier of the note collection (notebook) to publish
    pub collection_id: String,

    /// Coordinates of the previously published manifest
    pub release: ReleaseConfig,

    /// Output directory for generated artifacts
    pub output_dir: PathBuf,

    /// Maximum concurrent per-post publish jobs
    pub max_concurrent: usize,

    /// Optional directory holding `post.html` / `index.html` templates
    pub template_dir: Option<PathBuf>,
}

/// Location of the previously published site, used to find `meta.json`.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Owning account of the published repository
    pub username: String,

    /// Repository name
    pub project: String,

    /// Branch the site is published on
    pub branch: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::config(format!("missing required variable {key}")))
        };

        let max_concurrent = match lookup("PUBLISH_CONCURRENCY") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| AppError::config(format!("invalid PUBLISH_CONCURRENCY: {e}")))?,
            None => defaults::MAX_CONCURRENT,
        };

        let config = Self {
            source_token: required("NOTES_TOKEN")?,
            source_endpoint: required("NOTES_ENDPOINT")?,
            collection_id: required("NOTES_COLLECTION")?,
            release: ReleaseConfig {
                username: required("RELEASE_USERNAME")?,
                project: required("RELEASE_PROJECT")?,
                branch: required("RELEASE_BRANCH")?,
            },
            output_dir: lookup("RELEASE_DIR")
                .unwrap_or_else(|| defaults::OUTPUT_DIR.to_string())
                .into(),
            max_concurrent,
            template_dir: lookup("TEMPLATE_DIR").map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.source_endpoint)?;
        if self.max_concurrent == 0 {
            return Err(AppError::config("PUBLISH_CONCURRENCY must be > 0"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(AppError::config("RELEASE_DIR must not be empty"));
        }
        Ok(())
    }

    /// URL of the previous run's published manifest.
    pub fn manifest_url(&self) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/meta.json",
            self.release.username, self.release.project, self.release.branch
        )
    }
}

mod defaults {
    pub const OUTPUT_DIR: &str = "public";
    pub const MAX_CONCURRENT: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("NOTES_TOKEN", "s3cret"),
            ("NOTES_ENDPOINT", "https://notes.example.com/api"),
            ("NOTES_COLLECTION", "nb-1"),
            ("RELEASE_USERNAME", "alice"),
            ("RELEASE_PROJECT", "blog"),
            ("RELEASE_BRANCH", "gh-pages"),
        ])
    }

    fn lookup_in<'a>(env: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| env.get(key).map(|v| v.to_string())
    }

    #[test]
    fn builds_from_complete_environment() {
        let env = full_env();
        let config = Config::from_lookup(lookup_in(&env)).unwrap();

        assert_eq!(config.collection_id, "nb-1");
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.max_concurrent, 4);
        assert!(config.template_dir.is_none());
    }

    #[test]
    fn missing_token_is_fatal() {
        let mut env = full_env();
        env.remove("NOTES_TOKEN");

        let err = Config::from_lookup(lookup_in(&env)).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn blank_required_value_is_fatal() {
        let mut env = full_env();
        env.insert("RELEASE_BRANCH", "   ");

        assert!(Config::from_lookup(lookup_in(&env)).is_err());
    }

    #[test]
    fn invalid_concurrency_is_fatal() {
        let mut env = full_env();
        env.insert("PUBLISH_CONCURRENCY", "lots");

        assert!(Config::from_lookup(lookup_in(&env)).is_err());
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let mut env = full_env();
        env.insert("PUBLISH_CONCURRENCY", "0");

        assert!(Config::from_lookup(lookup_in(&env)).is_err());
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let mut env = full_env();
        env.insert("NOTES_ENDPOINT", "notes.example.com/api");

        let err = Config::from_lookup(lookup_in(&env)).unwrap_err();
        assert!(matches!(err, AppError::Url(_)));
    }

    #[test]
    fn manifest_url_points_at_release_coordinates() {
        let env = full_env();
        let config = Config::from_lookup(lookup_in(&env)).unwrap();

        assert_eq!(
            config.manifest_url(),
            "https://raw.githubusercontent.com/alice/blog/gh-pages/meta.json"
        );
    }
}
