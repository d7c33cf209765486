use crate::config::Config;
use crate::error::FetchError;
use crate::types::{Profile, Repository};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

/// Where profiles and repository listings come from.
pub trait ProfileSource {
    fn fetch_user(&self, handle: &str) -> Result<Profile, FetchError>;

    /// Most recently updated first, at most `per_page` entries.
    fn fetch_repositories(&self, handle: &str, per_page: u8)
        -> Result<Vec<Repository>, FetchError>;
}

pub struct GitHubClient {
    http: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(GitHubClient {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn user_url(&self, handle: &str) -> String {
        format!("{}/users/{}", self.api_base, urlencoding::encode(handle))
    }

    fn repos_url(&self, handle: &str, per_page: u8) -> String {
        format!(
            "{}/repos?sort=updated&per_page={}",
            self.user_url(handle),
            per_page
        )
    }
}

impl ProfileSource for GitHubClient {
    fn fetch_user(&self, handle: &str) -> Result<Profile, FetchError> {
        let url = self.user_url(handle);
        tracing::debug!(%url, "requesting profile");

        let resp = self.http.get(&url).send()?;
        if !resp.status().is_success() {
            tracing::debug!(status = %resp.status(), "profile lookup failed");
            return Err(FetchError::NotFound);
        }
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn fetch_repositories(
        &self,
        handle: &str,
        per_page: u8,
    ) -> Result<Vec<Repository>, FetchError> {
        let url = self.repos_url(handle, per_page);
        tracing::debug!(%url, "requesting repositories");

        let resp = self.http.get(&url).send()?;
        if !resp.status().is_success() {
            return Err(FetchError::ReposUnavailable(resp.status().to_string()));
        }
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
