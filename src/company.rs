//! Blocking client for the DueDil company-data API.
//!
//! Responses are returned as raw JSON values; the text fields they carry
//! (descriptions, keywords) are what callers feed to the [`Pipeline`](crate::Pipeline).

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use crate::types::{PrepError, PrepResult};

/// Default API root for UK companies.
pub const DEFAULT_BASE_URL: &str = "https://duedil.io/v4/company/gb";

const AUTH_HEADER: &str = "X-AUTH-TOKEN";

/// Per-company resources exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Profile,
    Industries,
    Descriptions,
    Keywords,
    SocialMedia,
}

impl Resource {
    fn path(&self) -> Option<&'static str> {
        match self {
            Resource::Profile => None,
            Resource::Industries => Some("industries"),
            Resource::Descriptions => Some("descriptions"),
            Resource::Keywords => Some("keywords"),
            Resource::SocialMedia => Some("social-media-profiles"),
        }
    }
}

/// Everything the API knows about one company.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyRecord {
    pub company_id: u64,
    pub profile: Value,
    pub industries: Value,
    pub description: Value,
    pub keywords: Value,
    pub social_media: Value,
}

#[derive(Debug, Clone)]
pub struct CompanyClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CompanyClient {
    pub fn new(api_key: impl Into<String>) -> PrepResult<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> PrepResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// URL of `resource` for `company_id`.
    pub fn url(&self, company_id: u64, resource: Resource) -> String {
        match resource.path() {
            None => format!("{}/{}.json", self.base_url, company_id),
            Some(path) => format!("{}/{}/{}.json", self.base_url, company_id, path),
        }
    }

    /// Fetch one resource as JSON.
    pub fn fetch(&self, company_id: u64, resource: Resource) -> PrepResult<Value> {
        let url = self.url(company_id, resource);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(AUTH_HEADER, &self.api_key)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PrepError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Company profile as registered at Companies House.
    pub fn info(&self, company_id: u64) -> PrepResult<Value> {
        self.fetch(company_id, Resource::Profile)
    }

    pub fn industries(&self, company_id: u64) -> PrepResult<Value> {
        self.fetch(company_id, Resource::Industries)
    }

    pub fn description(&self, company_id: u64) -> PrepResult<Value> {
        self.fetch(company_id, Resource::Descriptions)
    }

    pub fn keywords(&self, company_id: u64) -> PrepResult<Value> {
        self.fetch(company_id, Resource::Keywords)
    }

    pub fn social_media(&self, company_id: u64) -> PrepResult<Value> {
        self.fetch(company_id, Resource::SocialMedia)
    }

    /// Fetch all five resources. The first failure is returned.
    pub fn record(&self, company_id: u64) -> PrepResult<CompanyRecord> {
        Ok(CompanyRecord {
            company_id,
            profile: self.info(company_id)?,
            industries: self.industries(company_id)?,
            description: self.description(company_id)?,
            keywords: self.keywords(company_id)?,
            social_media: self.social_media(company_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_resource_urls() {
        let client = CompanyClient::with_base_url("key", "https://example.test/v4/company/gb/").unwrap();
        assert_eq!(
            client.url(42, Resource::Profile),
            "https://example.test/v4/company/gb/42.json"
        );
        assert_eq!(
            client.url(42, Resource::SocialMedia),
            "https://example.test/v4/company/gb/42/social-media-profiles.json"
        );
    }

    #[test]
    fn unreachable_host_is_an_http_error() {
        let client = CompanyClient::with_base_url("key", "http://127.0.0.1:9").unwrap();
        assert!(matches!(client.info(1), Err(PrepError::Http(_))));
    }
}
