use crate::models::IssueRef;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::time::Duration;

/// Shape of a GitHub issue URL: host, then /{owner}/{repo}/issues/{id}
const ISSUE_URL_PATTERN: &str = r"^https?://github\.com/([^/\s]+)/([^/\s]+)/issues/(\d+)/?$";

/// The slice of the issue API response we care about
#[derive(Debug, Deserialize)]
struct IssueResponse {
    state: String,
}

/// Annotates tracked URLs with live GitHub issue state
pub struct IssueTracker {
    client: reqwest::blocking::Client,
    api_base: String,
    issue_url: Regex,
}

impl IssueTracker {
    /// Create a tracker pointed at the given API base (e.g. "https://api.github.com")
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            // GitHub's API rejects requests without a User-Agent
            .user_agent(concat!("steward/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        let issue_url =
            Regex::new(ISSUE_URL_PATTERN).context("Failed to compile issue URL pattern")?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            issue_url,
        })
    }

    /// Parse a URL into an issue reference, if it points at a GitHub issue
    pub fn parse_issue_ref(&self, url: &str) -> Option<IssueRef> {
        let captures = self.issue_url.captures(url)?;

        Some(IssueRef {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
            number: captures[3].to_string(),
        })
    }

    /// Annotate a tracked URL with the live state of the issue it points at
    ///
    /// Anything that is not a GitHub issue URL comes back unchanged. So does
    /// any URL whose lookup fails; one dead link must not hide the rest of
    /// the listing.
    pub fn annotate(&self, url: &str) -> String {
        let Some(issue) = self.parse_issue_ref(url) else {
            return url.to_string();
        };

        match self.fetch_state(&issue) {
            Ok(state) if state == "closed" => format!("Github Issue (Closed!): {url}"),
            Ok(_) => format!("Github Issue (Open): {url}"),
            Err(_) => url.to_string(),
        }
    }

    /// Fetch the current state of an issue from the tracker API
    fn fetch_state(&self, issue: &IssueRef) -> Result<String> {
        let endpoint = format!(
            "{}/repos/{}/{}/issues/{}",
            self.api_base, issue.owner, issue.repo, issue.number
        );

        let body = self
            .client
            .get(&endpoint)
            .send()
            .with_context(|| format!("Request to {} failed", endpoint))?
            .error_for_status()
            .with_context(|| format!("Request to {} returned an error status", endpoint))?
            .text()
            .context("Failed to read issue response body")?;

        let response: IssueResponse =
            serde_json::from_str(&body).context("Issue response was not the expected shape")?;

        Ok(response.state)
    }
}
