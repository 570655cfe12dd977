use std::fmt;

use thiserror::Error;

/// Body of a failed catalog response
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    /// `application/problem+json` payload
    Problem(serde_json::Value),
    Text(String),
}

impl fmt::Display for UpstreamBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamBody::Problem(value) => write!(f, "{value}"),
            UpstreamBody::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid catalog url: {0}")]
    Url(#[from] url::ParseError),

    #[error("catalog returned {status}: {body}")]
    Upstream { status: u16, body: UpstreamBody },
}

impl CatalogError {
    /// Classify a non-2xx response. Problem documents keep their JSON form;
    /// anything else, including a problem document that fails to parse, is text.
    pub fn upstream(status: u16, content_type: Option<&str>, body: String) -> Self {
        let is_problem = content_type
            .map(|ct| ct.contains("application/problem+json"))
            .unwrap_or(false);

        let body = if is_problem {
            serde_json::from_str(&body)
                .map(UpstreamBody::Problem)
                .unwrap_or(UpstreamBody::Text(body))
        } else {
            UpstreamBody::Text(body)
        };

        CatalogError::Upstream { status, body }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Upstream { status, .. } => Some(*status),
            CatalogError::Http(err) => err.status().map(|s| s.as_u16()),
            CatalogError::Url(_) => None,
        }
    }
}
