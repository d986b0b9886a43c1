//! Repository custom properties as returned by the GitHub REST API.

use crate::config::Token;
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Wire shape of one entry of `/repos/{owner}/{repo}/properties/values`.
#[derive(Deserialize)]
struct PropertyValue {
    property_name: String,
    #[serde(default)]
    value: serde_json::Value,
}

impl From<PropertyValue> for Property {
    fn from(p: PropertyValue) -> Self {
        // Unset properties come back as null, multi-selects as arrays.
        let value = match p.value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Self::new(p.property_name, value)
    }
}

pub trait FetchProperties {
    fn fetch(
        &self,
        owner: &str,
        repo: &str,
        token: &Token,
    ) -> impl Future<Output = Result<Vec<Property>>>;
}

#[derive(Debug, Clone)]
pub struct GitHub {
    api_url: String,
}

impl GitHub {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

pub fn values_path(owner: &str, repo: &str) -> String {
    format!("repos/{owner}/{repo}/properties/values")
}

impl FetchProperties for GitHub {
    async fn fetch(&self, owner: &str, repo: &str, token: &Token) -> Result<Vec<Property>> {
        tracing::debug!("calling properties for {owner}/{repo}");
        let res: Vec<PropertyValue> =
            crate::rest::get(&self.api_url, &values_path(owner, repo), token).await?;
        Ok(res.into_iter().map(Property::from).collect())
    }
}
