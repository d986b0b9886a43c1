use crate::config::Token;
use crate::env_keys::ENV_GH_PROPS_MOCK_FILE;
use crate::error::{Error, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("gh-props/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

pub fn url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Human readable reason for a failed response, preferring GitHub's own message.
fn error_message(status: surf::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(e) if !e.message.is_empty() => e.message,
        _ => status.canonical_reason().to_owned(),
    }
}

pub async fn get<T: DeserializeOwned>(base: &str, path: &str, token: &Token) -> Result<T> {
    if let Ok(mock) = std::env::var(ENV_GH_PROPS_MOCK_FILE) {
        let data = std::fs::read_to_string(mock)?;
        return Ok(serde_json::from_str(&data)?);
    }

    let mut res = surf::get(url(base, path))
        .header("Authorization", format!("Bearer {}", token.expose()))
        .header("Accept", ACCEPT)
        .header(API_VERSION_HEADER, API_VERSION)
        .header("User-Agent", USER_AGENT)
        .await
        .map_err(Error::Http)?;
    let body = res.body_string().await.map_err(Error::Http)?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::Status {
            status: status as u16,
            message: error_message(status, &body),
        });
    }
    Ok(serde_json::from_str(&body)?)
}
