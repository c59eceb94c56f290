use gloo_net::http::{Request, Response};
use serde_json::Value;
use user_api_types::{normalize_users, User, UserUpdate};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Loads and normalizes the user list from whichever endpoint the config points at.
pub(crate) async fn get_users(config: &AppConfig) -> AppResult<Vec<User>> {
    let json = fetch_api(config.users_url(), config).await?;
    Ok(normalize_users(json))
}

/// PUTs an edited user to `url` and hands back whatever the api answered with.
/// An empty response body comes back as `Value::Null`.
pub(crate) async fn put_user(url: &str, user: &UserUpdate, config: &AppConfig) -> AppResult<Value> {
    let response = Request::put(url)
        .header(&config.api_key_header, &config.api_key)
        .json(user)?
        .send()
        .await?;
    let response = check_status(response)?;
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

pub async fn fetch_api(url: &str, config: &AppConfig) -> AppResult<Value> {
    let response = Request::get(url)
        .header("Content-Type", "application/json")
        .header(&config.api_key_header, &config.api_key)
        .send()
        .await
        .map_err(|e| {
            log::error!("GET {url} failed: {e}");
            e
        })?;
    let response = check_status(response)?;
    Ok(response.json::<Value>().await?)
}

fn check_status(response: Response) -> AppResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(AppError::Http {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}
