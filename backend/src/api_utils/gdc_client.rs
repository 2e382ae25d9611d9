use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::Context;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

pub fn api_base_url() -> String {
    std::env::var("GDC_API_URL").unwrap_or("https://api.gdc.cancer.gov".to_string())
}

/// Largest `size` sent in a single listing request.
pub fn api_page_limit() -> u64 {
    std::env::var("GDC_API_PAGE_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10_000)
}

fn cache_ttl() -> Duration {
    let seconds = std::env::var("GDC_API_CACHE_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300);
    Duration::from_secs(seconds)
}

struct CachedResponse {
    inserted: Instant,
    body: String,
}

fn response_cache() -> &'static RwLock<HashMap<String, CachedResponse>> {
    static CACHE: OnceLock<RwLock<HashMap<String, CachedResponse>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// POSTs a JSON body to an API endpoint and returns the raw response text.
/// Identical requests within the cache TTL are answered from memory.
pub async fn gdc_post_text(endpoint: &str, body: &serde_json::Value) -> anyhow::Result<String> {
    let url = format!("{}/{}", api_base_url(), endpoint.trim_start_matches('/'));
    let body_txt = serde_json::to_string(body)?;
    let request_hash = sha256::digest(format!("{url}\n{body_txt}"));

    let ttl = cache_ttl();
    if let Some(cached) = response_cache().read().await.get(&request_hash) {
        if cached.inserted.elapsed() < ttl {
            tracing::debug!("API CACHE HIT: {} {}", endpoint, request_hash);
            return Ok(cached.body.clone());
        }
    }

    let t0 = Instant::now();
    let response = http_client()
        .post(&url)
        .header("Content-Type", "application/json")
        .body(body_txt)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    tracing::info!(
        "API {} answered in {}ms (len = {})",
        endpoint,
        t0.elapsed().as_millis(),
        response_txt.len()
    );

    let mut cache = response_cache().write().await;
    cache.retain(|_, entry| entry.inserted.elapsed() < ttl);
    cache.insert(request_hash, CachedResponse { inserted: Instant::now(), body: response_txt.clone() });
    Ok(response_txt)
}

pub async fn gdc_post<T: DeserializeOwned>(endpoint: &str, body: &serde_json::Value) -> anyhow::Result<T> {
    let response_txt = gdc_post_text(endpoint, body).await?;
    serde_json::from_str(&response_txt).with_context(|| format!("unexpected response from {endpoint}"))
}
