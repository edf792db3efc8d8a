use std::time::Duration;

use log::{info, warn};

/// One-shot connectivity check against the API test endpoint.
pub async fn check_api(base_url: &str) -> bool {
    let client = reqwest::Client::new();
    client
        .get(test_url(base_url))
        .send()
        .await
        .map(|resp| resp.status().is_success())
        .unwrap_or(false)
}

/// Polls the API test endpoint until it answers or the attempts run out.
pub async fn wait_for_api(base_url: &str, attempts: u32, interval: Duration) -> bool {
    let client = reqwest::Client::new();
    let url = test_url(base_url);

    for attempt in 1..=attempts {
        if let Ok(resp) = client.get(&url).send().await {
            if resp.status().is_success() {
                info!("API server is ready");
                return true;
            }
        }
        info!("Waiting for API server... ({}/{})", attempt, attempts);
        tokio::time::sleep(interval).await;
    }

    warn!("API server did not become ready in time");
    false
}

fn test_url(base_url: &str) -> String {
    format!("{}/api/test", base_url.trim_end_matches('/'))
}
