// src/net.rs
//
// One blocking GET per chart page. Requests go through the public relay,
// wrapping the upstream webservice URL exactly as the original page did;
// the relay passes the XML body through untouched.

use std::{error::Error, time::Duration};

use url::form_urlencoded;

use crate::config::consts::{
    CHART_CTYPE, CHART_SUBTYPE, CHART_TYPE, HTTP_TIMEOUT_SECS, PAGE_SIZE,
    RELAY_PREFIX, USER_AGENT, WEBSERVICE_URL,
};

/// Relayed URL for one 1-based chart page (25 results per page).
pub fn chart_page_url(page: u32) -> String {
    let start = (page.saturating_sub(1)) as usize * PAGE_SIZE;
    let upstream = format!(
        "{WEBSERVICE_URL}?type={CHART_TYPE}&ctype={CHART_CTYPE}&subtype={CHART_SUBTYPE}&start={start}"
    );
    let encoded: String = form_urlencoded::byte_serialize(upstream.as_bytes()).collect();
    join!(RELAY_PREFIX, &encoded)
}

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    if !resp.status().is_success() {
        return Err(format!("HTTP error: {} {}", resp.status(), url).into());
    }
    Ok(resp.text()?)
}
