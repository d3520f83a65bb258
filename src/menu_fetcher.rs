use reqwest::{Client, StatusCode};
use scraper::Html;

use crate::errors::FetchError;

/// Requests the menu page and returns the parsed HTML tree.
///
/// Only a 200 response is accepted; the Studentenwerk page serves error
/// codes (e.g. 503 during maintenance) with a body that is useless to parse.
pub async fn fetch_menu(client: &Client, url: &str) -> Result<Html, FetchError> {
    let resp = client.get(url).send().await.map_err(FetchError::Network)?;

    check_status(resp.status())?;

    let html_text = resp.text().await.map_err(FetchError::Body)?;

    // parse_document is lenient, malformed markup just yields a tree
    // the extractor finds nothing in
    Ok(Html::parse_document(&html_text))
}

fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}
