// src/source.rs
use crate::error::EmbedError;
use gloo_net::http::Request;

/// Where embed markup comes from.
#[allow(async_fn_in_trait)]
pub trait SvgSource {
    /// Fetch the document at `url` as text.
    async fn fetch_markup(&self, url: &str) -> Result<String, EmbedError>;
}

/// Plain HTTP GET through `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl SvgSource for HttpSource {
    async fn fetch_markup(&self, url: &str) -> Result<String, EmbedError> {
        let resp = Request::get(url)
            .header("Accept", "image/svg+xml, text/html;q=0.9, */*;q=0.5")
            .send()
            .await?;
        if !resp.ok() {
            return Err(EmbedError::Status {
                url: url.to_string(),
                status: resp.status(),
            });
        }
        Ok(resp.text().await?)
    }
}
