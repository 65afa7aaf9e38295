//! HTTP transport capability and its `reqwest` adapter.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use reqwest::header::CONTENT_TYPE;

use crate::transport::XML_CONTENT_TYPE;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error type produced by [`HttpTransport`] implementations.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs the HTTP calls issued by [`SmsAssistantClient`](crate::SmsAssistantClient).
///
/// Implement this to plug in a different HTTP stack or a test double. Header pairs must be
/// sent as given; they carry the token for token-based authentication.
pub trait HttpTransport: Send + Sync {
    /// `GET url?query` with extra headers.
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
        headers: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    /// `POST url` with an `application/x-www-form-urlencoded` body.
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        form: Vec<(String, String)>,
        headers: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    /// `POST url` with a raw XML body and `Content-Type: text/xml; charset=UTF8`.
    fn post_xml<'a>(
        &'a self,
        url: &'a str,
        xml: String,
        headers: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

/// [`HttpTransport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
        headers: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let request = with_headers(self.client.get(url).query(&query), headers);
            read_response(request.send().await?).await
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        form: Vec<(String, String)>,
        headers: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let request = with_headers(self.client.post(url).form(&form), headers);
            read_response(request.send().await?).await
        })
    }

    fn post_xml<'a>(
        &'a self,
        url: &'a str,
        xml: String,
        headers: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let request = self
                .client
                .post(url)
                .header(CONTENT_TYPE, XML_CONTENT_TYPE)
                .body(xml);
            let request = with_headers(request, headers);
            read_response(request.send().await?).await
        })
    }
}

fn with_headers(
    mut request: reqwest::RequestBuilder,
    headers: Vec<(String, String)>,
) -> reqwest::RequestBuilder {
    for (name, value) in headers {
        request = request.header(name, value);
    }
    request
}

async fn read_response(response: reqwest::Response) -> Result<HttpResponse, BoxError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(HttpResponse { status, body })
}
