use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder};
use shared::{ApiError, ApiResult, BarbershopClient, HttpRequest, HttpResponse, Method, Transport};

use crate::services::config::client_config;

/// Browser transport over `fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn builder(&self, request: &HttpRequest) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if request.query.is_empty() {
            builder
        } else {
            builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let builder = self.builder(&request);
        let sent = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// API client for communicating with the barbershop backend
pub type ApiClient = BarbershopClient<HttpTransport>;

/// Client pointed at the configured base URL
pub fn api_client() -> ApiClient {
    BarbershopClient::new(HttpTransport::new(client_config().base_url))
}
