//! Fetch Backend
//!
//! `HttpBackend` over the browser fetch API (gloo-net).

use async_trait::async_trait;
use gloo_net::http::Request;
use wish_client::{ApiError, HttpBackend, HttpRequest, HttpResponse, Method};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchBackend;

#[async_trait(?Send)]
impl HttpBackend for FetchBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match request.body {
            Some(body) => builder.body(body).map_err(transport_error)?.send().await,
            None => builder.send().await,
        }
        .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        Ok(HttpResponse { status, body })
    }
}

fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
