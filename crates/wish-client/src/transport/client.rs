//! API Client
//!
//! Every backend call goes through `ApiClient::request`, so auth header
//! injection and 401 handling are identical at every call site.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Feedback, HttpBackend, HttpRequest, RequestOptions};
use crate::config::ClientConfig;
use crate::domain::Notification;
use crate::error::{ApiError, ApiResult};
use crate::session::Session;

const SESSION_EXPIRED: &str = "Session expired, please login again";

pub struct ApiClient {
    config: ClientConfig,
    backend: Box<dyn HttpBackend>,
    session: Rc<Session>,
    feedback: Rc<dyn Feedback>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        backend: impl HttpBackend + 'static,
        session: Rc<Session>,
        feedback: Rc<dyn Feedback>,
    ) -> Self {
        Self {
            config,
            backend: Box::new(backend),
            session,
            feedback,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Rc<Session> {
        &self.session
    }

    /// Resolve endpoint and options into the outgoing request.
    ///
    /// Caller headers override the JSON content type; the bearer header is
    /// applied last from the token as it is right now.
    pub fn build_request(&self, endpoint: &str, options: &RequestOptions) -> HttpRequest {
        let mut request = HttpRequest {
            method: options.method,
            url: self.config.endpoint_url(endpoint),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: options.body.clone(),
        };
        for (name, value) in &options.headers {
            request.set_header(name, value);
        }
        if let Some(auth) = self.session.authorization() {
            request.set_header("Authorization", &auth);
        }
        request
    }

    /// Issue a request and decode the JSON response.
    ///
    /// On `Err` the user has already been told: 401 signs out and shows the
    /// login view, anything else raises an error notification unless the
    /// options are `silent`.
    pub async fn request<T: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> ApiResult<T> {
        let silent = options.silent;
        let request = self.build_request(endpoint, &options);
        log::debug!("{} {}", request.method.as_str(), request.url);

        match self.exchange(request).await {
            Ok(data) => Ok(data),
            Err(err) => Err(self.report(err, silent)),
        }
    }

    /// Serialize `payload` as the body of `options` and issue the request
    pub async fn request_json<B, T>(&self, endpoint: &str, options: RequestOptions, payload: &B) -> ApiResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let silent = options.silent;
        match options.json(payload) {
            Ok(options) => self.request(endpoint, options).await,
            Err(err) => Err(self.report(err, silent)),
        }
    }

    async fn exchange<T: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<T> {
        let response = self.backend.send(request).await?;

        if response.status == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !response.is_success() {
            return Err(ApiError::rejected(response.status, &response.body));
        }

        let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Apply the side effects for a failed call and hand the error back
    fn report(&self, err: ApiError, silent: bool) -> ApiError {
        match &err {
            ApiError::Unauthorized => {
                log::warn!("{}", SESSION_EXPIRED);
                self.session.sign_out();
                self.feedback.notify(Notification::info(SESSION_EXPIRED));
                self.feedback.show_login();
            }
            other => {
                log::error!("API error: {}", other);
                if !silent {
                    self.feedback.notify(Notification::error(other.to_string()));
                }
            }
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationKind;
    use crate::session::MemoryTokenStore;
    use crate::testing::{FakeBackend, RecordingView, Screen};
    use crate::transport::Method;
    use serde_json::Value;

    fn client_with(token: Option<&str>) -> (ApiClient, FakeBackend, RecordingView, MemoryTokenStore) {
        let store = match token {
            Some(t) => MemoryTokenStore::with_token(t),
            None => MemoryTokenStore::new(),
        };
        let backend = FakeBackend::new();
        let view = RecordingView::new();
        let session = Rc::new(Session::restore(store.clone()));
        let client = ApiClient::new(ClientConfig::default(), backend.clone(), session, Rc::new(view.clone()));
        (client, backend, view, store)
    }

    #[tokio::test]
    async fn test_bearer_header_present_only_with_token() {
        let (client, backend, _, _) = client_with(Some("T1"));
        backend.respond(200, r#"{"wishes":[]}"#);
        let _: ApiResult<Value> = client.request("/wishes", RequestOptions::get()).await;
        let sent = backend.last_request().unwrap();
        assert_eq!(sent.header("authorization"), Some("Bearer T1"));
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert_eq!(sent.url, "http://localhost:5000/api/wishes");

        let (client, backend, _, _) = client_with(None);
        backend.respond(200, "{}");
        let _: ApiResult<Value> = client.request("/wishes", RequestOptions::get()).await;
        assert_eq!(backend.last_request().unwrap().header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_caller_headers_merge_over_defaults() {
        let (client, backend, _, _) = client_with(Some("T1"));
        backend.respond(200, "{}");
        let options = RequestOptions::post()
            .header("content-type", "text/plain")
            .header("X-Trace", "abc");
        let _: ApiResult<Value> = client.request("/wishes", options).await;

        let sent = backend.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.header("Content-Type"), Some("text/plain"));
        assert_eq!(sent.header("x-trace"), Some("abc"));
        assert_eq!(sent.headers.len(), 3);
    }

    #[tokio::test]
    async fn test_unauthorized_signs_out_and_shows_login() {
        let (client, backend, view, store) = client_with(Some("stale"));
        backend.respond(401, r#"{"error":"Token has expired"}"#);

        let result: ApiResult<Value> = client.request("/wishes/4/like", RequestOptions::post()).await;

        assert_eq!(result, Err(ApiError::Unauthorized));
        assert!(!client.session().is_authenticated());
        assert_eq!(store.get(), None);
        assert_eq!(view.screen(), Some(Screen::Login));
        let notes = view.notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Info);
        assert_eq!(notes[0].message, "Session expired, please login again");
    }

    #[tokio::test]
    async fn test_unauthorized_ignores_silent_flag() {
        let (client, backend, view, _) = client_with(Some("stale"));
        backend.respond(401, "");
        let result: ApiResult<Value> = client.request("/info", RequestOptions::get().silent()).await;
        assert!(result.unwrap_err().is_unauthorized());
        assert_eq!(view.screen(), Some(Screen::Login));
        assert_eq!(view.notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_rejection_notifies_server_message() {
        let (client, backend, view, _) = client_with(None);
        backend.respond(409, r#"{"error":"Username already exists"}"#);

        let result: ApiResult<Value> = client.request("/auth/register", RequestOptions::post()).await;

        assert_eq!(
            result,
            Err(ApiError::Rejected { status: 409, message: "Username already exists".to_string() })
        );
        let notes = view.notifications();
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert_eq!(notes[0].message, "Username already exists");
        assert_eq!(view.screen(), None);
    }

    #[tokio::test]
    async fn test_transport_and_decode_failures_notify() {
        let (client, backend, view, _) = client_with(None);
        backend.fail("Failed to fetch");
        backend.respond(200, "not json");

        let first: ApiResult<Value> = client.request("/wishes", RequestOptions::get()).await;
        assert_eq!(first, Err(ApiError::Transport("Failed to fetch".to_string())));

        let second: ApiResult<Vec<u32>> = client.request("/wishes", RequestOptions::get()).await;
        assert!(matches!(second, Err(ApiError::Decode(_))));

        let notes = view.notifications();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].message, "Failed to fetch");
        assert!(notes.iter().all(|n| n.kind == NotificationKind::Error));
    }

    #[tokio::test]
    async fn test_silent_failure_is_not_notified() {
        let (client, backend, view, _) = client_with(None);
        backend.respond(500, r#"{"status":"error","message":"Internal server error"}"#);
        let result: ApiResult<Value> = client.request("/health", RequestOptions::get().silent()).await;
        assert!(result.is_err());
        assert!(view.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_empty_success_body_is_distinct_from_failure() {
        let (client, backend, view, _) = client_with(None);
        backend.respond(200, "");
        let result: ApiResult<Option<Value>> = client.request("/wishes/1/like", RequestOptions::post()).await;
        assert_eq!(result, Ok(None));
        assert!(view.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_token_read_at_call_time() {
        let (client, backend, _, _) = client_with(None);
        backend.respond(200, "{}");
        backend.respond(200, "{}");

        let _: ApiResult<Value> = client.request("/wishes", RequestOptions::get()).await;
        client.session().sign_in("T2".to_string());
        let _: ApiResult<Value> = client.request("/wishes", RequestOptions::get()).await;

        let sent = backend.requests();
        assert_eq!(sent[0].header("Authorization"), None);
        assert_eq!(sent[1].header("Authorization"), Some("Bearer T2"));
    }
}
