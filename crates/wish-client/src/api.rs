//! Wish Wall API
//!
//! One method per backend endpoint, all routed through `ApiClient`.

use crate::domain::{
    AuthResponse, HealthStatus, LikeStatus, LoginRequest, NewWish, RegisterRequest, ServiceInfo, Wish, WishPage,
};
use crate::error::ApiResult;
use crate::transport::{ApiClient, RequestOptions};

pub struct WishApi {
    client: ApiClient,
}

impl WishApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.client.request_json("/auth/register", RequestOptions::post(), request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.client.request_json("/auth/login", RequestOptions::post(), request).await
    }

    pub async fn list_wishes(&self, page: u32) -> ApiResult<WishPage> {
        let endpoint = self.client.config().wishes_endpoint(page);
        self.client.request(&endpoint, RequestOptions::get()).await
    }

    pub async fn get_wish(&self, id: u64) -> ApiResult<Wish> {
        self.client.request(&format!("/wishes/{}", id), RequestOptions::get()).await
    }

    pub async fn create_wish(&self, wish: &NewWish) -> ApiResult<Wish> {
        self.client.request_json("/wishes", RequestOptions::post(), wish).await
    }

    /// `None` when the server answers with an empty body
    pub async fn like_wish(&self, id: u64) -> ApiResult<Option<LikeStatus>> {
        self.client.request(&format!("/wishes/{}/like", id), RequestOptions::post()).await
    }

    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.client.request("/health", RequestOptions::get().silent()).await
    }

    pub async fn info(&self) -> ApiResult<ServiceInfo> {
        self.client.request("/info", RequestOptions::get().silent()).await
    }
}
