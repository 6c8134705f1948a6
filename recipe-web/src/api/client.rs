use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub input: String,
    pub cuisine: String,
    pub difficulty: String,
    pub prep_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    /// Rendered recipe markup.
    #[serde(default)]
    pub recipe: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// The recipe backend.
///
/// Futures are not `Send`: the front-end runs on the browser's single thread.
#[async_trait(?Send)]
pub trait RecipeApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    async fn generate_recipe(&self, request: &GenerateRequest)
    -> Result<GenerateResponse, ApiError>;

    async fn test_connection(&self) -> Result<TestResponse, ApiError>;
}

/// [`RecipeApi`] over HTTP using the browser's fetch.
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    config: AppConfig,
}

impl HttpRecipeApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let response = Request::post(&url).json(body)?.send().await?;
        decode(response).await
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl RecipeApi for HttpRecipeApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json("/api/login", &LoginRequest { username, password })
            .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let url = self.config.endpoint("/api/logout");
        let response = Request::post(&url).send().await?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn generate_recipe(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, ApiError> {
        self.post_json("/api/generate-recipe", request).await
    }

    async fn test_connection(&self) -> Result<TestResponse, ApiError> {
        let url = self.config.endpoint("/api/test");
        let response = Request::get(&url).send().await?;
        decode(response).await
    }
}
