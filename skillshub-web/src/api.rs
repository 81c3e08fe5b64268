use gloo_storage::{LocalStorage, Storage};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use skillshub_shared::models::errors::ErrorBody;
use skillshub_shared::models::{
    AdminOverview, ApiError, Category, ChangePasswordRequest, DownloadResponse, LoginRequest,
    LoginResponse, MessageResponse, OAuthAccount, OAuthUrlResponse, Order, Page,
    PaymentUrlResponse, PlatformStats, Preferences, ProfileUpdate, RegisterRequest, Skill, User,
    UserDashboardStats, page::unwrap_data,
};

use crate::config::FrontendConfig;
use crate::session::{TOKEN_KEY, USER_KEY};

thread_local! {
    static SHARED_CLIENT: OnceCell<SkillsHubClient> = OnceCell::new();
}

/// Query parameters for the skill list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillListQuery {
    pub page: u32,
    pub page_size: u32,
    pub category_id: Option<String>,
    pub search: Option<String>,
}

impl SkillListQuery {
    /// Pairs for `RequestBuilder::query`; unset or empty filters are omitted.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(category_id) = self.category_id.as_deref().filter(|id| !id.is_empty()) {
            params.push(("category_id", category_id.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|term| !term.is_empty()) {
            params.push(("search", search.to_string()));
        }
        params
    }
}

/// Lightweight API client for SkillsHub REST interactions.
#[derive(Clone, Debug)]
pub struct SkillsHubClient {
    base_url: String,
    client: Client,
}

impl SkillsHubClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn bearer_token() -> Option<String> {
        LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()
    }

    fn apply_auth(request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = Self::bearer_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    /// An unauthorized response always wins over whatever the caller intended:
    /// the stored credentials are dropped and the app hard-navigates to the
    /// login screen.
    fn handle_unauthorized() {
        let storage = LocalStorage::raw();
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = Self::apply_auth(request)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            Self::handle_unauthorized();
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.api_url(path))).await?;
        decode(response).await
    }

    async fn get_normalized<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.api_url(path))).await?;
        let value: Value = decode(response).await?;
        serde_json::from_value(unwrap_data(value)).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get_page<T: DeserializeOwned>(&self, path: &str) -> Result<Page<T>, ApiError> {
        let response = self.send(self.client.get(self.api_url(path))).await?;
        let value: Value = decode(response).await?;
        Page::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
    }

    // --- Auth ---

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .send(self.client.post(self.api_url("auth/login")).json(payload))
            .await?;
        decode(response).await
    }

    /// Register a new account.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .send(self.client.post(self.api_url("auth/register")).json(payload))
            .await?;
        decode(response).await
    }

    /// Fetch the authorization URL for a third-party provider.
    pub async fn oauth_url(&self, provider: &str) -> Result<OAuthUrlResponse, ApiError> {
        self.get_json(&format!("auth/oauth/{provider}")).await
    }

    /// Retrieve the authenticated identity record.
    pub async fn get_me(&self) -> Result<User, ApiError> {
        self.get_normalized("auth/me").await
    }

    /// Update profile fields; returns the refreshed identity.
    pub async fn update_profile(&self, payload: &ProfileUpdate) -> Result<User, ApiError> {
        let response = self
            .send(self.client.put(self.api_url("auth/profile")).json(payload))
            .await?;
        let value: Value = decode(response).await?;
        serde_json::from_value(unwrap_data(value)).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn change_password(
        &self,
        payload: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .send(self.client.put(self.api_url("auth/password")).json(payload))
            .await?;
        decode(response).await
    }

    pub async fn oauth_accounts(&self) -> Result<Vec<OAuthAccount>, ApiError> {
        self.get_normalized("auth/oauth-accounts").await
    }

    pub async fn unbind_oauth_account(&self, provider: &str) -> Result<MessageResponse, ApiError> {
        let response = self
            .send(
                self.client
                    .delete(self.api_url(&format!("auth/oauth-accounts/{provider}"))),
            )
            .await?;
        decode(response).await
    }

    pub async fn get_preferences(&self) -> Result<Preferences, ApiError> {
        self.get_normalized("auth/preferences").await
    }

    pub async fn update_preferences(
        &self,
        payload: &Preferences,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .send(
                self.client
                    .put(self.api_url("auth/preferences"))
                    .json(payload),
            )
            .await?;
        decode(response).await
    }

    // --- Skills & categories ---

    /// Paginated, searchable, category-filterable skill list.
    pub async fn skills(&self, query: &SkillListQuery) -> Result<Page<Skill>, ApiError> {
        let request = self
            .client
            .get(self.api_url("skills"))
            .query(&query.params());
        let response = self.send(request).await?;
        let value: Value = decode(response).await?;
        Page::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn skill(&self, id: &str) -> Result<Skill, ApiError> {
        self.get_normalized(&format!("skills/{id}")).await
    }

    pub async fn hot_skills(&self, limit: u32) -> Result<Vec<Skill>, ApiError> {
        let page: Page<Skill> = self.get_page(&format!("skills/hot?limit={limit}")).await?;
        Ok(page.items)
    }

    pub async fn trending_skills(&self, limit: u32) -> Result<Vec<Skill>, ApiError> {
        let page: Page<Skill> = self
            .get_page(&format!("skills/trending?limit={limit}"))
            .await?;
        Ok(page.items)
    }

    pub async fn download_skill(&self, id: &str) -> Result<DownloadResponse, ApiError> {
        self.get_normalized(&format!("skills/{id}/download")).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let page: Page<Category> = self.get_page("skills/categories").await?;
        Ok(page.items)
    }

    // --- Payment ---

    pub async fn create_order(&self, skill_id: &str) -> Result<Order, ApiError> {
        let response = self
            .send(
                self.client
                    .post(self.api_url("payment/orders"))
                    .json(&serde_json::json!({ "skill_id": skill_id })),
            )
            .await?;
        let value: Value = decode(response).await?;
        serde_json::from_value(unwrap_data(value)).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn payment_url(&self, order_id: &str) -> Result<PaymentUrlResponse, ApiError> {
        let response = self
            .send(
                self.client
                    .post(self.api_url(&format!("payment/orders/{order_id}/pay"))),
            )
            .await?;
        let value: Value = decode(response).await?;
        serde_json::from_value(unwrap_data(value)).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn orders(&self, page: u32, page_size: u32) -> Result<Page<Order>, ApiError> {
        self.get_page(&format!("payment/orders?page={page}&page_size={page_size}"))
            .await
    }

    /// Drive the mock payment gateway callback.
    pub async fn mock_payment_callback(
        &self,
        order_no: &str,
        trade_status: &str,
    ) -> Result<MessageResponse, ApiError> {
        let payload = serde_json::json!({
            "order_no": order_no,
            "trade_status": trade_status,
            "payment_type": "mock",
            "trade_no": format!("mock_trade_{}", chrono::Utc::now().timestamp_millis()),
            "total_amount": "0.00",
        });
        let response = self
            .send(
                self.client
                    .post(self.api_url("payment/callback/mock"))
                    .json(&payload),
            )
            .await?;
        decode(response).await
    }

    // --- Dashboard & admin ---

    pub async fn dashboard_stats(&self) -> Result<UserDashboardStats, ApiError> {
        self.get_normalized("dashboard/stats").await
    }

    pub async fn platform_stats(&self) -> Result<PlatformStats, ApiError> {
        self.get_normalized("analytics/platform").await
    }

    pub async fn admin_overview(&self) -> Result<AdminOverview, ApiError> {
        self.get_normalized("admin/analytics").await
    }

    pub async fn admin_users(&self, page: u32, page_size: u32) -> Result<Page<User>, ApiError> {
        self.get_page(&format!("admin/users?page={page}&page_size={page_size}"))
            .await
    }

    pub async fn admin_skills(&self, page: u32, page_size: u32) -> Result<Page<Skill>, ApiError> {
        self.get_page(&format!("admin/skills?page={page}&page_size={page_size}"))
            .await
    }

    pub async fn admin_orders(&self, page: u32, page_size: u32) -> Result<Page<Order>, ApiError> {
        self.get_page(&format!("admin/orders?page={page}&page_size={page_size}"))
            .await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
