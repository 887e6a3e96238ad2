use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    EntryId, IncomeEntry, IncomeRequest, ItemRequest, ItemWithCategory, Month, MonthDetail,
    MonthId, RetirementSavingsResponse, SavingsResponse, UpdateRetirementSavings, UpdateSavings,
    UpdateSavingsGoal,
};

use super::error::ApiError;
use super::ledger::LedgerApi;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// API client for communicating with the ledger store over HTTP
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Route builders, kept apart from the transport so they can be tested natively
pub mod routes {
    use shared::{EntryId, MonthId};

    pub fn months() -> String {
        "/api/months".to_string()
    }

    pub fn month(month_id: MonthId) -> String {
        format!("/api/months/{}", month_id)
    }

    pub fn income(month_id: MonthId, id: Option<EntryId>) -> String {
        scoped(month_id, "income", id)
    }

    pub fn items(month_id: MonthId, id: Option<EntryId>) -> String {
        scoped(month_id, "items", id)
    }

    pub fn retirement_savings() -> String {
        "/api/retirement-savings".to_string()
    }

    pub fn savings() -> String {
        "/api/savings".to_string()
    }

    pub fn savings_goal() -> String {
        "/api/savings/goal".to_string()
    }

    fn scoped(month_id: MonthId, resource: &str, id: Option<EntryId>) -> String {
        match id {
            Some(id) => format!("/api/months/{}/{}/{}", month_id, resource, id),
            None => format!("/api/months/{}/{}", month_id, resource),
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Mutation bodies are ignored; any 2xx is success
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Status { status, message })
}

async fn send_json<B: serde::Serialize>(builder: gloo::net::http::RequestBuilder, body: &B) -> Result<(), ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await.map(|_| ())
}

async fn send_empty(builder: gloo::net::http::RequestBuilder) -> Result<(), ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await.map(|_| ())
}

#[async_trait(?Send)]
impl LedgerApi for ApiClient {
    async fn list_months(&self) -> Result<Vec<Month>, ApiError> {
        self.fetch(&routes::months()).await
    }

    async fn get_month(&self, month_id: MonthId) -> Result<MonthDetail, ApiError> {
        self.fetch(&routes::month(month_id)).await
    }

    async fn list_income(&self, month_id: MonthId) -> Result<Vec<IncomeEntry>, ApiError> {
        self.fetch(&routes::income(month_id, None)).await
    }

    async fn create_income(&self, month_id: MonthId, body: &IncomeRequest) -> Result<(), ApiError> {
        send_json(Request::post(&self.url(&routes::income(month_id, None))), body).await
    }

    async fn update_income(&self, month_id: MonthId, id: EntryId, body: &IncomeRequest) -> Result<(), ApiError> {
        send_json(Request::put(&self.url(&routes::income(month_id, Some(id)))), body).await
    }

    async fn delete_income(&self, month_id: MonthId, id: EntryId) -> Result<(), ApiError> {
        send_empty(Request::delete(&self.url(&routes::income(month_id, Some(id))))).await
    }

    async fn list_items(&self, month_id: MonthId) -> Result<Vec<ItemWithCategory>, ApiError> {
        self.fetch(&routes::items(month_id, None)).await
    }

    async fn create_item(&self, month_id: MonthId, body: &ItemRequest) -> Result<(), ApiError> {
        send_json(Request::post(&self.url(&routes::items(month_id, None))), body).await
    }

    async fn update_item(&self, month_id: MonthId, id: EntryId, body: &ItemRequest) -> Result<(), ApiError> {
        send_json(Request::put(&self.url(&routes::items(month_id, Some(id)))), body).await
    }

    async fn delete_item(&self, month_id: MonthId, id: EntryId) -> Result<(), ApiError> {
        send_empty(Request::delete(&self.url(&routes::items(month_id, Some(id))))).await
    }

    async fn get_retirement_savings(&self) -> Result<RetirementSavingsResponse, ApiError> {
        self.fetch(&routes::retirement_savings()).await
    }

    async fn update_retirement_savings(&self, value: f64) -> Result<(), ApiError> {
        let body = UpdateRetirementSavings { retirement_savings: value };
        send_json(Request::put(&self.url(&routes::retirement_savings())), &body).await
    }

    async fn get_savings(&self) -> Result<SavingsResponse, ApiError> {
        self.fetch(&routes::savings()).await
    }

    async fn update_savings(&self, value: f64) -> Result<(), ApiError> {
        let body = UpdateSavings { savings: value };
        send_json(Request::put(&self.url(&routes::savings())), &body).await
    }

    async fn update_savings_goal(&self, value: f64) -> Result<(), ApiError> {
        let body = UpdateSavingsGoal { savings_goal: value };
        send_json(Request::put(&self.url(&routes::savings_goal())), &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(routes::months(), "/api/months");
        assert_eq!(routes::month(3), "/api/months/3");
        assert_eq!(routes::income(3, None), "/api/months/3/income");
        assert_eq!(routes::income(3, Some(11)), "/api/months/3/income/11");
        assert_eq!(routes::items(5, Some(2)), "/api/months/5/items/2");
        assert_eq!(routes::retirement_savings(), "/api/retirement-savings");
        assert_eq!(routes::savings(), "/api/savings");
        assert_eq!(routes::savings_goal(), "/api/savings/goal");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::with_base_url("https://budget.example.com/".to_string());
        assert_eq!(client.url(&routes::month(1)), "https://budget.example.com/api/months/1");
        assert_eq!(ApiClient::default().url("/api/months"), format!("{}/api/months", DEFAULT_BASE_URL));
    }
}
