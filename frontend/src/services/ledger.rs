//! Boundary to the remote budget store.
//!
//! Components never talk HTTP directly: they build a [`LedgerRequest`] from a
//! validated draft and hand it to whatever [`LedgerApi`] they were given. The
//! browser build uses [`super::api::ApiClient`]; tests use an in-memory double.

use async_trait::async_trait;
use shared::{
    EntryId, IncomeEntry, IncomeRequest, ItemRequest, ItemWithCategory, Month, MonthDetail,
    MonthId, RetirementSavingsResponse, SavingsResponse,
};

use super::error::ApiError;

/// Typed operations on the ledger store. Futures are not `Send`: in the
/// browser everything runs on the single UI thread.
#[async_trait(?Send)]
pub trait LedgerApi {
    async fn list_months(&self) -> Result<Vec<Month>, ApiError>;
    async fn get_month(&self, month_id: MonthId) -> Result<MonthDetail, ApiError>;

    async fn list_income(&self, month_id: MonthId) -> Result<Vec<IncomeEntry>, ApiError>;
    async fn create_income(&self, month_id: MonthId, body: &IncomeRequest) -> Result<(), ApiError>;
    async fn update_income(&self, month_id: MonthId, id: EntryId, body: &IncomeRequest) -> Result<(), ApiError>;
    async fn delete_income(&self, month_id: MonthId, id: EntryId) -> Result<(), ApiError>;

    async fn list_items(&self, month_id: MonthId) -> Result<Vec<ItemWithCategory>, ApiError>;
    async fn create_item(&self, month_id: MonthId, body: &ItemRequest) -> Result<(), ApiError>;
    async fn update_item(&self, month_id: MonthId, id: EntryId, body: &ItemRequest) -> Result<(), ApiError>;
    async fn delete_item(&self, month_id: MonthId, id: EntryId) -> Result<(), ApiError>;

    async fn get_retirement_savings(&self) -> Result<RetirementSavingsResponse, ApiError>;
    async fn update_retirement_savings(&self, value: f64) -> Result<(), ApiError>;

    async fn get_savings(&self) -> Result<SavingsResponse, ApiError>;
    async fn update_savings(&self, value: f64) -> Result<(), ApiError>;
    async fn update_savings_goal(&self, value: f64) -> Result<(), ApiError>;
}

/// Every mutation an editor or card can issue
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerRequest {
    CreateIncome { month_id: MonthId, body: IncomeRequest },
    UpdateIncome { month_id: MonthId, id: EntryId, body: IncomeRequest },
    DeleteIncome { month_id: MonthId, id: EntryId },
    CreateItem { month_id: MonthId, body: ItemRequest },
    UpdateItem { month_id: MonthId, id: EntryId, body: ItemRequest },
    DeleteItem { month_id: MonthId, id: EntryId },
    UpdateRetirementSavings { value: f64 },
    UpdateSavings { value: f64 },
    UpdateSavingsGoal { value: f64 },
}

impl LedgerRequest {
    /// Issue exactly one store call for this mutation
    pub async fn send<A: LedgerApi + ?Sized>(&self, api: &A) -> Result<(), ApiError> {
        match self {
            LedgerRequest::CreateIncome { month_id, body } => api.create_income(*month_id, body).await,
            LedgerRequest::UpdateIncome { month_id, id, body } => api.update_income(*month_id, *id, body).await,
            LedgerRequest::DeleteIncome { month_id, id } => api.delete_income(*month_id, *id).await,
            LedgerRequest::CreateItem { month_id, body } => api.create_item(*month_id, body).await,
            LedgerRequest::UpdateItem { month_id, id, body } => api.update_item(*month_id, *id, body).await,
            LedgerRequest::DeleteItem { month_id, id } => api.delete_item(*month_id, *id).await,
            LedgerRequest::UpdateRetirementSavings { value } => api.update_retirement_savings(*value).await,
            LedgerRequest::UpdateSavings { value } => api.update_savings(*value).await,
            LedgerRequest::UpdateSavingsGoal { value } => api.update_savings_goal(*value).await,
        }
    }

    /// Short name for log lines
    pub fn describe(&self) -> String {
        match self {
            LedgerRequest::CreateIncome { month_id, .. } => format!("create income in month {}", month_id),
            LedgerRequest::UpdateIncome { month_id, id, .. } => format!("update income {} in month {}", id, month_id),
            LedgerRequest::DeleteIncome { month_id, id } => format!("delete income {} in month {}", id, month_id),
            LedgerRequest::CreateItem { month_id, .. } => format!("create item in month {}", month_id),
            LedgerRequest::UpdateItem { month_id, id, .. } => format!("update item {} in month {}", id, month_id),
            LedgerRequest::DeleteItem { month_id, id } => format!("delete item {} in month {}", id, month_id),
            LedgerRequest::UpdateRetirementSavings { value } => format!("set retirement savings to {}", value),
            LedgerRequest::UpdateSavings { value } => format!("set savings to {}", value),
            LedgerRequest::UpdateSavingsGoal { value } => format!("set savings goal to {}", value),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Call, RecordingApi};
    use super::*;

    #[tokio::test]
    async fn test_send_dispatches_single_call() {
        let api = RecordingApi::new();
        let body = IncomeRequest { label: "Salary".to_string(), amount: 5000.0 };

        LedgerRequest::UpdateIncome { month_id: 2, id: 7, body: body.clone() }
            .send(&api)
            .await
            .unwrap();
        LedgerRequest::DeleteItem { month_id: 2, id: 8 }.send(&api).await.unwrap();

        assert_eq!(api.calls(), vec![Call::UpdateIncome(2, 7, body), Call::DeleteItem(2, 8)]);
    }

    #[tokio::test]
    async fn test_send_propagates_failure() {
        let api = RecordingApi::failing(ApiError::Network("offline".to_string()));
        let result = LedgerRequest::UpdateRetirementSavings { value: 10.0 }.send(&api).await;

        assert_eq!(result, Err(ApiError::Network("offline".to_string())));
        assert_eq!(api.calls(), vec![Call::UpdateRetirementSavings(10.0)]);
    }

    #[tokio::test]
    async fn test_savings_requests_hit_their_own_endpoints() {
        let api = RecordingApi::new();

        LedgerRequest::UpdateSavings { value: 800.0 }.send(&api).await.unwrap();
        LedgerRequest::UpdateSavingsGoal { value: 5000.0 }.send(&api).await.unwrap();

        assert_eq!(api.calls(), vec![Call::UpdateSavings(800.0), Call::UpdateSavingsGoal(5000.0)]);
        assert_eq!(api.savings.get(), 800.0);
        assert_eq!(api.savings_goal.get(), 5000.0);
    }

    #[test]
    fn test_describe() {
        let request = LedgerRequest::DeleteIncome { month_id: 4, id: 3 };
        assert_eq!(request.describe(), "delete income 3 in month 4");
        assert_eq!(LedgerRequest::UpdateSavingsGoal { value: 10.0 }.describe(), "set savings goal to 10");
    }
}
