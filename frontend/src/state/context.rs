use chrono::NaiveDate;
use shared::{BudgetCategory, MonthDetail, MonthId};

/// What the owning month view hands down to its editors. Editors never
/// mutate it; they ask the parent to refetch instead.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerContext {
    pub month_id: MonthId,
    pub is_read_only: bool,
    pub categories: Vec<BudgetCategory>,
    /// Default date for new items
    pub today: NaiveDate,
}

impl LedgerContext {
    pub fn new(month_id: MonthId, is_read_only: bool, today: NaiveDate) -> Self {
        Self {
            month_id,
            is_read_only,
            categories: Vec::new(),
            today,
        }
    }

    pub fn with_categories(mut self, categories: Vec<BudgetCategory>) -> Self {
        self.categories = categories;
        self
    }

    pub fn from_detail(detail: &MonthDetail, today: NaiveDate) -> Self {
        Self::new(detail.month.id, detail.month.is_read_only(), today)
            .with_categories(detail.categories.clone())
    }
}
