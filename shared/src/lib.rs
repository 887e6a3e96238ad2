use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type MonthId = i64;
pub type EntryId = i64;
pub type CategoryId = i64;

/// Whether a month still accepts edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStatus {
    Open,
    Closed,
}

/// Top-level scoping unit for income and spending items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Month {
    pub id: MonthId,
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    pub status: MonthStatus,
}

impl Month {
    /// Closed months are immutable from the client's perspective
    pub fn is_read_only(&self) -> bool {
        self.status == MonthStatus::Closed
    }

    /// "March 2025" style label for headers
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// Everything the month view needs in one response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthDetail {
    pub month: Month,
    #[serde(default)]
    pub income_entries: Vec<IncomeEntry>,
    #[serde(default)]
    pub items: Vec<ItemWithCategory>,
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub id: EntryId,
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: CategoryId,
    pub label: String,
}

/// Routing tag on an item. Only `None` items count as plain spending; the
/// other tags are transfers into the savings, retirement or income pots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsDestination {
    #[default]
    None,
    Savings,
    Retirement,
    Income,
    /// Any tag this client does not know about yet
    #[serde(other)]
    Other,
}

impl SavingsDestination {
    pub fn is_spending(self) -> bool {
        self == SavingsDestination::None
    }
}

/// A spending item joined with its category label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemWithCategory {
    pub id: EntryId,
    pub description: String,
    pub amount: f64,
    pub category_id: CategoryId,
    #[serde(default)]
    pub category_label: String,
    pub spent_on: NaiveDate,
    #[serde(default)]
    pub savings_destination: SavingsDestination,
}

/// Body for income create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRequest {
    pub label: String,
    pub amount: f64,
}

/// Body for item create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub description: String,
    pub amount: f64,
    pub category_id: CategoryId,
    pub spent_on: NaiveDate,
    pub savings_destination: SavingsDestination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementSavingsResponse {
    pub retirement_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRetirementSavings {
    pub retirement_savings: f64,
}

/// General savings balance and the goal it is measured against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsResponse {
    pub savings: f64,
    #[serde(default)]
    pub savings_goal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSavings {
    pub savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSavingsGoal {
    pub savings_goal: f64,
}

/// Why a draft could not be turned into a request
#[derive(Debug, Clone, PartialEq)]
pub enum DraftIssue {
    MissingField(&'static str),
    InvalidAmount(String),
    InvalidDate(String),
    UnknownCategory(String),
    NegativeBalance(String),
    NoCategories,
}

impl fmt::Display for DraftIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftIssue::MissingField(field) => write!(f, "{} is required", field),
            DraftIssue::InvalidAmount(raw) => write!(f, "'{}' is not a valid amount", raw),
            DraftIssue::InvalidDate(raw) => write!(f, "'{}' is not a YYYY-MM-DD date", raw),
            DraftIssue::UnknownCategory(raw) => write!(f, "category '{}' does not exist", raw),
            DraftIssue::NegativeBalance(raw) => write!(f, "balance '{}' cannot be negative", raw),
            DraftIssue::NoCategories => write!(f, "no budget categories exist yet"),
        }
    }
}

impl std::error::Error for DraftIssue {}

/// Required text field: trimmed, must be non-empty
pub fn require_text(raw: &str, field: &'static str) -> Result<String, DraftIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(DraftIssue::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse a money amount typed into a number input. Empty input is a missing
/// field; anything that does not parse to a finite number is rejected.
pub fn parse_amount(raw: &str) -> Result<f64, DraftIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DraftIssue::MissingField("amount"));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DraftIssue::InvalidAmount(trimmed.to_string())),
    }
}

/// Account balances and goals are never below zero
pub fn parse_balance(raw: &str) -> Result<f64, DraftIssue> {
    let value = parse_amount(raw)?;
    if value < 0.0 {
        return Err(DraftIssue::NegativeBalance(raw.trim().to_string()));
    }
    Ok(value)
}

/// Resolve a category select value against the known categories
pub fn parse_category_id(raw: &str, categories: &[BudgetCategory]) -> Result<CategoryId, DraftIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DraftIssue::MissingField("category"));
    }
    let id = trimmed
        .parse::<CategoryId>()
        .map_err(|_| DraftIssue::UnknownCategory(trimmed.to_string()))?;
    if categories.iter().any(|c| c.id == id) {
        Ok(id)
    } else {
        Err(DraftIssue::UnknownCategory(trimmed.to_string()))
    }
}

/// Date inputs hand back `YYYY-MM-DD`
pub fn parse_spent_on(raw: &str) -> Result<NaiveDate, DraftIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DraftIssue::MissingField("date"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| DraftIssue::InvalidDate(trimmed.to_string()))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<BudgetCategory> {
        vec![
            BudgetCategory { id: 4, label: "Groceries".to_string() },
            BudgetCategory { id: 9, label: "Fun".to_string() },
        ]
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("5000"), Ok(5000.0));
        assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
        assert_eq!(parse_amount("-3"), Ok(-3.0));

        assert_eq!(parse_amount(""), Err(DraftIssue::MissingField("amount")));
        assert_eq!(parse_amount("   "), Err(DraftIssue::MissingField("amount")));
        assert!(matches!(parse_amount("abc"), Err(DraftIssue::InvalidAmount(_))));
        assert!(matches!(parse_amount("NaN"), Err(DraftIssue::InvalidAmount(_))));
        assert!(matches!(parse_amount("inf"), Err(DraftIssue::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_balance_rejects_negative() {
        assert_eq!(parse_balance("0"), Ok(0.0));
        assert_eq!(parse_balance(" 1250.75"), Ok(1250.75));
        assert_eq!(parse_balance("-5"), Err(DraftIssue::NegativeBalance("-5".to_string())));
        assert_eq!(parse_balance(""), Err(DraftIssue::MissingField("amount")));
    }

    #[test]
    fn test_savings_response_goal_defaults() {
        let response: SavingsResponse = serde_json::from_str(r#"{"savings": 300.0}"#).unwrap();
        assert_eq!(response.savings, 300.0);
        assert_eq!(response.savings_goal, 0.0);
    }

    #[test]
    fn test_parse_category_id() {
        let cats = categories();
        assert_eq!(parse_category_id("9", &cats), Ok(9));
        assert_eq!(parse_category_id("", &cats), Err(DraftIssue::MissingField("category")));
        assert!(matches!(parse_category_id("7", &cats), Err(DraftIssue::UnknownCategory(_))));
        assert!(matches!(parse_category_id("x", &cats), Err(DraftIssue::UnknownCategory(_))));
        assert!(parse_category_id("4", &[]).is_err());
    }

    #[test]
    fn test_parse_spent_on() {
        assert_eq!(
            parse_spent_on("2025-03-14"),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
        );
        assert!(matches!(parse_spent_on("14/03/2025"), Err(DraftIssue::InvalidDate(_))));
        assert_eq!(parse_spent_on(""), Err(DraftIssue::MissingField("date")));
    }

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("  Salary ", "label"), Ok("Salary".to_string()));
        assert_eq!(require_text(" ", "label"), Err(DraftIssue::MissingField("label")));
    }

    #[test]
    fn test_item_wire_format() {
        let json = r#"{
            "id": 12,
            "description": "Coffee",
            "amount": 4.5,
            "category_id": 4,
            "category_label": "Groceries",
            "spent_on": "2025-03-02",
            "savings_destination": "retirement"
        }"#;
        let item: ItemWithCategory = serde_json::from_str(json).unwrap();
        assert_eq!(item.savings_destination, SavingsDestination::Retirement);
        assert_eq!(item.spent_on, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
        assert!(!item.savings_destination.is_spending());
    }

    #[test]
    fn test_unknown_destination_tag() {
        let dest: SavingsDestination = serde_json::from_str("\"goal\"").unwrap();
        assert_eq!(dest, SavingsDestination::Other);

        let dest: SavingsDestination = serde_json::from_str("\"none\"").unwrap();
        assert!(dest.is_spending());
    }

    #[test]
    fn test_item_request_serializes_date_and_tag() {
        let request = ItemRequest {
            description: "Rent".to_string(),
            amount: 900.0,
            category_id: 4,
            spent_on: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            savings_destination: SavingsDestination::None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["spent_on"], "2025-01-31");
        assert_eq!(value["savings_destination"], "none");
    }

    #[test]
    fn test_month_status() {
        let json = r#"{"id": 3, "year": 2025, "month": 2, "status": "closed"}"#;
        let month: Month = serde_json::from_str(json).unwrap();
        assert!(month.is_read_only());
        assert_eq!(month.title(), "February 2025");

        let open = Month { status: MonthStatus::Open, ..month };
        assert!(!open.is_read_only());
    }

    #[test]
    fn test_month_detail_defaults_missing_lists() {
        let json = r#"{"month": {"id": 1, "year": 2025, "month": 6, "status": "open"}}"#;
        let detail: MonthDetail = serde_json::from_str(json).unwrap();
        assert!(detail.income_entries.is_empty());
        assert!(detail.items.is_empty());
        assert!(detail.categories.is_empty());
    }
}
