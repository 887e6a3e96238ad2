//! Display-and-overwrite state for a single account-wide number.
//!
//! Background fetches always update the displayed value but never touch an
//! open edit. If a fetch brings a value different from the one the edit
//! started from, the card raises a conflict so the user sees their input is
//! based on stale data.

use shared::parse_balance;

use crate::services::{ApiError, LedgerApi, LedgerRequest};

use super::entry_editor::Ticket;

/// Which account-wide number a card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    Retirement,
    Savings,
    SavingsGoal,
}

impl Balance {
    /// Log target
    pub fn component(self) -> &'static str {
        match self {
            Balance::Retirement => "retirement-savings",
            Balance::Savings => "savings",
            Balance::SavingsGoal => "savings-goal",
        }
    }

    pub fn save_request(self, value: f64) -> LedgerRequest {
        match self {
            Balance::Retirement => LedgerRequest::UpdateRetirementSavings { value },
            Balance::Savings => LedgerRequest::UpdateSavings { value },
            Balance::SavingsGoal => LedgerRequest::UpdateSavingsGoal { value },
        }
    }
}

/// Fetch every balance in `balances` with one store call per endpoint.
/// Actions come back in the same order.
pub async fn load_balances<A: LedgerApi + ?Sized>(api: &A, balances: &[Balance]) -> Vec<ScalarAction> {
    let wants_retirement = balances.contains(&Balance::Retirement);
    let wants_savings = balances.iter().any(|b| *b != Balance::Retirement);

    let retirement = if wants_retirement {
        Some(api.get_retirement_savings().await)
    } else {
        None
    };
    let savings = if wants_savings { Some(api.get_savings().await) } else { None };

    balances
        .iter()
        .map(|balance| {
            let fetched = match balance {
                Balance::Retirement => retirement.clone().map(|r| r.map(|r| r.retirement_savings)),
                Balance::Savings => savings.clone().map(|r| r.map(|r| r.savings)),
                Balance::SavingsGoal => savings.clone().map(|r| r.map(|r| r.savings_goal)),
            };
            match fetched {
                Some(Ok(value)) => ScalarAction::Fetched(value),
                Some(Err(err)) => ScalarAction::FetchFailed(err),
                None => ScalarAction::FetchFailed(ApiError::Decode("balance not requested".to_string())),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScalarMode {
    Idle,
    Editing { input: String, base: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave {
    pub ticket: Ticket,
    pub value: f64,
    pub request: LedgerRequest,
}

pub enum ScalarAction {
    Fetched(f64),
    FetchFailed(ApiError),
    BeginEdit,
    SetInput(String),
    Cancel,
    SaveSettled { ticket: Ticket, value: f64, result: Result<(), ApiError> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarCard {
    balance: Balance,
    value: f64,
    loaded: bool,
    mode: ScalarMode,
    ticket: Ticket,
    conflict: Option<f64>,
    failure: Option<String>,
}

impl ScalarCard {
    pub fn new(balance: Balance) -> Self {
        Self {
            balance,
            value: 0.0,
            loaded: false,
            mode: ScalarMode::Idle,
            ticket: 0,
            conflict: None,
            failure: None,
        }
    }

    pub fn component(&self) -> &'static str {
        self.balance.component()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// False until the first fetch lands
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ScalarMode::Editing { .. })
    }

    pub fn input(&self) -> &str {
        match &self.mode {
            ScalarMode::Editing { input, .. } => input,
            ScalarMode::Idle => "",
        }
    }

    /// Newer store value that arrived while the user was editing
    pub fn conflict(&self) -> Option<f64> {
        self.conflict
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    fn enter(&mut self, mode: ScalarMode) {
        self.mode = mode;
        self.ticket += 1;
        self.conflict = None;
        self.failure = None;
    }

    pub fn fetched(&mut self, value: f64) {
        self.value = value;
        self.loaded = true;
        match &self.mode {
            // An open edit keeps its own save failure until the user acts
            ScalarMode::Editing { base, .. } => {
                if *base != value {
                    log::warn!(target: self.component(), "store value changed to {} while editing", value);
                    self.conflict = Some(value);
                }
            }
            ScalarMode::Idle => self.failure = None,
        }
    }

    pub fn fetch_failed(&mut self, err: &ApiError) {
        log::error!(target: self.component(), "fetch failed: {}", err);
        self.failure = Some(err.user_message());
    }

    pub fn begin_edit(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        self.enter(ScalarMode::Editing {
            input: self.value.to_string(),
            base: self.value,
        });
        true
    }

    pub fn set_input(&mut self, value: String) {
        if let ScalarMode::Editing { input, .. } = &mut self.mode {
            *input = value;
            self.failure = None;
        }
    }

    pub fn cancel(&mut self) {
        if self.is_editing() {
            self.enter(ScalarMode::Idle);
        }
    }

    /// `None` leaves the editor open: not editing, or input is not a
    /// non-negative number
    pub fn prepare_save(&self) -> Option<PendingSave> {
        let ScalarMode::Editing { input, .. } = &self.mode else {
            return None;
        };
        match parse_balance(input) {
            Ok(value) => Some(PendingSave {
                ticket: self.ticket,
                value,
                request: self.balance.save_request(value),
            }),
            Err(issue) => {
                log::debug!(target: self.component(), "save ignored: {}", issue);
                None
            }
        }
    }

    pub fn settle_save(&mut self, ticket: Ticket, value: f64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.value = value;
                if ticket == self.ticket {
                    self.enter(ScalarMode::Idle);
                }
            }
            Err(err) => {
                log::error!(target: self.component(), "save failed: {}", err);
                if ticket == self.ticket {
                    self.failure = Some(err.user_message());
                }
            }
        }
    }

    pub fn apply(&mut self, action: ScalarAction) {
        match action {
            ScalarAction::Fetched(value) => self.fetched(value),
            ScalarAction::FetchFailed(err) => self.fetch_failed(&err),
            ScalarAction::BeginEdit => {
                self.begin_edit();
            }
            ScalarAction::SetInput(value) => self.set_input(value),
            ScalarAction::Cancel => self.cancel(),
            ScalarAction::SaveSettled { ticket, value, result } => self.settle_save(ticket, value, result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ledger::testing::{Call, RecordingApi};
    use crate::state::request::run_request;

    fn card() -> ScalarCard {
        ScalarCard::new(Balance::Retirement)
    }

    /// Same sequence the card hook runs, applied to a local card
    async fn save(card: &mut ScalarCard, api: &RecordingApi) -> Option<Result<(), ApiError>> {
        let pending = card.prepare_save()?;
        let (ticket, value) = (pending.ticket, pending.value);
        let component = card.component();
        let result = run_request(
            api,
            component,
            pending.request,
            |result| card.apply(ScalarAction::SaveSettled { ticket, value, result }),
            || {},
        )
        .await;
        Some(result)
    }

    async fn load(cards: &mut [&mut ScalarCard], api: &RecordingApi) {
        let balances: Vec<Balance> = cards.iter().map(|c| c.balance).collect();
        let actions = load_balances(api, &balances).await;
        for (card, action) in cards.iter_mut().zip(actions) {
            card.apply(action);
        }
    }

    #[tokio::test]
    async fn test_load_replaces_value() {
        let api = RecordingApi::new();
        api.retirement_savings.set(41_000.0);
        let mut card = card();
        assert!(!card.is_loaded());

        load(&mut [&mut card], &api).await;

        assert!(card.is_loaded());
        assert_eq!(card.value(), 41_000.0);
        assert_eq!(api.calls(), vec![Call::GetRetirementSavings]);
    }

    #[tokio::test]
    async fn test_savings_and_goal_share_one_fetch() {
        let api = RecordingApi::new();
        api.savings.set(1200.0);
        api.savings_goal.set(10_000.0);
        let mut savings = ScalarCard::new(Balance::Savings);
        let mut goal = ScalarCard::new(Balance::SavingsGoal);

        load(&mut [&mut savings, &mut goal], &api).await;

        assert_eq!(api.calls(), vec![Call::GetSavings]);
        assert_eq!(savings.value(), 1200.0);
        assert_eq!(goal.value(), 10_000.0);
    }

    #[tokio::test]
    async fn test_goal_save_targets_goal_endpoint() {
        let api = RecordingApi::new();
        let mut goal = ScalarCard::new(Balance::SavingsGoal);
        goal.fetched(5000.0);

        goal.begin_edit();
        goal.set_input("7500".to_string());

        assert_eq!(save(&mut goal, &api).await, Some(Ok(())));
        assert_eq!(api.calls(), vec![Call::UpdateSavingsGoal(7500.0)]);
        assert_eq!(goal.value(), 7500.0);
        assert!(!goal.is_editing());
    }

    #[tokio::test]
    async fn test_save_updates_display_and_closes() {
        let api = RecordingApi::new();
        let mut card = card();
        card.fetched(1000.0);

        assert!(card.begin_edit());
        assert_eq!(card.input(), "1000");
        card.set_input("1250.75".to_string());

        assert_eq!(save(&mut card, &api).await, Some(Ok(())));
        assert_eq!(api.calls(), vec![Call::UpdateRetirementSavings(1250.75)]);
        assert_eq!(card.value(), 1250.75);
        assert!(!card.is_editing());
    }

    #[tokio::test]
    async fn test_non_numeric_save_stays_open() {
        let api = RecordingApi::new();
        let mut card = card();

        card.begin_edit();
        card.set_input("lots".to_string());

        assert_eq!(save(&mut card, &api).await, None);
        assert!(api.calls().is_empty());
        assert!(card.is_editing());
        assert_eq!(card.input(), "lots");
    }

    #[tokio::test]
    async fn test_negative_save_is_not_sent() {
        let api = RecordingApi::new();
        let mut card = card();
        card.fetched(100.0);

        card.begin_edit();
        card.set_input("-5".to_string());

        assert_eq!(save(&mut card, &api).await, None);
        assert!(api.calls().is_empty());
        assert!(card.is_editing());
        assert_eq!(card.value(), 100.0);
    }

    #[test]
    fn test_cancel_discards_input() {
        let mut card = card();
        card.fetched(10.0);

        card.begin_edit();
        card.set_input("99".to_string());
        card.cancel();

        assert!(!card.is_editing());
        assert_eq!(card.input(), "");
        assert_eq!(card.value(), 10.0);
    }

    #[test]
    fn test_fetch_while_editing_flags_conflict_without_touching_input() {
        let mut card = card();
        card.fetched(500.0);

        card.begin_edit();
        card.set_input("650".to_string());

        // Same value: nothing to warn about
        card.fetched(500.0);
        assert_eq!(card.conflict(), None);

        card.fetched(700.0);
        assert_eq!(card.conflict(), Some(700.0));
        assert_eq!(card.input(), "650");
        assert_eq!(card.value(), 700.0);

        card.cancel();
        assert_eq!(card.conflict(), None);
    }

    #[test]
    fn test_successful_fetch_clears_earlier_fetch_failure() {
        let mut card = card();

        card.apply(ScalarAction::FetchFailed(ApiError::Network("offline".to_string())));
        assert!(card.failure().is_some());

        card.apply(ScalarAction::Fetched(42.0));
        assert_eq!(card.value(), 42.0);
        assert_eq!(card.failure(), None);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_editor_open() {
        let api = RecordingApi::failing(ApiError::Status {
            status: 422,
            message: "retirement_savings: range".to_string(),
        });
        let mut card = card();
        card.fetched(100.0);
        card.begin_edit();
        card.set_input("50".to_string());

        assert!(matches!(save(&mut card, &api).await, Some(Err(_))));
        assert!(card.is_editing());
        assert_eq!(card.value(), 100.0);
        assert_eq!(card.failure(), Some("retirement_savings: range"));

        // A background refresh does not hide the save failure
        card.fetched(100.0);
        assert_eq!(card.failure(), Some("retirement_savings: range"));
    }

    #[test]
    fn test_apply_save_settled_from_stale_ticket() {
        let mut card = card();
        card.apply(ScalarAction::BeginEdit);
        card.apply(ScalarAction::SetInput("20".to_string()));
        let pending = card.prepare_save().unwrap();

        card.apply(ScalarAction::Cancel);
        card.apply(ScalarAction::BeginEdit);
        card.apply(ScalarAction::SaveSettled { ticket: pending.ticket, value: 20.0, result: Ok(()) });

        // Value is stored but the newer edit stays open
        assert_eq!(card.value(), 20.0);
        assert!(card.is_editing());
    }
}
