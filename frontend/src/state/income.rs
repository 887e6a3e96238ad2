use shared::{parse_amount, require_text, DraftIssue, EntryId, IncomeEntry, IncomeRequest, MonthId};

use super::context::LedgerContext;
use super::entry_editor::{EntryEditor, EntryKind};
use crate::services::LedgerRequest;

pub struct IncomeKind;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IncomeDraft {
    pub label: String,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeField {
    Label,
    Amount,
}

pub type IncomeEditor = EntryEditor<IncomeKind>;

impl EntryKind for IncomeKind {
    type Entry = IncomeEntry;
    type Draft = IncomeDraft;
    type Field = IncomeField;
    type Payload = IncomeRequest;

    const COMPONENT: &'static str = "income-section";

    fn entry_id(entry: &IncomeEntry) -> EntryId {
        entry.id
    }

    fn blank_draft(_ctx: &LedgerContext) -> IncomeDraft {
        IncomeDraft::default()
    }

    fn draft_from(entry: &IncomeEntry) -> IncomeDraft {
        IncomeDraft {
            label: entry.label.clone(),
            amount: entry.amount.to_string(),
        }
    }

    fn set_field(draft: &mut IncomeDraft, field: IncomeField, value: String) {
        match field {
            IncomeField::Label => draft.label = value,
            IncomeField::Amount => draft.amount = value,
        }
    }

    fn field_value(draft: &IncomeDraft, field: IncomeField) -> &str {
        match field {
            IncomeField::Label => &draft.label,
            IncomeField::Amount => &draft.amount,
        }
    }

    fn validate(draft: &IncomeDraft, _ctx: &LedgerContext) -> Result<IncomeRequest, DraftIssue> {
        Ok(IncomeRequest {
            label: require_text(&draft.label, "label")?,
            amount: parse_amount(&draft.amount)?,
        })
    }

    fn create_request(month_id: MonthId, body: IncomeRequest) -> LedgerRequest {
        LedgerRequest::CreateIncome { month_id, body }
    }

    fn update_request(month_id: MonthId, id: EntryId, body: IncomeRequest) -> LedgerRequest {
        LedgerRequest::UpdateIncome { month_id, id, body }
    }

    fn delete_request(month_id: MonthId, id: EntryId) -> LedgerRequest {
        LedgerRequest::DeleteIncome { month_id, id }
    }
}
