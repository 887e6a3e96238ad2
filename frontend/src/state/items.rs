use shared::{
    parse_amount, parse_category_id, parse_spent_on, require_text, DraftIssue, EntryId,
    ItemRequest, ItemWithCategory, MonthId, SavingsDestination,
};

use super::context::LedgerContext;
use super::entry_editor::{Blocker, EntryEditor, EntryKind};
use crate::services::date_utils::to_input_value;
use crate::services::LedgerRequest;

pub struct ItemKind;

/// Raw input values; `category_id` holds the select's value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemDraft {
    pub description: String,
    pub amount: String,
    pub category_id: String,
    pub spent_on: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Description,
    Amount,
    Category,
    SpentOn,
}

pub type ItemEditor = EntryEditor<ItemKind>;

/// Items shown in the spending table. Transfers (anything routed to savings,
/// retirement or income) belong to the transfers view.
pub fn spending_items(items: &[ItemWithCategory]) -> Vec<&ItemWithCategory> {
    items
        .iter()
        .filter(|item| ItemKind::is_listed(item))
        .collect()
}

impl EntryKind for ItemKind {
    type Entry = ItemWithCategory;
    type Draft = ItemDraft;
    type Field = ItemField;
    type Payload = ItemRequest;

    const COMPONENT: &'static str = "items-section";

    fn entry_id(entry: &ItemWithCategory) -> EntryId {
        entry.id
    }

    fn is_listed(entry: &ItemWithCategory) -> bool {
        entry.savings_destination.is_spending()
    }

    fn check_can_add(ctx: &LedgerContext) -> Result<(), Blocker> {
        if ctx.categories.is_empty() {
            Err(Blocker::NoCategories)
        } else {
            Ok(())
        }
    }

    fn blank_draft(ctx: &LedgerContext) -> ItemDraft {
        ItemDraft {
            description: String::new(),
            amount: String::new(),
            category_id: ctx
                .categories
                .first()
                .map(|c| c.id.to_string())
                .unwrap_or_default(),
            spent_on: to_input_value(ctx.today),
        }
    }

    fn draft_from(item: &ItemWithCategory) -> ItemDraft {
        ItemDraft {
            description: item.description.clone(),
            amount: item.amount.to_string(),
            category_id: item.category_id.to_string(),
            spent_on: to_input_value(item.spent_on),
        }
    }

    fn set_field(draft: &mut ItemDraft, field: ItemField, value: String) {
        match field {
            ItemField::Description => draft.description = value,
            ItemField::Amount => draft.amount = value,
            ItemField::Category => draft.category_id = value,
            ItemField::SpentOn => draft.spent_on = value,
        }
    }

    fn field_value(draft: &ItemDraft, field: ItemField) -> &str {
        match field {
            ItemField::Description => &draft.description,
            ItemField::Amount => &draft.amount,
            ItemField::Category => &draft.category_id,
            ItemField::SpentOn => &draft.spent_on,
        }
    }

    fn validate(draft: &ItemDraft, ctx: &LedgerContext) -> Result<ItemRequest, DraftIssue> {
        if ctx.categories.is_empty() {
            return Err(DraftIssue::NoCategories);
        }
        Ok(ItemRequest {
            description: require_text(&draft.description, "description")?,
            amount: parse_amount(&draft.amount)?,
            category_id: parse_category_id(&draft.category_id, &ctx.categories)?,
            spent_on: parse_spent_on(&draft.spent_on)?,
            // This view only ever edits plain spending
            savings_destination: SavingsDestination::None,
        })
    }

    fn create_request(month_id: MonthId, body: ItemRequest) -> LedgerRequest {
        LedgerRequest::CreateItem { month_id, body }
    }

    fn update_request(month_id: MonthId, id: EntryId, body: ItemRequest) -> LedgerRequest {
        LedgerRequest::UpdateItem { month_id, id, body }
    }

    fn delete_request(month_id: MonthId, id: EntryId) -> LedgerRequest {
        LedgerRequest::DeleteItem { month_id, id }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::NaiveDate;
    use shared::BudgetCategory;

    use super::*;
    use crate::services::ledger::testing::{Call, RecordingApi};
    use crate::state::entry_editor::testing::{submit, Outcome};
    use crate::state::entry_editor::EditorAction;

    const MONTH: MonthId = 2;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
    }

    fn categories() -> Vec<BudgetCategory> {
        vec![
            BudgetCategory { id: 10, label: "Groceries".to_string() },
            BudgetCategory { id: 11, label: "Eating out".to_string() },
        ]
    }

    fn ctx() -> LedgerContext {
        LedgerContext::new(MONTH, false, today()).with_categories(categories())
    }

    fn no_categories() -> LedgerContext {
        LedgerContext::new(MONTH, false, today())
    }

    fn item(id: EntryId, destination: SavingsDestination) -> ItemWithCategory {
        ItemWithCategory {
            id,
            description: format!("item {}", id),
            amount: 12.5,
            category_id: 11,
            category_label: "Eating out".to_string(),
            spent_on: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            savings_destination: destination,
        }
    }

    #[test]
    fn test_spending_items_filters_transfers() {
        let items = vec![
            item(1, SavingsDestination::Retirement),
            item(2, SavingsDestination::None),
        ];

        let shown = spending_items(&items);

        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, 2);
    }

    #[test]
    fn test_blank_draft_defaults() {
        let mut editor = ItemEditor::new();

        assert!(editor.begin_add(&ctx()));

        assert_eq!(editor.field(ItemField::Category), "10");
        assert_eq!(editor.field(ItemField::SpentOn), "2025-03-20");
        assert_eq!(editor.field(ItemField::Description), "");
    }

    #[tokio::test]
    async fn test_no_categories_blocks_add() {
        let api = RecordingApi::new();
        let mut editor = ItemEditor::new();

        assert!(editor.begin_add(&no_categories()));
        assert_eq!(editor.blocker(), Some(Blocker::NoCategories));

        // Field edits are ignored and nothing can be submitted from the notice
        assert!(!editor.set_field(ItemField::Description, "Coffee".to_string()));
        assert!(!editor.set_field(ItemField::Amount, "4".to_string()));
        assert_eq!(submit(&mut editor, &api, &no_categories(), || {}).await, Outcome::Skipped);
        assert!(api.calls().is_empty());

        editor.cancel();
        assert!(editor.is_idle());
    }

    #[test]
    fn test_validate_requires_known_category() {
        let draft = ItemDraft {
            description: "Coffee".to_string(),
            amount: "4".to_string(),
            category_id: "10".to_string(),
            spent_on: "2025-03-02".to_string(),
        };

        assert!(ItemKind::validate(&draft, &ctx()).is_ok());
        assert_eq!(ItemKind::validate(&draft, &no_categories()), Err(DraftIssue::NoCategories));

        let unknown = ItemDraft { category_id: "99".to_string(), ..draft.clone() };
        assert_eq!(
            ItemKind::validate(&unknown, &ctx()),
            Err(DraftIssue::UnknownCategory("99".to_string()))
        );

        let no_date = ItemDraft { spent_on: String::new(), ..draft };
        assert_eq!(ItemKind::validate(&no_date, &ctx()), Err(DraftIssue::MissingField("date")));
    }

    #[tokio::test]
    async fn test_create_item() {
        let api = RecordingApi::new();
        let refreshes = Cell::new(0);
        let mut editor = ItemEditor::new();

        editor.begin_add(&ctx());
        editor.set_field(ItemField::Description, "Farmers market".to_string());
        editor.set_field(ItemField::Amount, "32.40".to_string());
        editor.set_field(ItemField::Category, "10".to_string());

        let outcome = submit(&mut editor, &api, &ctx(), || refreshes.set(refreshes.get() + 1)).await;

        assert_eq!(outcome, Outcome::Saved);
        assert_eq!(
            api.calls(),
            vec![Call::CreateItem(
                MONTH,
                ItemRequest {
                    description: "Farmers market".to_string(),
                    amount: 32.4,
                    category_id: 10,
                    spent_on: today(),
                    savings_destination: SavingsDestination::None,
                }
            )]
        );
        assert_eq!(refreshes.get(), 1);
        assert!(editor.is_idle());
    }

    #[tokio::test]
    async fn test_edit_item_prefills_from_entry() {
        let api = RecordingApi::new();
        let mut editor = ItemEditor::new();
        let existing = item(5, SavingsDestination::None);

        editor.begin_edit(&existing, &ctx());
        assert_eq!(editor.field(ItemField::Amount), "12.5");
        assert_eq!(editor.field(ItemField::Category), "11");
        assert_eq!(editor.field(ItemField::SpentOn), "2025-03-02");

        editor.set_field(ItemField::SpentOn, "2025-03-03".to_string());
        assert_eq!(submit(&mut editor, &api, &ctx(), || {}).await, Outcome::Saved);

        match &api.calls()[..] {
            [Call::UpdateItem(MONTH, 5, body)] => {
                assert_eq!(body.spent_on, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
                assert_eq!(body.description, "item 5");
            }
            other => panic!("unexpected calls: {:?}", other),
        }
    }

    #[test]
    fn test_edit_closes_when_item_becomes_transfer() {
        let mut editor = ItemEditor::new();
        let mut edited = item(5, SavingsDestination::None);

        editor.begin_edit(&edited, &ctx());
        editor.sync(&ctx(), &[edited.clone()]);
        assert_eq!(editor.editing_id(), Some(5));

        // Refresh turned it into a transfer: the row is gone from the table
        edited.savings_destination = SavingsDestination::Retirement;
        editor.apply(EditorAction::Sync(ctx(), vec![edited.clone()]));

        assert!(spending_items(&[edited]).is_empty());
        assert!(editor.is_idle());
    }

    #[test]
    fn test_blocked_notice_clears_once_categories_arrive() {
        let mut editor = ItemEditor::new();

        editor.apply(EditorAction::BeginAdd(no_categories()));
        assert_eq!(editor.blocker(), Some(Blocker::NoCategories));

        editor.apply(EditorAction::Sync(no_categories(), Vec::new()));
        assert_eq!(editor.blocker(), Some(Blocker::NoCategories));

        editor.apply(EditorAction::Sync(ctx(), Vec::new()));
        assert!(editor.is_idle());
    }
}
