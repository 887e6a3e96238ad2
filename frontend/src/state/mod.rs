//! Framework-independent state behind the month view. Nothing in here knows
//! about Yew; hooks wrap these types in reducers.

pub mod accordion;
pub mod context;
pub mod entry_editor;
pub mod income;
pub mod items;
pub mod request;
pub mod scalar_card;

pub use accordion::Accordion;
pub use context::LedgerContext;
pub use entry_editor::{Blocker, EditorAction, EntryEditor, EntryKind};
pub use income::{IncomeEditor, IncomeField, IncomeKind};
pub use items::{spending_items, ItemEditor, ItemField, ItemKind};
pub use request::run_request;
pub use scalar_card::{load_balances, Balance, ScalarAction, ScalarCard};
