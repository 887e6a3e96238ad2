pub mod use_balance;
pub mod use_entry_editor;
pub mod use_month;

pub use use_balance::{use_retirement_savings, use_savings, BalanceHandle};
pub use use_entry_editor::{use_entry_editor, EntryEditorActions};
pub use use_month::{pick_default_month, use_month, use_month_list};
