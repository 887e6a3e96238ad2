pub mod balance_field;
pub mod income_section;
pub mod items_section;
pub mod modals;
pub mod month_view;
pub mod retirement_savings_card;
pub mod savings_card;
pub mod ui;

pub use income_section::IncomeSection;
pub use items_section::ItemsSection;
pub use month_view::MonthView;
pub use retirement_savings_card::RetirementSavingsCard;
pub use savings_card::SavingsCard;
