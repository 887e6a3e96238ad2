//! Generic widgets with no ledger knowledge

pub mod button;
pub mod card;
pub mod info_button;
pub mod input;
pub mod modal;
pub mod select;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use info_button::InfoButton;
pub use input::TextInput;
pub use modal::Modal;
pub use select::{Select, SelectOption};
