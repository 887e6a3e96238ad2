pub mod content;
pub mod how_to_use_modal;
pub mod info_modal;

pub use content::InfoTopic;
pub use how_to_use_modal::HowToUseModal;
pub use info_modal::InfoModal;
