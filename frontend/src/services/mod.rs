pub mod api;
pub mod currency;
pub mod date_utils;
pub mod error;
pub mod ledger;
pub mod logging;

pub use api::ApiClient;
pub use currency::CurrencyFormat;
pub use error::ApiError;
pub use ledger::{LedgerApi, LedgerRequest};
