pub mod deposit;
pub mod fund_initiative;
pub mod get_initiative_details;
pub mod get_vault_balance;
pub mod initialize;
pub mod register_initiative;
pub mod verify_initiative;

pub use deposit::*;
pub use fund_initiative::*;
pub use get_initiative_details::*;
pub use get_vault_balance::*;
pub use initialize::*;
pub use register_initiative::*;
pub use verify_initiative::*;
