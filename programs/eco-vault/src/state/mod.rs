pub mod initiative;
pub mod loader;
pub mod registry;
pub mod vault_balance;

pub use initiative::*;
pub use loader::*;
pub use registry::*;
pub use vault_balance::*;
