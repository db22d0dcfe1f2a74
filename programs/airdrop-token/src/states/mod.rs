pub mod airdrop_window;
pub mod claim_status;
pub mod config;
pub mod delegation;
pub mod mint_policy;

pub use airdrop_window::*;
pub use claim_status::*;
pub use config::*;
pub use delegation::*;
pub use mint_policy::*;
