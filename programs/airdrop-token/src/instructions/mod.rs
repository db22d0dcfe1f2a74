pub mod claim;
pub mod delegate;
pub mod end_airdrop;
pub mod initialize;
pub mod mint_tokens;
pub mod update_owner;

pub use claim::*;
pub use delegate::*;
pub use end_airdrop::*;
pub use initialize::*;
pub use mint_tokens::*;
pub use update_owner::*;
