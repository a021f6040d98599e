#![allow(ambiguous_glob_reexports)]

pub mod init_game_minter;
pub mod manage_game_minter;
pub mod add_participant;
pub mod create_token;
pub mod views;
pub mod initialize_pool;
pub mod start;
pub mod stake;
pub mod withdraw;
pub mod redeem;
pub mod update_pool;

pub use init_game_minter::*;
pub use manage_game_minter::*;
pub use add_participant::*;
pub use create_token::*;
pub use views::*;
pub use initialize_pool::*;
pub use start::*;
pub use stake::*;
pub use withdraw::*;
pub use redeem::*;
pub use update_pool::*;
