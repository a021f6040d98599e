pub mod capability;
pub mod game_minter;
pub mod game_token;
pub mod genesis_pool;
pub mod participant;
pub mod stake_account;

pub use capability::*;
pub use game_minter::*;
pub use game_token::*;
pub use genesis_pool::*;
pub use participant::*;
pub use stake_account::*;
