use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct StakeAccount {
    pub owner: Pubkey,
    pub pool: Pubkey,
    /// Staked principal, WAD
    pub balance: u128,
    /// Snapshot of the pool accumulator at the last settlement
    pub reward_per_token_paid: u128,
    /// Settled but unspent reward, WAD
    pub rewards: u128,
    pub bump: u8,
}

impl StakeAccount {
    pub const SEED: &'static [u8] = b"stake";

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }
}
