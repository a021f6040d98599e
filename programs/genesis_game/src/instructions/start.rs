use anchor_lang::prelude::*;

use crate::events::GameStarted;
use crate::state::{require_capability, Capability, GenesisPool};

#[derive(Accounts)]
pub struct Start<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [
            GenesisPool::SEED,
            genesis_pool.game_minter.as_ref(),
            genesis_pool.stake_mint.as_ref()
        ],
        bump = genesis_pool.bump
    )]
    pub genesis_pool: Account<'info, GenesisPool>,
}

pub fn handler(
    ctx: Context<Start>,
    start_time: i64,
    reward_needed: u128,
    width: u64,
    url: String,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let pool = &mut ctx.accounts.genesis_pool;
    require_capability(&**pool, Capability::Owner, &owner)?;

    pool.start(now, start_time, reward_needed, width, url)?;

    emit!(GameStarted {
        pool: pool.key(),
        game_start_time: pool.game_start_time,
        reward_needed: pool.reward_needed,
    });
    msg!(
        "Game starts at {} with {} points per play, grid width {}",
        start_time,
        reward_needed,
        width
    );
    Ok(())
}
