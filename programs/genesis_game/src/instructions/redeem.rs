use anchor_lang::prelude::*;

use crate::errors::GenesisError;
use crate::events::Created;
use crate::state::{require_capability, Capability, GameMinter, GenesisPool, Participant, StakeAccount};

#[derive(Accounts)]
pub struct Redeem<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [
            GenesisPool::SEED,
            genesis_pool.game_minter.as_ref(),
            genesis_pool.stake_mint.as_ref()
        ],
        bump = genesis_pool.bump,
        has_one = game_minter @ GenesisError::Unauthorized,
    )]
    pub genesis_pool: Account<'info, GenesisPool>,

    #[account(
        mut,
        seeds = [StakeAccount::SEED, genesis_pool.key().as_ref(), user.key().as_ref()],
        bump = stake_account.bump
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(mut)]
    pub game_minter: Account<'info, GameMinter>,

    /// Next slot in the registry sequence
    #[account(
        init,
        payer = user,
        space = 8 + Participant::INIT_SPACE,
        seeds = [
            Participant::SEED,
            game_minter.key().as_ref(),
            &game_minter.participants_count.to_le_bytes()
        ],
        bump
    )]
    pub participant: Account<'info, Participant>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Redeem>, x: u64, y: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let user = ctx.accounts.user.key();
    let pool_key = ctx.accounts.genesis_pool.key();

    // the pool appends to the registry under its own Minter capability
    require_capability(&*ctx.accounts.game_minter, Capability::Minter, &pool_key)?;

    let id = {
        let accounts = &mut *ctx.accounts;
        accounts
            .genesis_pool
            .redeem(&mut accounts.stake_account, x, y, now)?
    };
    let index = ctx.accounts.game_minter.next_participant_index()?;

    ctx.accounts.participant.set_inner(Participant {
        index,
        id,
        x,
        y,
        owner: user,
        bump: ctx.bumps.participant,
    });

    emit!(Created {
        pool: pool_key,
        user,
        id,
        x,
        y,
        index,
    });
    msg!(
        "{} redeemed ({}, {}) as id {} at index {}, {} points left",
        user,
        x,
        y,
        id,
        index,
        ctx.accounts.stake_account.rewards
    );
    Ok(index)
}
