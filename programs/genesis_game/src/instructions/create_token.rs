use anchor_lang::prelude::*;

use crate::events::TransferSingle;
use crate::state::{require_capability, Capability, GameMinter, GameToken, TokenBalance};

#[derive(Accounts)]
#[instruction(initial_owner: Pubkey, max_supply: u64, initial_supply: u64, id: u64)]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub minter: Signer<'info>,

    pub game_minter: Account<'info, GameMinter>,

    /// Reused ids are rejected in the handler with `IdAlreadyUsed`
    #[account(
        init_if_needed,
        payer = minter,
        space = 8 + GameToken::INIT_SPACE,
        seeds = [GameToken::SEED, game_minter.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    pub game_token: Account<'info, GameToken>,

    #[account(
        init_if_needed,
        payer = minter,
        space = 8 + TokenBalance::INIT_SPACE,
        seeds = [TokenBalance::SEED, game_token.key().as_ref(), initial_owner.as_ref()],
        bump
    )]
    pub owner_balance: Account<'info, TokenBalance>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateToken>,
    initial_owner: Pubkey,
    max_supply: u64,
    initial_supply: u64,
    id: u64,
) -> Result<()> {
    let minter = ctx.accounts.minter.key();
    require_capability(&*ctx.accounts.game_minter, Capability::Minter, &minter)?;

    let game_minter = ctx.accounts.game_minter.key();
    let accounts = &mut *ctx.accounts;
    accounts.game_token.create(
        game_minter,
        id,
        initial_owner,
        max_supply,
        initial_supply,
        ctx.bumps.game_token,
        &mut accounts.owner_balance,
    )?;
    accounts.owner_balance.bump = ctx.bumps.owner_balance;

    emit!(TransferSingle {
        operator: minter,
        from: Pubkey::default(),
        to: initial_owner,
        id,
        amount: initial_supply,
    });
    msg!(
        "Token {} created for {}, supply {}/{}",
        id,
        initial_owner,
        initial_supply,
        max_supply
    );
    Ok(())
}
