use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

use crate::errors::GenesisError;
use crate::events::{FeeUpdated, FundUpdated, OwnershipTransferred};
use crate::state::{require_capability, Capability, GenesisPool};

#[derive(Accounts)]
pub struct UpdatePool<'info> {
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

#[derive(Accounts)]
pub struct SetNftFund<'info> {
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

    /// New fee recipient
    #[account(
        constraint = nft_fund.mint == genesis_pool.stake_mint @ GenesisError::InvalidFundAccount
    )]
    pub nft_fund: InterfaceAccount<'info, TokenAccount>,
}

pub fn set_fee(ctx: Context<UpdatePool>, fee: u128) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let pool = &mut ctx.accounts.genesis_pool;
    require_capability(&**pool, Capability::Owner, &owner)?;

    pool.set_fee(fee)?;

    emit!(FeeUpdated {
        pool: pool.key(),
        fee,
    });
    msg!("Updated fee to {}", fee);
    Ok(())
}

pub fn set_nft_fund(ctx: Context<SetNftFund>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let nft_fund = ctx.accounts.nft_fund.key();
    let pool = &mut ctx.accounts.genesis_pool;
    require_capability(&**pool, Capability::Owner, &owner)?;

    pool.set_nft_fund(nft_fund)?;

    emit!(FundUpdated {
        pool: pool.key(),
        nft_fund,
    });
    msg!("Updated nft_fund to {}", nft_fund);
    Ok(())
}

pub fn transfer_ownership(ctx: Context<UpdatePool>, new_owner: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let pool = &mut ctx.accounts.genesis_pool;
    require_capability(&**pool, Capability::Owner, &owner)?;

    pool.transfer_ownership(new_owner)?;

    emit!(OwnershipTransferred {
        target: pool.key(),
        previous_owner: owner,
        new_owner,
    });
    msg!("Pool ownership transferred to {}", new_owner);
    Ok(())
}
