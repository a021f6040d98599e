use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::GenesisError;
use crate::state::{require_capability, Capability, GameMinter, GenesisPool, PoolKind};
use crate::utils::{has_transfer_fee, WAD_DECIMALS};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Only its owner may open pools feeding it
    pub game_minter: Account<'info, GameMinter>,

    /// Staked token - supports both Token and Token-2022
    pub stake_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = owner,
        space = 8 + GenesisPool::INIT_SPACE,
        seeds = [GenesisPool::SEED, game_minter.key().as_ref(), stake_mint.key().as_ref()],
        bump
    )]
    pub genesis_pool: Account<'info, GenesisPool>,

    /// Holds staked principal, controlled by the pool PDA
    #[account(
        init,
        payer = owner,
        seeds = [GenesisPool::VAULT_SEED, genesis_pool.key().as_ref()],
        bump,
        token::mint = stake_mint,
        token::authority = genesis_pool,
        token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Receives stake fees
    #[account(
        constraint = nft_fund.mint == stake_mint.key() @ GenesisError::InvalidFundAccount
    )]
    pub nft_fund: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializePool>, kind: PoolKind, initial_fee: u128) -> Result<()> {
    require_capability(
        &*ctx.accounts.game_minter,
        Capability::Owner,
        &ctx.accounts.owner.key(),
    )?;
    require!(
        ctx.accounts.stake_mint.decimals <= WAD_DECIMALS,
        GenesisError::UnsupportedMintDecimals
    );
    {
        let mint_info = ctx.accounts.stake_mint.to_account_info();
        let mint_data = mint_info.try_borrow_data()?;
        require!(!has_transfer_fee(&mint_data)?, GenesisError::TransferFeeMint);
    }

    let pool = &mut ctx.accounts.genesis_pool;
    pool.init(
        ctx.accounts.owner.key(),
        ctx.accounts.game_minter.key(),
        ctx.accounts.stake_mint.key(),
        ctx.accounts.vault.key(),
        ctx.accounts.nft_fund.key(),
        kind,
        initial_fee,
        ctx.bumps.genesis_pool,
        ctx.bumps.vault,
    )?;

    msg!(
        "{:?} pool {} initialized for mint {}, max stake {}, fee {}",
        kind,
        pool.key(),
        pool.stake_mint,
        pool.max_stake,
        initial_fee
    );
    Ok(())
}
