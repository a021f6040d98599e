use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::errors::GenesisError;
use crate::events::Staked;
use crate::state::{GenesisPool, StakeAccount};
use crate::utils::wad_to_token_amount;

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

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

    /// Created on the first stake into this pool
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + StakeAccount::INIT_SPACE,
        seeds = [StakeAccount::SEED, genesis_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(address = genesis_pool.stake_mint @ GenesisError::Unauthorized)]
    pub stake_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = stake_mint,
        token::authority = user,
        token::token_program = token_program,
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut, address = genesis_pool.vault @ GenesisError::Unauthorized)]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(mut, address = genesis_pool.nft_fund @ GenesisError::InvalidFundAccount)]
    pub nft_fund: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Stake<'info> {
    /// Move `amount` base units from the user to `to`.
    fn pull(&self, to: &InterfaceAccount<'info, TokenAccount>, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let cpi_accounts = TransferChecked {
            from: self.user_token_account.to_account_info(),
            to: to.to_account_info(),
            authority: self.user.to_account_info(),
            mint: self.stake_mint.to_account_info(),
        };
        transfer_checked(
            CpiContext::new(self.token_program.to_account_info(), cpi_accounts),
            amount,
            self.stake_mint.decimals,
        )
    }
}

pub fn handler(ctx: Context<Stake>, amount: u128) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let user = ctx.accounts.user.key();
    let pool_key = ctx.accounts.genesis_pool.key();
    let decimals = ctx.accounts.stake_mint.decimals;

    let split = {
        let stake_account = &mut ctx.accounts.stake_account;
        if !stake_account.is_initialized() {
            stake_account.owner = user;
            stake_account.pool = pool_key;
            stake_account.bump = ctx.bumps.stake_account;
        }
        ctx.accounts.genesis_pool.stake(stake_account, amount, now)?
    };

    let net_amount = wad_to_token_amount(split.net, decimals)?;
    let fee_amount = wad_to_token_amount(split.fee, decimals)?;
    let total_amount = net_amount
        .checked_add(fee_amount)
        .ok_or(GenesisError::ArithmeticOverflow)?;
    require!(
        ctx.accounts.user_token_account.amount >= total_amount,
        GenesisError::LedgerTransferFailed
    );

    ctx.accounts.pull(&ctx.accounts.vault, net_amount)?;
    ctx.accounts.pull(&ctx.accounts.nft_fund, fee_amount)?;

    emit!(Staked {
        pool: pool_key,
        user,
        amount: split.net,
    });
    msg!(
        "{} staked {} (fee {}), balance {}",
        user,
        split.net,
        split.fee,
        ctx.accounts.stake_account.balance
    );
    Ok(())
}
