use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::errors::GenesisError;
use crate::events::Withdrawn;
use crate::state::{GenesisPool, StakeAccount};
use crate::utils::wad_to_token_amount;

/// Shared by `withdraw` and `exit`.
#[derive(Accounts)]
pub struct Withdraw<'info> {
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

    #[account(
        mut,
        seeds = [StakeAccount::SEED, genesis_pool.key().as_ref(), user.key().as_ref()],
        bump = stake_account.bump
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

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Withdraw<'info> {
    /// Return `amount` base units from the vault, signed by the pool PDA.
    fn release(&self, amount: u64) -> Result<()> {
        require!(self.vault.amount >= amount, GenesisError::LedgerTransferFailed);

        let pool = &self.genesis_pool;
        let seeds: &[&[u8]] = &[
            GenesisPool::SEED,
            pool.game_minter.as_ref(),
            pool.stake_mint.as_ref(),
            &[pool.bump],
        ];
        let signer_seeds: &[&[&[u8]]] = &[seeds];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            to: self.user_token_account.to_account_info(),
            authority: pool.to_account_info(),
            mint: self.stake_mint.to_account_info(),
        };
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                cpi_accounts,
                signer_seeds,
            ),
            amount,
            self.stake_mint.decimals,
        )
    }
}

fn settle_withdrawal(ctx: Context<Withdraw>, amount: Option<u128>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let user = ctx.accounts.user.key();

    let amount = {
        let accounts = &mut *ctx.accounts;
        let stake_account = &mut accounts.stake_account;
        match amount {
            Some(amount) => {
                // checked before any state changes
                wad_to_token_amount(amount, accounts.stake_mint.decimals)?;
                accounts.genesis_pool.withdraw(stake_account, amount, now)?;
                amount
            }
            // explicit path, `Account` has its own `exit`
            None => GenesisPool::exit(&mut accounts.genesis_pool, stake_account, now)?,
        }
    };

    ctx.accounts
        .release(wad_to_token_amount(amount, ctx.accounts.stake_mint.decimals)?)?;

    emit!(Withdrawn {
        pool: ctx.accounts.genesis_pool.key(),
        user,
        amount,
    });
    msg!(
        "{} withdrew {}, balance {}, unspent points {}",
        user,
        amount,
        ctx.accounts.stake_account.balance,
        ctx.accounts.stake_account.rewards
    );
    Ok(())
}

pub fn withdraw(ctx: Context<Withdraw>, amount: u128) -> Result<()> {
    settle_withdrawal(ctx, Some(amount))
}

/// Withdraw the full balance. Accrued points stay on the stake account.
pub fn exit(ctx: Context<Withdraw>) -> Result<()> {
    settle_withdrawal(ctx, None)
}
