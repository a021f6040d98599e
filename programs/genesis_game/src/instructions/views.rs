use anchor_lang::prelude::*;

use crate::errors::GenesisError;
use crate::state::{
    GameMinter, GameToken, GenesisPool, Participant, ParticipantRecord, StakeAccount, TokenBalance,
};

/// Deserialize a program-owned account, or `None` if it was never created.
fn load_optional<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.data_is_empty() {
        return Ok(None);
    }
    require_keys_eq!(
        *info.owner,
        crate::ID,
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );
    let data = info.try_borrow_data()?;
    Ok(Some(T::try_deserialize(&mut &data[..])?))
}

fn load_participant(info: &AccountInfo) -> Result<Participant> {
    load_optional::<Participant>(info)?.ok_or_else(|| error!(GenesisError::ParticipantMismatch))
}

#[derive(Accounts)]
pub struct Earned<'info> {
    pub genesis_pool: Account<'info, GenesisPool>,

    /// CHECK: any account may be queried
    pub user: UncheckedAccount<'info>,

    /// CHECK: may not exist yet; address checked by seeds
    #[account(
        seeds = [StakeAccount::SEED, genesis_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub stake_account: UncheckedAccount<'info>,
}

pub fn earned(ctx: Context<Earned>) -> Result<u128> {
    let now = Clock::get()?.unix_timestamp;
    let stake_account =
        load_optional::<StakeAccount>(&ctx.accounts.stake_account.to_account_info())?
            .unwrap_or_default();
    ctx.accounts.genesis_pool.earned(&stake_account, now)
}

#[derive(Accounts)]
pub struct ReadGameMinter<'info> {
    pub game_minter: Account<'info, GameMinter>,
}

pub fn get_participants_count(ctx: Context<ReadGameMinter>) -> Result<u64> {
    Ok(ctx.accounts.game_minter.participants_count)
}

pub fn uri(ctx: Context<ReadGameMinter>, token_id: u64) -> Result<String> {
    Ok(ctx.accounts.game_minter.uri(token_id).to_string())
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct GetParticipantById<'info> {
    pub game_minter: Account<'info, GameMinter>,

    /// CHECK: address checked by seeds, contents only read once the index is in range
    #[account(
        seeds = [Participant::SEED, game_minter.key().as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub participant: UncheckedAccount<'info>,
}

pub fn get_participant_by_id(ctx: Context<GetParticipantById>, index: u64) -> Result<ParticipantRecord> {
    ctx.accounts.game_minter.check_index(index)?;
    let participant = load_participant(&ctx.accounts.participant.to_account_info())?;
    Ok(participant.record())
}

/// Participant accounts `start..start + len` (clamped to the count) are passed,
/// in order, as remaining accounts. Pages hold at most 18 records so they fit
/// the 1 KiB return data limit.
pub fn get_participants(
    ctx: Context<ReadGameMinter>,
    start: u64,
    len: u64,
) -> Result<Vec<ParticipantRecord>> {
    let game_minter = &ctx.accounts.game_minter;
    let page = game_minter.participants_page(start, len)?;
    require!(
        ctx.remaining_accounts.len() as u64 == page.end - page.start,
        GenesisError::ParticipantMismatch
    );

    let minter_key = game_minter.key();
    page.zip(ctx.remaining_accounts.iter())
        .map(|(index, info)| {
            let (expected, _) = Pubkey::find_program_address(
                &[Participant::SEED, minter_key.as_ref(), &index.to_le_bytes()],
                ctx.program_id,
            );
            require_keys_eq!(info.key(), expected, GenesisError::ParticipantMismatch);
            Ok(load_participant(info)?.record())
        })
        .collect()
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ReadGameToken<'info> {
    pub game_minter: Account<'info, GameMinter>,

    /// CHECK: address checked by seeds, reads as empty until created
    #[account(
        seeds = [GameToken::SEED, game_minter.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    pub game_token: UncheckedAccount<'info>,
}

fn load_game_token(ctx: &Context<ReadGameToken>) -> Result<GameToken> {
    Ok(load_optional::<GameToken>(&ctx.accounts.game_token.to_account_info())?.unwrap_or_default())
}

/// Null address for ids that were never created.
pub fn creators(ctx: Context<ReadGameToken>, _id: u64) -> Result<Pubkey> {
    Ok(load_game_token(&ctx)?.creator)
}

pub fn total_supply(ctx: Context<ReadGameToken>, _id: u64) -> Result<u64> {
    Ok(load_game_token(&ctx)?.total_supply)
}

pub fn max_supply(ctx: Context<ReadGameToken>, _id: u64) -> Result<u64> {
    Ok(load_game_token(&ctx)?.max_supply)
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct BalanceOf<'info> {
    pub game_minter: Account<'info, GameMinter>,

    /// CHECK: any account may be queried
    pub holder: UncheckedAccount<'info>,

    /// CHECK: address checked by seeds
    #[account(
        seeds = [GameToken::SEED, game_minter.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    pub game_token: UncheckedAccount<'info>,

    /// CHECK: address checked by seeds, may not exist
    #[account(
        seeds = [TokenBalance::SEED, game_token.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub token_balance: UncheckedAccount<'info>,
}

pub fn balance_of(ctx: Context<BalanceOf>, _id: u64) -> Result<u64> {
    let balance = load_optional::<TokenBalance>(&ctx.accounts.token_balance.to_account_info())?
        .unwrap_or_default();
    Ok(balance.amount)
}
