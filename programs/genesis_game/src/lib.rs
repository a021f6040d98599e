use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod state;
pub mod utils;
pub mod instructions;

use instructions::*;
use state::{ParticipantRecord, PoolKind};

declare_id!("GNSSpWvAXQ3Fz8HkrSq2HbLHvzNcbDu6qDrXcnV8m2Ty");

#[program]
pub mod genesis_game {
    use super::*;

    // Game minter (participant registry)

    pub fn init_game_minter(
        ctx: Context<InitGameMinter>,
        name: String,
        symbol: String,
        base_metadata_uri: String,
    ) -> Result<()> {
        instructions::init_game_minter::handler(ctx, name, symbol, base_metadata_uri)
    }

    pub fn add_minter(ctx: Context<ManageGameMinter>, account: Pubkey) -> Result<()> {
        instructions::manage_game_minter::add_minter(ctx, account)
    }

    pub fn remove_minter(ctx: Context<ManageGameMinter>, account: Pubkey) -> Result<()> {
        instructions::manage_game_minter::remove_minter(ctx, account)
    }

    pub fn add_whitelist_admin(ctx: Context<ManageGameMinter>, account: Pubkey) -> Result<()> {
        instructions::manage_game_minter::add_whitelist_admin(ctx, account)
    }

    pub fn remove_whitelist_admin(ctx: Context<ManageGameMinter>, account: Pubkey) -> Result<()> {
        instructions::manage_game_minter::remove_whitelist_admin(ctx, account)
    }

    pub fn set_base_metadata_uri(ctx: Context<ManageGameMinter>, uri: String) -> Result<()> {
        instructions::manage_game_minter::set_base_metadata_uri(ctx, uri)
    }

    pub fn transfer_minter_ownership(ctx: Context<ManageGameMinter>, new_owner: Pubkey) -> Result<()> {
        instructions::manage_game_minter::transfer_ownership(ctx, new_owner)
    }

    pub fn add_participant(
        ctx: Context<AddParticipant>,
        id: u64,
        x: u64,
        y: u64,
        owner: Pubkey,
    ) -> Result<u64> {
        instructions::add_participant::handler(ctx, id, x, y, owner)
    }

    pub fn get_participants_count(ctx: Context<ReadGameMinter>) -> Result<u64> {
        instructions::views::get_participants_count(ctx)
    }

    pub fn get_participant_by_id(
        ctx: Context<GetParticipantById>,
        index: u64,
    ) -> Result<ParticipantRecord> {
        instructions::views::get_participant_by_id(ctx, index)
    }

    pub fn get_participants(
        ctx: Context<ReadGameMinter>,
        start: u64,
        len: u64,
    ) -> Result<Vec<ParticipantRecord>> {
        instructions::views::get_participants(ctx, start, len)
    }

    pub fn uri(ctx: Context<ReadGameMinter>, token_id: u64) -> Result<String> {
        instructions::views::uri(ctx, token_id)
    }

    pub fn create_token(
        ctx: Context<CreateToken>,
        initial_owner: Pubkey,
        max_supply: u64,
        initial_supply: u64,
        id: u64,
    ) -> Result<()> {
        instructions::create_token::handler(ctx, initial_owner, max_supply, initial_supply, id)
    }

    pub fn creators(ctx: Context<ReadGameToken>, id: u64) -> Result<Pubkey> {
        instructions::views::creators(ctx, id)
    }

    pub fn total_supply(ctx: Context<ReadGameToken>, id: u64) -> Result<u64> {
        instructions::views::total_supply(ctx, id)
    }

    pub fn max_supply(ctx: Context<ReadGameToken>, id: u64) -> Result<u64> {
        instructions::views::max_supply(ctx, id)
    }

    pub fn balance_of(ctx: Context<BalanceOf>, id: u64) -> Result<u64> {
        instructions::views::balance_of(ctx, id)
    }

    // Genesis pools

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        kind: PoolKind,
        initial_fee: u128,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, kind, initial_fee)
    }

    pub fn start(
        ctx: Context<Start>,
        start_time: i64,
        reward_needed: u128,
        width: u64,
        url: String,
    ) -> Result<()> {
        instructions::start::handler(ctx, start_time, reward_needed, width, url)
    }

    pub fn stake(ctx: Context<Stake>, amount: u128) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u128) -> Result<()> {
        instructions::withdraw::withdraw(ctx, amount)
    }

    pub fn exit(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::exit(ctx)
    }

    pub fn earned(ctx: Context<Earned>) -> Result<u128> {
        instructions::views::earned(ctx)
    }

    pub fn redeem(ctx: Context<Redeem>, x: u64, y: u64) -> Result<u64> {
        instructions::redeem::handler(ctx, x, y)
    }

    pub fn set_fee(ctx: Context<UpdatePool>, fee: u128) -> Result<()> {
        instructions::update_pool::set_fee(ctx, fee)
    }

    pub fn set_nft_fund(ctx: Context<SetNftFund>) -> Result<()> {
        instructions::update_pool::set_nft_fund(ctx)
    }

    pub fn transfer_pool_ownership(ctx: Context<UpdatePool>, new_owner: Pubkey) -> Result<()> {
        instructions::update_pool::transfer_ownership(ctx, new_owner)
    }
}
