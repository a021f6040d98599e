use anchor_lang::prelude::*;

#[event]
pub struct GameStarted {
    pub pool: Pubkey,
    pub game_start_time: i64,
    pub reward_needed: u128,
}

#[event]
pub struct Staked {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u128,
}

#[event]
pub struct Withdrawn {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u128,
}

#[event]
pub struct Created {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub id: u64,
    pub x: u64,
    pub y: u64,
    pub index: u64,
}

#[event]
pub struct ParticipantAdded {
    pub minter: Pubkey,
    pub owner: Pubkey,
    pub id: u64,
    pub index: u64,
}

#[event]
pub struct FeeUpdated {
    pub pool: Pubkey,
    pub fee: u128,
}

#[event]
pub struct FundUpdated {
    pub pool: Pubkey,
    pub nft_fund: Pubkey,
}

#[event]
pub struct OwnershipTransferred {
    pub target: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct MinterAdded {
    pub account: Pubkey,
}

#[event]
pub struct MinterRemoved {
    pub account: Pubkey,
}

#[event]
pub struct WhitelistAdminAdded {
    pub account: Pubkey,
}

#[event]
pub struct WhitelistAdminRemoved {
    pub account: Pubkey,
}

/// Mint of a game token id, from the null address on creation.
#[event]
pub struct TransferSingle {
    pub operator: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub id: u64,
    pub amount: u64,
}
