use anchor_lang::prelude::*;

use crate::errors::GenesisError;
use crate::state::{Capability, CapabilityPolicy, StakeAccount};
use crate::utils::{composite_id, mul_div_floor, ONE_DAY, WAD};

pub const GENESIS_MAX_STAKE: u128 = 65 * WAD;
pub const LP_MAX_STAKE: u128 = 2_020_000_000_000_000_000;
pub const MAX_ALLOWED_FEE: u128 = WAD;
pub const MAX_IMAGE_URL_LEN: usize = 200;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum PoolKind {
    /// Stakes the game token directly
    #[default]
    Genesis,
    /// Stakes the game token's LP token
    Lp,
}

impl PoolKind {
    pub fn max_stake(self) -> u128 {
        match self {
            PoolKind::Genesis => GENESIS_MAX_STAKE,
            PoolKind::Lp => LP_MAX_STAKE,
        }
    }
}

/// Split of a stake amount between the staker's balance and the fee fund.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeSplit {
    pub net: u128,
    pub fee: u128,
}

#[account]
#[derive(InitSpace, Default)]
pub struct GenesisPool {
    pub owner: Pubkey,
    /// Registry this pool mints participants into
    pub game_minter: Pubkey,
    pub stake_mint: Pubkey,
    /// Token account holding staked principal, owned by this PDA
    pub vault: Pubkey,
    /// Token account receiving stake fees
    pub nft_fund: Pubkey,
    pub kind: PoolKind,
    /// Per-account stake ceiling, WAD
    pub max_stake: u128,
    /// Flat fee taken from every stake call, WAD
    pub fee: u128,
    pub total_supply: u128,
    /// Unix seconds; 0 until the game is started
    pub game_start_time: i64,
    /// Cost of one play, and the reward `max_stake` earns per day
    pub reward_needed: u128,
    pub width: u64,
    #[max_len(200)]
    pub image_url: String,
    pub last_update_time: i64,
    /// Accumulated `elapsed * reward_needed`. Reward per staked unit is this
    /// value divided by `ONE_DAY * max_stake`.
    pub reward_per_token_stored: u128,
    pub bump: u8,
    pub vault_bump: u8,
}

impl GenesisPool {
    pub const SEED: &'static [u8] = b"genesis_pool";
    pub const VAULT_SEED: &'static [u8] = b"vault";

    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        owner: Pubkey,
        game_minter: Pubkey,
        stake_mint: Pubkey,
        vault: Pubkey,
        nft_fund: Pubkey,
        kind: PoolKind,
        initial_fee: u128,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(initial_fee <= MAX_ALLOWED_FEE, GenesisError::FeeTooHigh);
        require!(nft_fund != Pubkey::default(), GenesisError::ZeroAddress);

        self.owner = owner;
        self.game_minter = game_minter;
        self.stake_mint = stake_mint;
        self.vault = vault;
        self.nft_fund = nft_fund;
        self.kind = kind;
        self.max_stake = kind.max_stake();
        self.fee = initial_fee;
        self.total_supply = 0;
        self.game_start_time = 0;
        self.reward_needed = 0;
        self.width = 0;
        self.image_url = String::new();
        self.last_update_time = 0;
        self.reward_per_token_stored = 0;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.game_start_time != 0
    }

    pub fn start(
        &mut self,
        now: i64,
        start_time: i64,
        reward_needed: u128,
        width: u64,
        url: String,
    ) -> Result<()> {
        require!(!self.is_started(), GenesisError::AlreadyStarted);
        require!(start_time > now, GenesisError::PastStartTime);
        require!(url.len() <= MAX_IMAGE_URL_LEN, GenesisError::UrlTooLong);

        self.game_start_time = start_time;
        self.reward_needed = reward_needed;
        self.width = width;
        self.image_url = url;
        self.last_update_time = start_time;
        Ok(())
    }

    fn reward_denominator(&self) -> Result<u128> {
        (ONE_DAY as u128)
            .checked_mul(self.max_stake)
            .ok_or_else(|| error!(GenesisError::ArithmeticOverflow))
    }

    /// Accrual never runs before `last_update_time`, which is the start time
    /// until the first settlement after it.
    fn last_time_applicable(&self, now: i64) -> i64 {
        now.max(self.last_update_time)
    }

    /// Accumulator extrapolated to `now`. Flat while nothing is staked.
    pub fn reward_per_token(&self, now: i64) -> Result<u128> {
        if self.total_supply == 0 {
            return Ok(self.reward_per_token_stored);
        }
        let elapsed = (self.last_time_applicable(now) - self.last_update_time) as u128;
        elapsed
            .checked_mul(self.reward_needed)
            .and_then(|accrued| self.reward_per_token_stored.checked_add(accrued))
            .ok_or_else(|| error!(GenesisError::ArithmeticOverflow))
    }

    fn settled_rewards(&self, account: &StakeAccount, reward_per_token: u128) -> Result<u128> {
        let delta = reward_per_token
            .checked_sub(account.reward_per_token_paid)
            .ok_or(GenesisError::ArithmeticOverflow)?;
        let accrued = mul_div_floor(account.balance, delta, self.reward_denominator()?)?;
        account
            .rewards
            .checked_add(accrued)
            .ok_or_else(|| error!(GenesisError::ArithmeticOverflow))
    }

    pub fn earned(&self, account: &StakeAccount, now: i64) -> Result<u128> {
        self.settled_rewards(account, self.reward_per_token(now)?)
    }

    /// Advance the accumulator to `now` and settle `account` against it.
    pub fn update_reward(&mut self, account: &mut StakeAccount, now: i64) -> Result<()> {
        let reward_per_token = self.reward_per_token(now)?;
        let rewards = self.settled_rewards(account, reward_per_token)?;

        self.reward_per_token_stored = reward_per_token;
        self.last_update_time = self.last_time_applicable(now);
        account.rewards = rewards;
        account.reward_per_token_paid = reward_per_token;
        Ok(())
    }

    pub fn stake(&mut self, account: &mut StakeAccount, amount: u128, now: i64) -> Result<StakeSplit> {
        require!(self.is_started(), GenesisError::NotStarted);
        require!(amount > 0, GenesisError::ZeroAmount);
        require!(amount >= self.fee, GenesisError::InsufficientAmount);

        let net = amount - self.fee;
        let balance = account
            .balance
            .checked_add(net)
            .ok_or(GenesisError::ArithmeticOverflow)?;
        require!(balance <= self.max_stake, GenesisError::StakeCapExceeded);
        let total_supply = self
            .total_supply
            .checked_add(net)
            .ok_or(GenesisError::ArithmeticOverflow)?;

        self.update_reward(account, now)?;
        account.balance = balance;
        self.total_supply = total_supply;

        Ok(StakeSplit { net, fee: self.fee })
    }

    pub fn withdraw(&mut self, account: &mut StakeAccount, amount: u128, now: i64) -> Result<()> {
        require!(self.is_started(), GenesisError::NotStarted);
        require!(amount > 0, GenesisError::ZeroAmount);
        require!(account.balance >= amount, GenesisError::InsufficientBalance);
        let total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(GenesisError::ArithmeticOverflow)?;

        self.update_reward(account, now)?;
        account.balance -= amount;
        self.total_supply = total_supply;
        Ok(())
    }

    /// Withdraw the whole balance. Returns the amount withdrawn.
    pub fn exit(&mut self, account: &mut StakeAccount, now: i64) -> Result<u128> {
        let amount = account.balance;
        self.withdraw(account, amount, now)?;
        Ok(amount)
    }

    /// Spend `reward_needed` for one play at `(x, y)`. Returns the composite id.
    pub fn redeem(&mut self, account: &mut StakeAccount, x: u64, y: u64, now: i64) -> Result<u64> {
        require!(self.is_started(), GenesisError::NotStarted);
        require!(
            self.earned(account, now)? >= self.reward_needed,
            GenesisError::InsufficientPoints
        );
        let id = composite_id(x, y, self.width)?;

        self.update_reward(account, now)?;
        account.rewards -= self.reward_needed;
        Ok(id)
    }

    pub fn set_fee(&mut self, fee: u128) -> Result<()> {
        require!(fee <= MAX_ALLOWED_FEE, GenesisError::FeeTooHigh);
        self.fee = fee;
        Ok(())
    }

    pub fn set_nft_fund(&mut self, nft_fund: Pubkey) -> Result<()> {
        require!(nft_fund != Pubkey::default(), GenesisError::ZeroAddress);
        self.nft_fund = nft_fund;
        Ok(())
    }

    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<()> {
        require!(new_owner != Pubkey::default(), GenesisError::ZeroAddress);
        self.owner = new_owner;
        Ok(())
    }
}

impl CapabilityPolicy for GenesisPool {
    fn is_authorized(&self, capability: Capability, account: &Pubkey) -> bool {
        capability == Capability::Owner && self.owner == *account
    }
}
