use anchor_lang::prelude::*;

use crate::errors::GenesisError;

/// Multi-token id issued by a game minter. Created once per id.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct GameToken {
    pub game_minter: Pubkey,
    pub id: u64,
    /// Null until the id is created
    pub creator: Pubkey,
    pub max_supply: u64,
    pub total_supply: u64,
    pub bump: u8,
}

impl GameToken {
    pub const SEED: &'static [u8] = b"game_token";

    pub fn is_created(&self) -> bool {
        self.creator != Pubkey::default()
    }

    /// Register `id` and mint `initial_supply` to `creator`, who receives the
    /// whole initial supply.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        game_minter: Pubkey,
        id: u64,
        creator: Pubkey,
        max_supply: u64,
        initial_supply: u64,
        bump: u8,
        balance: &mut TokenBalance,
    ) -> Result<()> {
        require!(!self.is_created(), GenesisError::IdAlreadyUsed);
        require!(creator != Pubkey::default(), GenesisError::ZeroAddress);
        require!(initial_supply <= max_supply, GenesisError::InitialSupplyTooHigh);
        let amount = balance
            .amount
            .checked_add(initial_supply)
            .ok_or(GenesisError::ArithmeticOverflow)?;

        self.game_minter = game_minter;
        self.id = id;
        self.creator = creator;
        self.max_supply = max_supply;
        self.total_supply = initial_supply;
        self.bump = bump;
        balance.holder = creator;
        balance.amount = amount;
        Ok(())
    }
}

/// Holdings of one account for one token id.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct TokenBalance {
    pub holder: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl TokenBalance {
    pub const SEED: &'static [u8] = b"token_balance";
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_ID: u64 = 10;

    #[test]
    fn test_create_mints_initial_supply_to_creator() {
        let creator = Pubkey::new_unique();
        let mut token = GameToken::default();
        let mut balance = TokenBalance::default();
        assert!(!token.is_created());
        assert_eq!(token.total_supply, 0);
        assert_eq!(token.max_supply, 0);

        token
            .create(Pubkey::new_unique(), TOKEN_ID, creator, 1, 1, 255, &mut balance)
            .unwrap();

        assert!(token.is_created());
        assert_eq!(token.creator, creator);
        assert_eq!(token.id, TOKEN_ID);
        assert_eq!(token.total_supply, 1);
        assert_eq!(token.max_supply, 1);
        assert_eq!(balance.holder, creator);
        assert_eq!(balance.amount, 1);
    }

    #[test]
    fn test_create_rejects_initial_above_max() {
        let mut token = GameToken::default();
        let mut balance = TokenBalance::default();

        let err = token
            .create(Pubkey::new_unique(), TOKEN_ID, Pubkey::new_unique(), 1, 2, 255, &mut balance)
            .unwrap_err();
        assert_eq!(err, GenesisError::InitialSupplyTooHigh.into());
        assert!(!token.is_created());
        assert_eq!(token.total_supply, 0);
        assert_eq!(balance.amount, 0);
    }

    #[test]
    fn test_create_same_id_twice_fails() {
        let creator = Pubkey::new_unique();
        let minter = Pubkey::new_unique();
        let mut token = GameToken::default();
        let mut balance = TokenBalance::default();
        token.create(minter, TOKEN_ID, creator, 1, 1, 255, &mut balance).unwrap();

        let err = token
            .create(minter, TOKEN_ID, creator, 1, 1, 255, &mut balance)
            .unwrap_err();
        assert_eq!(err, GenesisError::IdAlreadyUsed.into());
        assert_eq!(token.creator, creator);
        assert_eq!(token.total_supply, 1);
        assert_eq!(token.max_supply, 1);
        assert_eq!(balance.amount, 1);
    }

    #[test]
    fn test_create_rejects_null_creator() {
        let mut token = GameToken::default();
        let mut balance = TokenBalance::default();
        assert_eq!(
            token
                .create(Pubkey::new_unique(), TOKEN_ID, Pubkey::default(), 1, 1, 255, &mut balance)
                .unwrap_err(),
            GenesisError::ZeroAddress.into()
        );
    }
}
