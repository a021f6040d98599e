use std::ops::Range;

use anchor_lang::prelude::*;

use crate::errors::GenesisError;
use crate::state::{Capability, CapabilityPolicy};

pub const MAX_ROLE_MEMBERS: usize = 10;
pub const MAX_NAME_LEN: usize = 64;
pub const MAX_SYMBOL_LEN: usize = 16;
pub const MAX_URI_LEN: usize = 200;
/// Records that fit in 1 KiB of return data
pub const MAX_PARTICIPANTS_PAGE: u64 = 18;

/// Registry of redeemed participants, shared by every pool that mints into it.
/// Keypair account, so one program can host several games.
#[account]
#[derive(InitSpace)]
pub struct GameMinter {
    pub owner: Pubkey,
    #[max_len(64)]
    pub name: String,
    #[max_len(16)]
    pub symbol: String,
    #[max_len(200)]
    pub base_metadata_uri: String,
    /// Accounts (usually pool PDAs) allowed to append participants
    #[max_len(10)]
    pub minters: Vec<Pubkey>,
    #[max_len(10)]
    pub whitelist_admins: Vec<Pubkey>,
    /// Next free index; also the number of participants recorded
    pub participants_count: u64,
}

impl GameMinter {
    pub fn init(
        &mut self,
        owner: Pubkey,
        name: String,
        symbol: String,
        base_metadata_uri: String,
    ) -> Result<()> {
        require!(
            name.len() <= MAX_NAME_LEN && symbol.len() <= MAX_SYMBOL_LEN,
            GenesisError::NameTooLong
        );
        require!(base_metadata_uri.len() <= MAX_URI_LEN, GenesisError::UrlTooLong);

        self.owner = owner;
        self.name = name;
        self.symbol = symbol;
        self.base_metadata_uri = base_metadata_uri;
        self.minters = vec![owner];
        self.whitelist_admins = vec![owner];
        self.participants_count = 0;
        Ok(())
    }

    fn role_members(&mut self, capability: Capability) -> Result<&mut Vec<Pubkey>> {
        match capability {
            Capability::Minter => Ok(&mut self.minters),
            Capability::WhitelistAdmin => Ok(&mut self.whitelist_admins),
            // ownership is a single slot, see transfer_ownership
            Capability::Owner => err!(GenesisError::Unauthorized),
        }
    }

    pub fn grant(&mut self, capability: Capability, account: Pubkey) -> Result<()> {
        require!(account != Pubkey::default(), GenesisError::ZeroAddress);
        let members = self.role_members(capability)?;
        require!(!members.contains(&account), GenesisError::RoleAlreadyGranted);
        require!(members.len() < MAX_ROLE_MEMBERS, GenesisError::RoleSetFull);
        members.push(account);
        Ok(())
    }

    pub fn revoke(&mut self, capability: Capability, account: &Pubkey) -> Result<()> {
        let members = self.role_members(capability)?;
        let position = members
            .iter()
            .position(|member| member == account)
            .ok_or(GenesisError::RoleNotGranted)?;
        members.remove(position);
        Ok(())
    }

    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<()> {
        require!(new_owner != Pubkey::default(), GenesisError::ZeroAddress);
        self.owner = new_owner;
        Ok(())
    }

    pub fn set_base_metadata_uri(&mut self, uri: String) -> Result<()> {
        require!(uri.len() <= MAX_URI_LEN, GenesisError::UrlTooLong);
        self.base_metadata_uri = uri;
        Ok(())
    }

    /// Reserve the next sequence index. The caller must create the
    /// participant account at exactly this index in the same instruction.
    pub fn next_participant_index(&mut self) -> Result<u64> {
        let index = self.participants_count;
        self.participants_count = index
            .checked_add(1)
            .ok_or(GenesisError::ArithmeticOverflow)?;
        Ok(index)
    }

    pub fn check_index(&self, index: u64) -> Result<()> {
        require!(index < self.participants_count, GenesisError::IndexOutOfRange);
        Ok(())
    }

    /// Indices `start..start + len`, clamped to the recorded sequence.
    pub fn participants_page(&self, start: u64, len: u64) -> Result<Range<u64>> {
        require!(len <= MAX_PARTICIPANTS_PAGE, GenesisError::PageTooLarge);
        require!(start <= self.participants_count, GenesisError::IndexOutOfRange);
        let end = start.saturating_add(len).min(self.participants_count);
        Ok(start..end)
    }

    /// Every token id shares the base uri.
    pub fn uri(&self, _token_id: u64) -> &str {
        &self.base_metadata_uri
    }
}

impl CapabilityPolicy for GameMinter {
    fn is_authorized(&self, capability: Capability, account: &Pubkey) -> bool {
        match capability {
            Capability::Owner => self.owner == *account,
            Capability::Minter => self.minters.contains(account),
            Capability::WhitelistAdmin => self.whitelist_admins.contains(account),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::require_capability;

    const DEFAULT_URI: &str = "https://lambo.hcore.finance/spot-the-ball-win/#home";

    fn new_minter(owner: Pubkey) -> GameMinter {
        let mut minter = GameMinter {
            owner: Pubkey::default(),
            name: String::new(),
            symbol: String::new(),
            base_metadata_uri: String::new(),
            minters: vec![],
            whitelist_admins: vec![],
            participants_count: 0,
        };
        minter
            .init(
                owner,
                "Spottheball game minter".to_string(),
                "HARDCORE".to_string(),
                DEFAULT_URI.to_string(),
            )
            .unwrap();
        minter
    }

    #[test]
    fn test_init_grants_owner_all_roles() {
        let owner = Pubkey::new_unique();
        let minter = new_minter(owner);

        assert_eq!(minter.name, "Spottheball game minter");
        assert_eq!(minter.symbol, "HARDCORE");
        assert!(minter.is_authorized(Capability::Owner, &owner));
        assert!(minter.is_authorized(Capability::Minter, &owner));
        assert!(minter.is_authorized(Capability::WhitelistAdmin, &owner));
        assert!(!minter.is_authorized(Capability::Minter, &Pubkey::new_unique()));
    }

    #[test]
    fn test_init_rejects_long_symbol() {
        let mut minter = new_minter(Pubkey::new_unique());
        let err = minter
            .init(Pubkey::new_unique(), "n".into(), "S".repeat(17), "u".into())
            .unwrap_err();
        assert_eq!(err, GenesisError::NameTooLong.into());
    }

    #[test]
    fn test_grant_and_revoke_minter() {
        let owner = Pubkey::new_unique();
        let pool = Pubkey::new_unique();
        let mut minter = new_minter(owner);

        assert!(!minter.is_authorized(Capability::Minter, &pool));
        minter.grant(Capability::Minter, pool).unwrap();
        assert!(minter.is_authorized(Capability::Minter, &pool));

        minter.revoke(Capability::Minter, &pool).unwrap();
        assert!(!minter.is_authorized(Capability::Minter, &pool));
    }

    #[test]
    fn test_grant_and_revoke_whitelist_admin() {
        let admin = Pubkey::new_unique();
        let mut minter = new_minter(Pubkey::new_unique());

        minter.grant(Capability::WhitelistAdmin, admin).unwrap();
        assert!(minter.is_authorized(Capability::WhitelistAdmin, &admin));
        assert!(!minter.is_authorized(Capability::Minter, &admin));

        minter.revoke(Capability::WhitelistAdmin, &admin).unwrap();
        assert!(!minter.is_authorized(Capability::WhitelistAdmin, &admin));
    }

    #[test]
    fn test_role_errors() {
        let owner = Pubkey::new_unique();
        let mut minter = new_minter(owner);

        assert_eq!(
            minter.grant(Capability::Minter, owner).unwrap_err(),
            GenesisError::RoleAlreadyGranted.into()
        );
        assert_eq!(
            minter.revoke(Capability::Minter, &Pubkey::new_unique()).unwrap_err(),
            GenesisError::RoleNotGranted.into()
        );
        assert_eq!(
            minter.grant(Capability::Minter, Pubkey::default()).unwrap_err(),
            GenesisError::ZeroAddress.into()
        );
        assert_eq!(
            minter.grant(Capability::Owner, Pubkey::new_unique()).unwrap_err(),
            GenesisError::Unauthorized.into()
        );

        for _ in 1..MAX_ROLE_MEMBERS {
            minter.grant(Capability::Minter, Pubkey::new_unique()).unwrap();
        }
        assert_eq!(
            minter.grant(Capability::Minter, Pubkey::new_unique()).unwrap_err(),
            GenesisError::RoleSetFull.into()
        );
    }

    #[test]
    fn test_require_capability() {
        let owner = Pubkey::new_unique();
        let minter = new_minter(owner);

        assert!(require_capability(&minter, Capability::Minter, &owner).is_ok());
        assert_eq!(
            require_capability(&minter, Capability::Minter, &Pubkey::new_unique()).unwrap_err(),
            GenesisError::Unauthorized.into()
        );
    }

    #[test]
    fn test_transfer_ownership() {
        let next = Pubkey::new_unique();
        let mut minter = new_minter(Pubkey::new_unique());

        assert_eq!(
            minter.transfer_ownership(Pubkey::default()).unwrap_err(),
            GenesisError::ZeroAddress.into()
        );
        minter.transfer_ownership(next).unwrap();
        assert!(minter.is_authorized(Capability::Owner, &next));
    }

    #[test]
    fn test_uri_is_shared_across_ids() {
        let mut minter = new_minter(Pubkey::new_unique());
        assert_eq!(minter.uri(0), DEFAULT_URI);
        assert_eq!(minter.uri(1), DEFAULT_URI);

        minter.set_base_metadata_uri("new_uri".to_string()).unwrap();
        assert_eq!(minter.uri(1), "new_uri");
        assert!(minter.set_base_metadata_uri("u".repeat(MAX_URI_LEN + 1)).is_err());
    }

    #[test]
    fn test_participants_page() {
        let mut minter = new_minter(Pubkey::new_unique());
        for _ in 0..20 {
            minter.next_participant_index().unwrap();
        }

        assert_eq!(minter.participants_page(0, MAX_PARTICIPANTS_PAGE).unwrap(), 0..18);
        assert_eq!(minter.participants_page(18, MAX_PARTICIPANTS_PAGE).unwrap(), 18..20);
        assert_eq!(minter.participants_page(20, 5).unwrap(), 20..20);
        assert_eq!(
            minter.participants_page(21, 1).unwrap_err(),
            GenesisError::IndexOutOfRange.into()
        );
        assert_eq!(
            minter.participants_page(0, MAX_PARTICIPANTS_PAGE + 1).unwrap_err(),
            GenesisError::PageTooLarge.into()
        );
    }

    #[test]
    fn test_only_registry_owner_passes_owner_check() {
        let owner = Pubkey::new_unique();
        let outsider = Pubkey::new_unique();
        let mut minter = new_minter(owner);
        minter.grant(Capability::Minter, outsider).unwrap();

        // a minter is not enough to open pools on the registry
        assert!(require_capability(&minter, Capability::Owner, &owner).is_ok());
        assert_eq!(
            require_capability(&minter, Capability::Owner, &outsider).unwrap_err(),
            GenesisError::Unauthorized.into()
        );

        minter.transfer_ownership(outsider).unwrap();
        assert_eq!(
            require_capability(&minter, Capability::Owner, &owner).unwrap_err(),
            GenesisError::Unauthorized.into()
        );
    }

    #[test]
    fn test_participant_indices_are_dense() {
        let mut minter = new_minter(Pubkey::new_unique());

        assert_eq!(minter.check_index(0).unwrap_err(), GenesisError::IndexOutOfRange.into());
        assert_eq!(minter.next_participant_index().unwrap(), 0);
        assert_eq!(minter.next_participant_index().unwrap(), 1);
        assert_eq!(minter.participants_count, 2);
        assert!(minter.check_index(1).is_ok());
        assert!(minter.check_index(2).is_err());
    }
}
