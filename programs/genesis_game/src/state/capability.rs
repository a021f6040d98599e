use anchor_lang::prelude::*;

use crate::errors::GenesisError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Owner,
    Minter,
    WhitelistAdmin,
}

/// Answers whether an account holds a capability. Privileged instructions
/// consult a policy instead of hard-coding the role bookkeeping.
pub trait CapabilityPolicy {
    fn is_authorized(&self, capability: Capability, account: &Pubkey) -> bool;
}

pub fn require_capability(
    policy: &impl CapabilityPolicy,
    capability: Capability,
    account: &Pubkey,
) -> Result<()> {
    require!(
        policy.is_authorized(capability, account),
        GenesisError::Unauthorized
    );
    Ok(())
}
