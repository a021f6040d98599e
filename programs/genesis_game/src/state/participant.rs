use anchor_lang::prelude::*;

/// One redemption, stored at a dense sequence index in the game minter.
#[account]
#[derive(InitSpace)]
pub struct Participant {
    /// Position in the registry sequence
    pub index: u64,
    /// Composite spatial id, `y * width + x`
    pub id: u64,
    pub x: u64,
    pub y: u64,
    /// Account that redeemed the play
    pub owner: Pubkey,
    pub bump: u8,
}

impl Participant {
    pub const SEED: &'static [u8] = b"participant";

    pub fn record(&self) -> ParticipantRecord {
        ParticipantRecord {
            id: self.id,
            x: self.x,
            y: self.y,
            owner: self.owner,
        }
    }
}

/// Public view of a participant, returned by the registry queries.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRecord {
    pub id: u64,
    pub x: u64,
    pub y: u64,
    pub owner: Pubkey,
}
