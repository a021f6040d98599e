use anchor_lang::prelude::*;

use crate::events::ParticipantAdded;
use crate::state::{require_capability, Capability, GameMinter, Participant};

#[derive(Accounts)]
pub struct AddParticipant<'info> {
    #[account(mut)]
    pub minter: Signer<'info>,

    #[account(mut)]
    pub game_minter: Account<'info, GameMinter>,

    /// Next slot in the registry sequence
    #[account(
        init,
        payer = minter,
        space = 8 + Participant::INIT_SPACE,
        seeds = [
            Participant::SEED,
            game_minter.key().as_ref(),
            &game_minter.participants_count.to_le_bytes()
        ],
        bump
    )]
    pub participant: Account<'info, Participant>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<AddParticipant>,
    id: u64,
    x: u64,
    y: u64,
    owner: Pubkey,
) -> Result<u64> {
    let minter = ctx.accounts.minter.key();
    let game_minter = &mut ctx.accounts.game_minter;
    require_capability(&**game_minter, Capability::Minter, &minter)?;

    let index = game_minter.next_participant_index()?;
    ctx.accounts.participant.set_inner(Participant {
        index,
        id,
        x,
        y,
        owner,
        bump: ctx.bumps.participant,
    });

    emit!(ParticipantAdded {
        minter,
        owner,
        id,
        index,
    });
    msg!("Participant {} added at index {} for {}", id, index, owner);
    Ok(index)
}
