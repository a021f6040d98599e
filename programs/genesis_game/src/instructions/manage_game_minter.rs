use anchor_lang::prelude::*;

use crate::events::{
    MinterAdded, MinterRemoved, OwnershipTransferred, WhitelistAdminAdded, WhitelistAdminRemoved,
};
use crate::state::{require_capability, Capability, GameMinter};

/// Role and metadata administration of a game minter. The capability each
/// operation needs is checked in its handler.
#[derive(Accounts)]
pub struct ManageGameMinter<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub game_minter: Account<'info, GameMinter>,
}

pub fn add_minter(ctx: Context<ManageGameMinter>, account: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let game_minter = &mut ctx.accounts.game_minter;
    require_capability(&**game_minter, Capability::Minter, &authority)?;

    game_minter.grant(Capability::Minter, account)?;

    emit!(MinterAdded { account });
    msg!("Added minter {}", account);
    Ok(())
}

pub fn remove_minter(ctx: Context<ManageGameMinter>, account: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let game_minter = &mut ctx.accounts.game_minter;
    require_capability(&**game_minter, Capability::Owner, &authority)?;

    game_minter.revoke(Capability::Minter, &account)?;

    emit!(MinterRemoved { account });
    msg!("Removed minter {}", account);
    Ok(())
}

pub fn add_whitelist_admin(ctx: Context<ManageGameMinter>, account: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let game_minter = &mut ctx.accounts.game_minter;
    require_capability(&**game_minter, Capability::WhitelistAdmin, &authority)?;

    game_minter.grant(Capability::WhitelistAdmin, account)?;

    emit!(WhitelistAdminAdded { account });
    msg!("Added whitelist admin {}", account);
    Ok(())
}

pub fn remove_whitelist_admin(ctx: Context<ManageGameMinter>, account: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let game_minter = &mut ctx.accounts.game_minter;
    require_capability(&**game_minter, Capability::Owner, &authority)?;

    game_minter.revoke(Capability::WhitelistAdmin, &account)?;

    emit!(WhitelistAdminRemoved { account });
    msg!("Removed whitelist admin {}", account);
    Ok(())
}

pub fn set_base_metadata_uri(ctx: Context<ManageGameMinter>, uri: String) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let game_minter = &mut ctx.accounts.game_minter;
    require_capability(&**game_minter, Capability::WhitelistAdmin, &authority)?;

    game_minter.set_base_metadata_uri(uri)?;

    msg!("Updated base_metadata_uri");
    Ok(())
}

pub fn transfer_ownership(ctx: Context<ManageGameMinter>, new_owner: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let game_minter = &mut ctx.accounts.game_minter;
    require_capability(&**game_minter, Capability::Owner, &authority)?;

    game_minter.transfer_ownership(new_owner)?;

    emit!(OwnershipTransferred {
        target: game_minter.key(),
        previous_owner: authority,
        new_owner,
    });
    msg!("Game minter ownership transferred to {}", new_owner);
    Ok(())
}
