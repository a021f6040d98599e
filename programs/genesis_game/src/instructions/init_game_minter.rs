use anchor_lang::prelude::*;

use crate::state::GameMinter;

#[derive(Accounts)]
pub struct InitGameMinter<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Keypair account generated client-side; one registry per game
    #[account(
        init,
        payer = owner,
        space = 8 + GameMinter::INIT_SPACE,
    )]
    pub game_minter: Account<'info, GameMinter>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitGameMinter>,
    name: String,
    symbol: String,
    base_metadata_uri: String,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let game_minter = &mut ctx.accounts.game_minter;
    game_minter.init(owner, name, symbol, base_metadata_uri)?;

    msg!(
        "Game minter {} initialized: {} ({}), owner {}",
        game_minter.key(),
        game_minter.name,
        game_minter.symbol,
        owner
    );
    Ok(())
}
