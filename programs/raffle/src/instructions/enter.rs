use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{events::RaffleEntered, utils::ensure_accepting_entries, EnterRaffle};

/// Pays `amount` lamports into the vault for one entry slot.
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    ensure_accepting_entries(&ctx.accounts.config)?;

    let player = ctx.accounts.player.key();
    let entrant_index = ctx.accounts.raffle.admit(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(RaffleEntered {
        player,
        amount,
        entrant_index,
    });

    Ok(())
}
