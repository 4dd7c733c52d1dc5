// programs/raffle/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::{Config, Raffle};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [crate::CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = admin,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [crate::RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// CHECK: system-owned vault PDA, holds the pot, no data
    #[account(
        init,
        payer = admin,
        space = 0,
        owner = anchor_lang::solana_program::system_program::ID,
        seeds = [crate::VAULT_SEED, raffle.key().as_ref()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetPause<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetOracleAuthority<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// CHECK: address pinned to raffle.vault (system-owned PDA)
    #[account(mut, address = raffle.vault)]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

// Read-only; keepers simulate it and read the return data.
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [crate::RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,
}

// Permissionless: no signer beyond the fee payer.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// CHECK: address pinned to raffle.vault (system-owned PDA)
    #[account(mut, address = raffle.vault)]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: must equal the drawn entrant; compared before any lamports move
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    pub oracle: Signer<'info>,

    pub system_program: Program<'info, System>,
}
