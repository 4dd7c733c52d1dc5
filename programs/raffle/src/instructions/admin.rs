use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::RaffleError;
use crate::state::{Config, Raffle};
use crate::{InitializeConfig, SetPause};

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    entrance_fee: u64,
    interval_secs: u64,
    num_words: u32,
    oracle_authority: Pubkey,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let raffle = Raffle::new(
        ctx.bumps.raffle,
        ctx.accounts.vault.key(),
        ctx.bumps.vault,
        entrance_fee,
        interval_secs,
        num_words,
        now,
    )?;
    ctx.accounts.raffle.set_inner(raffle);

    let cfg: &mut Account<Config> = &mut ctx.accounts.config;
    cfg.admin = ctx.accounts.admin.key();
    cfg.bump = ctx.bumps.config;
    cfg.oracle_authority = oracle_authority;
    cfg.next_request_id = FIRST_REQUEST_ID;
    cfg.paused = false;
    cfg.version = INITIAL_VERSION;

    msg!(
        "Raffle initialized: fee={} interval={}s words={} oracle={}",
        entrance_fee,
        interval_secs,
        num_words,
        oracle_authority
    );

    Ok(())
}

pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), RaffleError::Unauthorized);
    cfg.paused = paused;
    Ok(())
}
