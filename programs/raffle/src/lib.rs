use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod round;
pub mod state;
pub mod utils;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use round::*;
pub use state::*;
pub use utils::*;

declare_id!("GCxSDDRHaKKR6EFgvxSYSqzhWfx7g2w18fAdTPoy9owC");

#[program]
pub mod raffle {
    use super::*;
    use crate::instructions::{admin, enter, oracle, upkeep};

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        entrance_fee: u64,
        interval_secs: u64,
        num_words: u32,
        oracle_authority: Pubkey,
    ) -> Result<()> {
        admin::initialize_config(ctx, entrance_fee, interval_secs, num_words, oracle_authority)
    }

    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        admin::set_pause(ctx, paused)
    }

    pub fn set_oracle_authority(ctx: Context<SetOracleAuthority>, oracle_authority: Pubkey) -> Result<()> {
        oracle::set_oracle_authority(ctx, oracle_authority)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        enter::enter_raffle(ctx, amount)
    }

    // keepers
    pub fn check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
        upkeep::check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        upkeep::perform_upkeep(ctx, perform_data)
    }

    // oracle callback
    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        oracle::fulfill_random_words(ctx, request_id, random_words)
    }
}
