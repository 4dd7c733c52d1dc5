use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub admin: Pubkey,
    pub bump: u8,

    /// Only this signer may deliver randomness. Default pubkey = nobody.
    pub oracle_authority: Pubkey,

    /// Request coordinator counter. Starts at FIRST_REQUEST_ID, never reused.
    pub next_request_id: u64,

    /// Blocks admission only; draws and fulfillments keep running.
    pub paused: bool,
    pub version: u16,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RaffleState {
    Open,
    Drawing,
}

impl RaffleState {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Correlation data for the randomness request currently in flight.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct PendingRequest {
    pub request_id: u64,
    pub num_words: u32,
}

/// The one perpetual round. Created by `initialize_config`, never closed.
#[account]
#[derive(InitSpace)]
pub struct Raffle {
    pub bump: u8,

    // System-owned PDA vault (holds the pot, no data)
    pub vault: Pubkey,
    pub vault_bump: u8,

    // Fixed at initialization
    pub entrance_fee: u64,
    pub interval_secs: u64,
    pub num_words: u32,

    pub state: RaffleState,
    pub last_timestamp: i64,

    /// Entry slots in payment order. max_len must stay equal to MAX_ENTRANTS.
    #[max_len(200)]
    pub entrants: Vec<Pubkey>,
    pub pot_lamports: u64,

    /// Some(..) iff state == Drawing.
    pub pending_request: Option<PendingRequest>,

    pub recent_winner: Option<Pubkey>,
    pub completed_rounds: u64,

    pub version: u16,
}
