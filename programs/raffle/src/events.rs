use anchor_lang::prelude::*;

/// Emitted for every paid entry slot.
#[event]
pub struct RaffleEntered {
    pub player: Pubkey,
    pub amount: u64,
    pub entrant_index: u32,
}

/// Emitted by the request coordinator; this is what the off-chain oracle watches.
#[event]
pub struct RandomnessRequested {
    pub request_id: u64,
    pub requester: Pubkey,
    pub seed: [u8; 32],
    pub num_words: u32,
}

/// Emitted once the raffle has moved to Drawing.
#[event]
pub struct WinnerRequested {
    pub request_id: u64,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub prize: u64,
    pub request_id: u64,
    pub round: u64,
}
