//! Round lifecycle for the single perpetual raffle.
//!
//! Every mutation of a round goes through four methods on [`Raffle`]:
//! [`Raffle::admit`], [`Raffle::request_draw`], [`Raffle::fulfill`] and the
//! constructor. Instruction handlers only gather accounts, read the clock and
//! plug the on-chain adapters into the two seams below, so the whole state
//! machine can be exercised off-chain.

use anchor_lang::prelude::*;

use crate::{
    constants::{INITIAL_VERSION, MAX_ENTRANTS, MAX_NUM_WORDS},
    errors::RaffleError,
    events::{WinnerPicked, WinnerRequested},
    state::{PendingRequest, Raffle, RaffleState},
    utils::{winner_index, RandomWord},
};

/// Outbound half of the oracle protocol.
pub trait RandomnessOracle {
    /// Issues one request and returns its correlation id synchronously.
    /// The words arrive later, through [`Raffle::fulfill`].
    fn request_random_words(&mut self, num_words: u32) -> Result<u64>;
}

/// Delivers the pot to the drawn entrant.
pub trait PrizeTransfer {
    fn pay(&mut self, winner: &Pubkey, lamports: u64) -> Result<()>;
}

const UPKEEP_REQUIREMENT: &str = "open, interval elapsed, players > 0, balance > 0";

/// Individual upkeep conditions plus the raw values behind them.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub is_open: bool,
    pub interval_elapsed: bool,
    pub has_players: bool,
    pub has_balance: bool,

    pub pot_lamports: u64,
    pub entrant_count: u32,
    pub state: u8,
}

impl UpkeepStatus {
    pub fn upkeep_needed(&self) -> bool {
        self.is_open && self.interval_elapsed && self.has_players && self.has_balance
    }

    /// `balance=<pot>, players=<count>, state=<ordinal>`
    pub fn diagnostic(&self) -> String {
        format!(
            "balance={}, players={}, state={}",
            self.pot_lamports, self.entrant_count, self.state
        )
    }
}

/// Return value of `check_upkeep`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    pub perform_data: Vec<u8>,
    pub status: UpkeepStatus,
}

impl From<UpkeepStatus> for UpkeepCheck {
    fn from(status: UpkeepStatus) -> Self {
        Self {
            upkeep_needed: status.upkeep_needed(),
            perform_data: Vec::new(),
            status,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub winner: Pubkey,
    pub prize: u64,
    pub request_id: u64,
    pub round: u64,
}

impl Raffle {
    pub fn new(
        bump: u8,
        vault: Pubkey,
        vault_bump: u8,
        entrance_fee: u64,
        interval_secs: u64,
        num_words: u32,
        now: i64,
    ) -> Result<Self> {
        require!(entrance_fee > 0, RaffleError::InvalidEntranceFee);
        require!(interval_secs > 0, RaffleError::InvalidInterval);
        require!(
            (1..=MAX_NUM_WORDS).contains(&num_words),
            RaffleError::InvalidNumWords
        );

        Ok(Self {
            bump,
            vault,
            vault_bump,
            entrance_fee,
            interval_secs,
            num_words,
            state: RaffleState::Open,
            last_timestamp: now,
            entrants: Vec::new(),
            pot_lamports: 0,
            pending_request: None,
            recent_winner: None,
            completed_rounds: 0,
            version: INITIAL_VERSION,
        })
    }

    // -------------------------
    // Entrant ledger
    // -------------------------

    /// Appends one entry slot for `player` and adds `amount` to the pot.
    /// Returns the slot index.
    pub fn admit(&mut self, player: Pubkey, amount: u64) -> Result<u32> {
        require!(amount >= self.entrance_fee, RaffleError::InsufficientFee);
        require!(self.state == RaffleState::Open, RaffleError::RaffleNotOpen);
        require!(self.entrants.len() < MAX_ENTRANTS, RaffleError::RaffleFull);

        let pot = self
            .pot_lamports
            .checked_add(amount)
            .ok_or(RaffleError::MathOverflow)?;
        let index = self.entrants.len() as u32;

        self.entrants.push(player);
        self.pot_lamports = pot;

        Ok(index)
    }

    pub fn entrant_at(&self, index: usize) -> Result<Pubkey> {
        self.entrants
            .get(index)
            .copied()
            .ok_or_else(|| error!(RaffleError::EntrantIndexOutOfRange))
    }

    pub fn entrant_count(&self) -> usize {
        self.entrants.len()
    }

    // -------------------------
    // Round clock
    // -------------------------

    pub fn elapsed(&self, now: i64) -> i64 {
        now.saturating_sub(self.last_timestamp)
    }

    pub fn interval_elapsed(&self, now: i64) -> bool {
        let elapsed = self.elapsed(now);
        elapsed >= 0 && elapsed as u64 >= self.interval_secs
    }

    // -------------------------
    // Upkeep policy
    // -------------------------

    /// Read-only; safe to call at any frequency.
    pub fn upkeep_status(&self, now: i64) -> UpkeepStatus {
        UpkeepStatus {
            is_open: self.state == RaffleState::Open,
            interval_elapsed: self.interval_elapsed(now),
            has_players: !self.entrants.is_empty(),
            has_balance: self.pot_lamports > 0,
            pot_lamports: self.pot_lamports,
            entrant_count: self.entrants.len() as u32,
            state: self.state.ordinal(),
        }
    }

    // -------------------------
    // Draw request
    // -------------------------

    /// Re-checks the upkeep policy, asks the oracle for words and moves the
    /// round to Drawing. Anyone may call this; the re-check is the guard.
    pub fn request_draw<O: RandomnessOracle>(&mut self, now: i64, oracle: &mut O) -> Result<u64> {
        let status = self.upkeep_status(now);
        if !status.upkeep_needed() {
            msg!("Upkeep not needed: {}", status.diagnostic());
            return Err(error!(RaffleError::UpkeepNotNeeded)
                .with_values((status.diagnostic(), UPKEEP_REQUIREMENT)));
        }

        let request_id = oracle.request_random_words(self.num_words)?;

        self.state = RaffleState::Drawing;
        self.pending_request = Some(PendingRequest {
            request_id,
            num_words: self.num_words,
        });

        msg!(
            "Draw requested: request_id={} entrants={} pot={}",
            request_id,
            self.entrants.len(),
            self.pot_lamports
        );
        emit!(WinnerRequested { request_id });

        Ok(request_id)
    }

    // -------------------------
    // Settlement
    // -------------------------

    /// Consumes the pending request: picks `words[0] mod entrants`, resets the
    /// round and pays the whole pot. A failed payout restores the round as it
    /// was (still Drawing, pot and entrants intact) so the callback can be retried.
    pub fn fulfill<P: PrizeTransfer>(
        &mut self,
        request_id: u64,
        words: &[RandomWord],
        now: i64,
        payout: &mut P,
    ) -> Result<Settlement> {
        let pending = match self.pending_request {
            Some(pending) if self.state == RaffleState::Drawing && pending.request_id == request_id => {
                pending
            }
            _ => {
                msg!("Nonexistent request: {}", request_id);
                return err!(RaffleError::UnknownRequest);
            }
        };
        require!(
            !words.is_empty() && words.len() == pending.num_words as usize,
            RaffleError::InvalidRandomWords
        );

        let index = winner_index(&words[0], self.entrants.len())
            .ok_or(RaffleError::EntrantIndexOutOfRange)?;
        let winner = self.entrants[index];
        let prize = self.pot_lamports;
        let round = self
            .completed_rounds
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;

        msg!(
            "Winner: slot {} of {} -> {} ({} lamports)",
            index,
            self.entrants.len(),
            winner,
            prize
        );

        // commit the reset first; the transfer only ever sees a fresh round
        let before = self.clone();
        self.entrants.clear();
        self.pot_lamports = 0;
        self.pending_request = None;
        self.state = RaffleState::Open;
        self.last_timestamp = now;
        self.recent_winner = Some(winner);
        self.completed_rounds = round;

        if let Err(e) = payout.pay(&winner, prize) {
            *self = before;
            msg!("Prize transfer to {} failed: {}", winner, e);
            return err!(RaffleError::TransferFailed);
        }

        emit!(WinnerPicked {
            winner,
            prize,
            request_id,
            round,
        });

        Ok(Settlement {
            winner,
            prize,
            request_id,
            round,
        })
    }

    // -------------------------
    // Queries
    // -------------------------

    pub fn entrance_fee(&self) -> u64 {
        self.entrance_fee
    }

    pub fn interval(&self) -> u64 {
        self.interval_secs
    }

    pub fn state(&self) -> RaffleState {
        self.state
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner
    }

    pub fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }
}
