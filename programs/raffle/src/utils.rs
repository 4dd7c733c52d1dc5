use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::constants::REQUEST_SEED_DOMAIN;
use crate::errors::RaffleError;
use crate::state::Config;

// -----------------
// Seeds
// -----------------
pub const CONFIG_SEED: &[u8] = b"config_v1";
pub const RAFFLE_SEED: &[u8] = b"raffle_v1";
pub const VAULT_SEED: &[u8] = b"vault_v1";

/// One oracle output: a big-endian 256-bit word.
pub type RandomWord = [u8; 32];

// -------------------------
// Request seed
// -------------------------
/// Seed the off-chain VRF proves over. Unique per (raffle, request id, slot).
pub fn request_seed(requester: &Pubkey, request_id: u64, slot: u64) -> [u8; 32] {
    hashv(&[
        REQUEST_SEED_DOMAIN,
        requester.as_ref(),
        request_id.to_le_bytes().as_ref(),
        slot.to_le_bytes().as_ref(),
    ])
    .to_bytes()
}

// -------------------------
// Winner derivation
// -------------------------
/// `word mod modulus`, exact over all 256 bits. `modulus` must be non-zero.
pub fn word_mod(word: &RandomWord, modulus: u64) -> u64 {
    let m = modulus as u128;
    let rem = word
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | *byte as u128) % m);
    rem as u64
}

/// Slot index of the winning entry for `word` over `entrant_count` slots.
pub fn winner_index(word: &RandomWord, entrant_count: usize) -> Option<usize> {
    if entrant_count == 0 {
        return None;
    }
    Some(word_mod(word, entrant_count as u64) as usize)
}

/// Builds a word whose value is `value` (handy for oracles and tests).
pub fn word_from_u64(value: u64) -> RandomWord {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

// -------------------------
// Guards
// -------------------------
/// Entries are refused while the admin has paused the program.
pub fn ensure_accepting_entries(config: &Config) -> Result<()> {
    require!(!config.paused, RaffleError::Paused);
    Ok(())
}

/// Only the configured oracle authority may deliver words. An unset
/// authority (default pubkey) rejects everyone.
pub fn authorize_oracle(config: &Config, signer: &Pubkey) -> Result<()> {
    require!(
        config.oracle_authority != Pubkey::default(),
        RaffleError::UnauthorizedOracle
    );
    require_keys_eq!(config.oracle_authority, *signer, RaffleError::UnauthorizedOracle);
    Ok(())
}

/// The account passed as winner must be the drawn entrant.
pub fn ensure_winner_account(drawn: &Pubkey, provided: &Pubkey) -> Result<()> {
    require_keys_eq!(*provided, *drawn, RaffleError::WinnerAccountMismatch);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIRST_REQUEST_ID, INITIAL_VERSION};

    fn config(oracle_authority: Pubkey) -> Config {
        Config {
            admin: Pubkey::new_unique(),
            bump: 255,
            oracle_authority,
            next_request_id: FIRST_REQUEST_ID,
            paused: false,
            version: INITIAL_VERSION,
        }
    }

    #[test]
    fn pause_blocks_entries() {
        let mut cfg = config(Pubkey::new_unique());
        assert!(ensure_accepting_entries(&cfg).is_ok());

        cfg.paused = true;
        assert_eq!(
            ensure_accepting_entries(&cfg).unwrap_err(),
            RaffleError::Paused.into()
        );
    }

    #[test]
    fn unset_oracle_authority_rejects_everyone() {
        let cfg = config(Pubkey::default());
        assert_eq!(
            authorize_oracle(&cfg, &Pubkey::new_unique()).unwrap_err(),
            RaffleError::UnauthorizedOracle.into()
        );
        assert_eq!(
            authorize_oracle(&cfg, &Pubkey::default()).unwrap_err(),
            RaffleError::UnauthorizedOracle.into()
        );
    }

    #[test]
    fn only_configured_oracle_may_fulfill() {
        let oracle = Pubkey::new_unique();
        let cfg = config(oracle);

        assert!(authorize_oracle(&cfg, &oracle).is_ok());
        assert_eq!(
            authorize_oracle(&cfg, &Pubkey::new_unique()).unwrap_err(),
            RaffleError::UnauthorizedOracle.into()
        );
    }

    #[test]
    fn winner_account_must_match_drawn_entrant() {
        let drawn = Pubkey::new_unique();
        assert!(ensure_winner_account(&drawn, &drawn).is_ok());
        assert_eq!(
            ensure_winner_account(&drawn, &Pubkey::new_unique()).unwrap_err(),
            RaffleError::WinnerAccountMismatch.into()
        );
    }

    #[test]
    fn word_mod_matches_small_values() {
        assert_eq!(word_mod(&word_from_u64(0), 4), 0);
        assert_eq!(word_mod(&word_from_u64(6), 4), 2);
        assert_eq!(word_mod(&word_from_u64(u64::MAX), 1), 0);
        assert_eq!(word_mod(&word_from_u64(1_000_003), 7), 1_000_003 % 7);
    }

    #[test]
    fn word_mod_uses_high_bytes() {
        // 2^255 mod 3: 2^odd ≡ 2 (mod 3)
        let mut word = [0u8; 32];
        word[0] = 0x80;
        assert_eq!(word_mod(&word, 3), 2);

        // 2^256 - 1 is divisible by 3 and by 5
        let all_ones = [0xffu8; 32];
        assert_eq!(word_mod(&all_ones, 3), 0);
        assert_eq!(word_mod(&all_ones, 5), 0);
        assert_eq!(word_mod(&all_ones, 4), 3);
    }

    #[test]
    fn winner_index_needs_entrants() {
        assert_eq!(winner_index(&word_from_u64(9), 0), None);
        assert_eq!(winner_index(&word_from_u64(9), 1), Some(0));
        assert_eq!(winner_index(&word_from_u64(10), 4), Some(2));
    }

    #[test]
    fn request_seed_is_unique_per_request() {
        let raffle = Pubkey::new_unique();
        let a = request_seed(&raffle, 1, 100);
        let b = request_seed(&raffle, 2, 100);
        let c = request_seed(&raffle, 1, 101);
        let d = request_seed(&Pubkey::new_unique(), 1, 100);

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(a, request_seed(&raffle, 1, 100));
    }
}
