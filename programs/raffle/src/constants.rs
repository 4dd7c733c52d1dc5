// Centralized Raffle Constants

// Round Parameters
// ================

/// Default entrance fee in lamports (0.01 SOL).
pub const DEFAULT_ENTRANCE_FEE_LAMPORTS: u64 = 10_000_000;

/// Default minimum round length in seconds before a draw may be requested.
/// Short on purpose for Devnet; a Mainnet deployment will want minutes or hours.
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Random words requested per draw. Only the first word selects the winner.
pub const DEFAULT_NUM_WORDS: u32 = 1;

/// Upper bound on words per request, keeps the fulfillment payload small.
pub const MAX_NUM_WORDS: u32 = 10;

/// Maximum entry slots per round. Bounds the Raffle account size
/// (32 bytes per slot, well under the 10 KiB CPI allocation limit).
pub const MAX_ENTRANTS: usize = 200;

// Oracle Coordinator
// ==================

/// First request id handed out by the coordinator. Zero is never issued,
/// so a callback for id 0 is always rejected.
pub const FIRST_REQUEST_ID: u64 = 1;

/// Domain separator mixed into every request seed.
pub const REQUEST_SEED_DOMAIN: &[u8] = b"raffle-seed";

// Versioning
// ==========

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;
