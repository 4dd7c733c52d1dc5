use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Raffle paused")]
    Paused,

    // -----------------
    // Admission
    // -----------------
    #[msg("Not enough lamports sent to enter the raffle")]
    InsufficientFee,
    #[msg("Raffle is not open")]
    RaffleNotOpen,
    #[msg("Raffle has no free entry slots")]
    RaffleFull,

    // -----------------
    // Draw
    // -----------------
    #[msg("Upkeep not needed")]
    UpkeepNotNeeded,

    // -----------------
    // Fulfillment
    // -----------------
    #[msg("Nonexistent request")]
    UnknownRequest,
    #[msg("Random words missing or not matching the requested count")]
    InvalidRandomWords,
    #[msg("Caller is not the oracle authority")]
    UnauthorizedOracle,
    #[msg("Prize transfer failed")]
    TransferFailed,
    #[msg("Winner account does not match the drawn entrant")]
    WinnerAccountMismatch,

    // -----------------
    // Config
    // -----------------
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Interval must be greater than zero")]
    InvalidInterval,
    #[msg("Invalid number of random words")]
    InvalidNumWords,

    // -----------------
    // Queries / math
    // -----------------
    #[msg("Entrant index out of range")]
    EntrantIndexOutOfRange,
    #[msg("Math overflow")]
    MathOverflow,
}
