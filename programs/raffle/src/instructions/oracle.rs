use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{
    errors::RaffleError,
    round::PrizeTransfer,
    utils::{authorize_oracle, ensure_winner_account},
    FulfillRandomWords, SetOracleAuthority, VAULT_SEED,
};

pub fn set_oracle_authority(ctx: Context<SetOracleAuthority>, oracle_authority: Pubkey) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), RaffleError::Unauthorized);

    cfg.oracle_authority = oracle_authority;
    Ok(())
}

// Oracle callback. The winner account is derived off-chain the same way
// (words[0] mod entrants) and verified again here before payout.
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    authorize_oracle(&ctx.accounts.config, &ctx.accounts.oracle.key())?;

    let now = Clock::get()?.unix_timestamp;

    // Prepare signer seeds BEFORE the &mut borrow of raffle
    let raffle_key = ctx.accounts.raffle.key();
    let vault_bump = ctx.accounts.raffle.vault_bump;
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, raffle_key.as_ref(), &[vault_bump]]];

    let accounts = &mut *ctx.accounts;
    let mut payout = VaultPayout {
        vault: &accounts.vault,
        winner: &accounts.winner,
        system_program: &accounts.system_program,
        signer_seeds,
    };
    accounts
        .raffle
        .fulfill(request_id, &random_words, now, &mut payout)?;

    Ok(())
}

/// Pays out of the vault PDA with a signed System Program transfer.
struct VaultPayout<'a, 'info> {
    vault: &'a UncheckedAccount<'info>,
    winner: &'a UncheckedAccount<'info>,
    system_program: &'a Program<'info, System>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl PrizeTransfer for VaultPayout<'_, '_> {
    fn pay(&mut self, winner: &Pubkey, lamports: u64) -> Result<()> {
        ensure_winner_account(winner, &self.winner.key())?;

        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.winner.to_account_info(),
                },
                self.signer_seeds,
            ),
            lamports,
        )
    }
}
