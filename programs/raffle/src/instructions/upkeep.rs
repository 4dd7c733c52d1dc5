use anchor_lang::prelude::*;

use crate::{
    errors::RaffleError,
    events::RandomnessRequested,
    round::{RandomnessOracle, UpkeepCheck},
    state::Config,
    utils::request_seed,
    CheckUpkeep, PerformUpkeep,
};

/// `check_data` is accepted for keeper compatibility and ignored.
pub fn check_upkeep(ctx: Context<CheckUpkeep>, _check_data: Vec<u8>) -> Result<UpkeepCheck> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.upkeep_status(now).into())
}

/// Anyone may call this; `Raffle::request_draw` re-checks the policy itself.
pub fn perform_upkeep(ctx: Context<PerformUpkeep>, _perform_data: Vec<u8>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();

    let accounts = &mut *ctx.accounts;
    let mut coordinator = RequestCoordinator {
        config: &mut accounts.config,
        requester: raffle_key,
        slot: clock.slot,
    };
    accounts
        .raffle
        .request_draw(clock.unix_timestamp, &mut coordinator)?;

    Ok(())
}

/// On-chain side of the oracle request: hands out ids from `Config` and
/// publishes the seed the off-chain VRF has to prove over.
pub struct RequestCoordinator<'a> {
    pub config: &'a mut Config,
    pub requester: Pubkey,
    pub slot: u64,
}

impl RandomnessOracle for RequestCoordinator<'_> {
    fn request_random_words(&mut self, num_words: u32) -> Result<u64> {
        let request_id = self.config.next_request_id;
        self.config.next_request_id = request_id
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;

        let seed = request_seed(&self.requester, request_id, self.slot);
        emit!(RandomnessRequested {
            request_id,
            requester: self.requester,
            seed,
            num_words,
        });

        Ok(request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIRST_REQUEST_ID, INITIAL_VERSION};

    fn config() -> Config {
        Config {
            admin: Pubkey::new_unique(),
            bump: 255,
            oracle_authority: Pubkey::new_unique(),
            next_request_id: FIRST_REQUEST_ID,
            paused: false,
            version: INITIAL_VERSION,
        }
    }

    #[test]
    fn coordinator_issues_increasing_ids_from_one() {
        let mut cfg = config();
        let requester = Pubkey::new_unique();
        let mut coordinator = RequestCoordinator {
            config: &mut cfg,
            requester,
            slot: 42,
        };

        assert_eq!(coordinator.request_random_words(1).unwrap(), 1);
        assert_eq!(coordinator.request_random_words(1).unwrap(), 2);
        assert_eq!(cfg.next_request_id, 3);
    }

    #[test]
    fn coordinator_refuses_to_wrap() {
        let mut cfg = config();
        cfg.next_request_id = u64::MAX;
        let mut coordinator = RequestCoordinator {
            config: &mut cfg,
            requester: Pubkey::new_unique(),
            slot: 0,
        };

        assert_eq!(
            coordinator.request_random_words(1).unwrap_err(),
            RaffleError::MathOverflow.into()
        );
        assert_eq!(cfg.next_request_id, u64::MAX);
    }
}
