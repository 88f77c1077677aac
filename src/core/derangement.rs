use crate::domain::model::{Pair, Participant};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::validate_min_count;
use rand::seq::SliceRandom;
use rand::Rng;

pub const MIN_PARTICIPANTS: usize = 2;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Pairs every participant with a recipient drawn by rejection sampling.
///
/// Each attempt shuffles a full copy of the list and zips it against the
/// original order. The first draw where nobody got their own name is kept,
/// so the result is uniform over all derangements. Fewer than two
/// participants is rejected up front; `max_attempts` bounds the redraws.
pub fn make_pairs<R: Rng + ?Sized>(
    participants: &[Participant],
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Pair>> {
    validate_min_count("participants", participants.len(), MIN_PARTICIPANTS)?;

    for attempt in 1..=max_attempts {
        let mut drawn = participants.to_vec();
        drawn.shuffle(rng);

        if is_fixed_point_free(participants, &drawn) {
            tracing::debug!("🎲 Accepted pairing on attempt {}", attempt);
            return Ok(participants
                .iter()
                .cloned()
                .zip(drawn)
                .map(|(giver, recipient)| Pair { giver, recipient })
                .collect());
        }
    }

    tracing::error!(
        "❌ No valid pairing for {} participants after {} attempts",
        participants.len(),
        max_attempts
    );
    Err(SantaError::DerangementError {
        participants: participants.len(),
        attempts: max_attempts,
    })
}

fn is_fixed_point_free(givers: &[Participant], recipients: &[Participant]) -> bool {
    givers
        .iter()
        .zip(recipients)
        .all(|(giver, recipient)| giver.name != recipient.name)
}
