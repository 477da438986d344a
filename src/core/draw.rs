use crate::core::rng::{shuffle, Mt19937};
use crate::domain::model::{DrawConfig, DrawResult, Identifier, ParticipantSet, Tier};
use crate::utils::error::{DrawError, Result};
use crate::utils::validation::validate_tier_bounds;
use serde::Serialize;

/// Checks the tier bounds against the participant count. Runs before the
/// generator is built, so a rejected draw never consumes randomness.
pub fn check_preconditions(config: &DrawConfig, available: usize) -> Result<()> {
    validate_tier_bounds(config.a, config.b, config.c)?;
    if config.c > available {
        return Err(DrawError::InsufficientParticipants {
            requested: config.c,
            available,
        });
    }
    Ok(())
}

/// Sort, seed, shuffle, take the first `c`, split at `a` and `b`.
///
/// The result only depends on the multiset of identifiers, the seed and the
/// bounds; source order is erased by the sort.
pub fn draw(participants: &ParticipantSet, config: &DrawConfig) -> Result<DrawResult> {
    check_preconditions(config, participants.len())?;

    let mut pool: Vec<Identifier> = participants.ids().to_vec();
    pool.sort_unstable();

    let mut rng = Mt19937::from_seed(config.seed);
    shuffle(&mut pool, &mut rng);

    pool.truncate(config.c);
    let tier3 = pool.split_off(config.b);
    let tier2 = pool.split_off(config.a);
    let tier1 = pool;

    tracing::debug!(
        "Drew {} winners from {} participants (seed {})",
        config.c,
        participants.len(),
        config.seed
    );

    Ok(DrawResult {
        seed: config.seed,
        total_participants: participants.len(),
        a: config.a,
        b: config.b,
        c: config.c,
        tier1,
        tier2,
        tier3,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verification {
    Match,
    MetadataMismatch {
        field: &'static str,
        expected: String,
        found: String,
    },
    WinnerMismatch {
        tier: Tier,
        /// 0-based rank inside the tier
        rank: usize,
        expected: Option<Identifier>,
        found: Option<Identifier>,
    },
}

impl Verification {
    pub fn is_match(&self) -> bool {
        matches!(self, Verification::Match)
    }
}

/// Replays the draw for `config` and compares it with a published result.
pub fn verify(
    participants: &ParticipantSet,
    config: &DrawConfig,
    claimed: &DrawResult,
) -> Result<Verification> {
    let expected = draw(participants, config)?;

    let metadata: [(&'static str, String, String); 5] = [
        ("seed", expected.seed.to_string(), claimed.seed.to_string()),
        (
            "total_participants",
            expected.total_participants.to_string(),
            claimed.total_participants.to_string(),
        ),
        ("a", expected.a.to_string(), claimed.a.to_string()),
        ("b", expected.b.to_string(), claimed.b.to_string()),
        ("c", expected.c.to_string(), claimed.c.to_string()),
    ];
    for (field, want, got) in metadata {
        if want != got {
            return Ok(Verification::MetadataMismatch {
                field,
                expected: want,
                found: got,
            });
        }
    }

    for tier in Tier::ALL {
        let want = expected.tier(tier);
        let got = claimed.tier(tier);
        for rank in 0..want.len().max(got.len()) {
            let (e, f) = (want.get(rank).copied(), got.get(rank).copied());
            if e != f {
                return Ok(Verification::WinnerMismatch {
                    tier,
                    rank,
                    expected: e,
                    found: f,
                });
            }
        }
    }

    Ok(Verification::Match)
}
