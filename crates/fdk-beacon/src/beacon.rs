use fdk_core::Round;

/// One beacon publication: a round number and its verified randomness.
///
/// Rounds increase monotonically over the beacon's lifetime and are strictly
/// positive; the randomness is an opaque already-verified digest (32 bytes
/// for drand-style beacons, though nothing downstream depends on the exact
/// length). Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beacon {
    pub round: Round,
    pub randomness: Vec<u8>,
}

impl Beacon {
    pub fn new(round: Round, randomness: Vec<u8>) -> Self {
        Self { round, randomness }
    }
}

impl std::fmt::Display for Beacon {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "round {} ({} bytes)", self.round, self.randomness.len())
    }
}
