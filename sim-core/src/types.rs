use rand::Rng;

/// The three particle kinds of the rock–paper–scissors cycle.
///
/// The set is closed: every particle is exactly one of these at all
/// times, and dominance is resolved by exhaustive matching rather
/// than by comparing labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Rock,
    Paper,
    Scissors,
}

/// Result of a dominance fight between two kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Same kind on both sides; nobody converts.
    Tie,
    /// The first kind converts the second.
    FirstWins,
    /// The second kind converts the first.
    SecondWins,
}

impl ParticleKind {
    /// All kinds, in a fixed order (used for spawning and count display).
    pub const ALL: [ParticleKind; 3] = [
        ParticleKind::Rock,
        ParticleKind::Paper,
        ParticleKind::Scissors,
    ];

    /// The kind this kind beats: Rock → Scissors → Paper → Rock.
    pub fn beats(self) -> ParticleKind {
        match self {
            ParticleKind::Rock => ParticleKind::Scissors,
            ParticleKind::Scissors => ParticleKind::Paper,
            ParticleKind::Paper => ParticleKind::Rock,
        }
    }

    /// Resolves a fight between `self` and `other`.
    ///
    /// Antisymmetric and cyclic: a kind never beats itself, and for
    /// distinct kinds exactly one side wins.
    pub fn fight(self, other: ParticleKind) -> Outcome {
        if self == other {
            Outcome::Tie
        } else if self.beats() == other {
            Outcome::FirstWins
        } else {
            Outcome::SecondWins
        }
    }

    /// Samples a kind uniformly at random.
    pub fn sample(rng: &mut impl Rng) -> ParticleKind {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}
