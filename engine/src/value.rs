/// Result of a game from the perspective of one player.
///
/// `Ongoing` means the state was evaluated and nobody has won yet. A draw is a
/// terminal outcome whose value is exactly zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Scalar value of the outcome in `[-1, 1]`.
    pub fn value(&self) -> f32 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Loss => -1.0,
            Outcome::Draw | Outcome::Ongoing => 0.0,
        }
    }

    /// The same outcome seen by the other player.
    pub fn reversed(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            other => *other,
        }
    }
}
