/// The direction for the whole robot to go.
///
/// Rotations are tank-style, with the pairs moving in opposite directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChassisDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// The direction for a single motor pair to go.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PairDirection {
    Forward,
    Backward,
}

impl ChassisDirection {
    /// Directions of pair A (left) and pair B (right) that produce this motion.
    pub fn pair_directions(self) -> (PairDirection, PairDirection) {
        match self {
            ChassisDirection::Forward => (PairDirection::Forward, PairDirection::Forward),
            ChassisDirection::Backward => (PairDirection::Backward, PairDirection::Backward),
            ChassisDirection::Left => (PairDirection::Backward, PairDirection::Forward),
            ChassisDirection::Right => (PairDirection::Forward, PairDirection::Backward),
        }
    }
}

impl PairDirection {
    /// Level of the first direction pin of a pair, given which level means "forward" for it.
    pub(crate) fn first_pin_high(self, forward_is_high: bool) -> bool {
        match self {
            PairDirection::Forward => forward_is_high,
            PairDirection::Backward => !forward_is_high,
        }
    }
}
