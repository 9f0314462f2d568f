use super::food::Food;
use super::grid::Cell;
use super::snake::{Snake, TailRule};
use enum_map::EnumMap;

/// What happens when the snake's head moves to a given cell
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The snake ran into itself
    SelfCollision,

    /// The snake ran into the bomb
    HazardHit,

    AteApple,

    AteBanana,

    /// The apple & banana were on the same cell and were both eaten
    AteBoth,

    /// The snake moved into an empty cell
    Nothing,
}

impl Outcome {
    /// Return the foods eaten on this tick
    pub(crate) fn eaten(self) -> &'static [Food] {
        match self {
            Outcome::AteApple => &[Food::Apple],
            Outcome::AteBanana => &[Food::Banana],
            Outcome::AteBoth => &[Food::Apple, Food::Banana],
            Outcome::SelfCollision | Outcome::HazardHit | Outcome::Nothing => &[],
        }
    }

    /// Returns `true` if the snake gets longer on this tick
    pub(crate) fn grew(self) -> bool {
        !self.eaten().is_empty()
    }

    pub(crate) fn is_fatal(self) -> bool {
        matches!(self, Outcome::SelfCollision | Outcome::HazardHit)
    }
}

/// Classify the result of moving the snake's head to `candidate`.
///
/// Self-collision is checked first, against the body as it is before the
/// move, and takes precedence over everything else.  The bomb only counts
/// when no food is eaten, because eating relocates the bomb before contact
/// with it is checked.
pub(crate) fn resolve(
    snake: &Snake,
    candidate: Cell,
    food: &EnumMap<Food, Cell>,
    hazard: Cell,
    rule: TailRule,
) -> Outcome {
    let ate_apple = candidate == food[Food::Apple];
    let ate_banana = candidate == food[Food::Banana];
    if snake.would_self_collide(candidate, ate_apple || ate_banana, rule) {
        return Outcome::SelfCollision;
    }
    match (ate_apple, ate_banana) {
        (true, true) => Outcome::AteBoth,
        (true, false) => Outcome::AteApple,
        (false, true) => Outcome::AteBanana,
        (false, false) if candidate == hazard => Outcome::HazardHit,
        (false, false) => Outcome::Nothing,
    }
}
