use super::scene::Sprite;
use crate::consts;
use enum_map::Enum;

/// The kinds of fruit on the board.  There is always exactly one of each.
#[derive(Clone, Copy, Debug, Enum, Eq, Hash, PartialEq)]
pub(crate) enum Food {
    Apple,
    Banana,
}

impl Food {
    /// Points awarded for eating this food
    pub(crate) fn points(self) -> u32 {
        match self {
            Food::Apple | Food::Banana => consts::FOOD_POINTS,
        }
    }

    pub(crate) fn sprite(self) -> Sprite {
        match self {
            Food::Apple => Sprite::Apple,
            Food::Banana => Sprite::Banana,
        }
    }
}
