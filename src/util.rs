use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Helpers for the fieldless enums that derive [`Enum`]
pub(crate) trait EnumExt: Enum + Sized {
    /// Iterate over all variants in declaration order
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    /// Return the variant after `self`, wrapping around to the first variant
    /// after the last one
    fn next_cyclic(self) -> Self {
        Self::from_usize((self.into_usize() + 1) % Self::LENGTH)
    }
}

impl<T: Enum> EnumExt for T {}

/// Return a rectangle of (at most) the given size centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}
