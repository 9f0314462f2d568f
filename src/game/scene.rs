//! The description of a frame that the game hands over to be drawn
use super::grid::{Cell, Grid};
use crate::theme::Theme;
use ratatui::style::Color;

/// Everything needed to draw one frame, listed in drawing order
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Scene {
    pub(crate) background: Background,
    pub(crate) grid: Grid,
    /// Fruits & the bomb
    pub(crate) items: Vec<Item>,
    /// The snake's cells from head to tail
    pub(crate) snake: Vec<Segment>,
    pub(crate) theme: Theme,
    pub(crate) score: u32,
    pub(crate) length: usize,
    /// Present once the game is over
    pub(crate) banner: Option<Banner>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Background {
    Maze,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Sprite {
    Apple,
    Banana,
    Bomb,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Item {
    pub(crate) cell: Cell,
    pub(crate) sprite: Sprite,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Segment {
    pub(crate) cell: Cell,
    pub(crate) color: Color,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Banner {
    pub(crate) final_score: u32,
}

impl Banner {
    pub(crate) const TITLE: &'static str = "Game Over!";
    pub(crate) const PROMPT: &'static str = "Press SPACE to restart or ESC to quit";

    pub(crate) fn score_line(self) -> String {
        format!("Final Score: {}", self.final_score)
    }
}
