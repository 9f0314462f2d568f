//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Default number of snake movements per second
pub(crate) const DEFAULT_TICK_RATE: u32 = 8;

/// Default width of the playing field in pixels
pub(crate) const DEFAULT_SCREEN_WIDTH: u16 = 600;

/// Default height of the playing field in pixels
pub(crate) const DEFAULT_SCREEN_HEIGHT: u16 = 400;

/// Default edge length of a grid cell in pixels
pub(crate) const DEFAULT_BLOCK: u16 = 20;

/// Pixel positions of the snake's cells at the start of a game, head first
pub(crate) const START_BODY_PIXELS: [(u16, u16); 3] = [(100, 40), (80, 40), (60, 40)];

/// Points awarded for each fruit eaten
pub(crate) const FOOD_POINTS: u32 = 10;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of terminal columns used to draw one grid cell, so that cells come
/// out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Widest grid that fits inside the board's border in the display area
pub(crate) const MAX_GRID_COLUMNS: u16 = (DISPLAY_SIZE.width - 2) / CELL_WIDTH;

/// Tallest grid that fits between the score bar & the hint line, inside the
/// board's border
pub(crate) const MAX_GRID_ROWS: u16 = DISPLAY_SIZE.height - 4;

/// Glyph for a snake segment and for the fallback fruit & bomb sprites
pub(crate) const BLOCK_SYMBOL: &str = "██";

pub(crate) const APPLE_EMOJI: &str = "🍎";

pub(crate) const BANANA_EMOJI: &str = "🍌";

pub(crate) const BOMB_EMOJI: &str = "💣";

/// Colour of the field the game is played on
pub(crate) const BACKGROUND_COLOR: Color = Color::Rgb(50, 50, 50);

pub(crate) const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);

pub(crate) const BANANA_COLOR: Color = Color::Rgb(255, 255, 0);

pub(crate) const BOMB_COLOR: Color = Color::Rgb(0, 0, 0);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the "Game Over!" title
pub(crate) const GAME_OVER_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
