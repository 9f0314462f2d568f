//! Drawing a [`Scene`] in the terminal
use crate::consts;
use crate::game::scene::{Background, Banner, Scene, Sprite};
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Widget},
};
use serde::Deserialize;

/// How fruits & the bomb are drawn
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SpriteSet {
    /// Pictures, for terminals that can show emoji
    #[default]
    Emoji,

    /// Coloured blocks, for everything else
    Blocks,
}

impl SpriteSet {
    fn glyph(self, sprite: Sprite) -> (&'static str, Style) {
        match (self, sprite) {
            (SpriteSet::Emoji, Sprite::Apple) => (consts::APPLE_EMOJI, Style::new()),
            (SpriteSet::Emoji, Sprite::Banana) => (consts::BANANA_EMOJI, Style::new()),
            (SpriteSet::Emoji, Sprite::Bomb) => (consts::BOMB_EMOJI, Style::new()),
            (SpriteSet::Blocks, Sprite::Apple) => {
                (consts::BLOCK_SYMBOL, Style::new().fg(consts::APPLE_COLOR))
            }
            (SpriteSet::Blocks, Sprite::Banana) => {
                (consts::BLOCK_SYMBOL, Style::new().fg(consts::BANANA_COLOR))
            }
            (SpriteSet::Blocks, Sprite::Bomb) => {
                (consts::BLOCK_SYMBOL, Style::new().fg(consts::BOMB_COLOR))
            }
        }
    }
}

/// A scene paired with the sprites to draw it with
#[derive(Clone, Copy, Debug)]
pub(crate) struct View<'a> {
    pub(crate) scene: &'a Scene,
    pub(crate) sprites: SpriteSet,
}

impl Widget for View<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scene = self.scene;
        let display = get_display_area(area);
        let [score_area, board_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}   Length: {}", scene.score, scene.length),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let grid = scene.grid.size();
        let block_size = Size {
            width: grid
                .width
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            height: grid.height.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let field = block_area.inner(Margin::new(1, 1));
        let background = match scene.background {
            Background::Maze => Style::new().bg(consts::BACKGROUND_COLOR),
        };
        buf.set_style(field, background);
        let mut canvas = Canvas {
            area: field,
            background,
            buf,
        };
        for item in &scene.items {
            let (symbol, style) = self.sprites.glyph(item.sprite);
            canvas.draw_cell(item.cell, symbol, style);
        }
        // The snake goes on top of everything else
        for seg in &scene.snake {
            canvas.draw_cell(
                seg.cell,
                consts::BLOCK_SYMBOL,
                Style::new().fg(seg.color),
            );
        }

        if let Some(banner) = scene.banner {
            render_banner(banner, board_area, buf);
        } else {
            Line::from_iter([
                Span::raw(" Press "),
                Span::styled("t", consts::KEY_STYLE),
                Span::raw(format!(" to change theme ({})", scene.theme)),
            ])
            .render(hint_area, buf);
        }
    }
}

/*
 * ┌───────────────────────────────────────┐
 * │              Game Over!               │
 * │           Final Score: 120            │
 * │ Press SPACE to restart or ESC to quit │
 * └───────────────────────────────────────┘
 */
fn render_banner(banner: Banner, area: Rect, buf: &mut Buffer) {
    let width = u16::try_from(Banner::PROMPT.len())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let popup = center_rect(area, Size { width, height: 5 });
    Clear.render(popup, buf);
    let block = Block::bordered();
    let inner = block.inner(popup);
    block.render(popup, buf);
    let lines = [
        Line::styled(Banner::TITLE, consts::GAME_OVER_STYLE),
        Line::raw(banner.score_line()),
        Line::raw(Banner::PROMPT),
    ];
    for (line, row) in lines.into_iter().zip(inner.rows()) {
        line.centered().render(row, buf);
    }
}

/// The playing field, addressed in grid cells
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    background: Style,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if x.saturating_add(consts::CELL_WIDTH) > self.area.right() || y >= self.area.bottom() {
            return;
        }
        self.buf
            .set_string(x, y, symbol, self.background.patch(style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scene::{Item, Segment};
    use crate::game::Grid;
    use crate::theme::Theme;
    use ratatui::style::Color;

    const PINK: Color = Color::Rgb(255, 105, 180);

    fn scene() -> Scene {
        Scene {
            background: Background::Maze,
            grid: Grid::from_screen(120, 80, 20).unwrap(),
            items: vec![
                Item {
                    cell: Position::new(4, 0),
                    sprite: Sprite::Apple,
                },
                Item {
                    cell: Position::new(5, 2),
                    sprite: Sprite::Banana,
                },
                Item {
                    cell: Position::new(3, 3),
                    sprite: Sprite::Bomb,
                },
            ],
            snake: [(2, 1), (1, 1), (0, 1)]
                .into_iter()
                .map(|p| Segment {
                    cell: Position::from(p),
                    color: PINK,
                })
                .collect(),
            theme: Theme::Pink,
            score: 0,
            length: 3,
            banner: None,
        }
    }

    fn board_row(inner: &str) -> String {
        format!("{:33}{inner}{:33}", "", "")
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn running() {
        let scene = scene();
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        View {
            scene: &scene,
            sprites: SpriteSet::Blocks,
        }
        .render(area, &mut buffer);
        let mut lines = vec![String::from(" Score: 0   Length: 3")];
        lines.extend(std::iter::repeat_n(String::new(), 8));
        lines.push(board_row("┌────────────┐"));
        lines.push(board_row("│        ██  │"));
        lines.push(board_row("│██████      │"));
        lines.push(board_row("│          ██│"));
        lines.push(board_row("│      ██    │"));
        lines.push(board_row("└────────────┘"));
        lines.extend(std::iter::repeat_n(String::new(), 8));
        lines.push(String::from(" Press t to change theme (pink)"));
        let mut expected = Buffer::with_lines(lines);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(
            Rect::new(34, 10, 12, 4),
            Style::new().bg(consts::BACKGROUND_COLOR),
        );
        expected.set_style(Rect::new(42, 10, 2, 1), Style::new().fg(consts::APPLE_COLOR));
        expected.set_style(Rect::new(44, 12, 2, 1), Style::new().fg(consts::BANANA_COLOR));
        expected.set_style(Rect::new(40, 13, 2, 1), Style::new().fg(consts::BOMB_COLOR));
        expected.set_style(Rect::new(34, 11, 6, 1), Style::new().fg(PINK));
        expected.set_style(Rect::new(7, 23, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn rainbow_segments() {
        let mut scene = scene();
        let colors = [
            Theme::Rainbow.segment_color(0),
            Theme::Rainbow.segment_color(1),
            Theme::Rainbow.segment_color(2),
        ];
        for (seg, color) in scene.snake.iter_mut().zip(colors) {
            seg.color = color;
        }
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        View {
            scene: &scene,
            sprites: SpriteSet::Blocks,
        }
        .render(area, &mut buffer);
        // Head is at grid column 2, drawn at terminal columns 38-39.
        assert_eq!(buffer[(38, 11)].fg, colors[0]);
        assert_eq!(buffer[(39, 11)].fg, colors[0]);
        assert_eq!(buffer[(36, 11)].fg, colors[1]);
        assert_eq!(buffer[(34, 11)].fg, colors[2]);
        assert_eq!(buffer[(34, 11)].bg, consts::BACKGROUND_COLOR);
    }

    #[test]
    fn emoji_sprites() {
        let scene = scene();
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        View {
            scene: &scene,
            sprites: SpriteSet::Emoji,
        }
        .render(area, &mut buffer);
        assert_eq!(buffer[(42, 10)].symbol(), consts::APPLE_EMOJI);
        assert_eq!(buffer[(44, 12)].symbol(), consts::BANANA_EMOJI);
        assert_eq!(buffer[(40, 13)].symbol(), consts::BOMB_EMOJI);
    }

    #[test]
    fn game_over() {
        let mut scene = scene();
        scene.score = 120;
        scene.banner = Some(Banner { final_score: 120 });
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        View {
            scene: &scene,
            sprites: SpriteSet::Blocks,
        }
        .render(area, &mut buffer);
        let rows = (0..24).map(|y| row_text(&buffer, y)).collect::<Vec<_>>();
        assert!(rows[0].starts_with(" Score: 120   Length: 3"));
        for text in ["Game Over!", "Final Score: 120", Banner::PROMPT] {
            assert!(
                rows.iter().any(|r| r.contains(text)),
                "{text:?} not drawn"
            );
        }
        assert!(!rows[23].contains("change theme"));
    }

    #[test]
    fn largest_grid_fits() {
        let mut scene = scene();
        scene.grid = Grid::from_screen(
            consts::MAX_GRID_COLUMNS * 20,
            consts::MAX_GRID_ROWS * 20,
            20,
        )
        .unwrap();
        scene.items.clear();
        scene.snake = [(0, 0), (38, 19)]
            .into_iter()
            .map(|p| Segment {
                cell: Position::from(p),
                color: PINK,
            })
            .collect();
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        View {
            scene: &scene,
            sprites: SpriteSet::Blocks,
        }
        .render(area, &mut buffer);
        assert_eq!(buffer[(1, 2)].symbol(), "█");
        assert_eq!(buffer[(1, 2)].fg, PINK);
        assert_eq!(buffer[(78, 21)].symbol(), "█");
        assert_eq!(buffer[(78, 21)].fg, PINK);
        assert_eq!(row_text(&buffer, 1), format!("┌{}┐", "─".repeat(78)));
        assert_eq!(row_text(&buffer, 22), format!("└{}┘", "─".repeat(78)));
        assert!(row_text(&buffer, 0).starts_with(" Score: 0"));
        assert!(row_text(&buffer, 23).contains("change theme"));
    }

    #[test]
    fn cells_outside_field_are_skipped() {
        let mut scene = scene();
        scene.items.push(Item {
            cell: Position::new(6, 0),
            sprite: Sprite::Apple,
        });
        scene.items.push(Item {
            cell: Position::new(0, 4),
            sprite: Sprite::Apple,
        });
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        View {
            scene: &scene,
            sprites: SpriteSet::Blocks,
        }
        .render(area, &mut buffer);
        assert_eq!(row_text(&buffer, 10), board_row("│        ██  │"));
        assert_eq!(row_text(&buffer, 14), board_row("└────────────┘"));
    }
}
