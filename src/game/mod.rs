mod collision;
mod direction;
mod food;
mod grid;
mod sampler;
pub(crate) mod scene;
mod snake;
pub(crate) use self::collision::Outcome;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Grid, GridError};
pub(crate) use self::sampler::GridFull;
pub(crate) use self::snake::TailRule;
use self::food::Food;
use self::grid::Cell;
use self::sampler::sample_safe;
use self::scene::{Background, Banner, Item, Scene, Segment, Sprite};
use self::snake::Snake;
use crate::audio::Audio;
use crate::command::Command;
use crate::theme::Theme;
use crate::util::EnumExt;
use enum_map::EnumMap;
use rand::Rng;
use std::collections::HashSet;

/// The fixed parameters of a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Rules {
    pub(crate) grid: Grid,
    pub(crate) tail_rule: TailRule,
}

/// A game session: one round of play at a time, restartable after game
/// over
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::StdRng> {
    rng: R,
    rules: Rules,
    theme: Theme,
    round: Round,
}

impl<R: Rng> Game<R> {
    /// Start a new game.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the grid has no room to place the fruits & bomb.
    pub(crate) fn new(rules: Rules, theme: Theme, mut rng: R) -> Result<Game<R>, GridFull> {
        let round = Round::new(rules.grid, &mut rng)?;
        log::info!(
            "Starting new game on a {}x{} grid",
            rules.grid.columns(),
            rules.grid.rows()
        );
        Ok(Game {
            rng,
            rules,
            theme,
            round,
        })
    }

    /// Respond to a command from the player
    ///
    /// # Errors
    ///
    /// Returns `Err` if restarting failed for lack of space on the grid.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Result<Reaction, GridFull> {
        match (self.round.status, cmd) {
            (_, Command::Quit) => return Ok(Reaction::Quit),
            (Status::Running, Command::Steer(direction)) => self.steer(direction),
            (Status::Running, Command::CycleTheme) => {
                self.theme = self.theme.next();
                log::debug!("Switched to {} theme", self.theme);
            }
            (Status::GameOver, Command::Restart) => self.restart()?,
            _ => (),
        }
        Ok(Reaction::Continue)
    }

    /// Advance the game by one step, returning what happened.  Returns `None`
    /// if the game is over.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no free cell left to move an eaten fruit or
    /// the bomb to.
    pub(crate) fn tick<A: Audio>(&mut self, audio: &mut A) -> Result<Option<Outcome>, GridFull> {
        if self.round.status != Status::Running {
            return Ok(None);
        }
        let grid = self.rules.grid;
        let round = &mut self.round;
        let direction = round
            .pending
            .take()
            .unwrap_or_else(|| round.snake.direction());
        let candidate = round.snake.propose_head(grid, direction);
        let outcome = collision::resolve(
            &round.snake,
            candidate,
            &round.food,
            round.bomb,
            self.rules.tail_rule,
        );
        if outcome == Outcome::SelfCollision {
            log::info!("Snake ran into itself; final score: {}", round.score);
            round.status = Status::GameOver;
            return Ok(Some(outcome));
        }
        round.snake.commit_move(candidate, direction, outcome.grew());
        let eaten = outcome.eaten();
        // One meal per tick, however many fruits share the cell.
        if let Some(points) = eaten.iter().copied().map(Food::points).max() {
            round.score += points;
            audio.play_eat();
            log::debug!("Ate {eaten:?} at {candidate:?}; score is now {}", round.score);
            for &food in eaten {
                let occupied = round.occupied_except(Some(food), true);
                round.food[food] = sample_safe(grid, &occupied, &mut self.rng)?;
                log::debug!("Moved {food:?} to {:?}", round.food[food]);
            }
            // Any meal also moves the bomb.
            let occupied = round.occupied_except(None, false);
            round.bomb = sample_safe(grid, &occupied, &mut self.rng)?;
            log::debug!("Moved bomb to {:?}", round.bomb);
        }
        if round.snake.head() == round.bomb {
            log::info!("Snake hit the bomb; final score: {}", round.score);
            round.status = Status::GameOver;
        }
        Ok(Some(outcome))
    }

    fn restart(&mut self) -> Result<(), GridFull> {
        self.round = Round::new(self.rules.grid, &mut self.rng)?;
        log::info!("Restarting game");
        Ok(())
    }
}

impl<R> Game<R> {
    pub(crate) fn status(&self) -> Status {
        self.round.status
    }

    pub(crate) fn score(&self) -> u32 {
        self.round.score
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    /// Describe the current state of the game for drawing
    pub(crate) fn scene(&self) -> Scene {
        let round = &self.round;
        let mut items = Food::iter()
            .map(|food| Item {
                cell: round.food[food],
                sprite: food.sprite(),
            })
            .collect::<Vec<_>>();
        items.push(Item {
            cell: round.bomb,
            sprite: Sprite::Bomb,
        });
        let snake = round
            .snake
            .cells()
            .enumerate()
            .map(|(i, cell)| Segment {
                cell,
                color: self.theme.segment_color(i),
            })
            .collect();
        let banner = (round.status == Status::GameOver).then_some(Banner {
            final_score: round.score,
        });
        Scene {
            background: Background::Maze,
            grid: self.rules.grid,
            items,
            snake,
            theme: self.theme,
            score: round.score,
            length: round.snake.len(),
            banner,
        }
    }

    fn steer(&mut self, direction: Direction) {
        if self.round.snake.can_turn(direction) {
            self.round.pending = Some(direction);
        } else {
            log::trace!("Ignoring request to reverse into {direction:?}");
        }
    }
}

/// The state belonging to a single round of play, replaced wholesale on
/// restart
#[derive(Clone, Debug, Eq, PartialEq)]
struct Round {
    snake: Snake,
    /// The direction requested since the last tick, if any
    pending: Option<Direction>,
    food: EnumMap<Food, Cell>,
    bomb: Cell,
    score: u32,
    status: Status,
}

impl Round {
    fn new<R: Rng>(grid: Grid, rng: &mut R) -> Result<Round, GridFull> {
        let snake = Snake::starting(grid);
        let mut occupied = snake.cells().collect::<HashSet<_>>();
        let mut food = EnumMap::<Food, Cell>::default();
        for f in Food::iter() {
            let cell = sample_safe(grid, &occupied, rng)?;
            occupied.insert(cell);
            food[f] = cell;
        }
        let bomb = sample_safe(grid, &occupied, rng)?;
        Ok(Round {
            snake,
            pending: None,
            food,
            bomb,
            score: 0,
            status: Status::Running,
        })
    }

    /// Return the cells occupied by the snake, the fruits other than
    /// `except`, and (if `bomb` is true) the bomb
    fn occupied_except(&self, except: Option<Food>, bomb: bool) -> HashSet<Cell> {
        let mut occupied = self.snake.cells().collect::<HashSet<_>>();
        occupied.extend(
            self.food
                .iter()
                .filter(|&(f, _)| Some(f) != except)
                .map(|(_, &cell)| cell),
        );
        if bomb {
            occupied.insert(self.bomb);
        }
        occupied
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Running,
    GameOver,
}

/// What the caller should do after a command has been handled
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Reaction {
    Continue,
    Quit,
}
