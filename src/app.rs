use crate::audio::Speaker;
use crate::command::Command;
use crate::game::{Game, Outcome, Reaction, Status};
use crate::ui::{SpriteSet, View};
use crossterm::event::{poll, read, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};

/// The running program: a game, plus what it needs to talk to the player
#[derive(Debug)]
pub(crate) struct App {
    game: Game,
    speaker: Speaker,
    sprites: SpriteSet,
    tick_period: Duration,
    quitting: bool,
}

impl App {
    pub(crate) fn new(
        game: Game,
        speaker: Speaker,
        sprites: SpriteSet,
        tick_period: Duration,
    ) -> App {
        App {
            game,
            speaker,
            sprites,
            tick_period,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> anyhow::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        log::info!(
            "Quitting with score {} ({} theme)",
            self.game.score(),
            self.game.theme()
        );
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        let scene = self.game.scene();
        let view = View {
            scene: &scene,
            sprites: self.sprites,
        };
        terminal.draw(|frame| frame.render_widget(view, frame.area()))?;
        Ok(())
    }

    fn process_input(&mut self) -> anyhow::Result<()> {
        match self.game.status() {
            // Nothing moves after game over, so just wait for a key.
            Status::GameOver => self.handle_event(read()?),
            Status::Running => self.tick(),
        }
    }

    /// Handle input until the next tick is due, then advance the game
    fn tick(&mut self) -> anyhow::Result<()> {
        let mut wait = self.tick_period;
        loop {
            let now = Instant::now();
            if poll(wait)? {
                self.handle_event(read()?)?;
                if self.quitting {
                    return Ok(());
                }
                wait = wait.saturating_sub(now.elapsed());
            } else {
                break;
            }
        }
        if let Some(outcome) = self.game.tick(&mut self.speaker)? {
            if outcome.is_fatal() || self.game.status() == Status::GameOver {
                log::debug!("Round ended by {outcome:?}");
            } else if outcome != Outcome::Nothing {
                log::trace!("Tick outcome: {outcome:?}");
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> anyhow::Result<()> {
        let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return Ok(());
        };
        if self.game.handle_command(cmd)? == Reaction::Quit {
            self.quitting = true;
        }
        Ok(())
    }
}
