use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Steer(Direction),
    CycleTheme,
    Restart,
    Quit,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => {
                Some(Command::Steer(Direction::Up))
            }
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                Some(Command::Steer(Direction::Down))
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                Some(Command::Steer(Direction::Left))
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                Some(Command::Steer(Direction::Right))
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('t' | 'T')) => {
                Some(Command::CycleTheme)
            }
            (KeyModifiers::NONE, KeyCode::Char(' ' | 'r')) | (_, KeyCode::Enter) => {
                Some(Command::Restart)
            }
            (KeyModifiers::NONE, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Steer(Direction::Up)))]
    #[case(KeyCode::Char('j'), KeyModifiers::NONE, Some(Command::Steer(Direction::Down)))]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Some(Command::Steer(Direction::Left)))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Command::Steer(Direction::Right)))]
    #[case(KeyCode::Char('t'), KeyModifiers::NONE, Some(Command::CycleTheme))]
    #[case(KeyCode::Char('T'), KeyModifiers::SHIFT, Some(Command::CycleTheme))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Command::Restart))]
    #[case(KeyCode::Enter, KeyModifiers::NONE, Some(Command::Restart))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('w'), KeyModifiers::ALT, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }
}
