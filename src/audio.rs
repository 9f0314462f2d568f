//! Sound effects.  The game only ever asks for one: the "eat" effect, played
//! whenever the snake eats a fruit.
use enum_dispatch::enum_dispatch;
use std::io::{self, Write};

/// Receiver of fire-and-forget sound requests
#[enum_dispatch]
pub(crate) trait Audio {
    /// Play the sound for eating a fruit.  Failures are the implementation's
    /// problem and are never reported back.
    fn play_eat(&mut self);
}

/// Plays nothing
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Mute;

impl Audio for Mute {
    fn play_eat(&mut self) {}
}

/// Rings the terminal bell
#[derive(Debug)]
pub(crate) struct Bell<W> {
    out: W,
}

impl<W: Write> Bell<W> {
    pub(crate) fn new(out: W) -> Bell<W> {
        Bell { out }
    }
}

impl<W: Write> Audio for Bell<W> {
    fn play_eat(&mut self) {
        if let Err(e) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            log::warn!("Failed to ring terminal bell: {e}");
        }
    }
}

/// The audio output selected by the configuration
#[enum_dispatch(Audio)]
#[derive(Debug)]
pub(crate) enum Speaker {
    Bell(Bell<io::Stdout>),
    Mute,
}

impl Speaker {
    pub(crate) fn new(bell: bool) -> Speaker {
        if bell {
            Bell::new(io::stdout()).into()
        } else {
            Mute.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_writes_bel() {
        let mut bell = Bell::new(Vec::new());
        bell.play_eat();
        bell.play_eat();
        assert_eq!(bell.out, b"\x07\x07");
    }

    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn bell_swallows_errors() {
        let mut bell = Bell::new(Broken);
        bell.play_eat();
    }

    #[test]
    fn speaker_selection() {
        assert!(matches!(Speaker::new(false), Speaker::Mute(Mute)));
        assert!(matches!(Speaker::new(true), Speaker::Bell(_)));
        let mut speaker = Speaker::new(false);
        speaker.play_eat();
    }
}
