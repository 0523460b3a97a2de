use std::io::{self, Write};

/// Audio feedback moments recognised by the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// A console line was revealed.
    Typing,
    /// A command finished.
    Success,
    /// A command failed or input was rejected.
    Error,
    /// A command or screen switch was accepted.
    Click,
}

/// Terminal bell mapping. Only the high-salience cues ring; typing and
/// click cues would turn every frame into noise.
fn bell_for(cue: SoundCue) -> Option<&'static str> {
    match cue {
        SoundCue::Success | SoundCue::Error => Some("\x07"),
        SoundCue::Typing | SoundCue::Click => None,
    }
}

#[derive(Debug)]
pub struct SoundPlayer {
    enabled: bool,
}

impl SoundPlayer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn play(&self, cue: SoundCue) {
        if !self.enabled {
            return;
        }
        if let Some(bell) = bell_for(cue) {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(bell.as_bytes());
            let _ = stdout.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_terminal_outcomes_ring_the_bell() {
        assert_eq!(bell_for(SoundCue::Success), Some("\x07"));
        assert_eq!(bell_for(SoundCue::Error), Some("\x07"));
        assert_eq!(bell_for(SoundCue::Typing), None);
        assert_eq!(bell_for(SoundCue::Click), None);
    }

    #[test]
    fn disabled_player_is_a_noop() {
        let player = SoundPlayer::new(false);
        player.play(SoundCue::Success);
        player.play(SoundCue::Error);
    }
}
