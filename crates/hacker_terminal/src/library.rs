use command_catalog as catalog;
use playback_engine::TaskRoutine;

use crate::app::PlaybackRequest;

/// Source of playback routines, injected into the runtime so tests can
/// substitute scripted fakes for the canned catalog.
pub trait PlaybackLibrary: Send + Sync + 'static {
    fn routine(&self, request: PlaybackRequest) -> Result<Box<dyn TaskRoutine>, String>;
}

/// Production library backed by the canned command catalog.
#[derive(Debug, Default)]
pub struct CommandLibrary;

impl PlaybackLibrary for CommandLibrary {
    fn routine(&self, request: PlaybackRequest) -> Result<Box<dyn TaskRoutine>, String> {
        let spec = match request {
            PlaybackRequest::Console(kind) => catalog::console_playback(kind),
            PlaybackRequest::ScanSweep => catalog::scan_sweep_playback(),
            PlaybackRequest::DecryptFile(_) => catalog::decrypt_file_playback(),
            PlaybackRequest::FirewallBreach => catalog::firewall_playback(),
            PlaybackRequest::Lookup(kind) => catalog::lookup_playback(kind),
        };
        spec.map(|spec| Box::new(spec) as Box<dyn TaskRoutine>)
            .map_err(|error| error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use command_catalog::CommandKind;

    use super::*;

    #[test]
    fn every_request_resolves_to_a_routine() {
        let library = CommandLibrary;
        for kind in CommandKind::ALL {
            assert!(library.routine(PlaybackRequest::Console(kind)).is_ok());
        }
        assert!(library.routine(PlaybackRequest::ScanSweep).is_ok());
        assert!(library.routine(PlaybackRequest::DecryptFile(2)).is_ok());
        assert!(library.routine(PlaybackRequest::FirewallBreach).is_ok());
        assert!(library
            .routine(PlaybackRequest::Lookup(CommandKind::Trace))
            .is_ok());
    }
}
