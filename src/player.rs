//! External player process management.
//!
//! Review playback hands the file to an external player (VLC by default)
//! instead of decoding in-process. The [`Player`] guard owns the child for
//! its whole lifetime: output is discarded at spawn time and the process is
//! killed when the guard goes out of scope, on every exit path.

use std::path::Path;
use std::process::{Child, Command, Stdio};

use tracing::debug;

use crate::config::PlayerSettings;
use crate::error::Result;

/// A running external player.
///
/// Termination is best-effort by contract: dropping the guard fires a kill
/// signal without blocking on the child's exit, and a failure to deliver it
/// (the player may have exited on its own) is ignored. The child's
/// redirected output handles close with it.
pub struct Player {
    child: Child,
}

impl Player {
    /// Launch the configured player against `path`, discarding its output.
    pub fn launch(path: &Path, settings: &PlayerSettings) -> Result<Player> {
        let child = Command::new(&settings.command)
            .args(&settings.args)
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        debug!(pid = child.id(), command = %settings.command, "player launched");
        Ok(Player { child })
    }

    /// OS process id of the running player.
    pub fn id(&self) -> u32 {
        self.child.id()
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        let _ = self.child.kill();
        debug!(pid = self.child.id(), "player terminated");
    }
}
