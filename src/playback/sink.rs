use async_trait::async_trait;
use std::path::PathBuf;
use tokio::{fs, process::Command};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("failed to play audio: {0}")]
    Io(#[from] std::io::Error),
    #[error("player exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// Plays one audio payload; resolves when playback has finished
#[async_trait]
pub trait AudioSink: Send + Sync {
    async fn play(&self, audio: &[u8]) -> Result<(), PlaybackError>;
}

/// Plays MP3 audio by handing a transient file to an external player.
/// The file lives only for the duration of one playback and is removed
/// whether or not the player succeeds.
pub struct CommandAudioSink {
    player: String,
    scratch_dir: PathBuf,
}

impl CommandAudioSink {
    pub fn new() -> Self {
        Self::with_player("mpg123")
    }

    pub fn with_player(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            scratch_dir: std::env::temp_dir(),
        }
    }

    /// Write transient files somewhere other than the system temp dir
    pub fn scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    fn transient_path(&self) -> PathBuf {
        self.scratch_dir.join(format!("percepta-{}.mp3", Uuid::new_v4()))
    }
}

impl Default for CommandAudioSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioSink for CommandAudioSink {
    async fn play(&self, audio: &[u8]) -> Result<(), PlaybackError> {
        let path = self.transient_path();
        fs::write(&path, audio).await?;

        let status = Command::new(&self.player)
            .arg("-q")
            .arg(&path)
            .status()
            .await;

        // The transient file must not outlive playback, success or not
        if let Err(err) = fs::remove_file(&path).await {
            tracing::warn!(
                error = %err,
                path = %path.display(),
                "failed to remove transient audio file"
            );
        }

        let status = status?;
        if !status.success() {
            return Err(PlaybackError::Failed(status));
        }

        Ok(())
    }
}
