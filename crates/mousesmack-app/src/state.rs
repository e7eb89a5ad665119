//! State shared between the game loop thread and its callers.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use mousesmack_core::commands::PlayerCommand;
use mousesmack_core::state::RoundSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the round controller.
    PlayerCommand(PlayerCommand),
    /// A tap in screen pixels, resolved through the loop's projection.
    ScreenTap { x: f64, y: f64 },
    ToggleMusic,
    ToggleSfx,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<RoundSnapshot>>>;

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
    pub thread: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Send a command; false if the loop has already exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }

    /// Clone of the latest snapshot, if any tick has run.
    pub fn latest(&self) -> Option<RoundSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRound))
            .unwrap();
        tx.send(GameLoopCommand::ScreenTap { x: 10.0, y: 20.0 })
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();

        assert_eq!(
            commands,
            vec![
                GameLoopCommand::PlayerCommand(PlayerCommand::StartRound),
                GameLoopCommand::ScreenTap { x: 10.0, y: 20.0 },
                GameLoopCommand::Shutdown,
            ]
        );
    }
}
