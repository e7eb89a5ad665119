//! Text HUD: score and time labels, and the game over panel.

use mousesmack_core::state::RoundSnapshot;

pub fn score_label(score: i64) -> String {
    format!("Score {score}")
}

pub fn time_label(display_seconds: u32) -> String {
    format!("Time {display_seconds}")
}

pub fn game_over_text(final_score: i64) -> String {
    format!("Game Over\nScore: {final_score}")
}

/// Logs the HUD whenever a visible value changes.
#[derive(Debug, Default)]
pub struct TextDisplay {
    last_shown: Option<(i64, u32)>,
    game_over_shown: bool,
}

impl TextDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one snapshot. Returns the lines that changed, for callers that print.
    pub fn render(&mut self, snapshot: &RoundSnapshot) -> Vec<String> {
        let mut lines = Vec::new();

        let shown = (snapshot.score, snapshot.display_seconds);
        if self.last_shown != Some(shown) {
            self.last_shown = Some(shown);
            let hud = format!(
                "{}  {}",
                score_label(snapshot.score),
                time_label(snapshot.display_seconds)
            );
            tracing::debug!(targets = snapshot.targets.len(), "{hud}");
            lines.push(hud);
        }

        match snapshot.final_score {
            Some(final_score) if !self.game_over_shown => {
                self.game_over_shown = true;
                let text = game_over_text(final_score);
                tracing::info!("{}", text.replace('\n', " | "));
                lines.push(text);
            }
            None => self.game_over_shown = false,
            _ => {}
        }
        lines
    }
}
