//! HUD status line

/// Format seconds as `m:ss`
pub fn format_time(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{}:{:02}", total / 60, total % 60)
}

/// The data behind the single-line HUD
#[derive(Debug, Clone, Default)]
pub struct HudModel {
    /// Current stage display name
    pub stage_name: String,
    /// Collectibles picked up this stage
    pub collected: u32,
    /// Stage collectible target
    pub target: u32,
    /// Seconds spent in the stage, excluding paused spans
    pub stage_time: f32,
}

impl HudModel {
    /// Reset for a fresh stage
    pub fn reset(&mut self, stage_name: impl Into<String>, target: u32) {
        self.stage_name = stage_name.into();
        self.collected = 0;
        self.target = target;
        self.stage_time = 0.0;
    }

    /// Render the status line
    pub fn status_line(&self) -> String {
        format!(
            "{} | {}/{} | {}",
            self.stage_name,
            self.collected,
            self.target,
            format_time(self.stage_time)
        )
    }
}
