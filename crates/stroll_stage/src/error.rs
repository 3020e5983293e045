//! Error types for the stage system

use thiserror::Error;

/// Campaign configuration errors, all fatal at startup.
///
/// A campaign that references a missing successor or scene must fail fast
/// rather than degrade silently mid-game.
#[derive(Debug, Clone, Error)]
pub enum CampaignError {
    /// Campaign has no stages at all
    #[error("campaign has no stages")]
    Empty,

    /// Two stages share an id
    #[error("duplicate stage id: {0}")]
    DuplicateStage(String),

    /// A stage names a successor that does not exist
    #[error("stage '{stage}' names unknown successor '{successor}'")]
    UnknownSuccessor { stage: String, successor: String },

    /// A stage references a scene the world does not know
    #[error("stage '{stage}' references unknown scene '{scene}'")]
    UnknownScene { stage: String, scene: String },

    /// A stage cannot be completed without collectibles
    #[error("stage '{0}' has a zero collectible target")]
    ZeroTarget(String),

    /// Spawn region is inverted or degenerate
    #[error("stage '{0}' has an invalid spawn region")]
    InvalidRegion(String),

    /// Quiz gate has no options or an out-of-range answer
    #[error("stage '{0}' has a malformed quiz gate")]
    InvalidQuiz(String),

    /// Timed show gate would finish instantly
    #[error("stage '{0}' has a non-positive show duration")]
    InvalidShow(String),
}

/// Runtime stage errors
#[derive(Debug, Clone, Error)]
pub enum StageError {
    /// A transition targeted a stage id the campaign does not contain
    #[error("unknown stage: {0}")]
    UnknownStage(String),

    #[error(transparent)]
    Campaign(#[from] CampaignError),

    #[error(transparent)]
    World(#[from] stroll_world::WorldError),
}

/// Result type for stage operations
pub type Result<T> = std::result::Result<T, StageError>;
