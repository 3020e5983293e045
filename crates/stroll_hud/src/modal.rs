//! Modal dialogs

use serde::{Deserialize, Serialize};

/// A blocking dialog with a single action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modal {
    /// Title text
    pub title: String,
    /// Body text
    pub body: String,
    /// Label on the action button
    pub action_label: String,
}

impl Modal {
    /// Create a new modal
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        action_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            action_label: action_label.into(),
        }
    }
}
