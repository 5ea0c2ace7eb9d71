//! Dismissible notices handed to the view layer.

/// A destructive-styled toast; dismissing it has no effect on stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Notice shown when the remote task load fails.
    pub fn task_load_failed() -> Self {
        Self::new(
            "Error Loading Tasks",
            "Could not load your tasks. Please try again later.",
        )
    }
}
