//! Status markers for terminal output

/// Status markers printed in front of messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Success,
    Warning,
    Info,
}

impl StatusIcon {
    /// Marker text
    #[must_use]
    pub fn get(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }
}
