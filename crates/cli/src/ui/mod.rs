//! Terminal output helpers

pub mod icons;

pub use icons::StatusIcon;

/// Horizontal rule used around summaries
#[must_use]
pub fn rule() -> String {
    "─".repeat(60)
}
