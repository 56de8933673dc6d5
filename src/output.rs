//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::Species;

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Species {
    fn pretty_print(&self) -> String {
        let header = format!("Species #{}", self.id);
        let divider = "─".repeat(header.chars().count().max(30));

        let lines = [
            header,
            divider,
            format!("Name:           {}", self.display_name()),
            format!("Catalog name:   {}", self.name),
            format!("Image:          {}", self.image_url),
        ];

        lines.join("\n")
    }
}
