//! Terminal styles for dfmanager output, built on `owo_colors::Style`.

use owo_colors::Style;

/// The styles each kind of dfmanager output is printed with.
///
/// `Styles::default()` is the plain variant: every style is a no-op, so the
/// same rendering code serves pipes, `--no-color` and `NO_COLOR`.
#[derive(Default, Clone)]
pub struct Styles {
    /// `✓` marker after a finished archive or entity operation.
    pub success: Style,
    /// `⚠` marker, e.g. a declined restore.
    pub warning: Style,
    /// Section title of `config show`.
    pub title: Style,
    /// Column headings of the entity-type table and label lines.
    pub column: Style,
    /// Entity-type kind (`map`, `list`, `regexp`).
    pub kind: Style,
    /// Resource IDs and other secondary text.
    pub resource: Style,
}

impl Styles {
    /// The colored variant used on a terminal.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            title: Style::new().bold().cyan(),
            column: Style::new().bold(),
            kind: Style::new().magenta(),
            resource: Style::new().dimmed(),
        }
    }

    /// Colored when `enabled`, plain otherwise.
    #[must_use]
    pub fn for_terminal(enabled: bool) -> Self {
        if enabled {
            Self::colored()
        } else {
            Self::default()
        }
    }
}
