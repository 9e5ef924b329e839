//! Pipeline action definitions.

/// One step of a generator run.
///
/// Path and template fields may contain `{{placeholders}}`; relative paths
/// resolve against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Download the puzzle input into the context's `input` key.
    Fetch,

    /// Render every template under `template_root` matching `glob` into
    /// `destination`, keeping the relative layout.
    BulkTemplateCopy {
        template_root: String,
        glob: String,
        destination: String,
    },

    /// Render one inline template to `path`.
    SingleTemplateWrite { path: String, template: String },

    /// Insert the rendered template after the `anchor` line of `path`.
    Append {
        path: String,
        anchor: String,
        template: String,
        deduplicate: bool,
    },

    /// Produce a final informational line. No side effects.
    Message { template: String },
}

impl Action {
    /// Short name used in reports and log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fetch => "fetch",
            Action::BulkTemplateCopy { .. } => "add-many",
            Action::SingleTemplateWrite { .. } => "add",
            Action::Append { .. } => "append",
            Action::Message { .. } => "message",
        }
    }

    /// Whether the action writes to the filesystem.
    pub fn writes_files(&self) -> bool {
        matches!(
            self,
            Action::BulkTemplateCopy { .. }
                | Action::SingleTemplateWrite { .. }
                | Action::Append { .. }
        )
    }
}
