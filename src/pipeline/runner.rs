//! Sequential action execution.

use super::action::Action;
use super::report::{PipelineReport, StepResult};
use crate::context::Context;
use crate::error::{Result, ScaffoldError};
use crate::fetch::InputSource;
use crate::fs::{AppendOutcome, WriteOutcome, append_after_anchor, create_file};
use crate::template::{collect_templates, render, render_path, unresolved};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// An ordered list of actions bound to a project root and an input source.
pub struct Pipeline<'a> {
    root: PathBuf,
    actions: Vec<Action>,
    source: &'a dyn InputSource,
    overwrite: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(root: impl Into<PathBuf>, actions: Vec<Action>, source: &'a dyn InputSource) -> Self {
        Self {
            root: root.into(),
            actions,
            source,
            overwrite: false,
        }
    }

    /// Allow create-mode writes to replace existing files.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Run every action in order against `ctx`.
    ///
    /// Stops at the first error. Actions after the failing one are reported
    /// as not run; work done by earlier actions is left in place.
    pub async fn run(&self, mut ctx: Context) -> PipelineReport {
        let mut steps = Vec::with_capacity(self.actions.len());
        let mut failure = None;

        for (index, action) in self.actions.iter().enumerate() {
            if failure.is_some() {
                steps.push(StepResult::not_run(action.label()));
                continue;
            }

            debug!(index, kind = action.label(), "running action");
            match self.execute(action, &mut ctx).await {
                Ok(step) => {
                    info!(index, kind = action.label(), status = %step.status, "{}", step.message);
                    steps.push(step);
                }
                Err(err) => {
                    error!(index, kind = action.label(), error = %err, "action failed, aborting");
                    steps.push(StepResult::failed(action.label(), err.to_string()));
                    failure = Some(err);
                }
            }
        }

        PipelineReport {
            steps,
            context: ctx,
            failure,
        }
    }

    async fn execute(&self, action: &Action, ctx: &mut Context) -> Result<StepResult> {
        match action {
            Action::Fetch => self.fetch(ctx).await,
            Action::BulkTemplateCopy {
                template_root,
                glob,
                destination,
            } => self.bulk_copy(ctx, template_root, glob, destination),
            Action::SingleTemplateWrite { path, template } => {
                self.single_write(ctx, path, template)
            }
            Action::Append {
                path,
                anchor,
                template,
                deduplicate,
            } => self.append(ctx, path, anchor, template, *deduplicate),
            Action::Message { template } => {
                warn_unresolved(template, ctx);
                Ok(StepResult::done(action.label(), render(template, ctx)))
            }
        }
    }

    async fn fetch(&self, ctx: &mut Context) -> Result<StepResult> {
        let year = ctx.year().unwrap_or_default();
        let input = self
            .source
            .fetch_input(&year, ctx.day_raw(), ctx.credential())
            .await?;
        ctx.set_input(input);
        Ok(StepResult::done("fetch", "Downloaded Puzzle Input!"))
    }

    fn bulk_copy(
        &self,
        ctx: &Context,
        template_root: &str,
        glob: &str,
        destination: &str,
    ) -> Result<StepResult> {
        let templates = collect_templates(&self.root.join(template_root), glob)?;
        let dest_rel = render_path(destination, ctx);
        let dest_dir = self.root.join(&dest_rel);

        if templates.is_empty() {
            warn!(template_root, glob, "no templates matched");
            return Ok(StepResult::skipped(
                "add-many",
                format!("No templates in {} matched '{}'", template_root, glob),
            ));
        }

        let mut rendered = Vec::with_capacity(templates.len());
        let mut sources: BTreeMap<PathBuf, &Path> = BTreeMap::new();
        for template in &templates {
            let relative = render_path(&template.relative.to_string_lossy(), ctx);
            let target = dest_dir.join(relative);
            if let Some(first) = sources.insert(target.clone(), template.source.as_path()) {
                return Err(ScaffoldError::Config(format!(
                    "templates '{}' and '{}' both render to '{}'",
                    first.display(),
                    template.source.display(),
                    target.display()
                )));
            }
            let body = template.read()?;
            warn_unresolved(&body, ctx);
            rendered.push((target, render(&body, ctx)));
        }

        // Check every destination up front so a conflict writes nothing.
        if !self.overwrite
            && let Some((existing, _)) = rendered.iter().find(|(path, _)| path.exists())
        {
            return Err(ScaffoldError::FileExists(existing.clone()));
        }

        for (path, content) in &rendered {
            let outcome = create_file(path, content, self.overwrite)?;
            if outcome == WriteOutcome::Overwritten {
                warn!(path = %path.display(), "overwrote existing file");
            }
        }

        Ok(StepResult::done(
            "add-many",
            format!("Added {} files to {}", rendered.len(), dest_rel.display()),
        ))
    }

    fn single_write(&self, ctx: &Context, path: &str, template: &str) -> Result<StepResult> {
        let rel = render_path(path, ctx);
        warn_unresolved(template, ctx);
        let content = render(template, ctx);

        let outcome = create_file(&self.root.join(&rel), &content, self.overwrite)?;
        let verb = match outcome {
            WriteOutcome::Created => "Added",
            WriteOutcome::Overwritten => "Overwrote",
        };

        Ok(StepResult::done("add", format!("{} {}", verb, rel.display())))
    }

    fn append(
        &self,
        ctx: &Context,
        path: &str,
        anchor: &str,
        template: &str,
        deduplicate: bool,
    ) -> Result<StepResult> {
        let rel = render_path(path, ctx);
        let entry = render(template, ctx);

        match append_after_anchor(&self.root.join(&rel), anchor, &entry, deduplicate)? {
            AppendOutcome::Inserted { .. } => Ok(StepResult::done(
                "append",
                format!("Appended to {}", rel.display()),
            )),
            AppendOutcome::AlreadyPresent { line } => Ok(StepResult::skipped(
                "append",
                format!(
                    "{} already lists '{}' (line {})",
                    rel.display(),
                    entry.trim(),
                    line
                ),
            )),
        }
    }

    /// Project root all relative paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn warn_unresolved(template: &str, ctx: &Context) {
    let missing = unresolved(template, ctx);
    if !missing.is_empty() {
        warn!(placeholders = ?missing, "template has placeholders with no value");
    }
}
