use crate::OutputFormat;
use crate::areas::repository::Repository;
use crate::artifacts::situation::resolve_situation;
use crate::artifacts::situation::situation_info::Situation;
use crate::commands::parse_revision;
use colored::Colorize;
use std::io::Write;

const LABEL_WIDTH: usize = 11;

impl Repository {
    pub fn situation(&self, revision: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
        let revision = parse_revision(revision)?;
        let situation = resolve_situation(self, &revision)?;

        if format == OutputFormat::Json {
            return self.write_json(&situation);
        }

        self.write_situation(&situation)
    }

    pub(crate) fn write_situation(&self, situation: &Situation) -> anyhow::Result<()> {
        let branch = match situation.branch() {
            Some(branch) => branch.green(),
            None => "(none)".dimmed(),
        };
        let clean = if situation.is_clean() {
            "clean".green()
        } else {
            "dirty".red()
        };

        self.write_field("hash", situation.hash().to_string().as_str().yellow())?;
        self.write_field("timestamp", situation.datetime().to_rfc3339())?;
        self.write_field("branch", branch)?;
        self.write_field("tags", situation.tags().join(", "))?;
        self.write_field("status", clean)?;

        Ok(())
    }

    pub(crate) fn write_field(
        &self,
        label: &str,
        value: impl std::fmt::Display,
    ) -> anyhow::Result<()> {
        let label = format!("{label}:");
        writeln!(
            self.writer(),
            "{:<width$}{}",
            label,
            value,
            width = LABEL_WIDTH
        )?;

        Ok(())
    }
}
