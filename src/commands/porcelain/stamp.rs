use crate::OutputFormat;
use crate::areas::repository::Repository;
use crate::artifacts::situation::stamp::Stamp;
use crate::artifacts::tags::pattern::TagPattern;
use crate::commands::parse_revision;
use colored::Colorize;

impl Repository {
    pub fn stamp(
        &self,
        revision: Option<&str>,
        pattern: &str,
        max_depth: Option<usize>,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        let revision = parse_revision(revision)?;
        let pattern = TagPattern::try_new(pattern)?;
        let stamp = Stamp::resolve(self, &revision, &pattern, max_depth)?;

        if format == OutputFormat::Json {
            return self.write_json(&stamp);
        }

        self.write_situation(stamp.situation())?;
        self.write_field("describe", stamp.description().to_string().as_str().cyan())?;

        Ok(())
    }
}
