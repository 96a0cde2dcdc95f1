use crate::OutputFormat;
use crate::areas::repository::Repository;
use crate::artifacts::describe::describe;
use crate::artifacts::tags::pattern::TagPattern;
use crate::commands::parse_revision;
use std::io::Write;

impl Repository {
    pub fn describe(
        &self,
        revision: Option<&str>,
        pattern: &str,
        max_depth: Option<usize>,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        let revision = parse_revision(revision)?;
        let pattern = TagPattern::try_new(pattern)?;
        let description = describe(self, &revision, &pattern, max_depth)?;

        if format == OutputFormat::Json {
            return self.write_json(&description);
        }

        writeln!(self.writer(), "{}", description)?;

        Ok(())
    }
}
