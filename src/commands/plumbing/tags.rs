use crate::OutputFormat;
use crate::areas::repository::Repository;
use crate::artifacts::tags::tag_index::TagIndex;
use crate::commands::parse_revision;
use std::io::Write;

impl Repository {
    pub fn tags(&self, revision: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
        let revision = parse_revision(revision)?;

        let tags = match revision.resolve(self)? {
            Some(commit) => TagIndex::build(self)?.tag_names_at(&commit),
            None => Vec::new(),
        };

        if format == OutputFormat::Json {
            return self.write_json(&tags);
        }

        for tag in tags {
            writeln!(self.writer(), "{}", tag)?;
        }

        Ok(())
    }
}
