//! Tag references as reported by the repository and as stored in the tag index

use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tags::ordering::TagVersion;
use derive_new::new;

/// A reference under `refs/tags/`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TagRef {
    /// Full reference name, e.g. `refs/tags/v1.0`
    name: RefName,
    /// Object the reference points at directly (a tag object when annotated)
    target: ObjectId,
    /// Whether the target is an annotated tag object that needs peeling
    annotated: bool,
    /// When the reference was last written, in seconds since the Unix epoch
    updated_at: Option<i64>,
}

impl TagRef {
    pub fn name(&self) -> &RefName {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn short_name(&self) -> &str {
        self.name.short_name()
    }

    pub fn target(&self) -> &ObjectId {
        &self.target
    }

    pub fn is_annotated(&self) -> bool {
        self.annotated
    }

    pub fn updated_at(&self) -> Option<i64> {
        self.updated_at
    }
}

/// Result of dereferencing an annotated tag
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PeeledTag {
    /// The object at the end of the tag chain
    commit: ObjectId,
    /// Tagger time of the outermost tag object, if it records one
    tagger_time: Option<i64>,
}

impl PeeledTag {
    pub fn commit(&self) -> &ObjectId {
        &self.commit
    }

    pub fn tagger_time(&self) -> Option<i64> {
        self.tagger_time
    }
}

/// A tag resolved to the commit it effectively describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedTag {
    name: RefName,
    commit: ObjectId,
    /// Newest of the reference update time and the tagger time
    version: Option<i64>,
}

impl IndexedTag {
    /// Combine a tag reference with the outcome of peeling it
    ///
    /// Lightweight tags (`peeled` is `None`) describe their direct target.
    pub fn resolve(tag: TagRef, peeled: Option<PeeledTag>) -> Self {
        match peeled {
            Some(peeled) => IndexedTag {
                version: tag.updated_at.max(peeled.tagger_time),
                name: tag.name,
                commit: peeled.commit,
            },
            None => IndexedTag {
                version: tag.updated_at,
                name: tag.name,
                commit: tag.target,
            },
        }
    }

    pub fn full_name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn short_name(&self) -> &str {
        self.name.short_name()
    }

    pub fn commit(&self) -> &ObjectId {
        &self.commit
    }

    pub fn version(&self) -> Option<i64> {
        self.version
    }

    pub fn sort_key(&self) -> TagVersion<'_> {
        TagVersion::new(self.version, self.short_name())
    }
}
