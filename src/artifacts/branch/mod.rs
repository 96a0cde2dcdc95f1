pub mod ref_name;
pub mod revision;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

pub const BRANCH_REF_PREFIX: &str = "refs/heads/";
pub const TAG_REF_PREFIX: &str = "refs/tags/";
pub const REMOTE_REF_PREFIX: &str = "refs/remotes/";

pub const INVALID_REVISION_REGEX: &str = r"[\x00-\x20\x7f]";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};
