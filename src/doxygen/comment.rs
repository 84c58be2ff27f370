//! Structured representation of a doxygen comment block.

use indexmap::IndexMap;

use crate::base::Span;

/// A parsed doxygen comment.
///
/// `raw` keeps the comment exactly as written; every other field is derived
/// from it. Single-valued tags are `None` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoxygenComment {
    pub raw: String,
    pub brief: Option<String>,
    pub detailed: Option<String>,
    /// Parameter name to description, in the order the tags appear
    pub params: IndexMap<String, String>,
    pub returns: Option<String>,
    pub throws: Vec<String>,
    pub since: Option<String>,
    pub deprecated: Option<String>,
    pub see: Vec<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub defgroup: Option<String>,
    pub ingroup: Vec<String>,
    pub addtogroup: Option<String>,
    pub file: Option<String>,
    pub namespace: Option<String>,
    pub class: Option<String>,
    /// Unrecognized tags in first-seen order
    pub custom_tags: IndexMap<String, String>,
    /// Where the comment appeared in the source, if it came from a parse
    pub span: Option<Span>,
}

impl DoxygenComment {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn custom_tag(&self, tag: &str) -> Option<&str> {
        self.custom_tags.get(tag).map(String::as_str)
    }

    /// True when no field other than `raw` carries content
    pub fn is_empty(&self) -> bool {
        self.brief.is_none()
            && self.detailed.is_none()
            && self.params.is_empty()
            && self.returns.is_none()
            && self.throws.is_empty()
            && self.since.is_none()
            && self.deprecated.is_none()
            && self.see.is_empty()
            && self.author.is_none()
            && self.version.is_none()
            && self.defgroup.is_none()
            && self.ingroup.is_empty()
            && self.addtogroup.is_none()
            && self.file.is_none()
            && self.namespace.is_none()
            && self.class.is_none()
            && self.custom_tags.is_empty()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}
