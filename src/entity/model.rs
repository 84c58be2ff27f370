//! Entity types stored in the scope tree arena.

use smol_str::SmolStr;

use crate::base::Span;
use crate::doxygen::DoxygenComment;

/// Index of an entity in its [`ScopeTree`](super::ScopeTree) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(u32);

impl EntityId {
    /// The synthetic root of every tree
    pub const ROOT: EntityId = EntityId(0);

    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind of a parsed construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Namespace,
    Class,
    Struct,
    Enum,
    Function,
    Method,
    Constructor,
    Destructor,
    Variable,
    Field,
    Typedef,
    Using,
    Macro,
    /// Reserved marker; templated entities carry `is_template` instead
    Template,
    AccessSpecifier,
    Preprocessor,
    Comment,
    /// The synthetic root
    Unknown,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Function => "function",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
            Self::Variable => "variable",
            Self::Field => "field",
            Self::Typedef => "typedef",
            Self::Using => "using",
            Self::Macro => "macro",
            Self::Template => "template",
            Self::AccessSpecifier => "access_specifier",
            Self::Preprocessor => "preprocessor",
            Self::Comment => "comment",
            Self::Unknown => "unknown",
        }
    }

    /// Kinds that open a member scope with class-like access rules
    pub fn is_class_like(self) -> bool {
        matches!(self, Self::Class | Self::Struct)
    }

    /// Kinds that receive generated documentation
    pub fn is_documentable(self) -> bool {
        matches!(
            self,
            Self::Namespace
                | Self::Class
                | Self::Struct
                | Self::Enum
                | Self::Function
                | Self::Method
                | Self::Constructor
                | Self::Destructor
                | Self::Variable
                | Self::Field
                | Self::Typedef
                | Self::Using
        )
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessLevel {
    #[default]
    Public,
    Protected,
    Private,
}

impl AccessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documentable construct
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub kind: EntityKind,
    pub name: SmolStr,
    /// `::`-qualified name, assigned when the entity is attached
    pub full_name: String,
    /// Declaration header as written, after macro substitution, without any
    /// function body
    pub signature: String,
    pub access: AccessLevel,
    pub is_static: bool,
    pub is_const: bool,
    pub is_virtual: bool,
    pub is_pure: bool,
    pub is_inline: bool,
    pub is_template: bool,
    pub template_params: Vec<String>,
    pub source_range: Span,
    pub header_range: Span,
    pub body_range: Option<Span>,
    /// Verbatim function body, braces included
    pub original_text: String,
    pub comment: Option<DoxygenComment>,
    pub(crate) parent: Option<EntityId>,
    pub(crate) children: Vec<EntityId>,
}

impl Entity {
    pub fn new(kind: EntityKind, name: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            name: name.into(),
            full_name: String::new(),
            signature: String::new(),
            access: AccessLevel::Public,
            is_static: false,
            is_const: false,
            is_virtual: false,
            is_pure: false,
            is_inline: false,
            is_template: false,
            template_params: Vec::new(),
            source_range: Span::default(),
            header_range: Span::default(),
            body_range: None,
            original_text: String::new(),
            comment: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    /// Set both source and header range
    pub fn with_range(mut self, range: Span) -> Self {
        self.source_range = range;
        self.header_range = range;
        self
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    pub fn children(&self) -> &[EntityId] {
        &self.children
    }

    pub fn has_body(&self) -> bool {
        self.body_range.is_some()
    }

    pub fn has_doxygen_comment(&self) -> bool {
        self.comment.is_some()
    }
}
