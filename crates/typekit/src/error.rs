//! Errors raised by type constructors and ill-defined queries.

/// Broad category of a [`TypeError`].
///
/// `InvalidArgument` means the caller supplied inputs that violate a
/// constructor invariant. `Logic` means a query was asked of a type shape
/// that cannot answer it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    InvalidArgument,
    Logic,
}

/// Errors that can occur while building or querying types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A list collection whose derived key type is not `int`.
    #[error("a list collection must have an \"int\" key type, \"{key}\" given")]
    ListKeyNotInt { key: String },

    /// Wrapping a type that already accepts `null`.
    #[error("cannot make \"{ty}\" nullable: it is already nullable")]
    AlreadyNullable { ty: String },

    #[error("class name cannot be empty")]
    EmptyClassName,

    /// Enum backing type other than `int` or `string`.
    #[error("backed enum \"{class}\" must be backed by \"int\" or \"string\", \"{backing}\" given")]
    InvalidBackingType { class: String, backing: String },

    /// Union or intersection built from an empty member list.
    #[error("{composite} type requires at least one member")]
    EmptyComposite { composite: &'static str },

    #[error("\"{subject}\" cannot be the subject of a collection type")]
    InvalidCollectionSubject { subject: String },

    #[error("\"{subject}\" cannot be the subject of a generic type")]
    InvalidGenericSubject { subject: String },

    #[error("unknown type identifier \"{0}\"")]
    UnknownIdentifier(String),

    #[error("template name cannot be empty")]
    EmptyTemplateName,

    /// `base_type()` on a union that still has several non-null members.
    #[error("cannot get the base type of \"{ty}\": it has several non-null members")]
    AmbiguousBaseType { ty: String },

    /// `base_type()` on an intersection.
    #[error("intersection type \"{ty}\" has no single base type")]
    IntersectionBaseType { ty: String },

    /// `as_non_nullable()` on a type with nothing left once `null` is removed.
    #[error("\"{ty}\" cannot be turned into a non-nullable type")]
    NotNonNullable { ty: String },

    /// Raw tree rejected while deserializing.
    #[error("JSON error: {0}")]
    Json(String),
}

impl TypeError {
    /// The broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AmbiguousBaseType { .. }
            | Self::IntersectionBaseType { .. }
            | Self::NotNonNullable { .. } => ErrorKind::Logic,
            _ => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_logic(&self) -> bool {
        self.kind() == ErrorKind::Logic
    }
}

/// Result type for type construction and queries.
pub type Result<T> = std::result::Result<T, TypeError>;
