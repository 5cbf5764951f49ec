use core::fmt;

use serde_json::Value;
use thiserror::Error;

// -----------------------------------------------------------------------------
// ValueKind

/// The tag of a JSON value, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Returns the tag of the given JSON value.
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("Null"),
            Self::Bool => f.pad("Bool"),
            Self::Number => f.pad("Number"),
            Self::String => f.pad("String"),
            Self::Array => f.pad("Array"),
            Self::Object => f.pad("Object"),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldPath

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Descent into an object field, by serialized name.
    Field(&'static str),
    /// Descent into a list element.
    Index(usize),
}

/// The location within a value tree at which a conversion failed.
///
/// Segments are collected while the error unwinds through the recursive
/// converter, so the path grows from the failure site outwards. Rendered
/// `$`-rooted: `$.child.items[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    // Stored leaf-to-root; pushed as the error bubbles up.
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path, pointing at the conversion root.
    #[inline]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Prepends a segment one level further out.
    #[inline]
    pub fn push_outer(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Returns the segments from the root down to the failure site.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &PathSegment> {
        self.segments.iter().rev()
    }

    /// Returns `true` if the path points at the conversion root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in self.segments() {
            match segment {
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ConvertError

/// An enumeration of all failure outcomes of a conversion.
///
/// Any failure aborts the whole `convert_value` call; no partially converted
/// value is ever returned.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A required field's serialized name is absent from the input object.
    #[error("missing required field `{field}` at {path}")]
    MissingField {
        field: &'static str,
        path: FieldPath,
    },

    /// The JSON value's tag (or numeric range) does not match the target.
    #[error("mismatched types at {path}: expected {expected}, received {received}")]
    MismatchedTypes {
        expected: &'static str,
        received: ValueKind,
        path: FieldPath,
    },

    /// No variant of the target enum declares the given external value.
    #[error("unknown variant value `{value}` for `{enum_name}` at {path}")]
    UnknownVariant {
        enum_name: &'static str,
        value: String,
        path: FieldPath,
    },

    /// The value has no JSON representation.
    #[error("`{type_name}` value at {path} is not representable in JSON: {reason}")]
    Unsupported {
        type_name: &'static str,
        reason: &'static str,
        path: FieldPath,
    },
}

impl ConvertError {
    /// Creates a [`ConvertError::MismatchedTypes`] for the given JSON value,
    /// rooted at the failure site.
    #[cold]
    pub fn mismatched(expected: &'static str, received: &Value) -> Self {
        Self::MismatchedTypes {
            expected,
            received: ValueKind::of(received),
            path: FieldPath::root(),
        }
    }

    /// Returns the path at which the conversion failed.
    pub const fn path(&self) -> &FieldPath {
        match self {
            Self::MissingField { path, .. }
            | Self::MismatchedTypes { path, .. }
            | Self::UnknownVariant { path, .. }
            | Self::Unsupported { path, .. } => path,
        }
    }

    fn path_mut(&mut self) -> &mut FieldPath {
        match self {
            Self::MissingField { path, .. }
            | Self::MismatchedTypes { path, .. }
            | Self::UnknownVariant { path, .. }
            | Self::Unsupported { path, .. } => path,
        }
    }

    /// Records that the failure happened inside the object field `name`.
    #[must_use]
    pub fn at_field(mut self, name: &'static str) -> Self {
        self.path_mut().push_outer(PathSegment::Field(name));
        self
    }

    /// Records that the failure happened inside the list element `index`.
    #[must_use]
    pub fn at_index(mut self, index: usize) -> Self {
        self.path_mut().push_outer(PathSegment::Index(index));
        self
    }
}
