use core::any::{self, TypeId};

use crate::Mapped;
use crate::hash::HashMap;

// -----------------------------------------------------------------------------
// FieldInfo

/// The declaration of one mapped field: identifier, optional serialized-name
/// override and the required flag.
///
/// # Examples
///
/// ```
/// use objson::info::FieldInfo;
///
/// let field = FieldInfo::new("test_string").with_rename("testString");
///
/// assert_eq!(field.ident(), "test_string");
/// assert_eq!(field.serialized_name(), "testString");
/// assert!(!field.is_required());
/// ```
#[derive(Clone, Debug)]
pub struct FieldInfo {
    ident: &'static str,
    rename: Option<&'static str>,
    required: bool,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for the field with the given identifier.
    #[inline]
    pub const fn new(ident: &'static str) -> Self {
        Self {
            ident,
            rename: None,
            required: false,
        }
    }

    /// Overrides the serialized name of this field.
    #[inline]
    pub const fn with_rename(mut self, name: &'static str) -> Self {
        self.rename = Some(name);
        self
    }

    /// Marks this field as required during deserialization.
    #[inline]
    pub const fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns the Rust identifier of the field.
    #[inline]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Returns the name used for this field in JSON objects.
    ///
    /// This is the rename override if present, the identifier otherwise.
    #[inline]
    pub const fn serialized_name(&self) -> &'static str {
        match self.rename {
            Some(name) => name,
            None => self.ident,
        }
    }

    /// Returns `true` if the field must be present during deserialization.
    #[inline]
    pub const fn is_required(&self) -> bool {
        self.required
    }
}

// -----------------------------------------------------------------------------
// ObjectInfo

/// Compile-time metadata for an object shape.
///
/// Holds the mapped fields in declaration order, which is also the key order
/// of serialized output. Built once per type by derive-generated code and
/// never mutated afterwards.
#[derive(Clone, Debug)]
pub struct ObjectInfo {
    ty_id: TypeId,
    type_name: &'static str,
    fields: Box<[FieldInfo]>,
    field_indices: HashMap<&'static str, usize>,
}

impl ObjectInfo {
    /// Creates a new [`ObjectInfo`] for type `T`.
    ///
    /// The field order is fixed and follows the input order.
    pub fn new<T: Mapped>(fields: &[FieldInfo]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.ident(), index))
            .collect();

        Self {
            ty_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            fields: fields.to_vec().into_boxed_slice(),
            field_indices,
        }
    }

    /// Returns the `TypeId` of the described type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the name of the described type.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the [`FieldInfo`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the [`FieldInfo`] with the given identifier, if present.
    pub fn field(&self, ident: &str) -> Option<&FieldInfo> {
        self.fields.get(self.index_of(ident)?)
    }

    /// Returns the index for the given field identifier, if present.
    #[inline]
    pub fn index_of(&self, ident: &str) -> Option<usize> {
        self.field_indices.get(ident).copied()
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the number of mapped fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldInfo, ObjectInfo};

    #[test]
    fn declaration_order_is_kept() {
        // The described type is irrelevant to the table mechanics.
        let info = ObjectInfo::new::<i32>(&[
            FieldInfo::new("b"),
            FieldInfo::new("a").with_required(),
            FieldInfo::new("c").with_rename("renamed"),
        ]);

        let names: Vec<_> = info.iter().map(FieldInfo::serialized_name).collect();
        assert_eq!(names, ["b", "a", "renamed"]);

        assert_eq!(info.index_of("a"), Some(1));
        assert_eq!(info.index_of("renamed"), None);
        assert!(info.field("a").unwrap().is_required());
        assert!(!info.field("b").unwrap().is_required());
    }
}
