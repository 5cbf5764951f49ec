use core::any::{self, TypeId};

use crate::Mapped;

// -----------------------------------------------------------------------------
// VariantInfo

/// The declaration of one enum variant: the Rust name and the designated
/// external value the variant serializes to.
#[derive(Clone, Debug)]
pub struct VariantInfo {
    name: &'static str,
    value: &'static str,
}

impl VariantInfo {
    /// Creates a new [`VariantInfo`].
    #[inline]
    pub const fn new(name: &'static str, value: &'static str) -> Self {
        Self { name, value }
    }

    /// Returns the Rust name of the variant.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the external value the variant serializes to.
    #[inline]
    pub const fn value(&self) -> &'static str {
        self.value
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// Compile-time metadata for an enum shape.
///
/// The variant order follows declaration order, but identity on the wire is
/// defined purely by each variant's external value.
///
/// # Examples
///
/// ```
/// use objson::derive::Mapped;
/// use objson::ops::MappedEnum;
///
/// #[derive(Mapped)]
/// enum Channel {
///     #[mapped(value = "page")]
///     Page,
///     #[mapped(value = "worker")]
///     Worker,
/// }
///
/// let info = (&Channel::Page as &dyn MappedEnum).enum_info();
///
/// assert_eq!(info.variant_len(), 2);
/// assert_eq!(info.index_of_value("worker"), Some(1));
/// assert_eq!(info.index_of_value("Page"), None);
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty_id: TypeId,
    type_name: &'static str,
    variants: Box<[VariantInfo]>,
}

impl EnumInfo {
    /// Creates a new [`EnumInfo`] for type `T`.
    ///
    /// The variant order is fixed and follows the input order.
    pub fn new<T: Mapped>(variants: &[VariantInfo]) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            variants: variants.to_vec().into_boxed_slice(),
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

    /// Returns the [`VariantInfo`] at the given index, if present.
    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&VariantInfo> {
        self.variants.get(index)
    }

    /// Returns the index of the variant with the given external value.
    ///
    /// This is a linear scan over the fixed variant table.
    pub fn index_of_value(&self, value: &str) -> Option<usize> {
        self.variants.iter().position(|v| v.value() == value)
    }

    /// Returns an iterator over the variants in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &VariantInfo> {
        self.variants.iter()
    }

    /// Returns the number of variants.
    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }
}
