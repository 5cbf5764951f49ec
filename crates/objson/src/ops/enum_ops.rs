use crate::Mapped;
use crate::info::{EnumInfo, VariantInfo};

// -----------------------------------------------------------------------------
// MappedEnum trait

/// Type-erased access to an enum shape: a fieldless enum whose variants each
/// declare one external string value.
///
/// Implemented by [`#[derive(Mapped)]`](crate::derive::Mapped) for enums
/// where every variant carries `#[mapped(value = "...")]`. The identity of a
/// variant on the wire is its declared value, never its Rust name.
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
/// let channel: &dyn MappedEnum = &Channel::Worker;
/// assert_eq!(channel.variant_index(), 1);
/// assert_eq!(channel.variant().value(), "worker");
/// ```
pub trait MappedEnum: Mapped {
    /// Returns the static metadata of this enum shape.
    fn enum_info(&self) -> &'static EnumInfo;

    /// Returns the declaration index of the current variant.
    fn variant_index(&self) -> usize;

    /// Replaces the value with the variant at `index`.
    ///
    /// Indices must come from this type's [`EnumInfo`]; out-of-range indices
    /// are ignored.
    fn set_variant(&mut self, index: usize);
}

impl dyn MappedEnum {
    /// Returns the metadata of the current variant.
    #[inline]
    pub fn variant(&self) -> &'static VariantInfo {
        self.enum_info()
            .variant_at(self.variant_index())
            .expect("variant index within variant table")
    }
}
