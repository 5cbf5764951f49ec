use crate::Mapped;

// -----------------------------------------------------------------------------
// MappedOption trait

/// Type-erased access to an optional shape: a value that is either absent or
/// present.
///
/// Implemented for `Option<T>` where `T` is mapped. The optional shape is
/// what drives the field-omission rule: an absent field of an object is left
/// out of the serialized output entirely, while JSON `null` deserializes
/// into the absent state.
pub trait MappedOption: Mapped {
    /// Returns the contained value, if present.
    fn get(&self) -> Option<&dyn Mapped>;

    /// Returns the contained value mutably, materializing the default value
    /// first if absent.
    fn get_or_insert_default(&mut self) -> &mut dyn Mapped;

    /// Resets to the absent state.
    fn clear(&mut self);

    /// Returns `true` if a value is present.
    #[inline]
    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}
