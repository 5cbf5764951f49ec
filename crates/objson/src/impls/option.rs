//! Optional implementation for `Option<T>`.

use crate::Mapped;
use crate::ops::{MappedOption, ShapeMut, ShapeRef};

impl<T: Mapped + Default> Mapped for Option<T> {
    #[inline]
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Optional(self)
    }

    #[inline]
    fn shape_mut(&mut self) -> ShapeMut<'_> {
        ShapeMut::Optional(self)
    }
}

impl<T: Mapped + Default> MappedOption for Option<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Mapped> {
        self.as_ref().map(|inner| inner as &dyn Mapped)
    }

    #[inline]
    fn get_or_insert_default(&mut self) -> &mut dyn Mapped {
        self.get_or_insert_with(T::default)
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }
}
