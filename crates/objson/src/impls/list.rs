//! List implementation for `Vec<T>`.

use crate::Mapped;
use crate::ops::{MappedList, ShapeMut, ShapeRef};

impl<T: Mapped + Default> Mapped for Vec<T> {
    #[inline]
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::List(self)
    }

    #[inline]
    fn shape_mut(&mut self) -> ShapeMut<'_> {
        ShapeMut::List(self)
    }
}

impl<T: Mapped + Default> MappedList for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Mapped> {
        self.as_slice().get(index).map(|item| item as &dyn Mapped)
    }

    fn push_default(&mut self) -> &mut dyn Mapped {
        self.push(T::default());
        self.last_mut().expect("element was just pushed")
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::MappedList;

    #[test]
    fn elements_are_reachable_in_order() {
        let values = vec![1_i32, 2, 3];
        let list: &dyn MappedList = &values;

        assert_eq!(list.len(), 3);
        let collected: Vec<i32> = list
            .iter()
            .map(|item| *item.downcast_ref::<i32>().unwrap())
            .collect();
        assert_eq!(collected, [1, 2, 3]);
    }

    #[test]
    fn push_default_appends_a_fillable_slot() {
        let mut values: Vec<String> = Vec::new();
        let list: &mut dyn MappedList = &mut values;

        let slot = list.push_default();
        *slot.downcast_mut::<String>().unwrap() = "filled".to_owned();

        assert_eq!(values, ["filled"]);
    }
}
