//! The field descriptor cache.
//!
//! Object shapes are introspected once: their [`FieldInfo`] declarations are
//! resolved into an ordered [`FieldDescriptor`] table which is memoized per
//! `TypeId` for the remainder of the process.
//!
//! [`FieldInfo`]: crate::info::FieldInfo

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::info::ObjectInfo;

mod typeid_map;

pub use typeid_map::TypeIdMap;

// -----------------------------------------------------------------------------
// FieldDescriptor

/// One resolved field of an object shape: the serialized name, the accessor
/// index within the owning object, and the required flag.
///
/// Descriptor order equals field declaration order, which is also the key
/// order of serialized output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    index: usize,
    required: bool,
}

impl FieldDescriptor {
    /// Returns the serialized name (rename override applied).
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the accessor index within the owning object shape.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the field must be present during deserialization.
    #[inline]
    pub const fn is_required(&self) -> bool {
        self.required
    }
}

// -----------------------------------------------------------------------------
// DescriptorCache

/// A per-type cache of resolved [`FieldDescriptor`] tables.
///
/// The cache may be populated concurrently from multiple threads converting
/// different shapes for the first time. A racing thread can at worst redo the
/// resolution work; the first inserted table wins, entries are never
/// invalidated, and a reader can never observe a partially built table.
///
/// # Examples
///
/// ```
/// use objson::cache::DescriptorCache;
/// use objson::info::{FieldInfo, ObjectInfo};
///
/// let info = ObjectInfo::new::<i32>(&[
///     FieldInfo::new("test_string").with_rename("testString"),
/// ]);
///
/// let cache = DescriptorCache::new();
/// let table = cache.describe(&info);
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table[0].name(), "testString");
/// ```
#[derive(Debug)]
pub struct DescriptorCache {
    tables: RwLock<TypeIdMap<Arc<[FieldDescriptor]>>>,
}

impl DescriptorCache {
    /// Creates an empty cache.
    #[inline]
    pub const fn new() -> Self {
        Self {
            tables: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Returns the resolved descriptor table for the given object shape.
    ///
    /// The first call for a shape derives the table from its [`ObjectInfo`];
    /// subsequent calls return the cached table without re-deriving it.
    pub fn describe(&self, info: &ObjectInfo) -> Arc<[FieldDescriptor]> {
        if let Some(table) = self.read().get(&info.ty_id()) {
            return Arc::clone(table);
        }

        // Resolved outside the lock; concurrent first calls may duplicate
        // this work, and the first insert wins.
        let table: Arc<[FieldDescriptor]> = info
            .iter()
            .enumerate()
            .map(|(index, field)| FieldDescriptor {
                name: field.serialized_name(),
                index,
                required: field.is_required(),
            })
            .collect();

        let mut tables = self.write();
        if tables.try_insert(info.ty_id(), || Arc::clone(&table)) {
            log::trace!(
                "cached {} field descriptors for `{}`",
                table.len(),
                info.type_name(),
            );
            return table;
        }
        Arc::clone(tables.get(&info.ty_id()).expect("entry exists after race"))
    }

    /// Returns the number of cached descriptor tables.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if no table has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Population is idempotent and entries are immutable, so a panic while
    // holding the lock cannot leave an inconsistent map behind.
    fn read(&self) -> RwLockReadGuard<'_, TypeIdMap<Arc<[FieldDescriptor]>>> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TypeIdMap<Arc<[FieldDescriptor]>>> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DescriptorCache {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
