//! Service identity keys.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of an abstract service type.
///
/// Keys compare and hash by [`TypeId`] only; the type name is carried for
/// diagnostics and error messages. Interfaces are usually trait objects, so
/// keys are built for unsized types too.
///
/// # Examples
///
/// ```rust
/// use ioc_registry::{key_of, Key};
///
/// trait Logger: Send + Sync {}
///
/// let a: Key = key_of::<dyn Logger>();
/// let b: Key = key_of::<dyn Logger>();
/// assert_eq!(a, b);
/// assert_ne!(a, key_of::<String>());
/// assert!(a.display_name().ends_with("Logger"));
/// ```
#[derive(Clone, Copy)]
pub struct Key {
    id: TypeId,
    name: &'static str,
}

impl Key {
    /// Key for the given type.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Key {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The `TypeId` this key stands for.
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Human-readable type name (`std::any::type_name`).
    #[inline]
    pub fn display_name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Key {}

impl Hash for Key {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Shorthand for [`Key::of`].
#[inline(always)]
pub fn key_of<T: ?Sized + 'static>() -> Key {
    Key::of::<T>()
}
