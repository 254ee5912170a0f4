//! Cycle detection for a single resolution call.

use crate::error::{IocError, IocResult};
use crate::key::Key;

/// Services currently under construction, outermost first.
///
/// A chain is created empty per top-level resolution and extended by value on
/// each descent, so a failing branch never leaves state behind.
#[derive(Debug, Clone, Default)]
pub(crate) struct ResolutionChain {
    keys: Vec<Key>,
}

impl ResolutionChain {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn contains(&self, key: &Key) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.keys.len()
    }

    /// Returns this chain extended by `key`.
    ///
    /// Fails with `CircularDependency` if `key` is already on the chain; the
    /// error path is the chain followed by the revisited key.
    pub(crate) fn descend(&self, key: Key) -> IocResult<Self> {
        if self.contains(&key) {
            let mut path: Vec<&'static str> = self.keys.iter().map(Key::display_name).collect();
            path.push(key.display_name());
            return Err(IocError::CircularDependency(path));
        }

        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend_from_slice(&self.keys);
        keys.push(key);
        Ok(Self { keys })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::key_of;

    struct A;
    struct B;

    #[test]
    fn descend_leaves_parent_untouched() {
        let root = ResolutionChain::new();
        let one = root.descend(key_of::<A>()).unwrap();
        let two = one.descend(key_of::<B>()).unwrap();

        assert_eq!(root.depth(), 0);
        assert_eq!(one.depth(), 1);
        assert_eq!(two.depth(), 2);
        assert!(two.contains(&key_of::<A>()));
        assert!(!one.contains(&key_of::<B>()));
    }

    #[test]
    fn revisit_reports_full_path() {
        let chain = ResolutionChain::new()
            .descend(key_of::<A>())
            .and_then(|c| c.descend(key_of::<B>()))
            .unwrap();

        match chain.descend(key_of::<A>()) {
            Err(IocError::CircularDependency(path)) => {
                assert_eq!(path.len(), 3);
                assert!(path[0].ends_with("::A"));
                assert!(path[1].ends_with("::B"));
                assert!(path[2].ends_with("::A"));
            }
            other => panic!("expected CircularDependency, got {:?}", other.map(|c| c.depth())),
        }
    }
}
