//! Unbounded policy backing the basic cache: never evicts.

use super::EvictionPolicy;

/// Policy with no capacity limit and no bookkeeping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unbounded;

impl<K> EvictionPolicy<K> for Unbounded {
    fn on_insert(&mut self, _key: &K) {}

    fn on_access(&mut self, _key: &K) {}

    fn evict_if_needed(&mut self, _len: usize) -> Option<K> {
        None
    }

    fn capacity(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_never_evicts() {
        let mut policy = Unbounded;

        for key in 0..1000u32 {
            policy.on_insert(&key);
            policy.on_access(&key);
            let evicted = EvictionPolicy::<u32>::evict_if_needed(&mut policy, key as usize + 1);
            assert_eq!(evicted, None);
        }
        assert_eq!(EvictionPolicy::<u32>::capacity(&policy), None);
    }
}
