use core::ops::Index;
use core::slice::SliceIndex;

/// A trait which performs bounds checking only in debug mode.
/// Automaton state ids are validated when edges are inserted, so lookups by
/// state id in the traversal loops do not need to be checked again.
pub trait DebugCheckIndex<Idx>: Index<Idx> {
    fn iat(&self, index: Idx) -> &Self::Output;
}

impl<Idx, T> DebugCheckIndex<Idx> for [T]
where
    Idx: SliceIndex<[T]> + Clone,
{
    #[inline(always)]
    fn iat(&self, idx: Idx) -> &Self::Output {
        debug_assert!(self.get(idx.clone()).is_some(), "Index out of bounds");
        if cfg!(feature = "prohibit-unsafe") {
            self.index(idx)
        } else {
            unsafe { self.get_unchecked(idx) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DebugCheckIndex;

    #[test]
    fn iat_agrees_with_index() {
        let vals: Vec<usize> = (0..16).map(|v| v * 3).collect();
        for i in 0..vals.len() {
            assert_eq!(*vals.iat(i), vals[i]);
        }
        assert_eq!(vals.iat(2..5), &vals[2..5]);
    }
}
