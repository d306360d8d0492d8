use super::policy::MemoryPolicy;
use crate::{CoreSeq, Node, NodePtr};
use orx_pinned_vec::PinnedVec;

/// Memory reclaim policy which triggers the reclaim operation whenever the node utilization
/// falls below a certain threshold.
///
/// Specifically, memory of closed nodes will be reclaimed whenever the ratio of closed nodes to all nodes exceeds one over `2^D`.
/// * when `D = 0`: memory will be reclaimed when utilization is below 0.00% (equivalent to never).
/// * when `D = 1`: memory will be reclaimed when utilization is below 50.00%.
/// * when `D = 2`: memory will be reclaimed when utilization is below 75.00%.
/// * when `D = 3`: memory will be reclaimed when utilization is below 87.50%.
/// * when `D = 4`: memory will be reclaimed when utilization is below 93.75%.
/// * when `D >= usize::BITS`: memory will be reclaimed as soon as there exists a closed node.
///
/// Every reclaim changes the memory state of the sequence; hence, invalidates all element positions created before it.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimOnThreshold<const D: usize>;

impl<const D: usize> MemoryPolicy for MemoryReclaimOnThreshold<D> {
    fn reclaim_closed_nodes<T, P>(
        core: &mut CoreSeq<T, P>,
        tracked: &mut Option<NodePtr<T>>,
    ) -> bool
    where
        P: PinnedVec<Node<T>>,
    {
        let num_active_nodes = core.len();
        let used = core.nodes().len();
        let allowed_vacant = u32::try_from(D)
            .ok()
            .and_then(|d| used.checked_shr(d))
            .unwrap_or(0);
        let num_vacant = used - num_active_nodes;

        match num_vacant <= allowed_vacant {
            true => false,
            false => core.reclaim_closed_nodes(tracked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinkedSequence;
    use alloc::vec::Vec;
    use test_case::test_case;

    type Seq<const D: usize> = LinkedSequence<usize, MemoryReclaimOnThreshold<D>>;

    fn to_vec<const D: usize>(seq: &Seq<D>) -> Vec<usize> {
        seq.iter().copied().collect()
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(16)]
    #[test_case(254)]
    fn pop_front_keeps_utilization_above_threshold(n: usize) {
        let mut seq: Seq<2> = (0..n).collect();

        for i in 0..n {
            assert_eq!(seq.pop_front(), Some(i));
            let u = seq.utilization();
            assert_eq!(u.num_active_nodes, n - i - 1);
            let used = u.num_used_slots();
            assert!(u.num_closed_nodes <= used >> 2);
        }

        assert!(seq.is_empty());
        assert_eq!(seq.utilization().num_closed_nodes, 0);
    }

    #[test_case(3)]
    #[test_case(16)]
    #[test_case(987)]
    fn erase_every_other_keeps_order(n: usize) {
        let mut seq: Seq<1> = (0..n).collect();

        let mut pos = seq.begin();
        while !pos.is_end() {
            match seq.erase_after(pos) {
                Ok(next) => pos = next,
                Err(_) => break,
            }
        }

        let expected: Vec<_> = (0..n).step_by(2).collect();
        assert_eq!(to_vec(&seq), expected);
        assert_eq!(seq.len(), expected.len());
        assert_eq!(seq.back(), expected.last());
    }

    #[test_case(2)]
    #[test_case(16)]
    #[test_case(100)]
    fn shift_beyond_word_size_reclaims_every_hole(n: usize) {
        fn pop_all<const D: usize>(n: usize) {
            let mut seq: Seq<D> = (0..n).collect();
            for i in 0..n {
                assert_eq!(seq.pop_front(), Some(i));
                let u = seq.utilization();
                assert_eq!(u.num_active_nodes, n - i - 1);
                assert_eq!(u.num_closed_nodes, 0);
            }
            assert!(seq.is_empty());
        }

        pop_all::<{ usize::BITS as usize }>(n);
        pop_all::<64>(n);
        pop_all::<{ usize::MAX }>(n);
    }

    #[test]
    fn reorganization_invalidates_positions() {
        let mut seq: Seq<1> = (0..4).collect();
        let state = seq.memory_state();
        let last = seq.back_position();

        assert!(seq.erase_after(seq.before_begin()).is_ok());
        assert_eq!(seq.memory_state(), state);
        assert!(last.is_valid_for(&seq));

        assert!(seq.erase_after(seq.before_begin()).is_ok());
        assert_eq!(seq.memory_state(), state);

        assert!(seq.erase_after(seq.before_begin()).is_ok());
        assert_ne!(seq.memory_state(), state);
        assert!(!last.is_valid_for(&seq));

        assert_eq!(to_vec(&seq), [3]);
        let u = seq.utilization();
        assert_eq!(u.num_active_nodes, 1);
        assert_eq!(u.num_closed_nodes, 0);
    }
}
