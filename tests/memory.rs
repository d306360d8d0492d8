use orx_linked_sequence::*;
use test_case::test_case;

type Never<T> = LinkedSequence<T, MemoryReclaimNever>;
type OnThreshold<const D: usize, T> = LinkedSequence<T, MemoryReclaimOnThreshold<D>>;

fn to_vec<T: Clone, M: MemoryPolicy>(seq: &LinkedSequence<T, M>) -> Vec<T> {
    seq.iter().cloned().collect()
}

#[test]
fn utilization_of_new() {
    let seq: Never<String> = LinkedSequence::new();
    let u = seq.utilization();
    assert_eq!(u.num_active_nodes, 0);
    assert_eq!(u.num_closed_nodes, 0);
}

#[test]
fn never_leaves_holes() {
    let mut seq: Never<String> = (0..6).map(|x| x.to_string()).collect();

    seq.pop_front();
    seq.pop_front();
    seq.erase_after(seq.begin()).unwrap();

    let u = seq.utilization();
    assert_eq!(u.num_active_nodes, 3);
    assert_eq!(u.num_closed_nodes, 3);
    assert!(u.capacity >= u.num_used_slots());
    assert_eq!(u.num_used_slots(), 6);
    assert_eq!(to_vec(&seq), ["2", "4", "5"]);
}

#[test]
fn manual_reclaim() {
    let mut seq: Never<String> = (0..6).map(|x| x.to_string()).collect();
    seq.push_front(String::from("front"));

    seq.erase_after(seq.begin()).unwrap();
    seq.erase_after(seq.begin()).unwrap();
    let before = seq.back_position();
    let state = seq.memory_state();

    seq.reclaim_closed_nodes();

    let u = seq.utilization();
    assert_eq!(u.num_active_nodes, 5);
    assert_eq!(u.num_closed_nodes, 0);
    assert_ne!(seq.memory_state(), state);
    assert_eq!(seq.get(before), Err(PositionError::ReorganizedCollection));

    assert_eq!(to_vec(&seq), ["front", "2", "3", "4", "5"]);
    assert_eq!(seq.back(), Some(&String::from("5")));

    seq.push_back(String::from("6"));
    seq.push_front(String::from("first"));
    assert_eq!(
        to_vec(&seq),
        ["first", "front", "2", "3", "4", "5", "6"]
    );
}

#[test]
fn manual_reclaim_without_holes_keeps_positions() {
    let mut seq: Never<u32> = (0..4).collect();
    let state = seq.memory_state();
    let back = seq.back_position();

    seq.reclaim_closed_nodes();

    assert_eq!(seq.memory_state(), state);
    assert_eq!(seq.get(back), Ok(&3));
}

#[test]
fn reclaim_when_all_but_one_closed() {
    let mut seq: Never<u32> = (0..4).collect();
    for i in 0..3 {
        assert_eq!(seq.pop_front(), Some(i));
    }

    assert_eq!(seq.utilization().num_closed_nodes, 3);
    seq.reclaim_closed_nodes();
    assert_eq!(seq.utilization().num_closed_nodes, 0);
    assert_eq!(seq.utilization().num_used_slots(), 1);

    seq.push_back(7);
    assert_eq!(to_vec(&seq), [3, 7]);
}

#[test_case(1)]
#[test_case(1000)]
#[test_case(100_000)]
fn draining_queue_releases_storage(num_cycles: u32) {
    let mut seq: Never<u32> = LinkedSequence::new();

    for i in 0..num_cycles {
        seq.push_back(i);
        assert_eq!(seq.pop_front(), Some(i));

        let u = seq.utilization();
        assert_eq!(u.num_active_nodes, 0);
        assert_eq!(u.num_used_slots(), 0);
    }

    assert!(seq.is_empty());
    assert_eq!(seq.utilization().num_used_slots(), 0);
}

#[test_case(10)]
#[test_case(1000)]
fn draining_releases_storage_after_steady_state_queue(num_cycles: u32) {
    let mut seq: Never<u32> = (0..3).collect();

    for i in 3..(3 + num_cycles) {
        seq.push_back(i);
        assert_eq!(seq.pop_front(), Some(i - 3));
    }

    let u = seq.utilization();
    assert_eq!(u.num_active_nodes, 3);
    assert_eq!(u.num_closed_nodes, num_cycles as usize);

    let back = seq.back_position();
    let state = seq.memory_state();
    seq.erase_after(seq.before_begin()).unwrap();
    seq.erase_after(seq.before_begin()).unwrap();
    assert_eq!(seq.memory_state(), state);
    assert_eq!(seq.get(back), Ok(&(num_cycles + 2)));

    seq.erase_after(seq.before_begin()).unwrap();
    assert!(seq.is_empty());
    assert_ne!(seq.memory_state(), state);
    assert_eq!(seq.utilization().num_used_slots(), 0);
    assert!(!back.is_valid_for(&seq));

    seq.push_back(42);
    assert_eq!(to_vec(&seq), [42]);
    assert_eq!(seq.back(), Some(&42));
}

#[test]
fn draining_releases_storage_with_threshold_policy() {
    let mut seq: OnThreshold<4, u32> = (0..16).collect();
    while seq.pop_front().is_some() {}

    assert!(seq.is_empty());
    assert_eq!(seq.utilization().num_used_slots(), 0);
}

#[test_case(16)]
#[test_case(100)]
fn threshold_interleaved_mutations(n: u32) {
    let mut seq: OnThreshold<2, u32> = LinkedSequence::default();
    let mut expected = std::collections::VecDeque::new();

    for i in 0..n {
        match i % 3 {
            0 => {
                seq.push_front(i);
                expected.push_front(i);
            }
            _ => {
                seq.push_back(i);
                expected.push_back(i);
            }
        }

        if i % 4 == 3 {
            assert_eq!(seq.pop_front(), expected.pop_front());
            let erased = seq.erase_after(seq.begin());
            if expected.len() > 1 {
                assert!(erased.is_ok());
                expected.remove(1);
            }
        }

        assert_eq!(to_vec(&seq), expected.iter().copied().collect::<Vec<_>>());
        assert_eq!(seq.back(), expected.back());
        assert_eq!(seq.len(), expected.len());

        let u = seq.utilization();
        let used = u.num_used_slots();
        assert!(u.num_closed_nodes <= used >> 2);
    }
}

#[test]
fn threshold_erase_after_returns_valid_position() {
    let mut seq: OnThreshold<1, u32> = (0..3).collect();

    let pos = seq.erase_after(seq.before_begin()).unwrap();
    assert_eq!(seq.get(pos), Ok(&1));

    let state = seq.memory_state();
    let pos = seq.erase_after(seq.before_begin()).unwrap();
    assert_ne!(seq.memory_state(), state);
    assert!(pos.is_valid_for(&seq));
    assert_eq!(seq.get(pos), Ok(&2));
    assert_eq!(seq.back_position(), pos);
}
