use orx_linked_sequence::*;

fn to_vec<T: Clone>(seq: &LinkedSequence<T>) -> Vec<T> {
    seq.iter().cloned().collect()
}

fn positions<T>(seq: &LinkedSequence<T>) -> Vec<Position<T>> {
    let mut positions = vec![];
    let mut pos = seq.begin();
    while !pos.is_end() {
        positions.push(pos);
        pos = seq.next_position(pos).unwrap();
    }
    positions
}

#[test]
fn kinds() {
    let seq = LinkedSequence::from([1]);

    let before_begin = seq.before_begin();
    assert!(before_begin.is_before_begin());
    assert!(!before_begin.is_end());
    assert!(!before_begin.is_element());

    let end = seq.end();
    assert!(end.is_end());
    assert!(!end.is_element());

    let begin = seq.begin();
    assert!(begin.is_element());
    assert!(!begin.is_before_begin());
    assert!(!begin.is_end());

    assert_ne!(before_begin, end);
    assert_ne!(before_begin, begin);
    assert_ne!(begin, end);
}

#[test]
fn sentinel_positions_are_not_dereferenceable() {
    let mut seq = LinkedSequence::from([1, 2]);

    assert_eq!(seq.get(seq.before_begin()), Err(PositionError::BeforeBegin));
    assert_eq!(seq.get(seq.end()), Err(PositionError::End));
    assert_eq!(seq.get_mut(seq.end()), Err(PositionError::End));

    let empty: LinkedSequence<i32> = LinkedSequence::new();
    assert_eq!(empty.get(empty.begin()), Err(PositionError::End));
}

#[test]
fn mutation_after_end_fails_and_leaves_sequence_unchanged() {
    let mut seq = LinkedSequence::from([1, 2]);

    assert_eq!(seq.insert_after(seq.end(), 3), Err(PositionError::End));
    assert_eq!(seq.erase_after(seq.end()), Err(PositionError::End));

    assert_eq!(to_vec(&seq), [1, 2]);
    assert_eq!(seq.len(), 2);
}

#[test]
fn erase_after_last_has_no_successor() {
    let mut seq = LinkedSequence::from([1, 2]);

    assert_eq!(
        seq.erase_after(seq.back_position()),
        Err(PositionError::NoSuccessor)
    );
    assert_eq!(to_vec(&seq), [1, 2]);

    let mut empty: LinkedSequence<i32> = LinkedSequence::new();
    assert_eq!(
        empty.erase_after(empty.before_begin()),
        Err(PositionError::NoSuccessor)
    );
}

#[test]
fn next_position() {
    let seq = LinkedSequence::from([1, 2]);
    let all = positions(&seq);

    assert_eq!(seq.next_position(seq.before_begin()), Ok(all[0]));
    assert_eq!(seq.next_position(all[0]), Ok(all[1]));
    assert_eq!(seq.next_position(all[1]), Ok(seq.end()));
    assert_eq!(seq.next_position(seq.end()), Ok(seq.end()));
}

#[test]
fn insertions_do_not_invalidate_positions() {
    let mut seq = LinkedSequence::from([1, 2, 3]);
    let all = positions(&seq);

    seq.push_front(0);
    seq.push_back(4);
    seq.insert_after(all[1], 22).unwrap();
    seq.insert_after(seq.before_begin(), -1).unwrap();

    assert_eq!(to_vec(&seq), [-1, 0, 1, 2, 22, 3, 4]);
    for (pos, x) in all.iter().zip([1, 2, 3]) {
        assert!(pos.is_valid_for(&seq));
        assert_eq!(seq.get(*pos), Ok(&x));
    }
}

#[test]
fn erasure_invalidates_only_the_erased_position() {
    let mut seq = LinkedSequence::from([1, 2, 3, 4]);
    let all = positions(&seq);

    let three = seq.erase_after(all[0]).unwrap();
    assert_eq!(three, all[2]);

    assert!(!all[1].is_valid_for(&seq));
    assert_eq!(seq.get(all[1]), Err(PositionError::RemovedNode));
    assert_eq!(seq.insert_after(all[1], 0), Err(PositionError::RemovedNode));
    assert_eq!(seq.erase_after(all[1]), Err(PositionError::RemovedNode));

    for i in [0, 2, 3] {
        assert!(all[i].is_valid_for(&seq));
    }

    assert_eq!(seq.pop_front(), Some(1));
    assert_eq!(seq.get(all[0]), Err(PositionError::RemovedNode));
    assert_eq!(seq.get(all[2]), Ok(&3));
    assert_eq!(to_vec(&seq), [3, 4]);
}

#[test]
fn clear_invalidates_element_positions() {
    let mut seq = LinkedSequence::from([1, 2]);
    let all = positions(&seq);

    seq.clear();
    seq.push_back(5);
    seq.push_back(6);

    for pos in all {
        assert!(!pos.is_valid_for(&seq));
        assert_eq!(seq.get(pos), Err(PositionError::ReorganizedCollection));
    }

    assert!(seq.before_begin().is_valid_for(&seq));
    assert!(seq.end().is_valid_for(&seq));
}

#[test]
fn positions_of_another_sequence() {
    let mut a = LinkedSequence::from([1, 2]);
    let mut b = LinkedSequence::from([1, 2]);

    let a_begin = a.begin();
    assert!(!a_begin.is_valid_for(&b));
    assert_eq!(b.get(a_begin), Err(PositionError::OutOfBounds));
    assert_eq!(b.insert_after(a_begin, 3), Err(PositionError::OutOfBounds));
    assert_eq!(b.erase_after(a_begin), Err(PositionError::OutOfBounds));
    assert_eq!(to_vec(&b), [1, 2]);

    a.push_back(3);
    assert_eq!(a.get(a_begin), Ok(&1));
}

#[test]
fn positions_follow_their_nodes_on_swap() {
    let mut a = LinkedSequence::from([1, 2]);
    let mut b = LinkedSequence::from([3]);

    let a_back = a.back_position();
    let b_front = b.begin();

    a.swap(&mut b);

    assert_eq!(b.get(a_back), Ok(&2));
    assert_eq!(a.get(b_front), Ok(&3));
    assert_eq!(a.get(a_back), Err(PositionError::OutOfBounds));

    b.insert_after(a_back, 7).unwrap();
    assert_eq!(to_vec(&b), [1, 2, 7]);
    assert_eq!(b.back(), Some(&7));
}

#[test]
fn position_error_display() {
    let error = PositionError::NoSuccessor;
    assert_eq!(format!("{}", error), "NoSuccessor");

    let error: &dyn core::error::Error = &PositionError::End;
    assert_eq!(error.to_string(), "End");
}
