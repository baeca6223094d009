use super::IndexBuffer;

#[test]
fn test_indices_cycle_past_capacity() {
    let mut buf = IndexBuffer::new(4);
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(buf.reserve().unwrap());
        assert_eq!(buf.take(), Some(*seen.last().unwrap()));
    }
    assert_eq!(seen, [0, 1, 2, 3, 0, 1]);
    assert_eq!(buf.read_count(), 6);
    assert_eq!(buf.write_count(), 6);
}

#[test]
fn test_counter_overflow_keeps_avail() {
    let mut buf = IndexBuffer::with_counters(4, usize::MAX - 1);
    assert!(buf.is_empty());

    assert_eq!(buf.reserve(), Some(2));
    assert_eq!(buf.reserve(), Some(3));
    // write_count wraps to 0 here.
    assert_eq!(buf.reserve(), Some(0));
    assert_eq!(buf.write_count(), 1);
    assert_eq!(buf.avail(), 3);

    assert_eq!(buf.reserve(), Some(1));
    assert!(buf.full());
    assert_eq!(buf.reserve(), None);

    assert_eq!(buf.take(), Some(2));
    assert_eq!(buf.take(), Some(3));
    assert_eq!(buf.read_count(), 0);
    assert_eq!(buf.avail(), 2);
    assert_eq!(buf.take(), Some(0));
    assert_eq!(buf.take(), Some(1));
    assert_eq!(buf.take(), None);
}

#[test]
fn test_peek_across_overflow() {
    let mut buf = IndexBuffer::with_counters(8, usize::MAX);
    for _ in 0..4 {
        let _ = buf.reserve();
    }
    assert_eq!(buf.indices().collect::<Vec<_>>(), [7, 0, 1, 2]);
    assert_eq!(buf.peek_at(1), Some(0));
}

#[test]
fn test_full_after_write_counter_wraps() {
    let mut buf = IndexBuffer::with_counters(2, usize::MAX);
    let _ = buf.reserve();
    let _ = buf.reserve();
    assert_eq!(buf.write_count(), 1);
    assert!(buf.full());
    assert_eq!(buf.avail(), 2);
}
