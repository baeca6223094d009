use super::{CapacityError, IndexBuffer, MAX_CAPACITY};

#[test]
fn test_try_new_accepts_valid_capacities() {
    for capacity in [0, 1, 2, 1024, MAX_CAPACITY] {
        let buf = IndexBuffer::try_new(capacity).unwrap();
        assert_eq!(buf.size(), capacity);
    }
}

#[test]
fn test_try_new_rejects_non_power_of_two() {
    for capacity in [3, 5, 6, 7, 100, usize::MAX] {
        let err = IndexBuffer::try_new(capacity).unwrap_err();
        assert_eq!(err.capacity(), capacity);
    }
}

#[test]
fn test_error_display() {
    let err: CapacityError = IndexBuffer::try_new(12).unwrap_err();
    assert_eq!(err.to_string(), "capacity 12 is not zero or a power of two");
}

#[test]
fn test_error_is_core_error() {
    fn assert_error<E: core::error::Error + Send + Sync + 'static>() {}
    assert_error::<CapacityError>();
}

#[test]
fn test_max_capacity_fills_and_drains() {
    let mut buf = IndexBuffer::new(MAX_CAPACITY);
    assert!(!buf.full());
    assert_eq!(buf.reserve(), Some(0));
    assert_eq!(buf.peek(), Some(0));
    assert_eq!(buf.take(), Some(0));
    assert!(buf.is_empty());
}
