/// Invokes `callback` once per item, in order.
///
/// Whatever the callback returns is dropped; callers that care about the
/// results observe them through the callback itself (for example a
/// [`MockFn`](crate::testing::MockFn) that records every call).
pub fn for_each<T, R, F>(items: &[T], mut callback: F)
where
    F: FnMut(&T) -> R,
{
    for item in items {
        let _ = callback(item);
    }
}
