use std::collections::VecDeque;
use std::fmt::Debug;

use parking_lot::Mutex;

/// One recorded invocation of a [`MockFn`].
#[derive(Debug, Clone, PartialEq)]
pub struct MockCall<A, R> {
    pub args: A,
    pub result: R,
}

type Implementation<A, R> = Box<dyn Fn(&A) -> R + Send + Sync>;

/// Function double that records every call.
///
/// Values queued with [`MockFn::returning_once`] are handed out first, in
/// order; after that each call goes through the fallback implementation.
pub struct MockFn<A, R> {
    implementation: Implementation<A, R>,
    queued: Mutex<VecDeque<R>>,
    calls: Mutex<Vec<MockCall<A, R>>>,
}

impl<A: Clone, R: Clone> MockFn<A, R> {
    pub fn new<F>(implementation: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self {
            implementation: Box::new(implementation),
            queued: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Double that returns `value` on every call.
    pub fn returning(value: R) -> Self
    where
        R: Send + Sync + 'static,
    {
        Self::new(move |_| value.clone())
    }

    /// Queues a value for exactly one upcoming call.
    #[must_use]
    pub fn returning_once(self, value: R) -> Self {
        self.queued.lock().push_back(value);
        self
    }

    pub fn call(&self, args: A) -> R {
        let queued = self.queued.lock().pop_front();
        let result = queued.unwrap_or_else(|| (self.implementation)(&args));
        self.calls.lock().push(MockCall {
            args,
            result: result.clone(),
        });
        result
    }

    /// Arguments of every call, oldest first.
    pub fn calls(&self) -> Vec<A> {
        self.calls.lock().iter().map(|call| call.args.clone()).collect()
    }

    /// Results of every call, oldest first.
    pub fn results(&self) -> Vec<R> {
        self.calls
            .lock()
            .iter()
            .map(|call| call.result.clone())
            .collect()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    #[must_use]
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    #[must_use]
    pub fn was_called_times(&self, n: usize) -> bool {
        self.call_count() == n
    }

    pub fn was_called_with(&self, expected: &A) -> bool
    where
        A: PartialEq,
    {
        self.calls.lock().iter().any(|call| &call.args == expected)
    }

    pub fn nth_call(&self, n: usize) -> Option<MockCall<A, R>> {
        self.calls.lock().get(n).cloned()
    }

    pub fn last_call(&self) -> Option<MockCall<A, R>> {
        self.calls.lock().last().cloned()
    }

    /// Clears recorded calls and any queued return values.
    pub fn reset(&self) {
        self.calls.lock().clear();
        self.queued.lock().clear();
    }
}

impl<A: Clone + 'static, R: Clone + Default + 'static> Default for MockFn<A, R> {
    fn default() -> Self {
        Self::new(|_| R::default())
    }
}

impl<A: Debug, R: Debug> Debug for MockFn<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockFn")
            .field("queued", &*self.queued.lock())
            .field("calls", &*self.calls.lock())
            .finish_non_exhaustive()
    }
}
