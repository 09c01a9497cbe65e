//! Execution-context-local storage for the correlation id and request path.
//!
//! Application code sets both values once per unit of work (typically at
//! request entry) and any code running inside that execution context reads
//! them implicitly, without threading them through every function call.
//!
//! An "execution context" is the current Tokio task when running inside
//! [`with_context`], and the current OS thread otherwise. Two contexts never
//! observe each other's values. Contexts that are pooled and reused (worker
//! threads, task pools) must clear their slots at unit-of-work boundaries or
//! stale values leak into the next logical request; [`scope`] and
//! [`with_context`] make that clearing structural instead of optional.
//!
//! ```
//! xlog::set_correlation_id(Some("abc123"));
//! assert_eq!(xlog::correlation_id(), "abc123");
//! assert_eq!(xlog::correlation_id_mark(), "CRID[abc123]");
//!
//! xlog::clear_correlation_id();
//! assert_eq!(xlog::correlation_id(), xlog::EMPTY_CORRELATION_ID);
//! ```

use std::cell::RefCell;
use std::future::Future;
use std::marker::PhantomData;

use crate::ids;
use crate::strings;

/// The correlation id returned while none is set: the single character `-`.
///
/// The sentinel lets log readers immediately distinguish untracked requests
/// (`-`) from a deliberately assigned identifier, including a deliberately
/// assigned short one.
pub const EMPTY_CORRELATION_ID: &str = "-";

/// The two context slots. One instance lives per execution context.
#[derive(Debug, Clone, Default)]
struct Slots {
    correlation_id: Option<String>,
    path: Option<String>,
}

thread_local! {
    static THREAD_SLOTS: RefCell<Slots> = RefCell::new(Slots::default());
}

tokio::task_local! {
    static TASK_SLOTS: RefCell<Slots>;
}

/// Runs `f` against the slots of the current execution context: the
/// task-local cell when inside [`with_context`], the thread-local cell
/// otherwise.
fn with_slots<T>(f: impl Fn(&mut Slots) -> T) -> T {
    TASK_SLOTS
        .try_with(|cell| f(&mut cell.borrow_mut()))
        .unwrap_or_else(|_| THREAD_SLOTS.with(|cell| f(&mut cell.borrow_mut())))
}

/// Returns the current context's correlation id, or
/// [`EMPTY_CORRELATION_ID`] if none was set.
pub fn correlation_id() -> String {
    with_slots(|slots| slots.correlation_id.clone())
        .unwrap_or_else(|| EMPTY_CORRELATION_ID.to_string())
}

/// Returns the current correlation id wrapped as `CRID[<id>]`, the
/// conventional human-scannable marker for embedding in free-text log lines.
pub fn correlation_id_mark() -> String {
    format!("CRID[{}]", correlation_id())
}

/// Sets the correlation id for the current execution context.
///
/// `None`, empty, and whitespace-only values all mint a fresh random
/// 16-lowercase-hex identifier, so calling `set_correlation_id(incoming)`
/// unconditionally at request entry is always correct: an id propagated from
/// upstream is kept verbatim (trimmed), and a missing one is replaced with a
/// new mint rather than the sentinel.
pub fn set_correlation_id(value: Option<&str>) {
    let value = strings::normalize(value).unwrap_or_else(ids::random_hex16);
    with_slots(|slots| slots.correlation_id = Some(value.clone()));
}

/// Resets the correlation id slot to the unset state.
///
/// A subsequent [`correlation_id`] returns [`EMPTY_CORRELATION_ID`] again,
/// indistinguishable from a context that never set one.
pub fn clear_correlation_id() {
    with_slots(|slots| slots.correlation_id = None);
}

/// Returns the current context's request path, or `None` if unset.
pub fn path() -> Option<String> {
    with_slots(|slots| slots.path.clone())
}

/// Sets the request path for the current execution context.
///
/// `None`, empty, and whitespace-only values clear the slot; anything else is
/// stored trimmed.
pub fn set_path(value: Option<&str>) {
    let value = strings::normalize(value);
    with_slots(|slots| slots.path.clone_from(&value));
}

/// Resets the path slot to `None`.
pub fn clear_path() {
    with_slots(|slots| slots.path = None);
}

/// Guard returned by [`scope`]. Clears both context slots when dropped.
///
/// Deliberately `!Send`: the guard is tied to the execution context whose
/// slots it set and must be dropped there.
#[must_use = "dropping the scope immediately clears the context it just set"]
#[derive(Debug)]
pub struct ContextScope {
    _not_send: PhantomData<*const ()>,
}

/// Sets both context slots for the duration of the returned guard.
///
/// The correlation id follows the [`set_correlation_id`] rules (a blank or
/// absent value mints a fresh id); the path follows [`set_path`]. Dropping
/// the guard clears both slots, which makes unit-of-work boundary clearing
/// structural on pooled threads:
///
/// ```
/// {
///     let _ctx = xlog::scope(Some("req-1"), Some("/api/users"));
///     assert_eq!(xlog::correlation_id(), "req-1");
///     assert_eq!(xlog::path().as_deref(), Some("/api/users"));
/// }
/// assert_eq!(xlog::correlation_id(), xlog::EMPTY_CORRELATION_ID);
/// assert_eq!(xlog::path(), None);
/// ```
pub fn scope(correlation_id: Option<&str>, path: Option<&str>) -> ContextScope {
    set_correlation_id(correlation_id);
    set_path(path);
    ContextScope {
        _not_send: PhantomData,
    }
}

impl Drop for ContextScope {
    fn drop(&mut self) {
        clear_correlation_id();
        clear_path();
    }
}

/// Runs a future inside its own execution context.
///
/// The future (and everything it awaits) sees a private pair of slots seeded
/// from `correlation_id` and `path` under the same normalization rules as
/// [`set_correlation_id`] and [`set_path`]. The slots travel with the task
/// across `.await` points and executor threads, so concurrent tasks on a
/// shared thread pool stay isolated, and they are discarded when the future
/// completes. Nested calls shadow the outer context for their duration.
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// xlog::with_context(Some("req-7"), Some("/health"), async {
///     assert_eq!(xlog::correlation_id(), "req-7");
///     assert_eq!(xlog::path().as_deref(), Some("/health"));
/// })
/// .await;
/// # }
/// ```
pub async fn with_context<F>(
    correlation_id: Option<&str>,
    path: Option<&str>,
    future: F,
) -> F::Output
where
    F: Future,
{
    let slots = Slots {
        correlation_id: Some(strings::normalize(correlation_id).unwrap_or_else(ids::random_hex16)),
        path: strings::normalize(path),
    };
    TASK_SLOTS.scope(RefCell::new(slots), future).await
}
