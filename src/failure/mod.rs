//! Fault-tolerant wrappers around fallible callables.
//!
//! A callable that may fail returns `Result<T, E>`; every such callable is
//! [`Fallible`]. Each invocation of a wrapper runs the same three steps:
//!
//! 1. **Attempt**: invoke the wrapped callable.
//! 2. **Success**: return the value.
//! 3. **Fault**: pass the original arguments and the fault to the recovery
//!    handler and return what it produces.
//!
//! [`Fallible::handle`] attaches a caller-supplied handler;
//! [`Fallible::swallow`] attaches one that returns `Default::default()`. Both
//! produce a total callable whose output is the plain value type.
//!
//! # The catch boundary
//!
//! Work chained with [`Fallible::map_value`], [`Fallible::and_then_try`] or
//! [`Fallible::map_fault`] before `handle` sits inside the boundary, so its
//! faults are recovered. Work chained onto the total callable afterwards sits
//! outside it:
//!
//! ```rust
//! use callables::callable::{Callable, ResultChainable};
//! use callables::failure::Fallible;
//!
//! let checked_sqrt = |value: f64| {
//!     if value < 0.0 { Err("negative") } else { Ok(value.sqrt()) }
//! };
//! let checked_reciprocal = |value: f64| {
//!     if value == 0.0 { Err("zero") } else { Ok(1.0 / value) }
//! };
//!
//! // Inside: the reciprocal's fault is recovered.
//! let inside = checked_sqrt
//!     .and_then_try(checked_reciprocal)
//!     .handle(|_arguments: (f64,), _fault: &str| f64::INFINITY);
//! assert_eq!(inside.invoke((0.0,)), f64::INFINITY);
//!
//! // Outside: the reciprocal's fault reaches the caller.
//! let outside = checked_sqrt
//!     .handle(|_arguments: (f64,), _fault: &str| 0.0)
//!     .and_then(checked_reciprocal);
//! assert_eq!(outside.invoke((0.0,)), Err("zero"));
//! assert_eq!(outside.invoke((4.0,)), Ok(0.5));
//! ```
//!
//! Handlers return a plain value rather than a `Result`, so a handler cannot
//! raise a fault that escapes the boundary. A panic is not a fault and is
//! never caught.

mod fallible;
mod wrapper;

pub use fallible::{Fallible, RecoveryHandler};
pub use wrapper::{AndThenTry, Handled, Lifted, MapFault, MapValue, Swallowed};
