//! Adapters produced by [`Fallible`](super::Fallible).

use super::fallible::{Fallible, RecoveryHandler};
use crate::callable::Callable;

// =============================================================================
// Total views
// =============================================================================

/// A fallible callable made total by a recovery handler. Created by
/// [`Fallible::handle`].
///
/// Each invocation clones its arguments before the attempt, so the handler
/// receives the original arguments alongside the fault.
#[derive(Debug, Clone, Copy)]
pub struct Handled<C, H> {
    callable: C,
    handler: H,
}

impl<C, H> Handled<C, H> {
    pub(super) const fn new(callable: C, handler: H) -> Self {
        Self { callable, handler }
    }
}

impl<C, H, Args> Callable<Args> for Handled<C, H>
where
    C: Fallible<Args>,
    H: RecoveryHandler<Args, C::Error, Value = C::Value>,
    Args: Clone,
{
    type Output = C::Value;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        match self.callable.try_call(arguments.clone()) {
            Ok(value) => value,
            Err(fault) => self.handler.recover(arguments, fault),
        }
    }
}

/// A fallible callable made total by substituting `Default::default()` for
/// every fault. Created by [`Fallible::swallow`].
#[derive(Debug, Clone, Copy)]
pub struct Swallowed<C> {
    callable: C,
}

impl<C> Swallowed<C> {
    pub(super) const fn new(callable: C) -> Self {
        Self { callable }
    }
}

impl<C, Args> Callable<Args> for Swallowed<C>
where
    C: Fallible<Args>,
    C::Value: Default,
{
    type Output = C::Value;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.callable.try_call(arguments).unwrap_or_default()
    }
}

/// A fallible callable whose fault is reported as `None`. Created by
/// [`Fallible::lift`].
#[derive(Debug, Clone, Copy)]
pub struct Lifted<C> {
    callable: C,
}

impl<C> Lifted<C> {
    pub(super) const fn new(callable: C) -> Self {
        Self { callable }
    }
}

impl<C, Args> Callable<Args> for Lifted<C>
where
    C: Fallible<Args>,
{
    type Output = Option<C::Value>;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.callable.try_call(arguments).ok()
    }
}

// =============================================================================
// Chaining inside the catch boundary
// =============================================================================

/// A fallible callable followed by an infallible transform of its success
/// value. Created by [`Fallible::map_value`].
#[derive(Debug, Clone, Copy)]
pub struct MapValue<C, G> {
    callable: C,
    after: G,
}

impl<C, G> MapValue<C, G> {
    pub(super) const fn new(callable: C, after: G) -> Self {
        Self { callable, after }
    }
}

impl<C, G, Args> Callable<Args> for MapValue<C, G>
where
    C: Fallible<Args>,
    G: Callable<(C::Value,)>,
{
    type Output = Result<G::Output, C::Error>;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.callable
            .try_call(arguments)
            .map(|value| self.after.invoke((value,)))
    }
}

/// A fallible callable followed by a fallible transform sharing its error
/// type. Created by [`Fallible::and_then_try`].
#[derive(Debug, Clone, Copy)]
pub struct AndThenTry<C, G> {
    callable: C,
    after: G,
}

impl<C, G> AndThenTry<C, G> {
    pub(super) const fn new(callable: C, after: G) -> Self {
        Self { callable, after }
    }
}

impl<C, G, Args> Callable<Args> for AndThenTry<C, G>
where
    C: Fallible<Args>,
    G: Fallible<(C::Value,), Error = C::Error>,
{
    type Output = Result<G::Value, C::Error>;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.callable
            .try_call(arguments)
            .and_then(|value| self.after.try_call((value,)))
    }
}

/// A fallible callable whose fault is rewritten by a transform. Created by
/// [`Fallible::map_fault`].
#[derive(Debug, Clone, Copy)]
pub struct MapFault<C, G> {
    callable: C,
    transform: G,
}

impl<C, G> MapFault<C, G> {
    pub(super) const fn new(callable: C, transform: G) -> Self {
        Self {
            callable,
            transform,
        }
    }
}

impl<C, G, Args> Callable<Args> for MapFault<C, G>
where
    C: Fallible<Args>,
    G: Callable<(C::Error,)>,
{
    type Output = Result<C::Value, G::Output>;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.callable
            .try_call(arguments)
            .map_err(|fault| self.transform.invoke((fault,)))
    }
}
