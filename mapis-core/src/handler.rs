//! # Handlers
//!
//! A handler is the terminal point of a dispatch: it receives the original
//! value by reference plus a tuple of extra arguments, and produces the
//! dispatcher's result.
//!
//! # Usage Patterns
//!
//! 1. **Closure or fn item**: `|shape: &Shape| shape.radius * 2.0`, or with
//!    extra arguments `|shape: &Shape, scale: f64| ...`.
//! 2. **Struct implementation**: `impl Handler<Shape, (f64,)> for Area`.
//! 3. **Boxed**: [`BoxHandler`] for heterogeneous tables.
//!
//! Extra arguments travel as a tuple: `()` for none, `(A,)` for one,
//! `(A, B)` for two, and so on. Closures taking `N` extra parameters implement
//! `Handler<T, (A1, .., AN)>` for up to eight parameters.

/// The terminal endpoint of a dispatch.
///
/// Every handler in one table shares `T`, `Args` and `Output`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle `&{T}` with extra arguments `{Args}`",
    label = "missing `Handler<{T}, {Args}>` implementation",
    note = "Handlers take `&{T}` followed by the extra arguments, e.g. `|value: &{T}, n: u32| ...`."
)]
pub trait Handler<T: ?Sized, Args> {
    /// The value returned to the dispatch caller.
    type Output;

    /// Executes the handler logic.
    fn call(&self, value: &T, args: Args) -> Self::Output;
}

/// A type-erased handler, for tables mixing closures and handler structs.
pub struct BoxHandler<T: ?Sized, Args, R> {
    inner: Box<dyn Handler<T, Args, Output = R> + Send + Sync>,
}

impl<T: ?Sized, Args, R> BoxHandler<T, Args, R> {
    /// Erase the concrete type of `handler`.
    pub fn new<H>(handler: H) -> Self
    where
        H: Handler<T, Args, Output = R> + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(handler),
        }
    }
}

impl<T: ?Sized, Args, R> Handler<T, Args> for BoxHandler<T, Args, R> {
    type Output = R;

    fn call(&self, value: &T, args: Args) -> R {
        self.inner.call(value, args)
    }
}

impl<T: ?Sized, Args, R> std::fmt::Debug for BoxHandler<T, Args, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BoxHandler")
    }
}

/// Box a handler so it can share a table with handlers of other types.
pub fn boxed<T, Args, H>(handler: H) -> BoxHandler<T, Args, H::Output>
where
    T: ?Sized,
    H: Handler<T, Args> + Send + Sync + 'static,
{
    BoxHandler::new(handler)
}

// Blanket impls for closures, one per arity of extra arguments.
macro_rules! closure_handlers {
    ($( ($($arg:ident),*) ),* $(,)?) => {
        $(
            impl<F, T, R, $($arg,)*> Handler<T, ($($arg,)*)> for F
            where
                T: ?Sized,
                F: Fn(&T, $($arg,)*) -> R,
            {
                type Output = R;

                #[allow(non_snake_case)]
                fn call(&self, value: &T, ($($arg,)*): ($($arg,)*)) -> R {
                    (self)(value, $($arg,)*)
                }
            }
        )*
    };
}

closure_handlers! {
    (),
    (A1),
    (A1, A2),
    (A1, A2, A3),
    (A1, A2, A3, A4),
    (A1, A2, A3, A4, A5),
    (A1, A2, A3, A4, A5, A6),
    (A1, A2, A3, A4, A5, A6, A7),
    (A1, A2, A3, A4, A5, A6, A7, A8),
}
