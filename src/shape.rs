//!Call shapes accepted for conditions and callbacks.
//!
//!Each callable implements exactly one shape, so selection happens at compile time.
//!Closures which take elapsed time must annotate its type, e.g. `|dt: u32| ...`,
//!as it cannot be inferred through the shape traits.

///Shape of callable which accepts elapsed time since last firing.
pub enum WithElapsed {}
///Shape of callable without arguments.
pub enum NoArgs {}
///Shape of plain value.
pub enum Value {}

///Condition evaluated on each poll past deadline.
///
///Implemented for:
///
///- `bool`
///- `FnMut(u32) -> B`, receiving elapsed time
///- `FnMut() -> B`
///
///where `B: Into<bool>`.
pub trait Condition<Shape> {
    ///Evaluates condition with elapsed time `dt`.
    fn check(&mut self, dt: u32) -> bool;
}

impl Condition<Value> for bool {
    #[inline(always)]
    fn check(&mut self, _: u32) -> bool {
        *self
    }
}

impl<F, B> Condition<WithElapsed> for F where F: FnMut(u32) -> B, B: Into<bool> {
    #[inline(always)]
    fn check(&mut self, dt: u32) -> bool {
        (self)(dt).into()
    }
}

impl<F, B> Condition<NoArgs> for F where F: FnMut() -> B, B: Into<bool> {
    #[inline(always)]
    fn check(&mut self, _: u32) -> bool {
        (self)().into()
    }
}

///Work performed by call site.
///
///Implemented for `FnMut(u32) -> R` and `FnMut() -> R`.
///
///Callbacks returning `()` produce presence-only results, while references are returned as
///they are, without copying referenced value.
pub trait Callback<Shape> {
    ///Result of callback.
    type Output;

    ///Invokes callback with elapsed time `dt`.
    fn call(&mut self, dt: u32) -> Self::Output;
}

impl<F, R> Callback<WithElapsed> for F where F: FnMut(u32) -> R {
    type Output = R;

    #[inline(always)]
    fn call(&mut self, dt: u32) -> Self::Output {
        (self)(dt)
    }
}

impl<F, R> Callback<NoArgs> for F where F: FnMut() -> R {
    type Output = R;

    #[inline(always)]
    fn call(&mut self, _: u32) -> Self::Output {
        (self)()
    }
}
