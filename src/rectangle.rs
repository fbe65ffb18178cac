use serde::Serialize;
use std::fmt;

/// A rectangle over any `T`. Arithmetic is supplied by the caller on each
/// call instead of being required of `T`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Rectangle<T> {
    pub width: T,
    pub height: T,
}

impl<T> Rectangle<T> {
    pub fn new(width: T, height: T) -> Rectangle<T> {
        Rectangle { width, height }
    }
}

impl<T: Clone> Rectangle<T> {
    /// `mul(width, height)`, one call.
    pub fn area<F>(&self, mut mul: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        mul(self.width.clone(), self.height.clone())
    }

    /// `add(add(width, height), add(width, height))`. The grouping is fixed so
    /// inexact types round the same way every time.
    pub fn perimeter<F>(&self, mut add: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        let first = add(self.width.clone(), self.height.clone());
        let second = add(self.width.clone(), self.height.clone());
        add(first, second)
    }
}

impl<T: fmt::Display> fmt::Display for Rectangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Width:{} Height:{}}}", self.width, self.height)
    }
}
