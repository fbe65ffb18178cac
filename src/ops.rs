use std::ops::{Add, Mul};

// Operators handed to Rectangle::area and Rectangle::perimeter. Rectangle
// itself carries no arithmetic bound.
pub(crate) fn add<T>(num1: T, num2: T) -> T
where
    T: Add<Output = T>,
{
    num1 + num2
}

pub(crate) fn mul<T>(num1: T, num2: T) -> T
where
    T: Mul<Output = T>,
{
    num1 * num2
}
