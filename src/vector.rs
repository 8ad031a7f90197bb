//! Fixed-width numeric vectors
//!
//! A [`Vector`] is `N` lanes of one [`Element`] type, owned by value. It
//! carries no alignment requirement of its own: the lowering layer uses
//! unaligned loads and stores, so a vector can live anywhere a `[T; N]` can.

use core::ops::Index;

use crate::element::Element;
use crate::error::{Error, Result};

/// `N` lanes of `T`.
///
/// # Examples
///
/// ```rust
/// use lanewise::Vector;
///
/// let v = Vector::from_array([1i32, 5, -3, 7]);
/// assert_eq!(v[2], -3);
/// assert_eq!(Vector::<i32, 4>::splat(9).to_array(), [9; 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T: Element, const N: usize>([T; N]);

impl<T: Element, const N: usize> Vector<T, N> {
    /// Builds a vector from its lanes
    #[inline]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    /// Broadcasts `value` to every lane
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// A vector with every lane set to zero
    #[inline]
    pub const fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Copies the lanes out of a slice of exactly `N` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LaneCount`] when `slice.len() != N`.
    pub fn from_slice(slice: &[T]) -> Result<Self> {
        let lanes: [T; N] = slice.try_into().map_err(|_| Error::LaneCount {
            expected: N,
            got: slice.len(),
        })?;
        Ok(Self(lanes))
    }

    /// Number of lanes
    #[inline]
    pub const fn lanes() -> usize {
        N
    }

    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// The value of one lane, `None` when `lane >= N`
    #[inline]
    pub fn get(&self, lane: usize) -> Option<T> {
        self.0.get(lane).copied()
    }

    /// Iterates over the lanes in order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.0.iter().copied()
    }

    /// Applies `f` to every lane
    #[inline]
    pub fn map(self, f: impl FnMut(T) -> T) -> Self {
        Self(self.0.map(f))
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(lanes: [T; N]) -> Self {
        Self(lanes)
    }
}

impl<T: Element, const N: usize> From<T> for Vector<T, N> {
    #[inline]
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T: Element, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.0
    }
}

impl<T: Element, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, lane: usize) -> &T {
        &self.0[lane]
    }
}

impl<T: Element, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let v: Vector<u16, 8> = Vector::splat(7);
        assert_eq!(v.to_array(), [7; 8]);
        assert_eq!(Vector::<f64, 2>::zero().to_array(), [0.0, 0.0]);
        assert_eq!(Vector::<i8, 16>::default(), Vector::zero());

        let broadcast: Vector<i32, 4> = 3i32.into();
        assert_eq!(broadcast, Vector::from_array([3, 3, 3, 3]));

        let from_array: Vector<u8, 4> = [1, 2, 3, 4].into();
        let back: [u8; 4] = from_array.into();
        assert_eq!(back, [1, 2, 3, 4]);
    }

    #[test]
    fn test_from_slice() {
        let v = Vector::<i64, 2>::from_slice(&[-1, 1]).unwrap();
        assert_eq!(v.as_array(), &[-1, 1]);

        let err = Vector::<i64, 2>::from_slice(&[1, 2, 3]).unwrap_err();
        assert_eq!(err, Error::LaneCount { expected: 2, got: 3 });

        let err = Vector::<f32, 4>::from_slice(&[]).unwrap_err();
        assert_eq!(err, Error::LaneCount { expected: 4, got: 0 });
    }

    #[test]
    fn test_lane_access() {
        let v = Vector::from_array([10u32, 20, 30]);
        assert_eq!(Vector::<u32, 3>::lanes(), 3);
        assert_eq!(v[1], 20);
        assert_eq!(v.get(2), Some(30));
        assert_eq!(v.get(3), None);
        assert_eq!(v.iter().sum::<u32>(), 60);
        assert_eq!(v.map(|x| x / 10).as_slice(), &[1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let v = Vector::<i8, 4>::zero();
        let _ = v[4];
    }
}
