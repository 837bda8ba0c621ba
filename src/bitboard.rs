//! A fixed-size cell mask using const generics.
//!
//! Cells of an `N×N` grid are packed row-major into an unsigned integer `T`,
//! bit `y * N + x` for the cell at column `x`, row `y`. The board uses it for
//! occupancy and overlap tests and the targeting engine for enumerating
//! untried cells.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;

/// Errors returned by mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested grid N*N exceeds the capacity of `T`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Cell lies outside [0..N) on either axis.
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::OutOfBounds { x, y } => {
                write!(f, "OutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A set of cells on an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn full_mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit(coord: Coord) -> Result<T, BitBoardError> {
        if coord.x >= N || coord.y >= N {
            return Err(BitBoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        Ok(T::one() << (coord.y * N + coord.x))
    }

    /// Empty mask without a capacity check; see [`BitBoard::try_new`].
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: `Err(SizeTooLarge)` if N*N does not fit in `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Mask with every cell of the grid set.
    pub fn full() -> Self {
        BitBoard {
            bits: Self::full_mask(),
        }
    }

    /// Build a mask from cells, failing on the first out-of-bounds cell.
    pub fn from_coords<I>(coords: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut mask = Self::new();
        for coord in coords {
            mask.insert(coord)?;
        }
        Ok(mask)
    }

    /// Number of cells in the mask.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; cells off the grid are never members.
    pub fn contains(&self, coord: Coord) -> bool {
        Self::bit(coord)
            .map(|bit| (self.bits & bit) != T::zero())
            .unwrap_or(false)
    }

    pub fn insert(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        self.bits = self.bits | Self::bit(coord)?;
        Ok(())
    }

    pub fn remove(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        self.bits = self.bits & !Self::bit(coord)?;
        Ok(())
    }

    /// Whether the two masks share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        (self.bits & other.bits) != T::zero()
    }

    /// Iterate over member cells in row-major order.
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for y in 0..N {
            for x in 0..N {
                let ch = if self.contains(Coord::new(x, y)) { '■' } else { '□' };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the member cells of a mask.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coord::new(idx % N, idx / N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the grid; bits beyond N*N stay clear.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::full_mask(),
        }
    }
}
