//! Fixed-size cell masks packed into a single unsigned integer.
//!
//! The grid keeps two of these per board: one marking every cell claimed by a
//! ship and one marking every cell that has been fired upon. Cells are stored
//! row-major, `row * N + col`.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// `N * N` cells do not fit in the backing integer.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column lies outside `[0, N)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "{n}x{n} grid does not fit in {capacity} bits")
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell (row {row}, col {col}) is outside the grid")
            }
        }
    }
}

/// An `N×N` set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
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
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Empty mask. Callers pick `T` wide enough for `N * N`; see [`Self::try_new`].
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Empty mask, or `SizeTooLarge` when the grid does not fit in `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Number of marked cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether (row, col) is marked.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = Self::index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Mark (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Unmark (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * N + col)
        }
    }

    /// Build a mask from `(row, col)` positions.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in cells {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Marked cells in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<'_, T, N> {
        SetBits {
            board: self,
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
        write!(f, "BitBoard[")?;
        for (i, (r, c)) in self.iter_set_bits().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({r},{c})")?;
        }
        write!(f, "]")
    }
}

/// Iterator over the marked cells of a mask.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<'_, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
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

/// Complement within the `N×N` grid.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
