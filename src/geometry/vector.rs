//! Signed rank/file displacement used by movement tables and castling.

use std::ops::{Add, Div, Neg, Sub};

/// A displacement between two board squares, as signed rank and file deltas.
///
/// Pure value type with no bounds of its own; adding it to a
/// [`Square`](crate::geometry::square::Square) may leave the board, which the
/// bounds predicate filters out downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub d_rank: i8,
    pub d_file: i8,
}

impl Vector {
    #[inline]
    pub const fn new(d_rank: i8, d_file: i8) -> Self {
        Self { d_rank, d_file }
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.d_rank + rhs.d_rank, self.d_file + rhs.d_file)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.d_rank - rhs.d_rank, self.d_file - rhs.d_file)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.d_rank, -self.d_file)
    }
}

impl Div<i8> for Vector {
    type Output = Vector;

    /// Scalar division, used to bisect a castling step into the transit
    /// square. Castling steps are constructed to divide evenly; a remainder
    /// means a misconfigured step table.
    #[inline]
    fn div(self, rhs: i8) -> Vector {
        debug_assert!(
            self.d_rank % rhs == 0 && self.d_file % rhs == 0,
            "vector {self:?} does not divide evenly by {rhs}"
        );
        Vector::new(self.d_rank / rhs, self.d_file / rhs)
    }
}
