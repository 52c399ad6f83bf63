//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Stored as four [`Vec4`] **columns**; element (row r, column c) is the
//!   r-th component of column c
//! - Vectors are **column vectors** on the right: `Mat4 * Vec4`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! # Example
//! ```ignore
//! let world = Mat4::translation_matrix(t) * Mat4::rotation_matrix(r) * Mat4::scale_matrix(s);
//! let vertex = world * Vec4::point(1.0, 1.0, -1.0);
//! ```

use std::fmt;
use std::ops::{Add, Mul};

use approx::{AbsDiffEq, RelativeEq};

use super::vec4::Vec4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    cols: [Vec4; 4],
}

impl Mat4 {
    pub const ZERO: Self = Self::from_columns([Vec4::ZERO; 4]);

    pub const fn from_columns(cols: [Vec4; 4]) -> Self {
        Mat4 { cols }
    }

    /// Builds a matrix from row-major literal data, which reads the way the
    /// matrix is written on paper.
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let mut cols = [Vec4::ZERO; 4];
        for (c, col) in cols.iter_mut().enumerate() {
            *col = Vec4::new(rows[0][c], rows[1][c], rows[2][c], rows[3][c]);
        }
        Mat4 { cols }
    }

    pub fn identity() -> Self {
        Mat4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix: `diag(s.x, s.y, s.z, 1)`. `s.w` is ignored.
    pub fn scale_matrix(s: Vec4) -> Self {
        Mat4::from_rows([
            [s.x, 0.0, 0.0, 0.0],
            [0.0, s.y, 0.0, 0.0],
            [0.0, 0.0, s.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the first three rows of the last column.
    /// `t.w` is ignored.
    pub fn translation_matrix(t: Vec4) -> Self {
        Mat4::from_rows([
            [1.0, 0.0, 0.0, t.x],
            [0.0, 1.0, 0.0, t.y],
            [0.0, 0.0, 1.0, t.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis. Angle in degrees.
    pub fn rotation_x(degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Mat4::from_columns([
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, c, -s, 0.0),
            Vec4::new(0.0, s, c, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }

    /// Creates a rotation matrix around the Y axis. Angle in degrees.
    pub fn rotation_y(degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Mat4::from_columns([
            Vec4::new(c, 0.0, s, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(-s, 0.0, c, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }

    /// Creates a rotation matrix around the Z axis. Angle in degrees.
    pub fn rotation_z(degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Mat4::from_columns([
            Vec4::new(c, s, 0.0, 0.0),
            Vec4::new(-s, c, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }

    /// Creates the Euler rotation for per-axis angles in degrees.
    ///
    /// Order: `Y * (X * Z)`. X and Z are combined first and the result is
    /// premultiplied by Y. `angles.w` is ignored.
    pub fn rotation_matrix(angles: Vec4) -> Self {
        let xz = Mat4::rotation_x(angles.x) * Mat4::rotation_z(angles.z);
        Mat4::rotation_y(angles.y) * xz
    }

    #[inline]
    pub fn column(&self, col: usize) -> Vec4 {
        self.cols[col]
    }

    #[inline]
    pub fn columns(&self) -> &[Vec4; 4] {
        &self.cols
    }

    /// Gathers row `row` across the four columns.
    #[inline]
    pub fn row(&self, row: usize) -> Vec4 {
        let pick = |v: &Vec4| v.to_array()[row];
        Vec4::new(
            pick(&self.cols[0]),
            pick(&self.cols[1]),
            pick(&self.cols[2]),
            pick(&self.cols[3]),
        )
    }

    /// Access element at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cols[col].to_array()[row]
    }

    pub fn transpose(&self) -> Self {
        Mat4::from_columns([self.row(0), self.row(1), self.row(2), self.row(3)])
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Mat4::identity()
    }
}

/// Transform a Vec4 by a matrix: each output component is the dot product
/// of the matching row with `v`.
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}

/// Matrix multiplication: column i of `A * B` is `A * B.column(i)`.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        Mat4::from_columns(rhs.cols.map(|col| self * col))
    }
}

impl Mul<f64> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: f64) -> Self::Output {
        Mat4::from_columns(self.cols.map(|col| col * rhs))
    }
}

impl Add<Mat4> for Mat4 {
    type Output = Mat4;

    fn add(self, rhs: Mat4) -> Self::Output {
        Mat4::from_columns([
            self.cols[0] + rhs.cols[0],
            self.cols[1] + rhs.cols[1],
            self.cols[2] + rhs.cols[2],
            self.cols[3] + rhs.cols[3],
        ])
    }
}

/// Row-major text, one matrix row per line.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..4 {
            let row = self.row(r);
            writeln!(f, "{:.6} {:.6} {:.6} {:.6}", row.x, row.y, row.z, row.w)?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn element_layout_is_column_major() {
        let m = Mat4::from_columns([
            Vec4::new(1.0, 2.0, 3.0, 4.0),
            Vec4::new(5.0, 6.0, 7.0, 8.0),
            Vec4::new(9.0, 10.0, 11.0, 12.0),
            Vec4::new(13.0, 14.0, 15.0, 16.0),
        ]);
        assert_eq!(m.get(1, 0), 2.0);
        assert_eq!(m.get(0, 1), 5.0);
        assert_eq!(m.row(0), Vec4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(m.transpose().column(0), m.row(0));
    }

    #[test]
    fn translation_lives_in_last_column() {
        let t = Mat4::translation_matrix(Vec4::new(50.0, 60.0, 70.0, 0.0));
        assert_eq!(t.column(3), Vec4::new(50.0, 60.0, 70.0, 1.0));
        assert_eq!(t * Vec4::point(1.0, 1.0, 1.0), Vec4::point(51.0, 61.0, 71.0));
        // Directions are not moved by translation.
        assert_eq!(
            t * Vec4::direction(1.0, 0.0, 0.0),
            Vec4::direction(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn scale_matrix_is_diagonal() {
        let s = Mat4::scale_matrix(Vec4::new(2.0, 3.0, 4.0, 0.0));
        assert_eq!(s.get(0, 0), 2.0);
        assert_eq!(s.get(1, 1), 3.0);
        assert_eq!(s.get(2, 2), 4.0);
        assert_eq!(s.get(3, 3), 1.0);
        assert_eq!(s * Vec4::point(1.0, -1.0, 1.0), Vec4::point(2.0, -3.0, 4.0));
    }

    #[test]
    fn identity_is_neutral() {
        let m = Mat4::rotation_matrix(Vec4::new(10.0, 20.0, 30.0, 0.0));
        assert_eq!(Mat4::identity() * m, m);
        assert_eq!(m * Mat4::identity(), m);
    }

    #[test]
    fn product_applies_right_operand_first() {
        let s = Mat4::scale_matrix(Vec4::new(2.0, 2.0, 2.0, 0.0));
        let t = Mat4::translation_matrix(Vec4::new(10.0, 0.0, 0.0, 0.0));
        let p = Vec4::point(1.0, 0.0, 0.0);
        assert_eq!((t * s) * p, Vec4::point(12.0, 0.0, 0.0));
        assert_eq!((s * t) * p, Vec4::point(22.0, 0.0, 0.0));
    }

    #[test]
    fn x_rotation_leaves_x_axis_fixed() {
        let r = Mat4::rotation_matrix(Vec4::new(90.0, 0.0, 0.0, 0.0));
        let p = r * Vec4::point(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(p, Vec4::point(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn y_rotation_takes_x_axis_to_z_axis() {
        let r = Mat4::rotation_matrix(Vec4::new(0.0, 90.0, 0.0, 0.0));
        let p = r * Vec4::point(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(p, Vec4::point(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn rotation_composes_y_after_x_and_z() {
        let angles = Vec4::new(90.0, 90.0, 90.0, 0.0);
        let expected =
            Mat4::rotation_y(90.0) * (Mat4::rotation_x(90.0) * Mat4::rotation_z(90.0));
        assert_eq!(Mat4::rotation_matrix(angles), expected);

        // X then Z via the kernel: (1,0,0) -> Z -> (0,1,0) -> X -> (0,0,-1),
        // and Y takes (0,0,-1) to (1,0,0).
        let p = Mat4::rotation_matrix(angles) * Vec4::point(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(p, Vec4::point(1.0, 0.0, 0.0), epsilon = 1e-12);

        // A different order lands somewhere else.
        let zxy = Mat4::rotation_z(90.0) * Mat4::rotation_x(90.0) * Mat4::rotation_y(90.0);
        let q = zxy * Vec4::point(1.0, 0.0, 0.0);
        assert!((p - q).magnitude() > 0.5);
    }

    #[test]
    fn add_and_scalar_mult_are_element_wise() {
        let i = Mat4::identity();
        let doubled = i + i;
        assert_eq!(doubled, i * 2.0);
        assert_eq!(doubled.get(2, 2), 2.0);
        assert_eq!(doubled.get(0, 1), 0.0);
    }

    #[test]
    fn display_is_row_major() {
        let t = Mat4::translation_matrix(Vec4::new(5.0, 0.0, 0.0, 0.0));
        let first = t.to_string().lines().next().map(str::to_owned);
        assert_eq!(
            first.as_deref(),
            Some("1.000000 0.000000 0.000000 5.000000")
        );
    }
}
