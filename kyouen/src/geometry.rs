use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Two distances closer than this are considered equal.
pub const EPSILON: f64 = 1e-7;

/// Whether two distances are equal within [`EPSILON`] (strictly).
pub fn approx_eq(d1: f64, d2: f64) -> bool {
    (d1 - d2).abs() < EPSILON
}

/// A cell on the grid.
///
/// `x` is the column and `y` is the row, both starting at 0 in the top left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point in the plane, used for all intermediate computations.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatPoint {
    pub x: f64,
    pub y: f64,
}

impl FloatPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: FloatPoint) -> f64 {
        let diff = self - other;
        diff.x.hypot(diff.y)
    }
}

impl From<Point> for FloatPoint {
    fn from(p: Point) -> Self {
        Self {
            x: f64::from(p.x),
            y: f64::from(p.y),
        }
    }
}

impl Add for FloatPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for FloatPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::fmt::Display for FloatPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An infinite line through two distinct points.
///
/// `p1` doubles as the origin and `p2 - p1` as the direction when intersecting
/// lines. The coefficients describe the same line in implicit form,
/// `a * x + b * y + c = 0`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: FloatPoint,
    pub p2: FloatPoint,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    pub fn new(p1: FloatPoint, p2: FloatPoint) -> Self {
        Self {
            p1,
            p2,
            a: p1.y - p2.y,
            b: p2.x - p1.x,
            c: p1.x * p2.y - p2.x * p1.y,
        }
    }

    pub fn direction(&self) -> FloatPoint {
        self.p2 - self.p1
    }

    /// Whether `p` lies on the line, up to [`EPSILON`].
    pub fn contains(&self, p: FloatPoint) -> bool {
        approx_eq(self.a * p.x + self.b * p.y + self.c, 0.0)
    }
}

pub fn midpoint(p1: FloatPoint, p2: FloatPoint) -> FloatPoint {
    FloatPoint {
        x: (p1.x + p2.x) / 2.0,
        y: (p1.y + p2.y) / 2.0,
    }
}

/// The line of all points that are equally far from `p1` and `p2`.
///
/// It passes through the midpoint, with the direction `p1 - p2` rotated by 90°.
pub fn perpendicular_bisector(p1: FloatPoint, p2: FloatPoint) -> Line {
    let mid = midpoint(p1, p2);
    let diff = p1 - p2;
    let perpendicular = FloatPoint {
        x: diff.y,
        y: -diff.x,
    };
    Line::new(mid, mid + perpendicular)
}

/// The point where two lines cross.
///
/// Returns `None` if the lines are parallel or identical, i.e. when the
/// determinant of their directions is exactly zero.
pub fn intersect(l1: &Line, l2: &Line) -> Option<FloatPoint> {
    let FloatPoint { x: f1, y: g1 } = l1.direction();
    let FloatPoint { x: f2, y: g2 } = l2.direction();

    let det = f2 * g1 - f1 * g2;
    if det == 0.0 {
        return None;
    }

    let FloatPoint { x: dx, y: dy } = l2.p1 - l1.p1;
    let t1 = (f2 * dy - g2 * dx) / det;

    Some(FloatPoint {
        x: l1.p1.x + f1 * t1,
        y: l1.p1.y + g1 * t1,
    })
}

pub fn distance(p1: FloatPoint, p2: FloatPoint) -> f64 {
    p1.distance(p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(x: f64, y: f64) -> FloatPoint {
        FloatPoint::new(x, y)
    }

    #[test]
    fn midpoint_of_two_points() {
        assert_eq!(midpoint(fp(1.0, 1.0), fp(3.0, 4.0)), fp(2.0, 2.5));
        assert_eq!(midpoint(fp(1.0, 3.0), fp(10.0, 20.0)), fp(5.5, 11.5));
    }

    #[test]
    fn add_and_sub() {
        assert_eq!(fp(1.0, 4.0) + fp(3.0, 2.0), fp(4.0, 6.0));
        assert_eq!(fp(1.0, 4.0) - fp(3.0, 2.0), fp(-2.0, 2.0));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(fp(1.0, 1.0), fp(4.0, 5.0)), 5.0);
        assert_eq!(distance(fp(4.0, 5.0), fp(1.0, 1.0)), 5.0);
    }

    #[test]
    fn line_coefficients() {
        let line = Line::new(fp(1.0, 1.0), fp(3.0, 4.0));
        assert_eq!((line.a, line.b, line.c), (-3.0, 2.0, 1.0));
        assert!(line.contains(fp(5.0, 7.0)));
        assert!(!line.contains(fp(5.0, 6.0)));
    }

    #[test]
    fn bisector_through_midpoint() {
        let line = perpendicular_bisector(fp(1.0, 1.0), fp(3.0, 4.0));
        assert_eq!(line, Line::new(fp(2.0, 2.5), fp(-1.0, 4.5)));
        assert_eq!((line.a, line.b, line.c), (-2.0, -3.0, 11.5));

        let line = perpendicular_bisector(fp(1.0, 3.0), fp(10.0, 20.0));
        assert_eq!(line.p1, fp(5.5, 11.5));
        assert_eq!(line.p2, fp(-11.5, 20.5));
    }

    #[test]
    fn bisector_is_equidistant() {
        let (p1, p2) = (fp(0.0, 2.0), fp(5.0, 3.0));
        let line = perpendicular_bisector(p1, p2);
        let far = line.p1 + line.direction() + line.direction();
        assert!(approx_eq(p1.distance(far), p2.distance(far)));
    }

    #[test]
    fn intersection_of_diagonals() {
        let l1 = Line::new(fp(1.0, 1.0), fp(3.0, 3.0));
        let l2 = Line::new(fp(0.0, 4.0), fp(4.0, 0.0));
        assert_eq!(intersect(&l1, &l2), Some(fp(2.0, 2.0)));
    }

    #[test]
    fn intersection_with_horizontal() {
        let l1 = Line::new(fp(1.0, 1.0), fp(3.0, 3.0));
        let l2 = Line::new(fp(0.0, 3.0), fp(10.0, 3.0));
        assert_eq!(intersect(&l1, &l2), Some(fp(3.0, 3.0)));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let l1 = Line::new(fp(0.0, 0.0), fp(1.0, 1.0));
        let l2 = Line::new(fp(0.0, 1.0), fp(2.0, 3.0));
        assert_eq!(intersect(&l1, &l2), None);
        // Identical lines count as parallel, too
        assert_eq!(intersect(&l1, &l1), None);
    }

    #[test]
    fn epsilon_boundary() {
        assert!(!approx_eq(0.0, 1e-7));
        assert!(!approx_eq(1e-7, 0.0));
        assert!(approx_eq(0.0, 9.9e-8));
        assert!(approx_eq(9.9e-8, 0.0));
        assert!(approx_eq(2.5, 2.5));
    }
}
