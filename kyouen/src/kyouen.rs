use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::geometry::{approx_eq, distance, intersect, perpendicular_bisector};
use crate::{parse, FloatPoint, Line, Point, StageError};

/// The verdict for four stones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum KyouenResult {
    NotKyouen,
    /// All four stones lie on the circle around `center`.
    CircleKyouen { center: FloatPoint },
    /// All four stones lie on one straight line.
    LineKyouen,
}

impl KyouenResult {
    pub fn is_kyouen(&self) -> bool {
        !matches!(self, KyouenResult::NotKyouen)
    }
}

/// The figure that four stones of a kyouen lie on.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle { center: FloatPoint, radius: f64 },
    Line(Line),
}

/// Four stones that form a kyouen, together with their circle or line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kyouen {
    pub stones: [Point; 4],
    pub shape: Shape,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Circle { center, radius } => write!(
                f,
                "circle around ({:.3}, {:.3}) with radius {:.3}",
                center.x, center.y, radius
            ),
            Shape::Line(line) => write!(f, "line through {} and {}", line.p1, line.p2),
        }
    }
}

impl Kyouen {
    pub fn is_line(&self) -> bool {
        matches!(self.shape, Shape::Line(_))
    }

    /// Whether `p` lies on the circle or line, up to [`EPSILON`](crate::geometry::EPSILON).
    pub fn passes_through(&self, p: Point) -> bool {
        match self.shape {
            Shape::Circle { center, radius } => approx_eq(distance(p.into(), center), radius),
            Shape::Line(line) => line.contains(p.into()),
        }
    }
}

/// Decides whether four distinct stones lie on one circle or one line.
///
/// The circle candidate is the intersection of the perpendicular bisectors of
/// `stones[0]`/`stones[1]` and `stones[1]`/`stones[2]`, which is equally far
/// from the first three stones. It is a kyouen if `stones[3]` is as far from it
/// as `stones[0]`, within [`EPSILON`](crate::geometry::EPSILON).
///
/// If those bisectors are parallel, the first three stones are on one line,
/// and the result is a line kyouen only if the last three are, too.
pub fn classify(stones: [Point; 4]) -> KyouenResult {
    let [p1, p2, p3, p4] = stones.map(FloatPoint::from);

    let l12 = perpendicular_bisector(p1, p2);
    let l23 = perpendicular_bisector(p2, p3);

    match intersect(&l12, &l23) {
        Some(center) => {
            if approx_eq(distance(p1, center), distance(p4, center)) {
                KyouenResult::CircleKyouen { center }
            } else {
                KyouenResult::NotKyouen
            }
        }
        None => {
            let l34 = perpendicular_bisector(p3, p4);
            if intersect(&l23, &l34).is_none() {
                KyouenResult::LineKyouen
            } else {
                KyouenResult::NotKyouen
            }
        }
    }
}

/// Like [`classify()`], but also describes the circle or line.
///
/// The radius is measured from the first stone; the line is the one through
/// the first two stones.
pub fn classify_kyouen(stones: [Point; 4]) -> Option<Kyouen> {
    let shape = match classify(stones) {
        KyouenResult::NotKyouen => return None,
        KyouenResult::CircleKyouen { center } => Shape::Circle {
            center,
            radius: distance(stones[0].into(), center),
        },
        KyouenResult::LineKyouen => Shape::Line(Line::new(stones[0].into(), stones[1].into())),
    };
    Some(Kyouen { stones, shape })
}

/// Searches all combinations of four stones for a kyouen.
///
/// Combinations are tried in the order of the list, and the first kyouen is
/// returned.
pub fn find_kyouen(stones: &[Point]) -> Option<Kyouen> {
    stones
        .iter()
        .copied()
        .tuple_combinations()
        .find_map(|(p1, p2, p3, p4)| classify_kyouen([p1, p2, p3, p4]))
}

/// Requires exactly four stones.
pub fn four_stones(stones: &[Point]) -> Result<[Point; 4], StageError> {
    <[Point; 4]>::try_from(stones).map_err(|_| StageError::InvalidStoneCount {
        count: stones.len(),
    })
}

/// Whether exactly four stones are given and they form a kyouen.
pub fn check_stones(stones: &[Point]) -> Result<bool, StageError> {
    let stones = four_stones(stones)?;
    Ok(classify(stones).is_kyouen())
}

/// Whether the stones of a stage string form a kyouen.
///
/// Fails if the stage is malformed or does not have exactly four stones.
pub fn check(stage: &str) -> Result<bool, StageError> {
    let stones = parse(stage)?;
    check_stones(&stones)
}

/// Like [`check()`], but also describes the circle or line.
///
/// Returns `Ok(None)` if the four stones are not a kyouen.
pub fn check_kyouen(stage: &str) -> Result<Option<Kyouen>, StageError> {
    let stones = four_stones(&parse(stage)?)?;
    Ok(classify_kyouen(stones))
}

/// Like [`check()`], but invalid stages are simply not a kyouen.
pub fn is_kyouen(stage: &str) -> bool {
    check(stage).unwrap_or(false)
}
