//! Integer 2D coordinates

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A position or offset on a 2D grid
///
/// `x` grows to the right and `y` grows downwards, matching the order in
/// which puzzle input is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const UP: Point = Point::new(0, -1);
    pub const RIGHT: Point = Point::new(1, 0);
    pub const DOWN: Point = Point::new(0, 1);
    pub const LEFT: Point = Point::new(-1, 0);

    /// The four orthogonal unit steps, clockwise from up
    pub const ORTHOGONAL: [Point; 4] = [Point::UP, Point::RIGHT, Point::DOWN, Point::LEFT];

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rotate a direction 90° clockwise (with y pointing down)
    pub const fn turn_right(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Unit step (per axis -1, 0 or 1) moving from `self` towards `target`
    ///
    /// Compares instead of subtracting, so it holds over the whole `i64` range.
    pub fn step_towards(self, target: Point) -> Self {
        Self::new(
            target.x.cmp(&self.x) as i64,
            target.y.cmp(&self.y) as i64,
        )
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_turn_right_cycles_clockwise() {
        assert_eq!(Point::UP.turn_right(), Point::RIGHT);
        assert_eq!(Point::RIGHT.turn_right(), Point::DOWN);
        assert_eq!(Point::DOWN.turn_right(), Point::LEFT);
        assert_eq!(Point::LEFT.turn_right(), Point::UP);
    }

    #[test]
    fn test_step_towards() {
        assert_eq!(Point::new(0, 0).step_towards(Point::new(-7, 0)), Point::LEFT);
        assert_eq!(Point::new(1, 1).step_towards(Point::new(4, 4)), Point::new(1, 1));
        assert_eq!(Point::new(2, 2).step_towards(Point::new(2, 2)), Point::default());

        let far = Point::new(i64::MIN, i64::MAX).step_towards(Point::new(i64::MAX, i64::MIN));
        assert_eq!(far, Point::new(1, -1));
    }

    proptest! {
        #[test]
        fn prop_sub_undoes_add(
            (ax, ay, bx, by) in (-1000i64..1000, -1000i64..1000, -1000i64..1000, -1000i64..1000)
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(a + b - b, a);
            prop_assert_eq!(a - b, a + -b);
            prop_assert_eq!(b * 2, b + b);
        }
    }
}
