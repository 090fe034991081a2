/*

    Axis aligned 2D bounding rectangle.

    Empty rectangle convention:
    - min: (inf, inf)
    - max: (-inf, -inf)
    so that the first expand() establishes valid bounds and
    merging with an empty rectangle is a no-op.

    Corner order (counter clockwise, starting at min):

      3 ---- 2
      |      |
      0 ---- 1

    NaN is not guarded anywhere. A NaN coordinate never wins
    a comparison, so expanding by it leaves the edges as they
    were and containment tests against it are false.

    @author: bartu
    @date: 14 Nov, 2025
*/

use std::fmt;

use crate::prelude::*;
use crate::bounds::{BoundsCorners};
use crate::interval::{Interval};

#[derive(Debug)]
pub enum RectangleError {
    CornerIndexOutOfRange(usize),
}

impl fmt::Display for RectangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RectangleError::CornerIndexOutOfRange(i) => {
                write!(f, "Rectangle corner index {} is out of range, expected 0..=3", i)
            }
        }
    }
}

impl std::error::Error for RectangleError {}


#[derive(Debug, Clone, Copy, PartialEq, SmartDefault)]
pub struct Rectangle {
    #[default(Vector2::INFINITY)]
    pub min: Vector2,
    #[default(Vector2::NEG_INFINITY)]
    pub max: Vector2,
}

impl Rectangle {

    pub const EMPTY: Self = Self {
        min: Vector2::INFINITY,
        max: Vector2::NEG_INFINITY,
    };

    /// Returns the empty rectangle, see EMPTY.
    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn from_min_max(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    pub fn new_from(xint: &Interval, yint: &Interval) -> Self {
        Self {
            min: Vector2::new(xint.min, yint.min),
            max: Vector2::new(xint.max, yint.max),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y)
    }

    pub fn x_interval(&self) -> Interval {
        Interval::new(self.min.x, self.max.x)
    }

    pub fn y_interval(&self) -> Interval {
        Interval::new(self.min.y, self.max.y)
    }

    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    pub fn width(&self) -> Float {
        self.size().x
    }

    pub fn height(&self) -> Float {
        self.size().y
    }

    pub fn center(&self) -> Vector2 {
        (self.max + self.min) * 0.5
    }

    // Winding table, true picks max on that axis
    const CORNER_PICKS: [(bool, bool); 4] = [(false, false), (true, false), (true, true), (false, true)];

    pub fn corner(&self, index: usize) -> Result<Vector2, RectangleError> {
        match Self::CORNER_PICKS.get(index) {
            Some(&pick) => Ok(self.pick_corner(pick)),
            None => {
                debug!("Rectangle corner index {} requested, only 0..=3 exist", index);
                Err(RectangleError::CornerIndexOutOfRange(index))
            }
        }
    }

    /// All four corners, same order as corner()
    pub fn corners(&self) -> [Vector2; 4] {
        std::array::from_fn(|i| self.pick_corner(Self::CORNER_PICKS[i]))
    }

    #[inline]
    fn pick_corner(&self, (max_x, max_y): (bool, bool)) -> Vector2 {
        Vector2::new(
            if max_x { self.max.x } else { self.min.x },
            if max_y { self.max.y } else { self.min.y },
        )
    }

    #[inline]
    pub fn expand(&mut self, pt: &Vector2) {
        let (mut xint, mut yint) = (self.x_interval(), self.y_interval());
        xint.expand(pt.x);
        yint.expand(pt.y);
        *self = Self::new_from(&xint, &yint);
    }

    #[inline]
    pub fn expanded(mut self, pt: Vector2) -> Rectangle {
        self.expand(&pt);
        self
    }

    #[inline]
    pub fn merge(&mut self, other: &Rectangle) {
        let (mut xint, mut yint) = (self.x_interval(), self.y_interval());
        xint.merge(&other.x_interval());
        yint.merge(&other.y_interval());
        *self = Self::new_from(&xint, &yint);
    }

    #[inline]
    pub fn merged(mut self, other: Rectangle) -> Rectangle {
        self.merge(&other);
        self
    }

    /// Inclusive on every edge
    pub fn contains_point(&self, pt: &Vector2) -> bool {
        self.x_interval().contains(pt.x) && self.y_interval().contains(pt.y)
    }

    /// True iff every corner of `other` lies in self. The empty
    /// rectangle has its corners at infinity, so nothing contains it.
    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        other.corners().iter().all(|c| self.contains_point(c))
    }

    /// Touching edges count as intersecting.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x_interval().overlaps(&other.x_interval())
            && self.y_interval().overlaps(&other.y_interval())
    }

    /// Rectangle enclosing the (x, y) of every corner of `bounds` after
    /// `transform`. All 8 corners are used since under rotation or
    /// perspective any of them can become the extremum.
    pub fn from_projected_bounds<B, T>(bounds: &B, transform: &T) -> Rectangle
    where
        B: BoundsCorners + ?Sized,
        T: PointTransform + ?Sized,
    {
        let mut rect = Rectangle::EMPTY;
        for corner in bounds.corners().iter() {
            let p = transform.apply(corner);
            rect.expand(&Vector2::new(p.x, p.y));
        }
        rect
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[({}, {}) - ({}, {})]", self.min.x, self.min.y, self.max.x, self.max.y)
    }
}


#[cfg(test)]
mod tests {
    use super::*; // access to the outer scope
    use crate::bounds::Bounds;

    fn rect(x0: Float, y0: Float, x1: Float, y1: Float) -> Rectangle {
        Rectangle::from_min_max(Vector2::new(x0, y0), Vector2::new(x1, y1))
    }

    #[test]
    fn new_and_default_are_the_empty_sentinel() {
        assert_eq!(Rectangle::new(), Rectangle::EMPTY);
        assert_eq!(Rectangle::default(), Rectangle::EMPTY);
        assert!(Rectangle::new().is_empty());
        assert_eq!(Rectangle::EMPTY.min, Vector2::splat(Float::INFINITY));
        assert_eq!(Rectangle::EMPTY.max, Vector2::splat(Float::NEG_INFINITY));
    }

    #[test]
    fn expand_twice_from_empty() {
        let r = Rectangle::new()
            .expanded(Vector2::new(1., 1.))
            .expanded(Vector2::new(3., 4.));
        assert_eq!(r, rect(1., 1., 3., 4.));
        assert!(!r.is_empty());
    }

    #[test]
    fn expand_in_place_matches_expanded() {
        let original = rect(0., 0., 1., 1.);
        let pt = Vector2::new(-2., 5.);
        let mut r = original;
        r.expand(&pt);
        assert_eq!(r, original.expanded(pt));
        assert_eq!(r, rect(-2., 0., 1., 5.));
    }

    #[test]
    fn merge_in_place_leaves_other_untouched() {
        let a_original = rect(0., 0., 1., 1.);
        let b = rect(2., -1., 3., 0.5);
        let mut a = a_original;
        a.merge(&b);
        assert_eq!(a, a_original.merged(b));
        assert_eq!(a, rect(0., -1., 3., 1.));
        assert_eq!(b, rect(2., -1., 3., 0.5));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let r = rect(-1., 2., 3., 4.);
        assert_eq!(Rectangle::new().merged(r), r);
        assert_eq!(r.merged(Rectangle::new()), r);
    }

    #[test]
    fn overlapping_but_not_contained() {
        let a = rect(0., 0., 2., 2.);
        let b = rect(1., 1., 3., 3.);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.contains_rectangle(&b));
        assert!(!b.contains_rectangle(&a));
    }

    #[test]
    fn touching_edges_intersect() {
        let a = rect(0., 0., 1., 1.);
        assert!(a.intersects(&rect(1., 0., 2., 1.)));
        assert!(a.intersects(&rect(1., 1., 2., 2.))); // corner only
        assert!(!a.intersects(&rect(1.0001, 0., 2., 1.)));
    }

    #[test]
    fn containment_is_inclusive() {
        let a = rect(0., 0., 2., 2.);
        assert!(a.contains_rectangle(&a));
        assert!(a.contains_rectangle(&rect(0., 0., 1., 2.)));
        assert!(a.contains_point(&Vector2::new(2., 0.)));
        assert!(!a.contains_point(&Vector2::new(2.1, 0.)));
        assert!(!Rectangle::EMPTY.contains_point(&Vector2::ZERO));
    }

    #[test]
    fn empty_rectangle_is_neither_contained_nor_intersected() {
        let a = rect(0., 0., 1., 1.);
        assert!(!a.contains_rectangle(&Rectangle::EMPTY));
        assert!(!a.intersects(&Rectangle::EMPTY));
        assert!(!Rectangle::EMPTY.contains_rectangle(&a));
        assert!(!Rectangle::EMPTY.contains_rectangle(&Rectangle::EMPTY));
        assert!(!Rectangle::EMPTY.intersects(&Rectangle::EMPTY));
    }

    #[test]
    fn corner_and_corners_share_one_winding() {
        let r = rect(-3., 2., 5., 7.);
        let corners = r.corners();
        for i in 0..4 {
            assert_eq!(r.corner(i).unwrap(), corners[i]);
        }
    }

    #[test]
    fn corners_wind_counter_clockwise_from_min() {
        let r = rect(0., 0., 1., 1.);
        let expected = [
            Vector2::new(0., 0.),
            Vector2::new(1., 0.),
            Vector2::new(1., 1.),
            Vector2::new(0., 1.),
        ];
        for (i, e) in expected.iter().enumerate() {
            assert_eq!(r.corner(i).unwrap(), *e);
        }
        assert_eq!(r.corners(), expected);
    }

    #[test]
    fn corner_index_out_of_range_is_an_error() {
        let r = rect(0., 0., 1., 1.);
        match r.corner(4) {
            Err(RectangleError::CornerIndexOutOfRange(i)) => assert_eq!(i, 4),
            Ok(p) => panic!("expected an error, got {:?}", p),
        }
        assert!(r.corner(usize::MAX).is_err());
    }

    #[test]
    fn size_and_center() {
        let r = rect(-1., 2., 3., 8.);
        assert_eq!(r.size(), Vector2::new(4., 6.));
        assert_eq!(r.width(), 4.);
        assert_eq!(r.height(), 6.);
        assert_eq!(r.center(), Vector2::new(1., 5.));
    }

    #[test]
    fn nan_point_does_not_move_bounds() {
        let mut r = rect(0., 0., 1., 1.);
        r.expand(&Vector2::new(Float::NAN, 0.5));
        assert_eq!(r, rect(0., 0., 1., 1.));
        assert!(!r.contains_point(&Vector2::new(Float::NAN, 0.5)));
    }

    #[test]
    fn identity_projection_keeps_xy_extents() {
        let b = Bounds::new(Vector3::new(-1., 2., -5.), Vector3::new(3., 4., 5.));
        let r = Rectangle::from_projected_bounds(&b, &Matrix4::IDENTITY);
        assert_eq!(r, rect(-1., 2., 3., 4.));
    }

    #[test]
    fn display_lists_min_then_max() {
        let r = rect(0., 1., 2., 3.);
        assert_eq!(format!("{}", r), "[(0, 1) - (2, 3)]");
    }
}
