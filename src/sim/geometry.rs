//! Axis-aligned overlap tests
//!
//! Both endpoints of an interval are inclusive, so rectangles whose borders
//! merely touch count as intersecting.

/// A closed integer interval `[start, stop]`, assumed increasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i32,
    pub stop: i32,
}

impl Interval {
    pub fn new(start: i32, stop: i32) -> Self {
        Self { start, stop }
    }

    /// Whether `v` lies within the interval (endpoints included)
    #[inline]
    pub fn contains(&self, v: i32) -> bool {
        self.start <= v && v <= self.stop
    }
}

/// An axis-aligned rectangle in screen space (Y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Horizontal extent `[left, left + width]`
    #[inline]
    pub fn x_interval(&self) -> Interval {
        Interval::new(self.left, self.left + self.width)
    }

    /// Vertical extent `[top, top + height]`
    #[inline]
    pub fn y_interval(&self) -> Interval {
        Interval::new(self.top, self.top + self.height)
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

/// Check whether two intervals share at least one point
pub fn intervals_overlap(a: Interval, b: Interval) -> bool {
    a.contains(b.start) || a.contains(b.stop) || (b.start <= a.start && a.stop <= b.stop)
}

/// Check whether two rectangles intersect (touching borders included)
pub fn rects_intersect(r1: &Rect, r2: &Rect) -> bool {
    intervals_overlap(r1.x_interval(), r2.x_interval())
        && intervals_overlap(r1.y_interval(), r2.y_interval())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iv(start: i32, stop: i32) -> Interval {
        Interval::new(start, stop)
    }

    #[test]
    fn test_intervals_touching() {
        assert!(intervals_overlap(iv(0, 5), iv(5, 10)));
        assert!(intervals_overlap(iv(5, 10), iv(0, 5)));
    }

    #[test]
    fn test_intervals_disjoint() {
        assert!(!intervals_overlap(iv(0, 4), iv(5, 10)));
        assert!(!intervals_overlap(iv(20, 30), iv(-10, 19)));
    }

    #[test]
    fn test_intervals_containment() {
        assert!(intervals_overlap(iv(0, 100), iv(10, 20)));
        assert!(intervals_overlap(iv(10, 20), iv(0, 100)));
    }

    #[test]
    fn test_intervals_identical_and_partial() {
        assert!(intervals_overlap(iv(3, 7), iv(3, 7)));
        assert!(intervals_overlap(iv(0, 10), iv(5, 15)));
        assert!(intervals_overlap(iv(5, 15), iv(0, 10)));
    }

    #[test]
    fn test_rects_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        // Overlapping corner
        assert!(rects_intersect(&a, &Rect::new(5, 5, 10, 10)));
        // Borders touching
        assert!(rects_intersect(&a, &Rect::new(10, 0, 10, 10)));
        assert!(rects_intersect(&a, &Rect::new(10, 10, 5, 5)));
        // Contained
        assert!(rects_intersect(&a, &Rect::new(2, 2, 3, 3)));
        // Overlap on one axis only
        assert!(!rects_intersect(&a, &Rect::new(0, 11, 10, 10)));
        assert!(!rects_intersect(&a, &Rect::new(11, 0, 10, 10)));
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(770, 250, 10, 100);
        assert_eq!(r.right(), 780);
        assert_eq!(r.bottom(), 350);
        assert_eq!(r.x_interval(), iv(770, 780));
        assert_eq!(r.y_interval(), iv(250, 350));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500i32..500, -500i32..500, 1i32..200, 1i32..200)
            .prop_map(|(l, t, w, h)| Rect::new(l, t, w, h))
    }

    proptest! {
        #[test]
        fn prop_rects_intersect_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(rects_intersect(&a, &b), rects_intersect(&b, &a));
        }

        #[test]
        fn prop_rect_intersects_itself(a in rect_strategy()) {
            prop_assert!(rects_intersect(&a, &a));
        }

        #[test]
        fn prop_overlap_matches_closed_interval_semantics(
            s1 in -100i32..100, l1 in 1i32..50,
            s2 in -100i32..100, l2 in 1i32..50,
        ) {
            let (a, b) = (iv(s1, s1 + l1), iv(s2, s2 + l2));
            let expected = a.start.max(b.start) <= a.stop.min(b.stop);
            prop_assert_eq!(intervals_overlap(a, b), expected);
        }
    }
}
