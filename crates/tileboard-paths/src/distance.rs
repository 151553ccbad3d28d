use tileboard_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a board without blocked tiles, obstacles or portals this is exactly
/// the search cost between two tiles.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
