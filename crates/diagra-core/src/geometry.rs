//! Geometric primitives for diagram layout.
//!
//! Diagra places everything on an integer pixel grid using the SVG coordinate
//! system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin doubles as the fallback position for edge endpoints that name a
//! node which was never declared.

/// A 2D point in pixel coordinates.
///
/// # Examples
///
/// ```
/// # use diagra_core::geometry::Point;
/// let p1 = Point::new(10, 20);
/// let p2 = Point::new(30, 40);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid, Point::new(20, 30));
///
/// let shifted = p1.offset(5, -5);
/// assert_eq!(shifted, Point::new(15, 15));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns a point shifted by `dx` and `dy`
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the midpoint between this point and `other`.
    ///
    /// Division truncates toward zero, matching integer pixel placement.
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    /// Returns `true` if this is the origin `(0, 0)`
    pub fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }
}
