//! Where a widget sits on screen.

use kurbo::{Point, Rect, Size};

/// Placement of a laid out node, pulled from the host on demand.
pub trait LayoutCoordinates {
    /// `false` once the node has been removed from the tree
    fn is_attached(&self) -> bool;

    /// Origin of this node in root space
    fn position_in_root(&self) -> Point;

    fn size(&self) -> Size;

    /// Converts `position`, expressed in `other`'s space, into this node's space.
    fn local_position_of(&self, other: &dyn LayoutCoordinates, position: Point) -> Point {
        position + (other.position_in_root() - self.position_in_root())
    }

    fn bounds_in_root(&self) -> Rect {
        Rect::from_origin_size(self.position_in_root(), self.size())
    }
}

/// Static coordinates for hosts that position widgets themselves
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedCoordinates {
    pub origin: Point,
    pub size: Size,
    pub attached: bool,
}

impl FixedCoordinates {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            size,
            attached: true,
        }
    }

    pub fn detached(mut self) -> Self {
        self.attached = false;
        self
    }
}

impl LayoutCoordinates for FixedCoordinates {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn position_in_root(&self) -> Point {
        self.origin
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_position_of_sibling() {
        let container = FixedCoordinates::new(Point::new(10.0, 10.0), Size::new(500.0, 500.0));
        let child = FixedCoordinates::new(Point::new(30.0, 50.0), Size::new(100.0, 20.0));

        // Child origin expressed in container space.
        let origin = container.local_position_of(&child, Point::ZERO);
        assert_eq!(origin, Point::new(20.0, 40.0));
        assert_eq!(child.bounds_in_root(), Rect::new(30.0, 50.0, 130.0, 70.0));
    }

    #[test]
    fn detached_coordinates() {
        let coords = FixedCoordinates::new(Point::ZERO, Size::ZERO).detached();
        assert!(!coords.is_attached());
    }
}
