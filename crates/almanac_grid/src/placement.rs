//! Popup placement geometry
//!
//! Where a picker popup opens relative to its trigger button. The popup
//! prefers the corner below and to the right of the anchor; when it
//! would overflow the container it slides left along the right edge and
//! flips above the anchor if there is room, otherwise it stays below.
//! Pure geometry; the host does the actual placement.

/// A point in container coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }
}

/// Top-left corner for a popup of size `popup` anchored to the trigger
/// rectangle `anchor` inside a container of size `container`.
pub fn popup_origin(anchor: Rect, popup: Size, container: Size) -> Point {
    let preferred = Point::new(anchor.max_x(), anchor.max_y());

    let x = if preferred.x + popup.width > container.width {
        container.width - popup.width
    } else {
        preferred.x
    };

    let y = if preferred.y + popup.height > container.height {
        if popup.height > anchor.origin.y {
            // No room above either; keep the overflowing spot below.
            preferred.y
        } else {
            anchor.origin.y - popup.height
        }
    } else {
        preferred.y
    };

    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size::new(500.0, 500.0);
    const POPUP: Size = Size::new(200.0, 200.0);

    #[test]
    fn opens_below_right_when_it_fits() {
        let anchor = Rect::new(50.0, 50.0, 140.0, 28.0);
        let origin = popup_origin(anchor, POPUP, CONTAINER);
        assert_eq!(origin, Point::new(190.0, 78.0));
    }

    #[test]
    fn slides_left_at_the_right_edge() {
        let anchor = Rect::new(400.0, 50.0, 140.0, 28.0);
        let origin = popup_origin(anchor, POPUP, CONTAINER);
        assert_eq!(origin.x, 300.0);
        assert_eq!(origin.y, 78.0);
    }

    #[test]
    fn flips_above_at_the_bottom_edge() {
        let anchor = Rect::new(50.0, 420.0, 140.0, 28.0);
        let origin = popup_origin(anchor, POPUP, CONTAINER);
        assert_eq!(origin.y, 220.0);
    }

    #[test]
    fn stays_below_when_no_room_above() {
        // Anchor near the top of a short container: flipping would put
        // the popup off-screen, so the below position wins.
        let short = Size::new(500.0, 250.0);
        let anchor = Rect::new(50.0, 100.0, 140.0, 28.0);
        let origin = popup_origin(anchor, POPUP, short);
        assert_eq!(origin.y, 128.0);
    }

    #[test]
    fn corner_overflow_adjusts_both_axes() {
        let anchor = Rect::new(420.0, 420.0, 140.0, 28.0);
        let origin = popup_origin(anchor, POPUP, CONTAINER);
        assert_eq!(origin, Point::new(300.0, 220.0));
    }
}
