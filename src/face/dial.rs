//! Time-independent geometry of the clock face.
//!
//! All coordinates live in a 200x200 view box centered on (100, 100); angles
//! are degrees clockwise from twelve o'clock.

/// Center of the face on both axes.
pub const CENTER: f64 = 100.0;
/// Side length of the square view box.
pub const VIEW_BOX: f64 = 200.0;

const HOUR_TICK_INNER: f64 = 75.0;
const MINUTE_TICK_INNER: f64 = 78.0;
const TICK_OUTER: f64 = 82.0;
const NUMERAL_RADIUS: f64 = 62.0;
const SCREW_RADIUS: f64 = 85.0;
const SCREW_ANGLES: [f64; 4] = [45.0, 135.0, 225.0, 315.0];

/// A point in view-box coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

/// A radial tick mark from `inner` to `outer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Angle of the tick.
    pub angle: f64,
    /// End closest to the center.
    pub inner: Point,
    /// End closest to the rim.
    pub outer: Point,
}

/// An hour numeral and where its center sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numeral {
    /// Printed number, 1 to 12.
    pub label: u32,
    /// Center of the text.
    pub position: Point,
}

/// The point `radius` away from the center at `angle`.
pub fn polar(angle: f64, radius: f64) -> Point {
    let radians = (angle - 90.0).to_radians();
    Point {
        x: CENTER + radius * radians.cos(),
        y: CENTER + radius * radians.sin(),
    }
}

/// Twelve long ticks, one every 30°.
pub fn hour_ticks() -> Vec<Tick> {
    (0..12u32)
        .map(|i| tick(f64::from(i) * 30.0, HOUR_TICK_INNER))
        .collect()
}

/// Short ticks every 6°, leaving out the positions covered by hour ticks.
pub fn minute_ticks() -> Vec<Tick> {
    (0..60u32)
        .filter(|i| i % 5 != 0)
        .map(|i| tick(f64::from(i) * 6.0, MINUTE_TICK_INNER))
        .collect()
}

/// The numerals 12, 1, ..., 11 at the hour angles.
pub fn numerals() -> Vec<Numeral> {
    (0..12u32)
        .map(|i| Numeral {
            label: if i == 0 { 12 } else { i },
            position: polar(f64::from(i) * 30.0, NUMERAL_RADIUS),
        })
        .collect()
}

/// Decorative screw heads on the diagonals.
pub fn screws() -> Vec<Point> {
    SCREW_ANGLES
        .iter()
        .map(|&angle| polar(angle, SCREW_RADIUS))
        .collect()
}

fn tick(angle: f64, inner_radius: f64) -> Tick {
    Tick {
        angle,
        inner: polar(angle, inner_radius),
        outer: polar(angle, TICK_OUTER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn twelve_hour_ticks_thirty_degrees_apart() {
        let ticks = hour_ticks();

        assert_eq!(ticks.len(), 12);
        for (i, tick) in ticks.iter().enumerate() {
            assert!(close(tick.angle, i as f64 * 30.0));
        }
    }

    #[test]
    fn minute_ticks_skip_hour_positions() {
        let ticks = minute_ticks();

        assert_eq!(ticks.len(), 48);
        assert!(ticks.iter().all(|t| (t.angle / 6.0) as u32 % 5 != 0));
    }

    #[test]
    fn twelve_sits_at_the_top() {
        let numerals = numerals();

        assert_eq!(numerals.len(), 12);
        assert_eq!(numerals[0].label, 12);
        assert!(close(numerals[0].position.x, CENTER));
        assert!(close(numerals[0].position.y, CENTER - 62.0));
        assert_eq!(numerals[3].label, 3);
        assert!(close(numerals[3].position.x, CENTER + 62.0));
    }

    #[test]
    fn four_screws_on_the_diagonals() {
        let screws = screws();

        assert_eq!(screws.len(), 4);
        assert!(screws[0].x > CENTER && screws[0].y < CENTER);
        assert!(screws[2].x < CENTER && screws[2].y > CENTER);
    }
}
