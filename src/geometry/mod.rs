use num_traits::Float;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// 2D Point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight line distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}


/// Axis aligned bounding box of the map
/// Used to turn normalized [0, 1] coordinates into map coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {

    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Degenerate box around a single point
    pub fn from_point(point: Point) -> Self {
        Self { min: point, max: point }
    }

    /// Grow the box so it contains the point
    pub fn expand(&mut self, point: &Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Map a fraction of the box onto a point in map coordinates
    /// Values outside [0, 1] are not clamped and land outside the box
    pub fn denormalize(&self, x_fraction: f64, y_fraction: f64) -> Point {
        Point {
            x: self.min.x + x_fraction * self.width(),
            y: self.min.y + y_fraction * self.height(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(euclidean(1.0f32, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_point_distance_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(-2.0, 6.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn test_bounds_expand() {
        let mut bounds = Bounds::from_point(Point::new(1.0, 1.0));
        bounds.expand(&Point::new(-1.0, 3.0));
        bounds.expand(&Point::new(4.0, 2.0));

        assert_eq!(bounds.min, Point::new(-1.0, 1.0));
        assert_eq!(bounds.max, Point::new(4.0, 3.0));
        assert_eq!(bounds.width(), 5.0);
        assert_eq!(bounds.height(), 2.0);
    }

    #[test]
    fn test_denormalize_does_not_clamp() {
        let bounds = Bounds::new(Point::new(10.0, 20.0), Point::new(20.0, 40.0));

        assert_eq!(bounds.denormalize(0.0, 0.0), Point::new(10.0, 20.0));
        assert_eq!(bounds.denormalize(0.5, 0.25), Point::new(15.0, 25.0));
        assert_eq!(bounds.denormalize(1.5, -0.5), Point::new(25.0, 10.0));
    }
}
