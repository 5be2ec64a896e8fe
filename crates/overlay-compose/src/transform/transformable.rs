/// Trait for types that can be (geometrically) transformed.
pub trait Transformable {
    /// Translate (as in moves) by the given offset.
    fn translate(&mut self, offset: na::Vector2<f64>);
    /// Rotate by the given angle (in degrees) around the center.
    fn rotate(&mut self, degrees: f64, center: na::Point2<f64>);
}
