/// A coarse volume enclosing a shape, used to skip exact tests early.
pub trait BoundingVolume {
    /// Do the two volumes overlap? Volumes touching on their boundary do.
    fn intersects(&self, other: &Self) -> bool;

    /// Grows this volume so it also encloses `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume of the same kind enclosing `self` and `other`.
    fn merged(&self, other: &Self) -> Self;
}
