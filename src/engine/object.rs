/// Something occupying a horizontal extent of the play-field.
pub trait Object {
    fn left(&self) -> f64;
    fn right(&self) -> f64;

    /// Open-interval overlap: objects whose edges merely touch do not overlap.
    fn overlaps_horizontally<T: Object>(&self, other: &T) -> bool {
        interval_sec(self.left(), self.right(), other.left(), other.right())
    }
}

fn interval_sec(l1: f64, r1: f64, l2: f64, r2: f64) -> bool {
    r1 > l2 && l1 < r2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_sec() {
        assert!(interval_sec(0.0, 10.0, 5.0, 15.0));
        assert!(interval_sec(5.0, 15.0, 0.0, 10.0));
        assert!(interval_sec(0.0, 10.0, 2.0, 3.0));
        assert!(!interval_sec(0.0, 10.0, 10.0, 20.0));
        assert!(!interval_sec(10.0, 20.0, 0.0, 10.0));
        assert!(!interval_sec(0.0, 1.0, 5.0, 6.0));
    }
}
