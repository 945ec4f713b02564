use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box spanning `size` from its top-left corner `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Half-open containment: min edges inclusive, max edges exclusive
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
    }

    /// Overlap test that counts shared edges as contact
    pub fn touches(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }

    /// Strict overlap: boxes sharing only an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_pos_size(Vec2::ZERO, Vec2::splat(4.0))
    }

    #[test]
    fn test_contains_is_half_open() {
        let b = unit_box();
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(3.9, 3.9)));
        assert!(!b.contains(Vec2::new(4.0, 2.0)));
        assert!(!b.contains(Vec2::new(2.0, 4.0)));
    }

    #[test]
    fn test_touching_edges() {
        let a = unit_box();
        let b = Aabb::from_pos_size(Vec2::new(4.0, 0.0), Vec2::splat(4.0));
        assert!(a.touches(&b), "Shared edge counts as contact");
        assert!(!a.overlaps(&b), "Shared edge is not a strict overlap");
    }

    #[test]
    fn test_disjoint_boxes() {
        let a = unit_box();
        let b = Aabb::from_pos_size(Vec2::new(10.0, 10.0), Vec2::splat(1.0));
        assert!(!a.touches(&b));
        assert!(!a.overlaps(&b));
    }
}
