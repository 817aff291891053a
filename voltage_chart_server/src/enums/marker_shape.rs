#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    TriangleUp,
    TriangleDown,
    Circle,
}

impl MarkerShape {
    #[doc = "Polygon vertices in pixel offsets around the marker centre"]
    pub fn vertices(&self) -> Vec<(i32, i32)> {
        match self {
            MarkerShape::TriangleUp => vec![(0, -7), (-6, 5), (6, 5)],
            MarkerShape::TriangleDown => vec![(0, 7), (-6, -5), (6, -5)],
            MarkerShape::Circle => Vec::new(),
        }
    }
}
