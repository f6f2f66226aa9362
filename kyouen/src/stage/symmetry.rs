use crate::{Point, Stage};

// !!!!!! NOTE: Every transform must map the grid onto itself !!!!!!
impl Stage {
    fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Stage::from_points(
            self.size,
            self.stones.iter().copied().map(&f).collect(),
            self.selected.iter().copied().map(&f).collect(),
        )
    }

    /// The board rotated by 90° clockwise.
    pub fn rotated(&self) -> Self {
        let last = self.size as i32 - 1;
        self.map_points(|p| Point::new(last - p.y, p.x))
    }

    /// The board mirrored along the vertical axis.
    pub fn mirrored(&self) -> Self {
        let last = self.size as i32 - 1;
        self.map_points(|p| Point::new(last - p.x, p.y))
    }

    /// The eight images of the board under rotation and mirroring.
    ///
    /// The first entry is the board itself. Images can coincide when the
    /// board is symmetric.
    pub fn symmetries(&self) -> Vec<Self> {
        let mut images = Vec::with_capacity(8);
        let mut current = self.clone();
        for _ in 0..4 {
            let mirror = current.mirrored();
            let next = current.rotated();
            images.push(current);
            images.push(mirror);
            current = next;
        }
        images
    }

    /// Whether both boards have the same stones, up to rotation and mirroring.
    ///
    /// Selected stones count as plain stones here.
    pub fn is_same_puzzle(&self, other: &Stage) -> bool {
        if self.size != other.size {
            return false;
        }
        let other = other.with_selection_cleared();
        self.with_selection_cleared()
            .symmetries()
            .iter()
            .any(|image| image.stones == other.stones)
    }
}
