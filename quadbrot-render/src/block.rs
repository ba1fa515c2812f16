/// Default leaf size in pixels: blocks narrower or shorter than this are
/// computed in a single sequential pass instead of being split further.
pub const DEFAULT_MIN_BLOCK_SIZE: u32 = 32;

/// A rectangular block of pixels within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Pixel x of the first column.
    pub x: u32,
    /// Pixel y of the first row.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Block {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels in this block.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether this block is processed directly rather than split.
    ///
    /// A block is a leaf when it is smaller than `min_block_size` along
    /// either axis. Blocks under 2 pixels on a side are always leaves, so
    /// every split produces four strictly smaller, non-empty quadrants.
    pub fn is_leaf(&self, min_block_size: u32) -> bool {
        let min = min_block_size.max(2);
        self.width < min || self.height < min
    }

    /// Split at the midpoint into `[top_left, top_right, bottom_left, bottom_right]`.
    ///
    /// The quadrants tile the block exactly: odd extents put the extra
    /// column in the right half and the extra row in the bottom half.
    pub fn split(&self) -> [Block; 4] {
        let left_w = self.width / 2;
        let top_h = self.height / 2;
        let right_w = self.width - left_w;
        let bottom_h = self.height - top_h;
        let mid_x = self.x + left_w;
        let mid_y = self.y + top_h;
        [
            Block::new(self.x, self.y, left_w, top_h),
            Block::new(mid_x, self.y, right_w, top_h),
            Block::new(self.x, mid_y, left_w, bottom_h),
            Block::new(mid_x, mid_y, right_w, bottom_h),
        ]
    }

    /// All leaf blocks the recursive decomposition of `self` visits, in
    /// depth-first quadrant order. Empty blocks are skipped.
    pub fn leaves(&self, min_block_size: u32) -> Vec<Block> {
        let mut out = Vec::new();
        let mut stack = vec![*self];
        while let Some(block) = stack.pop() {
            if block.is_empty() {
                continue;
            }
            if block.is_leaf(min_block_size) {
                out.push(block);
            } else {
                // Reverse so the top-left quadrant is popped first.
                stack.extend(block.split().into_iter().rev());
            }
        }
        out
    }

    /// Depth of the decomposition tree below this block (0 for a leaf).
    pub fn depth(&self, min_block_size: u32) -> u32 {
        if self.is_empty() || self.is_leaf(min_block_size) {
            return 0;
        }
        1 + self
            .split()
            .iter()
            .map(|q| q.depth(min_block_size))
            .max()
            .unwrap_or(0)
    }
}
