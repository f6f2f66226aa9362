use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};

use crate::stage::{EMPTY, SELECTED_STONE, STONE};
use crate::Point;

/// A well-formed stage string for a grid of size 1 to 8.
#[derive(Clone, Debug)]
pub struct StageText {
    pub text: String,
}

impl Arbitrary for StageText {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = (u8::arbitrary(g) % 8 + 1) as usize;
        let text = (0..size * size)
            .map(|_| *g.choose(&[EMPTY, EMPTY, EMPTY, STONE, SELECTED_STONE, 'x']).unwrap())
            .collect();
        StageText { text }
    }
}

/// Four distinct stones on a grid of size 10.
#[derive(Clone, Debug)]
pub struct FourStones {
    pub stones: [Point; 4],
}

impl Arbitrary for FourStones {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut seen = BTreeSet::new();
        let mut stones = Vec::with_capacity(4);
        while stones.len() < 4 {
            let p = Point::new((u8::arbitrary(g) % 10) as i32, (u8::arbitrary(g) % 10) as i32);
            if seen.insert(p) {
                stones.push(p);
            }
        }
        // Row-major order, as if the stones came from a stage string
        stones.sort_by_key(|p| (p.y, p.x));
        FourStones {
            stones: [stones[0], stones[1], stones[2], stones[3]],
        }
    }
}

/// One of the 24 orderings of four elements.
#[derive(Clone, Debug)]
pub struct Permutation {
    order: [usize; 4],
}

impl Permutation {
    pub fn apply<T: Copy>(&self, items: [T; 4]) -> [T; 4] {
        self.order.map(|idx| items[idx])
    }
}

impl Arbitrary for Permutation {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut order = [0, 1, 2, 3];
        // Fisher-Yates
        for i in (1..4).rev() {
            let j = usize::arbitrary(g) % (i + 1);
            order.swap(i, j);
        }
        Permutation { order }
    }
}
