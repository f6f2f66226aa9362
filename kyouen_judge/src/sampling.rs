use kyouen::{find_kyouen, Stage};
use rand::Rng;
use serde::Serialize;
use tracing::trace;

/// How many sampled boards fell into each category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SampleScore {
    pub circles: usize,
    pub lines: usize,
    pub none: usize,
}

impl SampleScore {
    pub fn total(&self) -> usize {
        self.circles + self.lines + self.none
    }
}

impl std::fmt::Display for SampleScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let percentage = |n: usize| {
            if self.total() == 0 {
                0.0
            } else {
                n as f32 / self.total() as f32 * 100.0
            }
        };
        write!(
            f,
            "Sampled {} boards:\n- {:5.1}% circle kyouen\n- {:5.1}% line kyouen\n- {:5.1}% no kyouen",
            self.total(),
            percentage(self.circles),
            percentage(self.lines),
            percentage(self.none)
        )
    }
}

/// Draws `num_boards` random boards and searches each of them for a kyouen.
pub fn sample_boards<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    num_stones: usize,
    num_boards: usize,
) -> SampleScore {
    let mut score = SampleScore::default();
    for board_idx in 0..num_boards {
        let stage = Stage::random(size, num_stones, rng);
        match find_kyouen(stage.stones()) {
            Some(kyouen) if kyouen.is_line() => score.lines += 1,
            Some(_) => score.circles += 1,
            None => score.none += 1,
        }
        trace!(board_idx, stage = %stage);
    }
    score
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn same_seed_same_score() {
        let score_1 = sample_boards(&mut StdRng::seed_from_u64(7), 6, 4, 200);
        let score_2 = sample_boards(&mut StdRng::seed_from_u64(7), 6, 4, 200);
        assert_eq!(score_1, score_2);
        assert_eq!(score_1.total(), 200);
    }

    #[test]
    fn degenerate_boards() {
        // A full 2x2 board is always the same square
        let score = sample_boards(&mut StdRng::seed_from_u64(1), 2, 4, 10);
        assert_eq!(score.circles, 10);

        // Three stones are never a kyouen
        let score = sample_boards(&mut StdRng::seed_from_u64(1), 6, 3, 10);
        assert_eq!(score.none, 10);

        // On a full 4x4 board, the first four stones are the top row
        let score = sample_boards(&mut StdRng::seed_from_u64(1), 4, 16, 3);
        assert_eq!(score.lines, 3);
    }

    #[test]
    fn display_percentages() {
        let score = SampleScore {
            circles: 1,
            lines: 1,
            none: 2,
        };
        assert_eq!(
            score.to_string(),
            "Sampled 4 boards:\n-  25.0% circle kyouen\n-  25.0% line kyouen\n-  50.0% no kyouen"
        );
    }
}
