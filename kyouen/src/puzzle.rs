use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{classify_kyouen, find_kyouen, four_stones, Kyouen, PuzzleError, Stage, StageError};

/// Puzzles with fewer stones than this are rejected.
pub const MIN_PUZZLE_STONES: usize = 5;

/// A stored puzzle, as exchanged with the puzzle database.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRecord {
    pub stage_no: u32,
    pub size: usize,
    pub stage: String,
    pub creator: String,
}

impl PuzzleRecord {
    pub fn to_stage(&self) -> Result<Stage, StageError> {
        Stage::with_size(self.size, &self.stage)
    }
}

/// Checks that a stage can be published as a new puzzle.
///
/// Returns the first kyouen found among its stones.
pub fn validate_new_puzzle(stage: &Stage) -> Result<Kyouen, PuzzleError> {
    if stage.stone_count() < MIN_PUZZLE_STONES {
        return Err(PuzzleError::TooFewStones {
            count: stage.stone_count(),
        });
    }
    find_kyouen(stage.stones()).ok_or(PuzzleError::NoKyouen)
}

/// Checks a player's solution of `puzzle`.
///
/// The submission is the puzzle's board with exactly four stones selected, and
/// those four must form a kyouen.
pub fn verify_clear(puzzle: &Stage, submission: &Stage) -> Result<Kyouen, PuzzleError> {
    let selected = four_stones(submission.selected()).map_err(|_| PuzzleError::NotKyouen)?;
    let kyouen = classify_kyouen(selected).ok_or(PuzzleError::NotKyouen)?;
    if submission.with_selection_cleared() != puzzle.with_selection_cleared() {
        return Err(PuzzleError::StageMismatch);
    }
    Ok(kyouen)
}

/// Finds records that describe the same puzzle, up to rotation and mirroring.
///
/// Returns the stage numbers of each such pair, the earlier record first.
/// Records with malformed stages are skipped.
pub fn find_duplicates(records: &[PuzzleRecord]) -> Vec<(u32, u32)> {
    duplicate_indices(records)
        .into_iter()
        .map(|(idx_a, idx_b)| (records[idx_a].stage_no, records[idx_b].stage_no))
        .collect()
}

/// Positions of duplicate pairs in `records`, the earlier record first.
fn duplicate_indices(records: &[PuzzleRecord]) -> Vec<(usize, usize)> {
    let stages: Vec<(usize, Stage)> = records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| Some((idx, record.to_stage().ok()?)))
        .collect();
    stages
        .iter()
        .tuple_combinations()
        .filter(|((_, a), (_, b))| a.is_same_puzzle(b))
        .map(|((idx_a, _), (idx_b, _))| (*idx_a, *idx_b))
        .collect()
}

/// Validates every record on its own, then flags duplicates.
///
/// The result has one entry per record, in the same order. A duplicate is
/// reported on the later of the two records.
pub fn validate_records(records: &[PuzzleRecord]) -> Vec<Result<Kyouen, PuzzleError>> {
    let mut results: Vec<Result<Kyouen, PuzzleError>> = records
        .iter()
        .map(|record| {
            let stage = record.to_stage()?;
            validate_new_puzzle(&stage)
        })
        .collect();

    for (idx_a, idx_b) in duplicate_indices(records) {
        if results[idx_b].is_ok() {
            results[idx_b] = Err(PuzzleError::Duplicate {
                stage_no: records[idx_b].stage_no,
                other_stage_no: records[idx_a].stage_no,
            });
        }
    }
    results
}
