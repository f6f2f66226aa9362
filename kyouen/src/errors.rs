/// The error type for reading a stage string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageError {
    /// The length of the stage string is not the square of a positive integer,
    /// or does not match the declared size.
    MalformedStage { len: usize },
    /// The four stones of a kyouen were expected, but a different number was given.
    InvalidStoneCount { count: usize },
}

impl std::error::Error for StageError {}

impl std::fmt::Display for StageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageError::MalformedStage { len } => {
                write!(f, "A stage of length {} does not describe a square grid", len)
            }
            StageError::InvalidStoneCount { count } => {
                write!(f, "Expected exactly 4 stones, but found {}", count)
            }
        }
    }
}

/// The error type for the puzzle rules in [`crate::puzzle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    Stage(StageError),
    /// New puzzles need at least five stones, otherwise the solution is trivial.
    TooFewStones { count: usize },
    /// No four stones of the puzzle form a kyouen.
    NoKyouen,
    /// The stones selected by the player do not form a kyouen.
    NotKyouen,
    /// The submitted board is not the board of the puzzle.
    StageMismatch,
    /// The puzzle is a rotated or mirrored copy of another puzzle.
    Duplicate { stage_no: u32, other_stage_no: u32 },
}

impl From<StageError> for PuzzleError {
    fn from(err: StageError) -> Self {
        PuzzleError::Stage(err)
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::Stage(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PuzzleError::Stage(_) => write!(f, "The stage could not be read"),
            PuzzleError::TooFewStones { count } => write!(
                f,
                "A puzzle must have at least 5 stones, but this one has {}",
                count
            ),
            PuzzleError::NoKyouen => write!(f, "The puzzle does not contain a kyouen"),
            PuzzleError::NotKyouen => write!(f, "The selected stones are not a kyouen"),
            PuzzleError::StageMismatch => {
                write!(f, "The submitted stage does not match the puzzle")
            }
            PuzzleError::Duplicate {
                stage_no,
                other_stage_no,
            } => write!(
                f,
                "Stage {} is a rotated or mirrored copy of stage {}",
                stage_no, other_stage_no
            ),
        }
    }
}
