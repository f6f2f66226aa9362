use serde::{Deserialize, Serialize};

use crate::{Point, Shape};

/// Request to the judge, one JSON object per line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Is this stage, with exactly four stones, a kyouen?
    ///
    /// The response is a [`Response::Verdict`].
    Check { stage: String },
    /// Does any group of four stones on this stage form a kyouen?
    ///
    /// The response is [`Response::Found`] or [`Response::NotFound`].
    Find { stage: String },
    /// The session ends. There is no response.
    Bye,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    Verdict {
        kyouen: bool,
        /// Omitted when the stones are not a kyouen.
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde(default)]
        shape: Option<Shape>,
    },
    Found {
        stones: [Point; 4],
        shape: Shape,
    },
    NotFound,
    /// The request could not be read or its stage is invalid.
    Error { message: String },
}
