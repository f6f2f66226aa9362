pub use errors::*;
pub use geometry::{FloatPoint, Line, Point};
pub use kyouen::*;
pub use protocol_types::*;
pub use stage::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod errors;
pub mod geometry;
mod kyouen;
pub mod puzzle;
mod protocol_types;
mod stage;
mod visualization;
