mod records;
mod sampling;
mod serve;
pub use records::*;
pub use sampling::*;
pub use serve::*;
