pub mod dates;
pub mod names;
pub mod normalize;

pub use dates::*;
pub use names::*;
pub use normalize::*;
