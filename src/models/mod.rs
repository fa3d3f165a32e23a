pub mod impact;
pub mod professor;
pub mod project;
pub mod publication;

pub use impact::*;
pub use professor::*;
pub use project::*;
pub use publication::*;
