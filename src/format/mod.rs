pub mod authors;
pub mod projects;
pub mod publications;
pub mod timeline;

pub use authors::*;
pub use projects::*;
pub use publications::*;
pub use timeline::*;
