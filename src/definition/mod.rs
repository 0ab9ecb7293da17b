pub mod artifact;
pub mod builtin;
pub mod conversion;
pub mod tree;

pub use artifact::*;
pub use conversion::*;
pub use tree::*;
