pub mod certificate;
pub mod learning;
pub mod profile;
pub mod project;

pub use certificate::*;
pub use learning::*;
pub use profile::*;
pub use project::*;
