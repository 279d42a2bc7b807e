pub use self::builders::*;
pub use self::project::TestProject;

pub mod builders;
pub mod project;
pub mod times;
