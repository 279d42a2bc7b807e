pub use self::connections::*;

pub mod connections;
