pub mod delta;
pub mod lenient;
pub mod profile;
