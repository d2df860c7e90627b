pub mod modules;
pub use modules::project;
