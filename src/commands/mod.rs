pub mod explain;
pub mod package;
pub mod project;
