//! Domain Layer
//!
//! Artifacts, value types and the ports the pipeline talks through. Nothing
//! here touches the file system or spawns processes.
//!
//! ## Structure
//!
//! - `entities/` - Binary, loader and snippet artifacts; the assembled document
//! - `value_objects/` - Profile, embed source, content hash, config warnings
//! - `ports/` - File system, command runner and event sink traits

pub mod entities;
pub mod ports;
pub mod value_objects;
