//! I/O layer: reading structural dumps produced by an upstream NITF parser,
//! and `writers` for metacard sidecars, metadata XML and location WKT.
pub mod reader;
pub use reader::{DumpError, read_dump, read_dump_bytes};

pub mod writers;
