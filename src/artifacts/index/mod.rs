//! Index file format
//!
//! The index records which working tree files are tracked and the fingerprint
//! of each file's last committed content. It is a plain text file with one
//! entry per line, sorted by path:
//!
//! ```text
//! README.md:5f70bf18a086007016e948b04aed3b82103a36bea41755b6cddfaf10ace3c6ef
//! src/lib.rs:
//! ```

pub mod index_entry;
