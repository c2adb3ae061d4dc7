// src/io/mod.rs
pub mod xyz;

use crate::model::Structure;
use std::io;

pub fn load_structure(path: &str) -> io::Result<Structure> {
    let p = path.to_lowercase();

    if p.ends_with(".xyz") || p.ends_with(".extxyz") {
        xyz::parse(path)
    } else {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("Unsupported file format: {}", path),
        ))
    }
}
