use crate::model::{Atom, Structure};
use std::fs::File;
use std::io::{self, BufRead, Write};

pub fn parse(path: &str) -> io::Result<Structure> {
    let file = File::open(path)?;
    parse_reader(io::BufReader::new(file))
}

/// Reads plain or extended XYZ. Only the element and the first three
/// numeric columns of each atom line are used.
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<Structure> {
    let mut lines = reader.lines();

    // 1. Number of Atoms
    let n_atoms_str = lines.next().ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "Empty XYZ file"))??;
    let n_atoms: usize = n_atoms_str.trim().parse().map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "Invalid atom count"))?;

    // 2. Comment Line
    let _comment = lines.next().unwrap_or(Ok(String::new()))?;

    // 3. Atoms
    let mut atoms = Vec::with_capacity(n_atoms);
    for line in lines {
        if atoms.len() == n_atoms {
            break; // Trailing frames are ignored
        }

        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() { continue; }
        if parts.len() < 4 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Malformed atom line {}: {:?}", atoms.len() + 1, line.trim()),
            ));
        }

        let el = parts[0].to_string();
        let x: f64 = parts[1].parse().map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "Invalid X"))?;
        let y: f64 = parts[2].parse().map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "Invalid Y"))?;
        let z: f64 = parts[3].parse().map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "Invalid Z"))?;

        atoms.push(Atom::new(el, [x, y, z]));
    }

    if atoms.len() != n_atoms {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Expected {} atoms, found {}", n_atoms, atoms.len()),
        ));
    }

    Ok(Structure::new(atoms))
}

/// Writes atoms and bonds as pretty JSON.
pub fn write_bonds_json<W: Write>(writer: W, structure: &Structure) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, structure).map_err(io::Error::from)
}
