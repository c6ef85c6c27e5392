//! Flat exact nearest-neighbor index over squared L2 distance.
//!
//! Vectors are stored row-major in insertion order; that order is the
//! positional contract with the metadata array persisted next to the index.
//! The on-disk blob is magic + version + dim (u32 LE) + count (u64 LE)
//! followed by `count * dim` little-endian f32 values.

use hrdesk_core::error::{Error, Result};
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const MAGIC: &[u8; 4] = b"HDIX";
const VERSION: u32 = 1;

pub struct FlatIndex {
    dim: usize,
    vectors: Vec<f32>,
}

impl FlatIndex {
    pub fn new(dim: usize) -> Self {
        Self { dim, vectors: Vec::new() }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of vectors held.
    pub fn len(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.vectors.len() / self.dim
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn add(&mut self, vector: &[f32]) -> Result<()> {
        if vector.len() != self.dim {
            return Err(Error::DimensionMismatch {
                index_dim: self.dim,
                query_dim: vector.len(),
            });
        }
        self.vectors.extend_from_slice(vector);
        Ok(())
    }

    /// Exact top-k by squared L2 distance, ascending. Returns fewer than `k`
    /// pairs when the index holds fewer vectors; never pads.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if query.len() != self.dim {
            return Err(Error::DimensionMismatch {
                index_dim: self.dim,
                query_dim: query.len(),
            });
        }
        let mut hits: Vec<(usize, f32)> = self
            .vectors
            .chunks_exact(self.dim)
            .map(|row| squared_l2(query, row))
            .enumerate()
            .collect();
        hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        hits.truncate(k);
        Ok(hits)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        w.write_all(MAGIC)?;
        w.write_all(&VERSION.to_le_bytes())?;
        w.write_all(&(self.dim as u32).to_le_bytes())?;
        w.write_all(&(self.len() as u64).to_le_bytes())?;
        for value in &self.vectors {
            w.write_all(&value.to_le_bytes())?;
        }
        w.flush()?;
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "index artifact missing: {}",
                path.display()
            )));
        }
        let mut r = BufReader::new(File::open(path)?);

        let mut magic = [0u8; 4];
        r.read_exact(&mut magic).map_err(|_| corrupt(path, "truncated header"))?;
        if &magic != MAGIC {
            return Err(corrupt(path, "bad magic"));
        }
        let mut word = [0u8; 4];
        r.read_exact(&mut word).map_err(|_| corrupt(path, "truncated header"))?;
        let version = u32::from_le_bytes(word);
        if version != VERSION {
            return Err(corrupt(path, "unsupported version"));
        }
        r.read_exact(&mut word).map_err(|_| corrupt(path, "truncated header"))?;
        let dim = u32::from_le_bytes(word) as usize;
        if dim == 0 {
            return Err(corrupt(path, "zero dimension"));
        }
        let mut count_bytes = [0u8; 8];
        r.read_exact(&mut count_bytes).map_err(|_| corrupt(path, "truncated header"))?;
        let count = u64::from_le_bytes(count_bytes) as usize;

        let mut payload = Vec::new();
        r.read_to_end(&mut payload)?;
        if payload.len() != count * dim * 4 {
            return Err(corrupt(path, "vector payload length mismatch"));
        }
        let vectors = payload
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        Ok(Self { dim, vectors })
    }
}

fn corrupt(path: &Path, what: &str) -> Error {
    Error::Corruption(format!("{}: {}", path.display(), what))
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
