//! Geohash cells around a point.
//!
//! Cells are handled as integer (row, column) indices at the requested
//! precision and only turned into base32 strings at the end, which makes
//! neighbor lookup an index offset. Longitude wraps at the antimeridian;
//! rows past a pole do not exist.

use crate::error::{NearDupeError, Result};
use crate::variant::VariantSet;

const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest geohash that fits the 64-bit interleaving.
pub const MAX_PRECISION: u32 = 12;

/// Row offsets, then column offsets; the center cell comes first.
const OFFSETS: [i64; 3] = [0, -1, 1];

/// Row and column of the cell containing a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    row: u64,
    column: u64,
    lat_bits: u32,
    lon_bits: u32,
}

impl Cell {
    fn locate(latitude: f64, longitude: f64, precision: u32) -> Result<Self> {
        validate(latitude, longitude, precision)?;
        let bits = precision * 5;
        let lon_bits = bits.div_ceil(2);
        let lat_bits = bits / 2;
        Ok(Cell {
            row: index(latitude, -90.0, 180.0, lat_bits),
            column: index(longitude, -180.0, 360.0, lon_bits),
            lat_bits,
            lon_bits,
        })
    }

    fn offset(&self, rows: i64, columns: i64) -> Option<Cell> {
        let row = self.row as i64 + rows;
        if row < 0 || row >= 1i64 << self.lat_bits {
            return None;
        }
        let width = 1i64 << self.lon_bits;
        let column = (self.column as i64 + columns).rem_euclid(width);
        Some(Cell {
            row: row as u64,
            column: column as u64,
            ..*self
        })
    }

    /// Interleave column and row bits, longitude first.
    fn to_geohash(self) -> String {
        let total = self.lat_bits + self.lon_bits;
        let mut code: u64 = 0;
        for i in 0..total {
            let bit = if i % 2 == 0 {
                (self.column >> (self.lon_bits - 1 - i / 2)) & 1
            } else {
                (self.row >> (self.lat_bits - 1 - i / 2)) & 1
            };
            code = (code << 1) | bit;
        }

        let precision = total / 5;
        (0..precision)
            .map(|c| {
                let shift = (precision - 1 - c) * 5;
                BASE32[((code >> shift) & 0x1f) as usize] as char
            })
            .collect()
    }
}

fn index(value: f64, min: f64, span: f64, bits: u32) -> u64 {
    let cells = 1u64 << bits;
    let position = ((value - min) / span * cells as f64).floor() as u64;
    position.min(cells - 1)
}

fn validate(latitude: f64, longitude: f64, precision: u32) -> Result<()> {
    if precision == 0 || precision > MAX_PRECISION {
        return Err(NearDupeError::InvalidPrecision(precision));
    }
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        // NaN fails both range checks
        return Err(NearDupeError::InvalidCoordinate {
            lat: latitude,
            lon: longitude,
        });
    }
    Ok(())
}

/// Geohash of the cell containing (`latitude`, `longitude`).
///
/// ```
/// use neardupe::geohash;
///
/// assert_eq!(geohash::encode(40.7484, -73.9857, 6).unwrap(), "dr5ru6");
/// assert!(geohash::encode(91.0, 0.0, 6).is_err());
/// ```
pub fn encode(latitude: f64, longitude: f64, precision: u32) -> Result<String> {
    Ok(Cell::locate(latitude, longitude, precision)?.to_geohash())
}

/// The containing cell followed by its existing neighbors.
///
/// Neighbors are ordered by row (same, south, north), then column (same,
/// west, east). Near a pole fewer than nine cells come back.
pub fn cells(latitude: f64, longitude: f64, precision: u32) -> Result<VariantSet> {
    let center = Cell::locate(latitude, longitude, precision)?;
    let mut cells = VariantSet::new();
    for rows in OFFSETS {
        for columns in OFFSETS {
            if let Some(cell) = center.offset(rows, columns) {
                cells.push(cell.to_geohash());
            }
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(40.7484, -73.9857, 6).unwrap(), "dr5ru6");
        assert_eq!(encode(40.7484, -73.9857, 1).unwrap(), "d");
        assert_eq!(encode(57.64911, 10.40744, 11).unwrap(), "u4pruydqqvj");
        assert_eq!(encode(0.0, 0.0, 2).unwrap(), "s0");
        assert_eq!(encode(90.0, 180.0, 3).unwrap(), "zzz");
        assert_eq!(encode(-90.0, -180.0, 3).unwrap(), "000");
    }

    #[test]
    fn test_cells_around_point() {
        let cells = cells(40.7484, -73.9857, 6).unwrap();
        assert_eq!(
            cells.as_slice(),
            [
                "dr5ru6", "dr5ru4", "dr5rud", "dr5ru3", "dr5ru1", "dr5ru9", "dr5ru7", "dr5ru5",
                "dr5rue"
            ]
        );
    }

    #[test]
    fn test_cells_at_pole_and_antimeridian() {
        assert_eq!(cells(90.0, 0.0, 4).unwrap().len(), 6);
        let wrapped = cells(0.0, 179.99, 3).unwrap();
        assert_eq!(wrapped.len(), 9);
        assert!(wrapped.iter().any(|c| c.starts_with('2') || c.starts_with('8')));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            encode(0.0, 0.0, 0),
            Err(NearDupeError::InvalidPrecision(0))
        ));
        assert!(matches!(
            cells(0.0, 0.0, 13),
            Err(NearDupeError::InvalidPrecision(13))
        ));
        assert!(matches!(
            cells(f64::NAN, 0.0, 6),
            Err(NearDupeError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            encode(0.0, 180.5, 6),
            Err(NearDupeError::InvalidCoordinate { .. })
        ));
    }
}
