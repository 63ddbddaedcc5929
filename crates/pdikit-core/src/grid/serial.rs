//! Plain-text dump of sample values
//!
//! One line per row, samples as space-separated decimals. Used to inspect
//! small grids such as kernels and structuring elements.

use super::SampleGrid;
use crate::error::Result;
use std::fmt;
use std::io::Write;

impl SampleGrid {
    /// Write every sample to `writer`, one row per line.
    ///
    /// # Example
    ///
    /// ```
    /// use pdikit_core::SampleGrid;
    ///
    /// let grid = SampleGrid::from_rows(&[&[1, 20], &[255, 0]]).unwrap();
    /// let mut out = Vec::new();
    /// grid.write_values(&mut out).unwrap();
    /// assert_eq!(out, b"1 20\n255 0\n");
    /// ```
    pub fn write_values(&self, writer: &mut impl Write) -> Result<()> {
        write!(writer, "{self}")?;
        Ok(())
    }
}

impl fmt::Display for SampleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let mut samples = row.iter();
            if let Some(first) = samples.next() {
                write!(f, "{first}")?;
            }
            for s in samples {
                write!(f, " {s}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rows() {
        let grid = SampleGrid::from_rows(&[&[0, 255, 7]]).unwrap();
        assert_eq!(grid.to_string(), "0 255 7\n");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(SampleGrid::new(0, 0).unwrap().to_string(), "");
    }
}
