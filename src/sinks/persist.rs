use crate::{Error, Grid, Result, StepSink};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// Line written after every generation; a comment line for numpy's `loadtxt`.
pub const SEPARATOR: &str = "#  ";

/// Appends every generation to a step log.
///
/// Each generation is a matrix of space-separated `0`/`1` values, one row per
/// line, followed by a [`SEPARATOR`] line.
pub struct PersistSink<W: Write> {
    out: W,
}

impl PersistSink<BufWriter<File>> {
    /// Creates (or truncates) the log file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        log::info!("Writing generations to {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> PersistSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepSink for PersistSink<W> {
    fn accept(&mut self, _step: usize, grid: &Grid) -> Result<()> {
        write!(self.out, "{grid}")?;
        writeln!(self.out, "{SEPARATOR}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Reads back the generations of a step log in the order they were written.
///
/// A trailing generation without a separator, as left by an interrupted run,
/// is kept.
pub fn read_log(reader: impl BufRead) -> Result<Vec<Grid>> {
    let mut grids: Vec<Grid> = vec![];
    let mut rows: Vec<Vec<u8>> = vec![];
    let mut last_line = 0;

    let finish = |rows: &mut Vec<Vec<u8>>, grids: &mut Vec<Grid>, line: usize| -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let grid = Grid::from_rows(rows.as_slice())?;
        if let Some(first) = grids.first() {
            if (first.rows(), first.cols()) != (grid.rows(), grid.cols()) {
                return Err(Error::MalformedLog {
                    line,
                    reason: format!(
                        "generation {} is {}x{}, expected {}x{}",
                        grids.len() + 1,
                        grid.rows(),
                        grid.cols(),
                        first.rows(),
                        first.cols()
                    ),
                });
            }
        }
        grids.push(grid);
        rows.clear();
        Ok(())
    };

    for (i, line) in reader.lines().enumerate() {
        let (line, number) = (line?, i + 1);
        last_line = number;
        let line = line.trim();
        if line.starts_with('#') {
            finish(&mut rows, &mut grids, number)?;
            continue;
        }
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| match token {
                "0" => Ok(0),
                "1" => Ok(1),
                _ => Err(Error::MalformedLog {
                    line: number,
                    reason: format!("unexpected value `{token}`"),
                }),
            })
            .collect::<Result<Vec<u8>>>()?;
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(Error::MalformedLog {
                    line: number,
                    reason: format!("row has {} cells, expected {}", row.len(), first.len()),
                });
            }
        }
        rows.push(row);
    }
    finish(&mut rows, &mut grids, last_line)?;
    Ok(grids)
}

pub fn read_log_file(path: impl AsRef<Path>) -> Result<Vec<Grid>> {
    read_log(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let grid = Grid::from_rows(&[[0u8, 1, 0], [1, 1, 1]]).unwrap();
        let mut sink = PersistSink::new(Vec::<u8>::new());
        sink.accept(1, &grid).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "0 1 0\n1 1 1\n#  \n");
    }

    #[test]
    fn test_read_interrupted_log() {
        let log = "1 0\n0 1\n#  \n0 0\n1 1\n";
        let grids = read_log(log.as_bytes()).unwrap();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[1], Grid::from_rows(&[[0u8, 0], [1, 1]]).unwrap());
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            read_log("0 1\n1 2\n#  \n".as_bytes()),
            Err(Error::MalformedLog { line: 2, .. })
        ));
        assert!(matches!(
            read_log("0 1\n1\n#  \n".as_bytes()),
            Err(Error::MalformedLog { line: 2, .. })
        ));
        assert!(matches!(
            read_log("0 1\n#  \n0 1 1\n#  \n".as_bytes()),
            Err(Error::MalformedLog { line: 4, .. })
        ));
        assert!(read_log("".as_bytes()).unwrap().is_empty());
    }
}
