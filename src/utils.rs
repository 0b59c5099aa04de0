use crate::policies::Cylinder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}:{line}: '{token}' is not an integer", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DriverError {
    fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            DriverError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DriverError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

// The input file holds one cylinder request per line. Lines starting with '#'
// are comment lines and are ignored, as are blank lines. Bytes that are not
// UTF-8 can never form an integer and are reported as a parse error.
pub fn read_input_file<P: AsRef<Path>>(filename: P) -> Result<Vec<Cylinder>, DriverError> {
    let path = filename.as_ref();
    let file = File::open(path).map_err(|e| DriverError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();

    let mut requests = Vec::new();
    let mut line_no = 0;
    loop {
        line.clear();
        let len = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| DriverError::io(path, e))?;
        if len == 0 {
            break;
        }
        line_no += 1;

        let text = String::from_utf8_lossy(&line);
        let token = text.trim();
        if token.is_empty() || token.starts_with('#') {
            continue;
        }
        let track: Cylinder = token.parse().map_err(|_| DriverError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            token: token.to_string(),
        })?;
        requests.push(track);
    }

    Ok(requests)
}

pub fn write_requests<P: AsRef<Path>>(filename: P, requests: &[Cylinder]) -> Result<(), DriverError> {
    let path = filename.as_ref();
    let file = File::create(path).map_err(|e| DriverError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for track in requests {
        writeln!(writer, "{}", track).map_err(|e| DriverError::io(path, e))?;
    }
    writer.flush().map_err(|e| DriverError::io(path, e))
}
