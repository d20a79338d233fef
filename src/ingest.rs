use crate::bst::Tree;
use std::error;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug)]

/**
 * Error raised while reading keys from text input.
 */
pub enum Error {
    Io(std::io::Error),
    BadToken(String),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            Io(error) => write!(fmt, "cannot read key file: {}", error),
            BadToken(token) => write!(fmt, "not an integer key: {:?}", token),
        }
    }
}

impl error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

/**
 * Read whitespace-separated signed decimal keys from a reader, in input
 * order. Any token that is not an integer is an error; ingestion never
 * silently skips input.
 */
pub fn read_keys<R: BufRead>(reader: R) -> Result<Vec<i64>, Error> {
    let mut keys = Vec::new();

    for line in reader.lines() {
        for token in line?.split_whitespace() {
            match token.parse() {
                Ok(key) => keys.push(key),
                Err(_) => return Err(Error::BadToken(token.to_string())),
            }
        }
    }
    Ok(keys)
}

/**
 * Build a tree from a text file of keys, folding insertion in file
 * order. An empty file yields an empty tree.
 */
pub fn tree_from_path<P: AsRef<Path>>(path: P) -> Result<Tree, Error> {
    let file = File::open(path)?;
    read_keys(BufReader::new(file)).map(|keys| keys.into_iter().collect())
}

// ============================================================================
#[cfg(test)]
mod test {
    use crate::bst::Tree;
    use crate::ingest::{read_keys, Error};

    #[test]
    fn keys_are_read_in_input_order() {
        let keys = read_keys("5 3 8\n1 4\n".as_bytes()).unwrap();
        assert_eq!(keys, vec![5, 3, 8, 1, 4]);
    }

    #[test]
    fn negative_keys_and_ragged_whitespace_are_fine() {
        let keys = read_keys("  -7\t0\n\n42 ".as_bytes()).unwrap();
        assert_eq!(keys, vec![-7, 0, 42]);
    }

    #[test]
    fn empty_input_yields_no_keys() {
        assert!(read_keys("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn malformed_token_is_reported_not_skipped() {
        match read_keys("1 2 three 4".as_bytes()) {
            Err(Error::BadToken(token)) => assert_eq!(token, "three"),
            other => panic!("expected a bad-token error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn parsed_keys_fold_into_a_tree() {
        let tree: Tree = read_keys("5 3 8 1 4".as_bytes())
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.minimum(), Some(1));
        assert_eq!(tree.maximum(), Some(8));
    }
}
