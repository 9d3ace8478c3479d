//! Plain-text persistence for the policy table
//!
//! One line per known state: the 9-character cell key followed by 9
//! whitespace-separated weights. The format matches the table's on-disk
//! shape directly so a snapshot can be inspected and edited by hand.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use super::table::{PolicyTable, WeightVector};
use crate::tictactoe::StateKey;

impl PolicyTable {
    /// Load a table from a snapshot file, replacing all current entries.
    ///
    /// Blank lines are ignored. A key that appears more than once overwrites
    /// the earlier entry. Any malformed line fails the whole load with a
    /// line-numbered error; a partially parsed snapshot is never installed.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let file = File::open(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("open snapshot '{}'", path.as_ref().display()),
            source,
        })?;

        let mut entries = HashMap::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| crate::Error::Io {
                operation: format!("read snapshot '{}'", path.as_ref().display()),
                source,
            })?;
            let line_num = index + 1;

            let mut tokens = line.split_whitespace();
            let Some(key_token) = tokens.next() else {
                continue;
            };

            let key = StateKey::parse(key_token).map_err(|_| crate::Error::SnapshotKeyLength {
                line: line_num,
                key: key_token.to_string(),
            })?;

            let weight_tokens: Vec<&str> = tokens.collect();
            if weight_tokens.len() != 9 {
                return Err(crate::Error::SnapshotWeightCount {
                    line: line_num,
                    got: weight_tokens.len(),
                });
            }

            let mut weights: WeightVector = [0; 9];
            for (i, token) in weight_tokens.iter().enumerate() {
                weights[i] = token
                    .parse::<u32>()
                    .map_err(|_| crate::Error::SnapshotWeightValue {
                        line: line_num,
                        token: token.to_string(),
                    })?;
            }

            entries.insert(key, weights);
        }

        let mut table = PolicyTable::new();
        table.replace(entries);
        Ok(table)
    }

    /// Write the full table to a snapshot file, overwriting any existing one.
    ///
    /// Entries are emitted in lexicographic key order so repeated saves of
    /// the same table produce identical files.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let file = File::create(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("create snapshot '{}'", path.as_ref().display()),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let mut entries: Vec<(String, &WeightVector)> = self
            .iter()
            .map(|(key, weights)| (key.encode(), weights))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (key, weights) in entries {
            write!(writer, "{key}")?;
            for weight in weights {
                write!(writer, " {weight}")?;
            }
            writeln!(writer)?;
        }

        writer.flush()?;
        Ok(())
    }
}
