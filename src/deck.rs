// SPDX-License-Identifier: MPL-2.0
//! Deck loading: building the fixed, ordered list of diagram sources.
//!
//! A deck can come from a JSON file containing an array of DOT strings, from a
//! directory of `.dot`/`.gv` files (sorted alphabetically, one diagram per
//! file), or from a single `.dot`/`.gv` file. Once built, a deck is never
//! mutated: navigation only moves an index over it.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Ordered, immutable sequence of Graphviz DOT sources.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    sources: Vec<String>,
}

impl Deck {
    /// Creates a new empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a deck from already-loaded diagram sources, preserving order.
    pub fn from_sources(sources: Vec<String>) -> Self {
        Self { sources }
    }

    /// Loads a deck from `path`, dispatching on what the path points at.
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Self::from_directory(path);
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path),
            Some(ext) if is_diagram_extension(ext) => {
                let source = std::fs::read_to_string(path)?;
                Ok(Self::from_sources(vec![source]))
            }
            _ => Err(Error::Deck(format!(
                "unsupported deck path: {}",
                path.display()
            ))),
        }
    }

    /// Loads a deck from a JSON array of DOT strings, the format the
    /// visualization's diagram lists are exported in.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let sources: Vec<String> = serde_json::from_str(&content)?;
        Ok(Self::from_sources(sources))
    }

    /// Scans a directory for `.dot`/`.gv` files, sorted alphabetically by file
    /// name, and reads one diagram per file.
    pub fn from_directory(directory: &Path) -> Result<Self> {
        let mut diagram_files: Vec<PathBuf> = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_diagram_file(&path) {
                diagram_files.push(path);
            }
        }

        diagram_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut sources = Vec::with_capacity(diagram_files.len());
        for file in &diagram_files {
            sources.push(std::fs::read_to_string(file)?);
        }

        Ok(Self::from_sources(sources))
    }

    /// Returns the diagram source at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.sources.get(index).map(|s| s.as_str())
    }

    /// Returns the total number of diagrams in the deck.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns the highest valid index (the slider maximum).
    pub fn last_index(&self) -> usize {
        self.sources.len().saturating_sub(1)
    }
}

/// Checks if a file has a supported diagram extension.
fn is_diagram_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_diagram_extension)
}

fn is_diagram_extension(ext: &str) -> bool {
    matches!(ext.to_ascii_lowercase().as_str(), "dot" | "gv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_diagram(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).expect("failed to write test diagram");
        path
    }

    #[test]
    fn from_sources_preserves_order() {
        let deck = Deck::from_sources(vec!["digraph a {}".into(), "digraph b {}".into()]);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0), Some("digraph a {}"));
        assert_eq!(deck.get(1), Some("digraph b {}"));
    }

    #[test]
    fn get_out_of_range_returns_none() {
        let deck = Deck::from_sources(vec!["digraph a {}".into()]);
        assert!(deck.get(1).is_none());
    }

    #[test]
    fn json_deck_preserves_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("deck.json");
        fs::write(&path, r#"["digraph one {}", "digraph two {}", "digraph three {}"]"#)
            .expect("failed to write deck file");

        let deck = Deck::load(&path).expect("failed to load deck");

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.get(0), Some("digraph one {}"));
        assert_eq!(deck.get(2), Some("digraph three {}"));
    }

    #[test]
    fn invalid_json_deck_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("deck.json");
        fs::write(&path, "{ not an array }").expect("failed to write deck file");

        assert!(matches!(Deck::load(&path), Err(Error::Deck(_))));
    }

    #[test]
    fn directory_deck_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_diagram(temp_dir.path(), "c.dot", "digraph c {}");
        create_diagram(temp_dir.path(), "a.dot", "digraph a {}");
        create_diagram(temp_dir.path(), "b.gv", "digraph b {}");

        let deck = Deck::load(temp_dir.path()).expect("failed to load deck");

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.get(0), Some("digraph a {}"));
        assert_eq!(deck.get(1), Some("digraph b {}"));
        assert_eq!(deck.get(2), Some("digraph c {}"));
    }

    #[test]
    fn directory_deck_skips_unsupported_extensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_diagram(temp_dir.path(), "a.dot", "digraph a {}");
        create_diagram(temp_dir.path(), "notes.txt", "not a diagram");
        create_diagram(temp_dir.path(), "deck.json", "[]");

        let deck = Deck::load(temp_dir.path()).expect("failed to load deck");
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn empty_directory_yields_empty_deck() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let deck = Deck::load(temp_dir.path()).expect("failed to load deck");
        assert!(deck.is_empty());
        assert_eq!(deck.last_index(), 0);
    }

    #[test]
    fn single_dot_file_is_a_deck_of_one() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = create_diagram(temp_dir.path(), "only.gv", "digraph only {}");

        let deck = Deck::load(&path).expect("failed to load deck");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.get(0), Some("digraph only {}"));
        assert_eq!(deck.last_index(), 0);
    }

    #[test]
    fn unsupported_file_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = create_diagram(temp_dir.path(), "deck.yaml", "diagrams: []");

        assert!(matches!(Deck::load(&path), Err(Error::Deck(_))));
    }

    #[test]
    fn last_index_matches_slider_maximum() {
        let deck = Deck::from_sources(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(deck.last_index(), 2);
    }
}
