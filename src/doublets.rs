//! Doublet puzzles: a dictionary of equal-length words as a [`LabeledGraph`]
//! where words one letter apart are connected both ways.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{DoubletError, Result};
use crate::graph::{LabeledGraph, MAXIMUM};

/// True when `a` and `b` have the same length and differ in exactly one position.
pub fn differs_by_one(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1
}

/// How a ladder is picked between two words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Shortest,
    Longest,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Shortest => write!(f, "shortest"),
            Strategy::Longest => write!(f, "longest"),
        }
    }
}

/// A word ladder ordered from the starting word to the target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    pub words: Vec<String>,
}

impl Ladder {
    /// Number of single-letter changes.
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" -> "))
    }
}

/// One solved (or unsolvable) puzzle, flattened for CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LadderReport {
    pub from: String,
    pub to: String,
    pub strategy: Strategy,
    pub steps: Option<usize>,
    pub ladder: String,
}

impl LadderReport {
    pub fn new(from: &str, to: &str, strategy: Strategy, ladder: Option<&Ladder>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            strategy,
            steps: ladder.map(Ladder::steps),
            ladder: ladder.map(|l| l.words.join(" ")).unwrap_or_default(),
        }
    }
}

/// A word graph plus a lookup from word to vertex id.
#[derive(Debug, Clone)]
pub struct WordGraph {
    graph: LabeledGraph<String>,
    ids: HashMap<String, usize>,
}

impl Default for WordGraph {
    fn default() -> Self {
        Self::with_capacity(MAXIMUM)
    }
}

impl WordGraph {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graph: LabeledGraph::with_capacity(capacity),
            ids: HashMap::new(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::default();
        graph.extend(words)?;
        Ok(graph)
    }

    pub fn extend<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.add_word(word)?;
        }
        debug!(
            words = self.graph.size(),
            edges = self.graph.edge_count(),
            "word graph built"
        );
        Ok(())
    }

    /// Adds `word` and connects it to every earlier word one letter away.
    /// Returns the word's vertex id; a repeated word keeps its first id.
    /// All words must be as long as the first one added.
    pub fn add_word(&mut self, word: impl Into<String>) -> Result<usize> {
        let word = word.into();
        if let Some(&id) = self.ids.get(&word) {
            return Ok(id);
        }
        if let Some(expected) = self.word_length() {
            if word.chars().count() != expected {
                return Err(DoubletError::LengthMismatch { word, expected });
            }
        }
        let id = self.graph.add_vertex(word.clone())?;
        for other in 0..id {
            if differs_by_one(&self.graph[other], &word) {
                self.graph.add_edge(id, other)?;
                self.graph.add_edge(other, id)?;
            }
        }
        self.ids.insert(word, id);
        Ok(id)
    }

    pub fn id_of(&self, word: &str) -> Result<usize> {
        self.ids
            .get(word)
            .copied()
            .ok_or_else(|| DoubletError::UnknownWord(word.to_string()))
    }

    /// Letters per word, once the first word is in.
    pub fn word_length(&self) -> Option<usize> {
        self.graph.labels().first().map(|w| w.chars().count())
    }

    pub fn graph(&self) -> &LabeledGraph<String> {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.size()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Solves the puzzle from `from` to `to`; `None` if no ladder connects them.
    pub fn ladder(&self, from: &str, to: &str, strategy: Strategy) -> Result<Option<Ladder>> {
        let start = self.id_of(from).inspect_err(|_| warn!(word = from, "unknown start word"))?;
        let dest = self.id_of(to).inspect_err(|_| warn!(word = to, "unknown target word"))?;

        let path = match strategy {
            Strategy::Shortest => self.graph.shortest_path(start, dest)?,
            Strategy::Longest => self.graph.longest_path(start, dest)?,
        };
        if path.is_empty() {
            return Ok(None);
        }
        let words = path
            .iter()
            .rev() // queries list dest first
            .map(|&v| self.graph[v].clone())
            .collect();
        Ok(Some(Ladder { words }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_differs_by_one() {
        assert!(differs_by_one("stone", "shone"));
        assert!(differs_by_one("abcde", "abcdf"));
        assert!(!differs_by_one("stone", "stone"));
        assert!(!differs_by_one("stone", "shine"));
        assert!(!differs_by_one("amino", "rights"));
    }

    #[test]
    fn test_edges_both_ways() {
        let g = WordGraph::from_words(["abcde", "abcdf", "abcgf", "zzzzz"]).unwrap();
        let graph = g.graph();
        assert!(graph.is_edge(0, 1).unwrap() && graph.is_edge(1, 0).unwrap());
        assert!(graph.is_edge(1, 2).unwrap() && graph.is_edge(2, 1).unwrap());
        assert!(!graph.is_edge(0, 2).unwrap());
        assert!(graph.neighbors(3).unwrap().is_empty());
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_duplicate_word_keeps_id() {
        let mut g = WordGraph::default();
        assert_eq!(g.add_word("black").unwrap(), 0);
        assert_eq!(g.add_word("blank").unwrap(), 1);
        assert_eq!(g.add_word("black").unwrap(), 0);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_rejects_other_lengths() {
        let mut g = WordGraph::from_words(["cold", "cord"]).unwrap();
        assert_eq!(g.word_length(), Some(4));
        let err = g.add_word("chord").unwrap_err();
        assert!(matches!(err, DoubletError::LengthMismatch { expected: 4, .. }));
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_capacity_error() {
        let mut g = WordGraph::with_capacity(1);
        g.add_word("black").unwrap();
        let err = g.add_word("blank").unwrap_err();
        assert!(matches!(err, DoubletError::Graph(_)));
    }

    #[test]
    fn test_ladder_start_first() {
        let g = WordGraph::from_words(["abcde", "abcdf", "abcgf"]).unwrap();
        let ladder = g.ladder("abcde", "abcgf", Strategy::Shortest).unwrap().unwrap();
        assert_eq!(ladder.words, vec!["abcde", "abcdf", "abcgf"]);
        assert_eq!(ladder.steps(), 2);
        assert_eq!(ladder.to_string(), "abcde -> abcdf -> abcgf");
    }

    #[test]
    fn test_no_ladder() {
        let g = WordGraph::from_words(["amigo", "signs"]).unwrap();
        assert_eq!(g.ladder("amigo", "signs", Strategy::Shortest).unwrap(), None);
    }

    #[test]
    fn test_unknown_word() {
        let g = WordGraph::from_words(["black"]).unwrap();
        let err = g.ladder("black", "white", Strategy::Shortest).unwrap_err();
        assert!(matches!(err, DoubletError::UnknownWord(w) if w == "white"));
    }

    #[test]
    fn test_longest_goes_around() {
        // cold -> cord -> card -> ward -> warm, or round through wold and word
        let words = ["cold", "cord", "card", "ward", "warm", "wold", "word"];
        let g = WordGraph::from_words(words).unwrap();
        let shortest = g.ladder("cold", "warm", Strategy::Shortest).unwrap().unwrap();
        assert_eq!(shortest.steps(), 4);
        let longest = g.ladder("cold", "warm", Strategy::Longest).unwrap().unwrap();
        assert!(longest.steps() >= shortest.steps());
        assert_eq!(longest.words.first().map(String::as_str), Some("cold"));
        assert_eq!(longest.words.last().map(String::as_str), Some("warm"));
    }

    #[test]
    fn test_report() {
        let ladder = Ladder { words: vec!["tears".into(), "sears".into()] };
        let report = LadderReport::new("tears", "sears", Strategy::Shortest, Some(&ladder));
        assert_eq!(report.steps, Some(1));
        assert_eq!(report.ladder, "tears sears");

        let report = LadderReport::new("amigo", "signs", Strategy::Longest, None);
        assert_eq!(report.steps, None);
        assert!(report.ladder.is_empty());
    }
}
