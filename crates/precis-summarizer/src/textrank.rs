//! TextRank sentence scoring
//!
//! Sentences are nodes of a complete graph, self-loops included. The weight of
//! an edge is the number of shared word occurrences divided by the sum of the
//! logarithms of both sentence lengths. Rows are normalized into a transition
//! matrix, damped, and scored by power iteration.

use rustc_hash::FxHashMap;

/// Guards the row normalization against empty rows
const ROW_DELTA: f64 = 1e-7;

/// Result of ranking a set of sentences
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    /// Score per sentence, parallel to the input
    pub scores: Vec<f64>,
    /// Number of power iterations run
    pub iterations: usize,
    /// Whether the change dropped to epsilon before the iteration bound
    pub converged: bool,
}

/// Power-method TextRank
#[derive(Debug, Clone)]
pub struct SentenceRanker {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Convergence threshold on the L2 change between iterations
    pub epsilon: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
}

impl Default for SentenceRanker {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 1e-4,
            max_iterations: 1000,
        }
    }
}

impl SentenceRanker {
    /// Create a ranker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence threshold
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Score sentences given as word lists
    pub fn rank(&self, sentences: &[Vec<String>]) -> RankResult {
        let n = sentences.len();
        if n == 0 {
            return RankResult {
                scores: Vec::new(),
                iterations: 0,
                converged: true,
            };
        }

        let matrix = self.transition_matrix(sentences);
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut change = f64::MAX;

        while change > self.epsilon && iterations < self.max_iterations {
            iterations += 1;
            // next = Mᵀ · scores
            next.fill(0.0);
            for (i, row) in matrix.iter().enumerate() {
                for (j, weight) in row.iter().enumerate() {
                    next[j] += weight * scores[i];
                }
            }
            change = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (new - old).powi(2))
                .sum::<f64>()
                .sqrt();
            std::mem::swap(&mut scores, &mut next);
        }

        RankResult {
            scores,
            iterations,
            converged: change <= self.epsilon,
        }
    }

    fn transition_matrix(&self, sentences: &[Vec<String>]) -> Vec<Vec<f64>> {
        let n = sentences.len();
        let counts: Vec<FxHashMap<&str, usize>> = sentences
            .iter()
            .map(|words| {
                let mut counts = FxHashMap::default();
                for word in words {
                    *counts.entry(word.as_str()).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut weights = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let weight = edge_weight(&sentences[i], &sentences[j], &counts[j]);
                weights[i][j] = weight;
                weights[j][i] = weight;
            }
        }

        let teleport = (1.0 - self.damping) / n as f64;
        for row in &mut weights {
            let total: f64 = row.iter().sum::<f64>() + ROW_DELTA;
            for weight in row.iter_mut() {
                *weight = teleport + self.damping * (*weight / total);
            }
        }
        weights
    }
}

fn edge_weight(words: &[String], other: &[String], other_counts: &FxHashMap<&str, usize>) -> f64 {
    let shared: usize = words
        .iter()
        .map(|word| other_counts.get(word.as_str()).copied().unwrap_or(0))
        .sum();
    if shared == 0 {
        return 0.0;
    }
    let norm = (words.len() as f64).ln() + (other.len() as f64).ln();
    if norm.abs() <= 1e-8 {
        shared as f64
    } else {
        shared as f64 / norm
    }
}
