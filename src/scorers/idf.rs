//! Inverse document frequency over the joint reference+candidate set.
//!
//! The embedding-family metrics prepare these statistics over the full
//! corpus immediately before batched scoring; per-example calls then
//! weight tokens by how informative they are across the corpus.

use std::collections::HashMap;

/// Document-frequency statistics for token IDs.
#[derive(Clone, Debug, Default)]
pub struct Idf {
    doc_freq: HashMap<u32, usize>,
    n_docs: usize,
}

impl Idf {
    /// Count document frequencies over every tokenized text in the
    /// corpus. Each text counts a token at most once.
    pub fn prepare(documents: &[Vec<u32>]) -> Self {
        let mut doc_freq: HashMap<u32, usize> = HashMap::new();
        for doc in documents {
            let mut seen: Vec<u32> = doc.clone();
            seen.sort_unstable();
            seen.dedup();
            for id in seen {
                *doc_freq.entry(id).or_insert(0) += 1;
            }
        }
        Self {
            doc_freq,
            n_docs: documents.len(),
        }
    }

    /// IDF weight: ln(N / df). Zero for a token present in every
    /// document; ln(N + 1) for a token never seen during preparation.
    pub fn weight(&self, token_id: u32) -> f64 {
        if self.n_docs == 0 {
            return 0.0;
        }
        match self.doc_freq.get(&token_id) {
            Some(&df) => (self.n_docs as f64 / df as f64).ln(),
            None => (self.n_docs as f64 + 1.0).ln(),
        }
    }

    /// Number of documents seen during preparation.
    pub fn n_docs(&self) -> usize {
        self.n_docs
    }
}
