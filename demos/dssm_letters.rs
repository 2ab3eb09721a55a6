//! DSSM Letters: Word Hashing a Query Against Candidate Titles
//!
//! Builds a tri-letter vocabulary from a handful of titles, hashes a query
//! and each title, and ranks the titles by cosine similarity. The query is
//! also hashed per word, the input shape of a convolutional (CDSSM) model.
//!
//! Run: RUST_LOG=trace cargo run --example dssm_letters

use tracing_subscriber::EnvFilter;
use word_hashing::{Similarity, TermIndex, TokenInput, Unit, WordHashing};

/// Letter trigrams of a word, with `#` marking the word boundaries.
fn trigrams(word: &str) -> Vec<String> {
    let padded: Vec<char> = format!("#{}#", word.to_lowercase()).chars().collect();
    padded
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}

fn flat(text: &str) -> Vec<String> {
    text.split_whitespace().flat_map(trigrams).collect()
}

fn nested(text: &str) -> Vec<Vec<String>> {
    text.split_whitespace().map(trigrams).collect()
}

fn main() -> word_hashing::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let titles = [
        "Rust testing best practices",
        "Testing async services",
        "Gardening for beginners",
        "Best pasta recipes",
    ];

    let index = TermIndex::from_terms(titles.iter().flat_map(|t| flat(t)))?;
    let encoder = WordHashing::new(index);
    println!(
        "vocabulary: {} tri-letters, vector width {}",
        encoder.term_index().len(),
        encoder.dimensions()
    );

    let query = "tested rusty services";
    let query_vec = encoder.encode_flat(&flat(query))?;
    println!(
        "\nquery {:?}: {} non-zero slots, {} OOV",
        query,
        query_vec.nnz(),
        query_vec[0]
    );

    let mut ranked = Vec::new();
    for title in &titles {
        let title_vec = encoder.encode_flat(&flat(title))?;
        ranked.push((Similarity::cosine(&query_vec, &title_vec)?, *title));
    }
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    println!("\nranking:");
    for (score, title) in &ranked {
        println!("  {:.3}  {}", score, title);
    }

    let per_word = encoder.transform(&TokenInput::Nested(nested(query)))?;
    if let Some(matrix) = per_word.as_matrix() {
        println!("\nper-word rows ({} x {}):", matrix.n_rows(), matrix.dimensions());
        for (word, row) in query.split_whitespace().zip(matrix.rows()) {
            println!("  {:<10} total {:>2}  oov {}", word, row.total(), row[0]);
        }
    }

    Ok(())
}
