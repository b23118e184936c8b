

/// Cosine similarity; 0.0 when either side is a zero vector or the dimensions differ.
pub fn cosine_similarity(vec1: &[f64], vec2: &[f64]) -> f64 {
    if vec1.len() != vec2.len() || vec1.is_empty() {
        return 0.0;
    }

    let dot_product: f64 = vec1.iter().zip(vec2.iter()).map(|(a, b)| a * b).sum();
    let mag1: f64 = vec1.iter().map(|a| a * a).sum::<f64>().sqrt();
    let mag2: f64 = vec2.iter().map(|b| b * b).sum::<f64>().sqrt();

    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    // Weights are non-negative; clamp away rounding past the bounds.
    (dot_product / (mag1 * mag2)).clamp(0.0, 1.0)
}


pub fn batch_cosine_similarity(query: &[f64], candidates: &[&[f64]]) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| cosine_similarity(query, candidate))
        .collect()
}
