//! Seeded train/test partitioning

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Randomly partition a corpus into train and test portions.
///
/// Returns `(train_documents, test_documents, train_labels, test_labels)`.
/// The shuffle is driven by a ChaCha8 generator seeded with `seed`, so
/// a fixed seed yields the same partition on every run. The test
/// portion holds `ceil(n * test_fraction)` examples, clamped so both
/// portions are non-empty; with fewer than two examples everything
/// stays in the train portion.
pub fn train_test_split(
    documents: Vec<String>,
    labels: Vec<usize>,
    test_fraction: f64,
    seed: u64,
) -> (Vec<String>, Vec<String>, Vec<usize>, Vec<usize>) {
    debug_assert_eq!(documents.len(), labels.len());
    let n = documents.len();
    if n < 2 {
        return (documents, Vec::new(), labels, Vec::new());
    }

    let n_test = ((n as f64) * test_fraction).ceil() as usize;
    let n_test = n_test.clamp(1, n - 1);

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let mut docs: Vec<Option<String>> = documents.into_iter().map(Some).collect();
    let take = |docs: &mut Vec<Option<String>>, ix: usize| {
        docs[ix].take().unwrap_or_default()
    };

    let mut test_documents = Vec::with_capacity(n_test);
    let mut test_labels = Vec::with_capacity(n_test);
    for &ix in &indices[..n_test] {
        test_documents.push(take(&mut docs, ix));
        test_labels.push(labels[ix]);
    }

    let mut train_documents = Vec::with_capacity(n - n_test);
    let mut train_labels = Vec::with_capacity(n - n_test);
    for &ix in &indices[n_test..] {
        train_documents.push(take(&mut docs, ix));
        train_labels.push(labels[ix]);
    }

    (train_documents, test_documents, train_labels, test_labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(n: usize) -> (Vec<String>, Vec<usize>) {
        let documents = (0..n).map(|i| format!("doc{i}")).collect();
        let labels = (0..n).map(|i| i % 3).collect();
        (documents, labels)
    }

    #[test]
    fn test_partition_sizes() {
        let (documents, labels) = corpus(10);
        let (train_d, test_d, train_l, test_l) = train_test_split(documents, labels, 0.2, 42);
        assert_eq!(test_d.len(), 2);
        assert_eq!(train_d.len(), 8);
        assert_eq!(train_d.len(), train_l.len());
        assert_eq!(test_d.len(), test_l.len());
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let (documents, labels) = corpus(20);
        let a = train_test_split(documents.clone(), labels.clone(), 0.2, 42);
        let b = train_test_split(documents, labels, 0.2, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_labels_stay_aligned() {
        // Each document encodes its own label, so alignment survives shuffling
        let documents: Vec<String> = (0..12).map(|i| format!("{}", i % 3)).collect();
        let labels: Vec<usize> = (0..12).map(|i| i % 3).collect();
        let (train_d, test_d, train_l, test_l) = train_test_split(documents, labels, 0.25, 7);
        for (doc, label) in train_d.iter().zip(&train_l).chain(test_d.iter().zip(&test_l)) {
            assert_eq!(doc, &label.to_string());
        }
    }

    #[test]
    fn test_single_example_stays_in_train() {
        let (train_d, test_d, _, test_l) =
            train_test_split(vec!["unico".to_string()], vec![0], 0.2, 42);
        assert_eq!(train_d.len(), 1);
        assert!(test_d.is_empty());
        assert!(test_l.is_empty());
    }

    #[test]
    fn test_both_portions_nonempty_for_small_corpora() {
        let (documents, labels) = corpus(2);
        let (train_d, test_d, _, _) = train_test_split(documents, labels, 0.2, 42);
        assert_eq!(train_d.len(), 1);
        assert_eq!(test_d.len(), 1);
    }
}
