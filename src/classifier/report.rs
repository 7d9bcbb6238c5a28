//! Held-out evaluation report
//!
//! Renders per-class precision/recall/F1/support plus accuracy and
//! macro/weighted averages as a fixed-width text table, with class rows
//! named by specialty code.

use crate::types::Specialty;

#[derive(Debug, Default, Clone, Copy)]
struct ClassCounts {
    true_positive: usize,
    false_positive: usize,
    false_negative: usize,
}

/// Fraction of predictions that match the true label.
pub fn accuracy(y_true: &[usize], y_pred: &[usize]) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let correct = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    correct as f64 / y_true.len() as f64
}

/// Build a classification report over aligned true and predicted labels.
pub fn classification_report(y_true: &[usize], y_pred: &[usize]) -> String {
    let mut classes: Vec<usize> = y_true.iter().chain(y_pred).copied().collect();
    classes.sort_unstable();
    classes.dedup();

    let mut report = String::new();
    report.push_str(&format!(
        "{:>12} {:>10} {:>10} {:>10} {:>10}\n\n",
        "", "precision", "recall", "f1-score", "support"
    ));

    let total = y_true.len();
    let mut macro_precision = 0.0;
    let mut macro_recall = 0.0;
    let mut macro_f1 = 0.0;
    let mut weighted_precision = 0.0;
    let mut weighted_recall = 0.0;
    let mut weighted_f1 = 0.0;

    for &class in &classes {
        let mut counts = ClassCounts::default();
        for (&t, &p) in y_true.iter().zip(y_pred) {
            if t == class && p == class {
                counts.true_positive += 1;
            } else if t != class && p == class {
                counts.false_positive += 1;
            } else if t == class && p != class {
                counts.false_negative += 1;
            }
        }

        let support = counts.true_positive + counts.false_negative;
        let precision = ratio(
            counts.true_positive,
            counts.true_positive + counts.false_positive,
        );
        let recall = ratio(counts.true_positive, support);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        let name = Specialty::from_index(class)
            .map(|s| s.code().to_string())
            .unwrap_or_else(|| class.to_string());
        report.push_str(&format!(
            "{name:>12} {precision:>10.2} {recall:>10.2} {f1:>10.2} {support:>10}\n"
        ));

        macro_precision += precision;
        macro_recall += recall;
        macro_f1 += f1;
        let weight = support as f64 / total.max(1) as f64;
        weighted_precision += precision * weight;
        weighted_recall += recall * weight;
        weighted_f1 += f1 * weight;
    }

    let n_classes = classes.len().max(1) as f64;
    report.push_str(&format!(
        "\n{:>12} {:>10} {:>10} {:>10.2} {:>10}\n",
        "accuracy",
        "",
        "",
        accuracy(y_true, y_pred),
        total
    ));
    report.push_str(&format!(
        "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        "macro avg",
        macro_precision / n_classes,
        macro_recall / n_classes,
        macro_f1 / n_classes,
        total
    ));
    report.push_str(&format!(
        "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        "weighted avg", weighted_precision, weighted_recall, weighted_f1, total
    ));

    report
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
