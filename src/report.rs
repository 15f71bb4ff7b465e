//! Text and CSV renderings of prediction results.

use anyhow::{Context, Result};
use std::{fmt, io, path::Path};

use crate::evaluate::{Evaluation, Explanation};

const RULE: &str = "========================================";
const SECTION: &str = "--------------------";

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "INPUT: {}", self.input.join(", "))?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "a. Prior probabilities P(class):")?;
        for score in &self.prediction.scores {
            writeln!(f, "   P({}) = {:.4}", score.label, score.prior)?;
        }
        writeln!(f, "{SECTION}")?;

        writeln!(f, "b. Conditional probabilities P(feature|class):")?;
        for score in &self.prediction.scores {
            let details = score
                .features
                .iter()
                .map(|feature| {
                    format!(
                        "P({}={}|{})={:.3}",
                        self.feature_names[feature.index],
                        feature.value,
                        score.label,
                        feature.probability
                    )
                })
                .collect::<Vec<_>>();
            writeln!(f, "   Class {}:\n      {}", score.label, details.join(", "))?;
        }
        writeln!(f, "{SECTION}")?;

        writeln!(f, "c. Posterior scores (log scale):")?;
        for score in &self.prediction.scores {
            writeln!(f, "   Posterior({}) = {:.4}", score.label, score.log_score)?;
        }
        writeln!(f, "{SECTION}")?;

        writeln!(f, "d. Prediction:")?;
        write!(f, "   Predicted class: [{}]", self.prediction.label)?;
        match (&self.actual, self.matched()) {
            (Some(actual), Some(true)) => writeln!(f, " (actual [{actual}], correct)")?,
            (Some(actual), _) => writeln!(f, " (actual [{actual}], incorrect)")?,
            _ => writeln!(f)?,
        }
        write!(f, "{RULE}")
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>4}  predicted [{}]  actual [{}]  {}",
                row.index + 1,
                row.predicted,
                row.actual,
                if row.matched { "ok" } else { "MISS" }
            )?;
        }
        writeln!(f, "{SECTION}")?;
        writeln!(
            f,
            "Accuracy: {:.2}% ({}/{} correct)",
            self.accuracy,
            self.correct,
            self.total()
        )?;
        write!(f, "{RULE}")
    }
}

/// Writes one `ID,Predicted,Actual,Match` record per evaluated row.
pub fn write_predictions<W: io::Write>(evaluation: &Evaluation, sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);

    writer.write_record(["ID", "Predicted", "Actual", "Match"])?;
    for row in &evaluation.rows {
        writer.write_record([
            (row.index + 1).to_string(),
            row.predicted.clone(),
            row.actual.clone(),
            row.matched.to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

pub fn save_predictions<P: AsRef<Path>>(evaluation: &Evaluation, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("could not create {}", path.display()))?;
    write_predictions(evaluation, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate, explain, train, Row};

    fn rows(data: &[&[&str]]) -> Vec<Row> {
        data.iter()
            .map(|row| row.iter().map(|value| value.to_string()).collect())
            .collect()
    }

    #[test]
    fn explanation_lists_every_section() {
        let model = train(&rows(&[&["X", "C1"], &["Y", "C1"], &["X", "C2"]])).unwrap();
        let header = vec!["Shape".to_string()];
        let text = explain(&model, &header, &["X", "C2"]).to_string();

        assert!(text.contains("P(C1) = 0.6667"));
        assert!(text.contains("P(Shape=X|C1)=0.500"));
        assert!(text.contains("P(Shape=X|C2)=0.667"));
        assert!(text.contains("Posterior(C1) = -1.0986"));
        assert!(text.contains("Posterior(C2) = -1.5041"));
        assert!(text.contains("Predicted class: [C1] (actual [C2], incorrect)"));
    }

    #[test]
    fn evaluation_reports_accuracy_and_csv() {
        let model = train(&rows(&[&["X", "C1"], &["Y", "C2"]])).unwrap();
        let evaluation = evaluate(&model, &[], &rows(&[&["X", "C1"], &["Y", "C1"]])).unwrap();

        let text = evaluation.to_string();
        assert!(text.contains("Accuracy: 50.00% (1/2 correct)"));
        assert!(text.contains("MISS"));

        let mut buffer = Vec::new();
        write_predictions(&evaluation, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "ID,Predicted,Actual,Match\n1,C1,C1,true\n2,C2,C1,false\n"
        );
    }
}
