//! Translation between raw UCI mushroom records and the numeric patterns the
//! network consumes.
//!
//! Each categorical attribute is one-hot encoded by the position of its
//! symbol in a fixed per-attribute alphabet; the encoded attributes are
//! concatenated into one flat input vector.

use crate::data::error::DatasetError;
use crate::eval::evaluate::{argmax, evaluate, Evaluation};
use crate::network::error::NetworkError;
use crate::network::network::Network;
use crate::train::observer::TrainObserver;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_loop;

/// Attribute name and symbol alphabet, in dataset column order (the class
/// column comes first in the file and is not listed here). The one-hot code
/// of a symbol is its position in the alphabet.
pub const ATTRIBUTES: [(&str, &str); 22] = [
    ("cap-shape", "bcxfks"),
    ("cap-surface", "fgys"),
    ("cap-color", "nbcgrpuewy"),
    ("bruises", "tf"),
    ("odor", "alcyfmnps"),
    ("gill-attachment", "adfn"),
    ("gill-spacing", "cwd"),
    ("gill-size", "bn"),
    ("gill-color", "knbhgropuewy"),
    ("stalk-shape", "et"),
    ("stalk-root", "bcuezr?"),
    ("stalk-surface-above-ring", "fyks"),
    ("stalk-surface-below-ring", "fyks"),
    ("stalk-color-above-ring", "nbcgopewy"),
    ("stalk-color-below-ring", "nbcgopewy"),
    ("veil-type", "pu"),
    ("veil-color", "nowy"),
    ("ring-number", "not"),
    ("ring-type", "ceflnpsz"),
    ("spore-print-color", "knbhrouwy"),
    ("population", "acnsvy"),
    ("habitat", "glmpuwd"),
];

/// Width of the one-hot encoded input vector.
pub fn input_width() -> usize {
    ATTRIBUTES.iter().map(|(_, alphabet)| alphabet.len()).sum()
}

/// The two mushroom classes, in output-vector order: `Edible` is output 0,
/// `Poisonous` is output 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edibility {
    Edible,
    Poisonous,
}

impl Edibility {
    pub fn from_symbol(symbol: &str) -> Result<Edibility, DatasetError> {
        match symbol {
            "e" => Ok(Edibility::Edible),
            "p" => Ok(Edibility::Poisonous),
            other => Err(DatasetError::UnknownClass(other.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Edibility::Edible => 'e',
            Edibility::Poisonous => 'p',
        }
    }

    /// One-hot target vector for this class.
    pub fn target(self) -> Vec<f64> {
        match self {
            Edibility::Edible => vec![1.0, 0.0],
            Edibility::Poisonous => vec![0.0, 1.0],
        }
    }
}

impl std::fmt::Display for Edibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One translated record: the encoded input vector, the ground-truth class
/// and the target vector the class encodes to.
#[derive(Debug, Clone)]
pub struct Sample {
    pub input: Vec<f64>,
    pub label: Edibility,
    pub target: Vec<f64>,
}

/// Translates one raw record (class symbol followed by the 22 attribute
/// symbols) into a training/test pattern.
///
/// Unknown symbols are hard errors rather than skipped values: a skipped
/// attribute would silently shift every later one-hot block and corrupt the
/// whole input vector.
pub fn translate(fields: &[&str]) -> Result<Sample, DatasetError> {
    if fields.len() != ATTRIBUTES.len() + 1 {
        return Err(DatasetError::BadRecord {
            expected: ATTRIBUTES.len() + 1,
            got: fields.len(),
        });
    }

    let label = Edibility::from_symbol(fields[0].trim())?;

    let mut input = Vec::with_capacity(input_width());
    for ((attribute, alphabet), raw) in ATTRIBUTES.iter().zip(&fields[1..]) {
        let symbol = raw.trim().chars().next().unwrap_or(' ');
        let position = alphabet
            .find(symbol)
            .ok_or(DatasetError::UnknownSymbol { attribute, symbol })?;
        for i in 0..alphabet.len() {
            input.push(if i == position { 1.0 } else { 0.0 });
        }
    }

    let target = label.target();
    Ok(Sample { input, label, target })
}

/// Maps a network output vector back to the class whose output component is
/// largest; ties resolve toward `Edible`, the first class.
///
/// Note the tie-break direction: an exact tie claims a mushroom is edible.
/// Ties are measure-zero with sigmoid outputs, but a caller who prefers to
/// fail safe should break toward `Poisonous` instead of using this rule.
pub fn retranslate(output: &[f64]) -> Edibility {
    if argmax(output) == 0 {
        Edibility::Edible
    } else {
        Edibility::Poisonous
    }
}

/// Creates a `width`-hidden-unit network sized for the translated records
/// and trains it on `train_set`.
pub fn train_classifier(
    train_set: &[Sample],
    hidden: usize,
    config: &TrainConfig,
    observer: Option<&mut dyn TrainObserver>,
) -> Result<Network, NetworkError> {
    let nx = train_set
        .first()
        .map(|sample| sample.input.len())
        .unwrap_or_else(input_width);
    let mut network = Network::new(nx, hidden, 2)?;

    let inputs: Vec<Vec<f64>> = train_set.iter().map(|s| s.input.clone()).collect();
    let targets: Vec<Vec<f64>> = train_set.iter().map(|s| s.target.clone()).collect();
    train_loop(&mut network, &inputs, &targets, config, observer)?;

    Ok(network)
}

/// Scores a trained classifier against a translated test set.
pub fn test_classifier(
    network: &mut Network,
    test_set: &[Sample],
) -> Result<Evaluation<Edibility>, NetworkError> {
    let inputs: Vec<Vec<f64>> = test_set.iter().map(|s| s.input.clone()).collect();
    let labels: Vec<Edibility> = test_set.iter().map(|s| s.label).collect();
    evaluate(network, &inputs, &labels, retranslate)
}

#[cfg(test)]
mod tests {
    use super::*;

    // First record of the UCI agaricus-lepiota data.
    const RECORD: [&str; 23] = [
        "p", "x", "s", "n", "t", "p", "f", "c", "n", "k", "e", "e", "s", "s", "w",
        "w", "p", "w", "o", "p", "k", "s", "u",
    ];

    #[test]
    fn input_width_covers_all_alphabets() {
        assert_eq!(input_width(), 126);
    }

    #[test]
    fn translate_produces_one_hot_per_attribute() {
        let sample = translate(&RECORD).unwrap();
        assert_eq!(sample.input.len(), 126);
        // Exactly one hot bit per attribute.
        assert_eq!(sample.input.iter().sum::<f64>(), 22.0);
        assert!(sample.input.iter().all(|&v| v == 0.0 || v == 1.0));
        assert_eq!(sample.label, Edibility::Poisonous);
        assert_eq!(sample.target, vec![0.0, 1.0]);
        // cap-shape 'x' is position 2 in "bcxfks".
        assert_eq!(&sample.input[..6], &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn translate_rejects_unknown_symbols() {
        let mut fields = RECORD;
        fields[1] = "q";
        let err = translate(&fields).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::UnknownSymbol { attribute: "cap-shape", symbol: 'q' }
        ));
    }

    #[test]
    fn translate_rejects_short_records() {
        let err = translate(&RECORD[..10]).unwrap_err();
        assert!(matches!(err, DatasetError::BadRecord { expected: 23, got: 10 }));
    }

    #[test]
    fn translate_rejects_unknown_class() {
        let mut fields = RECORD;
        fields[0] = "x";
        assert!(matches!(
            translate(&fields).unwrap_err(),
            DatasetError::UnknownClass(_)
        ));
    }

    #[test]
    fn retranslate_follows_the_larger_output() {
        assert_eq!(retranslate(&[0.9, 0.1]), Edibility::Edible);
        assert_eq!(retranslate(&[0.2, 0.8]), Edibility::Poisonous);
    }

    #[test]
    fn retranslate_resolves_ties_toward_edible() {
        assert_eq!(retranslate(&[0.5, 0.5]), Edibility::Edible);
    }

    #[test]
    fn classifier_round_trip_on_a_tiny_set() {
        let edible = translate(&{
            let mut fields = RECORD;
            fields[0] = "e";
            fields
        })
        .unwrap();
        let poisonous = translate(&RECORD).unwrap();
        let train_set = vec![edible.clone(), poisonous.clone()];

        let mut network =
            train_classifier(&train_set, 4, &TrainConfig::new(10), None).unwrap();
        assert_eq!(network.nx(), 126);
        assert_eq!(network.ny(), 2);

        let evaluation = test_classifier(&mut network, &train_set).unwrap();
        assert_eq!(evaluation.total, 2);
        assert_eq!(evaluation.predictions.len(), 2);
    }
}
