//! Loading the mushroom CSV and splitting it into train/test sets.

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::error::DatasetError;
use crate::data::mushroom::{translate, Sample};

/// Reads the dataset at `path`, shuffles the records once and splits them
/// into `train_size` training samples followed by `test_size` test samples.
///
/// The file is expected to carry a header row, which is discarded. This is
/// the only place in the system where record order is randomized; training
/// itself visits its set in a fixed order.
pub fn build_sets(
    path: &Path,
    train_size: usize,
    test_size: usize,
) -> Result<(Vec<Sample>, Vec<Sample>), DatasetError> {
    let text = std::fs::read_to_string(path)?;
    split_records(&text, train_size, test_size, &mut rand::thread_rng())
}

/// Same as [`build_sets`] but over in-memory text and a caller-supplied RNG,
/// so the shuffle is seedable in tests.
pub fn split_records<R: Rng>(
    text: &str,
    train_size: usize,
    test_size: usize,
    rng: &mut R,
) -> Result<(Vec<Sample>, Vec<Sample>), DatasetError> {
    let mut records: Vec<&str> = text
        .lines()
        .skip(1) // header
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let requested = train_size + test_size;
    if records.len() < requested {
        return Err(DatasetError::NotEnoughRows {
            available: records.len(),
            requested,
        });
    }

    records.shuffle(rng);

    let translate_line = |line: &str| -> Result<Sample, DatasetError> {
        let fields: Vec<&str> = line.split(',').collect();
        translate(&fields)
    };

    let train_set = records[..train_size]
        .iter()
        .map(|line| translate_line(line))
        .collect::<Result<Vec<_>, _>>()?;
    let test_set = records[train_size..requested]
        .iter()
        .map(|line| translate_line(line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((train_set, test_set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mushroom::Edibility;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const HEADER: &str = "class,cap-shape,cap-surface,cap-color,bruises,odor,\
gill-attachment,gill-spacing,gill-size,gill-color,stalk-shape,stalk-root,\
stalk-surface-above-ring,stalk-surface-below-ring,stalk-color-above-ring,\
stalk-color-below-ring,veil-type,veil-color,ring-number,ring-type,\
spore-print-color,population,habitat";

    const EDIBLE: &str = "e,x,s,y,t,a,f,c,b,k,e,c,s,s,w,w,p,w,o,p,n,n,g";
    const POISONOUS: &str = "p,x,s,n,t,p,f,c,n,k,e,e,s,s,w,w,p,w,o,p,k,s,u";

    fn csv(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn splits_into_requested_sizes() {
        let text = csv(&[EDIBLE, POISONOUS, EDIBLE, POISONOUS, EDIBLE, POISONOUS]);
        let mut rng = StdRng::seed_from_u64(42);
        let (train, test) = split_records(&text, 4, 2, &mut rng).unwrap();
        assert_eq!(train.len(), 4);
        assert_eq!(test.len(), 2);
        let edible = train
            .iter()
            .chain(&test)
            .filter(|s| s.label == Edibility::Edible)
            .count();
        assert_eq!(edible, 3);
    }

    #[test]
    fn rejects_splits_larger_than_the_file() {
        let text = csv(&[EDIBLE, POISONOUS]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = split_records(&text, 2, 1, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::NotEnoughRows { available: 2, requested: 3 }
        ));
    }

    #[test]
    fn surfaces_translation_errors() {
        let bad = "e,QQ,s,y,t,a,f,c,b,k,e,c,s,s,w,w,p,w,o,p,n,n,g";
        let text = csv(&[bad]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            split_records(&text, 1, 0, &mut rng).unwrap_err(),
            DatasetError::UnknownSymbol { .. }
        ));
    }

    #[test]
    fn skips_the_header_and_blank_lines() {
        let text = format!("{HEADER}\n\n{EDIBLE}\n\n{POISONOUS}\n");
        let mut rng = StdRng::seed_from_u64(9);
        let (train, test) = split_records(&text, 1, 1, &mut rng).unwrap();
        assert_eq!(train.len(), 1);
        assert_eq!(test.len(), 1);
    }
}
