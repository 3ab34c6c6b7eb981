use rand::seq::SliceRandom;
use rand::Rng;

use super::dataset_split::DatasetSplit;

/// One class's files divided between the three splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub train: Vec<T>,
    pub valid: Vec<T>,
    pub test: Vec<T>,
}

impl<T> Partition<T> {
    pub fn get(&self, split: DatasetSplit) -> &[T] {
        match split {
            DatasetSplit::Train => &self.train,
            DatasetSplit::Valid => &self.valid,
            DatasetSplit::Test => &self.test,
        }
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.valid.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (DatasetSplit, &T)> {
        DatasetSplit::ALL
            .into_iter()
            .flat_map(move |split| self.get(split).iter().map(move |item| (split, item)))
    }
}

/// `floor(len * (1 - ratio))`, clamped to `[0, len]`.
pub fn cut_index(len: usize, ratio: f64) -> usize {
    // `as usize` saturates negatives and NaN to 0
    ((len as f64 * (1.0 - ratio)).floor() as usize).min(len)
}

/// Items past the first cut go to test, then the remainder is cut again
/// into train and valid. With `rng` set the list is shuffled before each cut.
pub fn partition<T, R>(
    mut items: Vec<T>,
    test_ratio: f64,
    valid_ratio: f64,
    mut rng: Option<&mut R>,
) -> Partition<T>
where
    R: Rng + ?Sized,
{
    if let Some(rng) = rng.as_deref_mut() {
        items.shuffle(rng);
    }
    let test_cut = cut_index(items.len(), test_ratio);
    let test = items.split_off(test_cut);

    let mut remainder = items;
    if let Some(rng) = rng {
        remainder.shuffle(rng);
    }
    let valid_cut = cut_index(remainder.len(), valid_ratio);
    let valid = remainder.split_off(valid_cut);

    Partition {
        train: remainder,
        valid,
        test,
    }
}
