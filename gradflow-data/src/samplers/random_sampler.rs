use super::traits::Sampler;
use rand::seq::SliceRandom;
use rand::Rng;

/// Samples indices in random order.
///
/// Without replacement every index appears at most once per epoch; with
/// `num_samples == None` that is a permutation of the whole dataset.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
}

impl RandomSampler {
    /// * `replacement`: if `true`, an index can be drawn several times.
    /// * `num_samples`: indices drawn per epoch. Defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
        }
    }

    pub fn replacement(&self) -> bool {
        self.replacement
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let mut rng = rand::thread_rng();
        let num_samples = self.num_samples.unwrap_or(dataset_len);

        if self.replacement {
            let indices: Vec<usize> = (0..num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect();
            return Box::new(indices.into_iter());
        }

        if num_samples > dataset_len {
            log::warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement, yielding no indices",
                num_samples,
                dataset_len
            );
            return Box::new(std::iter::empty());
        }
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut rng);
        indices.truncate(num_samples);
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        let num_samples = self.num_samples.unwrap_or(dataset_len);
        if dataset_len == 0 || (!self.replacement && num_samples > dataset_len) {
            0
        } else {
            num_samples
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
