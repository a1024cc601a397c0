use super::*;

#[test]
fn test_sequential_sampler_len() {
    let sampler = SequentialSampler::new();
    assert_eq!(sampler.len(0), 0);
    assert_eq!(sampler.len(5), 5);
}

#[test]
fn test_sequential_sampler_iter_empty() {
    let sampler = SequentialSampler::new();
    assert_eq!(sampler.iter(0).next(), None);
}

#[test]
fn test_sequential_sampler_iter_in_order() {
    let sampler = SequentialSampler::new();
    let indices: Vec<usize> = sampler.iter(5).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}
