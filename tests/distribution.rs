use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_pcg::Pcg32;
use vose_alias::{AliasSampler, AliasTable, SharedSource, WeightError, WeightedChoice};

const DRAWS: usize = 100_000;
const TOLERANCE: f64 = 0.01;

/// Empirical frequency of each outcome over `DRAWS` draws.
fn frequencies(sampler: &AliasSampler<StdRng>) -> Vec<f64> {
    let mut counts = vec![0usize; sampler.len()];
    for i in sampler.iter().take(DRAWS) {
        counts[i] += 1;
    }
    counts.into_iter().map(|c| c as f64 / DRAWS as f64).collect()
}

fn assert_frequencies(observed: &[f64], expected: &[f64]) {
    for (i, (o, e)) in observed.iter().zip(expected).enumerate() {
        assert!((o - e).abs() < TOLERANCE, "outcome {i}: observed {o}, expected {e}");
    }
}

#[test]
fn even_pair_is_uniform() {
    let sampler = AliasSampler::new_with_rng(&[0.5, 0.5], SharedSource::seeded(2024)).unwrap();
    assert_frequencies(&frequencies(&sampler), &[0.5, 0.5]);
}

#[test]
fn skewed_pair_follows_weights() {
    let sampler = AliasSampler::new_with_rng(&[0.15, 0.85], SharedSource::seeded(15)).unwrap();
    assert_frequencies(&frequencies(&sampler), &[0.15, 0.85]);
}

#[test]
fn unnormalized_weights_follow_their_ratios() {
    let sampler =
        AliasSampler::new_with_rng(&[3.0, 0.0, 1.0, 6.0], SharedSource::seeded(8)).unwrap();
    assert_frequencies(&frequencies(&sampler), &[0.3, 0.0, 0.1, 0.6]);
}

#[test]
fn all_zero_weights_fall_back_to_uniform() {
    let sampler = AliasSampler::new_with_rng(&[0.0; 4], SharedSource::seeded(4)).unwrap();
    assert_frequencies(&frequencies(&sampler), &[0.25; 4]);
}

#[test]
fn single_outcome_always_wins() {
    let sampler = AliasSampler::new(&[1.0]).unwrap();
    assert!(sampler.iter().take(10_000).all(|i| i == 0));
}

#[test]
fn empty_weights_yield_no_sampler() {
    assert_eq!(AliasSampler::new(&[]).unwrap_err(), WeightError::Empty);
}

#[test]
fn seeded_draws_replay_exactly() {
    let weights = [0.05, 0.15, 0.3, 0.5];
    let run = || {
        let sampler =
            AliasSampler::new_with_rng(&weights, SharedSource::<Pcg32>::seeded(77)).unwrap();
        sampler.iter().take(20).collect::<Vec<_>>()
    };
    let expected = vec![1, 3, 3, 2, 3, 2, 3, 1, 2, 3, 2, 2, 3, 1, 3, 2, 2, 0, 3, 3];
    assert_eq!(run(), expected);
    assert_eq!(run(), expected);
}

#[test]
fn independent_builds_are_bitwise_identical() {
    let weights = [0.7, 0.1, 0.1, 0.05, 0.05];
    let a = AliasTable::new(&weights).unwrap();
    let b = AliasTable::new(&weights).unwrap();
    assert_eq!(a, b);
    let bits = |t: &AliasTable| t.probabilities().iter().map(|p| p.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn table_from_configuration_string() {
    let table: AliasTable = "0.15, 0.85".parse().unwrap();
    let sampler = AliasSampler::from_table(table, SharedSource::seeded(99));
    assert_frequencies(&frequencies(&sampler), &[0.15, 0.85]);
}

#[test]
fn weighted_choice_picks_labels_by_weight() {
    let choice =
        WeightedChoice::from_pairs([("compact", 1.0), ("classic", 3.0)]).unwrap();
    let mut rng = StdRng::seed_from_u64(31);
    let compact = (0..DRAWS)
        .filter(|_| *choice.sample(&mut rng) == "compact")
        .count();
    let freq = compact as f64 / DRAWS as f64;
    assert!((freq - 0.25).abs() < TOLERANCE, "freq={freq}");
}
