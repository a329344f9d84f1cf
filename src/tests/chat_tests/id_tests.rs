// Id Tests - Testing message id generation strategies

use crate::chat::ids::MAX_ID_LENGTH;
use crate::chat::{IdGenerator, IdStrategy, RandomIds, SequentialIds};
use std::collections::HashSet;

fn assert_unique(generator: &dyn IdGenerator, count: usize) {
    let mut seen = HashSet::new();
    for _ in 0..count {
        let id = generator.next_id();
        assert!(seen.insert(id.clone()), "Duplicate id generated: {}", id);
    }
}

#[test]
fn test_random_ids_are_unique() {
    assert_unique(&RandomIds::default(), 10_000);
}

#[test]
fn test_sequential_ids_are_unique() {
    assert_unique(&SequentialIds::new(), 10_000);
}

#[test]
fn test_random_ids_have_fixed_alphanumeric_length() {
    let generator = RandomIds::new(24);

    for _ in 0..100 {
        let id = generator.next_id();
        assert_eq!(id.as_str().len(), 24);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn test_random_ids_zero_length_raised() {
    let generator = RandomIds::new(0);

    assert_eq!(generator.length(), 1);
    assert_eq!(generator.next_id().as_str().len(), 1);
}

#[test]
fn test_random_ids_length_capped() {
    let generator = RandomIds::new(usize::MAX);

    assert_eq!(generator.length(), MAX_ID_LENGTH);
    assert_eq!(generator.next_id().as_str().len(), MAX_ID_LENGTH);
}

#[test]
fn test_sequential_ids_count_up_under_nonce() {
    let generator = SequentialIds::with_nonce("abc");

    assert_eq!(generator.next_id().as_str(), "abc-0");
    assert_eq!(generator.next_id().as_str(), "abc-1");
    assert_eq!(generator.next_id().as_str(), "abc-2");
}

#[test]
fn test_sequential_sessions_use_distinct_nonces() {
    let first = SequentialIds::new();
    let second = SequentialIds::new();

    assert_ne!(first.nonce(), second.nonce());
    assert_ne!(first.next_id(), second.next_id());
}

#[test]
fn test_sequential_ids_unique_across_threads() {
    let generator = std::sync::Arc::new(SequentialIds::with_nonce("t"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = generator.clone();
            std::thread::spawn(move || (0..1000).map(|_| generator.next_id()).collect::<Vec<_>>())
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("generator thread panicked") {
            assert!(seen.insert(id));
        }
    }
    assert_eq!(seen.len(), 4000);
}

#[test]
fn test_strategy_builds_matching_generator() {
    let random = IdStrategy::Random.build(8);
    assert_eq!(random.next_id().as_str().len(), 8);

    let sequential = IdStrategy::Sequential.build(8);
    assert!(sequential.next_id().as_str().ends_with("-0"));
}

#[test]
fn test_strategy_serde_names() {
    assert_eq!(serde_json::to_string(&IdStrategy::Random).unwrap(), "\"random\"");
    let parsed: IdStrategy = serde_json::from_str("\"sequential\"").unwrap();
    assert_eq!(parsed, IdStrategy::Sequential);
}
