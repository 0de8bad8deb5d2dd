use natorder::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;

#[test]
fn test_basic_natural_sort() {
    let input = vec![
        "file10.txt".to_string(),
        "file2.txt".to_string(),
        "file1.txt".to_string(),
        "file20.txt".to_string(),
    ];

    let indices = natural_order(&input);

    let sorted: Vec<&String> = indices.iter().map(|&i| &input[i]).collect();
    assert_eq!(sorted, vec!["file1.txt", "file2.txt", "file10.txt", "file20.txt"]);
}

#[test]
fn test_mutable_sort() {
    let mut data = vec!["v1.10.0", "v1.2.0", "v1.9.3", "v1.9.12", "v0.99"];
    natural_sort(&mut data);
    assert_eq!(data, vec!["v0.99", "v1.2.0", "v1.9.3", "v1.9.12", "v1.10.0"]);
}

#[test]
fn test_equal_keys_break_ties_on_raw_bytes() {
    // "a01" and "a1" normalize to the same key.
    let mut data = vec!["a1", "a01", "a001", "a2"];
    natural_sort(&mut data);
    assert_eq!(data, vec!["a001", "a01", "a1", "a2"]);

    assert_eq!(natural_cmp(b"a01", b"a1"), Ordering::Less);
    assert_eq!(natural_cmp(b"a1", b"a1"), Ordering::Equal);
    assert_eq!(natural_cmp(b"a10", b"a9"), Ordering::Greater);
}

#[test]
fn test_identical_keys_are_stable() {
    let input = vec!["x", "b2", "x", "b2", "a"];
    assert_eq!(natural_order(&input), vec![4, 1, 3, 0, 2]);
}

#[test]
fn test_vec_deque() {
    use std::collections::VecDeque;
    let input: VecDeque<String> = VecDeque::from(vec![
        "track12".to_string(),
        "track3".to_string(),
        "track1".to_string(),
    ]);

    let indices = natural_order(&input);

    let sorted: Vec<&String> = indices.iter().map(|&i| &input[i]).collect();
    assert_eq!(sorted, vec!["track1", "track3", "track12"]);
}

#[test]
fn test_byte_keys_and_slices() {
    let input: Vec<Vec<u8>> = vec![b"k3".to_vec(), b"k\xff".to_vec(), b"k21".to_vec()];
    assert_eq!(natural_order(input.as_slice()), vec![0, 2, 1]);
}

#[test]
fn test_empty() {
    let input: Vec<String> = vec![];
    assert!(natural_order(&input).is_empty());

    let mut data: Vec<&str> = vec![];
    natural_sort(&mut data);
    assert!(data.is_empty());
}

#[test]
fn test_custom_width() {
    // At width 1 every digit is its own run, so numbers compare digit by digit.
    let narrow = Normalizer::with_width(1);
    assert_eq!(narrow.compare(b"x10", b"x9"), Ordering::Less);

    let wide = Normalizer::with_width(3);
    assert_eq!(wide.compare(b"x10", b"x9"), Ordering::Greater);
}

#[test]
fn test_fuzz_numeric_sort() {
    let mut rng = StdRng::seed_from_u64(7);
    let prefixes = ["img", "IMG", "photo"];

    for _ in 0..100 {
        let count = rng.random_range(0..500);
        let mut input: Vec<(usize, u64)> = (0..count)
            .map(|_| (rng.random_range(0..prefixes.len()), rng.random_range(0..1_000_000)))
            .collect();
        let mut data: Vec<String> = input
            .iter()
            .map(|&(p, n)| format!("{}{}.jpg", prefixes[p], n))
            .collect();

        natural_sort(&mut data);

        input.sort_by(|a, b| prefixes[a.0].cmp(prefixes[b.0]).then(a.1.cmp(&b.1)));
        let expected: Vec<String> = input
            .iter()
            .map(|&(p, n)| format!("{}{}.jpg", prefixes[p], n))
            .collect();
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_order_matches_sort() {
    let mut rng = rand::rng();

    for _ in 0..1_000 {
        let count = rng.random_range(0..50);
        let input: Vec<String> = (0..count)
            .map(|_| {
                let len = rng.random_range(0..12);
                (0..len)
                    .map(|_| b"01289ab."[rng.random_range(0..8)] as char)
                    .collect()
            })
            .collect();

        let indices = natural_order(&input);
        let ordered: Vec<String> = indices.iter().map(|&i| input[i].clone()).collect();

        for pair in ordered.windows(2) {
            assert_ne!(natural_cmp(pair[0].as_bytes(), pair[1].as_bytes()), Ordering::Greater);
        }

        let mut sorted = input.clone();
        natural_sort(&mut sorted);
        assert_eq!(sorted, ordered);
    }
}
