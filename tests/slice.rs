mod common;
use common::{rand, random_slice};
use rstest::rstest;
use tidbits::num::{max_value, min_value};
use tidbits::Slice;

#[rstest]
#[case(0)]
#[case(1)]
#[case(10)]
#[case(1000)]
fn slice_sort_ascending(#[case] n: usize) {
    let mut s = random_slice(n, 100);
    let original = s.clone();
    s.sort(|a, b| a.cmp(b));

    assert_eq!(s.len(), original.len());
    assert!(s.values().windows(2).all(|w| w[0] <= w[1]));
    if n > 0 {
        assert_eq!(s.first(), min_value(original.values()));
        assert_eq!(s.last(), max_value(original.values()));
    }
}

#[rstest]
#[case(1)]
#[case(10)]
#[case(100)]
fn slice_insert_remove_shift(#[case] n: usize) {
    let original = random_slice(n, 1000);
    let mut s = original.clone();
    let idx = rand(0, n as u64 + 1) as usize;

    s.insert_at(idx, 1000);
    assert_eq!(s.len(), n + 1);
    assert_eq!(s.get_at(idx), 1000);
    assert_eq!(&s.values()[..idx], &original.values()[..idx]);
    assert_eq!(&s.values()[idx + 1..], &original.values()[idx..]);

    s.remove_at(idx);
    assert_eq!(s, original);
}

#[test]
fn slice_prepend_append_chain() {
    let mut s = Slice::default();
    for i in 0..10 {
        s.append(i).prepend(-i);
    }
    assert_eq!(s.len(), 20);
    assert_eq!(s.first(), -9);
    assert_eq!(s.last(), 9);
    assert_eq!(s.reduce(0, |acc, v| acc + v), 0);
}

#[test]
fn slice_clone_independence() {
    let original = random_slice(50, 10);
    let snapshot = original.values().to_vec();
    let mut copy = original.clone();
    copy.sort(|a, b| b.cmp(a)).append(11).remove_at(0);
    for v in copy.values_mut() {
        *v += 1;
    }
    assert_eq!(original.values(), snapshot.as_slice());
}

#[test]
fn slice_functional_helpers() {
    let s = random_slice(200, 50);

    let shifted = s.map(|v| v + 1);
    assert_eq!(shifted.len(), s.len());
    assert!(!shifted.exists(|v| *v == 0));

    let small = s.select(|v| *v < 25);
    assert!(small.len() <= s.len());
    assert!(!small.exists(|v| *v >= 25));
    assert_eq!(small.len(), s.iter().filter(|v| **v < 25).count());

    let sum = s.reduce(0, |acc, v| acc + v);
    assert_eq!(sum, s.iter().sum::<u64>());

    for n in [0, 1, 199, 200, 500] {
        let head = s.take(n);
        assert_eq!(head.len(), n.min(s.len()));
        assert!(head.iter().zip(s.iter()).all(|(a, b)| a == b));
    }
}

#[test]
fn slice_enumerate_first_error() {
    let s = Slice::new(vec!["1", "2", "x", "4", "y"]);
    let mut parsed = Vec::new();
    let res = s.enumerate(|v| {
        parsed.push(v.parse::<u8>()?);
        Ok::<(), std::num::ParseIntError>(())
    });
    assert!(res.is_err());
    assert_eq!(parsed, vec![1, 2]);
}
