mod common;
use common::random_set;
use rstest::rstest;
use tidbits::Set;

#[rstest]
#[case(0, 0)]
#[case(10, 0)]
#[case(10, 10)]
#[case(100, 30)]
fn set_algebra_laws(#[case] na: usize, #[case] nb: usize) {
    let a = random_set(na, 64);
    let b = random_set(nb, 64);

    let union = a.union(&b);
    let inter = a.intersection(&b);
    let diff = a.difference(&b);

    assert!(union.len() >= a.len().max(b.len()));
    assert!(a.subset_of(&union) && b.subset_of(&union));
    assert!(inter.subset_of(&a) && inter.subset_of(&b));
    assert!(diff.iter().all(|k| a.has(k) && !b.has(k)));
    assert_eq!(union.len(), a.len() + b.len() - inter.len());
    assert_eq!(a.union(&b), b.union(&a));
    assert_eq!(a.intersection(&b), b.intersection(&a));

    assert!(a.subset_of(&a));
    assert!(!a.proper_subset_of(&a));
}

#[test]
fn set_remove_set() {
    let mut a = random_set(100, 32);
    let b = random_set(20, 32);
    let expected = a.difference(&b);
    a.remove_set(&b);
    assert_eq!(a, expected);
    assert!(b.iter().all(|k| !a.has(k)));
}

#[test]
fn set_to_slice_snapshot() {
    let mut s = Set::from_values(vec!["a", "b", "c"]);
    let mut slice = s.to_slice();
    s.clear();
    assert!(!s.has_items());
    slice.sort(|a, b| a.cmp(b));
    assert_eq!(slice.values(), &["a", "b", "c"]);
}

#[test]
fn set_iteration_visits_all() {
    let s = random_set(500, 1000);
    let mut seen = Set::new();
    s.for_each(|v| seen.insert(*v));
    assert_eq!(seen, s);

    let mut count = 0;
    for _ in &s {
        count += 1;
    }
    assert_eq!(count, s.len());
    assert_eq!(s.clone().into_iter().count(), s.len());
}
