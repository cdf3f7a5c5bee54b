use tidbits::Tuple;

#[test]
fn tuple_get_set() {
    let mut t = Tuple::new(1, "x");
    assert_eq!(*t.get1(), 1);
    assert_eq!(*t.get2(), "x");
    t.set(2, "y");
    assert_eq!(*t.get1(), 2);
    assert_eq!(*t.get2(), "y");
}

#[test]
fn tuple_heterogeneous_slots() {
    let mut t = Tuple::new(vec![1u8], Some('a'));
    t.get1_mut().push(2);
    *t.get2_mut() = None;
    let (first, second) = t.into_inner();
    assert_eq!(first, vec![1, 2]);
    assert_eq!(second, None);
}
