use slicemap::prelude::*;

// ----- H E L P E R S ----------------------------------------------------------------

const T: bool = true;
const F: bool = false;

fn abcd() -> SliceMap<&'static str, i32> {
    SliceMap::from([("a", 0), ("b", 1), ("c", 2), ("d", 3)])
}

fn unset() -> SliceMap<&'static str, Option<i32>> {
    SliceMap::from([("a", None), ("b", None), ("c", None)])
}

fn pairs<K: Copy, V: Copy>(map: &SliceMap<K, V>) -> Vec<(K, V)> {
    map.iter().map(|(k, v)| (*k, *v)).collect()
}

// ----- S E L E C T I O N ------------------------------------------------------------

#[test]
fn slicing() -> Result<(), Error> {
    let m = abcd();
    assert_eq!(pairs(&m.select(1..-1)?), [("b", 1), ("c", 2)]);
    assert_eq!(
        pairs(&m.select(RangeSlice::full().with_step(2))?),
        [("a", 0), ("c", 2)]
    );
    assert_eq!(
        pairs(&m.select(RangeSlice::reversed())?),
        [("d", 3), ("c", 2), ("b", 1), ("a", 0)]
    );
    assert_eq!(pairs(&m.select(..10)?), pairs(&m));
    assert_eq!(pairs(&m.select(0..2)?), [("a", 0), ("b", 1)]);
    assert!(m.select(1..1)?.is_empty());
    Ok(())
}

// Bounds and steps at the ends of the isize range are clamped like any other
#[test]
fn extreme_slices() -> Result<(), Error> {
    let m = abcd();
    assert_eq!(pairs(&m.select(RangeSlice::new(Some(1), None, Some(isize::MAX)))?), [("b", 1)]);
    assert_eq!(pairs(&m.select(RangeSlice::full().with_step(isize::MIN))?), [("d", 3)]);
    assert_eq!(pairs(&m.select(0..=isize::MAX)?), pairs(&m));
    assert_eq!(pairs(&m.select(isize::MIN..isize::MAX)?), pairs(&m));

    let mut m = abcd();
    m.set(RangeSlice::new(Some(-1), None, Some(isize::MIN)), 30)?;
    assert_eq!(m.item(&"d")?, &30);
    m.delete(2..=isize::MAX)?;
    assert_eq!(pairs(&m), [("a", 0), ("b", 1)]);
    Ok(())
}

#[test]
fn masking() -> Result<(), Error> {
    let m = abcd();
    assert_eq!(pairs(&m.select(Subscript::mask([T, F, T, F]))?), [("a", 0), ("c", 2)]);
    assert!(m.select(Subscript::mask([F; 4]))?.is_empty());
    assert_eq!(m.select(Subscript::mask([T; 4]))?, m);
    Ok(())
}

// A mask of the wrong length is a list of keys
#[test]
fn mask_of_wrong_length() -> Result<(), Error> {
    let m = abcd();
    let err = m.select(Subscript::mask([T, F, T])).unwrap_err();
    assert_eq!(err, Error::MissingKeys(vec!["true".into(), "false".into()]));

    // ... which succeeds if flags happen to be keys of the map
    let flagged = SliceMap::from([(true, "yes"), (false, "no"), (T, "YES")]);
    assert_eq!(flagged.len(), 2);
    let sub = flagged.select(Subscript::mask([F, T, F]))?;
    assert_eq!(pairs(&sub), [(false, "no"), (true, "YES")]);

    // ... while a right-length sequence of boolean keys is a mask
    let sub = flagged.select(Subscript::keys([F, T]))?;
    assert_eq!(pairs(&sub), [(false, "no")]);
    Ok(())
}

#[test]
fn key_lists() -> Result<(), Error> {
    let m = abcd();
    assert_eq!(pairs(&m.select(Subscript::keys(["a"]))?), [("a", 0)]);
    assert_eq!(pairs(&m.select(Subscript::keys(["d", "b"]))?), [("d", 3), ("b", 1)]);

    let err = m.select(Subscript::keys(["a", "y"])).unwrap_err();
    assert_eq!(err.to_string(), r#"keys ["y"] do not exist"#);
    let err = m.select(Subscript::keys(["x", "y"])).unwrap_err();
    assert_eq!(err.to_string(), r#"keys ["x", "y"] do not exist"#);
    Ok(())
}

// A tuple key is one composite key
#[test]
fn composite_keys() -> Result<(), Error> {
    let mut m = SliceMap::new();
    m.set(Subscript::key(("a", 1)), 'x')?;
    m.set(Subscript::key(("a", 2)), 'y')?;
    assert_eq!(m.item(&("a", 2))?, &'y');
    assert_eq!(m.len(), 2);

    let sub = m.select(Subscript::keys([("a", 2)]))?;
    assert_eq!(pairs(&sub), [(("a", 2), 'y')]);
    Ok(())
}

#[test]
fn plain_keys() -> Result<(), Error> {
    let m = abcd();
    assert_eq!(m.get(Subscript::key("c"))?.value(), Some(&2));
    assert_eq!(m.item(&"c")?, &2);
    let err = m.get(Subscript::key("x")).unwrap_err();
    assert_eq!(err, Error::MissingKeys(vec![r#""x""#.into()]));
    Ok(())
}

#[test]
fn zero_step() {
    let m = abcd();
    let err = m.select(RangeSlice::full().with_step(0)).unwrap_err();
    assert!(matches!(err, Error::Unclassifiable(_)));
}

// ----- A S S I G N M E N T ----------------------------------------------------------

#[test]
fn assignment() -> Result<(), Error> {
    let cases: Vec<(Subscript<&str>, Vec<i32>, [Option<i32>; 3])> = vec![
        (Subscript::keys(["a", "b"]), vec![0, 0], [Some(0), Some(0), None]),
        (Subscript::from(..), vec![0, 0, 0], [Some(0), Some(0), Some(0)]),
        (Subscript::from(..10), vec![0, 0, 0], [Some(0), Some(0), Some(0)]),
        (Subscript::from(0..2), vec![0, 0], [Some(0), Some(0), None]),
        (Subscript::from(1..1), vec![], [None, None, None]),
        (Subscript::slice(None, None, Some(2)), vec![0, 0], [Some(0), None, Some(0)]),
        (Subscript::mask([F, F, F]), vec![], [None, None, None]),
        (Subscript::mask([T, F, F]), vec![0], [Some(0), None, None]),
        (Subscript::mask([T, F, T]), vec![0, 0], [Some(0), None, Some(0)]),
        (Subscript::mask([T, T, T]), vec![0, 0, 0], [Some(0), Some(0), Some(0)]),
    ];

    for (subscript, values, expected) in cases {
        let mut m = unset();
        let values: Vec<Option<i32>> = values.into_iter().map(Some).collect();
        m.set(subscript, values)?;
        assert_eq!(m.keys().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(m.values().copied().collect::<Vec<_>>(), expected);
    }
    Ok(())
}

#[test]
fn assignment_values() -> Result<(), Error> {
    // A single value for a single key
    let mut m = unset();
    m.set(Subscript::keys(["a"]), Some(0))?;
    assert_eq!(m.values().copied().collect::<Vec<_>>(), [Some(0), None, None]);

    // Any iterator
    let mut m = unset();
    m.set(Subscript::keys(["a", "b"]), (0..2).map(Some).collect::<Values<_>>())?;
    assert_eq!(m.values().copied().collect::<Vec<_>>(), [Some(0), Some(1), None]);

    // Another map, contributing its values only
    let mut m = unset();
    m.set(
        Subscript::keys(["a", "b"]),
        SliceMap::from([("b", Some(1)), ("x", Some(1))]),
    )?;
    assert_eq!(m.values().copied().collect::<Vec<_>>(), [Some(1), Some(1), None]);
    Ok(())
}

#[test]
fn assignment_inserts_new_keys_at_the_end() -> Result<(), Error> {
    let mut m = abcd();
    m.set(Subscript::keys(["x", "b", "y"]), [7, 8, 9])?;
    assert_eq!(
        pairs(&m),
        [("a", 0), ("b", 8), ("c", 2), ("d", 3), ("x", 7), ("y", 9)]
    );
    Ok(())
}

#[test]
fn assignment_failures() {
    let mut m = abcd();
    let before = pairs(&m);

    let err = m.set(Subscript::mask([T, F, T, F]), Values::one(1)).unwrap_err();
    assert_eq!(err, Error::ScalarValue { keys: 2 });
    assert!(err.to_string().starts_with("a single value cannot be assigned"));

    let err = m.set(Subscript::mask([T, F, T, F]), [1, 2, 3]).unwrap_err();
    assert_eq!(err.to_string(), "length mismatch: got 2 keys, but 3 values");

    let err = m.set(Subscript::keys(["a", "b", "e"]), [1, 2]).unwrap_err();
    assert_eq!(err, Error::LengthMismatch { keys: 3, values: 2 });

    let err = m.set(Subscript::mask([T, F]), [1]).unwrap_err();
    assert!(matches!(err, Error::MissingKeys(_)));

    assert_eq!(pairs(&m), before);
}

// ----- D E L E T I O N --------------------------------------------------------------

#[test]
fn deletion() -> Result<(), Error> {
    let mut m = abcd();
    m.delete(Subscript::keys(["b", "d"]))?;
    assert_eq!(pairs(&m), [("a", 0), ("c", 2)]);
    for key in ["b", "d"] {
        let err = m.get(Subscript::key(key)).unwrap_err();
        assert!(matches!(err, Error::MissingKeys(_)));
    }

    let mut m = abcd();
    m.delete(1..3)?;
    assert_eq!(pairs(&m), [("a", 0), ("d", 3)]);

    let mut m = abcd();
    m.delete(Subscript::mask([F, T, T, F]))?;
    assert_eq!(pairs(&m), [("a", 0), ("d", 3)]);

    let mut m = abcd();
    assert!(m.delete(Subscript::keys(["a", "q"])).is_err());
    assert_eq!(m, abcd());
    Ok(())
}

// Positions are taken from the order at call time
#[test]
fn positions_follow_mutations() -> Result<(), Error> {
    let mut m = abcd();
    m.delete(Subscript::key("a"))?;
    m.set(Subscript::key("e"), 4)?;
    assert_eq!(pairs(&m.select(..1)?), [("b", 1)]);
    assert_eq!(pairs(&m.select(Subscript::mask([F, F, F, T]))?), [("e", 4)]);

    m.remove(&"e");
    m.insert("a", 0)?;
    assert_eq!(pairs(&m.select(-1..)?), [("a", 0)]);
    Ok(())
}

#[test]
fn rekeying() -> Result<(), Error> {
    let mut m = abcd();
    m.rekey(["w", "x", "y", "z"])?;
    assert_eq!(pairs(&m), [("w", 0), ("x", 1), ("y", 2), ("z", 3)]);
    assert!(m.rekey(["a"]).is_err());
    assert_eq!(m.len(), 4);
    Ok(())
}

#[test]
fn float_values() -> Result<(), Error> {
    use float_eq::assert_float_eq;

    let mut m: SliceMap<&str, f64> = ["x", "y", "z"].into_iter().map(|k| (k, 0.0)).collect();
    m.set(RangeSlice::reversed(), [0.3, 0.2, 0.1])?;
    assert_float_eq!(*m.item(&"x")?, 0.1, abs <= 1e-15);

    let tail: f64 = m.select(1..)?.values().sum();
    assert_float_eq!(tail, 0.5, abs <= 1e-12);
    Ok(())
}
