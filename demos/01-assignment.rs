// demos/01-assignment.rs

// Assigning to, and deleting from, a SliceMap through the same
// kinds of subscripts used for selection.
// Run with:
// cargo run --example 01-assignment

use slicemap::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Mean temperatures (°C), initially unknown
    let mut temperature: SliceMap<&str, Option<f64>> =
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun"].into_iter().map(|m| (m, None)).collect();

    // A slice assigns positionally
    temperature.set(..3, [Some(0.1), Some(0.0), Some(2.1)])?;

    // A key list can also introduce new keys. They go to the end
    temperature.set(Subscript::keys(["Jun", "Jul"]), [Some(15.2), Some(17.4)])?;

    // A single value is fine for a single key
    temperature.set(Subscript::keys(["Apr"]), Some(6.0))?;
    println!("{temperature:?}");

    // Values may come from another map: only its values are used, in its order
    let forecast = SliceMap::from([("May", Some(10.8)), ("Whatever", Some(16.3))]);
    temperature.set(Subscript::keys(["May", "Jun"]), forecast)?;
    println!("{temperature:?}");

    // A mismatch between keys and values changes nothing
    let err = temperature.set(RangeSlice::reversed(), [Some(1.0)]);
    println!("Mismatch: {err:?}");

    // Remove the months still unknown, using a mask
    let unknown: Vec<bool> = temperature.values().map(Option::is_none).collect();
    temperature.delete(Subscript::mask(unknown))?;

    // And give the remaining ones numbers instead of names
    let mut numbered: SliceMap<usize, Option<f64>> = temperature.into_iter().map(|(_, t)| t).enumerate().collect();
    numbered.rekey(1..=numbered.len())?;
    println!("{numbered:?}");
    Ok(())
}
