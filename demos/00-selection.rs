// demos/00-selection.rs

// Selecting from a SliceMap by key, key list, slice and boolean mask.
// Run with:
// cargo run --example 00-selection
// or, to see how each subscript is classified:
// RUST_LOG=trace cargo run --example 00-selection

use slicemap::prelude::*;

// Use Anyhow for convenient error handling
fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Some Nordic capitals, in the order we insert them
    let mut capitals = SliceMap::new();
    capitals.insert("Denmark", "Copenhagen")?;
    capitals.insert("Norway", "Oslo")?;
    capitals.insert("Sweden", "Stockholm")?;
    capitals.insert("Finland", "Helsinki")?;
    capitals.insert("Iceland", "Reykjavik")?;

    // A plain key gives the value itself...
    let oslo = capitals.get(Subscript::key("Norway"))?;
    println!("Norway:      {:?}", oslo.value());

    // ...while every other subscript gives a new SliceMap
    let some = capitals.select(Subscript::keys(["Iceland", "Denmark"]))?;
    println!("Key list:    {some:?}");

    // Slices follow Python's rules: negative positions count from the end,
    // and a negative step walks backwards
    println!("1:-1         {:?}", capitals.select(1..-1)?);
    println!("::2          {:?}", capitals.select(RangeSlice::full().with_step(2))?);
    println!("::-1         {:?}", capitals.select(RangeSlice::reversed())?);

    // A boolean mask must be exactly as long as the map
    let on_the_peninsula = capitals
        .keys()
        .map(|country| matches!(*country, "Norway" | "Sweden"))
        .collect::<Vec<_>>();
    println!("Mask:        {:?}", capitals.select(Subscript::mask(on_the_peninsula))?);

    // Otherwise it is taken as a list of keys, which usually do not exist
    println!("Short mask:  {:?}", capitals.select(Subscript::mask([true, false])));

    // Missing keys are reported together
    println!("Missing:     {:?}", capitals.select(Subscript::keys(["Estonia", "Norway", "Latvia"])));
    Ok(())
}
