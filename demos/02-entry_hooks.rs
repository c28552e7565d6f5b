// demos/02-entry_hooks.rs

// An entry hook sees every single key write, after key lists, slices and
// masks have been expanded. Here it normalizes keys and refuses values.
// Run with:
// RUST_LOG=debug cargo run --example 02-entry_hooks

use slicemap::prelude::*;

// Keys are case insensitive, and negative stock counts are refused
fn stock_keeping(key: String, count: i64) -> Result<(String, i64), Error> {
    if count < 0 {
        return Err(Error::Rejected(format!("negative count {count} for {key}")));
    }
    Ok((key.to_lowercase(), count))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut stock = SliceMap::with_hook(EntryHook(stock_keeping));
    stock.set(
        Subscript::keys(["Apples".to_string(), "PEARS".into(), "plums".into()]),
        [10, 3, 0],
    )?;
    println!("{stock:?}");

    // The whole assignment is refused, so nothing is written
    let refused = stock.set(Subscript::keys(["apples".to_string(), "pears".into()]), [9, -1]);
    println!("{refused:?}");
    println!("{stock:?}");

    // Selections keep the hook
    let mut fruit = stock.select(..2)?;
    println!("{:?}", fruit.insert("Pears".into(), -5));
    Ok(())
}
