//! Parse SNBT, inspect it, and write it back.
//!
//! Run with: cargo run --example simple

use snbt::{from_str, to_string, Tag};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = r#"{id: "minecraft:diamond_sword", Count: 1b, tag: {Damage: 12, Enchantments: [{id: sharpness, lvl: 5s}]}}"#;

    // Parse SNBT text
    let item = from_str(input)?;
    println!("Parsed a {} tag\n", item.kind());

    let root = item.as_compound().ok_or("root is not a compound")?;
    if let Some(id) = root.get("id").and_then(Tag::as_str) {
        println!("Item id: {}", id);
    }
    if let Some(count) = root.get("Count").and_then(Tag::as_byte) {
        println!("Count: {}", count);
    }

    // Write it back
    let output = to_string(&item);
    println!("\nSNBT output:\n{}\n", output);

    assert_eq!(from_str(&output)?, item);
    println!("✓ Round-trip successful");

    Ok(())
}
