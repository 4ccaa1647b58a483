//! Compact versus pretty SNBT output.
//!
//! Run with: cargo run --example pretty_print

use snbt::{compound, from_str, to_string_with_options, List, SnbtOptions, Style, Tag};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut motion = List::new();
    for v in [0.0, -0.0784, 0.0] {
        motion.push(v)?;
    }

    let entity = Tag::Compound(compound! {
        "id" => "minecraft:zombie",
        "Health" => 20.0f32,
        "Motion" => motion,
        "UUID" => vec![1i32, 2, 3, 4],
        "Passengers" => List::new(),
        "Custom Name" => "Bob",
    });

    for style in [Style::Compact, Style::Pretty] {
        let options = SnbtOptions::new().with_style(style);
        let snbt = to_string_with_options(&entity, &options);
        println!("{:?}:\n{}\n", style, snbt);

        // Both layouts parse back to the same tree
        assert_eq!(from_str(&snbt)?, entity);
    }

    println!("✓ Both layouts round-trip");

    Ok(())
}
