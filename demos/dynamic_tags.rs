//! Building, editing and walking tag trees at runtime.
//!
//! Run with: cargo run --example dynamic_tags

use snbt::{compound, from_str, to_string_pretty, Compound, Error, List, NamedTag, Tag};

fn describe(tag: &Tag, indent: usize) {
    let pad = "  ".repeat(indent);
    match tag {
        Tag::Compound(compound) => {
            for (name, child) in compound {
                println!("{}{} ({})", pad, name, child.kind());
                describe(child, indent + 1);
            }
        }
        Tag::List(list) => {
            for (i, child) in list.iter().enumerate() {
                println!("{}[{}] ({})", pad, i, child.kind());
                describe(child, indent + 1);
            }
        }
        _ => {}
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut level = Compound::new();
    level.put(NamedTag::new("LevelName", "New World"));
    level.insert("SpawnX", 0);
    level.insert("SpawnY", 64);
    level.insert("hardcore", false);

    let mut rules = List::new();
    rules.push(compound! { "name" => "doDaylightCycle", "value" => true })?;
    rules.push(compound! { "name" => "randomTickSpeed", "value" => 3 })?;
    level.insert("GameRules", rules);

    // Lists only accept one kind of tag
    let mut numbers = List::new();
    numbers.push(1)?;
    match numbers.push("two") {
        Err(Error::ListKindMismatch { expected, found }) => {
            println!("Rejected a {} in a list of {}\n", found, expected)
        }
        other => println!("Unexpected result: {:?}\n", other),
    }

    // Edit in place
    if let Some(Tag::Int(y)) = level.get_mut("SpawnY") {
        *y += 1;
    }

    let root = Tag::Compound(level);
    describe(&root, 0);

    let snbt = to_string_pretty(&root);
    println!("\n{}\n", snbt);

    // Typed access with TryFrom
    let parsed = from_str(&snbt)?;
    let spawn_y = parsed
        .as_compound()
        .and_then(|c| c.get("SpawnY"))
        .cloned()
        .map(i32::try_from)
        .transpose()?;
    assert_eq!(spawn_y, Some(65));
    println!("✓ SpawnY is {:?}", spawn_y);

    Ok(())
}
