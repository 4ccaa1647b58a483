/// Builds a [`Compound`](crate::Compound) from `name => value` pairs.
///
/// Values go through [`Into<Tag>`](crate::Tag), so numbers, strings, arrays,
/// lists and nested compounds can be mixed freely. Members keep the order they
/// are written in; a repeated name overwrites the earlier value in place.
///
/// ```rust
/// use snbt::{compound, Tag};
///
/// let item = compound! {
///     "id" => "minecraft:diamond_sword",
///     "Count" => 1i8,
///     "tag" => compound! { "Damage" => 12 },
/// };
/// assert_eq!(item.len(), 3);
/// assert_eq!(item.get("Count"), Some(&Tag::Byte(1)));
/// ```
#[macro_export]
macro_rules! compound {
    () => {
        $crate::Compound::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut compound = $crate::Compound::new();
        $(
            compound.insert($key, $value);
        )+
        compound
    }};
}
