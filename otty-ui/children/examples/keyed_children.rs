//! Print the key path assigned to every child of a small widget tree.
//!
//! Run with `RUST_LOG=debug` to see traversal diagnostics.
use otty_ui_children::element::Element;
use otty_ui_children::{Child, count, map, only};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let tabs: Child = Child::seq([
        Child::from(Element::new("tab").keyed("shell")),
        Child::seq([Element::new("tab"), Element::new("tab")]),
        Child::from_map_entries(vec![("ssh", Element::new("tab"))]),
        Child::Null,
    ]);
    println!("children: {}", count(tabs)?);

    let tabs: Child = Child::seq([
        Child::from(Element::new("tab").keyed("shell")),
        Child::seq([Element::new("tab"), Element::new("tab")]),
    ]);
    let rows = map(tabs, |child, index| {
        Child::seq([
            child,
            Child::from(Element::new("divider").prop("after", index as u64)),
        ])
    })?
    .unwrap_or_default();

    for row in &rows {
        if let Some(element) = row.as_element() {
            let key = element.key.as_deref().unwrap_or("-");
            println!("{key:<16} {}", element.tag);
        }
    }

    let single = only(Child::from(Element::portal("overlay")))?;
    println!("single: {} ({:?})", single.tag, single.kind);

    Ok(())
}
