use otty_ui_element::Keyed;

use crate::child::Child;
use crate::error::{ChildrenError, Result};
use crate::flatten::Flattener;
use crate::options::TraverseOptions;

/// Flatten `children` and collect `f(child, index)` for every leaf.
///
/// `index` counts callback invocations, starting at zero. Element results are
/// re-keyed with their key path, sequences returned by `f` are flattened in
/// place and `Null` results are dropped.
///
/// Returns `Ok(None)` when `children` itself is [`Child::Null`].
pub fn map<E, F>(children: Child<E>, f: F) -> Result<Option<Vec<Child<E>>>>
where
    E: Keyed,
    F: FnMut(Child<E>, usize) -> Child<E>,
{
    map_with(children, &TraverseOptions::default(), f)
}

/// [`map`] with explicit traversal options.
pub fn map_with<E, F>(
    children: Child<E>,
    options: &TraverseOptions<'_>,
    mut f: F,
) -> Result<Option<Vec<Child<E>>>>
where
    E: Keyed,
    F: FnMut(Child<E>, usize) -> Child<E>,
{
    if children.is_null() {
        return Ok(None);
    }

    let mut flattener = Flattener::new(*options);
    let mut index = 0;
    let mut callback = |child: Child<E>| {
        let mapped = f(child, index);
        index += 1;
        mapped
    };
    flattener.flatten(children, "", "", &mut callback)?;
    Ok(Some(flattener.into_output()))
}

/// Call `f(child, index)` for every leaf, in [`to_array`] order.
pub fn for_each<E, F>(children: Child<E>, f: F) -> Result<()>
where
    E: Keyed,
    F: FnMut(Child<E>, usize),
{
    for_each_with(children, &TraverseOptions::default(), f)
}

/// [`for_each`] with explicit traversal options.
pub fn for_each_with<E, F>(
    children: Child<E>,
    options: &TraverseOptions<'_>,
    mut f: F,
) -> Result<()>
where
    E: Keyed,
    F: FnMut(Child<E>, usize),
{
    map_with(children, options, |child, index| {
        f(child, index);
        Child::Null
    })?;
    Ok(())
}

/// Number of leaves the [`map`] callback would be invoked for.
///
/// Null slots inside containers are counted even though [`to_array`] drops
/// them.
pub fn count<E: Keyed>(children: Child<E>) -> Result<usize> {
    let mut visited = 0;
    map(children, |_, _| {
        visited += 1;
        Child::Null
    })?;
    Ok(visited)
}

/// Flatten `children` into keyed leaves.
pub fn to_array<E: Keyed>(children: Child<E>) -> Result<Vec<Child<E>>> {
    Ok(map(children, |child, _| child)?.unwrap_or_default())
}

/// Return the single element in `children`.
///
/// Accepts a bare element or a sequence holding exactly one element. Nothing
/// is flattened: a single element wrapped in nested sequences is rejected.
pub fn only<E>(children: Child<E>) -> Result<E> {
    match children {
        Child::Element(element) => Ok(element),
        Child::Sequence(mut items) if items.len() == 1 => items
            .pop()
            .and_then(Child::into_element)
            .ok_or(ChildrenError::NotSingleElement),
        _ => Err(ChildrenError::NotSingleElement),
    }
}
