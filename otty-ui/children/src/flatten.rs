use log::{debug, trace};
use otty_ui_element::Keyed;

use crate::child::{Child, ChildIter, IterSource};
use crate::error::{ChildrenError, Result};
use crate::key::{
    SEPARATOR, SUBSEPARATOR, escape_user_provided_key, resolve_key,
};
use crate::options::TraverseOptions;

const MAP_ENTRIES_MESSAGE: &str = "using maps as children is not \
                                   supported; use a sequence of keyed \
                                   elements instead";

/// Callback applied to every leaf; its result is spliced into the output.
pub(crate) type LeafCallback<'a, E> = dyn FnMut(Child<E>) -> Child<E> + 'a;

/// Depth-first walker that flattens children and assigns key paths.
///
/// Every run owns its output; nothing is shared between traversals except
/// the warning guard carried by the options.
pub(crate) struct Flattener<'w, E> {
    output: Vec<Child<E>>,
    options: TraverseOptions<'w>,
}

impl<'w, E: Keyed> Flattener<'w, E> {
    pub(crate) fn new(options: TraverseOptions<'w>) -> Self {
        Self {
            output: Vec::new(),
            options,
        }
    }

    pub(crate) fn into_output(self) -> Vec<Child<E>> {
        self.output
    }

    /// Visit `children`, appending callback results to the output.
    ///
    /// Returns the number of leaves visited in this subtree. That number
    /// drives nothing but sibling bookkeeping; it is unrelated to how many
    /// values the callback contributed to the output.
    pub(crate) fn flatten(
        &mut self,
        children: Child<E>,
        escaped_prefix: &str,
        name_so_far: &str,
        callback: &mut LeafCallback<'_, E>,
    ) -> Result<usize> {
        match children {
            Child::Sequence(items) => {
                let name_prefix = next_name_prefix(name_so_far);
                let mut subtree_count = 0;
                for (index, child) in items.into_iter().enumerate() {
                    let next_name =
                        format!("{name_prefix}{}", resolve_key(&child, index));
                    subtree_count += self.flatten(
                        child,
                        escaped_prefix,
                        &next_name,
                        callback,
                    )?;
                }
                Ok(subtree_count)
            },
            Child::Iterable(items) => self.flatten_iter(
                items,
                escaped_prefix,
                name_so_far,
                callback,
            ),
            Child::Object(object) => {
                let found = object.to_string();
                debug!("children traversal hit an invalid child: {found}");
                Err(ChildrenError::InvalidChildType { found })
            },
            leaf => {
                self.visit_leaf(leaf, escaped_prefix, name_so_far, callback)
            },
        }
    }

    fn flatten_iter(
        &mut self,
        items: ChildIter<E>,
        escaped_prefix: &str,
        name_so_far: &str,
        callback: &mut LeafCallback<'_, E>,
    ) -> Result<usize> {
        if items.source() == IterSource::MapEntries
            && self.options.warn_on_map_entries
        {
            self.options.map_warning.warn(MAP_ENTRIES_MESSAGE);
        }

        let name_prefix = next_name_prefix(name_so_far);
        let mut subtree_count = 0;
        let mut position = 0;
        for child in items {
            let next_name =
                format!("{name_prefix}{}", resolve_key(&child, position));
            position += 1;
            subtree_count +=
                self.flatten(child, escaped_prefix, &next_name, callback)?;
        }
        Ok(subtree_count)
    }

    fn visit_leaf(
        &mut self,
        child: Child<E>,
        escaped_prefix: &str,
        name_so_far: &str,
        callback: &mut LeafCallback<'_, E>,
    ) -> Result<usize> {
        // A lone leaf is keyed as the only item of a one-item sequence.
        let child_key = if name_so_far.is_empty() {
            format!("{SEPARATOR}{}", resolve_key(&child, 0))
        } else {
            name_so_far.to_owned()
        };
        let original_key = child.key().map(str::to_owned);

        match callback(child) {
            Child::Null => {},
            Child::Sequence(items) => {
                let nested_prefix = format!(
                    "{escaped_prefix}{}/",
                    escape_user_provided_key(&child_key)
                );
                trace!("re-flattening callback result under {nested_prefix}");
                let mut identity = |child: Child<E>| child;
                self.flatten(
                    Child::Sequence(items),
                    &nested_prefix,
                    "",
                    &mut identity,
                )?;
            },
            Child::Element(element) => {
                let renamed = element
                    .key()
                    .filter(|own| !own.is_empty())
                    .filter(|own| original_key.as_deref() != Some(*own))
                    .map(escape_user_provided_key);

                let mut key = String::from(escaped_prefix);
                if let Some(renamed) = renamed {
                    key.push_str(&renamed);
                    key.push('/');
                }
                key.push_str(&child_key);
                self.output.push(Child::Element(element.with_key(key)));
            },
            other => self.output.push(other),
        }

        Ok(1)
    }
}

fn next_name_prefix(name_so_far: &str) -> String {
    if name_so_far.is_empty() {
        SEPARATOR.to_string()
    } else {
        format!("{name_so_far}{SUBSEPARATOR}")
    }
}

#[cfg(test)]
mod tests {
    use otty_ui_element::Element;

    use super::*;
    use crate::warning::OnceWarning;

    fn run(
        children: Child,
        callback: &mut LeafCallback<'_, Element>,
    ) -> (Result<usize>, Vec<Child>) {
        let mut flattener = Flattener::new(TraverseOptions::default());
        let visited = flattener.flatten(children, "", "", callback);
        (visited, flattener.into_output())
    }

    fn keys(output: &[Child]) -> Vec<&str> {
        output.iter().filter_map(Child::key).collect()
    }

    #[test]
    fn lone_leaf_is_keyed_like_a_single_item_sequence() {
        let (_, lone) = run(Element::new("a").into(), &mut |child| child);
        let (_, wrapped) =
            run(Child::seq([Element::new("a")]), &mut |child| child);

        assert_eq!(keys(&lone), vec![".0"]);
        assert_eq!(keys(&lone), keys(&wrapped));
    }

    #[test]
    fn nested_sequences_use_subseparator() {
        let children = Child::seq([
            Child::from(Element::new("a").keyed("x")),
            Child::seq([Element::new("b"), Element::new("c")]),
        ]);
        let (visited, output) = run(children, &mut |child| child);

        assert_eq!(visited.unwrap(), 3);
        assert_eq!(keys(&output), vec![".$x", ".1:0", ".1:1"]);
    }

    #[test]
    fn subtree_count_ignores_what_the_callback_returns() {
        let children = Child::seq(["a", "b"]);
        let (visited, output) = run(children, &mut |_| {
            Child::seq([Element::new("x"), Element::new("y")])
        });

        assert_eq!(visited.unwrap(), 2);
        assert_eq!(output.len(), 4);

        let (visited, output) =
            run(Child::seq(["a", "b"]), &mut |_| Child::Null);
        assert_eq!(visited.unwrap(), 2);
        assert!(output.is_empty());
    }

    #[test]
    fn callback_sequences_are_prefixed_with_origin_key() {
        let children = Child::seq([Element::new("a"), Element::new("b")]);
        let (_, output) = run(children, &mut |child| {
            let tag = child.as_element().map(|e| e.tag.clone());
            match tag.as_deref() {
                Some("a") => Child::seq([
                    Child::from(Element::new("x")),
                    Child::from(Element::new("y").keyed("k")),
                ]),
                _ => child,
            }
        });

        assert_eq!(keys(&output), vec![".0/.0", ".0/.$k", ".1"]);
    }

    #[test]
    fn callback_rekeyed_element_keeps_its_own_key_as_prefix() {
        let children = Child::seq([Element::new("a").keyed("orig")]);
        let (_, output) = run(children, &mut |_| {
            Element::new("b").keyed("new/key").into()
        });

        assert_eq!(keys(&output), vec!["new//key/.$orig"]);
    }

    #[test]
    fn callback_element_with_same_key_is_not_double_prefixed() {
        let children = Child::seq([Element::new("a").keyed("same")]);
        let (_, output) =
            run(children, &mut |_| Element::new("b").keyed("same").into());

        assert_eq!(keys(&output), vec![".$same"]);
    }

    #[test]
    fn empty_callback_key_is_ignored() {
        let children = Child::seq(["text"]);
        let (_, output) =
            run(children, &mut |_| Element::new("b").keyed("").into());

        assert_eq!(keys(&output), vec![".0"]);
    }

    #[test]
    fn iterables_use_their_own_positions() {
        let children = Child::seq([
            Child::from("first"),
            Child::iter(vec![
                Child::seq([Element::new("a"), Element::new("b")]),
                Child::from(Element::new("c")),
            ]),
        ]);
        let (visited, output) = run(children, &mut |child| child);

        assert_eq!(visited.unwrap(), 4);
        assert_eq!(keys(&output), vec![".1:0:0", ".1:0:1", ".1:1"]);
    }

    #[test]
    fn invalid_object_aborts_traversal() {
        let children = Child::seq([
            Child::from(Element::new("a")),
            Child::object(["a"]),
        ]);
        let (visited, _) = run(children, &mut |child| child);

        assert_eq!(
            visited,
            Err(ChildrenError::InvalidChildType {
                found: "object with keys {a}".into()
            })
        );
    }

    #[test]
    fn invalid_object_inside_callback_result_aborts_traversal() {
        let (visited, _) = run(Child::seq(["a"]), &mut |_| {
            Child::seq([Child::<Element>::object(["z"])])
        });
        assert!(matches!(
            visited,
            Err(ChildrenError::InvalidChildType { .. })
        ));
    }

    #[test]
    fn map_entries_warn_once_per_guard() {
        let guard = OnceWarning::new();
        let options = TraverseOptions {
            map_warning: &guard,
            warn_on_map_entries: true,
        };

        for _ in 0..2 {
            let mut flattener = Flattener::new(options);
            let children: Child =
                Child::from_map_entries(vec![("k", Element::new("v"))]);
            let visited = flattener.flatten(children, "", "", &mut |c| c);
            assert_eq!(visited.unwrap(), 2);
            assert!(guard.has_fired());
        }
    }

    #[test]
    fn map_entries_warning_can_be_disabled() {
        let guard = OnceWarning::new();
        let options = TraverseOptions {
            map_warning: &guard,
            warn_on_map_entries: false,
        };

        let mut flattener = Flattener::new(options);
        let children: Child = Child::from_map_entries(vec![("k", "v")]);
        flattener.flatten(children, "", "", &mut |c| c).unwrap();
        assert!(!guard.has_fired());
    }
}
