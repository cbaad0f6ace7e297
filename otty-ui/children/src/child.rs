use std::fmt;

use otty_ui_element::{Element, Keyed};
use serde_json::Value;

/// A children value as handed to widget builders.
///
/// Leaves are [`Child::Null`], [`Child::Text`], [`Child::Number`] and
/// [`Child::Element`]; [`Child::Sequence`] and [`Child::Iterable`] are
/// containers whose items are visited recursively. [`Child::Object`] is never
/// valid and fails any traversal that reaches it.
#[derive(Debug)]
pub enum Child<E = Element> {
    /// Empty slot. Booleans and missing values collapse into this variant.
    Null,
    Text(String),
    Number(f64),
    Element(E),
    Sequence(Vec<Child<E>>),
    Iterable(ChildIter<E>),
    Object(PlainObject),
}

/// Where the items of a [`ChildIter`] come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterSource {
    /// Arbitrary iterator of children.
    Items,
    /// Entries of a key/value map, each yielded as a `[key, value]` pair.
    MapEntries,
}

/// Lazily produced children.
pub struct ChildIter<E> {
    items: Box<dyn Iterator<Item = Child<E>>>,
    source: IterSource,
}

/// Non-child object found in a children tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlainObject {
    /// Generic object, described by its keys.
    Keys(Vec<String>),
    /// Object with its own string form.
    Described(String),
}

impl<E> Child<E> {
    pub fn is_null(&self) -> bool {
        matches!(self, Child::Null)
    }

    pub fn as_element(&self) -> Option<&E> {
        match self {
            Child::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn into_element(self) -> Option<E> {
        match self {
            Child::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Child::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Wrap a leaf element.
    pub fn element(element: E) -> Self {
        Child::Element(element)
    }

    /// Build a sequence from anything convertible into children.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Child<E>>,
    {
        Child::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// An object that is not a valid child, described by its keys.
    pub fn object<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Child::Object(PlainObject::Keys(
            keys.into_iter().map(Into::into).collect(),
        ))
    }
}

impl<E: 'static> Child<E> {
    /// Wrap an iterator so its items are visited lazily.
    pub fn iter<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: 'static,
        I::Item: Into<Child<E>> + 'static,
    {
        Child::Iterable(ChildIter {
            items: Box::new(items.into_iter().map(Into::into)),
            source: IterSource::Items,
        })
    }

    /// Wrap map entries; each entry becomes a `[key, value]` sequence.
    pub fn from_map_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: 'static,
        K: Into<Child<E>> + 'static,
        V: Into<Child<E>> + 'static,
    {
        let items = entries.into_iter().map(|(key, value)| {
            Child::Sequence(vec![key.into(), value.into()])
        });
        Child::Iterable(ChildIter {
            items: Box::new(items),
            source: IterSource::MapEntries,
        })
    }
}

impl<E: Keyed> Child<E> {
    /// User key of an element child.
    pub fn key(&self) -> Option<&str> {
        self.as_element().and_then(Keyed::key)
    }
}

impl<E> ChildIter<E> {
    pub fn source(&self) -> IterSource {
        self.source
    }
}

impl<E> Iterator for ChildIter<E> {
    type Item = Child<E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

impl<E> fmt::Debug for ChildIter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildIter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PlainObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlainObject::Keys(keys) => {
                write!(f, "object with keys {{{}}}", keys.join(", "))
            },
            PlainObject::Described(repr) => f.write_str(repr),
        }
    }
}

impl From<Element> for Child<Element> {
    fn from(element: Element) -> Self {
        Child::Element(element)
    }
}

impl<E> From<Vec<Child<E>>> for Child<E> {
    fn from(items: Vec<Child<E>>) -> Self {
        Child::Sequence(items)
    }
}

impl<E> From<&str> for Child<E> {
    fn from(text: &str) -> Self {
        Child::Text(text.to_owned())
    }
}

impl<E> From<String> for Child<E> {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl<E> From<f64> for Child<E> {
    fn from(number: f64) -> Self {
        Child::Number(number)
    }
}

impl<E> From<i32> for Child<E> {
    fn from(number: i32) -> Self {
        Child::Number(number.into())
    }
}

impl<E> From<bool> for Child<E> {
    fn from(_: bool) -> Self {
        Child::Null
    }
}

impl<E, T> From<Option<T>> for Child<E>
where
    T: Into<Child<E>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Child::Null, Into::into)
    }
}

impl<E> From<PlainObject> for Child<E> {
    fn from(object: PlainObject) -> Self {
        Child::Object(object)
    }
}

impl<E> From<Value> for Child<E> {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Bool(_) => Child::Null,
            Value::Number(number) => {
                number.as_f64().map_or(Child::Null, Child::Number)
            },
            Value::String(text) => Child::Text(text),
            Value::Array(items) => {
                Child::Sequence(items.into_iter().map(Child::from).collect())
            },
            Value::Object(map) => {
                Child::Object(PlainObject::Keys(map.keys().cloned().collect()))
            },
        }
    }
}
