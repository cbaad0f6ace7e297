//! Flattening and stable keying of nested widget children.
//!
//! Widget builders accept children in whatever shape is convenient: a single
//! element, a sequence, nested sequences, a lazy iterator or an empty slot.
//! This crate turns such a [`Child`] tree into a flat list where every element
//! carries a key path derived from its position and its user key, so
//! renderers can reconcile rows across updates.
//!
//! Key paths are composed as follows:
//! - `.` starts a path and `:` separates nesting levels;
//! - explicit keys are escaped with [`escape`] (`$` prefix, `=` and `:`
//!   replaced) while unkeyed children use their base-36 index;
//! - sequences returned from a [`map`] callback are nested under the key of
//!   the leaf that produced them, followed by `/`.
//!
//! # Quick Example
//!
//! ```
//! use otty_ui_children::{Child, to_array};
//! use otty_ui_element::Element;
//!
//! let children: Child = Child::seq([
//!     Child::from(Element::new("tab").keyed("x")),
//!     Child::seq([Element::new("tab"), Element::new("tab")]),
//! ]);
//!
//! let keys: Vec<String> = to_array(children)?
//!     .iter()
//!     .filter_map(|child| child.key().map(str::to_owned))
//!     .collect();
//! assert_eq!(keys, [".$x", ".1:0", ".1:1"]);
//! # Ok::<(), otty_ui_children::ChildrenError>(())
//! ```

mod child;
mod error;
mod flatten;
mod key;
mod ops;
mod options;
mod warning;

pub use child::{Child, ChildIter, IterSource, PlainObject};
pub use error::{ChildrenError, Result};
pub use key::{
    SEPARATOR, SUBSEPARATOR, escape, escape_user_provided_key, resolve_key,
};
pub use ops::{count, for_each, for_each_with, map, map_with, only, to_array};
pub use options::TraverseOptions;
pub use warning::{MAP_ENTRIES_WARNING, OnceWarning};

pub use otty_ui_element as element;
