//! Keyed element values for OTTY widget trees.
//!
//! Children helpers (see `otty-ui-children`) only need two things from a
//! leaf element: its optional user key and a way to produce a copy carrying a
//! different key. Both are described by the [`Keyed`] trait, and [`Element`]
//! is the stock implementation used by the widgets.

mod element;

pub use element::{Element, ElementKind, Keyed};
