use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flavor of a leaf element.
///
/// Both kinds are treated the same by children traversal; the distinction is
/// preserved through re-keying so renderers can mount portals elsewhere.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Regular element rendered in place.
    #[default]
    Element,
    /// Element rendered into a different mount point.
    Portal,
}

/// Leaf values that carry an optional user key.
pub trait Keyed: Sized {
    /// User supplied key, if any.
    fn key(&self) -> Option<&str>;

    /// Kind of the leaf.
    fn kind(&self) -> ElementKind;

    /// Return the same leaf with its key replaced by `key`.
    ///
    /// Every other attribute, including [`Keyed::kind`], must be kept.
    fn with_key(self, key: String) -> Self;
}

/// Element description produced by widget builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    /// Widget type name, e.g. `"row"` or `"tab"`.
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
}

impl Element {
    /// Create an unkeyed regular element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Element,
            tag: tag.into(),
            key: None,
            props: Map::new(),
        }
    }

    /// Create an unkeyed portal element.
    pub fn portal(tag: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Portal,
            ..Self::new(tag)
        }
    }

    /// Set the user key.
    pub fn keyed(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set a single prop, replacing any previous value.
    pub fn prop(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }
}

impl Keyed for Element {
    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn with_key(self, key: String) -> Self {
        Self {
            key: Some(key),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_key_keeps_kind_tag_and_props() {
        let portal = Element::portal("overlay").keyed("a").prop("z", 3);
        let rekeyed = portal.clone().with_key(".$a".to_owned());

        assert_eq!(rekeyed.key(), Some(".$a"));
        assert_eq!(rekeyed.kind(), ElementKind::Portal);
        assert_eq!(rekeyed.tag, portal.tag);
        assert_eq!(rekeyed.props, portal.props);
    }

    #[test]
    fn unkeyed_element_reports_no_key() {
        let element = Element::new("row");
        assert_eq!(element.key(), None);
        assert_eq!(element.kind(), ElementKind::Element);
    }

    #[test]
    fn element_json_omits_empty_fields() {
        let json = serde_json::to_value(Element::new("row")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "element", "tag": "row"}));

        let parsed: Element = serde_json::from_value(serde_json::json!({
            "kind": "portal",
            "tag": "menu",
            "key": "m",
            "props": {"open": true}
        }))
        .unwrap();
        assert_eq!(
            parsed,
            Element::portal("menu").keyed("m").prop("open", true)
        );
    }
}
