//! Ordered attribute mapping for element nodes

use indexmap::IndexMap;

/// Attribute names mapped to values, kept in insertion order.
///
/// Two mappings are equal only when they hold the same pairs in the same
/// order, which `IndexMap`'s own equality does not check.
#[derive(Debug, Clone, Default)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert or replace an attribute.
    ///
    /// A replaced attribute keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as ` name="value"` pairs, one leading space per pair.
    ///
    /// Values are not escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

/// Render optional attributes, yielding an empty string for `None`
pub(crate) fn optional_to_html(attributes: Option<&Attributes>) -> String {
    attributes.map(Attributes::to_html).unwrap_or_default()
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Attributes {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(Attributes::new().to_html(), "");
    }

    #[test]
    fn test_pairs_keep_insertion_order() {
        let attrs = Attributes::from([("class", "container"), ("id", "main")]);
        assert_eq!(attrs.to_html(), r#" class="container" id="main""#);
    }

    #[test]
    fn test_values_are_not_escaped() {
        let attrs = Attributes::from([("data-test", "hello & goodbye"), ("class", "a < b > c")]);
        assert_eq!(
            attrs.to_html(),
            r#" data-test="hello & goodbye" class="a < b > c""#
        );
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut attrs = Attributes::from([("a", "1"), ("b", "2")]);
        assert_eq!(attrs.insert("a", "3"), Some("1".to_string()));
        assert_eq!(attrs.get("a"), Some("3"));
        assert_eq!(attrs.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let ab = Attributes::from([("a", "1"), ("b", "2")]);
        let ba = Attributes::from([("b", "2"), ("a", "1")]);
        assert_eq!(ab, Attributes::from([("a", "1"), ("b", "2")]));
        assert_ne!(ab, ba);
    }
}
