//! Colour data as delivered by the colour endpoint.
//!
//! The endpoint answers with `{ "colours": [ { "css": ... }, ... ] }`. Only the
//! `css` string is used for display; the generator's `type` tag and raw `data`
//! channels ride along untouched when present.

use serde::{Deserialize, Deserializer, Serialize};

/// Which generator produced a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourKind {
    /// `rgb(r, g, b)` colours
    Rgb,
    /// `hsl(h, s%, l%)` colours
    Hsl,
    /// Any tag this client does not know about
    #[serde(other)]
    Other,
}

/// One colour record. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColourDescriptor {
    /// Display-ready fill value, treated as an opaque string.
    pub css: String,

    /// Generator tag, if the source sent one.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_kind",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<ColourKind>,

    /// Raw generator channels (e.g. `{"red": 2, "green": 2, "blue": 2}`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Accept any `type` value. Unknown strings and non-strings become `Other`.
fn lenient_kind<'de, D>(deserializer: D) -> Result<Option<ColourKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(tag)) => Some(match tag.as_str() {
            "rgb" => ColourKind::Rgb,
            "hsl" => ColourKind::Hsl,
            _ => ColourKind::Other,
        }),
        Some(_) => Some(ColourKind::Other),
    })
}

impl ColourDescriptor {
    /// Create a descriptor carrying only a css value.
    pub fn new(css: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            kind: None,
            data: None,
        }
    }
}

/// The full ordered set of colours currently known to the view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColourCollection(Vec<ColourDescriptor>);

impl ColourCollection {
    /// An empty collection (the unloaded state).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColourDescriptor> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ColourDescriptor] {
        &self.0
    }
}

impl From<Vec<ColourDescriptor>> for ColourCollection {
    fn from(colours: Vec<ColourDescriptor>) -> Self {
        Self(colours)
    }
}

impl FromIterator<ColourDescriptor> for ColourCollection {
    fn from_iter<I: IntoIterator<Item = ColourDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ColourCollection {
    type Item = &'a ColourDescriptor;
    type IntoIter = std::slice::Iter<'a, ColourDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Top-level body returned by the colour endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColoursResponse {
    pub colours: ColourCollection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_entry() {
        let json = r#"{
            "colours": [
                {"type": "rgb", "data": {"red": 2, "green": 2, "blue": 2}, "css": "rgb(2, 2, 2)"},
                {"type": "hsl", "data": {"hue": 10, "saturation": 50, "lightness": 40}, "css": "hsl(10, 50%, 40%)"}
            ]
        }"#;

        let response: ColoursResponse = serde_json::from_str(json).unwrap();
        let colours = response.colours;

        assert_eq!(colours.len(), 2);
        assert_eq!(colours.as_slice()[0].css, "rgb(2, 2, 2)");
        assert_eq!(colours.as_slice()[0].kind, Some(ColourKind::Rgb));
        assert_eq!(colours.as_slice()[1].kind, Some(ColourKind::Hsl));

        let data = colours.as_slice()[0].data.as_ref().unwrap();
        assert_eq!(data.get("red").and_then(|v| v.as_u64()), Some(2));
    }

    #[test]
    fn test_css_only_entry() {
        let descriptor: ColourDescriptor = serde_json::from_str(r##"{"css": "#ff0000"}"##).unwrap();
        assert_eq!(descriptor, ColourDescriptor::new("#ff0000"));
    }

    #[test]
    fn test_unknown_kind_is_kept() {
        let descriptor: ColourDescriptor =
            serde_json::from_str(r#"{"type": "lab", "css": "lab(50% 40 59.5)"}"#).unwrap();
        assert_eq!(descriptor.kind, Some(ColourKind::Other));
        assert_eq!(descriptor.css, "lab(50% 40 59.5)");
    }

    #[test]
    fn test_odd_type_and_data_are_tolerated() {
        let descriptor: ColourDescriptor =
            serde_json::from_str(r##"{"type": 7, "data": [1, 2, 3], "css": "#fff"}"##).unwrap();
        assert_eq!(descriptor.css, "#fff");
        assert_eq!(descriptor.kind, Some(ColourKind::Other));
        assert_eq!(descriptor.data, Some(serde_json::json!([1, 2, 3])));

        let descriptor: ColourDescriptor =
            serde_json::from_str(r##"{"type": null, "data": "raw", "css": "#000"}"##).unwrap();
        assert_eq!(descriptor.kind, None);
        assert_eq!(descriptor.data, Some(serde_json::json!("raw")));
    }

    #[test]
    fn test_collection_serializes_as_array() {
        let colours: ColourCollection = vec![ColourDescriptor::new("red")].into();
        let json = serde_json::to_string(&colours).unwrap();
        assert_eq!(json, r#"[{"css":"red"}]"#);
    }

    #[test]
    fn test_missing_colours_field_is_rejected() {
        let result: Result<ColoursResponse, _> = serde_json::from_str(r#"{"colors": []}"#);
        assert!(result.is_err());
    }
}
