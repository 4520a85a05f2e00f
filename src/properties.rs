//! Custom property resolution
//!
//! The painter reads four CSS custom properties from its host. Each value is
//! the first token of the property's list, falling back to a default when the
//! property is missing or empty.

use std::collections::HashMap;

use serde::Deserialize;

/// The custom properties the painter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputProperty {
    /// `--smooth-corners`: superellipse exponent
    SmoothCorners,
    /// `--bg-color`: fill colour
    BgColor,
    /// `--border-color`: stroke colour
    BorderColor,
    /// `--border-width`: stroke width in surface units
    BorderWidth,
}

impl InputProperty {
    pub const ALL: [InputProperty; 4] = [
        InputProperty::SmoothCorners,
        InputProperty::BgColor,
        InputProperty::BorderColor,
        InputProperty::BorderWidth,
    ];

    /// The property name as written in CSS
    pub fn name(&self) -> &'static str {
        match self {
            InputProperty::SmoothCorners => "--smooth-corners",
            InputProperty::BgColor => "--bg-color",
            InputProperty::BorderColor => "--border-color",
            InputProperty::BorderWidth => "--border-width",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Whether the value is coerced to a number
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            InputProperty::SmoothCorners | InputProperty::BorderWidth
        )
    }
}

impl std::fmt::Display for InputProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A lookup from property name to its ordered list of tokens
pub trait PropertySource {
    fn get(&self, name: &str) -> Option<&[String]>;
}

impl PropertySource for HashMap<String, Vec<String>> {
    fn get(&self, name: &str) -> Option<&[String]> {
        HashMap::get(self, name).map(|v| v.as_slice())
    }
}

/// Owned property map, the usual way to hand values to a painter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePropertyMap {
    values: HashMap<String, Vec<String>>,
}

impl StylePropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tokens of a property with a single value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), vec![value.into()]);
    }

    /// Append a token to a property's list
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Copy every property of `other` over this map
    pub fn merge(&mut self, other: &StylePropertyMap) {
        for (name, tokens) in &other.values {
            self.values.insert(name.clone(), tokens.clone());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse inline declarations such as `--smooth-corners: 5; --bg-color: red`
    ///
    /// Declarations without a colon are skipped. A later declaration of the
    /// same property replaces the earlier one.
    pub fn parse_declarations(input: &str) -> Self {
        let mut map = Self::new();
        for decl in input.split(';') {
            let Some((name, value)) = decl.split_once(':') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            map.set(name, value.trim());
        }
        map
    }
}

impl PropertySource for StylePropertyMap {
    fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(|v| v.as_slice())
    }
}

impl<K, V> FromIterator<(K, V)> for StylePropertyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.set(name, value);
        }
        map
    }
}

/// Fallback values used when a property is missing or empty
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PropertyDefaults {
    pub smooth_corners: f64,
    pub bg_color: String,
    pub border_color: String,
    pub border_width: f64,
}

impl Default for PropertyDefaults {
    fn default() -> Self {
        Self {
            smooth_corners: 4.0,
            bg_color: "transparent".to_string(),
            border_color: "black".to_string(),
            border_width: 1.0,
        }
    }
}

/// A resolved property value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Color(String),
}

/// Parameters for one paint call
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeParameters {
    /// Superellipse exponent as resolved; may be NaN
    pub smoothness: f64,
    pub stroke_width: f64,
    pub fill_color: String,
    pub stroke_color: String,
}

/// Coerce a token to a number, NaN when it is not one
///
/// Accepts an optional `px` suffix, the surface's length unit.
pub fn parse_number(token: &str) -> f64 {
    let token = token.trim();
    let token = token.strip_suffix("px").unwrap_or(token).trim_end();
    if token.is_empty() || !token.bytes().all(|c| c.is_ascii_digit() || b"+-.eE".contains(&c)) {
        return f64::NAN;
    }
    token.parse().unwrap_or(f64::NAN)
}

/// Trimmed first token of `key`, or `None` when the property is missing,
/// its list is empty or the token is blank
pub fn first_value(source: &dyn PropertySource, key: InputProperty) -> Option<&str> {
    source
        .get(key.name())
        .and_then(|tokens| tokens.first())
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
}

/// Maps a property source to shape parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigResolver {
    defaults: PropertyDefaults,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: PropertyDefaults) -> Self {
        Self { defaults }
    }

    /// First token of the property, or `None` when absent or empty
    fn first_token<'a>(
        &self,
        source: &'a dyn PropertySource,
        key: InputProperty,
    ) -> Option<&'a str> {
        first_value(source, key)
    }

    pub fn default_value(&self, key: InputProperty) -> PropertyValue {
        match key {
            InputProperty::SmoothCorners => PropertyValue::Number(self.defaults.smooth_corners),
            InputProperty::BorderWidth => PropertyValue::Number(self.defaults.border_width),
            InputProperty::BgColor => PropertyValue::Color(self.defaults.bg_color.clone()),
            InputProperty::BorderColor => PropertyValue::Color(self.defaults.border_color.clone()),
        }
    }

    /// Resolve a single property
    pub fn value(&self, source: &dyn PropertySource, key: InputProperty) -> PropertyValue {
        match self.first_token(source, key) {
            None => self.default_value(key),
            Some(token) if key.is_numeric() => PropertyValue::Number(parse_number(token)),
            Some(token) => PropertyValue::Color(token.to_string()),
        }
    }

    fn number(&self, source: &dyn PropertySource, key: InputProperty) -> f64 {
        match self.value(source, key) {
            PropertyValue::Number(n) => n,
            PropertyValue::Color(_) => f64::NAN,
        }
    }

    fn color(&self, source: &dyn PropertySource, key: InputProperty) -> String {
        match self.value(source, key) {
            PropertyValue::Color(c) => c,
            PropertyValue::Number(n) => n.to_string(),
        }
    }

    /// Resolve all four properties
    pub fn resolve(&self, source: &dyn PropertySource) -> ShapeParameters {
        ShapeParameters {
            smoothness: self.number(source, InputProperty::SmoothCorners),
            stroke_width: self.number(source, InputProperty::BorderWidth),
            fill_color: self.color(source, InputProperty::BgColor),
            stroke_color: self.color(source, InputProperty::BorderColor),
        }
    }
}
