//! Product records as supplied by the catalog source.
//!
//! Field names follow the camelCase wire format of the catalog document.
//! Missing optional fields fall back to placeholders so that a single
//! incomplete record still renders.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::traits::ProductId;

/// Brand shown when the source omits one
pub const UNKNOWN_BRAND: &str = "Unknown";

/// Highest rating value a product can carry
pub const MAX_RATING: f64 = 5.0;

/// Closed set of product categories.
///
/// `Unknown` is the placeholder for missing or unrecognised values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductCategory {
    Electronics,
    Wearables,
    Computers,
    Gaming,
    Computing,
    Accessories,
    Audio,
    #[serde(rename = "Smart Home")]
    SmartHome,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ProductCategory {
    /// All real categories (excludes the `Unknown` placeholder)
    pub const ALL: [ProductCategory; 8] = [
        ProductCategory::Electronics,
        ProductCategory::Wearables,
        ProductCategory::Computers,
        ProductCategory::Gaming,
        ProductCategory::Computing,
        ProductCategory::Accessories,
        ProductCategory::Audio,
        ProductCategory::SmartHome,
    ];

    /// Display name as it appears in the catalog document
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Wearables => "Wearables",
            ProductCategory::Computers => "Computers",
            ProductCategory::Gaming => "Gaming",
            ProductCategory::Computing => "Computing",
            ProductCategory::Accessories => "Accessories",
            ProductCategory::Audio => "Audio",
            ProductCategory::SmartHome => "Smart Home",
            ProductCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of specification attribute names.
///
/// Declaration order is used for keys whose source position is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecKey {
    Brand,
    Connectivity,
    BatteryLife,
    Weight,
    Display,
    WaterResistance,
    Processor,
    Ram,
    Storage,
    Dpi,
    Buttons,
    Resolution,
    Fps,
    FieldOfView,
    Switches,
    Layout,
    Backlight,
    Capacity,
    Ports,
    FastCharging,
    Assistant,
    Speakers,
    Hdr,
}

impl SpecKey {
    /// Key name used in the catalog document
    pub fn wire_name(&self) -> &'static str {
        match self {
            SpecKey::Brand => "brand",
            SpecKey::Connectivity => "connectivity",
            SpecKey::BatteryLife => "batteryLife",
            SpecKey::Weight => "weight",
            SpecKey::Display => "display",
            SpecKey::WaterResistance => "waterResistance",
            SpecKey::Processor => "processor",
            SpecKey::Ram => "ram",
            SpecKey::Storage => "storage",
            SpecKey::Dpi => "dpi",
            SpecKey::Buttons => "buttons",
            SpecKey::Resolution => "resolution",
            SpecKey::Fps => "fps",
            SpecKey::FieldOfView => "fieldOfView",
            SpecKey::Switches => "switches",
            SpecKey::Layout => "layout",
            SpecKey::Backlight => "backlight",
            SpecKey::Capacity => "capacity",
            SpecKey::Ports => "ports",
            SpecKey::FastCharging => "fastCharging",
            SpecKey::Assistant => "assistant",
            SpecKey::Speakers => "speakers",
            SpecKey::Hdr => "hdr",
        }
    }

    /// Parses a document key; unknown names give `None`.
    pub fn from_wire_name(name: &str) -> Option<SpecKey> {
        ALL_SPEC_KEYS.iter().copied().find(|key| key.wire_name() == name)
    }
}

fn unknown_brand() -> String {
    UNKNOWN_BRAND.to_string()
}

/// Field reader that turns `null` or a value of the wrong type into the
/// field's default instead of rejecting the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Specification values are text; numbers and booleans keep their JSON
/// spelling, anything else counts as absent.
fn spec_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Specification attributes of a product. Only `brand` is always present.
///
/// Remembers the order in which keys were supplied so the specification
/// table lists them as the catalog document does.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSpecifications {
    pub brand: String,
    pub connectivity: Option<String>,
    pub battery_life: Option<String>,
    pub weight: Option<String>,
    pub display: Option<String>,
    pub water_resistance: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub dpi: Option<String>,
    pub buttons: Option<String>,
    pub resolution: Option<String>,
    pub fps: Option<String>,
    pub field_of_view: Option<String>,
    pub switches: Option<String>,
    pub layout: Option<String>,
    pub backlight: Option<String>,
    pub capacity: Option<String>,
    pub ports: Option<String>,
    pub fast_charging: Option<String>,
    pub assistant: Option<String>,
    pub speakers: Option<String>,
    pub hdr: Option<String>,
    /// Keys in the order the source listed them
    order: Vec<SpecKey>,
}

impl Default for ProductSpecifications {
    fn default() -> Self {
        Self::with_brand(UNKNOWN_BRAND)
    }
}

impl ProductSpecifications {
    /// Creates specifications carrying only a brand.
    pub fn with_brand(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            connectivity: None,
            battery_life: None,
            weight: None,
            display: None,
            water_resistance: None,
            processor: None,
            ram: None,
            storage: None,
            dpi: None,
            buttons: None,
            resolution: None,
            fps: None,
            field_of_view: None,
            switches: None,
            layout: None,
            backlight: None,
            capacity: None,
            ports: None,
            fast_charging: None,
            assistant: None,
            speakers: None,
            hdr: None,
            order: vec![SpecKey::Brand],
        }
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: SpecKey) -> Option<&str> {
        let value = match key {
            SpecKey::Brand => return Some(self.brand.as_str()),
            SpecKey::Connectivity => &self.connectivity,
            SpecKey::BatteryLife => &self.battery_life,
            SpecKey::Weight => &self.weight,
            SpecKey::Display => &self.display,
            SpecKey::WaterResistance => &self.water_resistance,
            SpecKey::Processor => &self.processor,
            SpecKey::Ram => &self.ram,
            SpecKey::Storage => &self.storage,
            SpecKey::Dpi => &self.dpi,
            SpecKey::Buttons => &self.buttons,
            SpecKey::Resolution => &self.resolution,
            SpecKey::Fps => &self.fps,
            SpecKey::FieldOfView => &self.field_of_view,
            SpecKey::Switches => &self.switches,
            SpecKey::Layout => &self.layout,
            SpecKey::Backlight => &self.backlight,
            SpecKey::Capacity => &self.capacity,
            SpecKey::Ports => &self.ports,
            SpecKey::FastCharging => &self.fast_charging,
            SpecKey::Assistant => &self.assistant,
            SpecKey::Speakers => &self.speakers,
            SpecKey::Hdr => &self.hdr,
        };
        value.as_deref()
    }

    /// Sets (or clears with `None`) the value under `key`.
    ///
    /// The brand cannot be cleared; `None` resets it to the placeholder.
    pub fn set(&mut self, key: SpecKey, value: Option<String>) {
        let present = key == SpecKey::Brand || value.is_some();
        self.order.retain(|&k| k != key || present);
        if present && !self.order.contains(&key) {
            self.order.push(key);
        }

        let slot = match key {
            SpecKey::Brand => {
                self.brand = value.unwrap_or_else(unknown_brand);
                return;
            }
            SpecKey::Connectivity => &mut self.connectivity,
            SpecKey::BatteryLife => &mut self.battery_life,
            SpecKey::Weight => &mut self.weight,
            SpecKey::Display => &mut self.display,
            SpecKey::WaterResistance => &mut self.water_resistance,
            SpecKey::Processor => &mut self.processor,
            SpecKey::Ram => &mut self.ram,
            SpecKey::Storage => &mut self.storage,
            SpecKey::Dpi => &mut self.dpi,
            SpecKey::Buttons => &mut self.buttons,
            SpecKey::Resolution => &mut self.resolution,
            SpecKey::Fps => &mut self.fps,
            SpecKey::FieldOfView => &mut self.field_of_view,
            SpecKey::Switches => &mut self.switches,
            SpecKey::Layout => &mut self.layout,
            SpecKey::Backlight => &mut self.backlight,
            SpecKey::Capacity => &mut self.capacity,
            SpecKey::Ports => &mut self.ports,
            SpecKey::FastCharging => &mut self.fast_charging,
            SpecKey::Assistant => &mut self.assistant,
            SpecKey::Speakers => &mut self.speakers,
            SpecKey::Hdr => &mut self.hdr,
        };
        *slot = value;
    }

    /// Keys in source order, then any set directly on the fields.
    fn ordered_keys(&self) -> impl Iterator<Item = SpecKey> + '_ {
        self.order
            .iter()
            .copied()
            .chain(ALL_SPEC_KEYS.iter().copied().filter(|key| !self.order.contains(key)))
    }

    /// Non-empty entries in source order.
    pub fn entries(&self) -> Vec<(SpecKey, &str)> {
        self.ordered_keys()
            .filter_map(|key| {
                self.get(key)
                    .filter(|value| !value.trim().is_empty())
                    .map(|value| (key, value))
            })
            .collect()
    }
}

impl Serialize for ProductSpecifications {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present: Vec<(SpecKey, &str)> = self
            .ordered_keys()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
            .collect();
        let mut map = serializer.serialize_map(Some(present.len()))?;
        for (key, value) in present {
            map.serialize_entry(key.wire_name(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProductSpecifications {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut specs = ProductSpecifications::default();
        specs.order.clear();

        for (name, value) in fields {
            let Some(key) = SpecKey::from_wire_name(&name) else {
                continue;
            };
            match key {
                // Blank brands are replaced when the product is sanitized
                SpecKey::Brand => specs.set(key, Some(spec_text(value).unwrap_or_default())),
                _ => specs.set(key, spec_text(value)),
            }
        }

        if !specs.order.contains(&SpecKey::Brand) {
            specs.order.insert(0, SpecKey::Brand);
        }
        Ok(specs)
    }
}

/// Every specification key, in declaration order
pub const ALL_SPEC_KEYS: [SpecKey; 23] = [
    SpecKey::Brand,
    SpecKey::Connectivity,
    SpecKey::BatteryLife,
    SpecKey::Weight,
    SpecKey::Display,
    SpecKey::WaterResistance,
    SpecKey::Processor,
    SpecKey::Ram,
    SpecKey::Storage,
    SpecKey::Dpi,
    SpecKey::Buttons,
    SpecKey::Resolution,
    SpecKey::Fps,
    SpecKey::FieldOfView,
    SpecKey::Switches,
    SpecKey::Layout,
    SpecKey::Backlight,
    SpecKey::Capacity,
    SpecKey::Ports,
    SpecKey::FastCharging,
    SpecKey::Assistant,
    SpecKey::Speakers,
    SpecKey::Hdr,
];

/// A single catalog product. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub price: f64,
    /// Image reference (URI); empty when the source has none
    #[serde(default, deserialize_with = "lenient")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub category: ProductCategory,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub in_stock: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub specifications: ProductSpecifications,
}

impl Product {
    /// Brand name from the specifications
    pub fn brand(&self) -> &str {
        &self.specifications.brand
    }

    /// Returns true if the product has a usable image reference.
    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }

    /// Clamps numeric fields into their valid ranges.
    ///
    /// Returns true if anything had to be changed.
    pub(crate) fn sanitize(&mut self) -> bool {
        let mut changed = false;
        if !self.price.is_finite() || self.price < 0.0 {
            self.price = 0.0;
            changed = true;
        }
        if !self.rating.is_finite() {
            self.rating = 0.0;
            changed = true;
        } else if !(0.0..=MAX_RATING).contains(&self.rating) {
            self.rating = self.rating.clamp(0.0, MAX_RATING);
            changed = true;
        }
        if self.specifications.brand.trim().is_empty() {
            self.specifications.brand = unknown_brand();
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_placeholders() {
        let product: Product = serde_json::from_value(serde_json::json!({ "id": 3 })).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.category, ProductCategory::Unknown);
        assert_eq!(product.brand(), UNKNOWN_BRAND);
        assert!(!product.has_image());
        assert!(!product.in_stock);
    }

    #[test]
    fn test_malformed_fields_use_placeholders() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 5,
            "name": null,
            "price": "25",
            "image": 42,
            "category": 12,
            "rating": [4],
            "inStock": "yes",
            "specifications": { "brand": null, "weight": null, "dpi": 16000, "hdr": true, "ports": {} }
        }))
        .unwrap();

        assert_eq!(product.name, "");
        assert_eq!(product.price, 0.0);
        assert!(!product.has_image());
        assert_eq!(product.category, ProductCategory::Unknown);
        assert_eq!(product.rating, 0.0);
        assert!(!product.in_stock);
        assert_eq!(product.specifications.get(SpecKey::Weight), None);
        assert_eq!(product.specifications.get(SpecKey::Dpi), Some("16000"));
        assert_eq!(product.specifications.get(SpecKey::Hdr), Some("true"));
        assert_eq!(product.specifications.get(SpecKey::Ports), None);

        let mut product = product;
        assert!(product.sanitize());
        assert_eq!(product.brand(), UNKNOWN_BRAND);
    }

    #[test]
    fn test_specifications_of_wrong_type() {
        let product: Product =
            serde_json::from_value(serde_json::json!({ "id": 6, "specifications": "none" })).unwrap();
        assert_eq!(product.brand(), UNKNOWN_BRAND);
        assert_eq!(product.specifications.entries().len(), 1);
    }

    #[test]
    fn test_category_wire_names() {
        let category: ProductCategory = serde_json::from_str("\"Smart Home\"").unwrap();
        assert_eq!(category, ProductCategory::SmartHome);

        let unknown: ProductCategory = serde_json::from_str("\"Garden\"").unwrap();
        assert_eq!(unknown, ProductCategory::Unknown);

        assert_eq!(serde_json::to_string(&ProductCategory::SmartHome).unwrap(), "\"Smart Home\"");
    }

    #[test]
    fn test_specifications_camel_case_and_unknown_keys() {
        let specs: ProductSpecifications = serde_json::from_value(serde_json::json!({
            "brand": "Acme",
            "batteryLife": "20h",
            "fieldOfView": "90°",
            "flavor": "ignored"
        }))
        .unwrap();

        assert_eq!(specs.get(SpecKey::BatteryLife), Some("20h"));
        assert_eq!(specs.get(SpecKey::FieldOfView), Some("90°"));
        assert_eq!(specs.get(SpecKey::Ram), None);
    }

    #[test]
    fn test_entries_follow_source_order() {
        let specs: ProductSpecifications = serde_json::from_str(
            r#"{"display": "1.4in", "brand": "FitPulse", "waterResistance": "5ATM", "batteryLife": "7 days"}"#,
        )
        .unwrap();
        let keys: Vec<SpecKey> = specs.entries().into_iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![SpecKey::Display, SpecKey::Brand, SpecKey::WaterResistance, SpecKey::BatteryLife]
        );

        let written = serde_json::to_string(&specs).unwrap();
        assert_eq!(
            written,
            r#"{"display":"1.4in","brand":"FitPulse","waterResistance":"5ATM","batteryLife":"7 days"}"#
        );
        let reread: ProductSpecifications = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, specs);
    }

    #[test]
    fn test_missing_brand_leads_and_cleared_keys_drop_out() {
        let mut specs: ProductSpecifications =
            serde_json::from_str(r#"{"ram": "16GB", "processor": "M3"}"#).unwrap();
        assert_eq!(specs.brand, UNKNOWN_BRAND);

        specs.set(SpecKey::Ram, None);
        specs.set(SpecKey::Ram, Some("32GB".to_string()));
        let keys: Vec<SpecKey> = specs.entries().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![SpecKey::Brand, SpecKey::Processor, SpecKey::Ram]);
    }

    #[test]
    fn test_entries_skip_empty_values() {
        let mut specs = ProductSpecifications::with_brand("Acme");
        specs.set(SpecKey::Weight, Some("250g".to_string()));
        specs.set(SpecKey::Ram, Some("   ".to_string()));

        let entries = specs.entries();
        assert_eq!(entries, vec![(SpecKey::Brand, "Acme"), (SpecKey::Weight, "250g")]);
    }

    #[test]
    fn test_sanitize_clamps_numbers() {
        let mut product: Product = serde_json::from_value(serde_json::json!({
            "id": 1,
            "price": -4.0,
            "rating": 7.5,
            "specifications": { "brand": "" }
        }))
        .unwrap();

        assert!(product.sanitize());
        assert_eq!(product.price, 0.0);
        assert_eq!(product.rating, MAX_RATING);
        assert_eq!(product.brand(), UNKNOWN_BRAND);
        assert!(!product.sanitize());
    }
}
