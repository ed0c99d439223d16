use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::product::{Product, ProductCategory, ProductSpecifications, SpecKey};
use crate::traits::CatalogProvider;

const DEFAULT_PRODUCT_COUNT: usize = 1000;

const BRANDS: &[&str] = &[
    "SoundWave", "FitPulse", "Nimbus", "Vortex", "ClearView", "KeyForge", "ChargeMax", "HomeHub",
];

const ADJECTIVES: &[&str] = &[
    "Compact", "Pro", "Ultra", "Wireless", "Smart", "Portable", "Premium", "Essential", "Max", "Lite",
];

/// Nouns per category, in `ProductCategory::ALL` order
const NOUNS: [&[&str]; 8] = [
    &["Charger", "Power Bank", "Adapter"],
    &["Watch", "Fitness Band", "Ring"],
    &["Laptop", "Desktop", "Monitor"],
    &["Controller", "Mouse", "Headset"],
    &["Keyboard", "Tablet", "Dock"],
    &["Webcam", "Stand", "Cable Kit"],
    &["Headphones", "Earbuds", "Speaker"],
    &["Thermostat", "Smart Plug", "Doorbell"],
];

/// Spec keys that may be filled per category, in `ProductCategory::ALL` order
const CATEGORY_SPECS: [&[SpecKey]; 8] = [
    &[SpecKey::Capacity, SpecKey::Ports, SpecKey::FastCharging],
    &[SpecKey::Display, SpecKey::BatteryLife, SpecKey::WaterResistance],
    &[SpecKey::Processor, SpecKey::Ram, SpecKey::Storage, SpecKey::Display],
    &[SpecKey::Dpi, SpecKey::Buttons, SpecKey::Connectivity],
    &[SpecKey::Switches, SpecKey::Layout, SpecKey::Backlight],
    &[SpecKey::Resolution, SpecKey::Fps, SpecKey::FieldOfView],
    &[SpecKey::BatteryLife, SpecKey::Connectivity, SpecKey::Weight],
    &[SpecKey::Assistant, SpecKey::Speakers, SpecKey::Hdr],
];

/// Generates a deterministic synthetic catalog.
///
/// Useful for exercising the windowed list with thousands of items.
pub struct VirtualCatalogProvider {
    count: usize,
    seed: u64,
}

impl VirtualCatalogProvider {
    pub fn new() -> Self {
        Self {
            count: DEFAULT_PRODUCT_COUNT,
            seed: 42, // Default seed for reproducibility
        }
    }

    pub fn with_config(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates the raw product list without building a catalog.
    pub fn generate(&self) -> Vec<Product> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.count)
            .map(|i| generate_product(&mut rng, i as u64 + 1))
            .collect()
    }
}

impl Default for VirtualCatalogProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for VirtualCatalogProvider {
    fn load(&self) -> anyhow::Result<Catalog> {
        let catalog = Catalog::new(self.generate())?;
        tracing::info!(products = catalog.len(), seed = self.seed, "virtual catalog generated");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("Virtual catalog (seed {})", self.seed)
    }
}

fn generate_product(rng: &mut StdRng, id: u64) -> Product {
    let category_index = rng.gen_range(0..ProductCategory::ALL.len());
    let category = ProductCategory::ALL[category_index];

    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let nouns = NOUNS[category_index];
    let noun = nouns[rng.gen_range(0..nouns.len())];
    let brand = BRANDS[rng.gen_range(0..BRANDS.len())];

    let mut specifications = ProductSpecifications::with_brand(brand);
    for &key in CATEGORY_SPECS[category_index] {
        if rng.gen_bool(0.8) {
            specifications.set(key, Some(spec_value(rng, key)));
        }
    }

    // Prices in whole cents so that formatting is stable
    let cents: u64 = rng.gen_range(999..=250_000);
    let rating = (rng.gen_range(20..=50) as f64) / 10.0;

    Product {
        id,
        name: format!("{} {} {} #{}", brand, adjective, noun, id),
        price: cents as f64 / 100.0,
        image: format!("https://images.example.com/virtual/{}.jpg", id),
        description: format!(
            "The {} {} from {} is a {} product generated for catalog stress testing.",
            adjective.to_lowercase(),
            noun.to_lowercase(),
            brand,
            category.label().to_lowercase()
        ),
        category,
        rating,
        in_stock: rng.gen_bool(0.75),
        specifications,
    }
}

fn spec_value(rng: &mut StdRng, key: SpecKey) -> String {
    match key {
        SpecKey::Capacity => format!("{}mAh", rng.gen_range(5..=30) * 1000),
        SpecKey::Ports => format!("{}x USB-C", rng.gen_range(1..=4)),
        SpecKey::FastCharging => format!("{}W PD", [18, 30, 45, 65, 100][rng.gen_range(0..5)]),
        SpecKey::Display => format!("{:.1}\" OLED", rng.gen_range(10..=170) as f64 / 10.0),
        SpecKey::BatteryLife => format!("{} hours", rng.gen_range(4..=60)),
        SpecKey::WaterResistance => format!("{} ATM", rng.gen_range(1..=10)),
        SpecKey::Processor => format!("{}-core {:.1} GHz", [4, 6, 8, 12][rng.gen_range(0..4)], rng.gen_range(20..=50) as f64 / 10.0),
        SpecKey::Ram => format!("{} GB", [8, 16, 32, 64][rng.gen_range(0..4)]),
        SpecKey::Storage => format!("{} GB SSD", [256, 512, 1024, 2048][rng.gen_range(0..4)]),
        SpecKey::Dpi => format!("{}", rng.gen_range(8..=30) * 1000),
        SpecKey::Buttons => format!("{} programmable", rng.gen_range(2..=12)),
        SpecKey::Connectivity => ["Bluetooth 5.3", "Wi-Fi 6", "2.4 GHz wireless", "USB-C"][rng.gen_range(0..4)].to_string(),
        SpecKey::Switches => ["Linear Red", "Tactile Brown", "Clicky Blue"][rng.gen_range(0..3)].to_string(),
        SpecKey::Layout => ["ANSI TKL", "ISO 75%", "ANSI full-size"][rng.gen_range(0..3)].to_string(),
        SpecKey::Backlight => ["White", "Per-key RGB", "None"][rng.gen_range(0..3)].to_string(),
        SpecKey::Resolution => ["1920x1080", "2560x1440", "3840x2160"][rng.gen_range(0..3)].to_string(),
        SpecKey::Fps => format!("{}", [30, 60, 120][rng.gen_range(0..3)]),
        SpecKey::FieldOfView => format!("{}°", rng.gen_range(65..=120)),
        SpecKey::Weight => format!("{}g", rng.gen_range(20..=900)),
        SpecKey::Assistant => "Built-in voice assistant".to_string(),
        SpecKey::Speakers => format!("{}x full-range", rng.gen_range(1..=4)),
        SpecKey::Hdr => ["HDR10", "HDR400", "Dolby Vision"][rng.gen_range(0..3)].to_string(),
        SpecKey::Brand => BRANDS[rng.gen_range(0..BRANDS.len())].to_string(),
    }
}
