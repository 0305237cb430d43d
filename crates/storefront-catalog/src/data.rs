//! Seeded demo catalog.
//!
//! The storefront has no backend; this is the static product data it
//! browses. Prices are whole currency units, ratings half-star granular.

use crate::category::Category::{Accessories, Laptop, Mobile, Tablet};
use crate::product::Product;
use crate::store::Catalog;

/// Build the built-in demo catalog.
///
/// Panics only if the seed data itself is invalid, which a test guards.
pub fn demo_catalog() -> Catalog {
    Catalog::load(seed_products()).expect("demo catalog seed data is valid")
}

fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Galaxy S24 Ultra", "Samsung", Mobile, 139999, 4.5,
            "https://images.unsplash.com/photo-1610945265064-0e34e5519bbf?w=2070")
            .with_description("Flagship phone with a 200MP camera and S Pen support."),
        Product::new(2, "iPhone 15 Pro", "Apple", Mobile, 154999, 5.0,
            "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=2070")
            .with_description("Titanium design, A17 Pro chip, USB-C."),
        Product::new(3, "Pixel 8 Pro", "Google", Mobile, 99999, 4.5,
            "https://images.unsplash.com/photo-1598327105666-5b89351aff97?w=2070")
            .with_description("Google's best camera with seven years of updates."),
        Product::new(4, "MacBook Pro 14", "Apple", Laptop, 239999, 5.0,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=2070")
            .with_description("M3 Pro chip, Liquid Retina XDR display."),
        Product::new(5, "XPS 13 Plus", "Dell", Laptop, 165000, 4.0,
            "https://images.unsplash.com/photo-1593642632823-8f785ba67e45?w=2070")
            .with_description("Edge-to-edge keyboard and InfinityEdge display."),
        Product::new(6, "ThinkPad X1 Carbon", "Lenovo", Laptop, 178500, 4.5,
            "https://images.unsplash.com/photo-1588872657578-7efd1f1555ed?w=2070")
            .with_description("Business ultrabook, legendary keyboard."),
        Product::new(7, "WH-1000XM5", "Sony", Accessories, 42999, 4.5,
            "https://images.unsplash.com/photo-1618366712010-f4ae9c647dcb?w=2070")
            .with_description("Industry-leading noise cancelling headphones."),
        Product::new(8, "AirPods Pro 2", "Apple", Accessories, 29999, 4.5,
            "https://images.unsplash.com/photo-1600294037681-c80b4cb5b434?w=2070")
            .with_description("Adaptive audio with USB-C charging case."),
        Product::new(9, "iPad Air", "Apple", Tablet, 84999, 4.5,
            "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=2070")
            .with_description("M1 powered, all-screen design."),
        Product::new(10, "Galaxy Tab S9", "Samsung", Tablet, 104999, 4.0,
            "https://images.unsplash.com/photo-1561154464-82e9adf32764?w=2070")
            .with_description("Dynamic AMOLED 2X with included S Pen."),
        Product::new(11, "OnePlus 12", "OnePlus", Mobile, 79999, 4.0,
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=2070")
            .with_description("Snapdragon 8 Gen 3 with 100W charging."),
        Product::new(12, "Redmi Note 13 Pro", "Xiaomi", Mobile, 34999, 4.0,
            "https://images.unsplash.com/photo-1567581935884-3349723552ca?w=2070")
            .with_description("Great value with a 200MP sensor."),
        Product::new(13, "Spectre x360", "HP", Laptop, 172000, 4.5,
            "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=2070")
            .with_description("Convertible OLED laptop with gem-cut design."),
        Product::new(14, "MX Master 3S", "Logitech", Accessories, 12999, 5.0,
            "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=2070")
            .with_description("Quiet clicks and an 8K DPI sensor."),
        Product::new(15, "PowerCore 20K", "Anker", Accessories, 5999, 4.5,
            "https://images.unsplash.com/photo-1609091839311-d5365f9ff1c5?w=2070")
            .with_description("20,000mAh power bank with fast charging."),
        Product::new(16, "Flip 6", "JBL", Accessories, 13500, 4.0,
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=2070")
            .with_description("Portable waterproof Bluetooth speaker."),
        Product::new(17, "Surface Pro 9", "Microsoft", Tablet, 149999, 4.0,
            "https://images.unsplash.com/photo-1542751110-97427bbecf20?w=2070")
            .with_description("Laptop power in tablet form."),
        Product::new(18, "Galaxy Book4 Pro", "Samsung", Laptop, 185000, 4.0,
            "https://images.unsplash.com/photo-1531297484001-80022131f5a1?w=2070")
            .with_description("AMOLED touchscreen ultrabook."),
        Product::new(19, "Pixel Buds Pro", "Google", Accessories, 21999, 4.0,
            "https://images.unsplash.com/photo-1590658268037-6bf12165a8df?w=2070")
            .with_description("Active noise cancellation, Fast Pair."),
        Product::new(20, "iPhone SE", "Apple", Mobile, 54999, 4.0,
            "https://images.unsplash.com/photo-1529653762956-b0a27278529c?w=2070")
            .with_description("Compact phone with the A15 Bionic."),
        Product::new(21, "Xperia 1 V", "Sony", Mobile, 119999, 4.0,
            "https://images.unsplash.com/photo-1580910051074-3eb694886505?w=2070")
            .with_description("Creator-focused phone with 4K OLED display."),
        Product::new(22, "Mi Pad 6", "Xiaomi", Tablet, 42999, 4.0,
            "https://images.unsplash.com/photo-1585790050230-5dd28404ccb9?w=2070")
            .with_description("144Hz display at a friendly price."),
        Product::new(23, "Legion 5 Pro", "Lenovo", Laptop, 198000, 4.5,
            "https://images.unsplash.com/photo-1603302576837-37561b2e2302?w=2070")
            .with_description("16-inch QHD gaming laptop."),
        Product::new(24, "Watch Series 9", "Apple", Accessories, 52999, 4.5,
            "https://images.unsplash.com/photo-1434493789847-2f02dc6ca35d?w=2070")
            .with_description("Double tap gesture, brighter display."),
    ]
}
