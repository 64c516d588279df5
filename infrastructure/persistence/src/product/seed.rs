use rust_decimal::Decimal;

use business::domain::product::model::{Product, Rating};
use business::domain::shared::value_objects::ProductId;

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

struct SeedProduct {
    id: &'static str,
    title: &'static str,
    price_cents: i64,
    description: &'static str,
    category: &'static str,
    featured: bool,
    rate: f32,
    count: u32,
    hint: &'static str,
}

const SEED: [SeedProduct; 8] = [
    SeedProduct {
        id: "1",
        title: "Classic T-Shirt",
        price_cents: 1999,
        description: "A comfortable and stylish classic t-shirt, perfect for everyday wear. Made from 100% premium cotton for a soft feel and lasting durability. Available in various sizes and colors to suit your preference.",
        category: "Apparel",
        featured: true,
        rate: 4.5,
        count: 120,
        hint: "tshirt apparel",
    },
    SeedProduct {
        id: "2",
        title: "Wireless Headphones",
        price_cents: 7999,
        description: "Experience immersive sound with these high-quality wireless headphones. Features noise-cancellation, long battery life, and a comfortable over-ear design for extended listening sessions.",
        category: "Electronics",
        featured: true,
        rate: 4.8,
        count: 250,
        hint: "headphones electronics",
    },
    SeedProduct {
        id: "3",
        title: "Modern Coffee Maker",
        price_cents: 4950,
        description: "Brew your perfect cup of coffee with this sleek and modern coffee maker. Programmable settings, a large capacity carafe, and a keep-warm function make your mornings easier.",
        category: "Home Goods",
        featured: true,
        rate: 4.2,
        count: 90,
        hint: "coffee maker",
    },
    SeedProduct {
        id: "4",
        title: "Leather Wallet",
        price_cents: 3500,
        description: "A stylish and durable leather wallet with multiple card slots and a cash compartment. Crafted from genuine leather for a sophisticated look and feel. Compact design fits comfortably in your pocket.",
        category: "Accessories",
        featured: false,
        rate: 4.6,
        count: 150,
        hint: "wallet accessory",
    },
    SeedProduct {
        id: "5",
        title: "Yoga Mat",
        price_cents: 2500,
        description: "High-density, non-slip yoga mat perfect for all types of yoga and fitness exercises. Provides excellent cushioning and support. Lightweight and easy to carry with an included strap.",
        category: "Sports",
        featured: true,
        rate: 4.3,
        count: 75,
        hint: "yoga fitness",
    },
    SeedProduct {
        id: "6",
        title: "Smart Watch",
        price_cents: 19900,
        description: "Stay connected and track your fitness goals with this advanced smartwatch. Features heart rate monitoring, GPS, app notifications, and a vibrant touchscreen display. Customizable watch faces.",
        category: "Electronics",
        featured: false,
        rate: 4.7,
        count: 300,
        hint: "smartwatch technology",
    },
    SeedProduct {
        id: "7",
        title: "Desk Lamp",
        price_cents: 3000,
        description: "Adjustable LED desk lamp with multiple brightness levels and color temperatures. Ideal for reading, studying, or working. Energy-efficient and eye-caring design.",
        category: "Home Office",
        featured: false,
        rate: 4.0,
        count: 60,
        hint: "lamp office",
    },
    SeedProduct {
        id: "8",
        title: "Running Shoes",
        price_cents: 8999,
        description: "Lightweight and breathable running shoes designed for comfort and performance. Provides excellent cushioning and support for your daily runs or workouts. Durable outsole for various terrains.",
        category: "Footwear",
        featured: true,
        rate: 4.4,
        count: 180,
        hint: "shoes sport",
    },
];

/// Built-in demo catalog.
pub(super) fn demo_products() -> Vec<Product> {
    SEED.iter()
        .map(|seed| {
            Product::from_repository(
                ProductId::new(seed.id),
                seed.title.to_string(),
                Decimal::new(seed.price_cents, 2),
                seed.description.to_string(),
                PLACEHOLDER_IMAGE.to_string(),
                Some(seed.category.to_string()),
                seed.featured,
                Some(Rating {
                    rate: seed.rate,
                    count: seed.count,
                }),
                Some(seed.hint.to_string()),
            )
        })
        .collect()
}
