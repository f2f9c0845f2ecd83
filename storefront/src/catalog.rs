//! Static catalog data
//!
//! The menu and the seeded default order history. Read-only input to the
//! engine; nothing here is mutated at runtime.

use chrono::{Duration, Utc};
use shared::models::{
    CartLineItem, Category, Choice, CustomerDetails, CustomizationOption, MenuItem, Order,
    OrderStatus,
};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

fn choice(id: &str, name: &str, price_change: Option<f64>) -> Choice {
    Choice {
        id: id.into(),
        name: name.into(),
        price_change,
    }
}

fn option(id: &str, name: &str, choices: Vec<Choice>) -> CustomizationOption {
    CustomizationOption {
        id: id.into(),
        name: name.into(),
        choices,
        allows_multiple: false,
    }
}

/// The full menu, in display order.
pub fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "food-1".into(),
            name: "Avocado Toast".into(),
            description: "Crispy sourdough topped with fresh avocado, chili flakes, and a hint of lime.".into(),
            price: 8.50,
            category: Category::Food,
            image_url: PLACEHOLDER_IMAGE.into(),
            customizable_options: Some(vec![
                option("add-egg", "Add Poached Egg", vec![choice("poached-egg", "Yes", Some(2.00))]),
                option("gluten-free", "Gluten-Free Bread", vec![choice("gf-bread", "Yes", Some(1.50))]),
            ]),
        },
        MenuItem {
            id: "food-2".into(),
            name: "Breakfast Burrito".into(),
            description: "Scrambled eggs, cheese, black beans, and salsa wrapped in a warm tortilla.".into(),
            price: 9.00,
            category: Category::Food,
            image_url: PLACEHOLDER_IMAGE.into(),
            customizable_options: None,
        },
        MenuItem {
            id: "smoothie-1".into(),
            name: "Green Goddess Smoothie".into(),
            description: "Spinach, kale, banana, pineapple, and coconut water for a healthy boost.".into(),
            price: 7.00,
            category: Category::Smoothies,
            image_url: PLACEHOLDER_IMAGE.into(),
            customizable_options: Some(vec![
                option(
                    "protein-boost",
                    "Protein Boost",
                    vec![
                        choice("whey-protein", "Whey Protein", Some(1.50)),
                        choice("vegan-protein", "Vegan Protein", Some(1.50)),
                    ],
                ),
                option("add-chia", "Add Chia Seeds", vec![choice("chia-seeds", "Yes", Some(0.75))]),
            ]),
        },
        MenuItem {
            id: "smoothie-2".into(),
            name: "Berry Blast Smoothie".into(),
            description: "A delightful mix of strawberries, blueberries, raspberries, banana, and almond milk.".into(),
            price: 7.50,
            category: Category::Smoothies,
            image_url: PLACEHOLDER_IMAGE.into(),
            customizable_options: None,
        },
        MenuItem {
            id: "coffee-1".into(),
            name: "Classic Latte".into(),
            description: "Rich espresso with steamed milk, topped with a thin layer of foam.".into(),
            price: 4.50,
            category: Category::Coffee,
            image_url: PLACEHOLDER_IMAGE.into(),
            customizable_options: Some(vec![
                option(
                    "milk-type",
                    "Milk Type",
                    vec![
                        choice("whole-milk", "Whole Milk", None),
                        choice("skim-milk", "Skim Milk", None),
                        choice("almond-milk", "Almond Milk", Some(0.75)),
                        choice("oat-milk", "Oat Milk", Some(0.75)),
                    ],
                ),
                option(
                    "syrup-flavor",
                    "Flavor Shot",
                    vec![
                        choice("no-syrup", "None", None),
                        choice("vanilla-syrup", "Vanilla", Some(0.50)),
                        choice("caramel-syrup", "Caramel", Some(0.50)),
                        choice("hazelnut-syrup", "Hazelnut", Some(0.50)),
                    ],
                ),
            ]),
        },
        MenuItem {
            id: "coffee-2".into(),
            name: "Iced Coffee".into(),
            description: "Chilled coffee served over ice, perfect for a warm day.".into(),
            price: 3.75,
            category: Category::Coffee,
            image_url: PLACEHOLDER_IMAGE.into(),
            customizable_options: None,
        },
    ]
}

/// Menu items belonging to one category, preserving display order.
pub fn items_by_category(category: Category) -> Vec<MenuItem> {
    menu_items()
        .into_iter()
        .filter(|item| item.category == category)
        .collect()
}

/// Look up one catalog item by id.
pub fn find_item(id: &str) -> Option<MenuItem> {
    menu_items().into_iter().find(|item| item.id == id)
}

/// Seeded default order history, shown until the user places a real order.
pub fn seed_order_history() -> Vec<Order> {
    let items = menu_items();
    let by_id = |id: &str| -> MenuItem {
        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .unwrap_or_else(|| items[0].clone())
    };

    vec![
        Order {
            id: "order-123".into(),
            date: Utc::now() - Duration::days(2),
            items: vec![
                CartLineItem::new(&by_id("smoothie-1"), 1, None),
                CartLineItem::new(
                    &by_id("food-1"),
                    1,
                    Some(vec![shared::models::SelectedCustomization {
                        option_id: "add-egg".into(),
                        option_name: "Add Poached Egg".into(),
                        selected_value: "poached-egg".into(),
                        selected_name: "Yes".into(),
                        price_change: Some(2.00),
                    }]),
                ),
            ],
            total_amount: 17.50,
            status: OrderStatus::Delivered,
            customer_details: Some(CustomerDetails {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                phone: None,
                address: None,
            }),
        },
        Order {
            id: "order-456".into(),
            date: Utc::now() - Duration::days(5),
            items: vec![CartLineItem::new(
                &by_id("coffee-1"),
                2,
                Some(vec![shared::models::SelectedCustomization {
                    option_id: "milk-type".into(),
                    option_name: "Milk Type".into(),
                    selected_value: "oat-milk".into(),
                    selected_name: "Oat Milk".into(),
                    price_change: Some(0.75),
                }]),
            )],
            // (4.50 + 0.75) * 2
            total_amount: 10.50,
            status: OrderStatus::Delivered,
            customer_details: Some(CustomerDetails {
                name: "John Smith".into(),
                email: "john@example.com".into(),
                phone: None,
                address: None,
            }),
        },
    ]
}
