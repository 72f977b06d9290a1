//! Default café menu, seeded into the store at startup.

use crate::types::menu::NewMenuItem;

pub fn default_menu() -> Vec<NewMenuItem> {
    [
        ("Latte", 2.75, "Hot Drinks"),
        ("Cappuccino", 2.75, "Hot Drinks"),
        ("Flat White", 2.75, "Hot Drinks"),
        ("Americano", 2.75, "Hot Drinks"),
        ("Hot Chocolate", 2.75, "Hot Drinks"),
        ("Luxury Hot Chocolate", 4.00, "Hot Drinks"),
        ("Tea", 2.25, "Hot Drinks"),
        ("Pot of Tea for Two", 3.00, "Hot Drinks"),
        ("Iced Latte", 3.25, "Cold Drinks"),
        ("Cans", 1.30, "Cold Drinks"),
        ("Bottled Water", 1.50, "Cold Drinks"),
        ("Bottled Soda", 2.00, "Cold Drinks"),
        ("Slush", 3.00, "Cold Drinks"),
        ("Chocolate Milkshake", 4.00, "Milkshakes"),
        ("Strawberry Milkshake", 4.00, "Milkshakes"),
        ("Banana Milkshake", 4.00, "Milkshakes"),
        ("Biscoff Milkshake", 4.00, "Milkshakes"),
        ("Toastie", 3.50, "Food"),
        ("Cob/Sandwich", 3.75, "Food"),
        ("Toast/Teacake", 2.25, "Food"),
        ("Homemade Scone", 4.25, "Food"),
        ("Waffles - Strawberries & Chocolate", 5.50, "Waffles"),
        ("Waffles - Biscoff Sauce & Crumb", 5.50, "Waffles"),
        ("Waffles - Dubai Style Strawberries", 6.25, "Waffles"),
        ("Small Ice Cream", 3.00, "Ice Cream"),
        ("Large Ice Cream", 4.00, "Ice Cream"),
        ("Cake Slice", 3.50, "Cakes"),
        ("Brownie", 3.00, "Cakes"),
        ("Blondie", 3.00, "Cakes"),
        ("Cookie", 2.50, "Cakes"),
        ("Traybake", 3.00, "Cakes"),
        ("Cupcake", 2.50, "Cakes"),
    ]
    .into_iter()
    .map(|(name, price, category)| NewMenuItem {
        name: name.to_string(),
        price,
        category: category.to_string(),
    })
    .collect()
}
