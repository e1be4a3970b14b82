//! Print one page of a grocery list, sorted by price.

use tableviewlib::{parse_records, Filter, RenderedTable, TableOptions, TableView};

const GROCERIES: &str = r#"[
    {"id": 1, "name": "Milk", "section": "Dairy", "price": 1.99, "weight": 1.0},
    {"id": 2, "name": "Bread", "section": "Bakery", "price": 2.5, "weight": 0.5},
    {"id": 3, "name": "Cheese", "section": "Dairy", "price": 5.25, "weight": 0.3},
    {"id": 4, "name": "Apples", "section": "Produce", "price": 3.0, "weight": 1.5},
    {"id": 5, "name": "Bagels", "section": "Bakery", "price": 4.0, "weight": 0.6},
    {"id": 6, "name": "Yogurt", "section": "Dairy", "price": 0.99, "weight": 0.15}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = parse_records(GROCERIES)?;
    let options = TableOptions::interactive()
        .title("Today's groceries")
        .hide_identity(true);

    let mut table = TableView::new(&records, options);
    table.on_sort_change(|sort| eprintln!("sort changed: {} {}", sort.key, sort.direction));
    table.toggle_sort("price");

    let rendered = RenderedTable::from_view(&table);
    println!("{}", serde_json::to_string_pretty(&rendered)?);

    table.apply_filter(Some(Filter::new("section", "dairy")));
    let view = table.view();
    println!("dairy items: {}", view.total_items);

    Ok(())
}
