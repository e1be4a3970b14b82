//! End-to-end behaviour of the view pipeline over typed records

use std::cell::RefCell;
use std::rc::Rc;

use tableviewlib::{
    derive_view, infer_columns, Filter, Pagination, Record, Sort, SortDirection, TableOptions,
    TableView, Value,
};

#[derive(Debug, Clone, PartialEq)]
struct GroceryItem {
    id: u32,
    name: String,
    section: String,
    price: f64,
    weight: Option<f64>,
}

impl Record for GroceryItem {
    fn field(&self, key: &str) -> Value<'_> {
        match key {
            "id" => Value::Number(self.id as f64),
            "name" => Value::Text(&self.name),
            "section" => Value::Text(&self.section),
            "price" => Value::Number(self.price),
            "weight" => self.weight.map_or(Value::Null, Value::Number),
            _ => Value::Absent,
        }
    }

    fn keys(&self) -> Vec<&str> {
        vec!["id", "name", "section", "price", "weight"]
    }
}

fn item(id: u32, name: &str, section: &str, price: f64, weight: Option<f64>) -> GroceryItem {
    GroceryItem {
        id,
        name: name.to_string(),
        section: section.to_string(),
        price,
        weight,
    }
}

fn groceries() -> Vec<GroceryItem> {
    vec![
        item(1, "Milk", "Dairy", 1.99, Some(1.0)),
        item(2, "bread", "Bakery", 2.5, None),
        item(3, "Cheese", "Dairy", 5.25, Some(0.3)),
        item(4, "Apples", "Produce", 3.0, Some(1.5)),
        item(5, "Bagels", "Bakery", 4.0, None),
    ]
}

fn names(rows: &[&GroceryItem]) -> Vec<String> {
    rows.iter().map(|r| r.name.clone()).collect()
}

#[test]
fn test_derive_view_is_idempotent() {
    let records = groceries();
    let sort = Sort::descending("price");
    let filter = Filter::new("section", "a");

    let first = derive_view(&records, Pagination::new(0, 5), &sort, Some(&filter));
    let second = derive_view(&records, Pagination::new(0, 5), &sort, Some(&filter));

    assert_eq!(first, second);
    for (a, b) in first.rows.iter().zip(&second.rows) {
        assert!(std::ptr::eq(*a, *b));
    }
}

#[test]
fn test_filter_precedes_sort() {
    let records = vec![
        item(1, "Alice", "x", 25.0, None),
        item(2, "Bob", "x", 30.0, None),
        item(3, "Charlie", "x", 35.0, None),
    ];
    let view = derive_view(
        &records,
        Pagination::default(),
        &Sort::new("price", SortDirection::Descending),
        Some(&Filter::new("name", "li")),
    );
    assert_eq!(names(&view.rows), vec!["Charlie", "Alice"]);
    assert_eq!(view.total_items, 2);
}

#[test]
fn test_pagination_boundary() {
    let records = groceries();
    let sort = Sort::unsorted("id");

    let cases = [(0, 2, false), (1, 2, false), (2, 1, true), (3, 0, true)];
    for (page, expected_rows, expected_last) in cases {
        let view = derive_view(&records, Pagination::new(page, 2), &sort, None);
        assert_eq!(view.rows.len(), expected_rows, "page {}", page);
        assert_eq!(view.is_last_page, expected_last, "page {}", page);
        assert_eq!(view.total_items, 5);
    }
}

#[test]
fn test_string_sort_groups_case() {
    let records = groceries();
    let view = derive_view(&records, Pagination::default(), &Sort::ascending("name"), None);
    assert_eq!(
        names(&view.rows),
        vec!["Apples", "Bagels", "bread", "Cheese", "Milk"]
    );
}

#[test]
fn test_null_values_compare_equal() {
    let records = groceries();
    // Nulls compare equal to every weight, so the null between Milk and
    // Cheese keeps the two in source order.
    let view = derive_view(&records, Pagination::default(), &Sort::ascending("weight"), None);
    let ids: Vec<u32> = view.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_case_insensitive_filter() {
    let records = groceries();
    let view = derive_view(
        &records,
        Pagination::default(),
        &Sort::unsorted("id"),
        Some(&Filter::new("name", "MILK")),
    );
    assert_eq!(names(&view.rows), vec!["Milk"]);
}

#[test]
fn test_filter_on_null_and_missing_fields() {
    let records = groceries();
    let sort = Sort::unsorted("id");

    let nulls = derive_view(&records, Pagination::default(), &sort, Some(&Filter::new("weight", "null")));
    assert_eq!(names(&nulls.rows), vec!["bread", "Bagels"]);

    let missing = derive_view(&records, Pagination::default(), &sort, Some(&Filter::new("brand", "undefined")));
    assert_eq!(missing.total_items, 5);
}

#[test]
fn test_empty_data() {
    let records: Vec<GroceryItem> = Vec::new();
    let view = derive_view(&records, Pagination::default(), &Sort::unsorted("id"), None);
    assert!(view.rows.is_empty());
    assert!(view.is_last_page);
    assert_eq!(view.total_items, 0);
    assert!(infer_columns(&records, "id", false).is_empty());
}

#[test]
fn test_typed_columns_follow_declared_order() {
    let records = groceries();
    let columns = infer_columns(&records, "id", true);
    let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["name", "section", "price", "weight"]);
    assert_eq!(columns[3].cell(&records[1]), "null");
}

#[test]
fn test_table_session() {
    let records = groceries();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut table = TableView::new(&records, TableOptions::interactive().hide_identity(true));

    let sink = Rc::clone(&log);
    table.on_sort_change(move |sort| {
        sink.borrow_mut()
            .push(format!("sort:{}:{}", sort.key, sort.direction))
    });
    let sink = Rc::clone(&log);
    table.on_page_size_change(move |size| sink.borrow_mut().push(format!("size:{}", size)));
    let sink = Rc::clone(&log);
    table.on_page_change(move |page| sink.borrow_mut().push(format!("page:{}", page)));

    table.change_page_size(2);
    table.toggle_sort("name");
    table.toggle_sort("name");
    table.toggle_sort("name");
    table.toggle_sort("price");
    table.change_page(1);
    table.change_page_size(2);

    assert_eq!(
        *log.borrow(),
        vec![
            "page:0",
            "size:2",
            "sort:name:asc",
            "sort:name:desc",
            "sort:name:none",
            "sort:price:asc",
            "page:1",
        ]
    );

    let view = table.view();
    assert_eq!(names(&view.rows), vec!["bread", "Apples"]);
    assert!(!view.is_last_page);
}
