//! Table view demo - search, sort and page over a small depot list.
//!
//! Run with `cargo run --example table`.

use gridform::model::Record;
use gridform::table::{ColumnSpec, TableView};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn print_page(view: &TableView) {
    let header: Vec<&str> = view.columns().iter().map(|c| c.label.as_str()).collect();
    println!("{}", header.join(" | "));
    for record in view.visible_page() {
        let cells: Vec<String> = view
            .columns()
            .iter()
            .map(|c| c.render(record.get(&c.key).unwrap_or(&gridform::model::Value::Null)))
            .collect();
        println!("{}", cells.join(" | "));
    }
    let (page, total) = view.page_info();
    println!("Page {page} of {total}\n");
}

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger init");

    let columns = vec![
        ColumnSpec::new("name", "Name").sortable(),
        ColumnSpec::new("city", "City").sortable(),
        ColumnSpec::new("capacity", "Capacity")
            .sortable()
            .formatter(|v| format!("{v} kg")),
    ];

    let rows: Vec<Record> = [
        ("North Hub", "Rotterdam", 1200),
        ("Airport Desk", "Eindhoven", 150),
        ("South Hub", "Utrecht", 800),
        ("Harbour Bay", "Rotterdam", 2400),
        ("City Point", "Amsterdam", 300),
    ]
    .into_iter()
    .map(|(name, city, capacity)| {
        Record::new()
            .set("name", name)
            .set("city", city)
            .set("capacity", capacity as i64)
    })
    .collect();

    let mut view = TableView::with_rows(columns, rows).expect("valid columns");
    view.set_page_size(3);

    println!("== fresh view ==");
    print_page(&view);

    println!("== sorted by capacity, descending ==");
    view.toggle_sort("capacity");
    view.toggle_sort("capacity");
    print_page(&view);

    println!("== searching 'rotterdam' ==");
    view.set_search_term("rotterdam");
    print_page(&view);
}
