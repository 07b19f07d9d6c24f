//! Back-office walkthrough: list, search, delete, and create over an
//! in-memory backend.
//!
//! Run with `cargo run --example admin`.

use freightdesk::client::{EntityClient, MemoryClient};
use freightdesk::context::AdminContext;
use freightdesk::model::Customer;
use freightdesk::screens::{FormScreen, ListScreen, SubmitOutcome};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn seed() -> Vec<Customer> {
    [
        ("Ada", "Lovelace", "Keizersgracht 1, Amsterdam"),
        ("Grace", "Hopper", "Dokweg 12, Rotterdam"),
        ("Edsger", "Dijkstra", "Veemarkt 8, Utrecht"),
        ("Annie", "Easley", "Stationsplein 3, Eindhoven"),
    ]
    .into_iter()
    .map(|(name, surname, address)| Customer {
        id: None,
        name: name.to_string(),
        surname: surname.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "0101234567".to_string(),
        address: address.to_string(),
        created_at: None,
        updated_at: None,
    })
    .collect()
}

fn print_list(screen: &ListScreen<Customer, MemoryClient<Customer>>) {
    let view = screen.view();
    for record in view.visible_page() {
        let cells: Vec<String> = view
            .columns()
            .iter()
            .map(|c| c.render(record.get(&c.key).unwrap_or(&gridform::model::Value::Null)))
            .collect();
        println!("  {}", cells.join(" | "));
    }
    let (page, total) = view.page_info();
    println!("  -- page {page} of {total}\n");
}

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger init");

    let mut cx = AdminContext::new();
    let client = MemoryClient::seeded("customer", seed());

    let mut list = ListScreen::new(client).unwrap();
    list.refresh(&mut cx);

    println!("== all customers ==");
    print_list(&list);

    println!("== searching 'hopper' ==");
    list.view_mut().set_search_term("hopper");
    print_list(&list);

    let target = list.view().visible_page()[0].clone();
    list.delete(&target, &mut cx).unwrap();
    println!("== after deleting the match ==");
    list.view_mut().set_search_term("");
    print_list(&list);

    // Create a replacement through the form screen, seeded from the
    // current collection.
    let mut form = FormScreen::create(
        MemoryClient::seeded("customer", list.client().get_all().data.unwrap()),
        Customer::form_fields(),
    )
    .unwrap();
    let engine = form.form_mut();
    engine.set_input("name", "Katherine");
    engine.set_input("surname", "Johnson");
    engine.set_input("email", "katherine@example.com");
    engine.set_input("phone", "0109876543");
    engine.set_input("address", "Lange Voorhout 9, Den Haag");

    match form.submit(&mut cx).unwrap() {
        SubmitOutcome::Saved(id) => println!("created customer {id}\n"),
        other => println!("submit did not save: {other:?}\n"),
    }

    println!("== notifications ==");
    for note in cx.notifications.drain() {
        println!("  [{:?}] {}", note.level, note.message);
    }
}
