use freightdesk::client::{ApiResponse, EntityClient, MemoryClient};
use freightdesk::context::{AdminContext, NotificationLevel};
use freightdesk::model::{Branch, Customer, FormEntity, TableEntity};
use freightdesk::screens::{FormScreen, ListScreen, SubmitOutcome};
use gridform::model::Record;
use uuid::Uuid;

fn customer(index: usize) -> Customer {
    Customer {
        id: None,
        name: format!("Customer {index:02}"),
        surname: "Vermeer".to_string(),
        email: format!("customer{index:02}@example.com"),
        phone: "0101234567".to_string(),
        address: "Keizersgracht 1, Amsterdam".to_string(),
        created_at: None,
        updated_at: None,
    }
}

fn seeded_screen(count: usize) -> ListScreen<Customer, MemoryClient<Customer>> {
    let client = MemoryClient::seeded("customer", (0..count).map(customer).collect());
    ListScreen::new(client).unwrap()
}

/// A collaborator that is down: every call answers a failure envelope.
struct DownClient;

impl EntityClient<Customer> for DownClient {
    fn get_all(&self) -> ApiResponse<Vec<Customer>> {
        ApiResponse::fail("service unavailable", vec![])
    }

    fn get_by_id(&self, _id: Uuid) -> ApiResponse<Customer> {
        ApiResponse::fail("service unavailable", vec![])
    }

    fn create(&mut self, _item: Customer) -> ApiResponse<String> {
        ApiResponse::fail("service unavailable", vec![])
    }

    fn update(&mut self, _id: Uuid, _item: Customer) -> ApiResponse<String> {
        ApiResponse::fail("service unavailable", vec![])
    }

    fn delete(&mut self, _id: Uuid) -> ApiResponse<String> {
        ApiResponse::fail("service unavailable", vec![])
    }
}

#[test]
fn test_refresh_populates_the_view() {
    let mut cx = AdminContext::new();
    let mut screen = seeded_screen(12);

    screen.refresh(&mut cx);
    assert_eq!(screen.view().rows().len(), 12);
    assert_eq!(screen.view().total_pages(), 2);
    assert!(!cx.loading.is_loading());
    assert!(cx.notifications.is_empty());
}

#[test]
fn test_refresh_failure_keeps_rows_and_notifies() {
    let mut cx = AdminContext::new();
    let mut screen = ListScreen::<Customer, _>::new(DownClient).unwrap();

    screen.refresh(&mut cx);
    assert!(screen.view().rows().is_empty());

    let queued = cx.notifications.drain();
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].level, NotificationLevel::Error);
    assert_eq!(queued[0].message, "Failed to load customers");
    assert!(!cx.loading.is_loading());
}

#[test]
fn test_delete_refreshes_and_preserves_page_and_filter() {
    let mut cx = AdminContext::new();
    let mut screen = seeded_screen(25);
    screen.refresh(&mut cx);

    screen.view_mut().set_search_term("vermeer");
    screen.view_mut().set_page(2);
    let target: Record = screen.view().visible_page()[0].clone();

    assert!(screen.delete(&target, &mut cx).unwrap());

    // The user's place in the list survives the reload.
    assert_eq!(screen.view().current_page(), 2);
    assert_eq!(screen.view().search_term(), "vermeer");
    assert_eq!(screen.view().rows().len(), 24);
    assert_eq!(screen.client().len(), 24);

    let deleted_id = target.get_str("id").unwrap();
    assert!(
        screen
            .view()
            .rows()
            .iter()
            .all(|r| r.get_str("id") != Some(deleted_id))
    );

    let queued = cx.notifications.drain();
    assert_eq!(queued[0].level, NotificationLevel::Success);
    assert_eq!(queued[0].message, "Customer deleted successfully");
}

#[test]
fn test_delete_rejects_records_without_usable_id() {
    let mut cx = AdminContext::new();
    let mut screen = seeded_screen(3);
    screen.refresh(&mut cx);

    let no_id = Record::new().set("name", "ghost");
    assert!(screen.delete(&no_id, &mut cx).is_err());

    let bad_id = Record::new().set("id", "not-a-uuid");
    assert!(screen.delete(&bad_id, &mut cx).is_err());
    assert_eq!(screen.client().len(), 3);
}

#[test]
fn test_create_form_gates_submission() {
    let mut cx = AdminContext::new();
    let client: MemoryClient<Customer> = MemoryClient::new("customer");
    let mut screen = FormScreen::create(client, Customer::form_fields()).unwrap();
    assert!(!screen.is_edit());

    match screen.submit(&mut cx).unwrap() {
        SubmitOutcome::Invalid(errors) => assert_eq!(errors.len(), 5),
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(cx.notifications.is_empty());

    let form = screen.form_mut();
    form.set_input("name", "Ada");
    form.set_input("surname", "Lovelace");
    form.set_input("email", "ada@example.com");
    form.set_input("phone", "0101234567");
    form.set_input("address", "Keizersgracht 1, Amsterdam");

    let outcome = screen.submit(&mut cx).unwrap();
    let SubmitOutcome::Saved(id) = outcome else {
        panic!("expected save, got {outcome:?}");
    };
    Uuid::parse_str(&id).unwrap();

    let queued = cx.notifications.drain();
    assert_eq!(queued[0].message, "Customer created successfully");
}

#[test]
fn test_edit_form_seeds_values_and_updates_in_place() {
    let mut cx = AdminContext::new();
    let client = MemoryClient::seeded("customer", vec![customer(1)]);
    let existing = client.get_all().data.unwrap().remove(0);
    let id = existing.id.unwrap();

    let mut screen = FormScreen::edit(client, Customer::form_fields(), existing).unwrap();
    assert!(screen.is_edit());
    assert_eq!(screen.form().input_text("name"), "Customer 01");

    screen.form_mut().set_input("name", "Johanna");
    let outcome = screen.submit(&mut cx).unwrap();
    assert_eq!(outcome, SubmitOutcome::Saved(id.to_string()));

    let queued = cx.notifications.drain();
    assert_eq!(queued[0].message, "Customer updated successfully");
}

#[test]
fn test_submit_against_down_backend_is_rejected_not_lost() {
    let mut cx = AdminContext::new();
    let mut screen = FormScreen::create(DownClient, Customer::form_fields()).unwrap();

    let form = screen.form_mut();
    form.set_input("name", "Ada");
    form.set_input("surname", "Lovelace");
    form.set_input("email", "ada@example.com");
    form.set_input("phone", "0101234567");
    form.set_input("address", "Keizersgracht 1, Amsterdam");

    assert_eq!(screen.submit(&mut cx).unwrap(), SubmitOutcome::Rejected);
    let queued = cx.notifications.drain();
    assert_eq!(queued[0].level, NotificationLevel::Error);
    assert_eq!(queued[0].message, "service unavailable");
    assert!(!cx.loading.is_loading());
}

#[test]
fn test_list_and_form_compose_over_the_same_client() {
    let mut cx = AdminContext::new();
    let branches = vec![Branch {
        id: Some(Uuid::new_v4()),
        name: "North Hub".to_string(),
        address: "Dokweg 12, Rotterdam".to_string(),
        phone: "0107654321".to_string(),
        email: "north@freightdesk.example".to_string(),
        is_active: true,
        created_at: None,
        updated_at: None,
    }];
    let client = MemoryClient::seeded("branch", branches);
    let mut list = ListScreen::new(client.clone()).unwrap();
    list.refresh(&mut cx);
    assert_eq!(list.view().rows().len(), 1);

    let mut form = FormScreen::create(client, Branch::form_fields()).unwrap();
    let engine = form.form_mut();
    engine.set_input("name", "South Hub");
    engine.set_input("address", "Veemarkt 8, Utrecht");
    engine.set_input("phone", "0301234567");
    engine.set_input("email", "south@freightdesk.example");
    assert!(matches!(
        form.submit(&mut cx).unwrap(),
        SubmitOutcome::Saved(_)
    ));
}

#[test]
fn test_screen_columns_match_entity_projection() {
    let record = customer(7).to_record();
    for column in Customer::columns() {
        assert!(
            record.contains(&column.key),
            "column '{}' missing from record projection",
            column.key
        );
    }
    let rebuilt = Customer::from_values(&customer(7).form_values(), None).unwrap();
    assert_eq!(rebuilt.name, "Customer 07");
}
