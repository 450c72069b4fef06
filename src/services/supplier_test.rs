use super::*;
use crate::state::test_helpers::{dummy_supplier, full_draft};
use crate::store::test_helpers::{FailingStore, TempSlot};
use crate::store::{JsonFileStore, MemoryStore};

#[test]
fn validate_blank_name_wins_even_if_all_fields_blank() {
    let draft = Draft::default();
    assert_eq!(validate(&draft), Err(BlankField::Name));
}

#[test]
fn validate_checks_fields_in_fixed_order() {
    let mut draft = Draft { name: "Acme".to_string(), ..Draft::default() };
    assert_eq!(validate(&draft), Err(BlankField::Address));

    draft.address = "1 Main".to_string();
    assert_eq!(validate(&draft), Err(BlankField::Phone));

    draft.phone = "555".to_string();
    assert_eq!(validate(&draft), Ok(()));
}

#[test]
fn blank_field_messages_and_tags() {
    assert_eq!(BlankField::Name.message(), "Supplier name is blank");
    assert_eq!(BlankField::Name.tag(), "name");
    assert_eq!(BlankField::Address.tag(), "address");
    assert_eq!(BlankField::Phone.tag(), "phone");
}

#[test]
fn create_appends_one_record_with_fresh_id() {
    let store = MemoryStore::new();
    let mut suppliers = vec![dummy_supplier("Globex")];
    let existing_id = suppliers[0].id;

    let record = create(&store, &mut suppliers, &full_draft()).unwrap();

    assert_eq!(suppliers.len(), 2);
    assert_ne!(record.id, existing_id);
    assert_eq!(record.name, "Acme");
    assert_eq!(record.address, "1 Main");
    assert_eq!(record.phone, "555");
    assert_eq!(suppliers[1], record);
}

#[test]
fn create_persists_the_whole_list() {
    let store = MemoryStore::new();
    let mut suppliers = Vec::new();

    create(&store, &mut suppliers, &full_draft()).unwrap();

    assert_eq!(store.load(), suppliers);
}

#[test]
fn create_failed_write_leaves_list_untouched() {
    let store = FailingStore;
    let mut suppliers = vec![dummy_supplier("Globex")];

    let result = create(&store, &mut suppliers, &full_draft());

    assert!(matches!(result, Err(SupplierError::Store(_))));
    assert_eq!(suppliers.len(), 1);
}

#[test]
fn update_changes_only_the_target_record() {
    let store = MemoryStore::new();
    let mut suppliers = vec![
        dummy_supplier("Acme"),
        dummy_supplier("Globex"),
        dummy_supplier("Initech"),
    ];
    let before = suppliers.clone();
    let target = suppliers[1].id;

    let draft = Draft {
        id: Some(target),
        name: "Globex Corp".to_string(),
        address: "9 Elm".to_string(),
        phone: "555-0199".to_string(),
    };
    let record = update(&store, &mut suppliers, target, &draft).unwrap();

    assert_eq!(suppliers.len(), 3);
    assert_eq!(record.id, target);
    assert_eq!(suppliers[0], before[0]);
    assert_eq!(suppliers[2], before[2]);
    assert_eq!(suppliers[1].name, "Globex Corp");
    assert_eq!(suppliers[1].address, "9 Elm");
    assert_eq!(suppliers[1].phone, "555-0199");
    assert_eq!(store.load(), suppliers);
}

#[test]
fn update_missing_id_is_not_found_and_mutates_nothing() {
    let store = MemoryStore::new();
    let mut suppliers = vec![dummy_supplier("Acme")];
    store.save_all(&suppliers).unwrap();
    let before = suppliers.clone();

    let missing = uuid::Uuid::new_v4();
    let draft = Draft { id: Some(missing), ..full_draft() };
    let result = update(&store, &mut suppliers, missing, &draft);

    assert!(matches!(result, Err(SupplierError::NotFound(id)) if id == missing));
    assert_eq!(suppliers, before);
    assert_eq!(store.load(), before);
}

#[test]
fn delete_removes_exactly_one_and_preserves_order() {
    let store = MemoryStore::new();
    let mut suppliers = vec![
        dummy_supplier("Acme"),
        dummy_supplier("Globex"),
        dummy_supplier("Initech"),
    ];
    let first = suppliers[0].clone();
    let third = suppliers[2].clone();
    let target = suppliers[1].id;

    delete(&store, &mut suppliers, target).unwrap();

    assert_eq!(suppliers, vec![first, third]);
    assert_eq!(store.load(), suppliers);
}

#[test]
fn delete_unknown_id_rewrites_slot_and_succeeds() {
    let store = MemoryStore::new();
    let mut suppliers = vec![dummy_supplier("Acme")];
    let before = suppliers.clone();

    delete(&store, &mut suppliers, uuid::Uuid::new_v4()).unwrap();

    assert_eq!(suppliers, before);
    assert_eq!(store.load(), before);
}

#[test]
fn delete_all_empties_list_and_removes_slot() {
    let store = MemoryStore::new();
    let mut suppliers = vec![dummy_supplier("Acme"), dummy_supplier("Globex")];
    store.save_all(&suppliers).unwrap();

    delete_all(&store, &mut suppliers).unwrap();

    assert!(suppliers.is_empty());
    assert!(!store.slot_exists());
}

#[test]
fn delete_all_removes_file_slot() {
    let slot = TempSlot::new();
    let store = JsonFileStore::new(slot.path());
    let mut suppliers = vec![dummy_supplier("Acme")];
    store.save_all(&suppliers).unwrap();

    delete_all(&store, &mut suppliers).unwrap();

    assert!(suppliers.is_empty());
    assert!(!slot.path().exists());
}

#[test]
fn delete_all_failed_clear_leaves_list_untouched() {
    let store = FailingStore;
    let mut suppliers = vec![dummy_supplier("Acme")];

    let result = delete_all(&store, &mut suppliers);

    assert!(matches!(result, Err(SupplierError::Store(_))));
    assert_eq!(suppliers.len(), 1);
}
