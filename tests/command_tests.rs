use supplierctl::cli::{AddArgs, EditArgs};
use supplierctl::cmd::{
    AddSupplierCommand, ClearCommand, DeleteSupplierCommand, EditSupplierCommand,
    FindSupplierCommand, ListSupplierCommand,
};
use supplierctl::core::{Index, Supplier, SupplierFilter, SupplierStatus};
use supplierctl::error::SupplierError;
use supplierctl::model::{AddressBookModel, Model};

fn supplier(name: &str, status: SupplierStatus) -> Supplier {
    Supplier::new(
        name.to_string(),
        "5551234".to_string(),
        format!("{}@example.com", name.to_ascii_lowercase()),
        "Co".to_string(),
        "Parts".to_string(),
        status,
    )
}

fn add_args(name: &str) -> AddArgs {
    AddArgs {
        name: name.to_string(),
        phone: "5551234".to_string(),
        email: format!("{}@example.com", name.to_ascii_lowercase()),
        company: "Co".to_string(),
        product: "Parts".to_string(),
        status: None,
    }
}

fn edit_args(index: usize) -> EditArgs {
    EditArgs {
        index,
        name: None,
        phone: None,
        email: None,
        company: None,
        product: None,
        status: None,
    }
}

#[test]
fn test_add_appends_and_defaults_to_active() {
    let mut model = AddressBookModel::new(Vec::new());
    let (cmd, warnings) = AddSupplierCommand::from_args(&add_args("Alice")).unwrap();
    assert!(warnings.is_empty());

    let result = cmd.execute(&mut model).unwrap();

    assert!(result.message.starts_with("New supplier added: Alice;"));
    assert_eq!(model.supplier_list().len(), 1);
    assert_eq!(model.supplier_list()[0].status, SupplierStatus::Active);
}

#[test]
fn test_add_duplicate_name_rejected() {
    let mut model = AddressBookModel::new(vec![supplier("Alice", SupplierStatus::Active)]);
    let (cmd, _) = AddSupplierCommand::from_args(&add_args("alice")).unwrap();

    let err = cmd.execute(&mut model).unwrap_err();
    assert!(matches!(err, SupplierError::DuplicateSupplier { .. }));
    assert_eq!(model.supplier_list().len(), 1);
}

#[test]
fn test_add_surfaces_validation_warnings() {
    let mut args = add_args("Alice");
    args.phone = "111".to_string();
    args.email = "a@x".to_string();

    let (_, warnings) = AddSupplierCommand::from_args(&args).unwrap();
    assert_eq!(warnings.len(), 2);
}

#[test]
fn test_add_invalid_phone_rejected() {
    let mut args = add_args("Alice");
    args.phone = "call-me".to_string();

    let err = AddSupplierCommand::from_args(&args).unwrap_err();
    assert!(matches!(err, SupplierError::InvalidArgument(_)));
}

#[test]
fn test_edit_changes_named_fields_only() {
    let mut model = AddressBookModel::new(vec![supplier("Alice", SupplierStatus::Inactive)]);
    let mut args = edit_args(1);
    args.phone = Some("7778888".to_string());

    let (cmd, _) = EditSupplierCommand::from_args(&args).unwrap();
    let result = cmd.execute(&mut model).unwrap();

    let edited = &model.supplier_list()[0];
    assert_eq!(edited.phone, "7778888");
    assert_eq!(edited.name, "Alice");
    assert_eq!(edited.status, SupplierStatus::Inactive);
    assert!(result.message.starts_with("Edited Supplier: Alice;"));
}

#[test]
fn test_edit_requires_some_field() {
    let err = EditSupplierCommand::from_args(&edit_args(1)).unwrap_err();
    match err {
        SupplierError::InvalidArgument(msg) => {
            assert!(msg.contains("At least one field"));
        }
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_edit_rename_collision_rejected() {
    let mut model = AddressBookModel::new(vec![
        supplier("Alice", SupplierStatus::Active),
        supplier("Bob", SupplierStatus::Active),
    ]);
    let mut args = edit_args(2);
    args.name = Some("Alice".to_string());

    let (cmd, _) = EditSupplierCommand::from_args(&args).unwrap();
    let err = cmd.execute(&mut model).unwrap_err();
    assert!(matches!(err, SupplierError::DuplicateSupplier { .. }));
}

#[test]
fn test_edit_out_of_range_index() {
    let mut model = AddressBookModel::new(Vec::new());
    let mut args = edit_args(1);
    args.status = Some(SupplierStatus::Inactive);

    let (cmd, _) = EditSupplierCommand::from_args(&args).unwrap();
    let err = cmd.execute(&mut model).unwrap_err();
    assert!(matches!(err, SupplierError::InvalidIndex));
}

#[test]
fn test_delete_removes_record_and_keeps_filter() {
    let mut model = AddressBookModel::new(vec![
        supplier("Alice", SupplierStatus::Active),
        supplier("Bob", SupplierStatus::Active),
    ]);
    model.update_filtered_supplier_list(SupplierFilter::NameContains(vec!["bob".to_string()]));

    let cmd = DeleteSupplierCommand::new(Index::from_one_based(1).unwrap());
    let result = cmd.execute(&mut model).unwrap();

    assert!(result.message.starts_with("Deleted Supplier: Bob;"));
    assert_eq!(model.supplier_list().len(), 1);
    assert_eq!(model.supplier_list()[0].name, "Alice");
    // the narrowed view stays narrowed, now empty
    assert!(model.filtered_supplier_list().is_empty());
}

#[test]
fn test_find_reports_match_count_and_listing() {
    let mut model = AddressBookModel::new(vec![
        supplier("Alice", SupplierStatus::Active),
        supplier("Bob", SupplierStatus::Active),
        supplier("Alice Pauline", SupplierStatus::Inactive),
    ]);

    let cmd = FindSupplierCommand::new(vec!["alice".to_string()]).unwrap();
    let result = cmd.execute(&mut model).unwrap();

    assert_eq!(result.message, "2 suppliers listed!");
    let listed = result.listed.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|s| s.name.contains("Alice")));
}

#[test]
fn test_find_rejects_blank_keywords() {
    let err = FindSupplierCommand::new(vec!["  ".to_string()]).unwrap_err();
    assert!(matches!(err, SupplierError::InvalidArgument(_)));
}

#[test]
fn test_list_resets_narrowed_view() {
    let mut model = AddressBookModel::new(vec![
        supplier("Alice", SupplierStatus::Active),
        supplier("Bob", SupplierStatus::Active),
    ]);
    model.update_filtered_supplier_list(SupplierFilter::NameContains(vec!["bob".to_string()]));

    let result = ListSupplierCommand::execute(&mut model).unwrap();

    assert_eq!(result.message, "Listed all suppliers");
    assert_eq!(result.listed.unwrap().len(), 2);
    assert_eq!(model.filtered_supplier_list().len(), 2);
}

#[test]
fn test_clear_empties_the_book() {
    let mut model = AddressBookModel::new(vec![supplier("Alice", SupplierStatus::Active)]);

    let result = ClearCommand::execute(&mut model).unwrap();

    assert_eq!(result.message, "Supplier book has been cleared!");
    assert!(model.supplier_list().is_empty());
    assert!(model.filtered_supplier_list().is_empty());
}
