use pretty_assertions::assert_eq;
use std::fs;
use stockroom::catalog::Loader;
use stockroom::report::Console;
use stockroom::script::{Script, ScriptRunner, Step};
use stockroom::{Catalog, Record};
use tempfile::tempdir;

const SOURCE: &str = "\
57353,Camera SBBRN,509.87,Electronics
43218,Smartphone ILGCU,726.41,Electronics
12001,T-shirt ZKQXA, 19.99, Clothing
";

fn run_script(catalog: &mut Catalog, script: &Script) -> (usize, String, String) {
    let mut runner = ScriptRunner::new(Console::new(Vec::new(), Vec::new()));
    let summary = runner.run(catalog, script).unwrap();
    let (out, err) = runner.into_console().into_parts();
    (
        summary.not_found,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_default_script_end_to_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("product_data.txt");
    fs::write(&path, SOURCE).unwrap();

    let outcome = Loader::new().load_file(&path).unwrap();
    let mut catalog = Catalog::from_records(outcome.records);
    let (not_found, out, err) = run_script(&mut catalog, &Script::default());

    assert_eq!(not_found, 0);
    assert_eq!(err, "");

    let (before_sort, after_sort) = out.split_once("Time taken for sorting: ").unwrap();
    assert_eq!(
        before_sort,
        "All Products:
ID: 57353\tName: Camera SBBRN\tPrice: 509.87\tCategory: Electronics
ID: 43218\tName: Smartphone ILGCU\tPrice: 726.41\tCategory: Electronics
ID: 12001\tName: T-shirt ZKQXA\tPrice: 19.99\tCategory: Clothing
Inserting product:
ID: 12345\tName: New Product\tPrice: 99.99\tCategory: New Category
Product inserted successfully.
Updating product with ID 12345:
Old details:
ID: 12345\tName: New Product\tPrice: 99.99\tCategory: New Category
Updated details:
ID: 12345\tName: Updated Product\tPrice: 199.99\tCategory: Updated Category
Product updated successfully.
Deleting product with ID 12345:
Product deleted successfully.
Searching for product with ID 57353:
Product found:
ID: 57353\tName: Camera SBBRN\tPrice: 509.87\tCategory: Electronics
Searching for product with Name \"Smartphone ILGCU\":
Product found:
ID: 43218\tName: Smartphone ILGCU\tPrice: 726.41\tCategory: Electronics
Sorting products by price...
"
    );

    let (_, final_listing) = after_sort.split_once(" microseconds\n").unwrap();
    assert_eq!(
        final_listing,
        "
After sorting:
ID: 12001\tName: T-shirt ZKQXA\tPrice: 19.99\tCategory: Clothing
ID: 57353\tName: Camera SBBRN\tPrice: 509.87\tCategory: Electronics
ID: 43218\tName: Smartphone ILGCU\tPrice: 726.41\tCategory: Electronics
"
    );
}

#[test]
fn test_missing_keys_go_to_diagnostics() {
    let mut catalog = Catalog::from_records(vec![Record::new(1, "Widget", 9.99, "Tools")]);
    let script = Script::new(vec![
        Step::Update {
            id: 2,
            name: "Nothing".to_string(),
            price: 1.0,
            category: "None".to_string(),
        },
        Step::Delete { id: 2 },
        Step::FindById { id: 2 },
        Step::FindByName {
            name: "widget".to_string(),
        },
    ]);

    let (not_found, out, err) = run_script(&mut catalog, &script);

    assert_eq!(not_found, 4);
    assert_eq!(
        err,
        "Product with ID 2 not found for updating.
Product with ID 2 not found for deletion.
Product with ID 2 not found.
Product with Name \"widget\" not found.
"
    );
    assert!(!out.contains("successfully"));
    assert_eq!(catalog.records(), &[Record::new(1, "Widget", 9.99, "Tools")]);
}

#[test]
fn test_script_from_yaml() {
    let yaml = r#"
- type: insert
  id: 8
  name: Desk
  price: 120.0
  category: Furniture
- type: insert
  id: 9
  name: Stool
  price: 30.0
  category: Furniture
- type: sort_by_price
- type: display
  title: Sorted
"#;
    let script: Script = serde_yaml_ng::from_str(yaml).unwrap();
    let mut catalog = Catalog::new();

    let (_, out, _) = run_script(&mut catalog, &script);

    assert!(out.ends_with(
        "\nSorted:
ID: 9\tName: Stool\tPrice: 30\tCategory: Furniture
ID: 8\tName: Desk\tPrice: 120\tCategory: Furniture
"
    ));
}
