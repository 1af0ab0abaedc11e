use resto_pos::utils::validation::Validate;
use resto_pos::{CatalogSource, Category, FileCatalog, MenuFile, OrderSession, PosError};
use std::io::Write;
use tempfile::NamedTempFile;

const MENU_TOML: &str = r#"
[menu]
name = "Quán Ngon"
currency = "VND"

[[menu.items]]
id = "1"
name = "Phở Bò"
price = 75000
category = "main"

[[menu.items]]
id = "2"
name = "Gỏi Cuốn"
price = 45000
category = "appetizer"

[[menu.items]]
id = "3"
name = "Trà Đá"
price = 10000
category = "drinks"
"#;

fn write_menu(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_menu_file_round_trip_from_disk() {
    let file = write_menu(MENU_TOML);

    let menu = MenuFile::from_file(file.path()).unwrap();
    assert_eq!(menu.menu.name, "Quán Ngon");
    assert!(menu.validate().is_ok());

    let catalog = menu.into_catalog();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.entry("2").unwrap().category, Category::Appetizer);
}

#[test]
fn test_file_catalog_feeds_a_session() {
    let file = write_menu(MENU_TOML);
    let source = FileCatalog::new(file.path().to_str().unwrap());

    let mut session = OrderSession::start(&source).unwrap();
    session.select_table("T01");
    session.add_item("1");
    session.add_item("3");

    assert_eq!(session.total(), 85_000);
    assert!(session.can_confirm());
}

#[test]
fn test_file_catalog_rejects_invalid_menu() {
    let duplicated = MENU_TOML.replace("id = \"3\"", "id = \"1\"");
    let file = write_menu(&duplicated);
    let source = FileCatalog::new(file.path().to_str().unwrap());

    let err = source.load().unwrap_err();
    assert!(matches!(err, PosError::InvalidConfigValueError { .. }));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let source = FileCatalog::new("/nonexistent/menu.toml");
    let err = source.load().unwrap_err();
    assert!(matches!(err, PosError::IoError(_)));
}

#[test]
fn test_malformed_toml_is_a_menu_error() {
    let file = write_menu("[menu\nname = broken");
    let source = FileCatalog::new(file.path().to_str().unwrap());

    let err = source.load().unwrap_err();
    assert!(matches!(err, PosError::MenuParseError { .. }));
}
