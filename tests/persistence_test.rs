use anyhow::Result;
use small_inventory::core::persistence::{load, save};
use small_inventory::utils::logger::{default_filter, subscriber_with_writer, LogBuffer, LogFormat};
use small_inventory::Stock;
use tempfile::TempDir;

fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let buffer = LogBuffer::new();
    let subscriber = subscriber_with_writer(default_filter("info"), LogFormat::Line, buffer.clone());
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, buffer.lines())
}

#[test]
fn test_save_then_load_reproduces_stock() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("inventory.json");

    let mut stock = Stock::new();
    stock.increase("widget", 40);
    stock.increase("ünïcødé gadget", 1);
    stock.increase("\"quoted\" item", 3);
    stock.increase("big", u64::MAX);
    stock.increase("apple", 2);

    assert!(save(&stock, &path));
    let reloaded = load(&path);

    assert_eq!(reloaded, stock);
    let items: Vec<&str> = reloaded.items().collect();
    assert_eq!(
        items,
        vec!["widget", "ünïcødé gadget", "\"quoted\" item", "big", "apple"]
    );
    Ok(())
}

#[test]
fn test_empty_stock_round_trips() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("empty.json");

    assert!(save(&Stock::new(), &path));
    assert_eq!(std::fs::read_to_string(&path)?, "{}\n");

    let (stock, logs) = capture(|| load(&path));
    assert!(stock.is_empty());
    assert!(logs.iter().any(|l| l.contains(" - INFO - Data loaded successfully")));
    Ok(())
}

#[test]
fn test_missing_file_loads_empty_and_logs_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("nope.json");

    let (stock, logs) = capture(|| load(&path));

    assert!(stock.is_empty());
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains(" - ERROR - File not found: "));
    Ok(())
}

#[test]
fn test_blank_file_loads_empty_with_warning() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("blank.json");
    std::fs::write(&path, "\n\n   ")?;

    let (stock, logs) = capture(|| load(&path));

    assert!(stock.is_empty());
    assert!(logs[0].contains(" - WARNING - No data found in "));
    Ok(())
}

#[test]
fn test_malformed_files_load_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;

    for (name, body) in [
        ("truncated.json", r#"{"apple": 3"#),
        ("list.json", r#"["apple", 3]"#),
        ("negative.json", r#"{"apple": -3}"#),
        ("fraction.json", r#"{"apple": 1.5}"#),
        ("text.json", r#"{"apple": "3"}"#),
    ] {
        let path = temp_dir.path().join(name);
        std::fs::write(&path, body)?;

        let (stock, logs) = capture(|| load(&path));

        assert!(stock.is_empty(), "{} should load empty", name);
        assert!(
            logs.iter().any(|l| l.contains(" - ERROR - Error parsing data")),
            "{} should log a parse error, got {:?}",
            name,
            logs
        );
    }
    Ok(())
}

#[test]
fn test_duplicate_keys_keep_last_value_first_position() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dupes.json");
    std::fs::write(&path, r#"{"apple": 1, "pear": 2, "apple": 9}"#)?;

    let stock = load(&path);

    let entries: Vec<(&str, u64)> = stock.iter().collect();
    assert_eq!(entries, vec![("apple", 9), ("pear", 2)]);
    Ok(())
}

#[test]
fn test_save_failure_is_logged_not_raised() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // A directory cannot be overwritten as a file.
    let path = temp_dir.path().to_path_buf();

    let stock: Stock = [("apple", 1)].into_iter().collect();
    let (saved, logs) = capture(|| save(&stock, &path));

    assert!(!saved);
    assert!(logs.iter().any(|l| l.contains(" - ERROR - Error saving data")));
    Ok(())
}
