//! End-to-end CLI tests
//!
//! Each test runs the binary with an isolated config directory so user
//! settings never leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fatora(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fatora").unwrap();
    cmd.env("FATORA_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn suggest_direct_match() {
    let dir = TempDir::new().unwrap();
    fatora(&dir)
        .args(["suggest", "برشام"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches for 'برشام':"))
        .stdout(predicate::str::contains("برشام كيلو"));
}

#[test]
fn suggest_falls_back_to_nearest_names() {
    let dir = TempDir::new().unwrap();
    fatora(&dir)
        .args(["suggest", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Close matches for 'xyz':"))
        .stdout(predicate::str::contains("  5. "));
}

#[test]
fn suggest_uses_custom_items_from_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"custom_items": ["فلتر زيت تويوتا"]}"#,
    )
    .unwrap();

    fatora(&dir)
        .args(["suggest", "فلتر زيت"])
        .assert()
        .success()
        .stdout(predicate::str::contains("فلتر زيت تويوتا"));
}

#[test]
fn catalog_lists_entries() {
    let dir = TempDir::new().unwrap();
    fatora(&dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("برشام كيلو"))
        .stdout(predicate::str::contains("168 of 168 entries"));
}

#[test]
fn catalog_search_narrows_output() {
    let dir = TempDir::new().unwrap();
    fatora(&dir)
        .args(["catalog", "--search", "برشام"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 168 entries"));
}

#[test]
fn invoice_new_prints_preview_with_total() {
    let dir = TempDir::new().unwrap();
    fatora(&dir)
        .args([
            "invoice",
            "new",
            "--customer",
            "محمد أحمد",
            "--date",
            "2025-03-14",
            "--item",
            "برشام كيلو:150.50:2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("محمد أحمد"))
        .stdout(predicate::str::contains("برشام كيلو"))
        .stdout(predicate::str::contains("Total: 301.00 جنيه"));
}

#[test]
fn invoice_new_requires_items() {
    let dir = TempDir::new().unwrap();
    fatora(&dir)
        .args(["invoice", "new", "--customer", "محمد أحمد"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one item"));
}

#[test]
fn invoice_new_rejects_bad_item_spec() {
    let dir = TempDir::new().unwrap();
    fatora(&dir)
        .args([
            "invoice",
            "new",
            "--customer",
            "محمد",
            "--item",
            "برشام كيلو",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name:price:quantity"));
}

#[test]
fn invoice_roundtrips_through_json_preview() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("invoice.json");

    fatora(&dir)
        .args([
            "invoice",
            "new",
            "--customer",
            "سارة علي",
            "--phone",
            "01001234567",
            "--date",
            "2025-03-14",
            "--item",
            "جلبة سوستة سوزوكي:25.50:2",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    fatora(&dir)
        .args(["invoice", "preview", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("سارة علي"))
        .stdout(predicate::str::contains("01001234567"))
        .stdout(predicate::str::contains("Total: 51.00 جنيه"));
}

#[test]
fn history_filters_by_search() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("invoices.json");
    std::fs::write(
        &file,
        r#"[
            {
                "number": "A1B2C3",
                "customer_name": "محمد أحمد",
                "date": "2025-03-01",
                "items": [{"name": "برشام كيلو", "unit_price": 15000, "quantity": 1}]
            },
            {
                "number": "D4E5F6",
                "customer_name": "سارة علي",
                "date": "2025-03-10",
                "items": [{"name": "بنز 22 رصاصي", "unit_price": 1000, "quantity": 2}]
            }
        ]"#,
    )
    .unwrap();

    fatora(&dir)
        .args(["history", file.to_str().unwrap(), "--search", "سارة"])
        .assert()
        .success()
        .stdout(predicate::str::contains("D4E5F6"))
        .stdout(predicate::str::contains("1 invoice(s)"))
        .stdout(predicate::str::contains("A1B2C3").not());
}

#[test]
fn history_rejects_unknown_sort() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("invoices.json");
    std::fs::write(&file, "[]").unwrap();

    fatora(&dir)
        .args(["history", file.to_str().unwrap(), "--sort", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    fatora(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fatora Configuration"))
        .stdout(predicate::str::contains("Currency label: جنيه"));
}
