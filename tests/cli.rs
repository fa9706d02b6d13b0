use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vetsplit(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vetsplit").unwrap();
    cmd.env("VETSPLIT_DATA_DIR", data_dir.path())
        .env_remove("VETSPLIT_STORE")
        .env_remove("RUST_LOG");
    cmd
}

fn initialized() -> TempDir {
    let data_dir = TempDir::new().unwrap();
    vetsplit(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized store 'default'"));
    data_dir
}

#[test]
fn test_status_requires_init() {
    let data_dir = TempDir::new().unwrap();
    vetsplit(&data_dir)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("vetsplit init"));
}

#[test]
fn test_empty_status() {
    let data_dir = initialized();
    vetsplit(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expense:  ₩0"))
        .stdout(predicate::str::contains("No expenses recorded yet."))
        .stdout(predicate::str::contains("No payments recorded yet."));
}

#[test]
fn test_expense_and_payment_flow() {
    let data_dir = initialized();

    vetsplit(&data_dir)
        .args(["expense", "add", "300,000", "--date", "2025-01-15", "--memo", "surgery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense: ₩300,000"));

    vetsplit(&data_dir)
        .args(["payment", "add", "seunghwa", "40000", "--date", "2025-01-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from Seunghwa"));

    vetsplit(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Per person:     ₩100,000"))
        .stdout(predicate::str::contains("₩60,000 left"))
        .stdout(predicate::str::contains("₩100,000 left"))
        .stdout(predicate::str::contains("surgery"));
}

#[test]
fn test_invalid_payer_is_rejected() {
    let data_dir = initialized();

    vetsplit(&data_dir)
        .args(["payment", "add", "Mom", "10000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Seunghwa"));

    vetsplit(&data_dir)
        .args(["payment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No payments recorded yet."));
}

#[test]
fn test_zero_amount_is_rejected() {
    let data_dir = initialized();

    vetsplit(&data_dir)
        .args(["expense", "add", "0"])
        .assert()
        .failure();

    vetsplit(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn test_delete_expense_by_position() {
    let data_dir = initialized();

    for (amount, memo) in [("10000", "checkup"), ("20000", "vaccination")] {
        vetsplit(&data_dir)
            .args(["expense", "add", amount, "--memo", memo])
            .assert()
            .success();
    }

    vetsplit(&data_dir)
        .args(["expense", "delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense #0"));

    vetsplit(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vaccination"))
        .stdout(predicate::str::contains("checkup").not());

    vetsplit(&data_dir)
        .args(["expense", "delete", "7"])
        .assert()
        .failure();
}

#[test]
fn test_store_override() {
    let data_dir = initialized();

    vetsplit(&data_dir)
        .args(["--store", "other", "init"])
        .assert()
        .success();
    vetsplit(&data_dir)
        .args(["--store", "other", "expense", "add", "5000"])
        .assert()
        .success();

    vetsplit(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));

    vetsplit(&data_dir)
        .args(["refresh"])
        .env("VETSPLIT_STORE", "other")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reloaded 1 expenses and 0 payments"));
}

#[test]
fn test_store_id_cannot_escape_stores_dir() {
    let data_dir = TempDir::new().unwrap();

    vetsplit(&data_dir)
        .args(["--store", "../outside", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid store id"));

    assert!(!data_dir.path().join("outside").exists());
}
