use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE: &str = "50000\n\
                      Groceries,20000\n\
                      Entertainment,10000\n\
                      -\n\
                      5,1,2020,Pizza,5000,Groceries\n\
                      6,1,2020,Movie,1000,Entertainment\n";

fn bucket(data_dir: &Path) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("bucket")?;
    cmd.env("BUCKET_BUDGET_DATA_DIR", data_dir);
    Ok(cmd)
}

#[test]
fn summary_reads_existing_budget_file() -> Result<(), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("budget.txt");
    fs::write(&file, SAMPLE)?;

    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Groceries")
                .and(predicate::str::contains("$150.00"))
                .and(predicate::str::contains("Total budget:    $500.00"))
                .and(predicate::str::contains("Spent:           $60.00"))
                .and(predicate::str::contains("Remaining:       $440.00")),
        );
    Ok(())
}

#[test]
fn txn_list_orders_by_amount() -> Result<(), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("budget.txt");
    fs::write(&file, SAMPLE)?;

    let output = bucket(temp.path())?
        .args(["txn", "list", "--file"])
        .arg(&file)
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let movie = stdout.find("Movie").ok_or("Movie missing")?;
    let pizza = stdout.find("Pizza").ok_or("Pizza missing")?;
    assert!(movie < pizza);
    Ok(())
}

#[test]
fn changes_are_saved_to_the_file() -> Result<(), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("budget.txt");

    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["budget", "set-total", "300"])
        .assert()
        .success();
    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["category", "add", "Health", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: Health ($30.00)"));
    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["txn", "add", "Health", "25", "Gym", "--date", "2024-02-01"])
        .args(["--repeats", "monthly"])
        .assert()
        .success();

    let saved = fs::read_to_string(&file)?;
    assert!(saved.starts_with("30000\n"));
    assert!(saved.contains("Health,3000\n"));
    assert!(saved.contains("1,2,2024,Gym,2500,Health"));

    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym").and(predicate::str::contains("Monthly")));
    Ok(())
}

#[test]
fn duplicate_category_fails() -> Result<(), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("budget.txt");
    fs::write(&file, SAMPLE)?;

    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["category", "add", "Groceries", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category already exists: Groceries"));

    assert_eq!(fs::read_to_string(&file)?, SAMPLE);
    Ok(())
}

#[test]
fn purchase_in_unknown_category_fails() -> Result<(), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("budget.txt");
    fs::write(&file, SAMPLE)?;

    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["txn", "add", "Transport", "9", "Taxi", "--date", "2020-01-07"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Transport does not currently exist in the budget!",
        ));
    Ok(())
}

#[test]
fn txn_remove_by_listing_number() -> Result<(), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("budget.txt");
    fs::write(&file, SAMPLE)?;

    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["txn", "remove", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza"));

    let saved = fs::read_to_string(&file)?;
    assert!(!saved.contains("Pizza"));
    assert!(saved.contains("Movie"));
    Ok(())
}

#[test]
fn malformed_file_is_reported() -> Result<(), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("budget.txt");
    fs::write(&file, "not a number\n-\n")?;

    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File format error"));
    Ok(())
}

#[test]
fn history_lists_recorded_changes() -> Result<(), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("budget.txt");

    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["category", "add", "Food", "100"])
        .assert()
        .success();

    bucket(temp.path())?
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
    Ok(())
}

#[test]
fn negative_limits_and_refunds_are_accepted() -> Result<(), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("budget.txt");
    fs::write(&file, SAMPLE)?;

    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["category", "add", "Debt", "-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: Debt (-$10.00)"));
    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["txn", "add", "Groceries", "-2.50", "Refund", "--date", "2020-01-08"])
        .assert()
        .success();

    let saved = fs::read_to_string(&file)?;
    assert!(saved.contains("Debt,-1000\n"));
    assert!(saved.contains("8,1,2020,Refund,-250,Groceries\n"));
    Ok(())
}

#[test]
fn category_arguments_are_trimmed() -> Result<(), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("budget.txt");
    fs::write(&file, SAMPLE)?;

    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["txn", "add", " Groceries", "3", "Milk", "--date", "2020-01-09"])
        .assert()
        .success();
    bucket(temp.path())?
        .arg("--file")
        .arg(&file)
        .args(["category", "remove", "Entertainment "])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted category: Entertainment (1 purchases removed)",
        ));

    let saved = fs::read_to_string(&file)?;
    assert!(saved.contains("9,1,2020,Milk,300,Groceries\n"));
    assert!(!saved.contains("Entertainment"));
    Ok(())
}
