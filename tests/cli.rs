use assert_cmd::Command;
use predicates::prelude::*;

fn carteira() -> Command {
    Command::cargo_bin("carteira").unwrap()
}

fn write_minimal_csv(dir: &std::path::Path, name: &str, rows: &[(&str, &str)]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut content = String::from("Cliente,Dt. Última Compra\n");
    for (client, date) in rows {
        content.push_str(&format!("{client},{date}\n"));
    }
    std::fs::write(&path, &content).unwrap();
    path
}

#[test]
fn import_summarizes_clients_per_month() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_minimal_csv(
        dir.path(),
        "clientes.csv",
        &[
            ("Padaria Central", "15/01/2025"),
            ("Mercado Bom Preço", "20/01/2025"),
            ("Armazém São João", "02/12/2024"),
        ],
    );

    carteira()
        .args(["import", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 clients imported"))
        .stdout(predicate::str::contains("Janeiro"))
        .stdout(predicate::str::contains("Dezembro"));
}

#[test]
fn import_reports_no_clients_for_all_invalid_rows() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_minimal_csv(
        dir.path(),
        "clientes.csv",
        &[("", "15/01/2025"), ("Padaria", "32/01/2025")],
    );

    carteira()
        .args(["import", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No clients found"));
}

#[test]
fn import_rejects_unsupported_file_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clientes.pdf");
    std::fs::write(&path, "not a spreadsheet").unwrap();

    carteira()
        .args(["import", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"));
}

#[test]
fn import_fails_on_missing_file() {
    carteira()
        .args(["import", "/nonexistent/clientes.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn template_writes_empty_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("template_clientes.xlsx");

    carteira()
        .args(["template", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(out.exists());
}

#[test]
fn export_then_import_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_minimal_csv(dir.path(), "clientes.csv", &[("Padaria Central", "15/01/2025")]);
    let out = dir.path().join("clientes_exportados.xlsx");

    carteira()
        .args(["export", csv.to_str().unwrap(), "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 clients exported"));

    carteira()
        .args(["import", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 clients imported"))
        .stdout(predicate::str::contains("Janeiro"));
}

#[test]
fn comment_updates_one_client_and_reexports() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_minimal_csv(
        dir.path(),
        "clientes.csv",
        &[("Padaria Central", "15/01/2025"), ("Mercado Bom Preço", "20/01/2025")],
    );
    let out = dir.path().join("clientes_exportados.csv");

    carteira()
        .args([
            "comment",
            csv.to_str().unwrap(),
            "--id",
            "client-2",
            "--text",
            "ligar na sexta",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated comment for client-2"));

    carteira()
        .args(["board", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ligar na sexta"));
}

#[test]
fn comment_with_unknown_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_minimal_csv(dir.path(), "clientes.csv", &[("Padaria Central", "15/01/2025")]);
    let out = dir.path().join("out.csv");

    carteira()
        .args([
            "comment",
            csv.to_str().unwrap(),
            "--id",
            "client-99",
            "--text",
            "x",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No client with id"));
}
