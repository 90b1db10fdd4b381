use std::process::Command;

fn run_xtask(arg: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg(arg)
        .output()
        .expect("xtask binary runs")
}

#[test]
fn help_lists_the_schema_commands() {
    let output = run_xtask("help");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("emit-schemas"));
    assert!(stderr.contains("validate-schemas"));
}

#[test]
fn schema_ids_cover_the_dto_surface() {
    let output = run_xtask("print-schema-ids");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in [
        "sandguard.symbol.v1",
        "sandguard.typeref.v1",
        "sandguard.profile.v1",
    ] {
        assert!(stdout.contains(id), "missing schema id {id}");
    }
}

#[test]
fn unknown_commands_exit_nonzero() {
    let output = run_xtask("frobnicate");
    assert!(!output.status.success());
}
