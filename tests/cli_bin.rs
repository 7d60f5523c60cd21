use std::process::{Command, Output};

fn tictactoe(args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .args(args)
        .env_remove(tictactoe::LOG_ENV)
        .output()
        .expect("failed to run tictactoe binary");
    assert!(output.status.success());
    output
}

#[test]
fn replay_subcommand_prints_text() {
    let output = tictactoe(&["replay", "--moves", "0,3,1,4,2"]);
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert_eq!(stdout, "X X X\nO O .\n. . .\nPlayer X Wins!\n");
}

#[test]
fn replay_subcommand_lists_rejections() {
    let output = tictactoe(&["replay", "--moves", "0,0"]);
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.starts_with("move 0 rejected: Cell 0 is already taken\n"));
    assert!(stdout.ends_with("Player O's Turn\n"));
}

#[test]
fn replay_subcommand_prints_json() {
    let output = tictactoe(&["replay", "--moves", "0,1,2,4,3,5,7,6,8", "--json"]);
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["status"], "It's a Tie!");
    assert_eq!(v["over"], true);
    assert!(v["winner"].is_null());
    assert_eq!(v["accepted"], 9);
    assert_eq!(v["snapshot"]["status"]["Terminal"], "Tie");
}

#[test]
fn play_subcommand_reads_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .arg("play")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to start tictactoe binary");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(b"1\n4\n2\n5\n3\nq\n")
        .expect("write moves");
    let output = child.wait_with_output().expect("wait for tictactoe");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("Player X Wins!"));
}
