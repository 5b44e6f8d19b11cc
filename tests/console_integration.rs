use std::io::Write;
use std::process::{Command, Stdio};

fn run_console(input: &[u8]) -> String {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    child.stdin.as_mut().unwrap().write_all(input).unwrap();
    let output = child.wait_with_output().expect("failed to read output");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn console_smoke_test_plays_and_undoes() {
    let stdout = run_console(b"e2e4\nmoves e7\nstatus\nundo\nstatus\nquit\n");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "ok e4 ongoing");
    assert_eq!(lines[1], "moves e6 e5");
    assert_eq!(lines[2], "Black to move: ongoing");
    assert_eq!(lines[3], "undone");
    assert_eq!(lines[4], "White to move: ongoing");
}

#[test]
fn console_reports_mate_and_blocks_moves() {
    let stdout = run_console(b"f2f3\ne7e5\ng2g4\nd8h4\na2a3\nundo\na2a3\n");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[3], "ok Qh4 checkmate, Black wins");
    assert!(lines[4].starts_with("illegal Game is over"));
    assert_eq!(lines[5], "undone");
    assert!(lines[6].starts_with("illegal Move a2a3 is not legal"));
}

#[test]
fn console_survives_bad_input_until_eof() {
    let stdout = run_console(b"hello\nnew 9/8\nnew\nboard\n");
    assert!(stdout.contains("error: Unknown command 'hello'"));
    assert!(stdout.contains("error: Invalid placement"));
    assert!(stdout.contains("ok rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"));
    assert!(stdout.contains("8 | r n b q k b n r |"));
}

#[test]
fn game_status_binary_reports_checkmate() {
    let exe = env!("CARGO_BIN_EXE_game_status");
    let output = Command::new(exe)
        .args(["f2f3", "e7e5", "g2g4", "d8h4"])
        .output()
        .expect("failed to run game_status");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("side_to_move: White"));
    assert!(stdout.contains("status: checkmate, Black wins"));
    assert!(stdout.contains("legal_moves: 0"));
    assert!(stdout.contains("notation: f3 e5 g4 Qh4"));
}

#[test]
fn game_status_binary_rejects_illegal_move() {
    let exe = env!("CARGO_BIN_EXE_game_status");
    let output = Command::new(exe)
        .args(["e2e5"])
        .output()
        .expect("failed to run game_status");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not legal"));
}
