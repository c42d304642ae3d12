use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::process::Command;
use std::thread;

static SCHEDULE_JSON: &str = include_str!("fixtures/schedule_single.json");
static BOXSCORE_JSON: &str = include_str!("fixtures/boxscore_yankees_mariners.json");

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

/// Serves canned stats-service responses on a loopback port so the binary
/// can run without touching the real service.
fn spawn_stats_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("stub listener should bind");
    let addr = listener.local_addr().expect("stub listener has an addr");
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            handle_connection(stream);
        }
    });
    format!("http://{addr}")
}

fn handle_connection(mut stream: TcpStream) {
    let mut reader = BufReader::new(stream.try_clone().expect("stream should clone"));
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // Drain the headers; routing only needs the request path.
    let mut line = String::new();
    while reader.read_line(&mut line).is_ok() {
        if line == "\r\n" || line.is_empty() {
            break;
        }
        line.clear();
    }

    let path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    let (status, body) = route(&path);
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len(),
    );
    let _ = stream.write_all(response.as_bytes());
}

fn route(path: &str) -> (&'static str, String) {
    if path.starts_with("/schedule") {
        return ("200 OK", SCHEDULE_JSON.to_string());
    }
    if path == "/game/718781/boxscore" {
        return ("200 OK", BOXSCORE_JSON.to_string());
    }
    if let Some(id) = path.strip_prefix("/people/") {
        return (
            "200 OK",
            format!(r#"{{"people":[{{"id":{id},"firstName":"Player","lastName":"{id}"}}]}}"#),
        );
    }
    ("404 Not Found", r#"{"message":"not found"}"#.to_string())
}

#[test]
fn one_row_csv_produces_the_full_report() {
    let base_url = spawn_stats_stub();

    let output = Command::new(env!("CARGO_BIN_EXE_scorebook"))
        .arg("--file")
        .arg(fixture_path("attendance_single.csv"))
        .arg("--year")
        .arg("2023")
        .env("STATSAPI_BASE_URL", &base_url)
        .output()
        .expect("scorebook should run");

    assert!(
        output.status.success(),
        "run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).expect("report should be utf-8");

    assert!(stdout.starts_with("SUMMARY:\n--------------------------------------\n"));
    assert!(stdout.contains("Total players seen: 5"));

    // Every rostered player with a stat line appears exactly once; the
    // bench player does not appear at all.
    for id in [543037u64, 592450, 663728, 677594, 693433] {
        assert!(
            stdout.contains(&format!("Player {id}: 1")),
            "missing appearance line for {id}"
        );
    }
    assert!(!stdout.contains("672284"));

    assert!(stdout.contains("You've seen 2 players hit 2 home runs"));
    assert!(stdout.contains("You've seen 1 players hit 1 triples"));
    assert!(stdout.contains("You've seen 1 games over the years!"));
    assert!(stdout.contains("June 1, 2023 SEA vs. NYY: 39821"));
    assert!(stdout.contains("June 1, 2023 SEA vs. NYY: 3:7"));

    // Sections arrive in the summary's fixed order.
    let sections = [
        "Most seen players: ",
        "Biggest power hitters: ",
        "Fastest around the basepaths: ",
        "Most attended games: ",
        "Least attended games: ",
        "Longest games attended: ",
        "Shortest games attended: ",
    ];
    let mut cursor = 0;
    for section in sections {
        let at = stdout[cursor..]
            .find(section)
            .unwrap_or_else(|| panic!("section {section:?} missing or out of order"));
        cursor += at + section.len();
    }
}
