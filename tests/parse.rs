use quake_log_parser::{parse, parse_file, parse_lines, parse_reader, Error, MatchId};
use std::collections::BTreeSet;
use std::io::{self, BufReader, Cursor, Read};

fn names(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_world_kill_scenario() {
    let log = parse_lines([
        "InitGame: ",
        "0:05 Kill: 1 2 3: Alice killed Bob by ROCKET_LAUNCHER",
        "0:10 Kill: 1 3 3: <world> killed Alice by TRIGGER_HURT",
        "ShutdownGame: ",
    ]);

    assert_eq!(1, log.len());
    let game = log.get(MatchId(1)).unwrap();
    assert_eq!(2, game.total_kills);
    assert_eq!(names(&["Alice", "Bob"]), game.players);
    assert_eq!(Some(&0), game.kills.get("Alice"));
    assert_eq!(0, game.kills.get("Bob").copied().unwrap_or_default());
    assert_eq!(Some(&1), game.kills_by_means.get("ROCKET_LAUNCHER"));
    assert_eq!(Some(&1), game.kills_by_means.get("TRIGGER_HURT"));
}

#[test]
fn test_world_victim_is_not_a_player() {
    let log = parse_lines([
        "  0:00 InitGame: ",
        "  0:10 Kill: 1022 3 22: <world> killed Carol by MOD_LAVA",
    ]);
    let game = log.get(MatchId(1)).unwrap();
    assert!(game.players.is_empty());
    assert_eq!(Some(&-1), game.kills.get("Carol"));
    assert_eq!(1, game.total_kills);
}

#[test]
fn test_consecutive_init_games() {
    let log = parse_lines(["  0:00 InitGame: ", "  0:00 InitGame: "]);
    assert_eq!(2, log.len());
    for (_, game) in log.iter() {
        assert_eq!(0, game.total_kills);
        assert!(game.players.is_empty());
        assert!(game.kills.is_empty());
        assert!(game.kills_by_means.is_empty());
    }
}

#[test]
fn test_no_matches() {
    let log = parse(
        "  0:05 Kill: 1 2 3: Alice killed Bob by MOD_SHOTGUN\n  1:47 ShutdownGame:\n  1:47 ----\n",
    );
    assert!(log.is_empty());
    assert_eq!(0, log.len());
}

#[test]
fn test_unterminated_match_is_kept() {
    let log = parse("  0:00 InitGame: \n  0:05 Kill: 1 2 3: Alice killed Bob by MOD_SHOTGUN");
    assert_eq!(1, log.get(MatchId(1)).unwrap().total_kills);
}

#[test]
fn test_oversized_numbers_count_as_kills() {
    let log = parse_lines([
        "  0:00 InitGame: ",
        "  0:05 Kill: 99999999999 2 3: Alice killed Bob by MOD_SHOTGUN",
        "99999999:05 Kill: 1 2 3: Alice killed Bob by MOD_SHOTGUN",
    ]);
    let game = log.get(MatchId(1)).unwrap();
    assert_eq!(2, game.total_kills);
    assert_eq!(Some(&2), game.kills_by_means.get("MOD_SHOTGUN"));
    assert!(log.diagnostics.is_empty());
}

#[test]
fn test_unicode_space_separator_is_malformed() {
    let log = parse_lines([
        "  0:00 InitGame: ",
        "  0:05 Kill: 1 2 3: Alice\u{a0}killed Bob by MOD_SHOTGUN",
    ]);
    assert_eq!(0, log.get(MatchId(1)).unwrap().total_kills);
    assert_eq!(1, log.diagnostics.len());
}

#[test]
fn test_parse_is_deterministic() {
    let content = std::fs::read_to_string("tests/data/qgames.log").unwrap();
    let first = serde_json::to_string(&parse(&content)).unwrap();
    let second = serde_json::to_string(&parse(&content)).unwrap();
    assert_eq!(first, second);
    assert_eq!(parse(&content), parse(&content));
}

#[test]
fn test_reader_matches_str() {
    let content = std::fs::read_to_string("tests/data/qgames.log").unwrap();
    let from_reader = parse_reader(Cursor::new(content.as_bytes())).unwrap();
    assert_eq!(parse(&content), from_reader);
    assert_eq!(3, from_reader.len());
    assert_eq!(26, from_reader.diagnostics[0].line_number);
}

#[test]
fn test_missing_file() {
    match parse_file("tests/data/does_not_exist.log") {
        Err(Error::SourceUnavailable { path, .. }) => {
            assert!(path.ends_with("does_not_exist.log"))
        }
        other => panic!("expected missing source error, got {:?}", other),
    }
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device unplugged"))
    }
}

#[test]
fn test_read_failure_aborts() {
    let log: &[u8] = b"  0:00 InitGame: \n  0:05 Kill: 1 2 3: Alice killed Bob by MOD_SHOTGUN\n";
    let input = Cursor::new(log).chain(BrokenReader);
    let result = parse_reader(BufReader::new(input));
    assert!(matches!(result, Err(Error::Read(_))));
}
