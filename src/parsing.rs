use memchr::memchr;
use memchr::memmem::Finder;
use once_cell::sync::Lazy;
use once_cell::unsync::Lazy as LocalLazy;
use regex::Regex;

pub const INIT_GAME: &str = "InitGame:";
pub const SHUTDOWN_GAME: &str = "ShutdownGame:";
pub const KILL: &str = "Kill:";

/// ASCII whitespace, `\s` would also accept unicode spaces
const SPACE: &str = r"[\t\n\f\r ]";

/// Full shape of a kill line:
/// `<mm:ss> Kill: <killer id> <victim id> <means id>: <killer> killed <victim> by <means>`
///
/// The name groups are greedy, names containing " killed " or " by " are split at the last
/// occurrence.
pub static KILL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^{s}*([0-9]+:[0-9]+){s}Kill:{s}([0-9]+){s}([0-9]+){s}([0-9]+):{s}\
         (.+){s}killed{s}(.+){s}by{s}(.+)$",
        s = SPACE
    ))
    .expect("kill pattern is valid")
});

thread_local! {
    static INIT_GAME_FINDER: LocalLazy<Finder<'static>> =
        LocalLazy::new(|| Finder::new(INIT_GAME));
    static SHUTDOWN_GAME_FINDER: LocalLazy<Finder<'static>> =
        LocalLazy::new(|| Finder::new(SHUTDOWN_GAME));
    static KILL_FINDER: LocalLazy<Finder<'static>> = LocalLazy::new(|| Finder::new(KILL));
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    InitGame,
    ShutdownGame,
    Kill,
}

/// Find the first marker present in the line, checked in `InitGame`, `ShutdownGame`, `Kill` order
pub fn find_marker(line: &str) -> Option<Marker> {
    let bytes = line.as_bytes();
    if INIT_GAME_FINDER.with(|finder| finder.find(bytes)).is_some() {
        Some(Marker::InitGame)
    } else if SHUTDOWN_GAME_FINDER
        .with(|finder| finder.find(bytes))
        .is_some()
    {
        Some(Marker::ShutdownGame)
    } else if KILL_FINDER.with(|finder| finder.find(bytes)).is_some() {
        Some(Marker::Kill)
    } else {
        None
    }
}

pub fn split_once(input: &str, delim: u8) -> Option<(&str, &str)> {
    debug_assert!(delim < 128); // only basic ascii
    let end = memchr(delim, input.as_bytes())?;
    Some((&input[..end], &input[end + 1..]))
}

/// Parse a `mm:ss` server timestamp into seconds, minutes are not bounded to 59
pub fn parse_timestamp(input: &str) -> Option<u32> {
    let (minutes, seconds) = split_once(input, b':')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    minutes.checked_mul(60)?.checked_add(seconds)
}

#[test]
fn test_find_marker() {
    assert_eq!(
        Some(Marker::InitGame),
        find_marker(r"  0:00 InitGame: \sv_floodProtect\1\sv_maxPing\0")
    );
    assert_eq!(
        Some(Marker::ShutdownGame),
        find_marker("  1:47 ShutdownGame:")
    );
    assert_eq!(
        Some(Marker::Kill),
        find_marker("  0:05 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT")
    );
    assert_eq!(
        None,
        find_marker(r"  0:25 ClientUserinfoChanged: 2 n\Dono da Bola\t\0")
    );
}

#[test]
fn test_kill_pattern_separators() {
    assert!(KILL_PATTERN.is_match("\t0:05 Kill: 1 2 3: Alice killed Bob by MOD_SHOTGUN"));
    assert!(!KILL_PATTERN.is_match("  0:05 Kill: 1 2 3: Alice\u{a0}killed Bob by MOD_SHOTGUN"));
    assert!(!KILL_PATTERN.is_match("  0:05 Kill: 1 2 3: Alice killed Bob\u{2003}by MOD_SHOTGUN"));
}

#[test]
fn test_parse_timestamp() {
    assert_eq!(Some(5), parse_timestamp("0:05"));
    assert_eq!(Some(1237), parse_timestamp("20:37"));
    assert_eq!(Some(981 * 60 + 27), parse_timestamp("981:27"));
    assert_eq!(None, parse_timestamp("12"));
    assert_eq!(None, parse_timestamp("a:05"));
}
