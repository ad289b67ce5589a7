use quake_log_parser::parse_file;
use quake_log_parser::report::Report;
use test_case::test_case;

#[test_case("qgames.log")]
fn test_report(input: &str) {
    let log = parse_file(format!("tests/data/{}", input)).unwrap();
    let report = Report::new(&log);
    insta::assert_json_snapshot!(report, @r###"
    {
      "match_reports": {
        "game_01": {
          "total_kills": 0,
          "players": [],
          "kills": {}
        },
        "game_02": {
          "total_kills": 10,
          "players": [
            "Dono da Bola",
            "Isgalamido"
          ],
          "kills": {
            "Dono da Bola": 1,
            "Isgalamido": -1
          }
        },
        "game_03": {
          "total_kills": 3,
          "players": [
            "Assasinu Credi",
            "Zeh"
          ],
          "kills": {
            "Assasinu Credi": 0,
            "Zeh": 1
          }
        }
      },
      "kill_by_means_reports": {
        "game_01": {
          "kills_by_means": {}
        },
        "game_02": {
          "kills_by_means": {
            "MOD_FALLING": 1,
            "MOD_RAILGUN": 1,
            "MOD_ROCKET": 1,
            "MOD_ROCKET_SPLASH": 3,
            "MOD_TRIGGER_HURT": 4
          }
        },
        "game_03": {
          "kills_by_means": {
            "MOD_MACHINEGUN": 1,
            "MOD_RAILGUN": 1,
            "MOD_TRIGGER_HURT": 1
          }
        }
      },
      "player_ranking": [
        {
          "player": "Dono da Bola",
          "kills": 1
        },
        {
          "player": "Zeh",
          "kills": 1
        },
        {
          "player": "Assasinu Credi",
          "kills": 0
        },
        {
          "player": "Isgalamido",
          "kills": -1
        }
      ]
    }
    "###);
}

#[test]
fn test_summary() {
    let log = parse_file("tests/data/qgames.log").unwrap();
    let summary = Report::new(&log).summary(2).to_string();
    assert_eq!(
        "Game: game_01\n  Total Kills: 0\n  Players: []\n  Kills:\n\n\
         Game: game_02\n  Total Kills: 10\n  Players: [Dono da Bola, Isgalamido]\n\
         \x20 Kills:\n    Dono da Bola: 1\n    Isgalamido: -1\n\n",
        summary
    );
}
