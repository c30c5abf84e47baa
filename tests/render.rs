use linedisplay::cli::Cli;
use linedisplay::{initialize, render_line, ui, Config, LineProps, OutputFormat, StyleClass};
use clap::Parser;
use rstest::rstest;

const RESPONSE: &str = "  ____\n |    |\n |____|\nYou are in Room 5\n3 item(s): SWORD, SHIELD, KEY\nNo monsters present in this room.";

fn render_to_string(config: &Config, response: &str) -> String {
    let mut state = initialize(config);
    state.set_response(response);

    let mut out = Vec::new();
    ui::render(&state.compute_viewmodel(), &state.theme, config.format, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[rstest]
#[case(0, 10, true, "line ascii-line")]
#[case(8, 10, true, "line")]
#[case(0, 10, false, "line")]
#[case(2, 3, true, "line")]
fn documented_scenarios(
    #[case] index: i64,
    #[case] total_length: i64,
    #[case] ascii: bool,
    #[case] expected: &str,
) {
    let styled = render_line(LineProps::new(index, "text", total_length, ascii));
    assert_eq!(styled.class_name(), expected);
    assert_eq!(styled.classes[0], StyleClass::Line);
}

#[test]
fn html_output_matches_the_web_console_markup() {
    let config = Config {
        ascii: true,
        format: OutputFormat::Html,
        ..Config::default()
    };

    let html = render_to_string(&config, RESPONSE);
    let expected = "\
<p class=\"line ascii-line\">  ____</p>
<p class=\"line ascii-line\"> |    |</p>
<p class=\"line ascii-line\"> |____|</p>
<p class=\"line\">You are in Room 5</p>
<p class=\"line\">3 item(s): SWORD, SHIELD, KEY</p>
<p class=\"line\">No monsters present in this room.</p>
";
    assert_eq!(html, expected);
}

#[test]
fn json_output_without_ascii_mode_is_all_plain_lines() {
    let config = Config {
        format: OutputFormat::Json,
        ..Config::default()
    };

    let json: serde_json::Value = serde_json::from_str(&render_to_string(&config, RESPONSE)).unwrap();
    let lines = json.as_array().unwrap();
    assert_eq!(lines.len(), 6);
    assert!(lines
        .iter()
        .all(|line| line["classes"] == serde_json::json!(["line"])));
}

#[test]
fn plain_output_round_trips_the_text() {
    let config = Config {
        ascii: true,
        format: OutputFormat::Plain,
        ..Config::default()
    };
    assert_eq!(render_to_string(&config, RESPONSE), format!("{RESPONSE}\n"));
}

#[test]
fn cli_flags_drive_the_same_pipeline() {
    let cli = Cli::try_parse_from(["linedisplay", "--ascii", "--format", "html", "-"]).unwrap();
    let config = cli.to_config().unwrap();
    assert_eq!(cli.input_path(), None);

    let html = render_to_string(&config, "art\nRoom\nItems\nMonsters");
    assert!(html.starts_with("<p class=\"line ascii-line\">art</p>\n<p class=\"line\">Room</p>"));
}
