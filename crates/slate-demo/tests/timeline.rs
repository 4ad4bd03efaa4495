#![forbid(unsafe_code)]

use pretty_assertions::assert_eq;
use slate::Theme;
use slate_demo::cli::{Command, Format, Opts};
use slate_demo::scenario;

fn parse(args: &[&str]) -> Opts {
    let args = args.iter().map(|s| (*s).to_owned());
    match Opts::parse_from(args, |_| None) {
        Ok(Command::Run(opts)) => opts,
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn hover_window_pushes_dismiss_back() {
    let opts = parse(&["--hover-enter-ms=1000", "--hover-leave-ms=1500"]);
    let report = scenario::run(&opts, &Theme::default());
    assert_eq!(report.times_of("paused"), vec![1000]);
    assert_eq!(report.times_of("restarted"), vec![1500]);
    assert_eq!(report.times_of("closed"), vec![4500]);
    assert_eq!(report.removed_at_ms, Some(4740));
}

#[test]
fn hide_intent_exits_after_transition() {
    let opts = parse(&["--duration-ms=0", "--hide-at-ms=200"]);
    let report = scenario::run(&opts, &Theme::default());
    assert_eq!(report.times_of("closed"), vec![200]);
    assert_eq!(report.removed_at_ms, Some(440));
}

#[test]
fn phases_are_reported_in_order() {
    let report = scenario::run(&parse(&[]), &Theme::default());
    let phases: Vec<_> = report
        .entries
        .iter()
        .filter(|e| e.kind == "phase")
        .map(|e| (e.at_ms, e.detail.as_str()))
        .collect();
    assert_eq!(phases, vec![(240, "entered"), (3240, "exited")]);
}

#[test]
fn json_output_is_a_document() {
    let opts = Opts {
        format: Format::Json,
        ..parse(&["--color=red", "--title=Upload failed"])
    };
    let output = slate_demo::run(&opts).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(doc["color"], "red");
    assert_eq!(doc["removed_at_ms"], 3240);
    assert_eq!(doc["accent"], Theme::default().resolve_color("red").to_string());
    assert!(doc["entries"].as_array().is_some_and(|e| !e.is_empty()));
}

#[test]
fn missing_theme_file_is_an_error() {
    let opts = Opts {
        theme: Some("/nonexistent/theme.json".into()),
        ..Opts::default()
    };
    let err = slate_demo::run(&opts).unwrap_err();
    assert!(matches!(err, slate_demo::DemoError::Slate(slate::Error::Io(_))));
}
