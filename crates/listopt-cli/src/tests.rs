use super::*;

#[test]
fn parses_analyze_with_catalog_id() {
    let cli = Cli::try_parse_from(["listopt", "analyze", "B08N5WRWNW"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Analyze { ref input, json: false } if input == "B08N5WRWNW"
    ));
}

#[test]
fn parses_analyze_json_flag() {
    let cli = Cli::try_parse_from([
        "listopt",
        "analyze",
        "https://www.amazon.com/dp/B08N5WRWNW",
        "--json",
    ])
    .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Analyze { json: true, .. }));
}

#[test]
fn analyze_requires_input() {
    assert!(Cli::try_parse_from(["listopt", "analyze"]).is_err());
}

#[test]
fn parses_demo() {
    let cli = Cli::try_parse_from(["listopt", "demo"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Demo { json: false }));
}

#[test]
fn parses_rewrite_bullets_with_repeated_text() {
    let cli = Cli::try_parse_from([
        "listopt",
        "rewrite",
        "bullets",
        "--text",
        "Rich sound",
        "--text",
        "Voice control",
        "--context",
        "Echo Dot",
    ])
    .expect("expected valid cli args");
    match cli.command {
        Commands::Rewrite {
            kind,
            text,
            context,
        } => {
            assert_eq!(kind, RewriteKind::Bullets);
            assert_eq!(text, vec!["Rich sound", "Voice control"]);
            assert_eq!(context, "Echo Dot");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rewrite_requires_text_and_context() {
    assert!(Cli::try_parse_from(["listopt", "rewrite", "description", "--context", "x"]).is_err());
    assert!(Cli::try_parse_from(["listopt", "rewrite", "description", "--text", "x"]).is_err());
}

#[test]
fn rewrite_rejects_unknown_kind() {
    assert!(Cli::try_parse_from([
        "listopt", "rewrite", "title", "--text", "x", "--context", "y"
    ])
    .is_err());
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["listopt"]).is_err());
}
