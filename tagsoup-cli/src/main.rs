//! tagsoup - fault-tolerant markup cleanup from the command line
//!
//! Usage:
//!   tagsoup strip <file>                 Remove tags, keep text
//!   tagsoup prune <file>                 Remove empty paired tags
//!   tagsoup fix <file>                   Balance open and close tags
//!   tagsoup escape-scripts <file>        Neutralize script tags
//!   tagsoup attrs --tag a <file>         Attributes of the first <a> as JSON
//!   tagsoup classify '<br/>'             Kind and name of one tag
//!   tagsoup tokens <file>                Every bracketed span, classified
//!
//! Every command that takes a file also accepts `--html '<b>...'` or reads
//! stdin.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tagsoup_common::warning::set_warnings_enabled;

use commands::Command;

/// tagsoup - repair, strip and sanitize tag soup
#[derive(Parser, Debug)]
#[command(name = "tagsoup")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Plain text from a page
    tagsoup strip page.html

    # Keep line breaks and non-breaking spaces as text
    tagsoup strip --smart page.html

    # Close whatever was left open, treating <br> and friends as void
    tagsoup fix --mode html --html '<p>one<br>two'

    # All links on a page
    tagsoup attrs --tag a --all page.html

    # Read from stdin
    curl -s https://example.com | tagsoup escape-scripts
")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Do not print warnings about repaired or neutralized markup
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_warnings_enabled(!cli.quiet);

    match cli.command.run() {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{output}");
            } else {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::CommandFactory;
    use serde_json::{Value, json};

    use super::*;

    fn run(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("tagsoup").chain(args.iter().copied()))
            .expect("arguments should parse");
        cli.command.run()
    }

    fn run_json(args: &[&str]) -> Value {
        let output = run(args).expect("command should succeed");
        serde_json::from_str(&output).expect("output should be JSON")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_strip() {
        let output = run(&["strip", "--html", "<b>Hello</b> <i>World</i>"]).unwrap();
        assert_eq!(output, "Hello World");
    }

    #[test]
    fn test_strip_smart() {
        let output = run(&["strip", "--smart", "--html", "a<br>b&nbsp;c"]).unwrap();
        assert_eq!(output, "a\r\nb c");
    }

    #[test]
    fn test_prune() {
        let output = run(&["prune", "--html", "<p><b></b>hi<i></i></p>"]).unwrap();
        assert_eq!(output, "<p>hi</p>");
    }

    #[test]
    fn test_prune_too_deep_is_an_error() {
        let err = run(&["prune", "--max-depth", "0", "--html", "<a><b>x</b></a>"]).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("could not prune empty tags"), "{message}");
        assert!(message.contains("markup too complex"), "{message}");
    }

    #[test]
    fn test_fix_modes() {
        let xml = run(&["fix", "--html", "<p>a<br>b"]).unwrap();
        assert_eq!(xml, "<p>a<br>b</br></p>");
        let html = run(&["fix", "--mode", "html", "--html", "<p>a<br>b"]).unwrap();
        assert_eq!(html, "<p>a<br>b</p>");
    }

    #[test]
    fn test_escape_scripts() {
        let output = run(&["escape-scripts", "--html", "<script>x</script><b>ok</b>"]).unwrap();
        assert_eq!(output, "&lt;script&gt;x&lt;/script&gt;<b>ok</b>");
    }

    #[test]
    fn test_attrs_first_match() {
        let value = run_json(&["attrs", "--tag", "a", "--html", r#"<a href='x' target="_blank">"#]);
        assert_eq!(value, json!({ "href": "x", "target": "_blank" }));
    }

    #[test]
    fn test_attrs_missing_tag_is_null() {
        let value = run_json(&["attrs", "--tag", "img", "--html", "<p>x</p>"]);
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_attrs_all() {
        let value = run_json(&["attrs", "--tag", "a", "--all", "--html", "<a id=1><a id=2>"]);
        assert_eq!(value, json!([{ "id": "1" }, { "id": "2" }]));
    }

    #[test]
    fn test_attrs_start_out_of_range() {
        let err = run(&["attrs", "--tag", "a", "--start", "50", "--html", "<a id=1>"]).unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
    }

    #[test]
    fn test_attrs_start_conflicts_with_all() {
        let parsed = Cli::try_parse_from([
            "tagsoup", "attrs", "--tag", "a", "--all", "--start", "1", "--html", "<a>",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            run_json(&["classify", "<br/>"]),
            json!({ "kind": "Single", "name": "br" })
        );
        assert_eq!(
            run_json(&["classify", "< x >"]),
            json!({ "kind": "NotTag", "name": "" })
        );
    }

    #[test]
    fn test_tokens_listing() {
        let output = run(&["tokens", "--html", "<p>Hi</p>"]).unwrap();
        assert_eq!(output, "0..3 PairOpen(p) <p>\n5..9 PairClose(p) </p>\n");
    }

    #[test]
    fn test_quiet_is_global() {
        let cli = Cli::try_parse_from(["tagsoup", "fix", "--quiet", "--html", "<b>"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_file_and_html_conflict() {
        let parsed = Cli::try_parse_from(["tagsoup", "strip", "page.html", "--html", "<b>"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_reads_file() {
        let path = std::env::temp_dir().join("tagsoup-cli-read-test.html");
        fs::write(&path, "<b>from file</b>").unwrap();
        let output = run(&["strip", path.to_str().unwrap()]);
        fs::remove_file(&path).unwrap();
        assert_eq!(output.unwrap(), "from file");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = run(&["strip", "/nonexistent/tagsoup/page.html"]).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }
}
