//! Demonstration run over a fixed set of lines
//!
//! Each line is parsed (and re-serialized) and then completed against the
//! registry, so one run shows both halves of the library side by side.

use nu_ansi_term::{Color, Style};
use std::io::{self, Write};

use crate::completion::get_completions;
use crate::parser::{generate_command, parse_command};
use crate::registry::Registry;

/// Lines exercised by `cmdline demo`
pub const DEMO_LINES: &[&str] = &[
    r#"create_cube -r --name=cube --pos="0.0 0.0 0.0""#,
    "--param=hey create_cube",
    r#"create_sphere --radius=10.0 --name="super \"sphere\"""#,
    "create_world",
    "create_cylinder 0.0 0.0 0.0 3.0 10.0",
    "create_something --",
    "create_something --=",
    "create_something --a",
    "create_something -",
    "create_something -f",
    "create_something --id=",
    "create",
    "create_c",
    "create_cylinder --identity=fo",
    "create_world re",
    "create_sphere --i",
];

fn paint(color: bool, style: Style, text: &str) -> String {
    if color {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Render the parser's view of one line
pub fn render_parse(index: usize, line: &str, color: bool) -> String {
    let header = paint(color, Style::new().bold(), &format!("PARSER: {index}) {line}"));
    let body = match parse_command(line) {
        Ok(command) => format!(
            "{} {}",
            paint(color, Color::Green.normal(), "recreated:"),
            generate_command(&command)
        ),
        Err(e) => format!("{} {e}", paint(color, Color::Red.bold(), "ERROR:")),
    };
    format!("{header}\n{body}\n")
}

/// Render the completer's view of one line
pub fn render_completion(index: usize, line: &str, registry: &Registry, color: bool) -> String {
    let mut rendered = paint(color, Style::new().bold(), &format!("COMPLETER: {index}) {line}"));
    rendered.push('\n');

    for candidate in get_completions(registry, line).candidates {
        rendered.push_str(&paint(color, Color::Cyan.normal(), "=>"));
        rendered.push(' ');
        rendered.push_str(&candidate);
        rendered.push('\n');
    }
    rendered
}

/// Write the full demonstration to `out`
pub fn write_demo<W: Write>(out: &mut W, registry: &Registry, color: bool) -> io::Result<()> {
    for (index, line) in DEMO_LINES.iter().enumerate() {
        writeln!(out)?;
        write!(out, "{}", render_parse(index, line, color))?;
        writeln!(out)?;
        write!(out, "{}", render_completion(index, line, registry, color))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_parse_success() {
        let rendered = render_parse(0, DEMO_LINES[0], false);
        assert_eq!(
            rendered,
            "PARSER: 0) create_cube -r --name=cube --pos=\"0.0 0.0 0.0\"\n\
             recreated: create_cube -r --name=cube --pos=\"0.0 0.0 0.0\"\n"
        );
    }

    #[test]
    fn test_render_parse_error() {
        let rendered = render_parse(1, DEMO_LINES[1], false);
        assert!(rendered.starts_with("PARSER: 1) --param=hey create_cube\nERROR: "));
    }

    #[test]
    fn test_render_completion() {
        let registry = Registry::sample();
        let rendered = render_completion(13, "create_cylinder --identity=fo", &registry, false);
        assert_eq!(
            rendered,
            "COMPLETER: 13) create_cylinder --identity=fo\n=> foo\n=> foooooo\n"
        );
    }

    #[test]
    fn test_colored_output_contains_escape_codes() {
        let rendered = render_parse(1, DEMO_LINES[1], true);
        assert!(rendered.contains("\u{1b}["));
    }

    #[test]
    fn test_write_demo_covers_every_line() {
        let mut out = Vec::new();
        write_demo(&mut out, &Registry::sample(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("PARSER: ").count(), DEMO_LINES.len());
        assert_eq!(text.matches("COMPLETER: ").count(), DEMO_LINES.len());
    }
}
