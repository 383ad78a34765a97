//! Render a [`ParsedCommand`] back to command line syntax

use super::command::ParsedCommand;

/// Render a command back to a line.
///
/// Output order is the name, then flags, then named parameters, then
/// positionals, each in stored order. Values are re-quoted by [`escape`].
///
/// # Examples
///
/// ```
/// use cmdline::parser::{generate_command, parse_command};
///
/// let cmd = parse_command(r#"create_cube --pos="0 0 0" -r"#).unwrap();
/// assert_eq!(generate_command(&cmd), r#"create_cube -r --pos="0 0 0""#);
/// ```
pub fn generate_command(command: &ParsedCommand) -> String {
    let mut line = String::from(&command.name);

    for flag in &command.flags {
        line.push_str(" -");
        line.push_str(flag);
    }

    for (name, value) in &command.named_params {
        line.push_str(" --");
        line.push_str(name);
        line.push('=');
        line.push_str(&escape(value));
    }

    for value in &command.ordered_params {
        line.push(' ');
        line.push_str(&escape(value));
    }

    line
}

/// Quote a value if it holds a space or a double quote.
///
/// Double quotes inside the value are escaped as `\"`. Any other value is
/// returned unchanged.
pub fn escape(value: &str) -> String {
    let has_quote = value.contains('"');
    if !has_quote && !value.contains(' ') {
        return value.to_string();
    }

    let body = if has_quote {
        value.replace('"', "\\\"")
    } else {
        value.to_string()
    };
    format!("\"{body}\"")
}
