//! Quill CLI - Command-line interface for rendering and formatting documents

use anyhow::{Context, Result};
use quill_core::{CommandKind, EditorConfig, FormatCommand, Selection};
use quill_session::EditorSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("quill=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "help" | "--help" | "-h" => print_help(),
        "commands" => list_commands(),
        "render" => {
            if args.len() < 3 {
                eprintln!("Usage: quill-cli render <file>");
                return Ok(());
            }
            render_file(&args[2])?;
        }
        "apply" => {
            if args.len() < 4 {
                eprintln!("Usage: quill-cli apply <file> <command> [start] [end]");
                return Ok(());
            }
            apply_to_file(&args[2], &args[3], args.get(4), args.get(5))?;
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_help();
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"Quill CLI - Plain-text formatting editor

USAGE:
    quill-cli <COMMAND> [OPTIONS]

COMMANDS:
    help        Show this help message
    commands    List formatting command identifiers
    render      Render a document to HTML
    apply       Apply a formatting command and print the result

ENVIRONMENT:
    QUILL_CONFIG    Path to a JSON editor configuration

EXAMPLES:
    quill-cli render notes.md
    quill-cli apply notes.md bold 0 5
    quill-cli apply notes.md '{{"command":"insert_link","url":"https://example.com"}}' 10 14
"#
    );
}

fn list_commands() {
    for kind in CommandKind::ALL {
        let params = if kind.requires_params() {
            " (needs parameters)"
        } else {
            ""
        };
        match kind.shortcut() {
            Some(shortcut) => println!(
                "{:<16} {:<16} {}{}",
                kind.id(),
                kind.label(),
                shortcut,
                params
            ),
            None => println!("{:<16} {}{}", kind.id(), kind.label(), params),
        }
    }
}

fn render_file(path: &str) -> Result<()> {
    let content = read_document(path)?;
    println!("{}", quill_render::render(&content));
    Ok(())
}

fn apply_to_file(
    path: &str,
    command: &str,
    start: Option<&String>,
    end: Option<&String>,
) -> Result<()> {
    let content = read_document(path)?;
    let command = parse_command(command)?;

    let mut session = EditorSession::with_config(content, &load_config()?);
    let caret = session.selection().end;
    let start = parse_offset(start, caret)?;
    let end = parse_offset(end, start)?;
    session.set_selection(Selection::new(start, end));

    let selection = session.apply(&command)?;
    info!(
        "Applied {} (selection {}..{})",
        command.kind(),
        selection.start,
        selection.end
    );
    println!("{}", session.content());
    Ok(())
}

fn parse_command(arg: &str) -> Result<FormatCommand> {
    if arg.trim_start().starts_with('{') {
        serde_json::from_str(arg).context("Invalid command JSON")
    } else {
        Ok(arg.parse()?)
    }
}

fn parse_offset(arg: Option<&String>, default: usize) -> Result<usize> {
    match arg {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid offset: {}", value)),
        None => Ok(default),
    }
}

fn read_document(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

fn load_config() -> Result<EditorConfig> {
    match std::env::var("QUILL_CONFIG") {
        Ok(path) if !path.is_empty() => {
            info!("Loading config from {}", path);
            EditorConfig::load(&path).with_context(|| format!("Failed to load config {}", path))
        }
        _ => Ok(EditorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_id() {
        assert_eq!(parse_command("italic").unwrap(), FormatCommand::Italic);
        assert!(parse_command("insert_link").is_err());
    }

    #[test]
    fn test_parse_command_json() {
        let command =
            parse_command(r#"{"command": "insert_image", "url": "/a.png", "alt": "A"}"#).unwrap();
        assert_eq!(command, FormatCommand::image("/a.png", "A"));
        assert!(parse_command("{not json").is_err());
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset(None, 7).unwrap(), 7);
        assert_eq!(parse_offset(Some(&"3".to_string()), 7).unwrap(), 3);
        assert!(parse_offset(Some(&"x".to_string()), 7).is_err());
    }
}
