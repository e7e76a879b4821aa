//! Interactive terminal viewer.
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! pdf next | pdf prev | pdf <n>     # document navigation
//! yt next  | yt prev  | yt <n>      # stream navigation
//! page next | page prev             # page turning in the open document
//! feedback <name>|<email>|<message>
//! list | help | quit
//! ```

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::adapters::{EmbedPlayer, LoadOutcome, PdfRenderer, ViewerError};
use crate::config::ResolvedConfig;
use crate::core::{dropdown_options, CatalogLoader, Viewer};
use crate::domain::MediaKind;
use crate::feedback::{FeedbackForm, THANK_YOU};

/// Navigation step within a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
    /// Raw index input, validated by the selection controller
    Index(String),
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Navigate(MediaKind, Step),
    NextPage,
    PrevPage,
    Feedback(FeedbackForm),
    List,
    Help,
    Quit,
}

/// Parse an input line; `None` for blank or unrecognized input
pub fn parse_command(line: &str) -> Option<BrowseCommand> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let step = |rest: &str| match rest {
        "next" | "n" => Step::Next,
        "prev" | "p" => Step::Previous,
        other => Step::Index(other.to_string()),
    };

    match head {
        "" => None,
        "quit" | "exit" | "q" => Some(BrowseCommand::Quit),
        "help" | "?" => Some(BrowseCommand::Help),
        "list" | "ls" => Some(BrowseCommand::List),
        "page" => match rest {
            "next" | "n" => Some(BrowseCommand::NextPage),
            "prev" | "p" => Some(BrowseCommand::PrevPage),
            _ => None,
        },
        "feedback" => Some(BrowseCommand::Feedback(FeedbackForm::from_pipe_separated(rest))),
        other => {
            let kind = other.parse::<MediaKind>().ok()?;
            if rest.is_empty() {
                return None;
            }
            Some(BrowseCommand::Navigate(kind, step(rest)))
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  pdf next | pdf prev | pdf <n>   choose a document");
    println!("  yt next  | yt prev  | yt <n>    choose a stream");
    println!("  page next | page prev           turn pages");
    println!("  feedback <name>|<email>|<msg>   leave feedback");
    println!("  list | help | quit");
}

fn print_lists(viewer: &Viewer) {
    for kind in [MediaKind::Document, MediaKind::Stream] {
        for option in dropdown_options(viewer.library(), kind) {
            match option.value {
                Some(index) => println!("  {:>3}  {}", index, option.label),
                None => println!("[{}] {}", kind, option.label),
            }
        }
    }
}

async fn show_document(viewer: &Viewer) {
    let status = viewer.documents().status().await;
    if let Some(content) = viewer.documents().page_content().await {
        println!("{}", content.trim_end());
    }
    println!("-- {} --", status);
}

async fn show_stream(viewer: &Viewer, player: &EmbedPlayer) {
    if let Some(info) = viewer.streams().info().await {
        println!("{}", info.title);
        println!("{}", info.description);
    }
    if let Some(url) = player.current_url().await {
        println!("-- {} --", url);
    }
}

/// Alert line for a render failure, worded for the kind that failed
fn failure_alert(error: &ViewerError) -> Option<String> {
    match error {
        ViewerError::RenderFailure {
            kind: MediaKind::Document,
            filename,
            ..
        } => Some(format!("無法加載 PDF 文件: {}", filename)),
        ViewerError::RenderFailure {
            kind: MediaKind::Stream,
            filename,
            ..
        } => Some(format!("無法加載 YouTube 音訊: {}", filename)),
        _ => None,
    }
}

/// Surface a render failure the way a modal alert would
fn report_failure(error: &ViewerError) {
    if let Some(alert) = failure_alert(error) {
        eprintln!("!! {}", alert);
    }
    eprintln!("!! {}", error);
}

async fn show_turn(viewer: &Viewer, turned: Result<Option<u32>, ViewerError>) {
    match turned {
        Ok(Some(_)) => show_document(viewer).await,
        Ok(None) => println!("(no page to turn to)"),
        Err(e) => report_failure(&e),
    }
}

async fn handle(viewer: &Viewer, player: &EmbedPlayer, command: BrowseCommand) -> Result<bool> {
    match command {
        BrowseCommand::Quit => return Ok(false),
        BrowseCommand::Help => print_help(),
        BrowseCommand::List => print_lists(viewer),
        BrowseCommand::Feedback(mut form) => {
            form.submit();
            println!("{}", THANK_YOU);
        }
        BrowseCommand::NextPage => show_turn(viewer, viewer.documents().next_page().await).await,
        BrowseCommand::PrevPage => show_turn(viewer, viewer.documents().prev_page().await).await,
        BrowseCommand::Navigate(kind, step) => {
            let result = match step {
                Step::Next => viewer.next(kind).await,
                Step::Previous => viewer.previous(kind).await,
                Step::Index(raw) => viewer.select(kind, &raw).await,
            };
            match result {
                Ok(Some(LoadOutcome::Loaded)) => match kind {
                    MediaKind::Document => show_document(viewer).await,
                    MediaKind::Stream => show_stream(viewer, player).await,
                },
                Ok(Some(LoadOutcome::Dropped)) => println!("(player not ready)"),
                Ok(Some(LoadOutcome::Superseded)) | Ok(None) => {}
                Err(e) => report_failure(&e),
            }
        }
    }
    Ok(true)
}

/// Load the catalogs and run the command loop until quit or end of input
pub async fn run(config: ResolvedConfig) -> Result<()> {
    let loader = CatalogLoader::from_config(&config)?;
    let library = loader.load_library(&config).await;

    let player = Arc::new(EmbedPlayer::new());
    let viewer = Viewer::new(
        library,
        Arc::new(PdfRenderer::new(&config.root)),
        Some(player.clone()),
    );

    print_lists(&viewer);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(command) => {
                if !handle(&viewer, &player, command).await? {
                    break;
                }
            }
            None if line.trim().is_empty() => {}
            None => println!("Unknown command: {} (try 'help')", line.trim()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(
            parse_command("pdf next"),
            Some(BrowseCommand::Navigate(MediaKind::Document, Step::Next))
        );
        assert_eq!(
            parse_command("  yt   prev "),
            Some(BrowseCommand::Navigate(MediaKind::Stream, Step::Previous))
        );
        assert_eq!(
            parse_command("pdf 3"),
            Some(BrowseCommand::Navigate(MediaKind::Document, Step::Index("3".to_string())))
        );
        assert_eq!(parse_command("pdf"), None);
        assert_eq!(parse_command("audio next"), None);
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command("page n"), Some(BrowseCommand::NextPage));
        assert_eq!(parse_command("page sideways"), None);
        assert_eq!(parse_command("q"), Some(BrowseCommand::Quit));
        assert_eq!(parse_command("   "), None);
        assert_eq!(
            parse_command("feedback Ann|a@b.c|hello"),
            Some(BrowseCommand::Feedback(FeedbackForm::new("Ann", "a@b.c", "hello")))
        );
    }

    #[test]
    fn test_failure_alert_names_the_kind() {
        let document = ViewerError::RenderFailure {
            kind: MediaKind::Document,
            filename: "pdf03.pdf".to_string(),
            reason: "missing".to_string(),
        };
        let stream = ViewerError::RenderFailure {
            kind: MediaKind::Stream,
            filename: "dQw4w9WgXcQ".to_string(),
            reason: "rejected".to_string(),
        };

        assert_eq!(failure_alert(&document).as_deref(), Some("無法加載 PDF 文件: pdf03.pdf"));
        assert_eq!(
            failure_alert(&stream).as_deref(),
            Some("無法加載 YouTube 音訊: dQw4w9WgXcQ")
        );
        assert_eq!(failure_alert(&ViewerError::PlayerNotReady), None);
    }
}
