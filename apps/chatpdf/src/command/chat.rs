use super::{Command, load_document};
use super::search::render_results;
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;
use pdf_core::{Document, Responder, ResponderKind, SUGGESTIONS};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  /next, /prev      move one page
  /page <n>         jump to page n
  /search <query>   search the document (no query repeats the last search)
  /new              start a new chat
  /suggest          show suggested questions
  /help             show this help
  /quit             leave
Anything else is sent to the assistant.";

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Next,
    Prev,
    Page(usize),
    Search(String),
    NewChat,
    Suggest,
    Help,
    Quit,
    Ask(String),
    Invalid(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Input::Ask(line.to_string());
    };

    let (command, argument) = match rest.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (rest, ""),
    };

    match command {
        "next" | "n" => Input::Next,
        "prev" | "p" => Input::Prev,
        "page" => match argument.parse() {
            Ok(page) => Input::Page(page),
            Err(_) => Input::Invalid(format!("'{argument}' is not a page number")),
        },
        "search" | "s" => Input::Search(argument.to_string()),
        "new" => Input::NewChat,
        "suggest" => Input::Suggest,
        "help" | "h" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        other => Input::Invalid(format!("unknown command /{other}")),
    }
}

/// First line shown after a document is opened.
pub fn opened_banner(document: &Document) -> String {
    let name = document.source.as_deref().unwrap_or("document");
    let mut banner = format!("Opened {} ({} pages)", name, document.page_count);
    if document.is_empty() {
        banner.push_str("\nNo extractable text found; pages may be scanned images.");
    }
    banner
}

pub struct ChatCommand {
    config: Config,
    path: PathBuf,
    responder: Option<ResponderKind>,
}

impl ChatCommand {
    pub fn new(config: Config, path: PathBuf, responder: Option<ResponderKind>) -> Self {
        Self { config, path, responder }
    }

    fn print_page(session: &Session) {
        println!("\n── Page {} / {} ──", session.current_page(), session.page_count());
        match session.current_page_text() {
            Some(text) if !text.trim().is_empty() => println!("{}", text.trim_end()),
            _ => println!("[no text on this page]"),
        }
    }

    fn print_suggestions() {
        println!("Suggested questions:");
        for suggestion in SUGGESTIONS {
            println!("  - {}", suggestion);
        }
    }

    async fn ask(&self, session: &mut Session, responder: &dyn Responder, question: &str) -> Result<()> {
        let delay = self.config.chat.think_delay_ms;
        if delay > 0 && !question.trim().is_empty() {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if let Some(answer) = session.ask(responder, question)? {
            tracing::debug!("answer {}", answer.id);
            println!("[{}] AI: {}", answer.timestamp.format("%H:%M"), answer.text);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Command for ChatCommand {
    async fn execute(&self) -> Result<()> {
        let mut session = Session::new();
        match load_document(&self.path, &self.config.core.extract).await {
            Ok(document) => session.open(document),
            Err(e) => {
                session.reset();
                return Err(e);
            }
        }

        let kind = self.responder.unwrap_or(self.config.chat.responder);
        let responder = kind.build();
        tracing::debug!("using {} responder", kind);

        if let Some(document) = session.document() {
            println!("{}", opened_banner(document));
        }
        println!("Type /help for commands.");
        if session.page_count() > 0 {
            Self::print_page(&session);
        }
        Self::print_suggestions();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match parse_input(&line) {
                Input::Next => {
                    session.next_page();
                    Self::print_page(&session);
                }
                Input::Prev => {
                    session.prev_page();
                    Self::print_page(&session);
                }
                Input::Page(page) => match session.goto_page(page) {
                    Ok(_) => Self::print_page(&session),
                    Err(e) => println!("{}", e),
                },
                Input::Search(query) => {
                    // 空查询时重复上一次搜索
                    let query = match session.last_query() {
                        Some(last) if query.is_empty() => last.to_string(),
                        _ => query,
                    };
                    session.search(&query);
                    if let Some(document) = session.document() {
                        print!("{}", render_results(document, session.search_results()));
                    }
                }
                Input::NewChat => {
                    session.new_chat();
                    println!("Started a new chat with the current PDF");
                    Self::print_suggestions();
                }
                Input::Suggest => Self::print_suggestions(),
                Input::Help => println!("{}", HELP),
                Input::Quit => break,
                Input::Ask(question) => self.ask(&mut session, responder.as_ref(), &question).await?,
                Input::Invalid(message) => println!("{}", message),
            }
        }

        tracing::info!("chat ended after {} messages", session.chat().len());
        Ok(())
    }
}
