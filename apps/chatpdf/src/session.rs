//! 阅读会话
//!
//! Everything the user interacts with lives here: the open document, the page
//! cursor, the chat log and the last search. The core library stays stateless.

use chrono::{DateTime, Local};
use pdf_core::{Document, Responder, SearchResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no document is open")]
    NoDocument,
    #[error("page {page} is out of range (1..={page_count})")]
    PageOutOfRange { page: usize, page_count: usize },
}

#[derive(Debug, Default)]
pub struct Session {
    document: Option<Document>,
    /// 1-based; 0 while no page can be shown.
    current_page: usize,
    chat: Vec<ChatMessage>,
    last_query: Option<String>,
    search_results: Vec<SearchResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开新文档，丢弃之前的所有状态
    pub fn open(&mut self, document: Document) {
        self.current_page = if document.page_count > 0 { 1 } else { 0 };
        self.document = Some(document);
        self.chat.clear();
        self.last_query = None;
        self.search_results.clear();
    }

    /// Back to the "no document" state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.document.as_ref().map_or(0, |doc| doc.page_count)
    }

    pub fn current_page_text(&self) -> Option<&str> {
        self.document.as_ref()?.page_text(self.current_page)
    }

    pub fn next_page(&mut self) -> usize {
        if self.current_page < self.page_count() {
            self.current_page += 1;
        }
        self.current_page
    }

    pub fn prev_page(&mut self) -> usize {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
        self.current_page
    }

    pub fn goto_page(&mut self, page: usize) -> Result<usize, SessionError> {
        let page_count = self.page_count();
        if self.document.is_none() {
            return Err(SessionError::NoDocument);
        }
        if page == 0 || page > page_count {
            return Err(SessionError::PageOutOfRange { page, page_count });
        }
        self.current_page = page;
        Ok(page)
    }

    /// 在当前文档中搜索，并记住查询和结果
    pub fn search(&mut self, query: &str) -> &[SearchResult] {
        self.search_results = match &self.document {
            Some(doc) => pdf_core::search(&doc.text, query),
            None => Vec::new(),
        };
        self.last_query = Some(query.to_string());
        &self.search_results
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn search_results(&self) -> &[SearchResult] {
        &self.search_results
    }

    /// Records the question and the responder's answer.
    ///
    /// Returns `Ok(None)` for a blank question.
    pub fn ask(
        &mut self,
        responder: &dyn Responder,
        question: &str,
    ) -> Result<Option<&ChatMessage>, SessionError> {
        if self.document.is_none() {
            return Err(SessionError::NoDocument);
        }
        let question = question.trim();
        if question.is_empty() {
            return Ok(None);
        }

        self.chat.push(ChatMessage::new(Sender::User, question));
        let answer = responder.respond(question);
        self.chat.push(ChatMessage::new(Sender::Ai, answer));
        Ok(self.chat.last())
    }

    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    /// Clears the conversation, keeps the document and page.
    pub fn new_chat(&mut self) {
        self.chat.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoResponder;

    impl Responder for EchoResponder {
        fn respond(&self, query: &str) -> String {
            format!("echo: {query}")
        }
    }

    fn three_pages() -> Document {
        Document::from_pages(
            vec![
                "Intro\nHello world".to_string(),
                "Methods".to_string(),
                "Results\nhello again".to_string(),
            ],
            Some("paper.pdf".to_string()),
        )
    }

    fn open_session() -> Session {
        let mut session = Session::new();
        session.open(three_pages());
        session
    }

    #[test]
    fn test_new_session_has_no_document() {
        let mut session = Session::new();
        assert!(session.document().is_none());
        assert_eq!(session.current_page(), 0);
        assert_eq!(session.current_page_text(), None);
        assert_eq!(session.next_page(), 0);
        assert_eq!(session.goto_page(1), Err(SessionError::NoDocument));
        assert!(session.search("hello").is_empty());
        assert!(matches!(
            session.ask(&EchoResponder, "hi"),
            Err(SessionError::NoDocument)
        ));
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut session = open_session();
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.prev_page(), 1);
        assert_eq!(session.next_page(), 2);
        assert_eq!(session.next_page(), 3);
        assert_eq!(session.next_page(), 3);
        assert_eq!(session.current_page_text(), Some("Results\nhello again"));
    }

    #[test]
    fn test_goto_page_out_of_range_keeps_page() {
        let mut session = open_session();
        assert_eq!(session.goto_page(2), Ok(2));
        assert_eq!(
            session.goto_page(4),
            Err(SessionError::PageOutOfRange { page: 4, page_count: 3 })
        );
        assert_eq!(
            session.goto_page(0),
            Err(SessionError::PageOutOfRange { page: 0, page_count: 3 })
        );
        assert_eq!(session.current_page(), 2);
    }

    #[test]
    fn test_empty_document_has_no_current_page() {
        let mut session = Session::new();
        session.open(Document::from_pages(Vec::new(), None));
        assert_eq!(session.current_page(), 0);
        assert_eq!(session.next_page(), 0);
        assert_eq!(session.prev_page(), 0);
    }

    #[test]
    fn test_search_is_remembered_with_pages() {
        let mut session = open_session();
        let count = session.search("HELLO").len();
        assert_eq!(count, 2);
        assert_eq!(session.last_query(), Some("HELLO"));

        let doc = session.document().unwrap();
        let pages: Vec<Option<usize>> = session
            .search_results()
            .iter()
            .map(|r| doc.page_of_line(r.line))
            .collect();
        assert_eq!(pages, vec![Some(1), Some(3)]);
    }

    #[test]
    fn test_ask_records_both_messages() {
        let mut session = open_session();
        let answer = session.ask(&EchoResponder, "  what is this?  ").unwrap().unwrap();
        assert_eq!(answer.sender, Sender::Ai);
        assert_eq!(answer.text, "echo: what is this?");

        let chat = session.chat();
        assert_eq!(chat.len(), 2);
        assert_eq!(chat[0].sender, Sender::User);
        assert_eq!(chat[0].text, "what is this?");
        assert_ne!(chat[0].id, chat[1].id);
    }

    #[test]
    fn test_blank_question_is_ignored() {
        let mut session = open_session();
        assert!(session.ask(&EchoResponder, "   ").unwrap().is_none());
        assert!(session.chat().is_empty());
    }

    #[test]
    fn test_new_chat_keeps_document() {
        let mut session = open_session();
        session.next_page();
        session.ask(&EchoResponder, "hi").unwrap();
        session.new_chat();
        assert!(session.chat().is_empty());
        assert_eq!(session.current_page(), 2);
        assert!(session.document().is_some());
    }

    #[test]
    fn test_open_replaces_state() {
        let mut session = open_session();
        session.goto_page(3).unwrap();
        session.search("hello");
        session.ask(&EchoResponder, "hi").unwrap();

        session.open(Document::from_pages(vec!["new".to_string()], None));
        assert_eq!(session.current_page(), 1);
        assert!(session.chat().is_empty());
        assert!(session.search_results().is_empty());
        assert_eq!(session.last_query(), None);
    }

    #[test]
    fn test_reset() {
        let mut session = open_session();
        session.reset();
        assert!(session.document().is_none());
        assert_eq!(session.current_page(), 0);
    }
}
