use std::sync::atomic::{AtomicU64, Ordering};

use crate::classes::ClassList;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tag vocabulary of the comparison-table markup convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Generic container (the features-table wrapper is one of these).
    Div,
    Table,
    Tr,
    Th,
    Td,
}

/// What an element holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// A node in the table tree: a tag, an id, a class list, and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub tag: Tag,
    pub classes: ClassList,
    pub content: Content,
}

impl Element {
    fn with_tag(tag: Tag, prefix: &str) -> Self {
        Self {
            id: generate_id(prefix),
            tag,
            classes: ClassList::new(),
            content: Content::None,
        }
    }

    pub fn div() -> Self {
        Self::with_tag(Tag::Div, "div")
    }

    pub fn table() -> Self {
        Self::with_tag(Tag::Table, "table")
    }

    pub fn tr() -> Self {
        Self::with_tag(Tag::Tr, "tr")
    }

    /// Header cell with the given text content.
    pub fn th(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::with_tag(Tag::Th, "th")
        }
    }

    /// Data cell with the given text content.
    pub fn td(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::with_tag(Tag::Td, "td")
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, token: impl AsRef<str>) -> Self {
        self.classes.insert(token.as_ref());
        self
    }

    /// Replace the class list with one parsed from a raw attribute string.
    pub fn classes(mut self, raw: &str) -> Self {
        self.classes = ClassList::parse(raw);
        self
    }

    /// Case-sensitive whole-token membership in this element's class list.
    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    /// Ensure `token` is present; returns the resulting class string.
    pub fn add_class(&mut self, token: &str) -> String {
        self.classes.insert(token);
        self.classes.to_string()
    }

    /// Remove `token` if present; returns the resulting class string.
    pub fn remove_class(&mut self, token: &str) -> String {
        self.classes.remove(token);
        self.classes.to_string()
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
