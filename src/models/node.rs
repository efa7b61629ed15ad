// src/models/node.rs

use serde::{Deserialize, Serialize};

/// The symbolic element kind of a content node.
///
/// Serialized as the element name used in the source markup (`"div"`, `"h2"`,
/// `"li"`, `"Zap"` …). Lowercase names that are not recognised map to
/// [`Tag::Container`]; capitalised names are component references and map to
/// [`Tag::Icon`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    /// A generic block container (`div`, `section`, …). Keeps its source name.
    Container(String),
    /// A heading of level 1 to 4.
    Heading(u8),
    /// A paragraph (`p`).
    Paragraph,
    /// An unordered or ordered list (`ul`, `ol`).
    List,
    /// A list item (`li`).
    ListItem,
    /// A table (`table`).
    Table,
    /// A row group inside a table (`thead`, `tbody`, `tfoot`).
    TableSection(TableSectionKind),
    /// A table row (`tr`).
    TableRow,
    /// A table cell; `header` is true for `th`.
    TableCell { header: bool },
    /// Inline text (`span`, `strong`, `b`, `em`, `i`). `strong` marks bold-by-default tags.
    Inline { strong: bool, name: String },
    /// An explicit line break (`br`).
    LineBreak,
    /// An icon component reference (e.g. `Zap`, `Cpu`).
    Icon(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableSectionKind {
    Header,
    Body,
    Footer,
}

impl Tag {
    /// Maps an element name to its tag.
    pub fn from_name(name: &str) -> Tag {
        match name {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "p" => Tag::Paragraph,
            "ul" | "ol" => Tag::List,
            "li" => Tag::ListItem,
            "table" => Tag::Table,
            "thead" => Tag::TableSection(TableSectionKind::Header),
            "tbody" => Tag::TableSection(TableSectionKind::Body),
            "tfoot" => Tag::TableSection(TableSectionKind::Footer),
            "tr" => Tag::TableRow,
            "th" => Tag::TableCell { header: true },
            "td" => Tag::TableCell { header: false },
            "strong" | "b" => Tag::Inline {
                strong: true,
                name: name.to_string(),
            },
            "span" | "em" | "i" | "small" | "code" | "a" => Tag::Inline {
                strong: false,
                name: name.to_string(),
            },
            "br" => Tag::LineBreak,
            other if other.starts_with(|c: char| c.is_ascii_uppercase()) => {
                Tag::Icon(other.to_string())
            }
            other => Tag::Container(other.to_string()),
        }
    }

    /// The element name this tag was created from.
    pub fn name(&self) -> String {
        match self {
            Tag::Container(name) | Tag::Icon(name) => name.clone(),
            Tag::Inline { name, .. } => name.clone(),
            Tag::Heading(level) => format!("h{}", level),
            Tag::Paragraph => "p".to_string(),
            Tag::List => "ul".to_string(),
            Tag::ListItem => "li".to_string(),
            Tag::Table => "table".to_string(),
            Tag::TableSection(TableSectionKind::Header) => "thead".to_string(),
            Tag::TableSection(TableSectionKind::Body) => "tbody".to_string(),
            Tag::TableSection(TableSectionKind::Footer) => "tfoot".to_string(),
            Tag::TableRow => "tr".to_string(),
            Tag::TableCell { header: true } => "th".to_string(),
            Tag::TableCell { header: false } => "td".to_string(),
            Tag::LineBreak => "br".to_string(),
        }
    }

    /// Block-level tags join the flattened text of their children with a newline.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Tag::Container(_) | Tag::Paragraph | Tag::ListItem | Tag::TableCell { .. }
        )
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Tag::from_name(&name)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.name()
    }
}

/// One child of a content node: raw text or a nested node.
/// In JSON a text leaf is a plain string and a nested node is an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Node(Node),
}

impl Child {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            Child::Text(_) => None,
        }
    }
}

/// An element of the slide content tree.
/// Immutable once parsed; child order is the layout and draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// The element kind.
    pub tag: Tag,

    /// The raw style-hint string (Tailwind-like utility classes).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class_name: String,

    /// Ordered children: text leaves or nested nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Child>,
}

impl Node {
    pub fn new(tag: &str, class_name: &str) -> Self {
        Node {
            tag: Tag::from_name(tag),
            class_name: class_name.to_string(),
            children: Vec::new(),
        }
    }

    /// Appends a nested node (builder style).
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(Child::Node(node));
        self
    }

    /// Appends a text leaf (builder style).
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Child::Text(text.to_string()));
        self
    }

    /// Iterates over the nested nodes only, skipping text leaves.
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Child::as_node)
    }
}
