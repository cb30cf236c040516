use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a card, unique within a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub String);

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Opaque card metadata. Carried along with the card, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(flatten)]
    pub meta: CardMeta,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            title: title.into(),
            meta: CardMeta::default(),
        }
    }
}

/// A titled, ordered list of cards. Vector order is display order.
///
/// `cards` has no serde default: a column without a card list is a malformed
/// board and must fail to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            id: ColumnId(id.into()),
            title: title.into(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a signed index. Negative (sentinel) and out-of-range indices
    /// yield `None`.
    pub fn card(&self, card_index: isize) -> Option<&Card> {
        usize::try_from(card_index)
            .ok()
            .and_then(|index| self.cards.get(index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn column(&self, column_index: usize) -> Option<&Column> {
        self.columns.get(column_index)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn card_at(&self, column_index: usize, card_index: isize) -> Option<&Card> {
        self.column(column_index)?.card(card_index)
    }

    /// Demo board used by the host binary when no board file is given.
    pub fn sample() -> Self {
        let mut review = Card::new("KB-4", "Review drag reconciliation");
        review.meta.assignee = Some("sam".into());
        review.meta.tags = vec!["engine".into()];

        let mut release = Card::new("KB-6", "Cut 0.1 release");
        release.meta.priority = Some("high".into());
        release.meta.due_date = Some("2026-11-02".into());

        Self::new(vec![
            Column::new(
                "backlog",
                "Backlog",
                vec![
                    Card::new("KB-1", "Sketch board layout"),
                    Card::new("KB-2", "Write key bindings"),
                    Card::new("KB-3", "Config file loader"),
                ],
            ),
            Column::new("doing", "In Progress", vec![review]),
            Column::new("blocked", "Blocked", Vec::new()),
            Column::new(
                "done",
                "Done",
                vec![Card::new("KB-5", "Pick terminal backend"), release],
            ),
        ])
    }
}
