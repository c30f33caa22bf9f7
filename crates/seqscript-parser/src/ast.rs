//! Statement model for the seqscript language

use std::fmt;

/// The kind of a declared participant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantKind {
    Actor,
    Participant,
    Database,
}

impl fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantKind::Actor => write!(f, "ACTOR"),
            ParticipantKind::Participant => write!(f, "PARTICIPANT"),
            ParticipantKind::Database => write!(f, "DATABASE"),
        }
    }
}

/// Arrow style of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    /// `->`
    Right,
    /// `-->`
    RightDashed,
    /// `<-`
    Left,
    /// `<--`
    LeftDashed,
}

impl Arrow {
    /// The source spelling of the arrow
    pub fn as_str(&self) -> &'static str {
        match self {
            Arrow::Right => "->",
            Arrow::RightDashed => "-->",
            Arrow::Left => "<-",
            Arrow::LeftDashed => "<--",
        }
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A declared participant: `ACTOR me` or `PARTICIPANT world as w`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Participant name
    pub name: String,
    /// Participant kind
    pub kind: ParticipantKind,
    /// Optional alias (`as w`)
    pub alias: Option<String>,
}

/// One exchange between two participants: `me -> w : hello`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Sender name
    pub from: String,
    /// Receiver name
    pub to: String,
    /// Arrow style
    pub arrow: Arrow,
    /// Free text after `:`, whitespace-trimmed; empty when absent
    pub description: String,
}

/// One parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A participant declaration
    Definition(Definition),
    /// A message exchange
    Message(Message),
    /// An empty line
    Blank,
}
