//! Commit object
//!
//! A commit points at one tree, optionally at a parent commit, and records who
//! wrote it, who committed it and why.
//!
//! ## Format
//!
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! The `parent` line is omitted for root commits. Author and committer lines
//! are always present.

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{ObjectError, ObjectResult};
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};

const DEFAULT_NAME: &str = "mingit";
const DEFAULT_EMAIL: &str = "mingit@localhost";

/// Author or committer identity with the moment it acted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: DateTime<FixedOffset>,
}

impl Author {
    /// Identity stamped with the current time at a fixed `+0000` offset.
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Utc::now().fixed_offset(),
        }
    }

    pub fn new_with_timestamp(name: String, email: String, timestamp: DateTime<FixedOffset>) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Author from `GIT_AUTHOR_NAME`, `GIT_AUTHOR_EMAIL` and `GIT_AUTHOR_DATE`,
    /// falling back to a fixed identity and the current time.
    pub fn author_from_env() -> Self {
        Self::from_env(
            ("GIT_AUTHOR_NAME", "GIT_AUTHOR_EMAIL", "GIT_AUTHOR_DATE"),
            (DEFAULT_NAME, DEFAULT_EMAIL),
        )
    }

    /// Committer from the `GIT_COMMITTER_*` variables; unset ones default to
    /// the author's.
    pub fn committer_from_env(author: &Author) -> Self {
        let committer = Self::from_env(
            ("GIT_COMMITTER_NAME", "GIT_COMMITTER_EMAIL", "GIT_COMMITTER_DATE"),
            (author.name.as_str(), author.email.as_str()),
        );

        if std::env::var("GIT_COMMITTER_DATE").is_ok() {
            committer
        } else {
            Author {
                timestamp: author.timestamp,
                ..committer
            }
        }
    }

    fn from_env(vars: (&str, &str, &str), defaults: (&str, &str)) -> Self {
        let (name_var, email_var, date_var) = vars;
        let name = std::env::var(name_var).unwrap_or_else(|_| defaults.0.to_string());
        let email = std::env::var(email_var).unwrap_or_else(|_| defaults.1.to_string());
        let timestamp = std::env::var(date_var)
            .ok()
            .and_then(|date| Self::parse_date(&date));

        match timestamp {
            Some(timestamp) => Author::new_with_timestamp(name, email, timestamp),
            None => {
                if std::env::var(date_var).is_ok() {
                    log::warn!("ignoring unparsable {date_var}, using the current time");
                }
                Author::new(name, email)
            }
        }
    }

    fn parse_date(date: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(date)
            .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
            .ok()
    }

    /// "Name <email>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// "Name <email> <unix-seconds> <+hhmm>"
    pub fn display(&self) -> String {
        format!(
            "{} {} {}",
            self.display_name(),
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    fn parse_offset(offset: &str) -> Option<FixedOffset> {
        let (sign, digits) = match offset.split_at_checked(1)? {
            ("+", digits) => (1, digits),
            ("-", digits) => (-1, digits),
            _ => return None,
        };
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let hours: i32 = digits[..2].parse().ok()?;
        let minutes: i32 = digits[2..].parse().ok()?;
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
    }
}

impl TryFrom<&str> for Author {
    type Error = ObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let invalid = || ObjectError::malformed(format!("invalid identity line {value:?}"));

        let mut parts = value.rsplitn(3, ' ');
        let offset = parts.next().and_then(Self::parse_offset).ok_or_else(invalid)?;
        let seconds = parts
            .next()
            .and_then(|seconds| seconds.parse::<i64>().ok())
            .ok_or_else(invalid)?;
        let identity = parts.next().ok_or_else(invalid)?;

        let (name, email) = identity
            .strip_suffix('>')
            .and_then(|identity| identity.rsplit_once('<'))
            .ok_or_else(invalid)?;

        let timestamp = DateTime::from_timestamp(seconds, 0)
            .ok_or_else(invalid)?
            .with_timezone(&offset);

        Ok(Author::new_with_timestamp(
            name.trim_end().to_string(),
            email.to_string(),
            timestamp,
        ))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Empty for a root commit
    parents: Vec<ObjectId>,
    tree_oid: ObjectId,
    author: Author,
    committer: Author,
    message: String,
}

impl Commit {
    pub fn new(
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        author: Author,
        committer: Author,
        mut message: String,
    ) -> Self {
        if !message.is_empty() && !message.ends_with('\n') {
            message.push('\n');
        }

        Commit {
            parents: parent.into_iter().collect(),
            tree_oid,
            author,
            committer,
            message,
        }
    }

    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Message as stored: a non-empty message always ends with a newline.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }

    /// Commit payload without the object header.
    pub fn payload(&self) -> String {
        let mut lines = vec![format!("tree {}", self.tree_oid)];
        for parent in &self.parents {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("author {}", self.author.display()));
        lines.push(format!("committer {}", self.committer.display()));
        lines.push(String::new());
        lines.push(self.message.clone());

        lines.join("\n")
    }
}

impl Packable for Commit {
    fn serialize(&self) -> ObjectResult<Bytes> {
        Ok(frame(self.object_type(), self.payload().as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(payload: Bytes) -> ObjectResult<Self> {
        let content = std::str::from_utf8(&payload)
            .map_err(|_| ObjectError::malformed("commit is not valid UTF-8"))?;
        let (headers, message) = content
            .split_once("\n\n")
            .ok_or_else(|| ObjectError::malformed("commit has no message separator"))?;

        let mut tree_oid = None;
        let mut parents = Vec::new();
        let mut author = None;
        let mut committer = None;

        for line in headers.lines() {
            match line.split_once(' ') {
                Some(("tree", oid)) => tree_oid = Some(parse_header_oid(oid)?),
                Some(("parent", oid)) => parents.push(parse_header_oid(oid)?),
                Some(("author", identity)) => author = Some(Author::try_from(identity)?),
                Some(("committer", identity)) => committer = Some(Author::try_from(identity)?),
                // extra headers (encoding, gpgsig and its continuation lines)
                _ => {}
            }
        }

        Ok(Commit {
            parents,
            tree_oid: tree_oid.ok_or_else(|| ObjectError::malformed("commit has no tree"))?,
            author: author.ok_or_else(|| ObjectError::malformed("commit has no author"))?,
            committer: committer
                .ok_or_else(|| ObjectError::malformed("commit has no committer"))?,
            message: message.to_string(),
        })
    }
}

fn parse_header_oid(oid: &str) -> ObjectResult<ObjectId> {
    ObjectId::try_parse(oid)
        .map_err(|_| ObjectError::malformed(format!("invalid object id {oid:?} in commit")))
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        self.payload()
    }
}
