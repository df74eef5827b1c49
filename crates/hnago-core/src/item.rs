use serde::{Deserialize, Serialize};

use crate::{ItemId, Timestamp, Timestamped};

/// A submitted story, as returned by the item endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: ItemId,
    pub by: String,
    pub title: String,
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids: Option<Vec<ItemId>>,
    pub time: Timestamp,
}

impl Post {
    /// Ids of direct replies, in the order the API lists them
    pub fn kids(&self) -> &[ItemId] {
        self.kids.as_deref().unwrap_or_default()
    }
}

/// A reply to a [`Post`] or to another [`Comment`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: ItemId,
    pub by: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids: Option<Vec<ItemId>>,
    pub parent: ItemId,
    pub time: Timestamp,
}

impl Comment {
    pub fn kids(&self) -> &[ItemId] {
        self.kids.as_deref().unwrap_or_default()
    }
}

/// Either kind of item
///
/// The API does not need a discriminator for these two shapes: a post
/// has `title` and `score`, a comment has `text` and `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Post(Post),
    Comment(Comment),
}

impl Item {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn id(&self) -> ItemId {
        match self {
            Item::Post(post) => post.id,
            Item::Comment(comment) => comment.id,
        }
    }

    pub fn by(&self) -> &str {
        match self {
            Item::Post(post) => &post.by,
            Item::Comment(comment) => &comment.by,
        }
    }

    pub fn kids(&self) -> &[ItemId] {
        match self {
            Item::Post(post) => post.kids(),
            Item::Comment(comment) => comment.kids(),
        }
    }

    pub fn as_post(&self) -> Option<&Post> {
        match self {
            Item::Post(post) => Some(post),
            Item::Comment(_) => None,
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Item::Comment(comment) => Some(comment),
            Item::Post(_) => None,
        }
    }
}

impl From<Post> for Item {
    fn from(value: Post) -> Self {
        Self::Post(value)
    }
}

impl From<Comment> for Item {
    fn from(value: Comment) -> Self {
        Self::Comment(value)
    }
}

impl Timestamped for Post {
    fn time(&self) -> Timestamp {
        self.time
    }
}

impl Timestamped for Comment {
    fn time(&self) -> Timestamp {
        self.time
    }
}

impl Timestamped for Item {
    fn time(&self) -> Timestamp {
        match self {
            Item::Post(post) => post.time,
            Item::Comment(comment) => comment.time,
        }
    }
}
