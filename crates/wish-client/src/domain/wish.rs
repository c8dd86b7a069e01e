//! Wish Domain Types

use serde::{Deserialize, Serialize};

/// Wish category
///
/// The composer offers a closed set; anything else the server sends is
/// folded into `Other` so rendering never sees arbitrary text here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Education,
    Career,
    Health,
    Travel,
    Hobby,
    #[serde(other)]
    Other,
}

impl Category {
    /// Categories offered by the composer, in display order
    pub const SELECTABLE: [Category; 6] = [
        Category::General,
        Category::Education,
        Category::Career,
        Category::Health,
        Category::Travel,
        Category::Hobby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Education => "education",
            Category::Career => "career",
            Category::Health => "health",
            Category::Travel => "travel",
            Category::Hobby => "hobby",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Education => "Education",
            Category::Career => "Career",
            Category::Health => "Health",
            Category::Travel => "Travel",
            Category::Hobby => "Hobby",
            Category::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "general" => Category::General,
            "education" => Category::Education,
            "career" => Category::Career,
            "health" => Category::Health,
            "travel" => Category::Travel,
            "hobby" => Category::Hobby,
            _ => Category::Other,
        }
    }
}

/// Author summary embedded in wishes and comments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Author {
    /// Display name, falling back to the username
    pub fn name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
    #[serde(default)]
    pub author: Author,
}

/// Wish as returned by the feed and detail endpoints
///
/// `comments` is only populated by `GET /wishes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

fn default_true() -> bool {
    true
}

/// `GET /wishes` response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WishPage {
    #[serde(default)]
    pub wishes: Vec<Wish>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// `POST /wishes` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewWish {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub is_public: bool,
}

/// `POST /wishes/{id}/like` response; the client only reloads afterwards
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LikeStatus {
    #[serde(default)]
    pub liked: Option<bool>,
    #[serde(default)]
    pub likes_count: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}
