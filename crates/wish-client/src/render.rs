//! Board Rendering
//!
//! Pure `data -> markup` functions for the feed and detail views. Every
//! user-authored string is escaped; ids, counts and categories come from
//! typed fields and are inserted as-is.
//!
//! Buttons carry `data-action` / `data-wish-id` attributes instead of
//! inline handlers; the board decodes clicks with `BoardAction::parse`.

use std::fmt::Write;

use crate::domain::Wish;

pub const EMPTY_FEED: &str = r#"<p class="no-wishes">No wishes yet. Be the first to share!</p>"#;

/// Escape text for insertion into element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Click targets on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    Like(u64),
    Comment(u64),
    View(u64),
    Back,
}

impl BoardAction {
    /// Decode the `data-action` / `data-wish-id` pair of a clicked button
    pub fn parse(action: &str, wish_id: Option<&str>) -> Option<Self> {
        let id = || wish_id.and_then(|s| s.trim().parse::<u64>().ok());
        match action {
            "like" => id().map(BoardAction::Like),
            "comment" => id().map(BoardAction::Comment),
            "view" => id().map(BoardAction::View),
            "back" => Some(BoardAction::Back),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BoardAction::Like(_) => "like",
            BoardAction::Comment(_) => "comment",
            BoardAction::View(_) => "view",
            BoardAction::Back => "back",
        }
    }

    fn attrs(&self) -> String {
        match self {
            BoardAction::Like(id) | BoardAction::Comment(id) | BoardAction::View(id) => {
                format!(r#"data-action="{}" data-wish-id="{}""#, self.name(), id)
            }
            BoardAction::Back => format!(r#"data-action="{}""#, self.name()),
        }
    }
}

/// Feed markup for a page of wishes
pub fn render_feed(wishes: &[Wish]) -> String {
    if wishes.is_empty() {
        return EMPTY_FEED.to_string();
    }
    wishes.iter().map(render_wish_card).collect()
}

pub fn render_wish_card(wish: &Wish) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="wish-card">
    <div class="wish-header">
        <h3>{title}</h3>
        <span class="wish-category">{category}</span>
    </div>
    <p class="wish-content">{content}</p>
    <div class="wish-author">
        <strong>{author}</strong>
    </div>
    <div class="wish-stats">
        <span class="stat">❤️ {likes}</span>
        <span class="stat">💬 {comments}</span>
    </div>
    <div class="wish-actions">
        <button type="button" {like} class="action-btn">Like</button>
        <button type="button" {comment} class="action-btn">Comment</button>
        <button type="button" {view} class="action-btn">View</button>
    </div>
</div>
"#,
        title = escape_html(&wish.title),
        category = wish.category.as_str(),
        content = escape_html(&wish.content),
        author = escape_html(wish.author.name()),
        likes = wish.likes_count,
        comments = wish.comments_count,
        like = BoardAction::Like(wish.id).attrs(),
        comment = BoardAction::Comment(wish.id).attrs(),
        view = BoardAction::View(wish.id).attrs(),
    );
    html
}

/// Detail markup: the wish plus its comments, replacing the feed
pub fn render_detail(wish: &Wish) -> String {
    let comments: String = wish
        .comments
        .iter()
        .flatten()
        .map(|comment| {
            format!(
                r#"
            <div class="comment">
                <strong>{}</strong>
                <p>{}</p>
            </div>"#,
                escape_html(comment.author.name()),
                escape_html(&comment.content)
            )
        })
        .collect();

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="wish-detail">
    <button type="button" {back} class="back-btn">← Back</button>
    <h2>{title}</h2>
    <div class="detail-author">By {author}</div>
    <p class="detail-content">{content}</p>
    <div class="detail-stats">
        <span>❤️ {likes} likes</span>
        <span>💬 {count} comments</span>
    </div>
    <div class="comments-section">
        <h3>Comments</h3>{comments}
    </div>
</div>
"#,
        back = BoardAction::Back.attrs(),
        title = escape_html(&wish.title),
        author = escape_html(wish.author.name()),
        content = escape_html(&wish.content),
        likes = wish.likes_count,
        count = wish.comments_count,
        comments = comments,
    );
    html
}
