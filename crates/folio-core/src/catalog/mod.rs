//! Read-only post catalog backing the carousel cards and the reader modal.

mod posts;

pub use posts::{SITE_POSTS, site_catalog};

/// Heading shown by the reader when a post id cannot be resolved.
pub const FALLBACK_TITLE: &str = "Content Not Found";

/// Body shown by the reader when a post id cannot be resolved.
pub const FALLBACK_BODY: &str =
    "<p>Sorry, the blog content you're looking for is not available.</p>";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PostStatus {
    Featured,
    Published,
}

impl PostStatus {
    /// Capitalized badge text shown on carousel cards.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::Published => "Published",
        }
    }
}

/// Calendar date used for display only.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublishedDate {
    pub year: u16,
    /// 1..=12
    pub month: u8,
    pub day: u8,
}

impl PublishedDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn month_name(self) -> Option<&'static str> {
        match self.month {
            1 => Some("January"),
            2 => Some("February"),
            3 => Some("March"),
            4 => Some("April"),
            5 => Some("May"),
            6 => Some("June"),
            7 => Some("July"),
            8 => Some("August"),
            9 => Some("September"),
            10 => Some("October"),
            11 => Some("November"),
            12 => Some("December"),
            _ => None,
        }
    }
}

/// One blog post. Catalog entries live for the whole process.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PostRecord {
    /// Stable key shared by the read trigger, the reader and the position store.
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    /// Teaser text rendered on the carousel card.
    pub summary: &'static str,
    pub body_html: &'static str,
    pub status: PostStatus,
    pub published: PublishedDate,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogError {
    NotFound,
}

/// Ordered, read-only sequence of posts. Order defines carousel paging order.
pub trait PostCatalog {
    fn post_count(&self) -> u16;
    fn post_at(&self, index: u16) -> Option<&PostRecord>;

    fn index_of(&self, id: &str) -> Option<u16> {
        (0..self.post_count()).find(|&index| self.post_at(index).is_some_and(|post| post.id == id))
    }

    fn post_by_id(&self, id: &str) -> Option<&PostRecord> {
        self.index_of(id).and_then(|index| self.post_at(index))
    }

    /// Rendered body for `id`, or [`CatalogError::NotFound`].
    fn body_of(&self, id: &str) -> Result<&str, CatalogError> {
        self.post_by_id(id)
            .map(|post| post.body_html)
            .ok_or(CatalogError::NotFound)
    }
}

/// Catalog over a static slice of posts.
#[derive(Clone, Copy, Debug)]
pub struct StaticCatalog<'a> {
    posts: &'a [PostRecord],
}

impl<'a> StaticCatalog<'a> {
    pub const fn new(posts: &'a [PostRecord]) -> Self {
        Self { posts }
    }

    pub fn iter(&self) -> core::slice::Iter<'a, PostRecord> {
        self.posts.iter()
    }
}

impl PostCatalog for StaticCatalog<'_> {
    fn post_count(&self) -> u16 {
        self.posts.len().min(u16::MAX as usize) as u16
    }

    fn post_at(&self, index: u16) -> Option<&PostRecord> {
        self.posts.get(index as usize)
    }
}
