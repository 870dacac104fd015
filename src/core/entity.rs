//! Catalog Entity Model
//!
//! Tagged union over the three entity kinds the catalog serves, plus the
//! credit/cast records that connect them. The JSON shape mirrors the external
//! catalog: the union is tagged by `media_type` so payloads pass through
//! largely unchanged, while Rust code gets exhaustive matching instead of
//! string-keyed dispatch.

use serde::{Deserialize, Serialize};

// ============================================================================
// Kinds and Keys
// ============================================================================

/// The closed set of entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Person,
    Movie,
    Tv,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Person => write!(f, "person"),
            EntityKind::Movie => write!(f, "movie"),
            EntityKind::Tv => write!(f, "tv"),
        }
    }
}

/// The composite `(kind, id)` key that uniquely identifies a board node.
///
/// Ids are only unique per kind, so the kind is part of the identity.
/// `Ord` lets callers canonicalize unordered pairs as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey {
    pub kind: EntityKind,
    pub id: u64,
}

impl NodeKey {
    pub fn new(kind: EntityKind, id: u64) -> Self {
        Self { kind, id }
    }

    pub fn person(id: u64) -> Self {
        Self::new(EntityKind::Person, id)
    }

    pub fn movie(id: u64) -> Self {
        Self::new(EntityKind::Movie, id)
    }

    pub fn tv(id: u64) -> Self {
        Self::new(EntityKind::Tv, id)
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

// ============================================================================
// Credits and Cast
// ============================================================================

/// A person's appearance in a movie or TV show.
///
/// `target_id` is the production's catalog id. The guest flag is the result
/// of merging a production's normal credit list with the separately-fetched
/// guest-appearance list; see [`merge_guest_appearances`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    pub target_id: u64,
    #[serde(default)]
    pub credit_id: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub guest_appearance: bool,
}

impl Credit {
    pub fn regular(target_id: u64) -> Self {
        Self {
            target_id,
            credit_id: None,
            character: None,
            guest_appearance: false,
        }
    }

    pub fn guest(target_id: u64) -> Self {
        Self {
            target_id,
            credit_id: None,
            character: None,
            guest_appearance: true,
        }
    }
}

/// A cast row on a movie or TV show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub person_id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
}

impl CastMember {
    pub fn new(person_id: u64, name: &str) -> Self {
        Self {
            person_id,
            name: name.to_string(),
            character: None,
        }
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A person, with lazily-filled credit lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub also_known_as: Vec<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub movie_credits: Vec<Credit>,
    #[serde(default)]
    pub tv_credits: Vec<Credit>,
}

impl Person {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            also_known_as: Vec::new(),
            profile_path: None,
            popularity: 0.0,
            movie_credits: Vec::new(),
            tv_credits: Vec::new(),
        }
    }

    /// Whether credit lists have been attached yet.
    pub fn has_credits(&self) -> bool {
        !self.movie_credits.is_empty() || !self.tv_credits.is_empty()
    }
}

/// A movie, with its cast list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

impl Movie {
    pub fn new(id: u64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            original_title: None,
            poster_path: None,
            popularity: 0.0,
            genre_ids: Vec::new(),
            cast: Vec::new(),
        }
    }
}

/// A TV show, with its (regular) cast list.
///
/// Guest stars are typically absent from `cast`; they are recovered from the
/// person side via tv-credit and guest-appearance lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvShow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

impl TvShow {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            original_name: None,
            poster_path: None,
            popularity: 0.0,
            genre_ids: Vec::new(),
            cast: Vec::new(),
        }
    }
}

/// The tagged union the rest of the engine works over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type")]
pub enum Entity {
    #[serde(rename = "person")]
    Person(Person),
    #[serde(rename = "movie")]
    Movie(Movie),
    #[serde(rename = "tv")]
    Tv(TvShow),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Person(_) => EntityKind::Person,
            Entity::Movie(_) => EntityKind::Movie,
            Entity::Tv(_) => EntityKind::Tv,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Entity::Person(p) => p.id,
            Entity::Movie(m) => m.id,
            Entity::Tv(s) => s.id,
        }
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::new(self.kind(), self.id())
    }

    pub fn display_title(&self) -> &str {
        match self {
            Entity::Person(p) => &p.name,
            Entity::Movie(m) => &m.title,
            Entity::Tv(s) => &s.name,
        }
    }

    /// Alternate titles/names considered by the exact-match stage.
    pub fn alternate_titles(&self) -> Vec<&str> {
        match self {
            Entity::Person(p) => p.also_known_as.iter().map(String::as_str).collect(),
            Entity::Movie(m) => m.original_title.iter().map(String::as_str).collect(),
            Entity::Tv(s) => s.original_name.iter().map(String::as_str).collect(),
        }
    }

    /// The kind-appropriate image field (profile for people, poster for
    /// productions).
    pub fn image_path(&self) -> Option<&str> {
        match self {
            Entity::Person(p) => p.profile_path.as_deref(),
            Entity::Movie(m) => m.poster_path.as_deref(),
            Entity::Tv(s) => s.poster_path.as_deref(),
        }
    }

    pub fn popularity(&self) -> f64 {
        match self {
            Entity::Person(p) => p.popularity,
            Entity::Movie(m) => m.popularity,
            Entity::Tv(s) => s.popularity,
        }
    }

    /// Genre membership; people carry none.
    pub fn genre_ids(&self) -> &[u64] {
        match self {
            Entity::Person(_) => &[],
            Entity::Movie(m) => &m.genre_ids,
            Entity::Tv(s) => &s.genre_ids,
        }
    }

    /// The catalog never issues id 0; entities carrying it are treated as
    /// malformed and skipped by indexing, discovery and search.
    pub fn is_malformed(&self) -> bool {
        self.id() == 0
    }
}

// ============================================================================
// Credit Merging
// ============================================================================

/// Best-effort fallback for rows with no explicit guest flag: sniff for the
/// substring "guest" in the credit id or character string.
///
/// This misfires on any character name that happens to contain "guest"
/// coincidentally. It is kept only for catalog payloads that omit the
/// explicit flag; rows that carry the flag never reach it.
pub fn looks_like_guest_row(credit: &Credit) -> bool {
    let contains_guest = |s: &str| s.to_lowercase().contains("guest");
    credit.credit_id.as_deref().is_some_and(contains_guest)
        || credit.character.as_deref().is_some_and(contains_guest)
}

/// Annotate a raw credit list whose payload carried no explicit guest flag,
/// using [`looks_like_guest_row`]. Only ever sets the flag, never clears it.
pub fn annotate_guest_rows(credits: &mut [Credit]) {
    for credit in credits {
        if !credit.guest_appearance && looks_like_guest_row(credit) {
            credit.guest_appearance = true;
        }
    }
}

/// Merge a separately-fetched guest-appearance list into a person's TV
/// credits.
///
/// The guest flag is monotone: a credit already present as regular cast is
/// never downgraded to guest, while a credit known only through the guest
/// list is always marked guest.
pub fn merge_guest_appearances(credits: &mut Vec<Credit>, guest_rows: Vec<Credit>) {
    for mut row in guest_rows {
        // Already known as regular cast; keep it regular.
        if credits.iter().any(|c| c.target_id == row.target_id) {
            continue;
        }
        row.guest_appearance = true;
        credits.push(row);
    }
}

// ============================================================================
// Tests
// ============================================================================
