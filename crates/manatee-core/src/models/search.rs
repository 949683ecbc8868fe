use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::api::{Endpoint, EntityRequest};
use crate::sync::{SyncKey, Synchronized};

use super::{ActionJson, BoardJson, CardJson, MemberJson, OrganizationJson};

/// Kinds of entity a search may return. Combine with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchModelType(u8);

impl SearchModelType {
    pub const ACTIONS: Self = Self(1);
    pub const BOARDS: Self = Self(1 << 1);
    pub const CARDS: Self = Self(1 << 2);
    pub const MEMBERS: Self = Self(1 << 3);
    pub const ORGANIZATIONS: Self = Self(1 << 4);
    pub const ALL: Self = Self(0b1_1111);

    const NAMES: [(Self, &'static str); 5] = [
        (Self::ACTIONS, "actions"),
        (Self::BOARDS, "boards"),
        (Self::CARDS, "cards"),
        (Self::MEMBERS, "members"),
        (Self::ORGANIZATIONS, "organizations"),
    ];

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Comma separated list for the `modelTypes` parameter.
    pub fn to_param(self) -> String {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for SearchModelType {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for SearchModelType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for SearchModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_param())
    }
}

/// Results of a search, plus the parameters that produced them.
///
/// The parameters are fixed when the search is created and never sent back
/// to or read from Trello.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchJson {
    #[serde(default)]
    pub actions: Vec<ActionJson>,
    #[serde(default)]
    pub boards: Vec<BoardJson>,
    #[serde(default)]
    pub cards: Vec<CardJson>,
    #[serde(default)]
    pub members: Vec<MemberJson>,
    #[serde(default)]
    pub organizations: Vec<OrganizationJson>,

    #[serde(skip)]
    pub query: String,
    #[serde(skip)]
    pub model_types: SearchModelType,
    #[serde(skip)]
    pub board_ids: Vec<String>,
    #[serde(skip)]
    pub card_ids: Vec<String>,
    #[serde(skip)]
    pub organization_ids: Vec<String>,
}

impl Synchronized for SearchJson {
    const KIND: &'static str = "search";

    fn read_endpoint(&self, _key: &SyncKey) -> Endpoint {
        let join = |ids: &[String]| (!ids.is_empty()).then(|| ids.join(","));

        EntityRequest::Search
            .endpoint()
            .with_param("query", self.query.as_str())
            .with_param("modelTypes", self.model_types.to_param())
            .with_optional_param("idBoards", join(self.board_ids.as_slice()))
            .with_optional_param("idCards", join(self.card_ids.as_slice()))
            .with_optional_param("idOrganizations", join(self.organization_ids.as_slice()))
    }

    /// Only the results change between fetches.
    fn absorb(&mut self, fetched: Self) {
        self.actions = fetched.actions;
        self.boards = fetched.boards;
        self.cards = fetched.cards;
        self.members = fetched.members;
        self.organizations = fetched.organizations;
    }
}
