//! JSON payloads exchanged with Trello.
//!
//! Each `*Json` type mirrors what the API returns for one entity and knows
//! which endpoints read and write it (see [`Synchronized`](crate::sync::Synchronized)).
//!
//! - `BoardJson`, `BoardPrefsJson` and the board preference enumerations
//! - `CardJson`, `ListJson`, `StickerJson`
//! - `MemberJson`, `OrganizationJson`
//! - `ActionJson`, `PowerUpJson`
//! - `SearchJson` and `SearchModelType`

pub mod action;
pub mod board;
pub mod card;
pub mod list;
pub mod member;
pub mod organization;
pub mod position;
pub mod power_up;
pub mod search;
pub mod sticker;

pub use action::ActionJson;
pub use board::{
    BoardBackground, BoardCommentPermission, BoardInvitationPermission, BoardJson,
    BoardPermissionLevel, BoardPrefsJson, BoardVotingPermission, CardAgingStyle,
};
pub use card::CardJson;
pub use list::ListJson;
pub use member::{MemberJson, MemberStatus};
pub use organization::OrganizationJson;
pub use position::Position;
pub use power_up::PowerUpJson;
pub use search::{SearchJson, SearchModelType};
pub use sticker::StickerJson;
