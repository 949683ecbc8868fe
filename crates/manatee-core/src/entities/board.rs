use std::sync::Arc;

use crate::api::EntityRequest;
use crate::collections::{BoardListCollection, ReadOnlyCollection};
use crate::error::Result;
use crate::models::{
    BoardBackground, BoardCommentPermission, BoardInvitationPermission, BoardJson,
    BoardPermissionLevel, BoardVotingPermission, CardAgingStyle,
};
use crate::sync::{Field, Owner, SyncContext};
use crate::validation::{EnumerationRule, NotNullOrWhiteSpaceRule, NotNullRule};

use super::{Action, Card, Member, Organization, PowerUp};

// ===== Board Fields =====

static NAME: Field<BoardJson, String> = Field::new(
    "Name",
    "name",
    |json: &BoardJson| json.name.clone(),
    |json: &mut BoardJson, value: Option<String>| json.name = value,
    &[&NotNullOrWhiteSpaceRule],
);

static DESCRIPTION: Field<BoardJson, String> = Field::new(
    "Description",
    "desc",
    |json: &BoardJson| json.desc.clone(),
    |json: &mut BoardJson, value: Option<String>| json.desc = value,
    &[],
);

static CLOSED: Field<BoardJson, bool> = Field::new(
    "IsClosed",
    "closed",
    |json: &BoardJson| json.closed,
    |json: &mut BoardJson, value: Option<bool>| json.closed = value,
    &[&NotNullRule],
);

/// A Trello board.
#[derive(Clone)]
pub struct Board {
    ctx: Arc<SyncContext<BoardJson>>,
    actions: Arc<ReadOnlyCollection<Action>>,
    cards: Arc<ReadOnlyCollection<Card>>,
    lists: Arc<BoardListCollection>,
    members: Arc<ReadOnlyCollection<Member>>,
    power_ups: Arc<ReadOnlyCollection<PowerUp>>,
}

entity_handle!(Board, BoardJson);

impl Board {
    fn build(ctx: Arc<SyncContext<BoardJson>>) -> Self {
        let client = ctx.client().clone();
        let id = ctx.id().to_string();
        let owner = Owner::Board(id.clone());

        Self {
            actions: Arc::new(ReadOnlyCollection::new(
                client.clone(),
                owner.clone(),
                EntityRequest::BoardReadActions { id: &id }.endpoint(),
            )),
            cards: Arc::new(ReadOnlyCollection::new(
                client.clone(),
                owner.clone(),
                EntityRequest::BoardReadCards { id: &id }.endpoint(),
            )),
            lists: Arc::new(BoardListCollection::new(client.clone(), &id)),
            members: Arc::new(ReadOnlyCollection::new(
                client.clone(),
                owner.clone(),
                EntityRequest::BoardReadMembers { id: &id }.endpoint(),
            )),
            power_ups: Arc::new(ReadOnlyCollection::new(
                client,
                owner,
                EntityRequest::BoardReadPowerUps { id: &id }.endpoint(),
            )),
            ctx,
        }
    }

    pub fn id(&self) -> &str {
        self.ctx.id()
    }

    pub async fn name(&self) -> Result<Option<String>> {
        NAME.get(&self.ctx).await
    }

    pub async fn set_name(&self, name: &str) -> Result<()> {
        NAME.set(&self.ctx, Some(name.to_string())).await
    }

    pub async fn description(&self) -> Result<Option<String>> {
        DESCRIPTION.get(&self.ctx).await
    }

    pub async fn set_description(&self, description: Option<&str>) -> Result<()> {
        DESCRIPTION.set(&self.ctx, description.map(str::to_string)).await
    }

    pub async fn is_closed(&self) -> Result<Option<bool>> {
        CLOSED.get(&self.ctx).await
    }

    pub async fn set_closed(&self, closed: bool) -> Result<()> {
        CLOSED.set(&self.ctx, Some(closed)).await
    }

    pub async fn is_pinned(&self) -> Result<Option<bool>> {
        self.ctx.read(|json| json.pinned).await
    }

    pub async fn is_starred(&self) -> Result<Option<bool>> {
        self.ctx.read(|json| json.starred).await
    }

    pub async fn url(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.url.clone()).await
    }

    pub async fn short_url(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.short_url.clone()).await
    }

    /// The organization owning the board, if any.
    pub async fn organization(&self) -> Result<Option<Organization>> {
        let id = self.ctx.read(|json| json.id_organization.clone()).await?;
        Ok(id.map(|id| self.ctx.client().organization(&id)))
    }

    /// Board-wide settings, sharing this board's cached data.
    pub fn preferences(&self) -> BoardPreferences {
        BoardPreferences {
            ctx: Arc::clone(&self.ctx),
        }
    }

    pub fn actions(&self) -> &ReadOnlyCollection<Action> {
        &self.actions
    }

    pub fn cards(&self) -> &ReadOnlyCollection<Card> {
        &self.cards
    }

    pub fn lists(&self) -> &BoardListCollection {
        &self.lists
    }

    pub fn members(&self) -> &ReadOnlyCollection<Member> {
        &self.members
    }

    pub fn power_ups(&self) -> &ReadOnlyCollection<PowerUp> {
        &self.power_ups
    }

    /// Mark the board to be fetched again on the next read.
    pub async fn refresh(&self) {
        self.ctx.expire().await;
    }
}

// ===== Preference Fields =====

static PERMISSION_LEVEL: Field<BoardJson, BoardPermissionLevel> = Field::new(
    "PermissionLevel",
    "prefs/permissionLevel",
    |json: &BoardJson| json.prefs.as_ref().and_then(|p| p.permission_level),
    |json: &mut BoardJson, value: Option<BoardPermissionLevel>| json.prefs_mut().permission_level = value,
    &[&NotNullRule, &EnumerationRule],
);

static VOTING: Field<BoardJson, BoardVotingPermission> = Field::new(
    "Voting",
    "prefs/voting",
    |json: &BoardJson| json.prefs.as_ref().and_then(|p| p.voting),
    |json: &mut BoardJson, value: Option<BoardVotingPermission>| json.prefs_mut().voting = value,
    &[&NotNullRule, &EnumerationRule],
);

static COMMENTS: Field<BoardJson, BoardCommentPermission> = Field::new(
    "Commenting",
    "prefs/comments",
    |json: &BoardJson| json.prefs.as_ref().and_then(|p| p.comments),
    |json: &mut BoardJson, value: Option<BoardCommentPermission>| json.prefs_mut().comments = value,
    &[&NotNullRule, &EnumerationRule],
);

static INVITATIONS: Field<BoardJson, BoardInvitationPermission> = Field::new(
    "Invitations",
    "prefs/invitations",
    |json: &BoardJson| json.prefs.as_ref().and_then(|p| p.invitations),
    |json: &mut BoardJson, value: Option<BoardInvitationPermission>| json.prefs_mut().invitations = value,
    &[&NotNullRule, &EnumerationRule],
);

static SELF_JOIN: Field<BoardJson, bool> = Field::new(
    "AllowSelfJoin",
    "prefs/selfJoin",
    |json: &BoardJson| json.prefs.as_ref().and_then(|p| p.self_join),
    |json: &mut BoardJson, value: Option<bool>| json.prefs_mut().self_join = value,
    &[&NotNullRule],
);

static CARD_COVERS: Field<BoardJson, bool> = Field::new(
    "ShowCardCovers",
    "prefs/cardCovers",
    |json: &BoardJson| json.prefs.as_ref().and_then(|p| p.card_covers),
    |json: &mut BoardJson, value: Option<bool>| json.prefs_mut().card_covers = value,
    &[&NotNullRule],
);

static CALENDAR_FEED: Field<BoardJson, bool> = Field::new(
    "IsCalendarFeedEnabled",
    "prefs/calendarFeedEnabled",
    |json: &BoardJson| json.prefs.as_ref().and_then(|p| p.calendar_feed_enabled),
    |json: &mut BoardJson, value: Option<bool>| json.prefs_mut().calendar_feed_enabled = value,
    &[&NotNullRule],
);

static CARD_AGING: Field<BoardJson, CardAgingStyle> = Field::new(
    "CardAgingStyle",
    "prefs/cardAging",
    |json: &BoardJson| json.prefs.as_ref().and_then(|p| p.card_aging),
    |json: &mut BoardJson, value: Option<CardAgingStyle>| json.prefs_mut().card_aging = value,
    &[&NotNullRule, &EnumerationRule],
);

static BACKGROUND: Field<BoardJson, BoardBackground> = Field::new(
    "Background",
    "prefs/background",
    |json: &BoardJson| json.prefs.as_ref().and_then(|p| p.background()),
    |json: &mut BoardJson, value: Option<BoardBackground>| json.prefs_mut().set_background(value),
    &[&NotNullRule],
);

/// Settings of a board. Reads and writes go through the board's context.
#[derive(Clone)]
pub struct BoardPreferences {
    ctx: Arc<SyncContext<BoardJson>>,
}

impl BoardPreferences {
    pub fn board_id(&self) -> &str {
        self.ctx.id()
    }

    pub async fn permission_level(&self) -> Result<Option<BoardPermissionLevel>> {
        PERMISSION_LEVEL.get(&self.ctx).await
    }

    pub async fn set_permission_level(&self, level: BoardPermissionLevel) -> Result<()> {
        PERMISSION_LEVEL.set(&self.ctx, Some(level)).await
    }

    pub async fn voting(&self) -> Result<Option<BoardVotingPermission>> {
        VOTING.get(&self.ctx).await
    }

    pub async fn set_voting(&self, voting: BoardVotingPermission) -> Result<()> {
        VOTING.set(&self.ctx, Some(voting)).await
    }

    pub async fn commenting(&self) -> Result<Option<BoardCommentPermission>> {
        COMMENTS.get(&self.ctx).await
    }

    pub async fn set_commenting(&self, comments: BoardCommentPermission) -> Result<()> {
        COMMENTS.set(&self.ctx, Some(comments)).await
    }

    pub async fn invitations(&self) -> Result<Option<BoardInvitationPermission>> {
        INVITATIONS.get(&self.ctx).await
    }

    pub async fn set_invitations(&self, invitations: BoardInvitationPermission) -> Result<()> {
        INVITATIONS.set(&self.ctx, Some(invitations)).await
    }

    pub async fn allow_self_join(&self) -> Result<Option<bool>> {
        SELF_JOIN.get(&self.ctx).await
    }

    pub async fn set_allow_self_join(&self, allow: bool) -> Result<()> {
        SELF_JOIN.set(&self.ctx, Some(allow)).await
    }

    pub async fn show_card_covers(&self) -> Result<Option<bool>> {
        CARD_COVERS.get(&self.ctx).await
    }

    pub async fn set_show_card_covers(&self, show: bool) -> Result<()> {
        CARD_COVERS.set(&self.ctx, Some(show)).await
    }

    pub async fn is_calendar_feed_enabled(&self) -> Result<Option<bool>> {
        CALENDAR_FEED.get(&self.ctx).await
    }

    pub async fn set_calendar_feed_enabled(&self, enabled: bool) -> Result<()> {
        CALENDAR_FEED.set(&self.ctx, Some(enabled)).await
    }

    pub async fn card_aging(&self) -> Result<Option<CardAgingStyle>> {
        CARD_AGING.get(&self.ctx).await
    }

    pub async fn set_card_aging(&self, style: CardAgingStyle) -> Result<()> {
        CARD_AGING.set(&self.ctx, Some(style)).await
    }

    pub async fn background(&self) -> Result<Option<BoardBackground>> {
        BACKGROUND.get(&self.ctx).await
    }

    pub async fn set_background(&self, background: BoardBackground) -> Result<()> {
        BACKGROUND.set(&self.ctx, Some(background)).await
    }
}

impl std::fmt::Debug for BoardPreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardPreferences")
            .field("board_id", &self.ctx.id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rejects_blank() {
        let err = NAME.validate(None, Some(&"   ".to_string())).unwrap_err();
        assert_eq!(err.field, "Name");
        assert!(NAME.validate(None, Some(&"Roadmap".to_string())).is_ok());
    }

    #[test]
    fn test_preferences_require_known_value() {
        assert!(PERMISSION_LEVEL.validate(None, None).is_err());
        assert!(PERMISSION_LEVEL
            .validate(None, Some(&BoardPermissionLevel::Unknown))
            .is_err());
        assert!(PERMISSION_LEVEL
            .validate(None, Some(&BoardPermissionLevel::Private))
            .is_ok());
    }

    #[test]
    fn test_preference_keys_are_nested() {
        assert_eq!(VOTING.key(), "prefs/voting");
        assert_eq!(BACKGROUND.key(), "prefs/background");
    }

    #[test]
    fn test_staging_creates_prefs() {
        let mut json = BoardJson::default();
        CARD_AGING.stage(&mut json, Some(CardAgingStyle::Pirate));
        assert_eq!(CARD_AGING.extract(&json), Some(CardAgingStyle::Pirate));
        assert_eq!(DESCRIPTION.extract(&json), None);
    }
}
