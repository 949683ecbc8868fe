use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::models::StickerJson;
use crate::sync::{Field, Owner, SyncContext, SyncKey};
use crate::validation::{FiniteRule, NotNullRule, NumericRule};

use super::Entity;

static LEFT: Field<StickerJson, f64> = Field::new(
    "Left",
    "left",
    |json: &StickerJson| json.left,
    |json: &mut StickerJson, value: Option<f64>| json.left = value,
    &[&NotNullRule, &FiniteRule],
);

static TOP: Field<StickerJson, f64> = Field::new(
    "Top",
    "top",
    |json: &StickerJson| json.top,
    |json: &mut StickerJson, value: Option<f64>| json.top = value,
    &[&NotNullRule, &FiniteRule],
);

static Z_INDEX: Field<StickerJson, i32> = Field::new(
    "ZIndex",
    "zIndex",
    |json: &StickerJson| json.z_index,
    |json: &mut StickerJson, value: Option<i32>| json.z_index = value,
    &[&NotNullRule],
);

static ROTATION: Field<StickerJson, i32> = Field::new(
    "Rotation",
    "rotate",
    |json: &StickerJson| json.rotate,
    |json: &mut StickerJson, value: Option<i32>| json.rotate = value,
    &[&NotNullRule, &NumericRule { min: Some(0), max: Some(359) }],
);

/// A sticker on a card, or one of a member's custom stickers.
///
/// Only card stickers can be moved; setters on a custom sticker fail with
/// [`Error::ReadOnly`](crate::Error::ReadOnly).
#[derive(Clone)]
pub struct Sticker {
    ctx: Arc<SyncContext<StickerJson>>,
}

impl Entity for Sticker {
    type Json = StickerJson;

    fn from_context(ctx: Arc<SyncContext<StickerJson>>) -> Self {
        Self { ctx }
    }

    fn context(&self) -> &Arc<SyncContext<StickerJson>> {
        &self.ctx
    }

    /// Sticker ids are only unique within their card or member.
    fn sync_key(json: &StickerJson, owner: Option<&Owner>) -> SyncKey {
        match owner {
            Some(owner) => SyncKey::owned_by(json.id.as_str(), owner.clone()),
            None => SyncKey::new(json.id.as_str()),
        }
    }
}

impl fmt::Debug for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sticker")
            .field("id", &self.ctx.id())
            .field("owner", &self.ctx.key().owner)
            .finish()
    }
}

impl Sticker {
    pub fn id(&self) -> &str {
        self.ctx.id()
    }

    pub fn owner(&self) -> Option<&Owner> {
        self.ctx.key().owner.as_ref()
    }

    /// Sticker name such as `taco-cool`, or the id of a custom sticker.
    pub async fn name(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.image.clone()).await
    }

    pub async fn image_url(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.image_url.clone()).await
    }

    pub async fn left(&self) -> Result<Option<f64>> {
        LEFT.get(&self.ctx).await
    }

    pub async fn set_left(&self, left: f64) -> Result<()> {
        LEFT.set(&self.ctx, Some(left)).await
    }

    pub async fn top(&self) -> Result<Option<f64>> {
        TOP.get(&self.ctx).await
    }

    pub async fn set_top(&self, top: f64) -> Result<()> {
        TOP.set(&self.ctx, Some(top)).await
    }

    pub async fn z_index(&self) -> Result<Option<i32>> {
        Z_INDEX.get(&self.ctx).await
    }

    pub async fn set_z_index(&self, z_index: i32) -> Result<()> {
        Z_INDEX.set(&self.ctx, Some(z_index)).await
    }

    pub async fn rotation(&self) -> Result<Option<i32>> {
        ROTATION.get(&self.ctx).await
    }

    /// Degrees clockwise, `0..=359`.
    pub async fn set_rotation(&self, rotation: i32) -> Result<()> {
        ROTATION.set(&self.ctx, Some(rotation)).await
    }

    pub async fn refresh(&self) {
        self.ctx.expire().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_bounds() {
        assert!(ROTATION.validate(None, Some(&0)).is_ok());
        assert!(ROTATION.validate(None, Some(&359)).is_ok());
        assert!(ROTATION.validate(None, Some(&360)).is_err());
        assert!(ROTATION.validate(None, Some(&-1)).is_err());
    }

    #[test]
    fn test_coordinates_must_be_finite() {
        assert!(LEFT.validate(None, Some(&-40.0)).is_ok());
        assert!(LEFT.validate(None, Some(&f64::NAN)).is_err());
        assert!(TOP.validate(None, Some(&f64::INFINITY)).is_err());
    }

    #[test]
    fn test_sync_key_keeps_owner() {
        let json = StickerJson {
            id: "s1".to_string(),
            ..Default::default()
        };
        let owner = Owner::Card("c1".to_string());
        assert_eq!(
            Sticker::sync_key(&json, Some(&owner)),
            SyncKey::owned_by("s1", owner.clone())
        );
        assert_eq!(Sticker::sync_key(&json, None), SyncKey::new("s1"));
    }
}
