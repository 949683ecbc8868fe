use std::fmt::Debug;

use serde::Serialize;

use crate::error::Result;
use crate::validation::{self, Rule, ValidationError};

use super::{SyncContext, Synchronized};

/// Describes one property of a JSON payload `J`.
///
/// Fields are declared as `static`s next to the entity that exposes them:
///
/// ```ignore
/// static NAME: Field<BoardJson, String> = Field::new(
///     "Name",
///     "name",
///     |json: &BoardJson| json.name.clone(),
///     |json: &mut BoardJson, value: Option<String>| json.name = value,
///     &[&NotNullOrWhiteSpaceRule],
/// );
/// ```
pub struct Field<J: 'static, T: 'static> {
    name: &'static str,
    key: &'static str,
    read: fn(&J) -> Option<T>,
    write: fn(&mut J, Option<T>),
    rules: &'static [&'static dyn Rule<T>],
}

impl<J: 'static, T: 'static> Field<J, T> {
    /// `name` is used in errors, `key` is the parameter sent to Trello.
    pub const fn new(
        name: &'static str,
        key: &'static str,
        read: fn(&J) -> Option<T>,
        write: fn(&mut J, Option<T>),
        rules: &'static [&'static dyn Rule<T>],
    ) -> Self {
        Self {
            name,
            key,
            read,
            write,
            rules,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub(crate) fn extract(&self, json: &J) -> Option<T> {
        (self.read)(json)
    }

    pub(crate) fn stage(&self, json: &mut J, value: Option<T>) {
        (self.write)(json, value)
    }
}

impl<J: 'static, T: Debug + 'static> Field<J, T> {
    /// Run every rule of this field against `proposed`.
    pub fn validate(&self, current: Option<&T>, proposed: Option<&T>) -> std::result::Result<(), ValidationError> {
        validation::check(self.name, current, proposed, self.rules)
    }
}

impl<J, T> Field<J, T>
where
    J: Synchronized,
    T: Serialize + Debug + Send + 'static,
{
    /// Current value, refreshing the context first if it has expired.
    pub async fn get(&self, ctx: &SyncContext<J>) -> Result<Option<T>> {
        ctx.read(self.read).await
    }

    /// Validate and submit a new value.
    pub async fn set(&self, ctx: &SyncContext<J>, value: Option<T>) -> Result<()> {
        ctx.write(self, value).await
    }
}
