//! Subcommand implementations.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, warn};

use manatee_core::auth::authorization::USER_TOKEN_ENV;
use manatee_core::{
    Authorization, TokenStore, QueryContext, SearchModelType, TrelloClient, TrelloConfig,
};

use crate::utils::{format_date, format_optional, truncate_string};
use crate::Command;

/// Column width for names in listings
const NAME_WIDTH: usize = 48;

/// Page where a user authorizes the application and receives a token
const AUTHORIZE_URL: &str =
    "https://trello.com/1/authorize?expiration=never&scope=read,write&response_type=token&name=Manatee";

pub async fn run(command: Command, config_path: Option<&Path>) -> Result<()> {
    let stored = load_config(config_path)?;

    match command {
        Command::Login { app_key } => login(stored, app_key, config_path).await,
        Command::Logout => logout(&stored.with_env_overrides()),
        command => {
            let config = stored.with_env_overrides();
            let client = connect(&config)?;
            let result = execute(&client, &config, command).await;
            client.shut_down().await;
            result
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<TrelloConfig> {
    match path {
        Some(path) => TrelloConfig::load_from(path),
        None => TrelloConfig::load(),
    }
}

fn save_config(config: &TrelloConfig, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
}

/// Build a client from the config, the environment and the keychain.
fn connect(config: &TrelloConfig) -> Result<TrelloClient> {
    let app_key = config.app_key.clone().ok_or_else(|| {
        anyhow!("No application key. Run `manatee login --app-key <KEY>` or set TRELLO_APP_KEY")
    })?;

    let token = std::env::var(USER_TOKEN_ENV)
        .ok()
        .filter(|token| !token.trim().is_empty())
        .or_else(|| match TokenStore::for_app_key(&app_key).and_then(|store| store.load()) {
            Ok(token) => token,
            Err(e) => {
                debug!(error = %e, "Keychain unavailable");
                None
            }
        });
    if token.is_none() {
        warn!("No user token; only public data can be read");
    }

    TrelloClient::new(config.clone(), Authorization::new(app_key, token))
        .context("Failed to start Trello client")
}

async fn login(mut config: TrelloConfig, app_key: Option<String>, config_path: Option<&Path>) -> Result<()> {
    if let Some(key) = app_key {
        config.app_key = Some(key);
    }
    let app_key = config
        .clone()
        .with_env_overrides()
        .app_key
        .ok_or_else(|| anyhow!("An application key is required: pass --app-key or set TRELLO_APP_KEY"))?;

    println!("Authorize Manatee and paste the token Trello shows you:");
    println!("  {}&key={}\n", AUTHORIZE_URL, app_key);
    let token = rpassword::prompt_password("User token: ")?;
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err(anyhow!("No token entered"));
    }

    // Verify the token before keeping it
    let runtime_config = config.clone().with_env_overrides();
    let client = TrelloClient::new(runtime_config, Authorization::new(app_key.clone(), Some(token.clone())))?;
    let username = client.me().username().await;
    client.shut_down().await;
    let username = username.context("Trello rejected the token")?;

    TokenStore::for_app_key(&app_key)?.save(&token)?;
    config.last_member = username.clone();
    save_config(&config, config_path)?;

    println!("Logged in as {}", format_optional(&username, "unknown member"));
    Ok(())
}

fn logout(config: &TrelloConfig) -> Result<()> {
    let app_key = config
        .app_key
        .as_deref()
        .ok_or_else(|| anyhow!("No application key configured"))?;

    if TokenStore::for_app_key(app_key)?.forget()? {
        println!("Token removed from keychain");
    } else {
        println!("No stored token");
    }
    Ok(())
}

async fn execute(client: &TrelloClient, config: &TrelloConfig, command: Command) -> Result<()> {
    match command {
        Command::Me => {
            let me = client.me();
            println!("{}", format_optional(&me.full_name().await?, "(no name)"));
            println!("  username: {}", format_optional(&me.username().await?, "-"));
            println!("  initials: {}", format_optional(&me.initials().await?, "-"));
            if let Some(status) = me.status().await? {
                println!("  status:   {}", status);
            }
            if let Some(bio) = me.bio().await?.filter(|bio| !bio.is_empty()) {
                println!("  bio:      {}", truncate_string(&bio, 72));
            }
        }

        Command::Boards { member } => {
            let member = member
                .or_else(|| config.last_member.clone())
                .map(|id| client.member(&id))
                .unwrap_or_else(|| client.me());
            for board in member.boards().list().await? {
                let closed = board.is_closed().await?.unwrap_or(false);
                println!(
                    "{}  {}{}",
                    board.id(),
                    truncate_string(&format_optional(&board.name().await?, ""), NAME_WIDTH),
                    if closed { "  [closed]" } else { "" }
                );
            }
        }

        Command::Board { id } => {
            let board = client.board(&id);
            let prefs = board.preferences();
            println!("{}", format_optional(&board.name().await?, "(no name)"));
            if let Some(desc) = board.description().await?.filter(|d| !d.is_empty()) {
                println!("  {}", truncate_string(&desc, 72));
            }
            println!("  url:         {}", format_optional(&board.url().await?, "-"));
            println!("  closed:      {}", board.is_closed().await?.unwrap_or(false));
            println!("  visibility:  {}", display(prefs.permission_level().await?));
            println!("  voting:      {}", debug_display(prefs.voting().await?));
            println!("  comments:    {}", debug_display(prefs.commenting().await?));
            println!("  invitations: {}", debug_display(prefs.invitations().await?));
            println!("  card aging:  {}", debug_display(prefs.card_aging().await?));
            if let Some(background) = prefs.background().await? {
                println!(
                    "  background:  {} {}",
                    background.id,
                    background.color.unwrap_or_default()
                );
            }
        }

        Command::RenameBoard { id, name } => {
            let board = client.board(&id);
            board.set_name(&name).await?;
            println!("Renamed board {} to {}", id, name);
        }

        Command::Lists { board_id } => {
            for list in client.board(&board_id).lists().list().await? {
                println!(
                    "{}  {}",
                    list.id(),
                    truncate_string(&format_optional(&list.name().await?, ""), NAME_WIDTH)
                );
            }
        }

        Command::Cards { list_id } => {
            for card in client.list(&list_id).cards().list().await? {
                println!(
                    "{}  {:<width$}  {}",
                    card.id(),
                    truncate_string(&format_optional(&card.name().await?, ""), NAME_WIDTH),
                    format_date(card.due_date().await?),
                    width = NAME_WIDTH
                );
            }
        }

        Command::AddCard { list_id, name, desc } => {
            let card = client
                .list(&list_id)
                .cards()
                .add(&name, desc.as_deref())
                .await?;
            println!("Created card {}", card.id());
        }

        Command::Card { id } => {
            let card = client.card(&id);
            println!("{}", format_optional(&card.name().await?, "(no name)"));
            if let Some(desc) = card.description().await?.filter(|d| !d.is_empty()) {
                println!("  {}", truncate_string(&desc, 72));
            }
            println!("  due:           {}", format_date(card.due_date().await?));
            println!("  last activity: {}", format_date(card.last_activity().await?));
            println!("  archived:      {}", card.is_archived().await?.unwrap_or(false));
            println!("  url:           {}", format_optional(&card.short_url().await?, "-"));
        }

        Command::Stickers { card_id } => {
            for sticker in client.card(&card_id).stickers().list().await? {
                println!(
                    "{}  {:<20} left {:>6} top {:>6} rotate {:>3}",
                    sticker.id(),
                    format_optional(&sticker.name().await?, "?"),
                    sticker.left().await?.unwrap_or_default(),
                    sticker.top().await?.unwrap_or_default(),
                    sticker.rotation().await?.unwrap_or_default()
                );
            }
        }

        Command::AddSticker {
            card_id,
            name,
            left,
            top,
            z_index,
            rotation,
        } => {
            let sticker = client
                .card(&card_id)
                .stickers()
                .add(&name, left, top, z_index, rotation)
                .await?;
            println!("Added sticker {}", sticker.id());
        }

        Command::RemoveSticker { card_id, sticker_id } => {
            let sticker = client.card_sticker(&card_id, &sticker_id);
            client.card(&card_id).stickers().remove(&sticker).await?;
            println!("Removed sticker {}", sticker_id);
        }

        Command::UploadSticker { file } => {
            let content = std::fs::read(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let file_name = file
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| anyhow!("Invalid file name: {}", file.display()))?;
            let sticker = client.me().stickers().add(content, file_name).await?;
            println!("Uploaded custom sticker {}", sticker.id());
        }

        Command::Search { query, types, boards } => {
            let model_types = types
                .into_iter()
                .map(SearchModelType::from)
                .reduce(|a, b| a | b)
                .unwrap_or_default();
            let context: Vec<QueryContext> = boards.into_iter().map(QueryContext::Board).collect();
            let search = client.search(&query, model_types, &context)?;
            print_search(&search, model_types).await?;
        }

        Command::Login { .. } | Command::Logout => {
            return Err(anyhow!("Login and logout do not use a client connection"));
        }
    }

    Ok(())
}

async fn print_search(search: &manatee_core::Search, types: SearchModelType) -> Result<()> {
    if types.contains(SearchModelType::BOARDS) {
        println!("Boards:");
        for board in search.boards().await? {
            println!("  {}  {}", board.id(), format_optional(&board.name().await?, ""));
        }
    }
    if types.contains(SearchModelType::CARDS) {
        println!("Cards:");
        for card in search.cards().await? {
            println!("  {}  {}", card.id(), format_optional(&card.name().await?, ""));
        }
    }
    if types.contains(SearchModelType::MEMBERS) {
        println!("Members:");
        for member in search.members().await? {
            println!("  {}  {}", member.id(), format_optional(&member.full_name().await?, ""));
        }
    }
    if types.contains(SearchModelType::ORGANIZATIONS) {
        println!("Organizations:");
        for org in search.organizations().await? {
            println!("  {}  {}", org.id(), format_optional(&org.display_name().await?, ""));
        }
    }
    if types.contains(SearchModelType::ACTIONS) {
        println!("Actions:");
        for action in search.actions().await? {
            println!(
                "  {}  {:<16} {}",
                action.id(),
                format_optional(&action.action_type().await?, ""),
                format_date(action.date().await?)
            );
        }
    }
    Ok(())
}

fn display<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn debug_display<T: std::fmt::Debug>(value: Option<T>) -> String {
    value.map(|v| format!("{:?}", v)).unwrap_or_else(|| "-".to_string())
}
