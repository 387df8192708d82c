use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
    pub urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewGame {
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameUpdate {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub urls: Option<Vec<String>>,
}

impl GameUpdate {
    pub fn apply(self, game: &mut Game) {
        if let Some(title) = self.title {
            game.title = title;
        }
        if let Some(image_url) = self.image_url {
            game.image_url = image_url;
        }
        if let Some(urls) = self.urls {
            game.urls = urls;
        }
    }
}
