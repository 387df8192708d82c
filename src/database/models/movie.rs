use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub publish_date: DateTime<Utc>,
    pub rating: f64,
    pub tag: Option<String>,
    pub trailer_url: Option<String>,
    pub comments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload. The image URL is filled in by the handler after the
/// uploaded file has been stored, not taken from the client.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub publish_date: DateTime<Utc>,
    pub rating: f64,
    pub tag: Option<String>,
    pub trailer_url: Option<String>,
}

/// Partial update, deserialized after blank fields have been stripped.
/// Absent keys leave the stored value untouched.
#[derive(Debug, Default, Deserialize)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub rating: Option<f64>,
    pub tag: Option<String>,
    pub trailer_url: Option<String>,
}

impl MovieUpdate {
    pub fn apply(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(description) = self.description {
            movie.description = description;
        }
        if let Some(image_url) = self.image_url {
            movie.image_url = image_url;
        }
        if let Some(publish_date) = self.publish_date {
            movie.publish_date = publish_date;
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(tag) = self.tag {
            movie.tag = Some(tag);
        }
        if let Some(trailer_url) = self.trailer_url {
            movie.trailer_url = Some(trailer_url);
        }
    }
}

pub fn rating_in_bounds(rating: f64) -> bool {
    (RATING_MIN..=RATING_MAX).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Movie {
        Movie {
            id: Uuid::new_v4(),
            title: "Arrival".into(),
            description: "First contact".into(),
            image_url: "https://img.example.com/arrival.jpg".into(),
            publish_date: "2016-11-11T00:00:00Z".parse().unwrap(),
            rating: 8.0,
            tag: None,
            trailer_url: None,
            comments: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn apply_touches_only_present_fields() {
        let mut movie = sample_movie();
        let update = MovieUpdate {
            rating: Some(9.5),
            ..Default::default()
        };
        update.apply(&mut movie);
        assert_eq!(movie.rating, 9.5);
        assert_eq!(movie.title, "Arrival");
        assert_eq!(movie.description, "First contact");
    }

    #[test]
    fn applying_the_same_update_twice_is_idempotent() {
        let mut once = sample_movie();
        let mut twice = sample_movie();
        let update = || MovieUpdate {
            title: Some("Arrival (Director's Cut)".into()),
            rating: Some(9.0),
            ..Default::default()
        };
        update().apply(&mut once);
        update().apply(&mut twice);
        update().apply(&mut twice);
        assert_eq!(once.title, twice.title);
        assert_eq!(once.rating, twice.rating);
    }

    #[test]
    fn rating_bounds() {
        assert!(rating_in_bounds(0.0));
        assert!(rating_in_bounds(10.0));
        assert!(!rating_in_bounds(-0.1));
        assert!(!rating_in_bounds(10.5));
    }
}
