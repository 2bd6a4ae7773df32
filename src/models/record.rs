//! Daily record data model.
//!
//! One entry per bathroom visit: fixed categorical attributes plus free-text
//! notes. Records are keyed in the store by the epoch-millisecond value of
//! their record time.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Brown,
    Yellow,
    Green,
    Black,
    Red,
    White,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Brown => "brown",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Black => "black",
            Color::Red => "red",
            Color::White => "white",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "brown" => Ok(Color::Brown),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "white" => Ok(Color::White),
            _ => Err(anyhow!("unknown color '{value}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Smell {
    Normal,
    Mild,
    Strong,
    Sweet,
    Sour,
}

impl Smell {
    pub fn as_str(&self) -> &'static str {
        match self {
            Smell::Normal => "normal",
            Smell::Mild => "mild",
            Smell::Strong => "strong",
            Smell::Sweet => "sweet",
            Smell::Sour => "sour",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "normal" => Ok(Smell::Normal),
            "mild" => Ok(Smell::Mild),
            "strong" => Ok(Smell::Strong),
            "sweet" => Ok(Smell::Sweet),
            "sour" => Ok(Smell::Sour),
            _ => Err(anyhow!("unknown smell '{value}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Moisture {
    Dry,
    Normal,
    Wet,
    Watery,
}

impl Moisture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Moisture::Dry => "dry",
            Moisture::Normal => "normal",
            Moisture::Wet => "wet",
            Moisture::Watery => "watery",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "dry" => Ok(Moisture::Dry),
            "normal" => Ok(Moisture::Normal),
            "wet" => Ok(Moisture::Wet),
            "watery" => Ok(Moisture::Watery),
            _ => Err(anyhow!("unknown moisture '{value}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Sausage,
    Lumpy,
    Cracked,
    Soft,
    Liquid,
    Pellets,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Sausage => "sausage",
            Shape::Lumpy => "lumpy",
            Shape::Cracked => "cracked",
            Shape::Soft => "soft",
            Shape::Liquid => "liquid",
            Shape::Pellets => "pellets",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "sausage" => Ok(Shape::Sausage),
            "lumpy" => Ok(Shape::Lumpy),
            "cracked" => Ok(Shape::Cracked),
            "soft" => Ok(Shape::Soft),
            "liquid" => Ok(Shape::Liquid),
            "pellets" => Ok(Shape::Pellets),
            _ => Err(anyhow!("unknown shape '{value}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
            Size::ExtraLarge => "extra_large",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            "extra_large" => Ok(Size::ExtraLarge),
            _ => Err(anyhow!("unknown size '{value}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Texture {
    Smooth,
    Rough,
    Sticky,
    Fluffy,
}

impl Texture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Texture::Smooth => "smooth",
            Texture::Rough => "rough",
            Texture::Sticky => "sticky",
            Texture::Fluffy => "fluffy",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "smooth" => Ok(Texture::Smooth),
            "rough" => Ok(Texture::Rough),
            "sticky" => Ok(Texture::Sticky),
            "fluffy" => Ok(Texture::Fluffy),
            _ => Err(anyhow!("unknown texture '{value}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Relieved,
    Normal,
    Uncomfortable,
    Painful,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Relieved => "relieved",
            Mood::Normal => "normal",
            Mood::Uncomfortable => "uncomfortable",
            Mood::Painful => "painful",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "happy" => Ok(Mood::Happy),
            "relieved" => Ok(Mood::Relieved),
            "normal" => Ok(Mood::Normal),
            "uncomfortable" => Ok(Mood::Uncomfortable),
            "painful" => Ok(Mood::Painful),
            _ => Err(anyhow!("unknown mood '{value}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub id: String,
    pub record_time: DateTime<Utc>,
    pub color: Color,
    pub smell: Smell,
    pub moisture: Moisture,
    pub shape: Shape,
    pub size: Size,
    pub texture: Texture,
    pub mood: Mood,
    pub notes: Option<String>,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyRecord {
    /// Create a record stamped now. `record_time` drives the store key.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        record_time: DateTime<Utc>,
        color: Color,
        smell: Smell,
        moisture: Moisture,
        shape: Shape,
        size: Size,
        texture: Texture,
        mood: Mood,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            record_time,
            color,
            smell,
            moisture,
            shape,
            size,
            texture,
            mood,
            notes: None,
            user_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Epoch-millisecond timestamp the store keys this record under.
    pub fn epoch_millis(&self) -> i64 {
        self.record_time.timestamp_millis()
    }
}
