use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

/// One row of `clothing_items`, serialized as-is for every API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ClothingItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub size: String,
    pub color: String,
    pub stock: i64,
    pub image_url: Option<String>,
}

/// A validated item ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClothingItem {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub size: String,
    pub color: String,
    pub stock: i64,
    pub image_url: String,
}

/// `price` as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    pub fn coerce(&self) -> AppResult<f64> {
        let value = match self {
            PriceInput::Number(n) => *n,
            PriceInput::Text(raw) => raw.trim().parse::<f64>().map_err(|_| AppError::Coercion {
                field: "price".to_string(),
                message: format!("could not convert string to float: '{}'", raw),
            })?,
        };
        if !value.is_finite() {
            return Err(AppError::Coercion {
                field: "price".to_string(),
                message: format!("price must be a finite number, got {}", value),
            });
        }
        Ok(value)
    }
}

// Distinguishes `"field": null` (Some(None)) from an absent field (None).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body of `POST /api/clothing`. All fields optional at the schema level so
/// that missing required fields produce one 400 listing every gap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<PriceInput>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub stock: Option<i64>,
    pub image_url: Option<String>,
}

impl CreateItemRequest {
    pub const REQUIRED_FIELDS: [&'static str; 5] = ["name", "category", "price", "size", "color"];

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.name.is_some(),
            self.category.is_some(),
            self.price.is_some(),
            self.size.is_some(),
            self.color.is_some(),
        ];
        Self::REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, is_present)| !is_present)
            .map(|(field, _)| *field)
            .collect()
    }

    /// Checks required fields (400) and then coerces `price` (500 on failure),
    /// applying the defaults for omitted optional fields.
    pub fn into_new_item(self) -> AppResult<NewClothingItem> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!("Missing required fields: {}", missing.join(", "))));
        }
        let (Some(name), Some(category), Some(price), Some(size), Some(color)) =
            (self.name, self.category, self.price, self.size, self.color)
        else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };

        Ok(NewClothingItem {
            name,
            description: self.description.unwrap_or_default(),
            category,
            price: price.coerce()?,
            size,
            color,
            stock: self.stock.unwrap_or(0),
            image_url: self.image_url.unwrap_or_default(),
        })
    }
}

/// Body of `PUT /api/clothing/{id}`. Only supplied fields are written.
///
/// Every field keeps `null` apart from absence: `null` clears `description`
/// and `image_url`, and is rejected for the NOT NULL columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub price: Option<Option<PriceInput>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub size: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub stock: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
}

// `Some(None)` on a NOT NULL column.
fn not_null<T>(field: &str, value: &Option<Option<T>>) -> AppResult<()> {
    match value {
        Some(None) => Err(AppError::Coercion {
            field: field.to_string(),
            message: format!("{} cannot be null", field),
        }),
        _ => Ok(()),
    }
}

impl UpdateItemRequest {
    /// Overwrites the fields present in the request. `null` checks and `price`
    /// coercion run first, so a bad value fails before anything is written.
    pub fn apply_to(&self, item: &mut ClothingItem) -> AppResult<()> {
        not_null("name", &self.name)?;
        not_null("category", &self.category)?;
        not_null("price", &self.price)?;
        not_null("size", &self.size)?;
        not_null("color", &self.color)?;
        not_null("stock", &self.stock)?;
        let price = self.price.as_ref().and_then(Option::as_ref).map(PriceInput::coerce).transpose()?;

        if let Some(Some(name)) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(Some(category)) = &self.category {
            item.category = category.clone();
        }
        if let Some(price) = price {
            item.price = price;
        }
        if let Some(Some(size)) = &self.size {
            item.size = size.clone();
        }
        if let Some(Some(color)) = &self.color {
            item.color = color.clone();
        }
        if let Some(Some(stock)) = self.stock {
            item.stock = stock;
        }
        if let Some(image_url) = &self.image_url {
            item.image_url = image_url.clone();
        }
        Ok(())
    }
}

/// Query string of `GET /api/clothing`. Exact, case-sensitive matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl ItemFilter {
    /// Empty values (`?category=`) are treated as absent.
    pub fn normalized(self) -> Self {
        fn keep(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.is_empty())
        }
        Self { category: keep(self.category), size: keep(self.size), color: keep(self.color) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
