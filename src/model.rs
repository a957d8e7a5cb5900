use serde::{Deserialize, Deserializer, Serialize};

/// A recipe as returned by the search API.
///
/// Missing or `null` fields decode to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, alias = "Title", deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, alias = "Ingredients", deserialize_with = "null_as_empty")]
    pub ingredients: String,
    #[serde(default, alias = "Servings", deserialize_with = "null_as_empty")]
    pub servings: String,
    #[serde(default, alias = "Instructions", deserialize_with = "null_as_empty")]
    pub instructions: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a response body into recipes, keeping server order.
///
/// A `null` body is treated as an empty result.
pub fn parse_recipes(body: &[u8]) -> Result<Vec<Recipe>, serde_json::Error> {
    let recipes: Option<Vec<Recipe>> = serde_json::from_slice(body)?;
    Ok(recipes.unwrap_or_default())
}
