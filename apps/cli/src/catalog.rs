//! # Catalog File
//!
//! Reads the JSON catalog and turns its records into domain objects.
//!
//! ```json
//! {
//!   "ingredients": [
//!     { "id": "flour", "name": "Flour", "packageQuantity": 1, "packagePrice": 10.0, "packageUnit": "KG" }
//!   ],
//!   "recipes": [
//!     { "name": "Bread", "ingredients": [{ "ingredientId": "flour", "quantity": 500, "unit": "G" }] }
//!   ]
//! }
//! ```
//!
//! Records are plain serde shapes. Every value goes through the core
//! constructors, so a catalog can never produce an entity a constructor
//! would reject. Records without an `id` get one from the generator.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use costify_core::{
    CoreError, Id, IdGenerator, Ingredient, IngredientCatalog, Money, Recipe, RecipeIngredient,
    Unit,
};

// =============================================================================
// Records
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    ingredients: Vec<IngredientRecord>,
    #[serde(default)]
    recipes: Vec<RecipeRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IngredientRecord {
    id: Option<String>,
    name: String,
    package_quantity: f64,
    package_price: f64,
    package_unit: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRecord {
    id: Option<String>,
    name: String,
    ingredients: Vec<RecipeLineRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeLineRecord {
    ingredient_id: String,
    quantity: f64,
    unit: String,
}

// =============================================================================
// Loaded Catalog
// =============================================================================

/// Domain objects built from a catalog file.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub ingredients: IngredientCatalog,
    /// In file order.
    pub recipes: Vec<Recipe>,
}

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid ingredient '{name}': {source}")]
    Ingredient { name: String, source: CoreError },

    #[error("Invalid recipe '{name}': {source}")]
    Recipe { name: String, source: CoreError },

    #[error("Duplicate ingredient id: {0}")]
    DuplicateIngredient(String),

    #[error("Duplicate ingredient name: {0}")]
    DuplicateIngredientName(String),

    #[error("Duplicate recipe id: {0}")]
    DuplicateRecipe(String),

    #[error("Duplicate recipe name: {0}")]
    DuplicateRecipeName(String),
}

impl CatalogError {
    /// The domain error underneath, if any.
    pub fn core_error(&self) -> Option<&CoreError> {
        match self {
            CatalogError::Ingredient { source, .. } | CatalogError::Recipe { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Reads and converts the catalog at `path`.
pub fn load(path: &Path, generator: &dyn IdGenerator) -> Result<LoadedCatalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse(&contents, generator)?;

    info!(
        path = %path.display(),
        ingredients = catalog.ingredients.len(),
        recipes = catalog.recipes.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Converts catalog JSON into domain objects.
///
/// Ingredient ids, ingredient names, recipe ids and recipe names must each be
/// unique within the file. Names are compared after trimming.
pub fn parse(json: &str, generator: &dyn IdGenerator) -> Result<LoadedCatalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;

    let mut ingredients = IngredientCatalog::new();
    let mut ingredient_names = HashSet::new();
    for record in file.ingredients {
        let ingredient = build_ingredient(&record, generator).map_err(|source| {
            CatalogError::Ingredient {
                name: record.name.clone(),
                source,
            }
        })?;
        debug!(id = %ingredient.id(), name = ingredient.name(), "Loaded ingredient");

        if !ingredient_names.insert(ingredient.name().trim().to_string()) {
            return Err(CatalogError::DuplicateIngredientName(
                ingredient.name().trim().to_string(),
            ));
        }
        if let Some(previous) = ingredients.insert(ingredient) {
            return Err(CatalogError::DuplicateIngredient(previous.id().to_string()));
        }
    }

    let mut recipes = Vec::with_capacity(file.recipes.len());
    let mut recipe_ids = HashSet::new();
    let mut recipe_names = HashSet::new();
    for record in &file.recipes {
        let recipe = build_recipe(record, generator).map_err(|source| CatalogError::Recipe {
            name: record.name.clone(),
            source,
        })?;

        if !recipe_ids.insert(recipe.id().clone()) {
            return Err(CatalogError::DuplicateRecipe(recipe.id().to_string()));
        }
        if !recipe_names.insert(recipe.name().trim().to_string()) {
            return Err(CatalogError::DuplicateRecipeName(
                recipe.name().trim().to_string(),
            ));
        }
        recipes.push(recipe);
    }

    Ok(LoadedCatalog {
        ingredients,
        recipes,
    })
}

fn build_ingredient(
    record: &IngredientRecord,
    generator: &dyn IdGenerator,
) -> Result<Ingredient, CoreError> {
    let price = Money::of(record.package_price)?;
    let unit = Unit::parse(&record.package_unit)?;

    match &record.id {
        Some(id) => Ingredient::new(
            Id::of(id.as_str()),
            record.name.as_str(),
            record.package_quantity,
            price,
            unit,
        ),
        None => Ingredient::create(
            generator,
            record.name.as_str(),
            record.package_quantity,
            price,
            unit,
        ),
    }
}

fn build_recipe(record: &RecipeRecord, generator: &dyn IdGenerator) -> Result<Recipe, CoreError> {
    let lines = record
        .ingredients
        .iter()
        .map(|line| {
            RecipeIngredient::new(
                Id::of(line.ingredient_id.as_str()),
                line.quantity,
                Unit::parse(&line.unit)?,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    match &record.id {
        Some(id) => Recipe::new(
            Id::of(id.as_str()),
            record.name.as_str(),
            lines,
            Money::zero(),
        ),
        None => Recipe::create(generator, record.name.as_str(), lines, Money::zero()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costify_core::SequentialIdGenerator;

    const BAKERY: &str = r#"{
        "ingredients": [
            { "id": "flour", "name": "Flour", "packageQuantity": 1, "packagePrice": 10.0, "packageUnit": "KG" },
            { "id": "sugar", "name": "Sugar", "packageQuantity": 1, "packagePrice": 5.0, "packageUnit": "KG" },
            { "name": "Butter", "packageQuantity": 200, "packagePrice": 3.5, "packageUnit": "G" }
        ],
        "recipes": [
            {
                "id": "cake",
                "name": "Cake",
                "ingredients": [
                    { "ingredientId": "flour", "quantity": 500, "unit": "G" },
                    { "ingredientId": "sugar", "quantity": 200, "unit": "G" }
                ]
            },
            {
                "name": "Shortbread",
                "ingredients": [{ "ingredientId": "flour", "quantity": 0.3, "unit": "KG" }]
            }
        ]
    }"#;

    #[test]
    fn test_parse_builds_domain_objects() {
        let generator = SequentialIdGenerator::new("gen");
        let catalog = parse(BAKERY, &generator).unwrap();

        assert_eq!(catalog.ingredients.len(), 3);
        assert_eq!(
            catalog.ingredients.get(&Id::of("flour")).unwrap().package_unit(),
            Unit::KG
        );
        // Ids are drawn in file order: the butter first, then the shortbread
        assert_eq!(
            catalog.ingredients.get(&Id::of("gen-1")).unwrap().name(),
            "Butter"
        );

        assert_eq!(catalog.recipes.len(), 2);
        assert_eq!(catalog.recipes[0].id(), &Id::of("cake"));
        assert_eq!(catalog.recipes[0].ingredients().len(), 2);
        assert_eq!(catalog.recipes[1].id(), &Id::of("gen-2"));
        assert!(catalog.recipes[1].total_cost().is_zero());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = parse("{}", &SequentialIdGenerator::new("x")).unwrap();
        assert!(catalog.ingredients.is_empty());
        assert!(catalog.recipes.is_empty());
    }

    #[test]
    fn test_unknown_unit_reported_with_ingredient_name() {
        let json = r#"{ "ingredients": [
            { "name": "Salt", "packageQuantity": 1, "packagePrice": 1, "packageUnit": "CUP" }
        ] }"#;
        let err = parse(json, &SequentialIdGenerator::new("x")).unwrap_err();

        assert!(matches!(err, CatalogError::Ingredient { ref name, .. } if name == "Salt"));
        assert_eq!(
            err.core_error(),
            Some(&CoreError::InvalidUnit("CUP".to_string()))
        );
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{ "ingredients": [
            { "name": "Salt", "packageQuantity": 1, "packagePrice": -1, "packageUnit": "G" }
        ] }"#;
        let err = parse(json, &SequentialIdGenerator::new("x")).unwrap_err();
        assert!(matches!(err.core_error(), Some(CoreError::NegativeMoney(_))));
    }

    #[test]
    fn test_empty_recipe_rejected() {
        let json = r#"{ "recipes": [{ "name": "Air", "ingredients": [] }] }"#;
        let err = parse(json, &SequentialIdGenerator::new("x")).unwrap_err();
        assert!(matches!(err, CatalogError::Recipe { ref name, .. } if name == "Air"));
        assert_eq!(err.core_error(), Some(&CoreError::EmptyRecipe));
    }

    #[test]
    fn test_duplicate_ingredient_id() {
        let json = r#"{ "ingredients": [
            { "id": "a", "name": "Salt", "packageQuantity": 1, "packagePrice": 1, "packageUnit": "G" },
            { "id": "a", "name": "Sea Salt", "packageQuantity": 1, "packagePrice": 2, "packageUnit": "G" }
        ] }"#;
        let err = parse(json, &SequentialIdGenerator::new("x")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIngredient(ref id) if id == "a"));
    }

    #[test]
    fn test_duplicate_ingredient_name() {
        let json = r#"{ "ingredients": [
            { "name": "Flour", "packageQuantity": 1, "packagePrice": 10, "packageUnit": "KG" },
            { "name": " Flour ", "packageQuantity": 5, "packagePrice": 40, "packageUnit": "KG" }
        ] }"#;
        let err = parse(json, &SequentialIdGenerator::new("x")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIngredientName(ref name) if name == "Flour"));
        assert!(err.core_error().is_none());
    }

    #[test]
    fn test_duplicate_recipe_id() {
        let json = r#"{
            "ingredients": [
                { "id": "flour", "name": "Flour", "packageQuantity": 1, "packagePrice": 10, "packageUnit": "KG" }
            ],
            "recipes": [
                { "id": "cake", "name": "Cake", "ingredients": [{ "ingredientId": "flour", "quantity": 500, "unit": "G" }] },
                { "id": "cake", "name": "Sponge", "ingredients": [{ "ingredientId": "flour", "quantity": 300, "unit": "G" }] }
            ]
        }"#;
        let err = parse(json, &SequentialIdGenerator::new("x")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRecipe(ref id) if id == "cake"));
    }

    #[test]
    fn test_duplicate_recipe_name() {
        let json = r#"{
            "ingredients": [
                { "id": "flour", "name": "Flour", "packageQuantity": 1, "packagePrice": 10, "packageUnit": "KG" }
            ],
            "recipes": [
                { "id": "cake", "name": "Cake", "ingredients": [{ "ingredientId": "flour", "quantity": 500, "unit": "G" }] },
                { "name": "Cake", "ingredients": [{ "ingredientId": "flour", "quantity": 300, "unit": "G" }] }
            ]
        }"#;
        let err = parse(json, &SequentialIdGenerator::new("x")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRecipeName(ref name) if name == "Cake"));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse("{ \"ingredients\": 3 }", &SequentialIdGenerator::new("x")).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.core_error().is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = load(
            Path::new("/definitely/not/here/catalog.json"),
            &SequentialIdGenerator::new("x"),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
