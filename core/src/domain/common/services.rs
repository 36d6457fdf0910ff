use crate::domain::{
    ingredient::ports::IngredientRepository, recipe::ports::RecipeRepository,
    storage::ports::ObjectStoragePort,
};

/// Aggregate service the domain service traits are implemented on.
///
/// Repositories and the object storage adapter are injected so the whole
/// service can be driven against in-memory fakes in tests.
#[derive(Debug, Clone)]
pub struct Service<R, I, OS>
where
    R: RecipeRepository,
    I: IngredientRepository,
    OS: ObjectStoragePort,
{
    pub(crate) recipe_repository: R,
    pub(crate) ingredient_repository: I,
    pub(crate) object_storage: OS,
}

impl<R, I, OS> Service<R, I, OS>
where
    R: RecipeRepository,
    I: IngredientRepository,
    OS: ObjectStoragePort,
{
    pub fn new(recipe_repository: R, ingredient_repository: I, object_storage: OS) -> Self {
        Self {
            recipe_repository,
            ingredient_repository,
            object_storage,
        }
    }
}
