pub mod client;

pub use client::{
    GenerateRequest, GenerateResponse, HttpRecipeApi, LoginResponse, RecipeApi, TestResponse,
};
