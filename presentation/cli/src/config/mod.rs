pub mod app_config;
pub mod database_config;
pub mod openai_config;
