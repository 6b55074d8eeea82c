pub mod args;
pub mod prompt_files;
