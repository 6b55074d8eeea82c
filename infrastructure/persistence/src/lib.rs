pub mod db;
pub mod qa {
    pub mod entity;
    pub mod repository;
}
