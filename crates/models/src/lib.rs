pub mod errors;
pub mod db;
pub mod user;
pub mod planet;
pub mod person;
pub mod favorite_planet;
pub mod favorite_person;

#[cfg(test)]
mod tests;
