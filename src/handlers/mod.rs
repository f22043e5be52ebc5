pub mod health;
pub mod networks;
