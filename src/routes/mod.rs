pub mod beats;
pub mod health;
