//! Common library for the notes backend
//!
//! This crate provides the persistence plumbing shared by the notes service
//! and its auxiliary tools: connection configuration, pooling, schema
//! bootstrap and the database error taxonomy.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, close_pool, health_check, init_pool};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     let is_healthy = health_check(&pool).await?;
//!     println!("Database health check: {}", is_healthy);
//!     close_pool(pool).await;
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
