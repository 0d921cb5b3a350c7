use std::time::Duration;

use crate::db::{connect_db, run_migrations, Database};
use crate::interpreter::Interpreter;
use crate::quotes::QuoteClient;

pub async fn init_test_db() -> Database {
    let pool = connect_db("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .expect("failed to create in-memory database");

    run_migrations(&pool)
        .await
        .expect("failed to apply migrations");

    Database::new(pool)
}

/// Interpreter over `db` whose quote client talks to `quote_url`.
pub fn init_test_interpreter(db: Database, quote_url: &str) -> Interpreter {
    let quotes = QuoteClient::new(quote_url, Duration::from_secs(2))
        .expect("failed to build quote client");
    Interpreter::new(db, quotes)
}
