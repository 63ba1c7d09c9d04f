pub mod initialize;
pub mod kv;
pub mod log;
pub mod pool;

use crate::errors::AppResult;
use pool::DbPool;

/// Open the database at `path`, guaranteeing the schema exists.
pub fn open(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    initialize::init_db(&pool.conn)?;
    Ok(pool)
}
