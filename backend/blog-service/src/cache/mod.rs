/// Index page cache
///
/// The front page is by far the hottest read, so a rendered page is kept in
/// Redis for a short TTL (20 seconds by default). There is no explicit
/// invalidation: a fresh post becomes visible when the entry expires. Cache
/// failures are logged and degrade to a database read, never surfaced to the
/// client.
use redis::{aio::ConnectionManager, AsyncCommands};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::models::PostWithAuthor;
use crate::services::Page;

#[derive(Clone)]
pub struct PageCache {
    redis: ConnectionManager,
    ttl: Duration,
}

impl PageCache {
    pub fn new(redis: ConnectionManager, ttl_secs: u64) -> Self {
        Self {
            redis,
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    fn index_key(page_number: i64) -> String {
        format!("index:v1:page:{}", page_number)
    }

    pub async fn read_index_page(&self, page_number: i64) -> Result<Option<Page<PostWithAuthor>>> {
        let key = Self::index_key(page_number);
        let mut conn = self.redis.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(data)) => {
                debug!("index cache HIT for page {}", page_number);
                serde_json::from_str(&data)
                    .map(Some)
                    .map_err(|e| AppError::CacheError(format!("cache deserialization: {}", e)))
            }
            Ok(None) => {
                debug!("index cache MISS for page {}", page_number);
                Ok(None)
            }
            Err(e) => Err(AppError::CacheError(e.to_string())),
        }
    }

    pub async fn write_index_page(&self, page: &Page<PostWithAuthor>) -> Result<()> {
        let key = Self::index_key(page.page);
        let data = serde_json::to_string(page)?;
        let mut conn = self.redis.clone();

        if let Err(e) = conn
            .set_ex::<_, _, ()>(&key, data, self.ttl.as_secs())
            .await
        {
            warn!("index cache write failed: {}", e);
            return Err(AppError::CacheError(e.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_key_format() {
        assert_eq!(PageCache::index_key(1), "index:v1:page:1");
        assert_eq!(PageCache::index_key(7), "index:v1:page:7");
    }
}
