// Incremental fleet list scan - rotates through pages forever
use crate::client::SpaceTradersClient;
use crate::models::PageMeta;
use crate::state::GameState;
use crate::{SHIP_PAGE_LIMIT, o_debug};

/// Background refresh that walks the paginated ship list one page per
/// invocation, merging every returned ship into the cache. The cursor wraps
/// back to the first page once it passes the bound the server reported, so
/// every ship gets refreshed eventually even if no per-ship timer fires.
pub struct FleetScanner {
    page: u32,
    max_pages: u32,
}

impl FleetScanner {
    pub fn new() -> Self {
        Self { page: 1, max_pages: 1 }
    }

    /// Fetch and merge one page. On a failed fetch the cursor stays put (the
    /// same page is retried next time) and the cache is untouched.
    pub async fn step(&mut self, client: &SpaceTradersClient, state: &GameState) -> Result<(), Box<dyn std::error::Error>> {
        let page = self.next_page();
        let (ships, meta) = client.list_ships(page, SHIP_PAGE_LIMIT).await?;

        let count = ships.len();
        for ship in ships {
            state.upsert(ship);
        }
        self.note_meta(&meta);

        o_debug!("🔭 Fleet scan merged {} ships from page {}/{}", count, page, self.max_pages);
        Ok(())
    }

    /// The page the next fetch will ask for, wrapping past the known bound.
    pub fn next_page(&mut self) -> u32 {
        if self.page > self.max_pages {
            self.page = 1;
        }
        self.page
    }

    /// Record the server-reported pagination bound and advance the cursor.
    /// Only called after a successful fetch.
    pub fn note_meta(&mut self, meta: &PageMeta) {
        self.max_pages = meta.total.div_ceil(meta.limit.max(1)).max(1);
        self.page += 1;
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }
}

impl Default for FleetScanner {
    fn default() -> Self {
        Self::new()
    }
}
