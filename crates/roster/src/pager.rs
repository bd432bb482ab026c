use gradtrack_api_client::{OutcomesClient, StudentQuery};

use crate::error::RosterError;
use crate::store::Roster;

/// Outcome of a load call that may decline to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and applied; carries the student count received.
    Loaded(usize),
    /// Nothing fetched: a request was already in flight, the listing is
    /// exhausted, or no initial load has happened yet.
    Noop,
}

/// Pagination state against the remote student listing.
///
/// `offset` is the offset of the most recently fetched page, so after N
/// successful load-more calls it equals N * page size. A failed fetch
/// leaves offset, flags, and the roster exactly as they were.
#[derive(Debug)]
pub struct Pager {
    query: StudentQuery,
    limit: u32,
    offset: u32,
    has_more: bool,
    total: usize,
    in_flight: bool,
}

impl Pager {
    /// New pager over the given server-side filters. `has_more` starts
    /// false: load-more before an initial load is a no-op.
    pub fn new(query: StudentQuery, limit: u32) -> Self {
        Self {
            query,
            limit,
            offset: 0,
            has_more: false,
            total: 0,
            in_flight: false,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Fetch the first page and REPLACE the roster with it.
    pub fn initial_load(
        &mut self,
        client: &OutcomesClient,
        roster: &mut Roster,
    ) -> Result<LoadOutcome, RosterError> {
        if self.in_flight {
            return Ok(LoadOutcome::Noop);
        }

        self.in_flight = true;
        let result = client.list_students(&self.query.with_page(self.limit, 0));
        self.in_flight = false;

        // Error path: no state was touched yet, so prior roster survives.
        let page = result?;

        self.offset = 0;
        self.has_more = page.has_more;
        self.total = page.total;
        let count = page.students.len();
        roster.replace(page.students);
        Ok(LoadOutcome::Loaded(count))
    }

    /// Fetch the next page and APPEND it to the roster.
    pub fn load_more(
        &mut self,
        client: &OutcomesClient,
        roster: &mut Roster,
    ) -> Result<LoadOutcome, RosterError> {
        if self.in_flight || !self.has_more {
            return Ok(LoadOutcome::Noop);
        }

        self.in_flight = true;
        let next_offset = self.offset + self.limit;
        let result = client.list_students(&self.query.with_page(self.limit, next_offset));
        self.in_flight = false;

        let page = result?;

        self.offset = next_offset;
        self.has_more = page.has_more;
        self.total = page.total;
        let count = page.students.len();
        roster.append(page.students);
        Ok(LoadOutcome::Loaded(count))
    }

    /// Follow `has_more` until the listing is exhausted. Returns the
    /// final roster length.
    pub fn load_all(
        &mut self,
        client: &OutcomesClient,
        roster: &mut Roster,
    ) -> Result<usize, RosterError> {
        self.initial_load(client, roster)?;
        loop {
            match self.load_more(client, roster)? {
                LoadOutcome::Loaded(count) => {
                    // Guard: a server that keeps claiming has_more while
                    // returning empty pages would loop forever.
                    if count == 0 && self.has_more {
                        return Err(RosterError::Pagination(
                            "server returned has_more=true with an empty page".into(),
                        ));
                    }
                }
                LoadOutcome::Noop => return Ok(roster.len()),
            }
        }
    }
}
