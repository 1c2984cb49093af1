//! Shared fixtures for task unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::task::{
    adapters::memory::{
        InMemoryTagRepository, InMemoryTaskCommentRepository, InMemoryTaskRepository,
        InMemoryTaskStore, InMemoryTaskTagRelationRepository,
    },
    domain::{Tag, TagName, UserId},
    ports::TagRepository,
    services::TaskService,
};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock that advances one second on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub const fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

pub type MemoryService = TaskService<
    InMemoryTaskRepository,
    InMemoryTagRepository,
    InMemoryTaskTagRelationRepository,
    InMemoryTaskCommentRepository,
    SteppingClock,
>;

pub const OWNER: UserId = UserId::new(1);
pub const STRANGER: UserId = UserId::new(2);

/// Moment the test clock starts at.
pub fn clock_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0)
        .single()
        .expect("valid start time")
}

/// Midnight of the given day in March 2026, after every clock reading.
pub fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, 0, 0, 0)
        .single()
        .expect("valid March date")
}

#[fixture]
pub fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new()
}

pub fn service_over(store: &InMemoryTaskStore) -> MemoryService {
    TaskService::new(
        Arc::new(store.tasks()),
        Arc::new(store.tags()),
        Arc::new(store.relations()),
        Arc::new(store.comments()),
        Arc::new(SteppingClock::starting_at(clock_start())),
    )
}

#[fixture]
pub fn service() -> MemoryService {
    service_over(&InMemoryTaskStore::new())
}

pub async fn seed_tag(store: &InMemoryTaskStore, owner: UserId, name: &str) -> Tag {
    let tag_name = TagName::new(name).expect("valid tag name");
    store
        .tags()
        .save(Tag::new(owner, tag_name))
        .await
        .expect("tag should be stored")
}
