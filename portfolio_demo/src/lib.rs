//! Fixtures shared by the tests of all crates.

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use uuid::{uuid, Uuid};

pub mod contact;

pub const UUID1: Uuid = uuid!("eb1cd87a-4475-4d68-a2c2-0216bdaac8f7");
pub const UUID2: Uuid = uuid!("6b2f8ae6-5b36-4a33-9e58-0b1f6d1bd1a2");

pub static TIMESTAMP: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2025, 1, 20, 13, 37, 42).unwrap());
