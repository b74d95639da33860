use crate::data::violation::ViolationRepository;
use crate::model::{page::PageParams, violation::ViolationFilter};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod detail;
mod list;
