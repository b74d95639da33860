use crate::data::student::StudentRepository;
use crate::model::{page::PageParams, student::StudentFilter};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod detail;
mod enrollment;
mod list;
