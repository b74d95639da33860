use crate::error::AppError;
use crate::model::student::{
    CreateStudentDto, ImportStudentRow, ImportStudentsDto, PromoteStudentsDto, UpdateStudentDto,
};
use crate::service::student::StudentService;
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod import;
mod promote;
