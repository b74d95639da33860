use sea_orm::DatabaseConnection;

use crate::{
    data::year_period::YearPeriodRepository,
    error::AppError,
    model::{
        page::{Page, PageParams},
        year_period::{CreateYearPeriodDto, YearPeriodDto},
    },
};

pub struct YearPeriodService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> YearPeriodService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated year periods, newest first.
    pub async fn list(&self, params: &PageParams) -> Result<Page<YearPeriodDto>, AppError> {
        let page = YearPeriodRepository::new(self.db).list(params).await?;

        Ok(Page {
            records: page.records.into_iter().map(Into::into).collect(),
            meta: page.meta,
        })
    }

    /// Creates the period for one starting year. The end year and display
    /// name are derived ("Tahun Ajaran {start}/{end}").
    pub async fn create(&self, dto: CreateYearPeriodDto) -> Result<YearPeriodDto, AppError> {
        if dto.year < 1900 || dto.year > 9999 {
            return Err(AppError::Validation("Invalid year".to_string()));
        }

        let periods = YearPeriodRepository::new(self.db);
        if periods.find_by_start_year(dto.year).await?.is_some() {
            return Err(AppError::Conflict("Year period already exists".to_string()));
        }

        let end_year = dto.year + 1;
        let display_name = format!("Tahun Ajaran {}/{}", dto.year, end_year);

        Ok(periods.create(dto.year, end_year, display_name).await?.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let periods = YearPeriodRepository::new(self.db);
        periods
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Year period not found".to_string()))?;

        periods.delete(id).await?;

        Ok(())
    }
}
