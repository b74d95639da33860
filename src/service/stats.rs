use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::stats::StatsRepository,
    error::AppError,
    model::stats::{
        CategoryCountDto, MonthCountDto, StatsCardsDto, StatsOverviewDto, TopStudentDto,
    },
};

/// How many students the leaderboard shows.
const TOP_STUDENT_LIMIT: u64 = 5;

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assembles the dashboard: headline cards, per-category and per-month
    /// violation counts, and the highest-point students.
    pub async fn overview(&self) -> Result<StatsOverviewDto, AppError> {
        let repo = StatsRepository::new(self.db);

        let total_students = repo.count_students().await?;
        let total_classes = repo.count_classes().await?;
        let rows = repo.violation_rows().await?;

        let total_violations = rows.len() as u64;
        let unimplemented_violations = rows.iter().filter(|r| !r.implemented).count() as u64;
        let average_points = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(|r| r.point as f64).sum::<f64>() / rows.len() as f64
        };

        let mut by_category: BTreeMap<String, u64> = BTreeMap::new();
        let mut by_month: BTreeMap<String, u64> = BTreeMap::new();
        for row in &rows {
            *by_category.entry(row.category_name.clone()).or_default() += 1;
            let month = row.created_at.format("%Y-%m").to_string();
            *by_month.entry(month).or_default() += 1;
        }

        let top_students = repo
            .top_students(TOP_STUDENT_LIMIT)
            .await?
            .into_iter()
            .map(|s| TopStudentDto {
                nis: s.nis,
                name: s.name,
                point: s.point,
            })
            .collect();

        Ok(StatsOverviewDto {
            cards: StatsCardsDto {
                total_students,
                total_classes,
                total_violations,
                unimplemented_violations,
                average_points,
            },
            violations_by_category: by_category
                .into_iter()
                .map(|(category, count)| CategoryCountDto { category, count })
                .collect(),
            top_students,
            violations_by_month: by_month
                .into_iter()
                .map(|(month, count)| MonthCountDto { month, count })
                .collect(),
        })
    }
}
