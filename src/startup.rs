use crate::{config::Config, error::AppError};

/// Username and password for the account seeded on an empty users table.
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Connects to the database and runs pending migrations.
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds a default admin account when no users exist, so a fresh install
/// can log in at all. The password should be changed immediately.
pub async fn seed_admin_user(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    use crate::data::user::UserRepository;

    let users = UserRepository::new(db);
    if users.count().await? > 0 {
        return Ok(());
    }

    let hash = bcrypt::hash(DEFAULT_ADMIN_PASSWORD, bcrypt::DEFAULT_COST)
        .map_err(|err| AppError::Internal(format!("Password hashing failed: {err}")))?;
    users
        .create(
            DEFAULT_ADMIN_USERNAME.to_string(),
            hash,
            "admin".to_string(),
        )
        .await?;

    tracing::info!("Seeded default admin user '{}'", DEFAULT_ADMIN_USERNAME);

    Ok(())
}
