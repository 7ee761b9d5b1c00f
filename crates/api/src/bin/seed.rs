//! Populate a database with sample district records for local development.
//!
//! Safe to run repeatedly: users, personnel and cases whose unique key is
//! already present are skipped. Duties, alerts and communications carry no
//! natural key, so they are only inserted on the run that creates the
//! sample officers.

use chrono::{Duration, Utc};
use districtops_api::auth::password::hash_password;
use districtops_core::roles::VALID_ROLES;
use districtops_core::types::DbId;
use districtops_core::{alerts, cases, communications, duties, personnel, priority};
use districtops_db::models::alert::CreateAlert;
use districtops_db::models::case::CreateCase;
use districtops_db::models::communication::CreateCommunication;
use districtops_db::models::duty::CreateDuty;
use districtops_db::models::personnel::CreatePersonnel;
use districtops_db::models::user::CreateUser;
use districtops_db::repositories::{
    AlertRepo, CaseRepo, CommunicationRepo, DutyRepo, PersonnelRepo, UserRepo,
};
use districtops_db::DbPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Password given to every seeded account.
const SEED_PASSWORD: &str = "password123";

/// Failure while seeding.
#[derive(Debug, thiserror::Error)]
enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),
}

/// Outcome of a single insert that may collide with an existing unique key.
#[derive(Debug)]
enum Seeded<T> {
    Created(T),
    Skipped,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "districtops_seed=info,districtops_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = districtops_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    districtops_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    if let Err(e) = seed(&pool).await {
        tracing::error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
    tracing::info!("Seeding complete");
}

async fn seed(pool: &DbPool) -> Result<(), SeedError> {
    let user_ids = seed_users(pool).await?;
    let (officer_ids, officers_created) = seed_personnel(pool, &user_ids).await?;
    seed_cases(pool, &officer_ids).await?;

    if !officers_created {
        tracing::info!("Sample officers already present, skipping duties, alerts and communications");
        return Ok(());
    }

    let author = user_ids.first().copied();
    seed_duties(pool, &officer_ids, author).await?;
    seed_alerts(pool, author).await?;
    seed_communications(pool, author).await?;
    Ok(())
}

/// One account per role, `<role>@district.local`.
async fn seed_users(pool: &DbPool) -> Result<Vec<DbId>, SeedError> {
    let password_hash = hash_password(SEED_PASSWORD).map_err(SeedError::PasswordHash)?;

    let mut ids = Vec::with_capacity(VALID_ROLES.len());
    for role in VALID_ROLES {
        let email = format!("{role}@district.local");
        if let Some(existing) = UserRepo::find_by_email(pool, &email).await? {
            tracing::info!(%email, "User exists, skipping");
            ids.push(existing.id);
            continue;
        }

        let user = UserRepo::create(
            pool,
            &CreateUser {
                email,
                first_name: capitalize(role),
                last_name: "Officer".to_string(),
                password_hash: password_hash.clone(),
                role: role.to_string(),
            },
        )
        .await?;
        tracing::info!(user_id = user.id, email = %user.email, "Seeded user");
        ids.push(user.id);
    }
    Ok(ids)
}

async fn seed_personnel(
    pool: &DbPool,
    user_ids: &[DbId],
) -> Result<(Vec<DbId>, bool), sqlx::Error> {
    let roster = [
        ("PD-1001", "Ravi", "Kumar", "Inspector", "Crime Branch", true, Some("Central Station")),
        ("PD-1002", "Anita", "Sharma", "Sub-Inspector", "Traffic", true, Some("Market Junction")),
        ("PD-1003", "Vikram", "Singh", "Constable", "Patrol", false, None),
        ("PD-1004", "Meera", "Das", "Head Constable", "Cyber Cell", false, None),
    ];

    let mut ids = Vec::new();
    let mut created_any = false;
    for (i, (badge, first, last, rank, unit, on_duty, location)) in roster.into_iter().enumerate()
    {
        let input = CreatePersonnel {
            user_id: user_ids.get(i).copied(),
            badge_number: badge.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            rank: rank.to_string(),
            unit: unit.to_string(),
            phone: Some(format!("+91-98000-0{:04}", 1001 + i)),
            email: Some(format!("{}.{}@district.local", first.to_lowercase(), last.to_lowercase())),
            status: Some(personnel::STATUS_ACTIVE.to_string()),
            is_on_duty: Some(on_duty),
            current_location: location.map(str::to_string),
        };
        match insert_unique(PersonnelRepo::create(pool, &input).await)? {
            Seeded::Created(officer) => {
                tracing::info!(personnel_id = officer.id, badge, "Seeded personnel");
                ids.push(officer.id);
                created_any = true;
            }
            Seeded::Skipped => tracing::info!(badge, "Personnel exists, skipping"),
        }
    }

    if !created_any {
        ids = PersonnelRepo::list(pool).await?.into_iter().map(|p| p.id).collect();
    }
    Ok((ids, created_any))
}

async fn seed_cases(pool: &DbPool, officer_ids: &[DbId]) -> Result<(), sqlx::Error> {
    let now = Utc::now();
    let samples = [
        (
            "CR-2025-0001",
            "Burglary at Lakeview Apartments",
            "theft",
            cases::STATUS_UNDER_INVESTIGATION,
            priority::PRIORITY_HIGH,
        ),
        (
            "CR-2025-0002",
            "Chain snatching near bus stand",
            "robbery",
            cases::STATUS_OPEN,
            priority::PRIORITY_URGENT,
        ),
        (
            "CR-2025-0003",
            "Online banking fraud complaint",
            "cyber",
            cases::STATUS_OPEN,
            priority::PRIORITY_MEDIUM,
        ),
        (
            "CR-2025-0004",
            "Noise complaint, Ward 7",
            "public_nuisance",
            cases::STATUS_CLOSED,
            priority::PRIORITY_LOW,
        ),
    ];

    for (i, (number, title, case_type, status, prio)) in samples.into_iter().enumerate() {
        let reported_at = now - Duration::days(i as i64 + 1);
        let input = CreateCase {
            case_number: number.to_string(),
            title: title.to_string(),
            description: Some(format!("Sample record: {title}.")),
            case_type: case_type.to_string(),
            status: Some(status.to_string()),
            priority: Some(prio.to_string()),
            assigned_to: officer_ids.get(i % officer_ids.len().max(1)).copied(),
            reported_by: Some("Front desk".to_string()),
            reported_at: Some(reported_at),
            closed_at: (status == cases::STATUS_CLOSED).then_some(now),
        };
        match insert_unique(CaseRepo::create(pool, &input).await)? {
            Seeded::Created(case) => tracing::info!(case_id = case.id, number, "Seeded case"),
            Seeded::Skipped => tracing::info!(number, "Case exists, skipping"),
        }
    }
    Ok(())
}

async fn seed_duties(
    pool: &DbPool,
    officer_ids: &[DbId],
    author: Option<DbId>,
) -> Result<(), sqlx::Error> {
    let now = Utc::now();
    let samples = [
        ("Market patrol", "Market Junction", 2, 8, duties::STATUS_PENDING),
        ("Night checkpoint", "Highway 44 toll plaza", 12, 8, duties::STATUS_PENDING),
        ("Court escort", "District Court", -4, 3, duties::STATUS_IN_PROGRESS),
    ];

    for (i, (title, location, start_in_hours, length_hours, status)) in
        samples.into_iter().enumerate()
    {
        let start_time = now + Duration::hours(start_in_hours);
        let duty = DutyRepo::create(
            pool,
            &CreateDuty {
                title: title.to_string(),
                description: None,
                assigned_to: officer_ids.get(i).copied(),
                location: Some(location.to_string()),
                start_time,
                end_time: start_time + Duration::hours(length_hours),
                status: Some(status.to_string()),
                created_by: author,
            },
        )
        .await?;
        tracing::info!(duty_id = duty.id, title, "Seeded duty");
    }
    Ok(())
}

async fn seed_alerts(pool: &DbPool, author: Option<DbId>) -> Result<(), sqlx::Error> {
    let samples = [
        (
            "Missing child, Sector 9",
            "Eight-year-old last seen near the park gate. All units report sightings.",
            alerts::TYPE_EMERGENCY,
            priority::PRIORITY_URGENT,
        ),
        (
            "Road closure",
            "NH-44 northbound closed for repairs until 18:00.",
            alerts::TYPE_INFO,
            priority::PRIORITY_LOW,
        ),
    ];

    for (title, message, alert_type, prio) in samples {
        let alert = AlertRepo::create(
            pool,
            &CreateAlert {
                title: title.to_string(),
                message: message.to_string(),
                alert_type: alert_type.to_string(),
                priority: Some(prio.to_string()),
                sent_by: author,
                recipients: Some(vec!["all".to_string()]),
                is_read: Some(false),
            },
        )
        .await?;
        tracing::info!(alert_id = alert.id, title, "Seeded alert");
    }
    Ok(())
}

async fn seed_communications(pool: &DbPool, author: Option<DbId>) -> Result<(), sqlx::Error> {
    let circular = CommunicationRepo::create(
        pool,
        &CreateCommunication {
            comm_type: communications::TYPE_CIRCULAR.to_string(),
            subject: Some("Festival season deployment".to_string()),
            message: "All leave is cancelled for the festival week. Report to unit heads."
                .to_string(),
            sender: author,
            recipients: Some(vec!["all-units".to_string()]),
            status: Some(communications::STATUS_SENT.to_string()),
            sent_at: Some(Utc::now()),
        },
    )
    .await?;
    tracing::info!(communication_id = circular.id, "Seeded communication");
    Ok(())
}

/// Treat a unique violation as "already seeded"; propagate anything else.
fn insert_unique<T>(result: Result<T, sqlx::Error>) -> Result<Seeded<T>, sqlx::Error> {
    match result {
        Ok(row) => Ok(Seeded::Created(row)),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Ok(Seeded::Skipped),
        Err(e) => Err(e),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn hashing_failure_keeps_its_own_variant() {
        let err = SeedError::PasswordHash(argon2::password_hash::Error::Password);
        assert!(err.to_string().starts_with("Password hashing failed"));
    }

    #[test]
    fn database_errors_convert_into_seed_error() {
        let err: SeedError = sqlx::Error::RowNotFound.into();
        assert_matches!(err, SeedError::Database(sqlx::Error::RowNotFound));
    }

    #[test]
    fn unique_violation_is_skipped_other_errors_propagate() {
        assert_matches!(insert_unique(Ok::<_, sqlx::Error>(5)), Ok(Seeded::Created(5)));
        assert_matches!(
            insert_unique::<DbId>(Err(sqlx::Error::RowNotFound)),
            Err(sqlx::Error::RowNotFound)
        );
    }
}
