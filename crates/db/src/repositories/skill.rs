use crate::models::DbSkill;
use eyre::Result;
use sqlx::PgExecutor;
use uuid::Uuid;

/// Inserts a skill for a teacher. No duplicate-name check: a teacher may
/// hold the same skill name more than once.
pub async fn create_skill(
    executor: impl PgExecutor<'_>,
    teacher_id: Uuid,
    skill_name: &str,
) -> Result<DbSkill> {
    let id = Uuid::new_v4();

    let skill = sqlx::query_as::<_, DbSkill>(
        r#"
        INSERT INTO skills (id, teacher_id, skill_name)
        VALUES ($1, $2, $3)
        RETURNING id, teacher_id, skill_name
        "#,
    )
    .bind(id)
    .bind(teacher_id)
    .bind(skill_name)
    .fetch_one(executor)
    .await?;

    Ok(skill)
}

pub async fn get_skill_by_id(executor: impl PgExecutor<'_>, id: Uuid) -> Result<Option<DbSkill>> {
    let skill = sqlx::query_as::<_, DbSkill>(
        r#"
        SELECT id, teacher_id, skill_name
        FROM skills
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(skill)
}

pub async fn get_skills_by_teacher_id(
    executor: impl PgExecutor<'_>,
    teacher_id: Uuid,
) -> Result<Vec<DbSkill>> {
    let skills = sqlx::query_as::<_, DbSkill>(
        r#"
        SELECT id, teacher_id, skill_name
        FROM skills
        WHERE teacher_id = $1
        "#,
    )
    .bind(teacher_id)
    .fetch_all(executor)
    .await?;

    Ok(skills)
}

pub async fn delete_skill(executor: impl PgExecutor<'_>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM skills
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(())
}
