use sqlx::{Executor, QueryBuilder, Sqlite};

use crate::models::{NewQuestion, Question};

/// All questions, newest first.
pub async fn list_all_desc<'e, E>(executor: E) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id DESC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn count_all<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar(
        r#"
            SELECT COUNT(*)
            FROM questions
        "#,
    )
    .fetch_one(executor)
    .await
}

/// Case-insensitive substring match against the question text, ascending by
/// id. LIKE metacharacters in the term are not escaped.
pub async fn search<'e, E>(executor: E, term: &str) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE LOWER(question) LIKE '%' || LOWER(?1) || '%'
            ORDER BY id
        "#,
    )
    .bind(term)
    .fetch_all(executor)
    .await
}

/// Questions whose `category` column equals the given decimal string,
/// ascending by id.
pub async fn list_by_category<'e, E>(
    executor: E,
    category: &str,
) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?1
            ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Insert a question and return the stored row.
pub async fn insert<'e, E>(executor: E, new: &NewQuestion) -> Result<Question, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, question, answer, category, difficulty
        "#,
    )
    .bind(&new.question)
    .bind(&new.answer)
    .bind(&new.category)
    .bind(new.difficulty)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E>(executor: E, question: &Question) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
            UPDATE questions
            SET question = ?1, answer = ?2, category = ?3, difficulty = ?4
            WHERE id = ?5
        "#,
    )
    .bind(&question.question)
    .bind(&question.answer)
    .bind(&question.category)
    .bind(question.difficulty)
    .bind(question.id)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn delete<'e, E>(executor: E, id: i64) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
            DELETE FROM questions
            WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(())
}

/// One question picked uniformly at random among rows matching the optional
/// category filter and not listed in `exclude`. Returns `None` when no
/// candidate remains.
pub async fn pick_random<'e, E>(
    executor: E,
    category: Option<&str>,
    exclude: &[i64],
) -> Result<Option<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let mut builder = QueryBuilder::<'_, Sqlite>::new(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE 1 = 1",
    );

    if let Some(category) = category {
        builder.push(" AND category = ");
        builder.push_bind(category.to_owned());
    }

    if !exclude.is_empty() {
        builder.push(" AND id NOT IN (");
        let mut ids = builder.separated(", ");
        for id in exclude {
            ids.push_bind(*id);
        }
        ids.push_unseparated(")");
    }

    builder.push(" ORDER BY RANDOM() LIMIT 1");

    builder
        .build_query_as::<Question>()
        .fetch_optional(executor)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> sqlx::SqlitePool {
        let pool = crate::create_pool("sqlite::memory:", 1)
            .await
            .expect("Failed to create pool");
        crate::migrate(&pool).await.expect("Failed to migrate");
        pool
    }

    fn sample(category: &str) -> NewQuestion {
        NewQuestion {
            question: "What is H2O?".to_string(),
            answer: "Water".to_string(),
            category: category.to_string(),
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let pool = test_pool().await;

        let created = insert(&pool, &sample("1")).await.expect("insert failed");
        let found = find_by_id(&pool, created.id)
            .await
            .expect("find failed")
            .expect("row missing");

        assert_eq!(found.question, "What is H2O?");
        assert_eq!(found.answer, "Water");
        assert_eq!(found.category, "1");
        assert_eq!(found.difficulty, 1);
    }

    #[tokio::test]
    async fn pick_random_respects_exclusions() {
        let pool = test_pool().await;

        let a = insert(&pool, &sample("1")).await.expect("insert failed");
        let b = insert(&pool, &sample("1")).await.expect("insert failed");

        let picked = pick_random(&pool, Some("1"), &[a.id])
            .await
            .expect("query failed")
            .expect("expected a candidate");
        assert_eq!(picked.id, b.id);

        let exhausted = pick_random(&pool, Some("1"), &[a.id, b.id])
            .await
            .expect("query failed");
        assert!(exhausted.is_none());
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let pool = test_pool().await;

        insert(&pool, &sample("1")).await.expect("insert failed");

        let hits = search(&pool, "h2o").await.expect("search failed");
        assert_eq!(hits.len(), 1);

        let misses = search(&pool, "nonexistent").await.expect("search failed");
        assert!(misses.is_empty());
    }
}
