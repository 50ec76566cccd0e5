//! Integration tests for the annotation log repositories:
//! - transactional submission (annotation + feedback + timestamps)
//! - read-time stats aggregation and attention-check exclusion
//! - leaderboard totals and temporary-annotator exclusion
//! - claim/upgrade preserving history

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use trick_core::stats::build_user_stats;
use trick_core::types::DbId;
use trick_db::models::annotation::NewAnnotation;
use trick_db::models::item::CreateEvaluationItem;
use trick_db::repositories::{AnnotationRepo, AnnotatorRepo, FeedbackOptionRepo, ItemRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_item(pool: &PgPool, true_boundary: i32) -> DbId {
    ItemRepo::create(
        pool,
        &CreateEvaluationItem {
            playlist_id: None,
            prompt_sentences: vec!["Once upon a time.".to_string()],
            continuation_sentences: vec![
                "There was a fox.".to_string(),
                "It ran.".to_string(),
                "It jumped.".to_string(),
                "It slept.".to_string(),
                "It woke.".to_string(),
                "The end.".to_string(),
            ],
            true_boundary,
            decoding_param: Some(0.4),
        },
    )
    .await
    .expect("create item")
    .id
}

async fn new_annotator(pool: &PgPool, username: &str) -> DbId {
    AnnotatorRepo::create_temporary(pool, username, "web", false)
        .await
        .expect("create annotator")
        .id
}

fn guess(annotator_id: DbId, item_id: DbId, guessed_boundary: i32, points: i32) -> NewAnnotation {
    NewAnnotation {
        annotator_id,
        item_id,
        playlist_id: None,
        guessed_boundary,
        points,
        attention_check: false,
    }
}

async fn submit(pool: &PgPool, annotation: NewAnnotation) -> DbId {
    AnnotationRepo::create_submission(pool, &annotation, &[], None, &[])
        .await
        .expect("create submission")
        .id
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn submission_persists_feedback_and_timestamps(pool: PgPool) {
    let item = new_item(&pool, 3).await;
    let annotator = new_annotator(&pool, "tester").await;

    let defaults = FeedbackOptionRepo::default_ids_by_short_name(
        &pool,
        &["grammar".to_string(), "sense".to_string()],
    )
    .await
    .unwrap();
    assert_eq!(defaults.len(), 2);
    let option_ids: Vec<DbId> = defaults.values().copied().collect();

    let t0 = Utc.with_ymd_and_hms(2023, 4, 1, 12, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2023, 4, 1, 12, 0, 30).unwrap();

    let annotation = AnnotationRepo::create_submission(
        &pool,
        &guess(annotator, item, 2, 10),
        &option_ids,
        Some("the tone shifts oddly"),
        &[t0, t1],
    )
    .await
    .unwrap();

    let attached = FeedbackOptionRepo::list_for_annotation(&pool, annotation.id)
        .await
        .unwrap();
    assert_eq!(attached.len(), 3);
    assert!(attached.iter().any(|o| o.short_name == "grammar" && o.is_default));
    let other = attached.iter().find(|o| !o.is_default).unwrap();
    assert_eq!(other.category, "other");
    assert_eq!(other.short_name, "the tone shifts oddly");

    let timestamps = AnnotationRepo::timestamps_for(&pool, annotation.id)
        .await
        .unwrap();
    assert_eq!(timestamps.len(), 2);
    assert_eq!(timestamps[0].position, 0);
    assert_eq!(timestamps[0].recorded_at, t0);
    assert_eq!(timestamps[1].recorded_at, t1);
}

#[sqlx::test(migrations = "./migrations")]
async fn identical_other_reasons_create_separate_options(pool: PgPool) {
    let item = new_item(&pool, 3).await;
    let a = new_annotator(&pool, "a").await;
    let b = new_annotator(&pool, "b").await;

    for annotator in [a, b] {
        AnnotationRepo::create_submission(
            &pool,
            &guess(annotator, item, 1, 0),
            &[],
            Some("weird ending"),
            &[],
        )
        .await
        .unwrap();
    }

    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM feedback_options WHERE short_name = 'weird ending'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_submissions_are_kept_as_distinct_rows(pool: PgPool) {
    let item = new_item(&pool, 3).await;
    let annotator = new_annotator(&pool, "replayer").await;

    // A client retry replays the same payload; the log keeps both rows.
    submit(&pool, guess(annotator, item, 2, 10)).await;
    submit(&pool, guess(annotator, item, 2, 10)).await;

    let rows = AnnotationRepo::scored_for_annotator(&pool, annotator, None, false)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    let stats = build_user_stats(rows);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.points, Some(20));
}

// ---------------------------------------------------------------------------
// Stats aggregation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn stats_scenario_exact_and_past_boundary(pool: PgPool) {
    let item = new_item(&pool, 3).await;
    let a = new_annotator(&pool, "annotator_a").await;
    let b = new_annotator(&pool, "annotator_b").await;

    // A guesses 2 against true boundary 3: exact hit.
    submit(&pool, guess(a, item, 2, 15)).await;
    let stats_a = build_user_stats(
        AnnotationRepo::scored_for_annotator(&pool, a, None, false)
            .await
            .unwrap(),
    );
    assert_eq!(stats_a.total, 1);
    assert_eq!(stats_a.correct, 1);

    // B guesses 5: three sentences past the boundary.
    submit(&pool, guess(b, item, 5, 0)).await;
    let stats_b = build_user_stats(
        AnnotationRepo::scored_for_annotator(&pool, b, None, false)
            .await
            .unwrap(),
    );
    assert_eq!(stats_b.past_boundary, 1);
    assert_eq!(stats_b.avg_distance, Some(3.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn attention_checks_never_reach_skill_aggregates(pool: PgPool) {
    let item = new_item(&pool, 7).await;
    let annotator = new_annotator(&pool, "turker").await;

    let mut check = guess(annotator, item, 4, 100);
    check.attention_check = true;
    submit(&pool, check).await;

    let skill = AnnotationRepo::scored_for_annotator(&pool, annotator, None, false)
        .await
        .unwrap();
    assert!(skill.is_empty());

    let compliance = AnnotationRepo::scored_for_annotator(&pool, annotator, None, true)
        .await
        .unwrap();
    assert_eq!(compliance.len(), 1);

    assert_eq!(
        AnnotationRepo::completed_count(&pool, annotator).await.unwrap(),
        0
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn claim_preserves_annotation_history(pool: PgPool) {
    let item = new_item(&pool, 3).await;
    let annotator = new_annotator(&pool, "guest_fox").await;
    submit(&pool, guess(annotator, item, 2, 25)).await;

    let before = build_user_stats(
        AnnotationRepo::scored_for_annotator(&pool, annotator, None, false)
            .await
            .unwrap(),
    );

    let claimed = AnnotatorRepo::claim(&pool, annotator, "fox_forever", Some("fox@example.com"))
        .await
        .unwrap()
        .expect("claim should succeed");
    assert_eq!(claimed.id, annotator);
    assert!(!claimed.is_temporary);

    let after = build_user_stats(
        AnnotationRepo::scored_for_annotator(&pool, annotator, None, false)
            .await
            .unwrap(),
    );
    assert_eq!(before, after);
}

#[sqlx::test(migrations = "./migrations")]
async fn claim_refuses_a_permanent_annotator(pool: PgPool) {
    let annotator = new_annotator(&pool, "guest_owl").await;
    AnnotatorRepo::claim(&pool, annotator, "owl", None)
        .await
        .unwrap()
        .expect("first claim succeeds");

    let second = AnnotatorRepo::claim(&pool, annotator, "owl_two", None)
        .await
        .unwrap();
    assert!(second.is_none());
}

// ---------------------------------------------------------------------------
// Leaderboard totals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn leaderboard_excludes_temporaries_and_orders_by_points(pool: PgPool) {
    let item = new_item(&pool, 3).await;

    let temp = new_annotator(&pool, "fleeting_vole").await;
    submit(&pool, guess(temp, item, 2, 1000)).await;

    let low = new_annotator(&pool, "slowpoke").await;
    AnnotatorRepo::claim(&pool, low, "slowpoke", None).await.unwrap();
    submit(&pool, guess(low, item, 2, 10)).await;

    let high = new_annotator(&pool, "speedy").await;
    AnnotatorRepo::claim(&pool, high, "speedy", None).await.unwrap();
    submit(&pool, guess(high, item, 2, 90)).await;

    let rows = AnnotationRepo::leaderboard_totals(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].display_name, "speedy");
    assert_eq!(rows[0].points, 90);
    assert_eq!(rows[1].display_name, "slowpoke");
    assert!(rows.iter().all(|r| r.annotator_id != temp));
}

#[sqlx::test(migrations = "./migrations")]
async fn leaderboard_excludes_attention_check_points(pool: PgPool) {
    let item = new_item(&pool, 7).await;
    let annotator = new_annotator(&pool, "checked").await;
    AnnotatorRepo::claim(&pool, annotator, "checked", None).await.unwrap();

    let mut check = guess(annotator, item, 4, 500);
    check.attention_check = true;
    submit(&pool, check).await;

    let rows = AnnotationRepo::leaderboard_totals(&pool).await.unwrap();
    assert!(rows.is_empty());
}
