//! Concurrency tests against a file-backed database
//!
//! Several pooled connections race for the same email; the unique
//! constraint must let exactly one of them through.

mod common;

use assert_matches::assert_matches;
use tokio::task::JoinSet;

use common::TestDatabase;
use feedback_board::backend::auth::users::{create_user, get_user_by_email, UserError};
use feedback_board::backend::feedback::db::{create_feedback, list_feedbacks};
use feedback_board::shared::NewFeedback;

const RACERS: usize = 8;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signups_for_one_email() {
    let db = TestDatabase::new(RACERS as u32).await;

    let mut set = JoinSet::new();
    for i in 0..RACERS {
        let pool = db.pool().clone();
        set.spawn(async move {
            create_user(&pool, &format!("racer {}", i), "race@example.com", "hash").await
        });
    }

    let mut created = 0;
    let mut duplicates = 0;
    while let Some(joined) = set.join_next().await {
        match joined.expect("task panicked") {
            Ok(_) => created += 1,
            Err(e) => {
                assert_matches!(e, UserError::DuplicateEmail(ref email) if email == "race@example.com");
                duplicates += 1;
            }
        }
    }

    assert_eq!(created, 1);
    assert_eq!(duplicates, RACERS - 1);
    assert!(get_user_by_email(db.pool(), "race@example.com")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_feedback_submissions_all_land() {
    let db = TestDatabase::new(RACERS as u32).await;

    let mut set = JoinSet::new();
    for i in 0..RACERS {
        let pool = db.pool().clone();
        set.spawn(async move {
            create_feedback(&pool, &NewFeedback::new(format!("item {}", i), "Idea", "x")).await
        });
    }

    let mut ids = Vec::new();
    while let Some(joined) = set.join_next().await {
        ids.push(joined.expect("task panicked").expect("insert failed").id);
    }

    let listed = list_feedbacks(db.pool()).await.unwrap();
    assert_eq!(listed.len(), RACERS);
    for id in ids {
        assert!(listed.iter().any(|f| f.id == id));
    }
}
