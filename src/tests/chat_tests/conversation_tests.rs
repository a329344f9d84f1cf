// ConversationLog Tests - newest-first append with structural sharing

use crate::chat::{ConversationLog, Message, MessageId, SenderId};
use crate::Error;
use chrono::{Duration, TimeZone, Utc};

fn msg(id: &str, text: &str) -> Message {
    Message::new(
        MessageId::new(id),
        text,
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        SenderId::new("1"),
    )
}

fn ids(log: &ConversationLog) -> Vec<String> {
    log.iter().map(|m| m.id().to_string()).collect()
}

#[test]
fn test_new_log_is_empty() {
    let log = ConversationLog::new();

    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert!(log.first().is_none());
    assert_eq!(log.iter().count(), 0);
}

#[test]
fn test_append_places_batch_ahead_of_existing() {
    let log = ConversationLog::with_initial(vec![msg("old1", "a"), msg("old2", "b")]);
    let log = log.append(vec![msg("new1", "c"), msg("new2", "d"), msg("new3", "e")]);

    assert_eq!(log.len(), 5);
    assert_eq!(ids(&log), vec!["new1", "new2", "new3", "old1", "old2"]);
}

#[test]
fn test_append_length_and_prefix_for_various_sizes() {
    for existing in 0..5 {
        for batch_size in 0..5 {
            let start = ConversationLog::with_initial(
                (0..existing).map(|i| msg(&format!("e{}", i), "x")),
            );
            let batch: Vec<Message> = (0..batch_size).map(|i| msg(&format!("b{}", i), "y")).collect();

            let result = start.append(batch.clone());

            assert_eq!(result.len(), existing + batch_size);
            let prefix: Vec<Message> = result.iter().take(batch_size).cloned().collect();
            assert_eq!(prefix, batch, "batch must lead in its original order");
        }
    }
}

#[test]
fn test_append_leaves_previous_snapshot_untouched() {
    let before = ConversationLog::with_initial(vec![msg("greeting", "Hello!")]);
    let snapshot = before.clone();

    let after = before.append(vec![msg("m1", "hi")]);

    assert_eq!(before.len(), 1);
    assert_eq!(before, snapshot);
    assert_eq!(ids(&before), vec!["greeting"]);
    assert_eq!(ids(&after), vec!["m1", "greeting"]);
}

#[test]
fn test_branching_appends_share_history() {
    let base = ConversationLog::with_initial(vec![msg("base", "x")]);
    let left = base.append(vec![msg("left", "l")]);
    let right = base.append(vec![msg("right", "r")]);

    assert_eq!(ids(&left), vec!["left", "base"]);
    assert_eq!(ids(&right), vec!["right", "base"]);
    assert_eq!(ids(&base), vec!["base"]);
}

#[test]
fn test_append_empty_batch_is_identity() {
    let log = ConversationLog::with_initial(vec![msg("a", "x")]);
    let same = log.append(Vec::new());

    assert_eq!(same, log);
    assert_eq!(same.len(), 1);
}

#[test]
fn test_append_ignores_timestamps() {
    let newer = Message::new(MessageId::new("newer"), "later", Utc::now(), SenderId::new("2"));
    let older = Message::new(
        MessageId::new("older"),
        "earlier",
        Utc::now() - Duration::hours(1),
        SenderId::new("1"),
    );

    // Appended after, so it leads even though its timestamp is earlier
    let log = ConversationLog::new().append(vec![newer]).append(vec![older]);

    assert_eq!(ids(&log), vec!["older", "newer"]);
}

#[test]
fn test_append_does_not_deduplicate() {
    let log = ConversationLog::new()
        .append(vec![msg("same", "one")])
        .append(vec![msg("same", "two")]);

    assert_eq!(log.len(), 2);
}

#[test]
fn test_sequential_single_appends_follow_event_order() {
    let mut log = ConversationLog::new();
    for i in 0..4 {
        log = log.append(vec![msg(&format!("m{}", i), "x")]);
    }

    assert_eq!(ids(&log), vec!["m3", "m2", "m1", "m0"]);
    assert_eq!(log.first().unwrap().id().as_str(), "m3");
}

#[test]
fn test_get_walks_across_batches() {
    let log = ConversationLog::new()
        .append(vec![msg("a", "x"), msg("b", "x")])
        .append(vec![msg("c", "x")])
        .append(vec![msg("d", "x"), msg("e", "x"), msg("f", "x")]);

    let expected = ["d", "e", "f", "c", "a", "b"];
    for (i, id) in expected.iter().enumerate() {
        assert_eq!(log.get(i).unwrap().id().as_str(), *id);
    }
    assert!(log.get(6).is_none());
}

#[test]
fn test_iter_reports_exact_size() {
    let log = ConversationLog::new()
        .append(vec![msg("a", "x")])
        .append(vec![msg("b", "x"), msg("c", "x")]);

    let mut iter = log.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
}

#[test]
fn test_contains_id() {
    let log = ConversationLog::with_initial(vec![msg("present", "x")]);

    assert!(log.contains_id(&MessageId::new("present")));
    assert!(!log.contains_id(&MessageId::new("absent")));
}

#[test]
fn test_append_checked_accepts_unique_ids() {
    let log = ConversationLog::with_initial(vec![msg("a", "x")]);
    let log = log.append_checked(vec![msg("b", "y")]).expect("unique ids should append");

    assert_eq!(ids(&log), vec!["b", "a"]);
}

#[test]
fn test_append_checked_rejects_existing_id() {
    let log = ConversationLog::with_initial(vec![msg("a", "x")]);

    let result = log.append_checked(vec![msg("b", "y"), msg("a", "z")]);

    match result {
        Err(Error::DuplicateId(id)) => assert_eq!(id, "a"),
        other => panic!("Expected DuplicateId, got {:?}", other),
    }
    assert_eq!(log.len(), 1, "log must be unchanged after a rejected append");
}

#[test]
fn test_append_checked_rejects_repeat_within_batch() {
    let log = ConversationLog::new();

    let result = log.append_checked(vec![msg("dup", "1"), msg("dup", "2")]);

    assert!(matches!(result, Err(Error::DuplicateId(id)) if id == "dup"));
}

#[test]
fn test_long_log_drops_without_overflow() {
    let mut log = ConversationLog::new();
    for i in 0..200_000 {
        log = log.append(vec![msg(&i.to_string(), "x")]);
    }
    assert_eq!(log.len(), 200_000);
    drop(log);
}
