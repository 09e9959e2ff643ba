use std::collections::BTreeMap;
use std::path::PathBuf;

use services::{QuizConfig, QuizRequest, SessionController};
use storage::repository::{InMemoryStore, Stores};
use tempfile::TempDir;
use trainer_core::model::{Interface, QuestionRecord, Router, SessionId, Topic, Topology};

fn build_record(question: &str, answer: &str) -> QuestionRecord {
    let mut options = BTreeMap::new();
    options.insert("A".to_string(), "first".to_string());
    options.insert("B".to_string(), "second".to_string());
    options.insert("C".to_string(), "third".to_string());
    QuestionRecord {
        question: question.to_string(),
        options,
        answer: answer.to_string(),
    }
}

fn build_bank(len: usize, answer: &str) -> Vec<QuestionRecord> {
    (0..len)
        .map(|i| build_record(&format!("Q{i}"), answer))
        .collect()
}

fn build_controller(
    store: InMemoryStore,
    num_questions: usize,
    output_dir: PathBuf,
) -> SessionController {
    let config = QuizConfig {
        num_questions,
        output_dir,
        ..QuizConfig::default()
    };
    SessionController::new(Stores::from_in_memory(store), config)
}

fn topic_request(topic: &str) -> QuizRequest {
    QuizRequest {
        topic: Some(topic.to_string()),
        ..QuizRequest::default()
    }
}

fn answer_request(answer: &str) -> QuizRequest {
    QuizRequest {
        answer: Some(answer.to_string()),
        ..QuizRequest::default()
    }
}

fn reset_request() -> QuizRequest {
    QuizRequest {
        reset: true,
        ..QuizRequest::default()
    }
}

fn build_lab_topology() -> Topology {
    let interface = |ip: &str| Interface {
        name: "GigabitEthernet0/0".to_string(),
        ip_address: ip.to_string(),
        subnet_mask: "255.255.255.252".to_string(),
    };
    Topology {
        routers: vec![
            Router {
                name: "R1".to_string(),
                interfaces: vec![interface("10.0.0.1")],
            },
            Router {
                name: "R2".to_string(),
                interfaces: vec![interface("10.0.0.2")],
            },
        ],
    }
}

#[test]
fn bare_command_greets_with_the_topic_list() {
    let controller = build_controller(InMemoryStore::new(), 10, PathBuf::from("unused"));
    let id = SessionId::new("t1").unwrap();

    let reply = controller.handle(&id, &QuizRequest::default());
    assert!(reply.starts_with("Welcome to the CCNP Trainer Quiz!"));
    assert!(reply.contains("- OSPF"));
    assert!(reply.contains("- REST APIs"));
    assert!(reply.ends_with("/quizme topic=\"<topic_name>\""));
}

#[test]
fn starting_a_quiz_shows_the_first_question() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(3, "A")).unwrap();
    let controller = build_controller(store, 3, PathBuf::from("unused"));
    let id = SessionId::new("t2").unwrap();

    let reply = controller.handle(&id, &topic_request("OSPF"));
    assert!(reply.starts_with("Question 1: Q"));
    assert!(reply.contains("  A: first"));
    assert!(reply.contains("  C: third"));
}

#[test]
fn topic_names_resolve_case_insensitively() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(3, "A")).unwrap();
    let controller = build_controller(store, 3, PathBuf::from("unused"));
    let id = SessionId::new("t3").unwrap();

    let reply = controller.handle(&id, &topic_request("ospf"));
    assert!(reply.starts_with("Question 1: "));
}

#[test]
fn perfect_run_reports_one_hundred_percent() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(3, "A")).unwrap();
    let controller = build_controller(store, 3, PathBuf::from("unused"));
    let id = SessionId::new("t4").unwrap();

    controller.handle(&id, &topic_request("OSPF"));
    let first = controller.handle(&id, &answer_request("A"));
    assert!(first.starts_with("Correct!\n\nQuestion 2: "));

    controller.handle(&id, &answer_request("a"));
    let last = controller.handle(&id, &answer_request("A"));
    assert_eq!(
        last,
        "Correct!\n\nYou scored 100.00%. You answered 3 out of 3 questions correctly."
    );
}

#[test]
fn failed_run_names_the_correct_letter_each_time() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(3, "C")).unwrap();
    let controller = build_controller(store, 3, PathBuf::from("unused"));
    let id = SessionId::new("t5").unwrap();

    controller.handle(&id, &topic_request("OSPF"));
    let first = controller.handle(&id, &answer_request("A"));
    assert!(first.starts_with("Wrong! The correct answer is C.\n\nQuestion 2: "));

    controller.handle(&id, &answer_request("B"));
    let last = controller.handle(&id, &answer_request("A"));
    assert_eq!(
        last,
        "Wrong! The correct answer is C.\n\nYou scored 0.00%. You answered 0 out of 3 questions correctly."
    );
}

#[test]
fn five_misses_generate_remediation_configs() {
    let output = TempDir::new().unwrap();
    let output_dir = output.path().join("gns3_configs");

    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(6, "A")).unwrap();
    store.put_topology(build_lab_topology()).unwrap();
    let controller = build_controller(store, 6, output_dir.clone());
    let id = SessionId::new("t6").unwrap();

    // one correct, then five wrong: exactly at the threshold
    controller.handle(&id, &topic_request("OSPF"));
    controller.handle(&id, &answer_request("A"));
    let mut last = String::new();
    for _ in 0..5 {
        last = controller.handle(&id, &answer_request("B"));
    }

    assert!(last.contains("You scored 16.67%. You answered 1 out of 6 questions correctly."));
    assert!(last.contains("GNS3 configuration files have been generated in the '"));

    let r1 = std::fs::read_to_string(output_dir.join("R1_config.txt")).unwrap();
    let r2 = std::fs::read_to_string(output_dir.join("R2_config.txt")).unwrap();
    assert!(r1.contains("hostname R1"));
    assert!(r1.contains("router-id 1.1.1.1"));
    assert!(r2.contains("router-id 2.2.2.2"));
}

#[test]
fn four_misses_stay_below_the_remediation_threshold() {
    let output = TempDir::new().unwrap();
    let output_dir = output.path().join("gns3_configs");

    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(4, "A")).unwrap();
    store.put_topology(build_lab_topology()).unwrap();
    let controller = build_controller(store, 4, output_dir.clone());
    let id = SessionId::new("t7").unwrap();

    controller.handle(&id, &topic_request("OSPF"));
    controller.handle(&id, &answer_request("B"));
    controller.handle(&id, &answer_request("B"));
    controller.handle(&id, &answer_request("B"));
    let last = controller.handle(&id, &answer_request("B"));

    assert_eq!(
        last,
        "Wrong! The correct answer is A.\n\nYou scored 0.00%. You answered 0 out of 4 questions correctly."
    );
    assert!(!output_dir.exists());
}

#[test]
fn non_ospf_failures_decline_remediation_in_text() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Bgp, build_bank(5, "A")).unwrap();
    let controller = build_controller(store, 5, PathBuf::from("unused"));
    let id = SessionId::new("t8").unwrap();

    controller.handle(&id, &topic_request("BGP"));
    let mut last = String::new();
    for _ in 0..5 {
        last = controller.handle(&id, &answer_request("B"));
    }

    assert!(last.contains("You scored 0.00%. You answered 0 out of 5 questions correctly."));
    assert!(
        last.contains("GNS3 configuration generation is only supported for OSPF at the moment.")
    );
}

#[test]
fn short_bank_rejects_the_start_and_keeps_the_slot_empty() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(2, "A")).unwrap();
    let controller = build_controller(store, 10, PathBuf::from("unused"));
    let id = SessionId::new("t9").unwrap();

    let reply = controller.handle(&id, &topic_request("OSPF"));
    assert_eq!(
        reply,
        "Not enough questions for topic 'OSPF'. Only 2 available. Please add more questions to the question bank."
    );

    let follow_up = controller.handle(&id, &QuizRequest::default());
    assert!(follow_up.starts_with("Welcome"));
}

#[test]
fn unknown_topic_is_reported_like_a_missing_bank() {
    let controller = build_controller(InMemoryStore::new(), 10, PathBuf::from("unused"));
    let id = SessionId::new("t10").unwrap();

    let reply = controller.handle(&id, &topic_request("SONET"));
    assert_eq!(
        reply,
        "Topic 'SONET' not found in the question bank. Please add questions to the question bank first."
    );

    // a known topic with no bank file reads the same way
    let reply = controller.handle(&id, &topic_request("BGP"));
    assert_eq!(
        reply,
        "Topic 'BGP' not found in the question bank. Please add questions to the question bank first."
    );
}

#[test]
fn status_requests_re_render_without_advancing() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(3, "A")).unwrap();
    let controller = build_controller(store, 3, PathBuf::from("unused"));
    let id = SessionId::new("t11").unwrap();

    let shown = controller.handle(&id, &topic_request("OSPF"));
    let again = controller.handle(&id, &QuizRequest::default());
    let once_more = controller.handle(&id, &QuizRequest::default());

    assert_eq!(shown, again);
    assert_eq!(again, once_more);

    // a stray topic while running is ignored too
    let with_topic = controller.handle(&id, &topic_request("BGP"));
    assert_eq!(with_topic, shown);
}

#[test]
fn empty_topic_value_still_greets() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(3, "A")).unwrap();
    let controller = build_controller(store, 3, PathBuf::from("unused"));
    let id = SessionId::new("t14").unwrap();

    // topic= with no value reads as no topic at all
    let reply = controller.handle(&id, &topic_request(""));
    assert!(reply.starts_with("Welcome to the CCNP Trainer Quiz!"));

    let started = controller.handle(&id, &topic_request("OSPF"));
    assert!(started.starts_with("Question 1: "));
}

#[test]
fn empty_answer_value_re_renders_without_grading() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(3, "A")).unwrap();
    let controller = build_controller(store, 3, PathBuf::from("unused"));
    let id = SessionId::new("t15").unwrap();

    let shown = controller.handle(&id, &topic_request("OSPF"));
    let again = controller.handle(&id, &answer_request(""));
    assert_eq!(again, shown);

    // the question is still live and grades normally
    let graded = controller.handle(&id, &answer_request("A"));
    assert!(graded.starts_with("Correct!\n\nQuestion 2: "));
}

#[test]
fn completed_sessions_reject_everything_until_reset() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(1, "A")).unwrap();
    let controller = build_controller(store, 1, PathBuf::from("unused"));
    let id = SessionId::new("t12").unwrap();

    controller.handle(&id, &topic_request("OSPF"));
    controller.handle(&id, &answer_request("A"));

    let invalid =
        "Invalid state. Please start a quiz with /quizme topic=\"<topic_name>\" or provide an answer to the current question.";
    assert_eq!(controller.handle(&id, &QuizRequest::default()), invalid);
    assert_eq!(controller.handle(&id, &topic_request("OSPF")), invalid);
    assert_eq!(controller.handle(&id, &answer_request("A")), invalid);

    let reset = controller.handle(&id, &reset_request());
    assert_eq!(
        reset,
        "Quiz session reset. Start a new quiz with /quizme topic=\"<topic_name>\"."
    );

    let fresh = controller.handle(&id, &topic_request("OSPF"));
    assert!(fresh.starts_with("Question 1: "));
}

#[test]
fn sessions_are_independent_per_id() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(2, "A")).unwrap();
    let controller = build_controller(store, 2, PathBuf::from("unused"));
    let alice = SessionId::new("alice").unwrap();
    let bob = SessionId::new("bob").unwrap();

    controller.handle(&alice, &topic_request("OSPF"));
    controller.handle(&alice, &answer_request("A"));

    // bob has no session yet
    let greeting = controller.handle(&bob, &QuizRequest::default());
    assert!(greeting.starts_with("Welcome"));

    // and alice is still waiting on the second question
    let position = controller.handle(&alice, &QuizRequest::default());
    assert!(position.starts_with("Question 2: "));
}

#[test]
fn embedder_queries_report_position_and_score() {
    let store = InMemoryStore::new();
    store.put_bank(Topic::Ospf, build_bank(2, "A")).unwrap();
    let controller = build_controller(store, 2, PathBuf::from("unused"));
    let id = SessionId::new("t13").unwrap();

    let err = controller.current_question(&id).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No active quiz. Please start a quiz first with /quizme topic=<topic_name>"
    );

    controller.handle(&id, &topic_request("OSPF"));
    let question = controller.current_question(&id).unwrap();
    assert!(question.starts_with("Question 1: "));

    let report = controller.report(&id).unwrap();
    assert_eq!(
        report,
        "You scored 0.00%. You answered 0 out of 2 questions correctly."
    );
}
