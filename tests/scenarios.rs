use std::collections::BTreeSet;

use mams::err::{CommandError, MamsError, ParseError};
use mams::logic::command::clash;
use mams::logic::parser::MamsParser;
use mams::logic::LogicManager;
use mams::model::appeal::{Appeal, AppealId, AppealResult, AppealType};
use mams::model::module::{Module, ModuleCode};
use mams::model::student::{Credits, MatricId, Name, PrevMods, Student};
use mams::model::tag::Tag;
use mams::model::{Mams, Model};
use mams::storage::JsonMamsStorage;
use tempfile::{tempdir, TempDir};

fn code(raw: &str) -> ModuleCode {
    ModuleCode::new(raw).unwrap()
}

fn student(name: &str, matric_id: &str, tags: &[&str], current: &[&str]) -> Student {
    Student::new(
        Name::new(name).unwrap(),
        Credits::new("20").unwrap(),
        PrevMods::new("CS1010").unwrap(),
        MatricId::new(matric_id).unwrap(),
        tags.iter().map(|t| Tag::new(*t).unwrap()).collect::<BTreeSet<_>>(),
    )
    .with_current_modules(current.iter().map(|c| code(c)).collect())
}

fn registry() -> Mams {
    let students = vec![
        student("Alice Pauline", "A0000001B", &["friends"], &["CS2103", "CS2101"]),
        student("Benson Meier", "A0000002C", &["friends", "owesMoney"], &["CS2103"]),
        student("Carl Kurz", "A0000003D", &[], &[]),
    ];
    let appeals = vec![
        Appeal::new(
            AppealId::new("C000001").unwrap(),
            AppealType::AddModule,
            MatricId::new("A0000002C").unwrap(),
            "2019/2020",
            20,
            "Needs one more module",
        )
        .with_module_to_add(code("CS2101")),
        Appeal::new(
            AppealId::new("C000002").unwrap(),
            AppealType::IncreaseWorkload,
            MatricId::new("A0000003D").unwrap(),
            "2019/2020",
            20,
            "Wants to graduate early",
        ),
    ];
    let modules = vec![
        Module::new(code("CS2103"), "Software Engineering", vec![1, 5]),
        Module::new(code("CS2101"), "Effective Communication", vec![5, 9]),
    ];
    Mams::from_parts(students, appeals, modules).unwrap()
}

fn session() -> (LogicManager, JsonMamsStorage, TempDir) {
    let dir = tempdir().unwrap();
    let storage = JsonMamsStorage::new(dir.path().join("mams.json"));
    let logic = LogicManager::new(
        Model::new(registry()),
        storage.clone(),
        MamsParser::default(),
    );
    (logic, storage, dir)
}

#[test]
fn test_edit_out_of_filtered_range() {
    let (mut logic, storage, _dir) = session();
    let feedback = logic.execute("find alice benson").unwrap().feedback_to_user;
    assert_eq!(feedback, "2 students listed!");
    let before = logic.model().mams().clone();

    let err = logic.execute("edit 3 n/Alice").unwrap_err();
    assert!(matches!(
        err,
        MamsError::Command(CommandError::InvalidStudentIndex)
    ));
    assert_eq!(logic.model().mams(), &before);
    assert_eq!(logic.model().filtered_students().count(), 2);
    assert!(storage.read_mams().unwrap().is_none());
}

#[test]
fn test_approve_with_remark() {
    let (mut logic, storage, _dir) = session();
    let feedback = logic
        .execute("approve 1 r/Over capacity")
        .unwrap()
        .feedback_to_user;

    let stored = &logic.model().mams().appeals()[0];
    assert_eq!(stored.result(), AppealResult::Approved);
    assert_eq!(stored.remark(), "Over capacity");
    assert_eq!(feedback, format!("Approved appeal: {}", stored));

    let saved = storage.read_mams().unwrap().unwrap();
    assert_eq!(&saved.appeals()[0], stored);
}

#[test]
fn test_approve_twice() {
    let (mut logic, _storage, _dir) = session();
    logic.execute("approve 1").unwrap();
    let after_first = logic.model().mams().appeals()[0].clone();

    let feedback = logic.execute("approve 1 r/again").unwrap().feedback_to_user;
    assert_eq!(feedback, "Appeal C000001 was approved already");
    assert_eq!(logic.model().mams().appeals()[0], after_first);
}

#[test]
fn test_clash_with_two_groups() {
    let (mut logic, _storage, _dir) = session();
    let before = logic.model().mams().clone();

    let err = logic.execute("clash mod/CS2103 s/1").unwrap_err();
    assert!(matches!(
        err,
        MamsError::Parse(ParseError::InvalidFormat { ref usage }) if usage == clash::USAGE
    ));
    assert_eq!(logic.model().mams(), &before);
}

#[test]
fn test_clash_reports() {
    let (mut logic, _storage, _dir) = session();
    assert_eq!(
        logic.execute("clash mod/cs2103 mod/CS2101").unwrap().feedback_to_user,
        "Clash detected between CS2103 and CS2101 at time slots: 5"
    );
    assert_eq!(
        logic.execute("clash s/1").unwrap().feedback_to_user,
        "Clashes for Alice Pauline (A0000001B):\nCS2103 and CS2101 at time slots: 5"
    );
    assert_eq!(
        logic.execute("clash a/1").unwrap().feedback_to_user,
        "Clashes for appeal C000001 adding CS2101:\nCS2101 and CS2103 at time slots: 5"
    );
}

#[test]
fn test_clear_tags_keeps_other_fields() {
    let (mut logic, _storage, _dir) = session();
    let original = logic.model().mams().students()[0].clone();

    logic.execute("edit 1 t/").unwrap();

    let edited = &logic.model().mams().students()[0];
    assert!(edited.tags().is_empty());
    assert_eq!(edited.name(), original.name());
    assert_eq!(edited.credits(), original.credits());
    assert_eq!(edited.prev_mods(), original.prev_mods());
    assert_eq!(edited.matric_id(), original.matric_id());
    assert_eq!(edited.current_modules(), original.current_modules());
}

#[test]
fn test_edit_without_fields() {
    let (mut logic, _storage, _dir) = session();
    assert!(matches!(
        logic.execute("edit 1"),
        Err(MamsError::Parse(ParseError::NotEdited))
    ));
}

#[test]
fn test_edit_into_duplicate() {
    let (mut logic, _storage, _dir) = session();
    let before = logic.model().mams().clone();
    assert!(matches!(
        logic.execute("edit 1 m/A0000002C"),
        Err(MamsError::Command(CommandError::DuplicateStudent))
    ));
    assert_eq!(logic.model().mams(), &before);
}

#[test]
fn test_reject_then_approve() {
    let (mut logic, _storage, _dir) = session();
    logic.execute("reject 2 r/Not eligible").unwrap();
    let feedback = logic.execute("approve 2").unwrap().feedback_to_user;
    assert_eq!(feedback, "Appeal C000002 was rejected already");
    assert_eq!(
        logic.model().mams().appeals()[1].result(),
        AppealResult::Rejected
    );
}

#[test]
fn test_session_survives_errors_and_exits() {
    let (mut logic, _storage, _dir) = session();
    assert!(logic.execute("nonsense").is_err());
    assert!(logic.execute("approve x").is_err());
    let result = logic.execute("exit").unwrap();
    assert!(result.exit);
}
