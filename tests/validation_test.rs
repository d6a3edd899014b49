use chrono::NaiveDate;
use uuid::Uuid;

use clubhouse_backend::error::AppError;
use clubhouse_backend::league::validation::ClubValidator;
use clubhouse_backend::models::attendance::AttendanceStatus;
use clubhouse_backend::models::voting::RatingEntry;

#[test]
fn test_validate_fixture_teams() {
    let validator = ClubValidator::new();

    let (t1, t2) = validator.validate_fixture_teams("  Gagamoto ", "Los Pumas").unwrap();
    assert_eq!(t1, "Gagamoto");
    assert_eq!(t2, "Los Pumas");

    assert!(validator.validate_fixture_teams("", "Los Pumas").is_err());
    assert!(validator.validate_fixture_teams("Gagamoto", "gagamoto").is_err());
    assert!(validator.validate_fixture_teams(&"a".repeat(101), "Los Pumas").is_err());
}

#[test]
fn test_validate_game_scores() {
    let validator = ClubValidator::new();

    assert!(validator.validate_game_scores(0, 0).is_ok());
    assert!(validator.validate_game_scores(99, 3).is_ok());
    assert!(validator.validate_game_scores(-1, 0).is_err());
    assert!(validator.validate_game_scores(0, 100).is_err());
}

#[test]
fn test_validate_attendance() {
    let validator = ClubValidator::new();

    assert_eq!(validator.validate_attendance(AttendanceStatus::Yes, Some("ignored")).unwrap(), None);
    assert_eq!(
        validator.validate_attendance(AttendanceStatus::No, Some("  work trip ")).unwrap(),
        Some("work trip".to_string())
    );
    assert!(matches!(
        validator.validate_attendance(AttendanceStatus::No, Some("   ")),
        Err(AppError::Validation(_))
    ));
    assert!(validator.validate_attendance(AttendanceStatus::No, None).is_err());
}

#[test]
fn test_validate_ratings() {
    let validator = ClubValidator::new();
    let me = Uuid::new_v4();
    let teammate = Uuid::new_v4();
    let entry = |id: Uuid, score: i32| RatingEntry { rated_player_id: id, score };

    assert!(validator.validate_ratings(Some(me), &[entry(teammate, 8)]).is_ok());
    assert!(validator.validate_ratings(Some(me), &[]).is_err());
    assert!(validator.validate_ratings(Some(me), &[entry(me, 10)]).is_err());
    assert!(validator.validate_ratings(None, &[entry(teammate, 0)]).is_err());
    assert!(validator.validate_ratings(None, &[entry(teammate, 11)]).is_err());
    assert!(validator
        .validate_ratings(None, &[entry(teammate, 5), entry(teammate, 6)])
        .is_err());
}

#[test]
fn test_validate_goal_side_and_minute() {
    let validator = ClubValidator::new();

    assert_eq!(validator.validate_goal_side(None, "Gagamoto", "Los Pumas").unwrap(), None);
    assert_eq!(
        validator.validate_goal_side(Some("Los Pumas"), "Gagamoto", "Los Pumas").unwrap(),
        Some("Los Pumas".to_string())
    );
    assert!(validator.validate_goal_side(Some("Boca Chica"), "Gagamoto", "Los Pumas").is_err());

    assert!(validator.validate_minute(Some(90)).is_ok());
    assert!(validator.validate_minute(Some(-1)).is_err());
    assert!(validator.validate_minute(Some(131)).is_err());
}

#[test]
fn test_validate_tournament() {
    let validator = ClubValidator::new();
    let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

    assert_eq!(validator.validate_tournament(" Apertura ", start, end).unwrap(), "Apertura");
    assert!(validator.validate_tournament("Apertura", end, start).is_err());
    assert!(validator.validate_tournament("  ", start, end).is_err());
}

#[test]
fn test_validate_player() {
    let validator = ClubValidator::new();

    assert!(validator.validate_player_name("Juan", "Perez").is_ok());
    assert!(validator.validate_player_name("Juan", " ").is_err());
    assert!(validator.validate_shirt_number(Some(10)).is_ok());
    assert!(validator.validate_shirt_number(None).is_ok());
    assert!(validator.validate_shirt_number(Some(0)).is_err());
}
