mod test_mocks;

use chrono::{Duration, TimeZone, Utc};
use test_mocks::*;
use uuid::Uuid;

use techradar_backend::entities::skill_level::TechSkillLevel;
use techradar_backend::entities::tech_skill::SkillHistoryPoint;
use techradar_backend::entities::technology::Technology;
use techradar_backend::errors::AppError;
use techradar_backend::use_cases::stats::{nearest_level, StatsHandler};

fn level(name: &str, weight: f64) -> TechSkillLevel {
    TechSkillLevel {
        id: Uuid::new_v4(),
        name: name.to_string(),
        weight,
        active: true,
    }
}

fn catalog_with_technology(id: Uuid, name: &str) -> MockCatalogRepo {
    let name = name.to_string();
    let mut repo = MockCatalogRepo::new();
    repo.expect_get_technology().returning(move |requested| {
        if *requested == id {
            Ok(Some(Technology {
                id,
                name: name.clone(),
                description: None,
                category_ids: vec![],
                active: true,
            }))
        } else {
            Ok(None)
        }
    });
    repo
}

#[test]
fn nearest_level_picks_the_closest_weight() {
    let levels = vec![level("basic", 10.0), level("medium", 50.0), level("advanced", 100.0)];

    assert_eq!(nearest_level(&levels, 45.0).unwrap().name, "medium");
    assert_eq!(nearest_level(&levels, 90.0).unwrap().name, "advanced");
    assert_eq!(nearest_level(&levels, 0.0).unwrap().name, "basic");
}

#[test]
fn equidistant_weights_resolve_to_the_higher_level() {
    let levels = vec![level("basic", 10.0), level("medium", 50.0)];

    assert_eq!(nearest_level(&levels, 30.0).unwrap().name, "medium");
}

#[test]
fn nearest_level_of_nothing_is_none() {
    assert!(nearest_level(&[], 50.0).is_none());
}

#[actix_rt::test]
async fn percentage_counts_distinct_skilled_professionals() {
    let react = Uuid::new_v4();

    let mut skill_repo = MockSkillRepo::new();
    skill_repo
        .expect_distinct_skilled_professionals()
        .returning(|_| Ok(3));

    let mut professional_repo = MockProfessionalRepo::new();
    professional_repo.expect_count_active().returning(|| Ok(4));

    let handler = StatsHandler::new(
        skill_repo,
        professional_repo,
        catalog_with_technology(react, "ReactJS"),
    );

    let stats = handler.technology_percentage(&react).await.unwrap();

    assert_eq!(stats.total_professionals, 4);
    assert_eq!(stats.skilled_professionals, 3);
    assert_eq!(stats.skill_percentage, 75.0);
}

#[actix_rt::test]
async fn percentage_with_no_active_professionals_is_zero() {
    let react = Uuid::new_v4();

    let mut skill_repo = MockSkillRepo::new();
    skill_repo
        .expect_distinct_skilled_professionals()
        .returning(|_| Ok(0));

    let mut professional_repo = MockProfessionalRepo::new();
    professional_repo.expect_count_active().returning(|| Ok(0));

    let handler = StatsHandler::new(
        skill_repo,
        professional_repo,
        catalog_with_technology(react, "ReactJS"),
    );

    let stats = handler.technology_percentage(&react).await.unwrap();

    assert_eq!(stats.skill_percentage, 0.0);
    assert!(!stats.skill_percentage.is_nan());
}

#[actix_rt::test]
async fn percentage_for_unknown_technology_is_not_found() {
    let handler = StatsHandler::new(
        MockSkillRepo::new(),
        MockProfessionalRepo::new(),
        catalog_with_technology(Uuid::new_v4(), "ReactJS"),
    );

    let result = handler.technology_percentage(&Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn level_averages_current_weights_and_names_the_nearest_level() {
    let react = Uuid::new_v4();

    let mut skill_repo = MockSkillRepo::new();
    skill_repo
        .expect_current_weights_for_technology()
        .returning(|_| Ok(vec![10.0, 50.0, 100.0]));

    let mut catalog_repo = catalog_with_technology(react, "ReactJS");
    catalog_repo.expect_list_skill_levels().returning(|| {
        Ok(vec![
            level("basic", 10.0),
            level("medium", 50.0),
            level("advanced", 100.0),
        ])
    });

    let handler = StatsHandler::new(skill_repo, MockProfessionalRepo::new(), catalog_repo);

    let stats = handler.technology_level(&react).await.unwrap();

    assert_eq!(stats.weight, 160.0 / 3.0);
    assert_eq!(stats.name, "medium");
    assert_eq!(stats.max_weight, 100.0);
}

#[actix_rt::test]
async fn level_with_no_skills_falls_back_to_weight_zero() {
    let react = Uuid::new_v4();

    let mut skill_repo = MockSkillRepo::new();
    skill_repo
        .expect_current_weights_for_technology()
        .returning(|_| Ok(vec![]));

    let mut catalog_repo = catalog_with_technology(react, "ReactJS");
    catalog_repo
        .expect_list_skill_levels()
        .returning(|| Ok(vec![level("basic", 10.0), level("advanced", 100.0)]));

    let handler = StatsHandler::new(skill_repo, MockProfessionalRepo::new(), catalog_repo);

    let stats = handler.technology_level(&react).await.unwrap();

    assert_eq!(stats.weight, 0.0);
    assert_eq!(stats.name, "basic");
}

#[actix_rt::test]
async fn level_without_configured_levels_is_not_found() {
    let react = Uuid::new_v4();

    let mut skill_repo = MockSkillRepo::new();
    skill_repo
        .expect_current_weights_for_technology()
        .returning(|_| Ok(vec![50.0]));

    let mut catalog_repo = catalog_with_technology(react, "ReactJS");
    catalog_repo.expect_list_skill_levels().returning(|| Ok(vec![]));

    let handler = StatsHandler::new(skill_repo, MockProfessionalRepo::new(), catalog_repo);

    let result = handler.technology_level(&react).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn trend_charts_the_full_history_in_order() {
    let react = Uuid::new_v4();
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let mut skill_repo = MockSkillRepo::new();
    skill_repo
        .expect_history_for_technology()
        .returning(move |_| {
            Ok(vec![
                SkillHistoryPoint {
                    creation_date_time: start,
                    level_weight: 10.0,
                },
                SkillHistoryPoint {
                    creation_date_time: start + Duration::days(30),
                    level_weight: 50.0,
                },
                SkillHistoryPoint {
                    creation_date_time: start + Duration::days(60),
                    level_weight: 100.0,
                },
            ])
        });

    let handler = StatsHandler::new(
        skill_repo,
        MockProfessionalRepo::new(),
        catalog_with_technology(react, "ReactJS"),
    );

    let chart = handler.technology_trend(&react).await.unwrap();

    assert_eq!(chart.datasets.len(), 1);
    let series = &chart.datasets[0];
    assert_eq!(series.label, "ReactJS");
    assert!(!series.fill);
    assert_eq!(series.data.len(), 3);
    assert_eq!(series.data[0].x, start);
    let weights: Vec<f64> = series.data.iter().map(|point| point.y).collect();
    assert_eq!(weights, vec![10.0, 50.0, 100.0]);
}

#[actix_rt::test]
async fn trend_for_unknown_technology_is_not_found() {
    let handler = StatsHandler::new(
        MockSkillRepo::new(),
        MockProfessionalRepo::new(),
        catalog_with_technology(Uuid::new_v4(), "ReactJS"),
    );

    let result = handler.technology_trend(&Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
