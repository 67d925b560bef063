mod test_mocks;

use test_mocks::*;
use uuid::Uuid;

use techradar_backend::entities::professional::Professional;
use techradar_backend::entities::tech_skill::NewTechSkill;
use techradar_backend::errors::AppError;
use techradar_backend::repositories::tech_skill::TechSkillRepository;
use techradar_backend::use_cases::skill::SkillHandler;

fn professional_repo_with(id: Uuid) -> MockProfessionalRepo {
    let mut repo = MockProfessionalRepo::new();
    repo.expect_get_professional()
        .returning(move |requested| {
            if *requested == id {
                Ok(Some(Professional {
                    id,
                    user_id: Uuid::new_v4(),
                    active: true,
                }))
            } else {
                Ok(None)
            }
        });
    repo
}

fn new_skill(technology_id: Uuid) -> NewTechSkill {
    NewTechSkill {
        technology_id,
        level_id: Uuid::new_v4(),
    }
}

#[actix_rt::test]
async fn edit_supersedes_instead_of_mutating() {
    let professional = Uuid::new_v4();
    let react = Uuid::new_v4();
    let advanced = Uuid::new_v4();

    let store = FakeSkillStore::new();
    store
        .insert_skills(&professional, &[new_skill(react)])
        .await
        .unwrap();
    let first = store.rows().pop().unwrap();

    let handler = SkillHandler::new(store, professional_repo_with(professional));

    let replacement = handler.edit_skill(&first.id, &advanced).await.unwrap();

    assert_ne!(replacement.id, first.id);
    assert_eq!(replacement.level_id, advanced);
    assert!(replacement.current);

    let rows = handler.skill_repo.rows();
    assert_eq!(rows.len(), 2);

    let old = rows.iter().find(|row| row.id == first.id).unwrap();
    assert!(!old.current);
    assert_eq!(old.level_id, first.level_id);
}

#[actix_rt::test]
async fn at_most_one_current_row_per_professional_and_technology() {
    let professional = Uuid::new_v4();
    let react = Uuid::new_v4();

    let store = FakeSkillStore::new();
    store
        .insert_skills(&professional, &[new_skill(react)])
        .await
        .unwrap();
    let first = store.rows().pop().unwrap();

    let handler = SkillHandler::new(store, professional_repo_with(professional));

    let second = handler.edit_skill(&first.id, &Uuid::new_v4()).await.unwrap();
    handler.edit_skill(&second.id, &Uuid::new_v4()).await.unwrap();

    let current = handler.skill_repo.current_rows_for(professional, react);
    assert_eq!(current.len(), 1);
    assert_eq!(handler.skill_repo.rows().len(), 3);
}

#[actix_rt::test]
async fn editing_a_superseded_row_is_not_found() {
    let professional = Uuid::new_v4();
    let react = Uuid::new_v4();

    let store = FakeSkillStore::new();
    store
        .insert_skills(&professional, &[new_skill(react)])
        .await
        .unwrap();
    let first = store.rows().pop().unwrap();

    let handler = SkillHandler::new(store, professional_repo_with(professional));
    handler.edit_skill(&first.id, &Uuid::new_v4()).await.unwrap();

    let result = handler.edit_skill(&first.id, &Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn remove_keeps_the_row_as_history() {
    let professional = Uuid::new_v4();
    let react = Uuid::new_v4();

    let store = FakeSkillStore::new();
    store
        .insert_skills(&professional, &[new_skill(react)])
        .await
        .unwrap();
    let skill = store.rows().pop().unwrap();

    let handler = SkillHandler::new(store, professional_repo_with(professional));
    handler.remove_skill(&skill.id).await.unwrap();

    let rows = handler.skill_repo.rows();
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].current);
    assert!(handler
        .skill_repo
        .current_rows_for(professional, react)
        .is_empty());
}

#[actix_rt::test]
async fn add_skills_skips_technologies_already_held() {
    let professional = Uuid::new_v4();
    let react = Uuid::new_v4();
    let angular = Uuid::new_v4();

    let store = FakeSkillStore::new();
    store
        .insert_skills(&professional, &[new_skill(react)])
        .await
        .unwrap();

    let handler = SkillHandler::new(store, professional_repo_with(professional));

    let inserted = handler
        .add_skills(&professional, vec![new_skill(react), new_skill(angular)])
        .await
        .unwrap();

    assert_eq!(inserted, 1);
    assert_eq!(handler.skill_repo.rows().len(), 2);
    assert_eq!(
        handler.skill_repo.current_rows_for(professional, react).len(),
        1
    );
    assert_eq!(
        handler
            .skill_repo
            .current_rows_for(professional, angular)
            .len(),
        1
    );
}

#[actix_rt::test]
async fn add_skills_for_unknown_professional_is_not_found() {
    let known = Uuid::new_v4();
    let handler = SkillHandler::new(FakeSkillStore::new(), professional_repo_with(known));

    let result = handler
        .add_skills(&Uuid::new_v4(), vec![new_skill(Uuid::new_v4())])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(handler.skill_repo.rows().is_empty());
}
