use crate::{NewProject, Project, ProjectPatch};

use chrono::Utc;

fn draft(created_by: Option<&str>) -> NewProject {
    NewProject {
        title: "Website".to_string(),
        description: "Relaunch".to_string(),
        due_date: None,
        created_by: created_by.map(str::to_string),
    }
}

#[test]
fn test_project_new_keeps_explicit_creator() {
    let project = Project::new(draft(Some("Ada")), "fallback");

    assert_eq!(project.created_by, "Ada");
    assert_eq!(project.title, "Website");
}

#[test]
fn test_project_new_uses_fallback_creator() {
    let project = Project::new(draft(None), "Grace");

    assert_eq!(project.created_by, "Grace");
}

#[test]
fn test_project_patch_apply() {
    let mut project = Project::new(draft(None), "Grace");
    let due = Utc::now();

    ProjectPatch {
        title: Some("Intranet".to_string()),
        due_date: Some(Some(due)),
        ..Default::default()
    }
    .apply(&mut project);

    assert_eq!(project.title, "Intranet");
    assert_eq!(project.description, "Relaunch");
    assert_eq!(project.due_date, Some(due));
}
