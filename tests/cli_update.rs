mod common;

use common::*;

fn installed_env() -> TestEnv {
    let env = TestEnv::new();
    let result = env.run(&["install", "--no-interactive"]);
    assert!(result.is_success(), "{}", result.combined_output());
    env
}

#[test]
fn update_before_install_fails() {
    let env = TestEnv::new();
    let result = env.run(&["update"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("not found"), "{}", result.stderr);
    assert!(result.stderr.contains("skills install"), "{}", result.stderr);
    assert_not_installed!(env, ".agent");
}

#[test]
fn untouched_install_is_up_to_date() {
    let env = installed_env();
    let result = env.run(&["update"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_output_contains!(result, "Already Up To Date");
    assert_output_contains!(result, "3 unchanged");
    assert!(!result.stderr.contains("Apply these changes"));
}

#[test]
fn changes_are_shown_and_declined_without_an_answer() {
    let env = installed_env();
    env.write_factory_file("tech-lead/SKILL.md", "# Tech Lead\n\nReview nothing.\n");

    let result = env.run(&["update"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("tech-lead (1 file changed)"), "{}", result.stdout);
    assert!(result.stdout.contains("SKILL.md"));
    assert!(result.stdout.contains("tech-lead skipped"), "{}", result.stdout);
    assert!(result.stderr.contains("Apply these changes to 'tech-lead'? [y/n]"));
    assert_eq!(
        env.read_project_file(".agent/skills/tech-lead/SKILL.md"),
        TECH_LEAD
    );
    assert_output_contains!(result, "1 declined");
}

#[test]
fn yes_applies_every_change() {
    let env = installed_env();
    env.write_factory_file("tech-lead/SKILL.md", "# Tech Lead\n\nReview nothing.\n");
    env.write_factory_file("product-manager/notes.md", "See _standards/GIT.md\n");
    env.write_factory_file("_standards/TDD.md", "# Test First\n");

    let result = env.run(&["update", "--yes"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(
        env.read_project_file(".agent/skills/tech-lead/SKILL.md"),
        "# Tech Lead\n\nReview nothing.\n"
    );
    assert_eq!(
        env.read_project_file(".agent/skills/product-manager/notes.md"),
        "See .agent/rules/git.md\n"
    );
    assert_installed!(env, ".agent/rules/tdd.md");
    assert_output_contains!(result, "2 updated");
    assert_output_contains!(result, "3 rules refreshed");
}

#[test]
fn local_only_skills_are_left_alone() {
    let env = installed_env();
    env.write_project_file(".agent/skills/custom/SKILL.md", "# Mine\n");

    let result = env.run(&["update", "--yes"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.read_project_file(".agent/skills/custom/SKILL.md"), "# Mine\n");
    assert_output_contains!(result, "1 local only");
}

#[test]
fn force_overwrites_local_edits_without_asking() {
    let env = installed_env();
    env.write_project_file(".agent/skills/tech-lead/SKILL.md", "# Local edit\n");

    let result = env.run(&["update", "--force"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(!result.stderr.contains("Apply these changes"));
    assert_eq!(
        env.read_project_file(".agent/skills/tech-lead/SKILL.md"),
        TECH_LEAD
    );
    assert_output_contains!(result, "Force Refresh Complete");
    assert_output_contains!(result, "3 skills refreshed");
}

#[test]
fn json_update_streams_change_events() {
    let env = installed_env();
    env.write_factory_file("tech-lead/SKILL.md", "# Tech Lead\n\nReview nothing.\n");

    let result = env.run(&["update", "--json", "--yes"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let events = result.json_events();
    let changes = events
        .iter()
        .find(|e| e["event"] == "changes")
        .expect("changes event");
    assert_eq!(changes["unit"], "tech-lead");
    assert_eq!(changes["files"][0]["path"], "SKILL.md");
    assert_eq!(changes["files"][0]["kind"], "modified");

    assert!(events
        .iter()
        .any(|e| e["event"] == "applied" && e["unit"] == "tech-lead"));
    assert!(events.iter().any(|e| e["event"] == "rules_synced"));

    let last = events.last().expect("events");
    assert_eq!(last["event"], "complete");
    assert_eq!(last["result"]["updated"][0], "tech-lead");
}
